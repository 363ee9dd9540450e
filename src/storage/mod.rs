//! # Option Storage
//!
//! Holds solver options in memory. Nothing here is persisted.
//!
//! ## Layers
//!
//! | Type | Role |
//! |------|------|
//! | [`OptionStore`] | One map of id to tagged value, with shape-checked accessors |
//! | [`Options`] | Store with every default written at construction, plus strategy resolution |
//! | [`global()`] | Lazily created, process-wide [`Options`] |
//!
//! ## Structured Updates
//!
//! | Shape | Update | Discipline |
//! |-------|--------|------------|
//! | Bound table | `replace_bound_table` | Replace |
//! | Flag table list | `replace_flag_table_list` | Replace |
//! | Flag table | `merge_flag_table` | Merge |
//! | Index table | `merge_index_table` | Merge |
//!
//! ## Usage Phases
//!
//! All writes happen while configuring (parsing arguments, overrides).
//! After that the registry is only read, possibly from many threads.

mod store;
mod options;
mod global;

pub use store::{OptionError, OptionStore};
pub use options::{Options, DEFAULT_EPSILON_FOR_COMPARISONS};
pub use global::{global, read_global, write_global};
