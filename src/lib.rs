//! Solver Options - the option registry of a numerical solver engine
//!
//! Every runtime-tunable parameter (worker counts, timeouts, splitting
//! strategies, tolerances, auxiliary bound tables) lives in one typed
//! registry, and string-valued strategies are resolved into enums from it.

pub mod domain;
pub mod storage;
pub mod capability;
pub mod cli;

pub use domain::{BoundTighteningMode, DivideStrategy, OptionId, OptionValue, Shape, SncDivideStrategy};
pub use storage::{OptionError, OptionStore, Options};
