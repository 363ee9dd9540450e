//! Domain types for the option registry
//!
//! Identifiers, value shapes and strategy resolution, without any I/O or
//! shared state.

mod id;
mod value;
mod strategy;

pub use id::{IdError, OptionId, Shape};
pub use value::{BoundTable, FlagTable, FlagTableList, IndexTable, OptionValue};
pub use strategy::{BoundTighteningMode, DivideStrategy, SncDivideStrategy};
