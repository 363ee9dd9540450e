//! Typed heterogeneous option store
//!
//! All options live in one map from [`OptionId`] to [`OptionValue`]. Typed
//! accessors check both the id's declared shape and the stored variant, so
//! an id can never silently hold a value of the wrong shape.
//!
//! Structured options have two update disciplines:
//! - bound tables and flag table lists are **replaced** wholesale
//! - flag tables and index tables are **merged** entry by entry

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{
    BoundTable, FlagTable, FlagTableList, IndexTable, OptionId, OptionValue, Shape,
};

#[derive(Debug, Error, PartialEq)]
pub enum OptionError {
    #[error("Option '{0}' has no value")]
    Unset(OptionId),

    #[error("Option '{id}' holds {found} values, not {expected}")]
    ShapeMismatch {
        id: OptionId,
        expected: Shape,
        found: Shape,
    },
}

/// Map of option values keyed by id
#[derive(Debug, Default)]
pub struct OptionStore {
    values: HashMap<OptionId, OptionValue>,
}

macro_rules! scalar_accessors {
    ($get:ident, $set:ident, $variant:ident, $ty:ty) => {
        pub fn $get(&self, id: OptionId) -> Result<$ty, OptionError> {
            match self.lookup(id, Shape::$variant)? {
                OptionValue::$variant(v) => Ok(*v),
                other => Err(mismatch(id, Shape::$variant, other.shape())),
            }
        }

        pub fn $set(&mut self, id: OptionId, value: $ty) -> Result<(), OptionError> {
            self.set(id, OptionValue::$variant(value))
        }
    };
}

impl OptionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, id: OptionId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns the raw value for an id, whatever its shape
    pub fn get(&self, id: OptionId) -> Result<&OptionValue, OptionError> {
        self.values.get(&id).ok_or(OptionError::Unset(id))
    }

    /// Overwrites (or creates) the entry for `id`.
    ///
    /// Fails if the value's shape differs from the id's declared shape.
    pub fn set(&mut self, id: OptionId, value: OptionValue) -> Result<(), OptionError> {
        if value.shape() != id.shape() {
            return Err(mismatch(id, id.shape(), value.shape()));
        }
        self.values.insert(id, value);
        Ok(())
    }

    /// Iterates over the stored values in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (OptionId, &OptionValue)> + '_ {
        OptionId::ALL
            .into_iter()
            .filter_map(move |id| self.values.get(&id).map(|value| (id, value)))
    }

    scalar_accessors!(bool, set_bool, Bool, bool);
    scalar_accessors!(int, set_int, Int, i32);
    scalar_accessors!(float, set_float, Float, f64);

    pub fn text(&self, id: OptionId) -> Result<&str, OptionError> {
        match self.lookup(id, Shape::Text)? {
            OptionValue::Text(v) => Ok(v.as_str()),
            other => Err(mismatch(id, Shape::Text, other.shape())),
        }
    }

    pub fn set_text(&mut self, id: OptionId, value: impl Into<String>) -> Result<(), OptionError> {
        self.set(id, OptionValue::Text(value.into()))
    }

    pub fn bound_table(&self, id: OptionId) -> Result<&BoundTable, OptionError> {
        match self.lookup(id, Shape::BoundTable)? {
            OptionValue::BoundTable(v) => Ok(v),
            other => Err(mismatch(id, Shape::BoundTable, other.shape())),
        }
    }

    pub fn flag_table(&self, id: OptionId) -> Result<&FlagTable, OptionError> {
        match self.lookup(id, Shape::FlagTable)? {
            OptionValue::FlagTable(v) => Ok(v),
            other => Err(mismatch(id, Shape::FlagTable, other.shape())),
        }
    }

    pub fn index_table(&self, id: OptionId) -> Result<&IndexTable, OptionError> {
        match self.lookup(id, Shape::IndexTable)? {
            OptionValue::IndexTable(v) => Ok(v),
            other => Err(mismatch(id, Shape::IndexTable, other.shape())),
        }
    }

    pub fn flag_table_list(&self, id: OptionId) -> Result<&FlagTableList, OptionError> {
        match self.lookup(id, Shape::FlagTableList)? {
            OptionValue::FlagTableList(v) => Ok(v),
            other => Err(mismatch(id, Shape::FlagTableList, other.shape())),
        }
    }

    /// Clears the bound table and repopulates it from `entries`
    pub fn replace_bound_table(
        &mut self,
        id: OptionId,
        entries: impl IntoIterator<Item = (u32, (u32, u32))>,
    ) -> Result<(), OptionError> {
        self.set(id, OptionValue::BoundTable(entries.into_iter().collect()))
    }

    /// Clears the flag table list and repopulates it from `tables`
    pub fn replace_flag_table_list(
        &mut self,
        id: OptionId,
        tables: impl IntoIterator<Item = FlagTable>,
    ) -> Result<(), OptionError> {
        self.set(id, OptionValue::FlagTableList(tables.into_iter().collect()))
    }

    /// Inserts `entries` into the flag table, keeping entries with other keys
    pub fn merge_flag_table(
        &mut self,
        id: OptionId,
        entries: impl IntoIterator<Item = (u32, bool)>,
    ) -> Result<(), OptionError> {
        match self.entry_mut(id, Shape::FlagTable)? {
            OptionValue::FlagTable(table) => {
                table.extend(entries);
                Ok(())
            }
            other => Err(mismatch(id, Shape::FlagTable, other.shape())),
        }
    }

    /// Inserts `entries` into the index table, keeping entries with other keys
    pub fn merge_index_table(
        &mut self,
        id: OptionId,
        entries: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<(), OptionError> {
        match self.entry_mut(id, Shape::IndexTable)? {
            OptionValue::IndexTable(table) => {
                table.extend(entries);
                Ok(())
            }
            other => Err(mismatch(id, Shape::IndexTable, other.shape())),
        }
    }

    fn lookup(&self, id: OptionId, shape: Shape) -> Result<&OptionValue, OptionError> {
        expect_shape(id, shape)?;
        self.get(id)
    }

    /// Merge target for `id`, created empty if the id was never set
    fn entry_mut(&mut self, id: OptionId, shape: Shape) -> Result<&mut OptionValue, OptionError> {
        expect_shape(id, shape)?;
        Ok(self
            .values
            .entry(id)
            .or_insert_with(|| OptionValue::empty(shape)))
    }
}

/// Checks that `id` is declared with the requested shape
fn expect_shape(id: OptionId, shape: Shape) -> Result<(), OptionError> {
    if id.shape() == shape {
        Ok(())
    } else {
        Err(mismatch(id, shape, id.shape()))
    }
}

fn mismatch(id: OptionId, expected: Shape, found: Shape) -> OptionError {
    OptionError::ShapeMismatch {
        id,
        expected,
        found,
    }
}
