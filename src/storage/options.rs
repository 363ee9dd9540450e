//! Solver options with defaults
//!
//! [`Options`] owns an [`OptionStore`] in which every catalog id already
//! holds its default. It is neither `Clone` nor `Copy`; share it by
//! reference (or through [`super::global`]) instead of duplicating it.
//!
//! ```compile_fail
//! use solver_options::storage::Options;
//!
//! let options = Options::new();
//! let copy = options.clone();
//! ```

use crate::domain::{
    BoundTable, BoundTighteningMode, DivideStrategy, FlagTable, FlagTableList, IndexTable,
    OptionId, OptionValue, SncDivideStrategy,
};

use super::store::{OptionError, OptionStore};

/// Default tolerance for floating point comparisons
pub const DEFAULT_EPSILON_FOR_COMPARISONS: f64 = 0.000_000_000_1;

/// The solver's option registry
#[derive(Debug)]
pub struct Options {
    store: OptionStore,
}

impl Options {
    /// Creates the registry with every default in place
    pub fn new() -> Self {
        Self {
            store: default_store(),
        }
    }

    /// Read-only view of the underlying store
    pub fn store(&self) -> &OptionStore {
        &self.store
    }

    pub fn get(&self, id: OptionId) -> Result<&OptionValue, OptionError> {
        self.store.get(id)
    }

    pub fn set(&mut self, id: OptionId, value: OptionValue) -> Result<(), OptionError> {
        self.store.set(id, value)
    }

    pub fn bool(&self, id: OptionId) -> Result<bool, OptionError> {
        self.store.bool(id)
    }

    pub fn int(&self, id: OptionId) -> Result<i32, OptionError> {
        self.store.int(id)
    }

    pub fn float(&self, id: OptionId) -> Result<f64, OptionError> {
        self.store.float(id)
    }

    pub fn text(&self, id: OptionId) -> Result<&str, OptionError> {
        self.store.text(id)
    }

    pub fn bound_table(&self, id: OptionId) -> Result<&BoundTable, OptionError> {
        self.store.bound_table(id)
    }

    pub fn flag_table(&self, id: OptionId) -> Result<&FlagTable, OptionError> {
        self.store.flag_table(id)
    }

    pub fn index_table(&self, id: OptionId) -> Result<&IndexTable, OptionError> {
        self.store.index_table(id)
    }

    pub fn flag_table_list(&self, id: OptionId) -> Result<&FlagTableList, OptionError> {
        self.store.flag_table_list(id)
    }

    pub fn set_bool(&mut self, id: OptionId, value: bool) -> Result<(), OptionError> {
        self.store.set_bool(id, value)
    }

    pub fn set_int(&mut self, id: OptionId, value: i32) -> Result<(), OptionError> {
        self.store.set_int(id, value)
    }

    pub fn set_float(&mut self, id: OptionId, value: f64) -> Result<(), OptionError> {
        self.store.set_float(id, value)
    }

    pub fn set_text(&mut self, id: OptionId, value: impl Into<String>) -> Result<(), OptionError> {
        self.store.set_text(id, value)
    }

    /// Replaces the whole bound table
    pub fn replace_bound_table(
        &mut self,
        id: OptionId,
        entries: impl IntoIterator<Item = (u32, (u32, u32))>,
    ) -> Result<(), OptionError> {
        self.store.replace_bound_table(id, entries)
    }

    /// Replaces the whole flag table list
    pub fn replace_flag_table_list(
        &mut self,
        id: OptionId,
        tables: impl IntoIterator<Item = FlagTable>,
    ) -> Result<(), OptionError> {
        self.store.replace_flag_table_list(id, tables)
    }

    /// Merges entries into a flag table
    pub fn merge_flag_table(
        &mut self,
        id: OptionId,
        entries: impl IntoIterator<Item = (u32, bool)>,
    ) -> Result<(), OptionError> {
        self.store.merge_flag_table(id, entries)
    }

    /// Merges entries into an index table
    pub fn merge_index_table(
        &mut self,
        id: OptionId,
        entries: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<(), OptionError> {
        self.store.merge_index_table(id, entries)
    }

    /// Partitioning strategy from `split-strategy`
    pub fn divide_strategy(&self) -> DivideStrategy {
        DivideStrategy::resolve(self.strategy_text(OptionId::SplittingStrategy))
    }

    /// Split-and-conquer partitioning strategy from `snc-split-strategy`
    pub fn snc_divide_strategy(&self) -> SncDivideStrategy {
        SncDivideStrategy::resolve(self.strategy_text(OptionId::SncSplittingStrategy))
    }

    /// Bound tightening mode from `milp-tightening`.
    ///
    /// `gurobi_enabled` reports whether the LP/MILP backend is available;
    /// without it the mode is always [`BoundTighteningMode::None`].
    pub fn bound_tightening_mode(&self, gurobi_enabled: bool) -> BoundTighteningMode {
        BoundTighteningMode::resolve(
            self.strategy_text(OptionId::MilpSolverBoundTighteningType),
            gurobi_enabled,
        )
    }

    // Strategy ids are text options and always defaulted, so the fallback
    // only mirrors what an empty value resolves to.
    fn strategy_text(&self, id: OptionId) -> &str {
        self.store.text(id).unwrap_or_default()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

fn default_store() -> OptionStore {
    use OptionId::*;

    let defaults = [
        // Bool
        (DncMode, OptionValue::Bool(false)),
        (PreprocessorPlConstraintsAddAuxEquations, OptionValue::Bool(false)),
        (RestoreTreeStates, OptionValue::Bool(false)),
        (IterativePropagation, OptionValue::Bool(false)),
        (SolveWithMilp, OptionValue::Bool(false)),
        // Int
        (NumWorkers, OptionValue::Int(1)),
        (NumInitialDivides, OptionValue::Int(0)),
        (NumOnlineDivides, OptionValue::Int(2)),
        (InitialTimeout, OptionValue::Int(5)),
        (Verbosity, OptionValue::Int(2)),
        (Timeout, OptionValue::Int(0)),
        (ConstraintViolationThreshold, OptionValue::Int(20)),
        // Float
        (TimeoutFactor, OptionValue::Float(1.5)),
        (MilpSolverTimeout, OptionValue::Float(1.0)),
        (PreprocessorBoundTolerance, OptionValue::Float(DEFAULT_EPSILON_FOR_COMPARISONS)),
        // Text
        (InputFilePath, OptionValue::from("")),
        (PropertyFilePath, OptionValue::from("")),
        (InputQueryFilePath, OptionValue::from("")),
        (SummaryFile, OptionValue::from("")),
        (SplittingStrategy, OptionValue::from("")),
        (SncSplittingStrategy, OptionValue::from("")),
        (QueryDumpFile, OptionValue::from("")),
        (MilpSolverBoundTighteningType, OptionValue::from("")),
        // Structured
        (GammaAbstract, OptionValue::BoundTable(BoundTable::new())),
        (VarIndexToPos, OptionValue::FlagTable(FlagTable::new())),
        (VarIndexToInc, OptionValue::FlagTable(FlagTable::new())),
        (PostVarIndices, OptionValue::IndexTable(IndexTable::new())),
        (Gamma, OptionValue::FlagTableList(FlagTableList::new())),
    ];

    let mut store = OptionStore::new();
    for (id, value) in defaults {
        // Every default above matches its id's declared shape
        if let Err(e) = store.set(id, value) {
            unreachable!("invalid default: {}", e);
        }
    }
    store
}
