//! Option identifier catalog
//!
//! Every configurable parameter has one [`OptionId`] and exactly one
//! [`Shape`]. Ids are addressed on the command line by a stable kebab-case
//! name (e.g. `num-workers`, `split-strategy`, `gamma-abstract`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Unknown option '{0}'")]
    UnknownOption(String),
}

/// The shape of value an option holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Bool,
    Int,
    Float,
    Text,
    /// Inner index to a (low, high) bound pair
    BoundTable,
    /// Inner index to a boolean flag
    FlagTable,
    /// Inner index to another index
    IndexTable,
    /// Ordered list of flag tables
    FlagTableList,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Bool => "bool",
            Shape::Int => "int",
            Shape::Float => "float",
            Shape::Text => "text",
            Shape::BoundTable => "bound-table",
            Shape::FlagTable => "flag-table",
            Shape::IndexTable => "index-table",
            Shape::FlagTableList => "flag-table-list",
        }
    }

    /// Returns true for the container shapes keyed by a single umbrella id
    pub fn is_structured(&self) -> bool {
        !matches!(self, Shape::Bool | Shape::Int | Shape::Float | Shape::Text)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a configurable solver parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OptionId {
    // Bool
    DncMode,
    PreprocessorPlConstraintsAddAuxEquations,
    RestoreTreeStates,
    IterativePropagation,
    SolveWithMilp,

    // Int
    NumWorkers,
    NumInitialDivides,
    NumOnlineDivides,
    InitialTimeout,
    Verbosity,
    Timeout,
    ConstraintViolationThreshold,

    // Float
    TimeoutFactor,
    MilpSolverTimeout,
    PreprocessorBoundTolerance,

    // Text
    InputFilePath,
    PropertyFilePath,
    InputQueryFilePath,
    SummaryFile,
    SplittingStrategy,
    SncSplittingStrategy,
    QueryDumpFile,
    MilpSolverBoundTighteningType,

    // Structured
    GammaAbstract,
    VarIndexToPos,
    VarIndexToInc,
    PostVarIndices,
    Gamma,
}

impl OptionId {
    /// The full catalog in declaration order
    pub const ALL: [OptionId; 28] = [
        OptionId::DncMode,
        OptionId::PreprocessorPlConstraintsAddAuxEquations,
        OptionId::RestoreTreeStates,
        OptionId::IterativePropagation,
        OptionId::SolveWithMilp,
        OptionId::NumWorkers,
        OptionId::NumInitialDivides,
        OptionId::NumOnlineDivides,
        OptionId::InitialTimeout,
        OptionId::Verbosity,
        OptionId::Timeout,
        OptionId::ConstraintViolationThreshold,
        OptionId::TimeoutFactor,
        OptionId::MilpSolverTimeout,
        OptionId::PreprocessorBoundTolerance,
        OptionId::InputFilePath,
        OptionId::PropertyFilePath,
        OptionId::InputQueryFilePath,
        OptionId::SummaryFile,
        OptionId::SplittingStrategy,
        OptionId::SncSplittingStrategy,
        OptionId::QueryDumpFile,
        OptionId::MilpSolverBoundTighteningType,
        OptionId::GammaAbstract,
        OptionId::VarIndexToPos,
        OptionId::VarIndexToInc,
        OptionId::PostVarIndices,
        OptionId::Gamma,
    ];

    /// Returns the shape this id is declared with
    pub fn shape(&self) -> Shape {
        use OptionId::*;

        match self {
            DncMode
            | PreprocessorPlConstraintsAddAuxEquations
            | RestoreTreeStates
            | IterativePropagation
            | SolveWithMilp => Shape::Bool,

            NumWorkers
            | NumInitialDivides
            | NumOnlineDivides
            | InitialTimeout
            | Verbosity
            | Timeout
            | ConstraintViolationThreshold => Shape::Int,

            TimeoutFactor | MilpSolverTimeout | PreprocessorBoundTolerance => Shape::Float,

            InputFilePath
            | PropertyFilePath
            | InputQueryFilePath
            | SummaryFile
            | SplittingStrategy
            | SncSplittingStrategy
            | QueryDumpFile
            | MilpSolverBoundTighteningType => Shape::Text,

            GammaAbstract => Shape::BoundTable,
            VarIndexToPos | VarIndexToInc => Shape::FlagTable,
            PostVarIndices => Shape::IndexTable,
            Gamma => Shape::FlagTableList,
        }
    }

    /// Returns the kebab-case name used on the command line
    pub fn name(&self) -> &'static str {
        use OptionId::*;

        match self {
            DncMode => "dnc",
            PreprocessorPlConstraintsAddAuxEquations => "add-aux-equations",
            RestoreTreeStates => "restore-tree-states",
            IterativePropagation => "iterative-propagation",
            SolveWithMilp => "milp",
            NumWorkers => "num-workers",
            NumInitialDivides => "initial-divides",
            NumOnlineDivides => "num-online-divides",
            InitialTimeout => "initial-timeout",
            Verbosity => "verbosity",
            Timeout => "timeout",
            ConstraintViolationThreshold => "constraint-violation-threshold",
            TimeoutFactor => "timeout-factor",
            MilpSolverTimeout => "milp-timeout",
            PreprocessorBoundTolerance => "preprocessor-bound-tolerance",
            InputFilePath => "input",
            PropertyFilePath => "property",
            InputQueryFilePath => "query",
            SummaryFile => "summary-file",
            SplittingStrategy => "split-strategy",
            SncSplittingStrategy => "snc-split-strategy",
            QueryDumpFile => "query-dump-file",
            MilpSolverBoundTighteningType => "milp-tightening",
            GammaAbstract => "gamma-abstract",
            VarIndexToPos => "var-index-to-pos",
            VarIndexToInc => "var-index-to-inc",
            PostVarIndices => "post-var-indices",
            Gamma => "gamma",
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OptionId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| IdError::UnknownOption(s.to_string()))
    }
}

impl TryFrom<String> for OptionId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionId> for String {
    fn from(id: OptionId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let names: HashSet<_> = OptionId::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(names.len(), OptionId::ALL.len());
    }

    #[test]
    fn parse_by_name() {
        for id in OptionId::ALL {
            assert_eq!(id.name().parse::<OptionId>().unwrap(), id);
        }
        assert_eq!(" num-workers ".parse::<OptionId>().unwrap(), OptionId::NumWorkers);
    }

    #[test]
    fn parse_unknown() {
        let err = "num_workers".parse::<OptionId>().unwrap_err();
        assert_eq!(err, IdError::UnknownOption("num_workers".to_string()));
    }

    #[test]
    fn shapes() {
        assert_eq!(OptionId::DncMode.shape(), Shape::Bool);
        assert_eq!(OptionId::Verbosity.shape(), Shape::Int);
        assert_eq!(OptionId::PreprocessorBoundTolerance.shape(), Shape::Float);
        assert_eq!(OptionId::MilpSolverBoundTighteningType.shape(), Shape::Text);
        assert_eq!(OptionId::GammaAbstract.shape(), Shape::BoundTable);
        assert_eq!(OptionId::VarIndexToPos.shape(), Shape::FlagTable);
        assert_eq!(OptionId::VarIndexToInc.shape(), Shape::FlagTable);
        assert_eq!(OptionId::PostVarIndices.shape(), Shape::IndexTable);
        assert_eq!(OptionId::Gamma.shape(), Shape::FlagTableList);
    }

    #[test]
    fn structured_shapes() {
        let structured: Vec<_> = OptionId::ALL
            .iter()
            .filter(|id| id.shape().is_structured())
            .collect();
        assert_eq!(structured.len(), 5);
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&OptionId::SncSplittingStrategy).unwrap();
        assert_eq!(json, "\"snc-split-strategy\"");

        let id: OptionId = serde_json::from_str("\"gamma\"").unwrap();
        assert_eq!(id, OptionId::Gamma);
    }
}
