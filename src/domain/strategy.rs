//! Strategy enumerations derived from text options
//!
//! Each strategy is resolved from its raw option string by an exact-match
//! table. Resolution is total: unrecognized strings map to a fallback
//! variant instead of failing.

use serde::Serialize;
use std::fmt;

/// Heuristic used to split the search space at each decision point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DivideStrategy {
    Polarity,
    EarliestRelu,
    ReluViolation,
    LargestInterval,
    /// Let the engine choose
    #[default]
    Auto,
}

impl DivideStrategy {
    /// Resolves a `split-strategy` value; anything unrecognized is `Auto`
    pub fn resolve(value: &str) -> Self {
        match value {
            "polarity" => DivideStrategy::Polarity,
            "earliest-relu" => DivideStrategy::EarliestRelu,
            "relu-violation" => DivideStrategy::ReluViolation,
            "largest-interval" => DivideStrategy::LargestInterval,
            _ => DivideStrategy::Auto,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DivideStrategy::Polarity => "polarity",
            DivideStrategy::EarliestRelu => "earliest-relu",
            DivideStrategy::ReluViolation => "relu-violation",
            DivideStrategy::LargestInterval => "largest-interval",
            DivideStrategy::Auto => "auto",
        }
    }
}

/// Splitting heuristic for split-and-conquer parallel solving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SncDivideStrategy {
    Polarity,
    LargestInterval,
    #[default]
    Auto,
}

impl SncDivideStrategy {
    /// Resolves a `snc-split-strategy` value; anything unrecognized is `Auto`
    pub fn resolve(value: &str) -> Self {
        match value {
            "polarity" => SncDivideStrategy::Polarity,
            "largest-interval" => SncDivideStrategy::LargestInterval,
            _ => SncDivideStrategy::Auto,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SncDivideStrategy::Polarity => "polarity",
            SncDivideStrategy::LargestInterval => "largest-interval",
            SncDivideStrategy::Auto => "auto",
        }
    }
}

/// How bounds are tightened through the LP/MILP backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundTighteningMode {
    #[serde(rename = "lp")]
    LpRelaxation,
    #[serde(rename = "lp-inc")]
    LpRelaxationIncremental,
    #[serde(rename = "milp")]
    MilpEncoding,
    #[serde(rename = "milp-inc")]
    MilpEncodingIncremental,
    #[serde(rename = "iter-prop")]
    IterativePropagation,
    None,
}

impl BoundTighteningMode {
    /// Resolves a `milp-tightening` value.
    ///
    /// Without the backend the mode is always `None` and `value` is ignored.
    /// With it, unrecognized values (including the empty string) fall back
    /// to `LpRelaxation`, not to `None`.
    pub fn resolve(value: &str, gurobi_enabled: bool) -> Self {
        if !gurobi_enabled {
            return BoundTighteningMode::None;
        }

        match value {
            "lp" => BoundTighteningMode::LpRelaxation,
            "lp-inc" => BoundTighteningMode::LpRelaxationIncremental,
            "milp" => BoundTighteningMode::MilpEncoding,
            "milp-inc" => BoundTighteningMode::MilpEncodingIncremental,
            "iter-prop" => BoundTighteningMode::IterativePropagation,
            "none" => BoundTighteningMode::None,
            _ => BoundTighteningMode::LpRelaxation,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundTighteningMode::LpRelaxation => "lp",
            BoundTighteningMode::LpRelaxationIncremental => "lp-inc",
            BoundTighteningMode::MilpEncoding => "milp",
            BoundTighteningMode::MilpEncodingIncremental => "milp-inc",
            BoundTighteningMode::IterativePropagation => "iter-prop",
            BoundTighteningMode::None => "none",
        }
    }
}

impl fmt::Display for DivideStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SncDivideStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BoundTighteningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
