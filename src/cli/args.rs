//! Solver command-line flags
//!
//! Each flag writes one option. Flags that are not given leave the default
//! untouched, and strategy strings are stored as typed: resolution falls
//! back on anything it does not recognize.

use clap::Args;

use super::output::Output;
use crate::domain::{OptionId, OptionValue};
use crate::storage::{OptionError, Options};

#[derive(Args, Debug, Default)]
pub struct SolverArgs {
    /// Neural network file
    #[arg(long, global = true, value_name = "PATH")]
    pub input: Option<String>,

    /// Property file
    #[arg(long, global = true, value_name = "PATH")]
    pub property: Option<String>,

    /// Input query file
    #[arg(long, global = true, value_name = "PATH")]
    pub query: Option<String>,

    /// Summary file
    #[arg(long, global = true, value_name = "PATH")]
    pub summary_file: Option<String>,

    /// Dump the input query to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub query_dump_file: Option<String>,

    /// Number of workers
    #[arg(long, global = true)]
    pub num_workers: Option<i32>,

    /// Use divide-and-conquer solving
    #[arg(long, global = true)]
    pub dnc: bool,

    /// Number of initial divides
    #[arg(long, global = true)]
    pub initial_divides: Option<i32>,

    /// Number of divides when a sub-query times out
    #[arg(long, global = true)]
    pub num_online_divides: Option<i32>,

    /// Initial timeout per sub-query, in seconds
    #[arg(long, global = true)]
    pub initial_timeout: Option<i32>,

    /// Global timeout in seconds (0 means none)
    #[arg(long, global = true)]
    pub timeout: Option<i32>,

    /// Timeout growth factor for divided sub-queries
    #[arg(long, global = true)]
    pub timeout_factor: Option<f64>,

    /// Solver verbosity level
    #[arg(long, global = true)]
    pub verbosity: Option<i32>,

    /// Violations of one constraint before splitting on it
    #[arg(long, global = true)]
    pub constraint_violation_threshold: Option<i32>,

    /// Splitting strategy (polarity, earliest-relu, relu-violation, largest-interval)
    #[arg(long, global = true)]
    pub split_strategy: Option<String>,

    /// Split-and-conquer splitting strategy (polarity, largest-interval)
    #[arg(long, global = true)]
    pub snc_split_strategy: Option<String>,

    /// Bound tightening through the MILP backend (lp, lp-inc, milp, milp-inc, iter-prop, none)
    #[arg(long, global = true)]
    pub milp_tightening: Option<String>,

    /// Per-neuron timeout for the MILP solver, in seconds
    #[arg(long, global = true)]
    pub milp_timeout: Option<f64>,

    /// Tolerance used when comparing bounds during preprocessing
    #[arg(long, global = true)]
    pub preprocessor_bound_tolerance: Option<f64>,

    /// Restore tree states when backtracking
    #[arg(long, global = true)]
    pub restore_tree_states: bool,

    /// Use iterative propagation for bound tightening
    #[arg(long, global = true)]
    pub iterative_propagation: bool,

    /// Solve the query as a MILP
    #[arg(long, global = true)]
    pub milp: bool,

    /// Add auxiliary equations for piecewise-linear constraints
    #[arg(long, global = true)]
    pub add_aux_equations: bool,
}

impl SolverArgs {
    /// Options set by the given flags, in catalog order
    pub fn assignments(&self) -> Vec<(OptionId, OptionValue)> {
        use OptionId::*;

        let mut assignments = Vec::new();

        for (id, set) in [
            (DncMode, self.dnc),
            (PreprocessorPlConstraintsAddAuxEquations, self.add_aux_equations),
            (RestoreTreeStates, self.restore_tree_states),
            (IterativePropagation, self.iterative_propagation),
            (SolveWithMilp, self.milp),
        ] {
            if set {
                assignments.push((id, OptionValue::Bool(true)));
            }
        }

        for (id, value) in [
            (NumWorkers, self.num_workers),
            (NumInitialDivides, self.initial_divides),
            (NumOnlineDivides, self.num_online_divides),
            (InitialTimeout, self.initial_timeout),
            (Verbosity, self.verbosity),
            (Timeout, self.timeout),
            (ConstraintViolationThreshold, self.constraint_violation_threshold),
        ] {
            if let Some(v) = value {
                assignments.push((id, OptionValue::Int(v)));
            }
        }

        for (id, value) in [
            (TimeoutFactor, self.timeout_factor),
            (MilpSolverTimeout, self.milp_timeout),
            (PreprocessorBoundTolerance, self.preprocessor_bound_tolerance),
        ] {
            if let Some(v) = value {
                assignments.push((id, OptionValue::Float(v)));
            }
        }

        for (id, value) in [
            (InputFilePath, &self.input),
            (PropertyFilePath, &self.property),
            (InputQueryFilePath, &self.query),
            (SummaryFile, &self.summary_file),
            (SplittingStrategy, &self.split_strategy),
            (SncSplittingStrategy, &self.snc_split_strategy),
            (QueryDumpFile, &self.query_dump_file),
            (MilpSolverBoundTighteningType, &self.milp_tightening),
        ] {
            if let Some(v) = value {
                assignments.push((id, OptionValue::Text(v.clone())));
            }
        }

        assignments
    }

    /// Writes the given flags into `options`
    pub fn apply(&self, options: &mut Options, output: &Output) -> Result<(), OptionError> {
        for (id, value) in self.assignments() {
            output.verbose_ctx("parse", &format!("set {} = {}", id, value));
            options.set(id, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, OutputFormat};
    use crate::domain::{DivideStrategy, Shape};
    use clap::{CommandFactory, Parser};

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["solver-opts"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn quiet() -> Output {
        Output::new(OutputFormat::Text, false)
    }

    #[test]
    fn every_scalar_option_has_a_flag() {
        let command = Cli::command();
        let longs: Vec<_> = command
            .get_arguments()
            .filter_map(|arg| arg.get_long())
            .collect();

        for id in OptionId::ALL.iter().filter(|id| !id.shape().is_structured()) {
            assert!(longs.contains(&id.name()), "missing flag --{}", id);
        }
    }

    #[test]
    fn no_flags_no_assignments() {
        let cli = parse(&["show"]);
        assert!(cli.solver.assignments().is_empty());
    }

    #[test]
    fn flags_apply_to_options() {
        let cli = parse(&[
            "--num-workers",
            "8",
            "--dnc",
            "--timeout-factor",
            "2.5",
            "--split-strategy",
            "earliest-relu",
            "--input",
            "net.nnet",
            "show",
        ]);

        let mut options = Options::new();
        cli.solver.apply(&mut options, &quiet()).unwrap();

        assert_eq!(options.int(OptionId::NumWorkers).unwrap(), 8);
        assert!(options.bool(OptionId::DncMode).unwrap());
        assert_eq!(options.float(OptionId::TimeoutFactor).unwrap(), 2.5);
        assert_eq!(options.text(OptionId::InputFilePath).unwrap(), "net.nnet");
        assert_eq!(options.divide_strategy(), DivideStrategy::EarliestRelu);

        // Untouched options keep their defaults
        assert_eq!(options.int(OptionId::NumOnlineDivides).unwrap(), 2);
        assert!(!options.bool(OptionId::SolveWithMilp).unwrap());
    }

    #[test]
    fn flags_after_subcommand() {
        let cli = parse(&["strategies", "--snc-split-strategy", "polarity"]);
        let assignments = cli.solver.assignments();
        assert_eq!(
            assignments,
            vec![(OptionId::SncSplittingStrategy, OptionValue::from("polarity"))]
        );
    }

    #[test]
    fn unrecognized_strategy_is_stored_as_given() {
        let cli = parse(&["--split-strategy", "foo", "show"]);
        let mut options = Options::new();
        cli.solver.apply(&mut options, &quiet()).unwrap();

        assert_eq!(options.text(OptionId::SplittingStrategy).unwrap(), "foo");
        assert_eq!(options.divide_strategy(), DivideStrategy::Auto);
    }

    #[test]
    fn assignments_match_declared_shapes() {
        let cli = parse(&[
            "--add-aux-equations",
            "--verbosity",
            "0",
            "--milp-timeout",
            "3",
            "--query-dump-file",
            "q.txt",
            "show",
        ]);

        let shapes: Vec<_> = cli
            .solver
            .assignments()
            .into_iter()
            .map(|(id, value)| (id.shape(), value.shape()))
            .collect();
        assert_eq!(
            shapes,
            vec![
                (Shape::Bool, Shape::Bool),
                (Shape::Int, Shape::Int),
                (Shape::Float, Shape::Float),
                (Shape::Text, Shape::Text),
            ]
        );
    }
}
