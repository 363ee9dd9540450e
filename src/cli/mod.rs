//! # Command-Line Interface
//!
//! Turns process arguments into option writes, then reports on the
//! configured registry.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `show` | Every option with its shape and value |
//! | `get <option>` | One option by name |
//! | `strategies` | Resolved splitting and bound tightening strategies |
//!
//! Solver flags (`--num-workers`, `--split-strategy`, `--milp-tightening`,
//! ...) are accepted before or after the command. `--help` lists them all.
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) to log every option write:
//! ```bash
//! solver-opts --verbose --num-workers 4 show
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod args;
mod output;
mod show;

pub use app::{Cli, Commands, run};
pub use args::SolverArgs;
pub use output::{Output, OutputFormat};
