//! Commands that read the configured registry

use anyhow::Result;

use super::output::Output;
use crate::domain::OptionId;
use crate::storage::Options;

/// Prints every option with its shape and current value
pub fn all(options: &Options, output: &Output) {
    if output.is_json() {
        let entries: Vec<_> = options
            .store()
            .iter()
            .map(|(id, value)| {
                serde_json::json!({
                    "name": id,
                    "shape": id.shape(),
                    "value": value,
                })
            })
            .collect();
        output.data(&serde_json::json!({ "options": entries }));
    } else {
        for (id, value) in options.store().iter() {
            let rendered = value.to_string();
            output.row(&[id.name(), id.shape().as_str(), rendered.as_str()]);
        }
    }
}

/// Prints the current value of one option
pub fn one(options: &Options, output: &Output, id: OptionId) -> Result<()> {
    let value = options.get(id)?;
    output.verbose_ctx("get", &format!("{} is a {} option", id, id.shape()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "name": id,
            "shape": id.shape(),
            "value": value,
        }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

/// Prints the strategies resolved from the current text options
pub fn strategies(options: &Options, output: &Output, gurobi_enabled: bool) {
    let divide = options.divide_strategy();
    let snc_divide = options.snc_divide_strategy();
    let tightening = options.bound_tightening_mode(gurobi_enabled);

    if !gurobi_enabled {
        output.verbose_ctx("strategies", "MILP backend unavailable, bound tightening disabled");
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "split_strategy": divide,
            "snc_split_strategy": snc_divide,
            "milp_tightening": tightening,
            "gurobi_enabled": gurobi_enabled,
        }));
    } else {
        output.row(&[OptionId::SplittingStrategy.name(), divide.as_str()]);
        output.row(&[OptionId::SncSplittingStrategy.name(), snc_divide.as_str()]);
        output.row(&[OptionId::MilpSolverBoundTighteningType.name(), tightening.as_str()]);
    }
}
