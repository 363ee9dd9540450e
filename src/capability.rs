//! Optional backend availability

/// Returns true when the crate is built with the LP/MILP backend
/// (the `gurobi` cargo feature).
pub const fn gurobi_enabled() -> bool {
    cfg!(feature = "gurobi")
}
