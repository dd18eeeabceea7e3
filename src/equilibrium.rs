pub mod config;
pub mod cost;
pub mod error;
pub mod flow;
pub mod flow_rate;
pub mod link;
#[cfg(test)]
pub mod mocks;
pub mod report;
pub mod solver;
pub mod utils;

pub use config::NetworkConfig;
pub use cost::{AffineCost, Cost, CostModel, LinkCost, LinkEdge};
pub use error::{Error, Result};
pub use flow::{Flow, History};
pub use flow_rate::FlowRateLike;
pub use link::LinkId;
pub use solver::{Equilibrium, EquilibriumSolver, SolverConfig, Termination};

//
// public functions
//

///
/// Find the all-or-nothing equilibrium of the CostModel
///
pub fn find_equilibrium<F: FlowRateLike>(
    model: &CostModel,
    config: SolverConfig<F>,
) -> Result<Equilibrium<F>> {
    EquilibriumSolver::new(config).solve(model)
}

///
/// Find the equilibrium flow with demand unit `D = 10`, returning only the final
/// flow and the per-link travel time history.
///
pub fn find_equilibrium_flow(
    model: &CostModel,
    max_iterations: usize,
    tolerance: f64,
) -> Result<(Flow<f64>, History)> {
    let config = SolverConfig::new(max_iterations, tolerance)?;
    let eq = find_equilibrium(model, config)?;
    Ok((eq.flow, eq.history))
}
