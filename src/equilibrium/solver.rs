//!
//! All-or-nothing best-response iteration
//!
//! Starting from `D` on every link, each round
//!
//! 1. evaluates the travel time of every link at its current flow,
//! 2. appends those times to the history,
//! 3. puts `D` on every link whose time equals the round minimum and `0`
//!    elsewhere,
//! 4. stops once `max_e |f(e) - D| < tolerance`.
//!
//! The stopping rule measures the distance to the initial all-`D` flow, not the
//! change since the previous round, so a run whose winners keep alternating
//! ends as `Exhausted` rather than `Converged`.
//!
use super::cost::CostModel;
use super::error::{Error, Result};
use super::flow::{Flow, History};
use super::flow_rate::FlowRateLike;
use itertools::Itertools; // for join
use log::{debug, info, trace, warn};
use serde::Serialize;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// demand unit `D` of an `f64` run
pub const DEFAULT_DEMAND: f64 = 10.0;

/// Run parameters of the solver
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverConfig<F: FlowRateLike> {
    max_iterations: usize,
    tolerance: f64,
    demand: F,
}

impl<F: FlowRateLike> SolverConfig<F> {
    ///
    /// `max_iterations = 0` is allowed and runs no iteration at all.
    /// `tolerance` must be a non-negative number.
    ///
    pub fn new(max_iterations: usize, tolerance: f64) -> Result<SolverConfig<F>> {
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(Error::InvalidTolerance(tolerance));
        }
        Ok(SolverConfig {
            max_iterations,
            tolerance,
            demand: F::default_demand(),
        })
    }
    /// replace the demand unit `D`; it must be positive and finite
    pub fn with_demand(mut self, demand: F) -> Result<SolverConfig<F>> {
        let d = demand.to_f64();
        if !d.is_finite() || d <= 0.0 {
            return Err(Error::InvalidDemand(d));
        }
        self.demand = demand;
        Ok(self)
    }
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
    pub fn demand(&self) -> F {
        self.demand
    }
}

impl<F: FlowRateLike> Default for SolverConfig<F> {
    fn default() -> Self {
        SolverConfig {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            demand: F::default_demand(),
        }
    }
}

/// How the loop ended. A failed run is the `Err` of `solve`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// the stopping rule fired after this (1-based) iteration
    Converged { iteration: usize },
    /// `max_iterations` rounds ran without the stopping rule firing
    Exhausted { iterations: usize },
}

impl Termination {
    /// number of iterations actually executed
    pub fn iterations(&self) -> usize {
        match *self {
            Termination::Converged { iteration } => iteration,
            Termination::Exhausted { iterations } => iterations,
        }
    }
    pub fn is_converged(&self) -> bool {
        matches!(self, Termination::Converged { .. })
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Converged { iteration } => {
                write!(f, "converged after {} iterations", iteration)
            }
            Termination::Exhausted { iterations } => {
                write!(f, "not converged after {} iterations", iterations)
            }
        }
    }
}

/// Result of one solver run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibrium<F: FlowRateLike> {
    /// flow after the last executed iteration
    pub flow: Flow<F>,
    /// per-link travel times, one per executed iteration
    pub history: History,
    /// flow after each executed iteration
    pub trace: Vec<Flow<F>>,
    pub termination: Termination,
}

///
/// Drives the all-or-nothing iteration over a `CostModel`.
///
#[derive(Debug, Clone, Default)]
pub struct EquilibriumSolver<F: FlowRateLike> {
    config: SolverConfig<F>,
}

impl<F: FlowRateLike> EquilibriumSolver<F> {
    pub fn new(config: SolverConfig<F>) -> EquilibriumSolver<F> {
        EquilibriumSolver { config }
    }
    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    ///
    /// Run the iteration to convergence or `max_iterations`.
    ///
    /// Any cost evaluation error aborts the run; nothing partial is returned.
    ///
    pub fn solve(&self, model: &CostModel) -> Result<Equilibrium<F>> {
        let demand = self.config.demand;
        let mut flow = Flow::constant(model, demand);
        let mut history = History::new(model);
        let mut trace = Vec::new();

        for iteration in 1..=self.config.max_iterations {
            let times = flow.travel_times(model)?;
            for (link, &time) in times.iter() {
                history.push(link, time)?;
            }

            let min_time = times.values().copied().fold(f64::INFINITY, f64::min);
            for (link, &time) in times.iter() {
                let f = if time == min_time { demand } else { F::zero() };
                trace!("iteration {}: {} t={} -> f={}", iteration, link, time, f);
                flow.set(link, f)?;
            }
            debug!(
                "iteration {}: min time {} on [{}]",
                iteration,
                min_time,
                flow.links_with(demand).join(",")
            );
            trace.push(flow.clone());

            let deviation = flow.max_deviation_from(demand).unwrap_or(0.0);
            if deviation < self.config.tolerance {
                info!("converged after {} iterations", iteration);
                return Ok(Equilibrium {
                    flow,
                    history,
                    trace,
                    termination: Termination::Converged { iteration },
                });
            }
        }

        warn!(
            "not converged within {} iterations",
            self.config.max_iterations
        );
        Ok(Equilibrium {
            flow,
            history,
            trace,
            termination: Termination::Exhausted {
                iterations: self.config.max_iterations,
            },
        })
    }
}
