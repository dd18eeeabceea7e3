//!
//! Link cost functions and the `CostModel`
//!
//! Every link `e` carries an affine travel time function
//!
//! ```text
//! t_e(f) = alpha_e + beta_e * f
//! ```
//!
//! `CostModel` is the immutable, ordered table of those functions.
//!
use super::error::{Error, Result};
use super::flow_rate::FlowRateLike;
use super::link::LinkId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Travel time (or generic cost) value
pub type Cost = f64;

/// Edge of the network whose cost depends on the flow on it.
pub trait LinkCost {
    /// travel time of the link when `flow` is on it
    fn travel_time<F: FlowRateLike>(&self, flow: F) -> Cost;
}

/// `t(f) = alpha + beta * f`
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffineCost {
    /// free-flow travel time
    pub alpha: Cost,
    /// marginal delay per unit flow
    pub beta: Cost,
}

impl AffineCost {
    pub fn new(alpha: Cost, beta: Cost) -> AffineCost {
        AffineCost { alpha, beta }
    }
    fn is_valid(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite() && self.alpha >= 0.0 && self.beta >= 0.0
    }
}

impl LinkCost for AffineCost {
    fn travel_time<F: FlowRateLike>(&self, flow: F) -> Cost {
        self.alpha + self.beta * flow.to_f64()
    }
}

impl std::fmt::Display for AffineCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}f", self.alpha, self.beta)
    }
}

/// One link of the network.
///
/// `endpoints` is only used for drawing; links without endpoints are treated
/// as parallel routes between a single origin and destination.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkEdge {
    pub id: LinkId,
    pub cost: AffineCost,
    pub endpoints: Option<(String, String)>,
}

impl LinkEdge {
    pub fn new<L: Into<LinkId>>(id: L, alpha: Cost, beta: Cost) -> LinkEdge {
        LinkEdge {
            id: id.into(),
            cost: AffineCost::new(alpha, beta),
            endpoints: None,
        }
    }
    /// attach the tail and head node names
    pub fn between<S: Into<String>>(mut self, from: S, to: S) -> LinkEdge {
        self.endpoints = Some((from.into(), to.into()));
        self
    }
}

///
/// Fixed, ordered set of links with their cost functions.
///
/// Iteration order is the order links were given in, and it is the order the
/// solver uses for history appends and tie resolution.
///
#[derive(Debug, Clone)]
pub struct CostModel {
    links: IndexMap<LinkId, LinkEdge>,
}

impl CostModel {
    ///
    /// Build a model from a closed list of links.
    ///
    /// Fails on an empty list, a repeated id, or negative/non-finite parameters.
    ///
    pub fn new<I: IntoIterator<Item = LinkEdge>>(edges: I) -> Result<CostModel> {
        let mut links = IndexMap::new();
        for edge in edges {
            if !edge.cost.is_valid() {
                return Err(Error::InvalidCost {
                    link: edge.id,
                    alpha: edge.cost.alpha,
                    beta: edge.cost.beta,
                });
            }
            if links.contains_key(&edge.id) {
                return Err(Error::DuplicateLink(edge.id));
            }
            links.insert(edge.id.clone(), edge);
        }
        if links.is_empty() {
            return Err(Error::EmptyNetwork);
        }
        Ok(CostModel { links })
    }

    /// shorthand for `(id, alpha, beta)` triples
    pub fn from_params(params: &[(&str, Cost, Cost)]) -> Result<CostModel> {
        CostModel::new(
            params
                .iter()
                .map(|&(id, alpha, beta)| LinkEdge::new(id, alpha, beta)),
        )
    }

    ///
    /// Travel time of `link` carrying `flow`.
    ///
    /// Negative flow is not rejected; the affine law is applied as is.
    ///
    pub fn travel_time<F: FlowRateLike>(&self, link: &LinkId, flow: F) -> Result<Cost> {
        match self.links.get(link) {
            Some(edge) => Ok(edge.cost.travel_time(flow)),
            None => Err(Error::UnknownLink(link.clone())),
        }
    }

    /// cost function of `link`
    pub fn cost_of(&self, link: &LinkId) -> Result<AffineCost> {
        match self.links.get(link) {
            Some(edge) => Ok(edge.cost),
            None => Err(Error::UnknownLink(link.clone())),
        }
    }

    pub fn links(&self) -> impl Iterator<Item = &LinkId> + '_ {
        self.links.keys()
    }
    pub fn edges(&self) -> impl Iterator<Item = &LinkEdge> + '_ {
        self.links.values()
    }
    pub fn get(&self, link: &LinkId) -> Option<&LinkEdge> {
        self.links.get(link)
    }
    pub fn contains(&self, link: &LinkId) -> bool {
        self.links.contains_key(link)
    }
    pub fn len(&self) -> usize {
        self.links.len()
    }
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
