//! Flow and history definitions
//! - Flow: link -> flow amount
//! - History: link -> travel time of every iteration
use super::cost::{Cost, CostModel};
use super::error::{Error, Result};
use super::flow_rate::FlowRateLike;
use super::link::LinkId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flow definitions
///
/// Flow f is a mapping of `F` f(e) to each link e, in link order.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flow<F: FlowRateLike>(IndexMap<LinkId, F>);

impl<F: FlowRateLike> Flow<F> {
    pub fn empty() -> Flow<F> {
        Flow(IndexMap::new())
    }
    /// `value` on every link of the model
    pub fn constant(model: &CostModel, value: F) -> Flow<F> {
        Flow(model.links().map(|l| (l.clone(), value)).collect())
    }
    pub fn zero(model: &CostModel) -> Flow<F> {
        Flow::constant(model, F::zero())
    }
    pub fn from_vec(vec: &[(&str, F)]) -> Flow<F> {
        Flow(vec.iter().map(|&(l, f)| (LinkId::from(l), f)).collect())
    }
    pub fn get(&self, link: &LinkId) -> Option<F> {
        self.0.get(link).copied()
    }
    ///
    /// Overwrite the flow of a link that is already part of this flow.
    ///
    pub fn set(&mut self, link: &LinkId, value: F) -> Result<()> {
        match self.0.get_mut(link) {
            Some(f) => {
                *f = value;
                Ok(())
            }
            None => Err(Error::UnknownLink(link.clone())),
        }
    }
    pub fn has(&self, link: &LinkId) -> bool {
        self.0.contains_key(link)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&LinkId, F)> + '_ {
        self.0.iter().map(|(l, &f)| (l, f))
    }
    /// links holding exactly `value`
    pub fn links_with(&self, value: F) -> impl Iterator<Item = &LinkId> + '_ {
        self.0
            .iter()
            .filter(move |(_, f)| **f == value)
            .map(|(l, _)| l)
    }
    ///
    /// `max_e |f(e) - demand|`, the convergence measure of the solver.
    /// `None` for an empty flow.
    ///
    pub fn max_deviation_from(&self, demand: F) -> Option<f64> {
        self.0
            .values()
            .map(|&f| f.abs_diff_f64(demand))
            .fold(None, |acc, d| match acc {
                Some(m) if m >= d => Some(m),
                _ => Some(d),
            })
    }
    /// travel time of every link at this flow
    pub fn travel_times(&self, model: &CostModel) -> Result<IndexMap<LinkId, Cost>> {
        self.0
            .iter()
            .map(|(l, &f)| -> Result<(LinkId, Cost)> {
                Ok((l.clone(), model.travel_time(l, f)?))
            })
            .collect()
    }
}

///
/// Check if the flow is all-or-nothing, i.e. every link holds exactly
/// zero or exactly `demand`.
///
pub fn is_all_or_nothing<F: FlowRateLike>(flow: &Flow<F>, demand: F) -> bool {
    flow.iter().all(|(_, f)| f == F::zero() || f == demand)
}

///
/// Check if the flow is defined on exactly the links of the model.
///
pub fn is_defined_for_all_links<F: FlowRateLike>(flow: &Flow<F>, model: &CostModel) -> bool {
    flow.len() == model.len() && model.links().all(|l| flow.has(l))
}

///
/// Travel time log, one entry per iteration for every link.
///
#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(IndexMap<LinkId, Vec<Cost>>);

impl History {
    /// empty series for every link of the model
    pub fn new(model: &CostModel) -> History {
        History(model.links().map(|l| (l.clone(), Vec::new())).collect())
    }
    pub fn push(&mut self, link: &LinkId, time: Cost) -> Result<()> {
        match self.0.get_mut(link) {
            Some(times) => {
                times.push(time);
                Ok(())
            }
            None => Err(Error::UnknownLink(link.clone())),
        }
    }
    pub fn get(&self, link: &LinkId) -> Option<&[Cost]> {
        self.0.get(link).map(|v| v.as_slice())
    }
    pub fn iter(&self) -> impl Iterator<Item = (&LinkId, &[Cost])> + '_ {
        self.0.iter().map(|(l, v)| (l, v.as_slice()))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// number of iterations recorded
    pub fn iterations(&self) -> usize {
        self.0.values().map(|v| v.len()).max().unwrap_or(0)
    }
}
