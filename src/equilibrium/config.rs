//!
//! Network configuration file
//!
//! ```json
//! {
//!   "links": [{ "id": "AB", "from": "A", "to": "B", "alpha": 2.0, "beta": 0.1 }],
//!   "max_iterations": 100,
//!   "tolerance": 0.01,
//!   "demand": 10.0
//! }
//! ```
//!
//! `from`/`to`, `max_iterations`, `tolerance` and `demand` may be omitted.
//! `from` and `to` are given together or not at all.
//!
use super::cost::{Cost, CostModel, LinkEdge};
use super::error::{Error, Result};
use super::link::LinkId;
use super::solver::{SolverConfig, DEFAULT_DEMAND, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub id: LinkId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub alpha: Cost,
    pub beta: Cost,
}

impl LinkConfig {
    fn to_edge(&self) -> Result<LinkEdge> {
        let edge = LinkEdge::new(self.id.clone(), self.alpha, self.beta);
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Ok(edge.between(from.as_str(), to.as_str())),
            (None, None) => Ok(edge),
            _ => Err(Error::IncompleteEndpoints(self.id.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub links: Vec<LinkConfig>,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_demand")]
    pub demand: f64,
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
fn default_demand() -> f64 {
    DEFAULT_DEMAND
}

impl NetworkConfig {
    ///
    /// The five-link network `A -> B -> C`, `A -> D -> E -> C` solved with
    /// 100 iterations, tolerance 0.01 and `D = 10`.
    ///
    pub fn reference() -> NetworkConfig {
        let link = |id: &str, alpha: Cost, beta: Cost| LinkConfig {
            id: LinkId::from(id),
            from: Some(id[..1].to_string()),
            to: Some(id[1..].to_string()),
            alpha,
            beta,
        };
        NetworkConfig {
            links: vec![
                link("AB", 2.0, 0.1),
                link("AD", 3.0, 0.2),
                link("BC", 4.0, 0.15),
                link("DE", 5.0, 0.25),
                link("EC", 3.0, 0.1),
            ],
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            demand: DEFAULT_DEMAND,
        }
    }

    pub fn from_json_str(s: &str) -> Result<NetworkConfig> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<NetworkConfig> {
        let s = std::fs::read_to_string(path)?;
        NetworkConfig::from_json_str(&s)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn cost_model(&self) -> Result<CostModel> {
        let edges = self
            .links
            .iter()
            .map(|l| l.to_edge())
            .collect::<Result<Vec<_>>>()?;
        CostModel::new(edges)
    }

    pub fn solver_config(&self) -> Result<SolverConfig<f64>> {
        SolverConfig::new(self.max_iterations, self.tolerance)?.with_demand(self.demand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config_uses_defaults() {
        let c = NetworkConfig::from_json_str(
            r#"{ "links": [
                { "id": "A", "alpha": 0, "beta": 1 },
                { "id": "B", "alpha": 5, "beta": 1 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(c.max_iterations, 100);
        assert_eq!(c.tolerance, 0.01);
        assert_eq!(c.demand, 10.0);

        let m = c.cost_model().unwrap();
        let ids: Vec<&str> = m.links().map(|l| l.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(m.get(&"A".into()).unwrap().endpoints, None);
        assert_eq!(m.travel_time(&"B".into(), 10.0).unwrap(), 15.0);

        let s = c.solver_config().unwrap();
        assert_eq!(s.max_iterations(), 100);
        assert_eq!(s.demand(), 10.0);
    }

    #[test]
    fn parse_full_config() {
        let c = NetworkConfig::from_json_str(
            r#"{
                "links": [ { "id": "XY", "from": "X", "to": "Y", "alpha": 1.5, "beta": 0.5 } ],
                "max_iterations": 7,
                "tolerance": 0.5,
                "demand": 4
            }"#,
        )
        .unwrap();
        let m = c.cost_model().unwrap();
        assert_eq!(
            m.get(&"XY".into()).unwrap().endpoints,
            Some(("X".to_string(), "Y".to_string()))
        );
        let s = c.solver_config().unwrap();
        assert_eq!(s.max_iterations(), 7);
        assert_eq!(s.tolerance(), 0.5);
        assert_eq!(s.demand(), 4.0);
    }

    #[test]
    fn reference_roundtrips_through_json() {
        let c = NetworkConfig::reference();
        let parsed = NetworkConfig::from_json_str(&c.to_json_string().unwrap()).unwrap();
        assert_eq!(c, parsed);
        let m = parsed.cost_model().unwrap();
        assert_eq!(m.len(), 5);
        assert_eq!(
            m.get(&"DE".into()).unwrap().endpoints,
            Some(("D".to_string(), "E".to_string()))
        );
    }

    #[test]
    fn one_sided_endpoints_are_rejected() {
        for link in [
            r#"{ "id": "AB", "from": "A", "alpha": 1, "beta": 1 }"#,
            r#"{ "id": "AB", "to": "B", "alpha": 1, "beta": 1 }"#,
        ] {
            let json = format!(r#"{{ "links": [{}] }}"#, link);
            let c = NetworkConfig::from_json_str(&json).unwrap();
            match c.cost_model() {
                Err(Error::IncompleteEndpoints(l)) => assert_eq!(l, LinkId::from("AB")),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn bad_configs() {
        assert!(matches!(
            NetworkConfig::from_json_str("{ \"links\": 3 }"),
            Err(Error::Json(_))
        ));
        let empty = NetworkConfig::from_json_str(r#"{ "links": [] }"#).unwrap();
        assert!(matches!(empty.cost_model(), Err(Error::EmptyNetwork)));
        let neg = NetworkConfig::from_json_str(r#"{ "links": [], "tolerance": -1 }"#).unwrap();
        assert!(matches!(neg.solver_config(), Err(Error::InvalidTolerance(_))));
        assert!(matches!(
            NetworkConfig::from_json_file("/nonexistent/network.json"),
            Err(Error::Io(_))
        ));
    }
}
