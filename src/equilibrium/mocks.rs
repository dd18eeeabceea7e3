use super::config::NetworkConfig;
use super::cost::CostModel;

// mock network generation functions

/// one link with constant travel time 1
pub fn mock_single_link() -> CostModel {
    CostModel::from_params(&[("X", 1.0, 0.0)]).unwrap()
}

/// two parallel links whose winner flips every round
pub fn mock_parallel_links() -> CostModel {
    CostModel::from_params(&[("A", 0.0, 1.0), ("B", 5.0, 1.0)]).unwrap()
}

/// two identical links, always tied
pub fn mock_tied_links() -> CostModel {
    CostModel::from_params(&[("P", 1.0, 1.0), ("Q", 1.0, 1.0)]).unwrap()
}

/// `A` wins the first round, then both links tie at time 10
pub fn mock_alternating_tie() -> CostModel {
    CostModel::from_params(&[("A", 0.0, 1.0), ("B", 10.0, 1.0)]).unwrap()
}

/// five-link network `AB, AD, BC, DE, EC` with endpoints
pub fn mock_reference_network() -> CostModel {
    NetworkConfig::reference().cost_model().unwrap()
}
