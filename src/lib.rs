//!
//! wardrop computes a simplified [user equilibrium](https://en.wikipedia.org/wiki/Wardrop%27s_principles)
//! over a fixed set of links with affine travel time, by all-or-nothing
//! best-response iteration.
//!
pub mod equilibrium;
