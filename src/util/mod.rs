//! Utility modules

pub mod params;

pub use params::{split_parameters, BracketDepth};
