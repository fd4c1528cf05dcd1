//! Filename classification: style, weight and family inference

pub mod classify;
pub mod weight;

pub use classify::{classify, family_name};
pub use weight::{determine_style, determine_weight, DEFAULT_WEIGHT, WEIGHT_TABLE};
