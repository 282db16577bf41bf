//! The numeric core: the evaluated formula and the sweep that drives it.

pub mod evaluator;
pub mod sweep;

#[cfg(test)]
mod sweep_proptest;
