//! Eagerly precomputed binomial coefficient tables with constant-time lookup.
//! Builds the complete Pascal's triangle up to a given maximum order in one step,
//! backed by a single contiguous buffer.

pub mod binomial;
pub mod print;
pub mod table;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
