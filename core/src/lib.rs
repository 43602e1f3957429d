//! Recommendation scoring engine for LLMMatch.
//!
//! Turns a requirement profile and a catalog of models into a ranked,
//! explained recommendation cross-checked against an independent predictor.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod predict;
pub mod recommend;
pub mod requirement;
pub mod scoring;
