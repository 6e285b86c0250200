//! Culture Compass - Cultural Innovation Resilience assessment service
//!
//! This crate implements the scoring, unlock, and personalized
//! recommendation engine behind the Cultural Innovation Resilience
//! Framework assessments.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
