//! Console test support utilities
//!
//! This crate provides utilities for console gateway testing: unified logging
//! initialization and assertions for the two error contracts the gateway
//! speaks (problem details and field-level validation bodies).

pub mod logging;
pub mod problem_details;
pub mod validation_body;
