//! Ambient plumbing shared by the recipe book binaries: tracing setup,
//! health endpoints and HTTP middleware.

pub mod health;
pub mod middleware;
pub mod tracing;
