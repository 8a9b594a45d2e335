//! Infrastructure layer - Registry implementation, logging and metrics

pub mod logging;
pub mod observability;
pub mod team;
