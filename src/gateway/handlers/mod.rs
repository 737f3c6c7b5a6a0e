//! Gateway request handlers

pub mod health;
pub mod order;

// Glob re-exports keep the utoipa path companions reachable as
// `crate::gateway::handlers::<handler>`.
pub use health::*;
pub use order::*;
