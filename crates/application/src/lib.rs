//! FeedVault Application Layer
//!
//! Ports consumed by the use cases and the use cases themselves. The
//! cache orchestration lives here; concrete store and remote-loader
//! backends live in the infrastructure layer.
pub mod ports;
pub mod use_cases;
