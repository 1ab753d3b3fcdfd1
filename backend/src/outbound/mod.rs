//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **learning_platform**: reqwest client for the platform's REST API,
//!   implementing `ResourceClient`.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod learning_platform;
