//! Store facade exposed to presentation layers.
//!
//! # Responsibility
//! - Orchestrate registry mutations with slot persistence.
//! - Keep callers decoupled from storage details.

pub mod store;
