//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw store state into presentation-ready views.
//! - Keep UI layers decoupled from the store's internals.

pub mod view_service;
