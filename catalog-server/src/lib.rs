//! Catalog Server Library
//!
//! In-memory reference backend for the catalog REST API. This module exports
//! the server components for testing and reuse.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod validation;
