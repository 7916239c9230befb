//! Module for the health profile API.
//!
//! This module defines the public interface for registering, reading, and
//! removing per-user health profiles over HTTP.

pub mod handlers;
pub mod routes;
