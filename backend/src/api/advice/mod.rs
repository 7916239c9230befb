//! Module for the health advice callback API.
//!
//! The partnered advice system calls back into the backend with batches of
//! advice for users; this module receives and acknowledges those callbacks.

pub mod handlers;
pub mod routes;
