//! Module for core business logic services.
//!
//! This module encapsulates the services that enforce the access and
//! existence rules around health data: who may create, read, or delete a
//! given user's profile and metric records. Services talk to storage only
//! through the store traits and receive the calling principal explicitly.

pub mod health_metric;
pub mod health_profile;
