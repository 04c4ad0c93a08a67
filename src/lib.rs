//! Person Record Validation Service
//!
//! This crate validates employee and staff records against field-level and
//! cross-field business rules, including an hourly salary floor that
//! depends on the subject's age, and serves the rules over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
