//! Core data models for the person validation service.
//!
//! Each record type is its own concrete struct. The [`PersonRecord`] trait
//! exposes the fields the validator reads so both types share one
//! evaluation routine.

mod employee;
mod record;
mod staff;

pub use employee::Employee;
pub use record::{PersonRecord, RecordKind};
pub use staff::Staff;
