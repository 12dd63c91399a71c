//! Domain vocabulary for the GATT blacklist format.
//!
//! This crate contains the pure building blocks of the format: the canonical
//! UUID grammar and the access-restriction keywords. No IO, no async.

mod restriction;
mod uuid;

pub use restriction::Restriction;
pub use uuid::is_valid_uuid;
