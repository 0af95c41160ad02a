//! Domain records for the library catalog.
//!
//! # Responsibility
//! - Define the canonical data structures used by catalog logic.
//! - Keep record shapes free of storage and console concerns.
//!
//! # Invariants
//! - Identity is a caller-supplied integer id on every record kind.
//! - No record kind enforces uniqueness or referential integrity; duplicate
//!   ids are accepted silently everywhere.

pub mod book;
pub mod borrower;
pub mod loan;
