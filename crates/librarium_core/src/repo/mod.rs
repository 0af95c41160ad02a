//! In-memory record store.
//!
//! # Responsibility
//! - Own the ordered book and borrower collections for the process lifetime.
//! - Isolate collection mutation from service orchestration and console I/O.
//!
//! # Invariants
//! - Insertion order is preserved; listing renders records in that order.
//! - No uniqueness or cross-entity checks; callers get exactly what they put
//!   in.

pub mod catalog;
