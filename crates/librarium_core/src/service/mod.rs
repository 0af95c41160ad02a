//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate record-store mutation and flat-file persistence into the
//!   operations the menu exposes.
//! - Keep console rendering decoupled from mutation and storage details.

pub mod library_service;
