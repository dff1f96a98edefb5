//! Domain model for persisted SSAID settings.
//!
//! # Responsibility
//! - Define the canonical record shape stored in the settings document.
//! - Own the pure attribute/value conversion rules shared by the parse and
//!   update paths.
//!
//! # Invariants
//! - Records carry document state verbatim; conversion helpers never lose
//!   information beyond the documented sentinel rules.
//! - Value validation is purely syntactic (16 hex characters).

pub mod setting;
