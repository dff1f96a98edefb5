//! Repository layer over the settings document.
//!
//! # Responsibility
//! - Orchestrate the read path (transport -> parse -> records) and the
//!   write path (validate -> transport -> mutate -> transport).
//! - Keep document-format details behind stable record-level contracts.
//!
//! # Invariants
//! - An unreadable or malformed document degrades to an empty record list
//!   with a logged warning, never a panic.
//! - A rejected value performs no read, no parse and no write.

pub mod ssaid_repo;
