//! Core use-case services.
//!
//! # Responsibility
//! - Expose record listing and value updates as use-case level APIs.
//! - Keep host-application layers decoupled from document details.

pub mod ssaid_service;
