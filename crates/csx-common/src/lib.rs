//! Common types and utilities for the csx compiler.
//!
//! This crate provides foundational types used across all csx crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)
//! - Diagnostics (categories, code tables, message formatting)

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Span - source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostic types and the code/message tables
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation, diagnostic_codes,
    diagnostic_messages, format_message, get_message_template,
};
