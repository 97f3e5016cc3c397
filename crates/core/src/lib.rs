//! Shared domain vocabulary for the Solhem platform.
//!
//! This crate holds the identifier and timestamp aliases plus the
//! enumerated sub-fields (observation types, severities, task and ticket
//! statuses) that the rest of the workspace builds on.

pub mod types;
