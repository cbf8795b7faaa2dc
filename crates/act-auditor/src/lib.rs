//! Deterministic EU AI Act risk classification.
//!
//! The heart of the crate is [`classification::ClassificationEngine`], a pure
//! function of (system profile, rule catalog) producing an auditable
//! [`classification::Verdict`]. Around it sit the supporting modules the
//! auditor service needs: per-tier compliance checklists, the AI Act article
//! knowledge base, Markdown report generation, and the usual configuration
//! and telemetry plumbing.

pub mod articles;
pub mod checklist;
pub mod classification;
pub mod config;
pub mod error;
pub mod reporting;
pub mod telemetry;
