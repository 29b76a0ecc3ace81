//! Eligibility assessment pipeline for social-support applications.
//!
//! The crate evaluates a normalized application record against
//! jurisdiction-specific scoring rules and produces a final decision with a
//! full audit trail: a document completeness gate, concurrent financial and
//! career assessment stages (each optionally refined by an external
//! enrichment collaborator), and a deterministic decision synthesizer.
//!
//! Everything outward-facing (HTTP surface, persistence, document OCR, chat
//! UI) lives with the callers; this crate only consumes records and returns
//! structured results.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
