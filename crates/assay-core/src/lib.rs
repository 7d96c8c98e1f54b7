//! # assay-core
//!
//! Core types, fingerprints, and error types for Assay.
//!
//! This crate provides the foundational types shared across all Assay crates:
//! - Submission structs for projects and NGOs, plus milestone evidence
//! - Analyzer output (`AnalysisResult`) and the aggregated `ScreeningResult`
//! - Milestone verification request/result types
//! - Support bot, translation, and document analysis types
//! - Content fingerprints used as cache keys and de-duplication identity
//! - Cross-cutting error types

pub mod analysis;
pub mod document;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod fingerprint;
pub mod support;
pub mod translation;
pub mod verification;
