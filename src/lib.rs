//! FRA Atlas Server Library
//!
//! Core modules for the claim-form digitization service. The server binary
//! in main.rs wires these together behind an axum router.
//!
//! # Modules
//!
//! - `ocr`: OCR provider abstraction and the text extraction stage
//! - `ner`: gazetteer-driven named entity recognition
//! - `geo`: geocoding provider abstraction and coordinate enrichment
//! - `pipeline`: extraction pipeline composing the three stages
//! - `eligibility`: scheme recommendation rule engine

pub mod config;
pub mod eligibility;
pub mod error;
pub mod geo;
pub mod ner;
pub mod ocr;
pub mod pipeline;
pub mod routes;
pub mod state;
