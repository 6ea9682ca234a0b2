//! Shared contract-analysis model for the web client and the CLI.
//!
//! This crate owns the backend wire schema, endpoint paths, and the
//! deterministic state machines behind each asynchronous user workflow
//! (upload, delete-with-confirmation, ask-question, re-analyze, overview
//! refresh). It performs no I/O so both the WASM client and the native CLI can
//! drive it from their own HTTP stacks.

pub mod citation;
pub mod delete;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod listing;
pub mod overview;
pub mod progress;
pub mod qa;
pub mod risk;
pub mod sections;
pub mod types;
pub mod upload;

pub use error::ApiError;
pub use types::{
    ContractDetail, ContractList, ContractSummary, DeleteResponse, QaExchange, QaRequest, QaResponse, Risk,
    RiskAnalysis, RiskLevel, Severity, SummarizeRequest, SummarizeResponse, UploadResponse,
};
