//! Auscult: a deterministic clinical-text decision-support engine.
//!
//! Five pure, synchronous components over consultation text:
//!
//! - [`classify`]: map a transcript onto note template sections
//! - [`reason`] / [`reason_default`]: rank a differential diagnosis
//! - [`analyze_risk`]: surface medication and condition risks
//! - [`analyze_transcription`] / [`regional_suggestions`]: follow-up tasks
//! - [`protocol`]: render a severity-adjusted treatment protocol
//!
//! None of the components hold state between calls, perform I/O, or use
//! randomness; identical input always yields identical output. The only
//! clock dependence is the task due-date, which callers inject. Malformed
//! or empty input yields empty results, never errors.

pub mod classify;
pub mod config;
pub mod error;
pub mod models;
pub mod protocol;
pub mod reasoning;
pub mod risk;
pub mod tasks;

pub use classify::{classify, merge_section_content};
pub use error::EngineError;
pub use protocol::{protocol, FollowUpPlan, Intervention, MonitoringItem, TreatmentProtocol};
pub use reasoning::registry::ConditionRegistry;
pub use reasoning::types::{
    ClinicalReasoningResult, DifferentialDiagnosis, Investigation, ReasoningInput,
};
pub use reasoning::{reason, reason_default};
pub use risk::{analyze_risk, analyze_risk_with, RiskFactor};
pub use tasks::{
    analyze_transcription, merge_suggestions, regional_suggestions, TaskSuggestion,
};
