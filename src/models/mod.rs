//! Shared data model for the decision-support engine.
//!
//! Everything here is a plain serde struct owned by the caller. The engine
//! never persists or mutates these after returning them.

pub mod enums;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use enums::*;

/// A note template section. Defined by configuration, never created at
/// runtime by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: String,
    pub title: String,
    pub section_type: SectionType,
    pub required: bool,
    pub placeholder: String,
}

/// One classifier result: a transcript fragment mapped onto a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categorization {
    pub section_id: String,
    /// Always within (CONFIDENCE_FLOOR, 1.0].
    pub confidence: f32,
    pub suggested_content: String,
}

/// Structured patient context passed alongside free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub conditions: Vec<String>,
    pub allergies: Vec<String>,
}

/// A previously recorded consultation, input to cross-session risk analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub recorded_at: NaiveDateTime,
}

/// A current medication as known to the caller's store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationRecord {
    pub name: String,
    pub dose: String,
    pub frequency: String,
}
