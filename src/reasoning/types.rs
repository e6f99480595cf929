use serde::{Deserialize, Serialize};

use crate::models::{
    Availability, ClinicalPriority, CostCategory, EmergencyLevel, InvestigationKind, Likelihood,
    PatientProfile,
};

/// Everything the reasoning engine needs for one invocation. Built by the
/// caller; the engine reads it and returns a fresh result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReasoningInput {
    pub complaint: String,
    pub symptoms: Vec<String>,
    pub profile: PatientProfile,
    pub findings: Vec<String>,
    pub prior_conditions: Vec<String>,
}

/// An investigation recommended for a candidate diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investigation {
    pub test: String,
    pub kind: InvestigationKind,
    pub urgency: EmergencyLevel,
    pub cost: CostCategory,
    pub availability: Availability,
    pub expected_result: String,
}

/// One ranked candidate diagnosis with its evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentialDiagnosis {
    pub condition: String,
    pub icd10_code: String,
    /// Normalized score in [0, 1]. Strictly determines `likelihood`.
    pub probability: f32,
    pub likelihood: Likelihood,
    pub emergency_level: EmergencyLevel,
    pub supporting_features: Vec<String>,
    pub opposing_features: Vec<String>,
    pub required_investigations: Vec<Investigation>,
    pub key_questions: Vec<String>,
    pub specialty_referral: Option<String>,
}

/// The full output of one reasoning run. Created fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalReasoningResult {
    /// Sorted: probability desc, then emergency severity, then name.
    pub differential_diagnoses: Vec<DifferentialDiagnosis>,
    pub clinical_priority: ClinicalPriority,
    /// Human-readable trace: one entry per matched feature group.
    pub reasoning_steps: Vec<String>,
    pub uncertainty_factors: Vec<String>,
    pub next_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasoning_input_default_is_empty() {
        let input = ReasoningInput::default();
        assert!(input.complaint.is_empty());
        assert!(input.symptoms.is_empty());
        assert!(input.findings.is_empty());
        assert!(input.prior_conditions.is_empty());
    }

    #[test]
    fn diagnosis_serializes_closed_enum_strings() {
        let dx = DifferentialDiagnosis {
            condition: "Migraine".into(),
            icd10_code: "G43.9".into(),
            probability: 0.72,
            likelihood: Likelihood::High,
            emergency_level: EmergencyLevel::Routine,
            supporting_features: vec!["throbbing".into()],
            opposing_features: vec![],
            required_investigations: vec![],
            key_questions: vec![],
            specialty_referral: None,
        };
        let json = serde_json::to_string(&dx).unwrap();
        assert!(json.contains("\"high\""));
        assert!(json.contains("\"routine\""));
    }
}
