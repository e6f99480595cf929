//! Treatment protocol generator.
//!
//! Looks a condition up in a static template table and renders a
//! severity-adjusted protocol. Unknown conditions fall back to a generic
//! supportive-care protocol; lookup failure is a policy, not an error.

pub mod library;

use serde::{Deserialize, Serialize};

use crate::models::{CareSetting, EvidenceLevel, InterventionKind, ProtocolSeverity};

/// One treatment element: a drug, supportive measure, or procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub intervention: String,
    pub kind: InterventionKind,
    pub dosage: Option<String>,
    pub duration: String,
    pub instructions: String,
    pub contraindications: Vec<String>,
    pub evidence: EvidenceLevel,
    /// On the essential-medicines reference list.
    pub essential_list: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringItem {
    pub parameter: String,
    pub method: String,
    pub frequency: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpPlan {
    pub interval: String,
    pub assessments: Vec<String>,
    pub red_flags: Vec<String>,
}

/// A complete severity-adjusted treatment plan. Generated on demand,
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentProtocol {
    pub condition: String,
    pub severity: ProtocolSeverity,
    pub setting: CareSetting,
    pub primary_treatment: Vec<Intervention>,
    pub monitoring: Vec<MonitoringItem>,
    pub follow_up: FollowUpPlan,
    pub patient_education: Vec<String>,
}

/// Generate a treatment protocol for `condition` at `severity`.
///
/// Matching is case-insensitive: an entry applies when the requested
/// condition contains the entry name or one of its aliases. Unknown
/// conditions get the generic supportive-care protocol.
pub fn protocol(condition: &str, severity: ProtocolSeverity) -> TreatmentProtocol {
    let needle = condition.trim().to_lowercase();

    let entry = library::entries().iter().find(|e| {
        needle.contains(&e.name.to_lowercase())
            || e.aliases.iter().any(|alias| needle.contains(alias))
    });

    match entry {
        Some(entry) => {
            tracing::debug!(condition, matched = entry.name, "protocol template found");
            (entry.build)(severity)
        }
        None => {
            tracing::debug!(condition, "no protocol template, using supportive care");
            library::generic_supportive(condition, severity)
        }
    }
}
