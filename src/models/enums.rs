use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Macro to generate a closed string enum with as_str + FromStr + Display.
/// Variant order is declaration order; `ordered` enums additionally derive
/// PartialOrd/Ord with the LAST variant as the most severe.
macro_rules! str_enum {
    (@common $name:ident { $($variant:ident => $s:literal),+ }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EngineError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        str_enum!(@common $name { $($variant => $s),+ });
    };
    (ordered $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        str_enum!(@common $name { $($variant => $s),+ });
    };
}

// ─── Note structure ──────────────────────────────────────────────────────────

str_enum!(SectionType {
    Subjective => "subjective",
    Objective => "objective",
    Assessment => "assessment",
    Plan => "plan",
    Medication => "medication",
    History => "history",
    Examination => "examination",
    Investigations => "investigations",
});

// ─── Patient ─────────────────────────────────────────────────────────────────

str_enum!(Sex {
    Female => "female",
    Male => "male",
    Other => "other",
});

// ─── Differential diagnosis ──────────────────────────────────────────────────

str_enum!(ordered Likelihood {
    VeryLow => "very-low",
    Low => "low",
    Moderate => "moderate",
    High => "high",
    VeryHigh => "very-high",
});

impl Likelihood {
    /// Single source of truth for probability banding.
    pub fn from_probability(probability: f32) -> Self {
        if probability >= 0.8 {
            Self::VeryHigh
        } else if probability >= 0.6 {
            Self::High
        } else if probability >= 0.4 {
            Self::Moderate
        } else if probability >= 0.2 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

str_enum!(ordered EmergencyLevel {
    Routine => "routine",
    Soon => "soon",
    Urgent => "urgent",
    Immediate => "immediate",
});

impl EmergencyLevel {
    /// Map an emergency level onto the overall case priority scale.
    pub fn clinical_priority(&self) -> ClinicalPriority {
        match self {
            Self::Immediate => ClinicalPriority::Critical,
            Self::Urgent => ClinicalPriority::High,
            Self::Soon => ClinicalPriority::Medium,
            Self::Routine => ClinicalPriority::Low,
        }
    }
}

str_enum!(ordered ClinicalPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

// ─── Investigations ──────────────────────────────────────────────────────────

str_enum!(InvestigationKind {
    Laboratory => "laboratory",
    Imaging => "imaging",
    Bedside => "bedside",
    Procedure => "procedure",
});

str_enum!(ordered CostCategory {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(Availability {
    Widespread => "widespread",
    Specialist => "specialist",
    Limited => "limited",
});

// ─── Risk ────────────────────────────────────────────────────────────────────

str_enum!(ordered RiskSeverity {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

// ─── Tasks ───────────────────────────────────────────────────────────────────

str_enum!(TaskType {
    FollowUp => "follow-up",
    LabTest => "lab-test",
    Referral => "referral",
    Medication => "medication",
    Lifestyle => "lifestyle",
});

str_enum!(ordered TaskPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

// ─── Treatment protocols ─────────────────────────────────────────────────────

str_enum!(ordered ProtocolSeverity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(CareSetting {
    Outpatient => "outpatient",
    UrgentCare => "urgent-care",
    Inpatient => "inpatient",
});

str_enum!(InterventionKind {
    Medication => "medication",
    Supportive => "supportive",
    Procedure => "procedure",
    Lifestyle => "lifestyle",
});

str_enum!(EvidenceLevel {
    Strong => "strong",
    Moderate => "moderate",
    ExpertOpinion => "expert-opinion",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn likelihood_banding_thresholds() {
        assert_eq!(Likelihood::from_probability(0.85), Likelihood::VeryHigh);
        assert_eq!(Likelihood::from_probability(0.80), Likelihood::VeryHigh);
        assert_eq!(Likelihood::from_probability(0.79), Likelihood::High);
        assert_eq!(Likelihood::from_probability(0.60), Likelihood::High);
        assert_eq!(Likelihood::from_probability(0.55), Likelihood::Moderate);
        assert_eq!(Likelihood::from_probability(0.40), Likelihood::Moderate);
        assert_eq!(Likelihood::from_probability(0.20), Likelihood::Low);
        assert_eq!(Likelihood::from_probability(0.19), Likelihood::VeryLow);
        assert_eq!(Likelihood::from_probability(0.0), Likelihood::VeryLow);
    }

    #[test]
    fn emergency_severity_ordering() {
        assert!(EmergencyLevel::Immediate > EmergencyLevel::Urgent);
        assert!(EmergencyLevel::Urgent > EmergencyLevel::Soon);
        assert!(EmergencyLevel::Soon > EmergencyLevel::Routine);
    }

    #[test]
    fn emergency_maps_to_clinical_priority() {
        assert_eq!(
            EmergencyLevel::Immediate.clinical_priority(),
            ClinicalPriority::Critical
        );
        assert_eq!(
            EmergencyLevel::Urgent.clinical_priority(),
            ClinicalPriority::High
        );
        assert_eq!(
            EmergencyLevel::Soon.clinical_priority(),
            ClinicalPriority::Medium
        );
        assert_eq!(
            EmergencyLevel::Routine.clinical_priority(),
            ClinicalPriority::Low
        );
    }

    #[test]
    fn risk_severity_ordering() {
        assert!(RiskSeverity::Critical > RiskSeverity::High);
        assert!(RiskSeverity::High > RiskSeverity::Medium);
        assert!(RiskSeverity::Medium > RiskSeverity::Low);
    }

    #[test]
    fn task_type_round_trip() {
        for t in [
            TaskType::FollowUp,
            TaskType::LabTest,
            TaskType::Referral,
            TaskType::Medication,
            TaskType::Lifestyle,
        ] {
            assert_eq!(TaskType::from_str(t.as_str()).unwrap(), t);
        }
    }

    #[test]
    fn kebab_case_string_forms() {
        assert_eq!(Likelihood::VeryHigh.as_str(), "very-high");
        assert_eq!(TaskType::FollowUp.as_str(), "follow-up");
        assert_eq!(TaskType::LabTest.as_str(), "lab-test");
        assert_eq!(EvidenceLevel::ExpertOpinion.as_str(), "expert-opinion");
    }

    #[test]
    fn serde_matches_as_str() {
        let json = serde_json::to_string(&Likelihood::VeryHigh).unwrap();
        assert_eq!(json, "\"very-high\"");
        let json = serde_json::to_string(&TaskType::FollowUp).unwrap();
        assert_eq!(json, "\"follow-up\"");
    }

    #[test]
    fn from_str_rejects_unknown_value() {
        let err = EmergencyLevel::from_str("whenever").unwrap_err();
        assert!(err.to_string().contains("EmergencyLevel"));
    }
}
