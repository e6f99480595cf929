//! Static risk rule registry.
//!
//! Each rule pairs a trigger with a rule-intrinsic severity and a fixed
//! recommendation set. Severity is never computed; it is part of the rule.
//! Several rules may share a factor name; the analyzer merges those.

use crate::models::RiskSeverity;

/// Condition for a risk rule to fire. Pattern matching is case-insensitive
/// substring matching, done by the analyzer against the prepared context.
#[derive(Debug, Clone, Copy)]
pub enum RiskTrigger {
    /// Any of the phrases appears in the note content.
    ContentAny(&'static [&'static str]),
    /// The patient takes any medication matching the list.
    MedicationAny(&'static [&'static str]),
    /// A content phrase and a medication match together.
    ContentWithMedication {
        content: &'static [&'static str],
        medications: &'static [&'static str],
    },
    /// Two medications from opposing lists are co-prescribed.
    MedicationPair(&'static [&'static str], &'static [&'static str]),
    /// The medication list has at least this many entries.
    MedicationCountAtLeast(usize),
    /// Patient older than `age` on any medication from the list.
    AgeOverWithMedication {
        age: u32,
        medications: &'static [&'static str],
    },
    /// A prescribed medication matches a documented allergy.
    MedicationAllergyConflict,
    /// A numeric blood pressure reading at or above 160/100 mmHg appears
    /// in the content.
    ElevatedBloodPressureReading,
}

#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    pub factor: &'static str,
    pub severity: RiskSeverity,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
    pub trigger: RiskTrigger,
}

const NSAIDS: &[&str] = &["ibuprofen", "naproxen", "diclofenac", "aspirin", "nsaid"];
const WARFARIN_POTENTIATORS: &[&str] = &[
    "ciprofloxacin",
    "metronidazole",
    "erythromycin",
    "clarithromycin",
    "fluconazole",
];
const RENAL_RISK_DRUGS: &[&str] = &[
    "metformin",
    "ibuprofen",
    "naproxen",
    "lisinopril",
    "enalapril",
    "spironolactone",
];
const SEDATIVES: &[&str] = &[
    "diazepam",
    "lorazepam",
    "temazepam",
    "zolpidem",
    "amitriptyline",
];

pub fn rules() -> &'static [RiskRule] {
    RULES
}

static RULES: &[RiskRule] = &[
    RiskRule {
        factor: "Allergy Conflict",
        severity: RiskSeverity::Critical,
        description: "A prescribed medication matches a documented allergy.",
        recommendations: &[
            "Stop the conflicting medication and prescribe an alternative",
            "Confirm the allergy history with the patient",
        ],
        trigger: RiskTrigger::MedicationAllergyConflict,
    },
    RiskRule {
        factor: "Drug Interaction",
        severity: RiskSeverity::High,
        description: "Warfarin combined with an NSAID raises bleeding risk.",
        recommendations: &[
            "Review the need for the NSAID and consider a safer analgesic",
            "Check INR within one week",
        ],
        trigger: RiskTrigger::MedicationPair(&["warfarin"], NSAIDS),
    },
    RiskRule {
        factor: "Drug Interaction",
        severity: RiskSeverity::Medium,
        description: "Warfarin with an interacting antimicrobial can potentiate anticoagulation.",
        recommendations: &[
            "Check INR within one week",
            "Counsel the patient on bleeding warning signs",
        ],
        trigger: RiskTrigger::MedicationPair(&["warfarin"], WARFARIN_POTENTIATORS),
    },
    RiskRule {
        factor: "Renal Risk Medication",
        severity: RiskSeverity::High,
        description: "Renal impairment noted while taking a medication that needs dose review in kidney disease.",
        recommendations: &[
            "Check recent creatinine and eGFR",
            "Review renally cleared medications and adjust doses",
        ],
        trigger: RiskTrigger::ContentWithMedication {
            content: &[
                "renal impairment",
                "chronic kidney disease",
                "ckd",
                "raised creatinine",
            ],
            medications: RENAL_RISK_DRUGS,
        },
    },
    RiskRule {
        factor: "Uncontrolled Hypertension",
        severity: RiskSeverity::High,
        description: "Blood pressure documented as poorly controlled.",
        recommendations: &[
            "Review antihypertensive regimen and adherence",
            "Arrange home blood pressure monitoring",
            "Recheck blood pressure within two weeks",
        ],
        trigger: RiskTrigger::ContentAny(&[
            "uncontrolled hypertension",
            "blood pressure remains high",
            "bp poorly controlled",
            "hypertensive urgency",
        ]),
    },
    RiskRule {
        factor: "Uncontrolled Hypertension",
        severity: RiskSeverity::High,
        description: "A blood pressure reading at or above 160/100 mmHg is documented.",
        recommendations: &[
            "Confirm with a repeat seated reading",
            "Review antihypertensive regimen and adherence",
        ],
        trigger: RiskTrigger::ElevatedBloodPressureReading,
    },
    RiskRule {
        factor: "Diabetic Complication",
        severity: RiskSeverity::High,
        description: "Evidence of diabetic end-organ involvement or poor glycaemic control.",
        recommendations: &[
            "Check HbA1c and review the diabetes care plan",
            "Arrange foot and eye screening if not done this year",
        ],
        trigger: RiskTrigger::ContentAny(&[
            "diabetic foot",
            "neuropathy",
            "retinopathy",
            "poor glycaemic control",
            "poor glycemic control",
        ]),
    },
    RiskRule {
        factor: "Polypharmacy",
        severity: RiskSeverity::Medium,
        description: "Five or more concurrent medications increase interaction and adherence risk.",
        recommendations: &[
            "Schedule a structured medication review",
            "Check for duplicated or no-longer-indicated medications",
        ],
        trigger: RiskTrigger::MedicationCountAtLeast(5),
    },
    RiskRule {
        factor: "Fall Risk",
        severity: RiskSeverity::Medium,
        description: "Older patient taking sedating medication associated with falls.",
        recommendations: &[
            "Review the sedating medication and consider tapering",
            "Ask about falls and dizziness at the next visit",
        ],
        trigger: RiskTrigger::AgeOverWithMedication {
            age: 65,
            medications: SEDATIVES,
        },
    },
    RiskRule {
        factor: "Tobacco Use",
        severity: RiskSeverity::Medium,
        description: "Current tobacco use documented.",
        recommendations: &[
            "Offer brief smoking cessation advice",
            "Offer nicotine replacement or cessation referral",
        ],
        trigger: RiskTrigger::ContentAny(&["smoker", "smokes", "tobacco", "cigarettes"]),
    },
    RiskRule {
        factor: "Harmful Alcohol Use",
        severity: RiskSeverity::Medium,
        description: "Alcohol intake documented at a harmful level.",
        recommendations: &[
            "Complete an AUDIT-C screen",
            "Offer brief intervention and follow-up",
        ],
        trigger: RiskTrigger::ContentAny(&[
            "drinks heavily",
            "binge drinking",
            "alcohol dependence",
            "harmful alcohol",
        ]),
    },
    RiskRule {
        factor: "Medication Non-adherence",
        severity: RiskSeverity::Medium,
        description: "Patient reported not taking medication as prescribed.",
        recommendations: &[
            "Explore barriers to adherence",
            "Simplify the regimen where possible",
        ],
        trigger: RiskTrigger::ContentAny(&[
            "not taking",
            "missed doses",
            "stopped taking",
            "ran out of medication",
        ]),
    },
    RiskRule {
        factor: "Mental Health Risk",
        severity: RiskSeverity::High,
        description: "Content suggests significant low mood or risk of self-harm.",
        recommendations: &[
            "Complete a structured mental health and risk assessment",
            "Arrange early review or same-day referral if risk is active",
        ],
        trigger: RiskTrigger::ContentAny(&["suicidal", "self-harm", "hopeless"]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_well_formed() {
        let rules = rules();
        assert!(rules.len() >= 10);
        for rule in rules {
            assert!(!rule.factor.is_empty());
            assert!(!rule.description.is_empty());
            assert!(
                !rule.recommendations.is_empty(),
                "{} has no recommendations",
                rule.factor
            );
        }
    }

    #[test]
    fn drug_interaction_has_rules_at_two_severities() {
        let severities: Vec<RiskSeverity> = rules()
            .iter()
            .filter(|r| r.factor == "Drug Interaction")
            .map(|r| r.severity)
            .collect();
        assert!(severities.contains(&RiskSeverity::High));
        assert!(severities.contains(&RiskSeverity::Medium));
    }

    #[test]
    fn content_phrases_are_lowercase() {
        for rule in rules() {
            let phrase_lists: Vec<&[&str]> = match rule.trigger {
                RiskTrigger::ContentAny(p) | RiskTrigger::MedicationAny(p) => vec![p],
                RiskTrigger::ContentWithMedication { content, medications } => {
                    vec![content, medications]
                }
                RiskTrigger::MedicationPair(a, b) => vec![a, b],
                _ => vec![],
            };
            for list in phrase_lists {
                for phrase in list {
                    assert_eq!(
                        *phrase,
                        phrase.to_lowercase(),
                        "pattern in {} is not lowercase",
                        rule.factor
                    );
                }
            }
        }
    }
}
