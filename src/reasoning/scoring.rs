//! Feature matching and score arithmetic for the reasoning engine.

use std::cmp::Ordering;

use crate::config::MIN_DIAGNOSIS_SCORE;
use crate::models::{ClinicalPriority, PatientProfile};

use super::registry::{ConditionProfile, DemographicBand, Feature};
use super::types::{DifferentialDiagnosis, ReasoningInput};

/// A scored candidate before it is turned into a DifferentialDiagnosis.
pub(crate) struct ConditionScore<'a> {
    pub profile: &'a ConditionProfile,
    pub probability: f32,
    pub matched_supporting: Vec<&'a Feature>,
    pub matched_opposing: Vec<&'a Feature>,
    pub demographic_prior: f32,
    pub history_prior: f32,
}

/// Lowercased concatenation of complaint, symptoms, and findings —
/// the text every feature pattern is matched against.
pub(crate) fn build_haystack(input: &ReasoningInput) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(1 + input.symptoms.len() + input.findings.len());
    parts.push(input.complaint.as_str());
    parts.extend(input.symptoms.iter().map(String::as_str));
    parts.extend(input.findings.iter().map(String::as_str));
    parts.join("\n").to_lowercase()
}

fn matched<'a>(features: &'a [Feature], haystack: &str) -> Vec<&'a Feature> {
    features
        .iter()
        .filter(|f| !f.pattern.is_empty() && haystack.contains(&f.pattern.to_lowercase()))
        .collect()
}

/// Additive prior from demographic bands matching the patient.
pub(crate) fn demographic_prior(bands: &[DemographicBand], profile: &PatientProfile) -> f32 {
    bands
        .iter()
        .filter(|b| {
            let age_ok = match (profile.age, b.min_age, b.max_age) {
                (None, None, None) => true,
                (None, _, _) => false,
                (Some(age), min, max) => {
                    min.map_or(true, |m| age >= m) && max.map_or(true, |m| age <= m)
                }
            };
            let sex_ok = match (b.sex, profile.sex) {
                (None, _) => true,
                (Some(required), Some(actual)) => required == actual,
                (Some(_), None) => false,
            };
            age_ok && sex_ok
        })
        .map(|b| b.weight)
        .sum()
}

/// Small boost when the patient has a documented history of this condition.
pub(crate) fn history_prior(condition: &str, prior_conditions: &[String]) -> f32 {
    let condition_lower = condition.to_lowercase();
    let related = prior_conditions.iter().any(|prior| {
        let prior = prior.trim().to_lowercase();
        prior.len() >= 4
            && (condition_lower.contains(&prior) || prior.contains(&condition_lower))
    });
    if related {
        0.10
    } else {
        0.0
    }
}

/// Score one condition profile against the input. Returns None when the
/// profile has no matched supporting evidence or falls below the cutoff.
pub(crate) fn score_condition<'a>(
    profile: &'a ConditionProfile,
    haystack: &str,
    input: &ReasoningInput,
) -> Option<ConditionScore<'a>> {
    let total_supporting: f32 = profile.supporting.iter().map(|f| f.weight).sum();
    if total_supporting <= 0.0 {
        return None;
    }

    let matched_supporting = matched(&profile.supporting, haystack);
    if matched_supporting.is_empty() {
        // Demographics alone never make a diagnosis.
        return None;
    }
    let matched_opposing = matched(&profile.opposing, haystack);

    let supporting_sum: f32 = matched_supporting.iter().map(|f| f.weight).sum();
    let opposing_sum: f32 = matched_opposing.iter().map(|f| f.weight).sum();
    let demographic = demographic_prior(&profile.demographics, &input.profile);
    let history = history_prior(&profile.condition, &input.prior_conditions);

    let raw = supporting_sum - opposing_sum + demographic + history;
    let probability = (raw / total_supporting).clamp(0.0, 1.0);

    if probability < MIN_DIAGNOSIS_SCORE {
        return None;
    }

    Some(ConditionScore {
        profile,
        probability,
        matched_supporting,
        matched_opposing,
        demographic_prior: demographic,
        history_prior: history,
    })
}

/// Sort invariant: probability desc, ties by emergency severity desc,
/// then alphabetically by condition name.
pub(crate) fn compare_diagnoses(a: &DifferentialDiagnosis, b: &DifferentialDiagnosis) -> Ordering {
    b.probability
        .total_cmp(&a.probability)
        .then_with(|| b.emergency_level.cmp(&a.emergency_level))
        .then_with(|| a.condition.cmp(&b.condition))
}

/// Overall case priority: the most severe emergency level among the
/// top-N ranked diagnoses, mapped onto the priority scale.
pub(crate) fn clinical_priority(
    diagnoses: &[DifferentialDiagnosis],
    top_n: usize,
) -> ClinicalPriority {
    diagnoses
        .iter()
        .take(top_n)
        .map(|d| d.emergency_level)
        .max()
        .map(|level| level.clinical_priority())
        .unwrap_or(ClinicalPriority::Low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmergencyLevel, Likelihood, Sex};

    fn dx(condition: &str, probability: f32, emergency: EmergencyLevel) -> DifferentialDiagnosis {
        DifferentialDiagnosis {
            condition: condition.into(),
            icd10_code: "X00".into(),
            probability,
            likelihood: Likelihood::from_probability(probability),
            emergency_level: emergency,
            supporting_features: vec![],
            opposing_features: vec![],
            required_investigations: vec![],
            key_questions: vec![],
            specialty_referral: None,
        }
    }

    #[test]
    fn sort_orders_by_probability_descending() {
        let mut list = vec![
            dx("A", 0.3, EmergencyLevel::Routine),
            dx("B", 0.9, EmergencyLevel::Routine),
            dx("C", 0.6, EmergencyLevel::Routine),
        ];
        list.sort_by(compare_diagnoses);
        let names: Vec<&str> = list.iter().map(|d| d.condition.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
    }

    #[test]
    fn sort_breaks_probability_ties_by_emergency_severity() {
        let mut list = vec![
            dx("Benign", 0.5, EmergencyLevel::Routine),
            dx("Dangerous", 0.5, EmergencyLevel::Immediate),
            dx("Middling", 0.5, EmergencyLevel::Soon),
        ];
        list.sort_by(compare_diagnoses);
        let names: Vec<&str> = list.iter().map(|d| d.condition.as_str()).collect();
        assert_eq!(names, ["Dangerous", "Middling", "Benign"]);
    }

    #[test]
    fn sort_breaks_full_ties_alphabetically() {
        let mut list = vec![
            dx("Zoster", 0.5, EmergencyLevel::Routine),
            dx("Angina", 0.5, EmergencyLevel::Routine),
        ];
        list.sort_by(compare_diagnoses);
        assert_eq!(list[0].condition, "Angina");
    }

    #[test]
    fn priority_from_empty_list_is_low() {
        assert_eq!(clinical_priority(&[], 3), ClinicalPriority::Low);
    }

    #[test]
    fn priority_ignores_diagnoses_outside_top_n() {
        let list = vec![
            dx("A", 0.9, EmergencyLevel::Routine),
            dx("B", 0.8, EmergencyLevel::Routine),
            dx("C", 0.7, EmergencyLevel::Routine),
            dx("D", 0.1, EmergencyLevel::Immediate),
        ];
        assert_eq!(clinical_priority(&list, 3), ClinicalPriority::Low);
        assert_eq!(clinical_priority(&list, 4), ClinicalPriority::Critical);
    }

    #[test]
    fn demographic_prior_requires_age_when_band_has_age_bounds() {
        let bands = vec![DemographicBand {
            min_age: Some(65),
            max_age: None,
            sex: None,
            weight: 0.1,
        }];
        let mut profile = PatientProfile::default();
        assert_eq!(demographic_prior(&bands, &profile), 0.0);
        profile.age = Some(70);
        assert!((demographic_prior(&bands, &profile) - 0.1).abs() < f32::EPSILON);
        profile.age = Some(40);
        assert_eq!(demographic_prior(&bands, &profile), 0.0);
    }

    #[test]
    fn demographic_prior_matches_sex_band() {
        let bands = vec![DemographicBand {
            min_age: None,
            max_age: None,
            sex: Some(Sex::Female),
            weight: 0.1,
        }];
        let mut profile = PatientProfile {
            age: Some(30),
            sex: Some(Sex::Female),
            ..Default::default()
        };
        assert!(demographic_prior(&bands, &profile) > 0.0);
        profile.sex = Some(Sex::Male);
        assert_eq!(demographic_prior(&bands, &profile), 0.0);
        profile.sex = None;
        assert_eq!(demographic_prior(&bands, &profile), 0.0);
    }

    #[test]
    fn history_prior_matches_related_condition() {
        let priors = vec!["asthma".to_string()];
        assert!(history_prior("Cough-variant asthma", &priors) > 0.0);
        assert_eq!(history_prior("Migraine", &priors), 0.0);
    }

    #[test]
    fn history_prior_ignores_short_tokens() {
        let priors = vec!["tb".to_string()];
        assert_eq!(history_prior("Pulmonary tuberculosis", &priors), 0.0);
    }
}
