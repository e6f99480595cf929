//! Differential diagnosis engine.
//!
//! Scores declarative condition profiles against a presenting complaint,
//! symptom list, patient profile, and clinical findings, then emits a
//! ranked differential with an explainable reasoning trace. Deterministic
//! heuristic scoring — reproducibility and explainability, not diagnostic
//! accuracy.

pub mod registry;
pub mod scoring;
pub mod types;

use std::sync::LazyLock;

use crate::config::TOP_DIAGNOSES_FOR_PRIORITY;
use crate::models::Likelihood;

use registry::ConditionRegistry;
use scoring::{build_haystack, clinical_priority, compare_diagnoses, score_condition, ConditionScore};
use types::{ClinicalReasoningResult, DifferentialDiagnosis, ReasoningInput};

static BUILTIN_REGISTRY: LazyLock<ConditionRegistry> = LazyLock::new(ConditionRegistry::builtin);

/// Run the reasoning engine against the built-in condition registry.
pub fn reason_default(input: &ReasoningInput) -> ClinicalReasoningResult {
    reason(input, &BUILTIN_REGISTRY)
}

/// Score every condition profile in `registry` against `input` and build
/// the ranked, banded, explained differential.
pub fn reason(input: &ReasoningInput, registry: &ConditionRegistry) -> ClinicalReasoningResult {
    let haystack = build_haystack(input);

    let mut scored: Vec<(DifferentialDiagnosis, ConditionScore)> = registry
        .profiles()
        .iter()
        .filter_map(|profile| score_condition(profile, &haystack, input))
        .map(|score| (diagnosis_from(&score), score))
        .collect();

    scored.sort_by(|a, b| compare_diagnoses(&a.0, &b.0));

    let mut reasoning_steps = Vec::new();
    let mut uncertainty_factors = Vec::new();
    for (_, score) in &scored {
        reasoning_steps.extend(trace_for(score));
        uncertainty_factors.extend(uncertainties_for(score));
    }
    if input.findings.is_empty() && !scored.is_empty() {
        uncertainty_factors
            .push("No examination findings provided; scores rely on reported symptoms only.".into());
    }

    let next_steps = scored
        .first()
        .map(|(dx, score)| next_steps_for(dx, score, &haystack))
        .unwrap_or_default();

    let differential_diagnoses: Vec<DifferentialDiagnosis> =
        scored.into_iter().map(|(dx, _)| dx).collect();
    let priority = clinical_priority(&differential_diagnoses, TOP_DIAGNOSES_FOR_PRIORITY);

    tracing::debug!(
        candidates = registry.len(),
        emitted = differential_diagnoses.len(),
        priority = priority.as_str(),
        "clinical reasoning complete"
    );

    ClinicalReasoningResult {
        differential_diagnoses,
        clinical_priority: priority,
        reasoning_steps,
        uncertainty_factors,
        next_steps,
    }
}

fn diagnosis_from(score: &ConditionScore) -> DifferentialDiagnosis {
    let profile = score.profile;
    DifferentialDiagnosis {
        condition: profile.condition.clone(),
        icd10_code: profile.icd10.clone(),
        probability: score.probability,
        likelihood: Likelihood::from_probability(score.probability),
        emergency_level: profile.base_emergency,
        supporting_features: score
            .matched_supporting
            .iter()
            .map(|f| f.pattern.clone())
            .collect(),
        opposing_features: score
            .matched_opposing
            .iter()
            .map(|f| f.pattern.clone())
            .collect(),
        required_investigations: profile.investigations.clone(),
        key_questions: profile.key_questions.clone(),
        specialty_referral: profile.specialty_referral.clone(),
    }
}

/// One trace entry per matched feature group, plus prior entries.
fn trace_for(score: &ConditionScore) -> Vec<String> {
    let condition = &score.profile.condition;
    let mut steps = Vec::new();

    let mut seen_groups: Vec<&str> = Vec::new();
    for feature in &score.profile.supporting {
        if seen_groups.contains(&feature.group.as_str()) {
            continue;
        }
        let in_group: Vec<_> = score
            .matched_supporting
            .iter()
            .filter(|m| m.group == feature.group)
            .collect();
        if in_group.is_empty() {
            continue;
        }
        seen_groups.push(feature.group.as_str());
        let sum: f32 = in_group.iter().map(|m| m.weight).sum();
        let patterns = in_group
            .iter()
            .map(|m| format!("'{}'", m.pattern))
            .collect::<Vec<_>>()
            .join(", ");
        steps.push(format!(
            "{condition}: {} supported by {patterns} (+{sum:.2})",
            feature.group
        ));
    }

    seen_groups.clear();
    for feature in &score.profile.opposing {
        if seen_groups.contains(&feature.group.as_str()) {
            continue;
        }
        let in_group: Vec<_> = score
            .matched_opposing
            .iter()
            .filter(|m| m.group == feature.group)
            .collect();
        if in_group.is_empty() {
            continue;
        }
        seen_groups.push(feature.group.as_str());
        let sum: f32 = in_group.iter().map(|m| m.weight).sum();
        let patterns = in_group
            .iter()
            .map(|m| format!("'{}'", m.pattern))
            .collect::<Vec<_>>()
            .join(", ");
        steps.push(format!(
            "{condition}: {} opposed by {patterns} (-{sum:.2})",
            feature.group
        ));
    }

    if score.demographic_prior > 0.0 {
        steps.push(format!(
            "{condition}: demographic prior applied (+{:.2})",
            score.demographic_prior
        ));
    }
    if score.history_prior > 0.0 {
        steps.push(format!(
            "{condition}: documented history of this condition (+{:.2})",
            score.history_prior
        ));
    }

    steps
}

/// Ambiguous evidence: patterns on both sides, and strong unmatched
/// discriminators for conditions that still scored.
fn uncertainties_for(score: &ConditionScore) -> Vec<String> {
    let condition = &score.profile.condition;
    let mut factors = Vec::new();

    for supporting in &score.matched_supporting {
        if score
            .matched_opposing
            .iter()
            .any(|o| o.pattern == supporting.pattern)
        {
            factors.push(format!(
                "{condition}: '{}' matched both supporting and opposing evidence",
                supporting.pattern
            ));
        }
    }

    let strongest_unmatched = score
        .profile
        .supporting
        .iter()
        .filter(|f| !score.matched_supporting.iter().any(|m| m.pattern == f.pattern))
        .max_by(|a, b| a.weight.total_cmp(&b.weight));
    if let Some(feature) = strongest_unmatched {
        if feature.weight >= 0.25 {
            factors.push(format!(
                "{condition}: key discriminator '{}' not assessed",
                feature.pattern
            ));
        }
    }

    factors
}

/// Key questions of the top diagnosis plus its not-yet-ordered investigations.
fn next_steps_for(
    dx: &DifferentialDiagnosis,
    score: &ConditionScore,
    haystack: &str,
) -> Vec<String> {
    let mut steps = dx.key_questions.clone();
    for investigation in &score.profile.investigations {
        if !haystack.contains(&investigation.test.to_lowercase()) {
            steps.push(format!(
                "Arrange {} ({})",
                investigation.test, investigation.expected_result
            ));
        }
    }
    steps
}
