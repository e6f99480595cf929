//! Risk factor analyzer.
//!
//! Scans the consolidated note content, the patient profile, prior session
//! notes, and the medication list against a static rule registry. Rules
//! carry their own severity; rules sharing a factor name are merged into
//! one RiskFactor keeping the highest severity and the union of
//! recommendations.

pub mod rules;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{MedicationRecord, PatientProfile, RiskSeverity, SessionRecord};

use rules::{RiskRule, RiskTrigger};

/// One identified clinical risk. Derived, read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub severity: RiskSeverity,
    pub description: String,
    pub recommendations: Vec<String>,
}

/// Lowercased view of everything the triggers match against.
struct RiskContext {
    content: String,
    medications: Vec<String>,
    allergies: Vec<String>,
    age: Option<u32>,
}

impl RiskContext {
    fn build(
        content: &str,
        profile: &PatientProfile,
        sessions: &[SessionRecord],
        medications: &[MedicationRecord],
    ) -> Self {
        let mut combined = String::from(content);
        for session in sessions {
            combined.push('\n');
            combined.push_str(&session.content);
        }
        for condition in &profile.conditions {
            combined.push('\n');
            combined.push_str(condition);
        }
        Self {
            content: combined.to_lowercase(),
            medications: medications.iter().map(|m| m.name.to_lowercase()).collect(),
            allergies: profile.allergies.iter().map(|a| a.to_lowercase()).collect(),
            age: profile.age,
        }
    }

    fn content_has(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.content.contains(p))
    }

    fn takes_any(&self, patterns: &[&str]) -> bool {
        self.medications
            .iter()
            .any(|m| patterns.iter().any(|p| m.contains(p)))
    }

    fn allergy_conflict(&self) -> bool {
        self.medications.iter().any(|m| {
            self.allergies
                .iter()
                .any(|a| a.len() >= 4 && (m.contains(a.as_str()) || a.contains(m.as_str())))
        })
    }
}

/// Analyze risk with the built-in rule registry.
pub fn analyze_risk(
    content: &str,
    profile: &PatientProfile,
    sessions: &[SessionRecord],
    medications: &[MedicationRecord],
) -> Vec<RiskFactor> {
    analyze_risk_with(content, profile, sessions, medications, rules::rules())
}

/// Analyze risk with an explicit rule set. Rules fire independently; fired
/// rules are merged by factor name in first-fired order.
pub fn analyze_risk_with(
    content: &str,
    profile: &PatientProfile,
    sessions: &[SessionRecord],
    medications: &[MedicationRecord],
    rules: &[RiskRule],
) -> Vec<RiskFactor> {
    let ctx = RiskContext::build(content, profile, sessions, medications);

    let mut factors: Vec<RiskFactor> = Vec::new();
    for rule in rules.iter().filter(|r| triggered(r, &ctx)) {
        merge_rule(&mut factors, rule);
    }

    tracing::debug!(
        rules = rules.len(),
        factors = factors.len(),
        "risk analysis complete"
    );

    factors
}

fn triggered(rule: &RiskRule, ctx: &RiskContext) -> bool {
    match rule.trigger {
        RiskTrigger::ContentAny(phrases) => ctx.content_has(phrases),
        RiskTrigger::MedicationAny(patterns) => ctx.takes_any(patterns),
        RiskTrigger::ContentWithMedication {
            content,
            medications,
        } => ctx.content_has(content) && ctx.takes_any(medications),
        RiskTrigger::MedicationPair(a, b) => ctx.takes_any(a) && ctx.takes_any(b),
        RiskTrigger::MedicationCountAtLeast(n) => ctx.medications.len() >= n,
        RiskTrigger::AgeOverWithMedication { age, medications } => {
            ctx.age.map_or(false, |a| a > age) && ctx.takes_any(medications)
        }
        RiskTrigger::MedicationAllergyConflict => ctx.allergy_conflict(),
        RiskTrigger::ElevatedBloodPressureReading => has_elevated_bp(&ctx.content),
    }
}

static BP_READING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2,3})\s*/\s*(\d{2,3})\b").unwrap());

fn has_elevated_bp(content: &str) -> bool {
    BP_READING.captures_iter(content).any(|caps| {
        let systolic: u32 = caps[1].parse().unwrap_or(0);
        let diastolic: u32 = caps[2].parse().unwrap_or(0);
        systolic >= 160 || diastolic >= 100
    })
}

/// Dedup by factor name: the highest severity wins (its description comes
/// along); recommendations accumulate without duplicates.
fn merge_rule(factors: &mut Vec<RiskFactor>, rule: &RiskRule) {
    if let Some(existing) = factors.iter_mut().find(|f| f.factor == rule.factor) {
        if rule.severity > existing.severity {
            existing.severity = rule.severity;
            existing.description = rule.description.to_string();
        }
        for rec in rule.recommendations {
            if !existing.recommendations.iter().any(|r| r == rec) {
                existing.recommendations.push((*rec).to_string());
            }
        }
    } else {
        factors.push(RiskFactor {
            factor: rule.factor.to_string(),
            severity: rule.severity,
            description: rule.description.to_string(),
            recommendations: rule
                .recommendations
                .iter()
                .map(|r| (*r).to_string())
                .collect(),
        });
    }
}
