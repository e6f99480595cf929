//! Keyword tables driving section classification.
//!
//! Each section type carries a static table of (phrase, specificity weight).
//! Weights are additive; highly section-specific phrases carry more weight
//! than generic clinical vocabulary.

use crate::models::SectionType;

/// A phrase associated with a section type, with a specificity weight.
pub struct SectionKeyword {
    pub phrase: &'static str,
    pub weight: f32,
}

const fn kw(phrase: &'static str, weight: f32) -> SectionKeyword {
    SectionKeyword { phrase, weight }
}

static SUBJECTIVE_KEYWORDS: &[SectionKeyword] = &[
    kw("complains of", 0.30),
    kw("presents with", 0.30),
    kw("patient states", 0.30),
    kw("patient reports", 0.30),
    kw("reports", 0.15),
    kw("describes", 0.15),
    kw("feels", 0.15),
    kw("denies", 0.20),
    kw("worse at", 0.15),
    kw("started", 0.10),
    kw("for the past", 0.15),
    kw("pain", 0.10),
    kw("cough", 0.10),
    kw("headache", 0.10),
    kw("fatigue", 0.10),
];

static OBJECTIVE_KEYWORDS: &[SectionKeyword] = &[
    kw("on examination", 0.35),
    kw("vital signs", 0.30),
    kw("blood pressure", 0.25),
    kw("heart rate", 0.25),
    kw("pulse", 0.20),
    kw("temperature", 0.20),
    kw("respiratory rate", 0.30),
    kw("saturation", 0.25),
    kw("afebrile", 0.25),
    kw("stable vitals", 0.30),
    kw("weight", 0.10),
    kw("bmi", 0.20),
];

static ASSESSMENT_KEYWORDS: &[SectionKeyword] = &[
    kw("impression", 0.35),
    kw("assessment", 0.35),
    kw("differential", 0.35),
    kw("diagnosis", 0.30),
    kw("consistent with", 0.30),
    kw("suggestive of", 0.30),
    kw("likely", 0.20),
    kw("suspect", 0.25),
    kw("ruled out", 0.25),
];

static PLAN_KEYWORDS: &[SectionKeyword] = &[
    kw("plan", 0.30),
    kw("follow up", 0.25),
    kw("follow-up", 0.25),
    kw("review in", 0.25),
    kw("refer", 0.25),
    kw("prescribe", 0.25),
    kw("advised", 0.25),
    kw("counselled", 0.25),
    kw("counseled", 0.25),
    kw("monitor", 0.20),
    kw("safety-net", 0.30),
    kw("return if", 0.25),
];

static MEDICATION_KEYWORDS: &[SectionKeyword] = &[
    kw("medication", 0.30),
    kw("prescription", 0.30),
    kw("twice daily", 0.30),
    kw("once daily", 0.30),
    kw("three times", 0.25),
    kw("tablet", 0.25),
    kw("capsule", 0.25),
    kw("dose", 0.20),
    kw("mg", 0.15),
    kw("refill", 0.25),
    kw("inhaler", 0.25),
];

static HISTORY_KEYWORDS: &[SectionKeyword] = &[
    kw("past medical history", 0.40),
    kw("family history", 0.35),
    kw("surgical history", 0.35),
    kw("known case of", 0.30),
    kw("diagnosed with", 0.25),
    kw("previous", 0.15),
    kw("chronic", 0.20),
    kw("allerg", 0.25),
    kw("smoker", 0.20),
    kw("years ago", 0.20),
];

static EXAMINATION_KEYWORDS: &[SectionKeyword] = &[
    kw("auscultation", 0.35),
    kw("palpation", 0.35),
    kw("percussion", 0.35),
    kw("inspection", 0.30),
    kw("tenderness", 0.30),
    kw("reflexes", 0.30),
    kw("normal heart sounds", 0.30),
    kw("clear lung fields", 0.30),
    kw("no masses", 0.25),
    kw("soft and non-tender", 0.30),
];

static INVESTIGATIONS_KEYWORDS: &[SectionKeyword] = &[
    kw("blood test", 0.30),
    kw("full blood count", 0.35),
    kw("x-ray", 0.30),
    kw("ecg", 0.30),
    kw("ultrasound", 0.30),
    kw("ct scan", 0.30),
    kw("hba1c", 0.30),
    kw("urinalysis", 0.30),
    kw("swab", 0.25),
    kw("results", 0.15),
];

/// The keyword table for a given section type.
pub fn keywords_for(section_type: SectionType) -> &'static [SectionKeyword] {
    match section_type {
        SectionType::Subjective => SUBJECTIVE_KEYWORDS,
        SectionType::Objective => OBJECTIVE_KEYWORDS,
        SectionType::Assessment => ASSESSMENT_KEYWORDS,
        SectionType::Plan => PLAN_KEYWORDS,
        SectionType::Medication => MEDICATION_KEYWORDS,
        SectionType::History => HISTORY_KEYWORDS,
        SectionType::Examination => EXAMINATION_KEYWORDS,
        SectionType::Investigations => INVESTIGATIONS_KEYWORDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_type_has_a_table() {
        for st in [
            SectionType::Subjective,
            SectionType::Objective,
            SectionType::Assessment,
            SectionType::Plan,
            SectionType::Medication,
            SectionType::History,
            SectionType::Examination,
            SectionType::Investigations,
        ] {
            assert!(!keywords_for(st).is_empty(), "empty table for {st}");
        }
    }

    #[test]
    fn phrases_are_lowercase() {
        for st in [SectionType::Subjective, SectionType::Plan, SectionType::History] {
            for k in keywords_for(st) {
                assert_eq!(k.phrase, k.phrase.to_lowercase(), "phrase not lowercase");
            }
        }
    }

    #[test]
    fn weights_are_positive_and_bounded() {
        for k in keywords_for(SectionType::Objective) {
            assert!(k.weight > 0.0 && k.weight <= 0.5, "weight out of range: {}", k.weight);
        }
    }
}
