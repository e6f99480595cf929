//! Section classifier: maps transcript spans onto note template sections.
//!
//! Pure keyword heuristics — no model calls. Confidence comes from the
//! count and specificity of matched phrases, with matches earlier in the
//! transcript weighted slightly higher to reflect dictation order.

pub mod keywords;

use crate::config::{CONFIDENCE_FLOOR, EARLY_POSITION_BOOST, REPEAT_MATCH_DAMPING};
use crate::models::{Categorization, TemplateSection};

use keywords::{keywords_for, SectionKeyword};

/// Classify a transcript against a set of template sections.
///
/// Returns one categorization per section whose confidence exceeds the
/// floor, in the order the sections were given. Deterministic: identical
/// input always yields identical output.
pub fn classify(transcript: &str, sections: &[TemplateSection]) -> Vec<Categorization> {
    if transcript.trim().is_empty() || sections.is_empty() {
        return Vec::new();
    }

    let lower = transcript.to_lowercase();
    let len = lower.len().max(1) as f32;

    let results: Vec<Categorization> = sections
        .iter()
        .filter_map(|section| {
            let table = keywords_for(section.section_type);
            let confidence = section_confidence(&lower, len, table);
            if confidence > CONFIDENCE_FLOOR {
                Some(Categorization {
                    section_id: section.id.clone(),
                    confidence,
                    suggested_content: extract_matching_sentences(transcript, table),
                })
            } else {
                None
            }
        })
        .collect();

    tracing::debug!(
        sections = sections.len(),
        matched = results.len(),
        "section classification complete"
    );

    results
}

/// Sum matched keyword weights, scaled by a positional factor. The first
/// occurrence of a phrase counts fully; repeats are damped.
fn section_confidence(lower: &str, len: f32, table: &[SectionKeyword]) -> f32 {
    let mut confidence = 0.0f32;

    for keyword in table {
        let mut occurrence = 0u32;
        for (pos, _) in lower.match_indices(keyword.phrase) {
            let positional = 1.0 + EARLY_POSITION_BOOST * (1.0 - pos as f32 / len);
            let damping = if occurrence == 0 { 1.0 } else { REPEAT_MATCH_DAMPING };
            confidence += keyword.weight * positional * damping;
            occurrence += 1;
            if occurrence >= 3 {
                break;
            }
        }
    }

    confidence.min(1.0)
}

/// Pull out the transcript sentences containing any matched phrase, in
/// transcript order.
fn extract_matching_sentences(transcript: &str, table: &[SectionKeyword]) -> String {
    transcript
        .split_inclusive(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|sentence| {
            if sentence.is_empty() {
                return false;
            }
            let lower = sentence.to_lowercase();
            table.iter().any(|k| lower.contains(k.phrase))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merge newly suggested content into an existing section value.
///
/// Idempotent: merging content the section already contains returns the
/// existing value unchanged. New content is appended after a blank line.
pub fn merge_section_content(existing: &str, new: &str) -> String {
    let new = new.trim();
    if new.is_empty() {
        return existing.to_string();
    }
    if existing.trim().is_empty() {
        return new.to_string();
    }
    if existing.contains(new) {
        return existing.to_string();
    }
    format!("{}\n\n{}", existing.trim_end(), new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionType;

    fn section(id: &str, section_type: SectionType) -> TemplateSection {
        TemplateSection {
            id: id.into(),
            title: id.into(),
            section_type,
            required: false,
            placeholder: String::new(),
        }
    }

    fn soap_sections() -> Vec<TemplateSection> {
        vec![
            section("subjective", SectionType::Subjective),
            section("objective", SectionType::Objective),
            section("assessment", SectionType::Assessment),
            section("plan", SectionType::Plan),
        ]
    }

    const TRANSCRIPT: &str = "Patient reports a dry cough for the past two weeks, \
        worse at night. On examination, clear lung fields, stable vitals, afebrile. \
        Impression is likely post-viral cough. Plan: follow up in two weeks, \
        advised to return if fever develops.";

    #[test]
    fn classifies_soap_transcript_into_all_four_sections() {
        let results = classify(TRANSCRIPT, &soap_sections());
        let ids: Vec<&str> = results.iter().map(|c| c.section_id.as_str()).collect();
        assert!(ids.contains(&"subjective"), "got: {ids:?}");
        assert!(ids.contains(&"objective"), "got: {ids:?}");
        assert!(ids.contains(&"assessment"), "got: {ids:?}");
        assert!(ids.contains(&"plan"), "got: {ids:?}");
    }

    #[test]
    fn confidence_floor_is_enforced() {
        let results = classify(TRANSCRIPT, &soap_sections());
        assert!(!results.is_empty());
        for c in &results {
            assert!(
                c.confidence > CONFIDENCE_FLOOR,
                "confidence {} at or below floor for {}",
                c.confidence,
                c.section_id
            );
            assert!(c.confidence <= 1.0);
        }
    }

    #[test]
    fn unrelated_section_not_emitted() {
        let sections = vec![section("meds", SectionType::Medication)];
        let results = classify("Patient reports feeling generally well today.", &sections);
        assert!(results.is_empty(), "got: {results:?}");
    }

    #[test]
    fn empty_transcript_returns_nothing() {
        assert!(classify("", &soap_sections()).is_empty());
        assert!(classify("   \n", &soap_sections()).is_empty());
    }

    #[test]
    fn no_sections_returns_nothing() {
        assert!(classify(TRANSCRIPT, &[]).is_empty());
    }

    #[test]
    fn deterministic_across_calls() {
        let a = classify(TRANSCRIPT, &soap_sections());
        let b = classify(TRANSCRIPT, &soap_sections());
        assert_eq!(a, b);
    }

    #[test]
    fn earlier_match_scores_higher_than_later_match() {
        let sections = vec![section("obj", SectionType::Objective)];
        let filler = "The patient talked about their garden for a while. ".repeat(10);
        let early = classify(&format!("On examination, blood pressure normal. {filler}"), &sections);
        let late = classify(&format!("{filler} On examination, blood pressure normal."), &sections);
        let (Some(e), Some(l)) = (early.first(), late.first()) else {
            panic!("both placements should clear the floor");
        };
        assert!(
            e.confidence > l.confidence,
            "early {} should beat late {}",
            e.confidence,
            l.confidence
        );
    }

    #[test]
    fn suggested_content_contains_matched_sentences_in_order() {
        let results = classify(TRANSCRIPT, &soap_sections());
        let plan = results.iter().find(|c| c.section_id == "plan").unwrap();
        assert!(plan.suggested_content.contains("follow up"), "got: {}", plan.suggested_content);
    }

    // ── merge_section_content ────────────────────────────────────────

    #[test]
    fn merge_into_empty_returns_new() {
        assert_eq!(merge_section_content("", "New findings."), "New findings.");
        assert_eq!(merge_section_content("  ", "New findings."), "New findings.");
    }

    #[test]
    fn merge_appends_after_blank_line() {
        let merged = merge_section_content("Existing note.", "New findings.");
        assert_eq!(merged, "Existing note.\n\nNew findings.");
    }

    #[test]
    fn merge_is_idempotent_for_repeated_content() {
        let once = merge_section_content("Existing note.", "New findings.");
        let twice = merge_section_content(&once, "New findings.");
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_with_empty_new_content_is_noop() {
        assert_eq!(merge_section_content("Existing note.", "  "), "Existing note.");
    }
}
