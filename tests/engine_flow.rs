//! End-to-end flow: one consultation transcript pushed through all five
//! engine components, the way a calling session layer would.

use std::sync::Once;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing_subscriber::EnvFilter;

use auscult::models::{
    ClinicalPriority, EmergencyLevel, MedicationRecord, PatientProfile, ProtocolSeverity,
    SectionType, Sex, TemplateSection,
};
use auscult::{
    analyze_risk, analyze_transcription, classify, merge_suggestions, protocol, reason_default,
    regional_suggestions, ReasoningInput,
};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .init();
    });
}

const TRANSCRIPT: &str = "Patient reports a persistent dry cough for two weeks, \
    worse at night, no fever. On examination clear lung fields, stable vitals, \
    afebrile, blood pressure 132/84. Impression: likely cough-variant asthma. \
    Plan: follow up in two weeks, order blood tests, provide dietary advice, \
    and complete a TB screen per the local programme.";

fn clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 10)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn soap_sections() -> Vec<TemplateSection> {
    [
        ("subjective", SectionType::Subjective),
        ("objective", SectionType::Objective),
        ("assessment", SectionType::Assessment),
        ("plan", SectionType::Plan),
    ]
    .into_iter()
    .map(|(id, section_type)| TemplateSection {
        id: id.into(),
        title: id.into(),
        section_type,
        required: false,
        placeholder: String::new(),
    })
    .collect()
}

#[test]
fn transcript_flows_through_all_five_components() {
    init_tracing();

    // 1. Section classification
    let categorizations = classify(TRANSCRIPT, &soap_sections());
    assert!(categorizations.iter().any(|c| c.section_id == "plan"));

    // 2. Differential diagnosis
    let input = ReasoningInput {
        complaint: "persistent dry cough, two weeks, worse at night".into(),
        symptoms: vec!["dry cough".into(), "nocturnal worsening".into()],
        profile: PatientProfile {
            age: Some(34),
            sex: Some(Sex::Female),
            ..Default::default()
        },
        findings: vec![
            "clear lung fields".into(),
            "stable vitals".into(),
            "afebrile".into(),
        ],
        prior_conditions: vec![],
    };
    let reasoning = reason_default(&input);
    let top = reasoning
        .differential_diagnoses
        .first()
        .expect("no diagnosis for a classic presentation");
    assert_eq!(top.emergency_level, EmergencyLevel::Routine);
    assert_eq!(reasoning.clinical_priority, ClinicalPriority::Low);

    // 3. Risk analysis over the same content plus the medication list
    let meds = [MedicationRecord {
        name: "Salbutamol".into(),
        dose: "100 mcg".into(),
        frequency: "as needed".into(),
    }];
    let risks = analyze_risk(TRANSCRIPT, &input.profile, &[], &meds);
    assert!(
        !risks.iter().any(|r| r.factor == "Uncontrolled Hypertension"),
        "normal BP reading must not fire: {risks:?}"
    );

    // 4. Task suggestions, general and regional, merged
    let tasks = merge_suggestions(vec![
        analyze_transcription(TRANSCRIPT, clock()),
        regional_suggestions(TRANSCRIPT, clock()),
    ]);
    let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
    assert!(descriptions.contains(&"Schedule follow-up appointment"));
    assert!(descriptions.contains(&"Order blood tests"));
    assert!(descriptions.contains(&"Complete TB symptom screen and sputum collection"));
    for task in &tasks {
        assert_eq!(task.created_at, clock());
        assert!(task.due_date > clock());
        assert!(task.due_date <= clock() + Duration::days(30));
    }

    // 5. Protocol for the selected top diagnosis
    let plan = protocol(&top.condition, ProtocolSeverity::Mild);
    assert!(!plan.primary_treatment.is_empty());
    assert_eq!(plan.severity, ProtocolSeverity::Mild);
}

#[test]
fn whole_flow_is_deterministic() {
    init_tracing();

    let input = ReasoningInput {
        complaint: "crushing chest pain radiating to the left arm".into(),
        symptoms: vec!["chest pain".into(), "sweating".into()],
        profile: PatientProfile {
            age: Some(58),
            sex: Some(Sex::Male),
            ..Default::default()
        },
        findings: vec![],
        prior_conditions: vec![],
    };

    assert_eq!(reason_default(&input), reason_default(&input));
    assert_eq!(
        classify(TRANSCRIPT, &soap_sections()),
        classify(TRANSCRIPT, &soap_sections())
    );
    assert_eq!(
        analyze_transcription(TRANSCRIPT, clock()),
        analyze_transcription(TRANSCRIPT, clock())
    );
    assert_eq!(
        protocol("migraine", ProtocolSeverity::Severe),
        protocol("migraine", ProtocolSeverity::Severe)
    );
}
