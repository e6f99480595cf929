//! Static protocol template table.
//!
//! Each entry keys a condition (plus aliases) to a builder that renders
//! the severity-adjusted protocol. Dosing here follows common primary-care
//! formulary defaults; it is template data for drafting, not a substitute
//! for local guidelines.

use crate::models::{CareSetting, EvidenceLevel, InterventionKind, ProtocolSeverity};

use super::{FollowUpPlan, Intervention, MonitoringItem, TreatmentProtocol};

pub struct ProtocolEntry {
    pub name: &'static str,
    /// Lowercase substrings that also select this entry.
    pub aliases: &'static [&'static str],
    pub build: fn(ProtocolSeverity) -> TreatmentProtocol,
}

pub fn entries() -> &'static [ProtocolEntry] {
    ENTRIES
}

static ENTRIES: &[ProtocolEntry] = &[
    ProtocolEntry {
        name: "Asthma",
        aliases: &["asthma", "cough-variant"],
        build: asthma,
    },
    ProtocolEntry {
        name: "Community-acquired pneumonia",
        aliases: &["pneumonia"],
        build: pneumonia,
    },
    ProtocolEntry {
        name: "Hypertension",
        aliases: &["hypertension", "high blood pressure"],
        build: hypertension,
    },
    ProtocolEntry {
        name: "Type 2 diabetes",
        aliases: &["diabetes"],
        build: type_2_diabetes,
    },
    ProtocolEntry {
        name: "Gastro-oesophageal reflux",
        aliases: &["reflux", "gerd", "gord"],
        build: reflux,
    },
    ProtocolEntry {
        name: "Urinary tract infection",
        aliases: &["uti", "cystitis"],
        build: urinary_tract_infection,
    },
    ProtocolEntry {
        name: "Acute gastroenteritis",
        aliases: &["gastroenteritis"],
        build: gastroenteritis,
    },
    ProtocolEntry {
        name: "Migraine",
        aliases: &["migraine"],
        build: migraine,
    },
];

// ─── Construction helpers ────────────────────────────────────────────────────

fn drug(
    intervention: &str,
    dosage: &str,
    duration: &str,
    instructions: &str,
    contraindications: &[&str],
    evidence: EvidenceLevel,
    essential_list: bool,
) -> Intervention {
    Intervention {
        intervention: intervention.into(),
        kind: InterventionKind::Medication,
        dosage: Some(dosage.into()),
        duration: duration.into(),
        instructions: instructions.into(),
        contraindications: strings(contraindications),
        evidence,
        essential_list,
    }
}

fn measure(
    intervention: &str,
    kind: InterventionKind,
    duration: &str,
    instructions: &str,
    evidence: EvidenceLevel,
) -> Intervention {
    Intervention {
        intervention: intervention.into(),
        kind,
        dosage: None,
        duration: duration.into(),
        instructions: instructions.into(),
        contraindications: Vec::new(),
        evidence,
        essential_list: false,
    }
}

fn monitor(parameter: &str, method: &str, frequency: &str, target: &str) -> MonitoringItem {
    MonitoringItem {
        parameter: parameter.into(),
        method: method.into(),
        frequency: frequency.into(),
        target: target.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Default setting policy; entries override where the escalation point
/// differs.
fn default_setting(severity: ProtocolSeverity) -> CareSetting {
    match severity {
        ProtocolSeverity::Mild | ProtocolSeverity::Moderate => CareSetting::Outpatient,
        ProtocolSeverity::Severe => CareSetting::Inpatient,
    }
}

// ─── Condition templates ─────────────────────────────────────────────────────

fn asthma(severity: ProtocolSeverity) -> TreatmentProtocol {
    let reliever = drug(
        "Salbutamol inhaler",
        "100 mcg, 1-2 puffs as needed",
        "Ongoing",
        "Use via spacer for acute symptoms, up to four times daily",
        &["Hypersensitivity to salbutamol"],
        EvidenceLevel::Strong,
        true,
    );
    let mut primary_treatment = vec![reliever];
    if severity >= ProtocolSeverity::Moderate {
        primary_treatment.push(drug(
            "Beclometasone inhaler",
            "100 mcg twice daily",
            "Review at 8 weeks",
            "Daily preventer; rinse mouth after use",
            &["Untreated oral candidiasis"],
            EvidenceLevel::Strong,
            true,
        ));
    }
    if severity == ProtocolSeverity::Severe {
        primary_treatment.push(drug(
            "Prednisolone",
            "40 mg once daily",
            "5 days",
            "Short rescue course for the acute exacerbation",
            &["Systemic fungal infection"],
            EvidenceLevel::Strong,
            true,
        ));
    }
    primary_treatment.push(measure(
        "Inhaler technique coaching",
        InterventionKind::Supportive,
        "Each visit",
        "Observe technique with the spacer and correct errors",
        EvidenceLevel::Strong,
    ));

    TreatmentProtocol {
        condition: "Asthma".into(),
        severity,
        setting: default_setting(severity),
        primary_treatment,
        monitoring: vec![
            monitor(
                "Peak expiratory flow",
                "Peak flow meter diary",
                "Twice daily for 2 weeks",
                "Above 80% of personal best",
            ),
            monitor(
                "Reliever use",
                "Patient report",
                "Each visit",
                "Fewer than three uses per week",
            ),
        ],
        follow_up: FollowUpPlan {
            interval: "4-8 weeks".into(),
            assessments: strings(&[
                "Symptom control score",
                "Inhaler technique",
                "Peak flow diary review",
            ]),
            red_flags: strings(&[
                "Speaking in single words or too breathless to talk",
                "Reliever needed more often than every four hours",
                "Nocturnal symptoms most nights",
            ]),
        },
        patient_education: strings(&[
            "Recognize and avoid personal triggers",
            "Follow the written asthma action plan",
            "Seek urgent care if the reliever stops helping",
        ]),
    }
}

fn pneumonia(severity: ProtocolSeverity) -> TreatmentProtocol {
    let primary_treatment = match severity {
        ProtocolSeverity::Mild => vec![drug(
            "Amoxicillin",
            "500 mg three times daily",
            "5 days",
            "Oral course; complete even if symptoms settle",
            &["Penicillin allergy"],
            EvidenceLevel::Strong,
            true,
        )],
        ProtocolSeverity::Moderate => vec![
            drug(
                "Amoxicillin",
                "1 g three times daily",
                "5-7 days",
                "Higher oral dose with early review",
                &["Penicillin allergy"],
                EvidenceLevel::Strong,
                true,
            ),
            drug(
                "Clarithromycin",
                "500 mg twice daily",
                "5-7 days",
                "Added atypical cover",
                &["QT prolongation", "Concurrent statin at high dose"],
                EvidenceLevel::Moderate,
                true,
            ),
        ],
        ProtocolSeverity::Severe => vec![
            drug(
                "Co-amoxiclav intravenous",
                "1.2 g three times daily",
                "Until stable, then oral switch",
                "Intravenous therapy with blood cultures before the first dose",
                &["Penicillin allergy", "Previous co-amoxiclav jaundice"],
                EvidenceLevel::Strong,
                true,
            ),
            measure(
                "Supplemental oxygen",
                InterventionKind::Supportive,
                "Until saturations stable",
                "Titrate to oxygen saturation of 94% or above",
                EvidenceLevel::Strong,
            ),
        ],
    };

    let setting = match severity {
        ProtocolSeverity::Mild => CareSetting::Outpatient,
        ProtocolSeverity::Moderate => CareSetting::UrgentCare,
        ProtocolSeverity::Severe => CareSetting::Inpatient,
    };

    TreatmentProtocol {
        condition: "Community-acquired pneumonia".into(),
        severity,
        setting,
        primary_treatment,
        monitoring: vec![
            monitor(
                "Temperature",
                "Thermometer",
                "Twice daily until afebrile",
                "Below 37.8 C for 48 hours",
            ),
            monitor(
                "Respiratory rate and oxygen saturation",
                "Observation",
                "Each review",
                "Rate below 24, saturation 94% or above",
            ),
        ],
        follow_up: FollowUpPlan {
            interval: "48-72 hours, then 6 weeks".into(),
            assessments: strings(&[
                "Clinical response to antibiotics",
                "Repeat chest X-ray at 6 weeks if symptoms persist",
            ]),
            red_flags: strings(&[
                "Worsening breathlessness or confusion",
                "Persistent fever beyond 72 hours of antibiotics",
                "Coughing blood",
            ]),
        },
        patient_education: strings(&[
            "Complete the full antibiotic course",
            "Rest and maintain fluid intake",
            "Expect the cough to take several weeks to settle",
        ]),
    }
}

fn hypertension(severity: ProtocolSeverity) -> TreatmentProtocol {
    let mut primary_treatment = vec![measure(
        "Lifestyle modification",
        InterventionKind::Lifestyle,
        "Ongoing",
        "Salt reduction, regular activity, weight management, alcohol moderation",
        EvidenceLevel::Strong,
    )];
    if severity >= ProtocolSeverity::Moderate {
        primary_treatment.push(drug(
            "Amlodipine",
            "5 mg once daily",
            "Ongoing, review at 4 weeks",
            "First-line calcium channel blocker; titrate to 10 mg if needed",
            &["Cardiogenic shock", "Severe aortic stenosis"],
            EvidenceLevel::Strong,
            true,
        ));
    }
    if severity == ProtocolSeverity::Severe {
        primary_treatment.push(drug(
            "Enalapril",
            "5 mg once daily",
            "Ongoing, review at 2 weeks",
            "Add-on ACE inhibitor; check renal function before and after",
            &["Pregnancy", "Bilateral renal artery stenosis", "Previous angioedema"],
            EvidenceLevel::Strong,
            true,
        ));
    }

    TreatmentProtocol {
        condition: "Hypertension".into(),
        severity,
        setting: if severity == ProtocolSeverity::Severe {
            CareSetting::UrgentCare
        } else {
            CareSetting::Outpatient
        },
        primary_treatment,
        monitoring: vec![
            monitor(
                "Blood pressure",
                "Home diary or clinic reading",
                "Weekly until controlled",
                "Below 140/90 mmHg",
            ),
            monitor(
                "Renal function and electrolytes",
                "Blood test",
                "Before treatment and 2-4 weeks after dose changes",
                "Stable creatinine and potassium",
            ),
        ],
        follow_up: FollowUpPlan {
            interval: "4 weeks until controlled, then 6 months".into(),
            assessments: strings(&[
                "Blood pressure trend",
                "Medication tolerance and adherence",
                "Cardiovascular risk review",
            ]),
            red_flags: strings(&[
                "Blood pressure above 180/120 mmHg",
                "Chest pain, new headache with visual change, or breathlessness",
            ]),
        },
        patient_education: strings(&[
            "Hypertension is usually symptomless; keep taking treatment",
            "Record home readings seated after five minutes of rest",
        ]),
    }
}

fn type_2_diabetes(severity: ProtocolSeverity) -> TreatmentProtocol {
    let mut primary_treatment = vec![measure(
        "Dietary and activity programme",
        InterventionKind::Lifestyle,
        "Ongoing",
        "Structured education, carbohydrate awareness, 150 minutes of activity weekly",
        EvidenceLevel::Strong,
    )];
    if severity >= ProtocolSeverity::Moderate {
        primary_treatment.push(drug(
            "Metformin",
            "500 mg twice daily with meals",
            "Ongoing, titrate over 2-4 weeks",
            "First-line; take with food to limit gastrointestinal upset",
            &["eGFR below 30", "Acute metabolic acidosis"],
            EvidenceLevel::Strong,
            true,
        ));
    }
    if severity == ProtocolSeverity::Severe {
        primary_treatment.push(drug(
            "Gliclazide",
            "40 mg once daily",
            "Ongoing, review at 4 weeks",
            "Add-on sulfonylurea; counsel on hypoglycaemia recognition",
            &["Severe hepatic impairment"],
            EvidenceLevel::Moderate,
            true,
        ));
    }

    TreatmentProtocol {
        condition: "Type 2 diabetes".into(),
        severity,
        setting: default_setting(severity),
        primary_treatment,
        monitoring: vec![
            monitor(
                "HbA1c",
                "Blood test",
                "Every 3 months until stable, then 6 months",
                "48-58 mmol/mol individualized",
            ),
            monitor(
                "Renal function",
                "Blood test",
                "Annually, or before metformin dose changes",
                "Stable eGFR",
            ),
            monitor(
                "Foot health",
                "Examination",
                "Annually",
                "No ulceration or loss of sensation",
            ),
        ],
        follow_up: FollowUpPlan {
            interval: "3 months".into(),
            assessments: strings(&[
                "Glycaemic control and hypoglycaemic episodes",
                "Weight and blood pressure",
                "Annual eye and foot screening status",
            ]),
            red_flags: strings(&[
                "Persistent vomiting or drowsiness",
                "Foot wound, discoloration, or new numbness",
            ]),
        },
        patient_education: strings(&[
            "Recognize symptoms of low blood sugar and carry fast-acting glucose",
            "Inspect feet daily",
            "Attend annual eye screening",
        ]),
    }
}

fn reflux(severity: ProtocolSeverity) -> TreatmentProtocol {
    let mut primary_treatment = vec![measure(
        "Lifestyle measures",
        InterventionKind::Lifestyle,
        "Ongoing",
        "Weight reduction, smaller evening meals, raise the head of the bed, avoid late caffeine and alcohol",
        EvidenceLevel::Moderate,
    )];
    if severity >= ProtocolSeverity::Moderate {
        primary_treatment.push(drug(
            "Omeprazole",
            "20 mg once daily before breakfast",
            "4-8 weeks, then review",
            "Full-dose proton pump inhibitor trial",
            &["Concurrent clopidogrel without review"],
            EvidenceLevel::Strong,
            true,
        ));
    } else {
        primary_treatment.push(drug(
            "Alginate antacid",
            "10-20 ml after meals and at bedtime",
            "As needed",
            "Symptomatic relief for infrequent heartburn",
            &[],
            EvidenceLevel::Moderate,
            true,
        ));
    }
    if severity == ProtocolSeverity::Severe {
        primary_treatment.push(measure(
            "Upper gastrointestinal endoscopy referral",
            InterventionKind::Procedure,
            "Single referral",
            "Assess for oesophagitis and exclude sinister pathology",
            EvidenceLevel::Strong,
        ));
    }

    TreatmentProtocol {
        condition: "Gastro-oesophageal reflux".into(),
        severity,
        setting: CareSetting::Outpatient,
        primary_treatment,
        monitoring: vec![monitor(
            "Symptom frequency",
            "Patient diary",
            "Review at 4 weeks",
            "Heartburn fewer than two days per week",
        )],
        follow_up: FollowUpPlan {
            interval: "4-8 weeks".into(),
            assessments: strings(&[
                "Response to acid suppression",
                "Step-down to lowest effective dose",
            ]),
            red_flags: strings(&[
                "Difficulty or pain on swallowing",
                "Unintentional weight loss",
                "Vomiting blood or black stools",
            ]),
        },
        patient_education: strings(&[
            "Take the proton pump inhibitor 30-60 minutes before breakfast",
            "Avoid lying down within three hours of eating",
        ]),
    }
}

fn urinary_tract_infection(severity: ProtocolSeverity) -> TreatmentProtocol {
    let primary_treatment = match severity {
        ProtocolSeverity::Mild | ProtocolSeverity::Moderate => vec![drug(
            "Nitrofurantoin",
            "100 mg modified-release twice daily",
            "3 days (5 days if moderate)",
            "Take with food; send urine culture if symptoms recur",
            &["eGFR below 45", "Term pregnancy"],
            EvidenceLevel::Strong,
            true,
        )],
        ProtocolSeverity::Severe => vec![
            drug(
                "Ceftriaxone intravenous",
                "1 g once daily",
                "Until afebrile 48 hours, then oral switch",
                "For suspected pyelonephritis; culture urine and blood first",
                &["Cephalosporin allergy"],
                EvidenceLevel::Strong,
                true,
            ),
            measure(
                "Intravenous fluids",
                InterventionKind::Supportive,
                "Until oral intake adequate",
                "Correct dehydration and support renal perfusion",
                EvidenceLevel::Moderate,
            ),
        ],
    };

    TreatmentProtocol {
        condition: "Urinary tract infection".into(),
        severity,
        setting: default_setting(severity),
        primary_treatment,
        monitoring: vec![monitor(
            "Symptoms",
            "Patient report",
            "48 hours after starting treatment",
            "Dysuria and frequency resolving",
        )],
        follow_up: FollowUpPlan {
            interval: "48 hours if not improving".into(),
            assessments: strings(&[
                "Treatment response",
                "Culture result and sensitivity check",
            ]),
            red_flags: strings(&[
                "Flank pain or rigors",
                "Fever above 38 C",
                "Vomiting preventing oral antibiotics",
            ]),
        },
        patient_education: strings(&[
            "Maintain good fluid intake",
            "Return promptly if fever or back pain develops",
        ]),
    }
}

fn gastroenteritis(severity: ProtocolSeverity) -> TreatmentProtocol {
    let mut primary_treatment = vec![measure(
        "Oral rehydration",
        InterventionKind::Supportive,
        "Until diarrhoea settles",
        "Small frequent volumes of oral rehydration solution after each loose stool",
        EvidenceLevel::Strong,
    )];
    if severity == ProtocolSeverity::Severe {
        primary_treatment.push(measure(
            "Intravenous rehydration",
            InterventionKind::Supportive,
            "Until tolerating oral fluids",
            "For clinical dehydration or persistent vomiting",
            EvidenceLevel::Strong,
        ));
    } else if severity == ProtocolSeverity::Moderate {
        primary_treatment.push(drug(
            "Zinc sulfate",
            "20 mg once daily",
            "10 days",
            "Shortens illness in children and in prolonged diarrhoea",
            &[],
            EvidenceLevel::Moderate,
            true,
        ));
    }

    TreatmentProtocol {
        condition: "Acute gastroenteritis".into(),
        severity,
        setting: default_setting(severity),
        primary_treatment,
        monitoring: vec![
            monitor(
                "Hydration status",
                "Clinical assessment",
                "Each review",
                "Moist mucous membranes, normal urine output",
            ),
            monitor(
                "Stool frequency",
                "Patient report",
                "Daily until settled",
                "Decreasing episodes, no blood",
            ),
        ],
        follow_up: FollowUpPlan {
            interval: "48 hours if not settling".into(),
            assessments: strings(&[
                "Hydration and ability to keep fluids down",
                "Stool culture if symptoms persist beyond one week",
            ]),
            red_flags: strings(&[
                "Blood in stool",
                "Signs of dehydration: drowsiness, reduced urine output",
                "High fever with severe abdominal pain",
            ]),
        },
        patient_education: strings(&[
            "Strict hand hygiene to limit household spread",
            "Reintroduce normal diet as soon as tolerated",
            "Avoid antidiarrhoeal drugs if there is blood in the stool or high fever",
        ]),
    }
}

fn migraine(severity: ProtocolSeverity) -> TreatmentProtocol {
    let mut primary_treatment = vec![drug(
        "Ibuprofen",
        "400 mg at onset",
        "As needed, max 3 days per week",
        "Take as early as possible in the attack",
        &["Peptic ulcer disease", "Severe renal impairment", "Aspirin-sensitive asthma"],
        EvidenceLevel::Strong,
        true,
    )];
    if severity >= ProtocolSeverity::Moderate {
        primary_treatment.push(drug(
            "Sumatriptan",
            "50 mg at onset",
            "As needed, max 2 doses per attack",
            "For attacks not settling with simple analgesia",
            &["Ischaemic heart disease", "Uncontrolled hypertension", "Previous stroke"],
            EvidenceLevel::Strong,
            false,
        ));
    }
    if severity == ProtocolSeverity::Severe {
        primary_treatment.push(drug(
            "Propranolol",
            "40 mg twice daily",
            "Trial for 3 months",
            "Daily preventer for frequent disabling attacks",
            &["Asthma", "Bradycardia", "Uncontrolled heart failure"],
            EvidenceLevel::Strong,
            true,
        ));
    }

    TreatmentProtocol {
        condition: "Migraine".into(),
        severity,
        setting: CareSetting::Outpatient,
        primary_treatment,
        monitoring: vec![monitor(
            "Attack frequency",
            "Headache diary",
            "Review at 8 weeks",
            "Fewer attacks per month than at baseline",
        )],
        follow_up: FollowUpPlan {
            interval: "8 weeks".into(),
            assessments: strings(&[
                "Headache diary review",
                "Medication overuse check",
                "Preventer tolerance if started",
            ]),
            red_flags: strings(&[
                "Sudden worst-ever headache",
                "Headache with fever, neck stiffness, or rash",
                "New neurological deficit",
            ]),
        },
        patient_education: strings(&[
            "Keep a trigger and headache diary",
            "Limit acute treatments to avoid medication-overuse headache",
        ]),
    }
}

// ─── Fallback ────────────────────────────────────────────────────────────────

/// Generic supportive-care protocol for conditions without a template.
pub fn generic_supportive(condition: &str, severity: ProtocolSeverity) -> TreatmentProtocol {
    TreatmentProtocol {
        condition: condition.to_string(),
        severity,
        setting: default_setting(severity),
        primary_treatment: vec![
            measure(
                "Symptomatic supportive care",
                InterventionKind::Supportive,
                "Until review",
                "Rest, adequate hydration, and simple analgesia as appropriate",
                EvidenceLevel::ExpertOpinion,
            ),
            drug(
                "Paracetamol",
                "1 g up to four times daily",
                "As needed",
                "For pain or fever; do not exceed 4 g in 24 hours",
                &["Severe hepatic impairment"],
                EvidenceLevel::Moderate,
                true,
            ),
        ],
        monitoring: vec![monitor(
            "Symptom course",
            "Patient report",
            "Review at 48-72 hours",
            "Improving or resolved",
        )],
        follow_up: FollowUpPlan {
            interval: "48-72 hours, earlier if worse".into(),
            assessments: strings(&[
                "Re-examine if symptoms persist",
                "Escalate investigations if no clear cause emerges",
            ]),
            red_flags: strings(&[
                "Rapidly worsening symptoms",
                "High fever, confusion, or breathlessness",
            ]),
        },
        patient_education: strings(&[
            "Return promptly if symptoms worsen or new symptoms appear",
            "This plan treats symptoms while the cause is clarified",
        ]),
    }
}
