//! Condition profile registry.
//!
//! Profiles are declarative data: weighted feature lists, demographic
//! bands, investigations, and key questions. New conditions are additive —
//! no branching code. A custom registry can be loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    Availability, CostCategory, EmergencyLevel, InvestigationKind, Sex,
};

use super::types::Investigation;

/// A weighted clinical feature, matched case-insensitively as a substring
/// of the combined complaint + symptoms + findings text. `group` labels
/// the feature family for the reasoning trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub pattern: String,
    pub weight: f32,
    pub group: String,
}

/// An additive demographic prior. Applies when the patient falls inside
/// the (optional) age range and matches the (optional) sex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicBand {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub sex: Option<Sex>,
    pub weight: f32,
}

/// One candidate condition the engine can score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionProfile {
    pub condition: String,
    pub icd10: String,
    pub base_emergency: EmergencyLevel,
    pub supporting: Vec<Feature>,
    pub opposing: Vec<Feature>,
    pub demographics: Vec<DemographicBand>,
    pub investigations: Vec<Investigation>,
    pub key_questions: Vec<String>,
    pub specialty_referral: Option<String>,
}

/// The set of condition profiles a reasoning run scores against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionRegistry {
    profiles: Vec<ConditionProfile>,
}

impl ConditionRegistry {
    pub fn new(profiles: Vec<ConditionProfile>) -> Self {
        Self { profiles }
    }

    /// Load a custom registry from a JSON array of condition profiles.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let profiles: Vec<ConditionProfile> = serde_json::from_str(json)
            .map_err(|e| EngineError::RegistryParse("condition registry".into(), e.to_string()))?;
        Ok(Self { profiles })
    }

    /// Load a custom registry from a JSON file. Meant for startup
    /// configuration; the engine itself never touches the filesystem.
    pub fn from_file(path: &std::path::Path) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| EngineError::RegistryLoad(path.display().to_string(), e.to_string()))?;
        Self::from_json(&json)
    }

    pub fn profiles(&self) -> &[ConditionProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The built-in registry of common primary-care presentations.
    pub fn builtin() -> Self {
        Self::new(vec![
            cough_variant_asthma(),
            upper_airway_cough_syndrome(),
            reflux_cough(),
            community_acquired_pneumonia(),
            pulmonary_tuberculosis(),
            acute_coronary_syndrome(),
            pulmonary_embolism(),
            congestive_heart_failure(),
            migraine(),
            subarachnoid_hemorrhage(),
            acute_appendicitis(),
            acute_gastroenteritis(),
            urinary_tract_infection(),
            type_2_diabetes(),
        ])
    }
}

// ─── Construction helpers ────────────────────────────────────────────────────

fn f(pattern: &str, weight: f32, group: &str) -> Feature {
    Feature {
        pattern: pattern.into(),
        weight,
        group: group.into(),
    }
}

fn band(min_age: Option<u32>, max_age: Option<u32>, sex: Option<Sex>, weight: f32) -> DemographicBand {
    DemographicBand {
        min_age,
        max_age,
        sex,
        weight,
    }
}

fn inv(
    test: &str,
    kind: InvestigationKind,
    urgency: EmergencyLevel,
    cost: CostCategory,
    availability: Availability,
    expected_result: &str,
) -> Investigation {
    Investigation {
        test: test.into(),
        kind,
        urgency,
        cost,
        availability,
        expected_result: expected_result.into(),
    }
}

// ─── Respiratory ─────────────────────────────────────────────────────────────

fn cough_variant_asthma() -> ConditionProfile {
    ConditionProfile {
        condition: "Cough-variant asthma".into(),
        icd10: "J45.9".into(),
        base_emergency: EmergencyLevel::Routine,
        supporting: vec![
            f("dry cough", 0.30, "cough character"),
            f("nocturnal", 0.30, "nocturnal pattern"),
            f("night", 0.20, "nocturnal pattern"),
            f("wheeze", 0.25, "airway reactivity"),
            f("exercise", 0.15, "airway reactivity"),
        ],
        opposing: vec![
            f("fever", 0.20, "infective features"),
            f("purulent", 0.20, "infective features"),
        ],
        demographics: vec![],
        investigations: vec![
            inv(
                "Spirometry with bronchodilator response",
                InvestigationKind::Bedside,
                EmergencyLevel::Routine,
                CostCategory::Medium,
                Availability::Specialist,
                "Reversible airway obstruction",
            ),
            inv(
                "Peak flow diary",
                InvestigationKind::Bedside,
                EmergencyLevel::Routine,
                CostCategory::Low,
                Availability::Widespread,
                "Diurnal variability above 20 percent",
            ),
        ],
        key_questions: vec![
            "How long has the cough been present, and is it triggered by exercise, cold air, or allergen exposure?".into(),
            "Any personal or family history of asthma, eczema, or hay fever?".into(),
        ],
        specialty_referral: None,
    }
}

fn upper_airway_cough_syndrome() -> ConditionProfile {
    ConditionProfile {
        condition: "Upper airway cough syndrome".into(),
        icd10: "J31.0".into(),
        base_emergency: EmergencyLevel::Routine,
        supporting: vec![
            f("dry cough", 0.35, "cough character"),
            f("night", 0.30, "nocturnal pattern"),
            f("postnasal", 0.30, "nasal symptoms"),
            f("throat clearing", 0.25, "nasal symptoms"),
            f("runny nose", 0.20, "nasal symptoms"),
        ],
        opposing: vec![
            f("fever", 0.20, "infective features"),
            f("productive", 0.20, "cough character"),
        ],
        demographics: vec![],
        investigations: vec![
            inv(
                "Nasal examination",
                InvestigationKind::Bedside,
                EmergencyLevel::Routine,
                CostCategory::Low,
                Availability::Widespread,
                "Cobblestoning of the posterior pharynx",
            ),
            inv(
                "Trial of intranasal corticosteroid",
                InvestigationKind::Procedure,
                EmergencyLevel::Routine,
                CostCategory::Low,
                Availability::Widespread,
                "Symptom resolution within two weeks",
            ),
        ],
        key_questions: vec![
            "How many weeks has the cough persisted, and is there daytime throat clearing?".into(),
            "Any recent upper respiratory infection, smoke, or allergen exposure?".into(),
        ],
        specialty_referral: None,
    }
}

fn reflux_cough() -> ConditionProfile {
    ConditionProfile {
        condition: "Reflux-associated cough".into(),
        icd10: "K21.0".into(),
        base_emergency: EmergencyLevel::Routine,
        supporting: vec![
            f("cough", 0.20, "cough character"),
            f("night", 0.20, "nocturnal pattern"),
            f("lying down", 0.25, "positional pattern"),
            f("heartburn", 0.35, "reflux symptoms"),
            f("acid", 0.25, "reflux symptoms"),
            f("hoarse", 0.15, "laryngeal irritation"),
        ],
        opposing: vec![f("fever", 0.20, "infective features")],
        demographics: vec![],
        investigations: vec![inv(
            "Trial of proton pump inhibitor",
            InvestigationKind::Procedure,
            EmergencyLevel::Routine,
            CostCategory::Low,
            Availability::Widespread,
            "Cough improvement within eight weeks",
        )],
        key_questions: vec![
            "Is the cough worse after meals or when lying flat?".into(),
            "Any heartburn, regurgitation, or sour taste?".into(),
        ],
        specialty_referral: None,
    }
}

fn community_acquired_pneumonia() -> ConditionProfile {
    ConditionProfile {
        condition: "Community-acquired pneumonia".into(),
        icd10: "J18.9".into(),
        base_emergency: EmergencyLevel::Urgent,
        supporting: vec![
            f("cough", 0.15, "cough character"),
            f("productive", 0.25, "cough character"),
            f("fever", 0.30, "infective features"),
            f("chills", 0.20, "infective features"),
            f("pleuritic", 0.25, "chest signs"),
            f("crackles", 0.30, "chest signs"),
            f("shortness of breath", 0.25, "respiratory distress"),
        ],
        opposing: vec![
            f("clear lung fields", 0.35, "examination"),
            f("afebrile", 0.30, "examination"),
            f("stable vitals", 0.15, "examination"),
        ],
        demographics: vec![band(Some(65), None, None, 0.10)],
        investigations: vec![
            inv(
                "Chest X-ray",
                InvestigationKind::Imaging,
                EmergencyLevel::Urgent,
                CostCategory::Medium,
                Availability::Widespread,
                "Lobar consolidation",
            ),
            inv(
                "Full blood count",
                InvestigationKind::Laboratory,
                EmergencyLevel::Urgent,
                CostCategory::Low,
                Availability::Widespread,
                "Raised white cell count",
            ),
        ],
        key_questions: vec![
            "When did the fever start, and is the sputum discolored?".into(),
            "Any recent travel, sick contacts, or aspiration risk?".into(),
        ],
        specialty_referral: None,
    }
}

fn pulmonary_tuberculosis() -> ConditionProfile {
    ConditionProfile {
        condition: "Pulmonary tuberculosis".into(),
        icd10: "A15.0".into(),
        base_emergency: EmergencyLevel::Soon,
        supporting: vec![
            f("cough", 0.15, "cough character"),
            f("night sweats", 0.35, "constitutional symptoms"),
            f("weight loss", 0.30, "constitutional symptoms"),
            f("coughing blood", 0.30, "red flags"),
            f("tb contact", 0.30, "exposure"),
        ],
        opposing: vec![
            f("afebrile", 0.20, "examination"),
            f("clear lung fields", 0.25, "examination"),
        ],
        demographics: vec![],
        investigations: vec![
            inv(
                "Sputum nucleic acid amplification test",
                InvestigationKind::Laboratory,
                EmergencyLevel::Soon,
                CostCategory::Medium,
                Availability::Widespread,
                "Mycobacterium tuberculosis detected",
            ),
            inv(
                "Chest X-ray",
                InvestigationKind::Imaging,
                EmergencyLevel::Soon,
                CostCategory::Medium,
                Availability::Widespread,
                "Upper lobe infiltrates or cavitation",
            ),
        ],
        key_questions: vec![
            "How many weeks has the cough lasted, and has there been contact with a TB case?".into(),
            "Any night sweats, weight loss, or coughing of blood?".into(),
        ],
        specialty_referral: None,
    }
}

// ─── Cardiovascular ──────────────────────────────────────────────────────────

fn acute_coronary_syndrome() -> ConditionProfile {
    ConditionProfile {
        condition: "Acute coronary syndrome".into(),
        icd10: "I21.9".into(),
        base_emergency: EmergencyLevel::Immediate,
        supporting: vec![
            f("chest pain", 0.35, "chest pain character"),
            f("crushing", 0.30, "chest pain character"),
            f("pressure", 0.20, "chest pain character"),
            f("radiat", 0.25, "radiation"),
            f("left arm", 0.25, "radiation"),
            f("sweating", 0.20, "autonomic features"),
            f("nausea", 0.10, "autonomic features"),
            f("exertion", 0.20, "exertional pattern"),
        ],
        opposing: vec![
            f("reproducible tenderness", 0.30, "chest wall signs"),
            f("sharp", 0.15, "chest pain character"),
            f("positional", 0.20, "chest pain character"),
        ],
        demographics: vec![
            band(Some(45), None, Some(Sex::Male), 0.10),
            band(Some(55), None, None, 0.05),
        ],
        investigations: vec![
            inv(
                "12-lead ECG",
                InvestigationKind::Bedside,
                EmergencyLevel::Immediate,
                CostCategory::Low,
                Availability::Widespread,
                "ST-segment or T-wave changes",
            ),
            inv(
                "High-sensitivity troponin",
                InvestigationKind::Laboratory,
                EmergencyLevel::Immediate,
                CostCategory::Medium,
                Availability::Widespread,
                "Elevated troponin",
            ),
        ],
        key_questions: vec![
            "How long has the pain lasted, and does it come on with exertion?".into(),
            "Any radiation to the arm or jaw, sweating, or breathlessness?".into(),
        ],
        specialty_referral: Some("Cardiology".into()),
    }
}

fn pulmonary_embolism() -> ConditionProfile {
    ConditionProfile {
        condition: "Pulmonary embolism".into(),
        icd10: "I26.9".into(),
        base_emergency: EmergencyLevel::Immediate,
        supporting: vec![
            f("sudden shortness of breath", 0.35, "respiratory distress"),
            f("pleuritic", 0.25, "chest signs"),
            f("leg swelling", 0.30, "thrombosis risk"),
            f("immobil", 0.25, "thrombosis risk"),
            f("recent surgery", 0.25, "thrombosis risk"),
            f("tachycard", 0.20, "vital signs"),
        ],
        opposing: vec![f("gradual onset", 0.25, "onset pattern")],
        demographics: vec![],
        investigations: vec![
            inv(
                "D-dimer",
                InvestigationKind::Laboratory,
                EmergencyLevel::Immediate,
                CostCategory::Low,
                Availability::Widespread,
                "Elevated D-dimer",
            ),
            inv(
                "CT pulmonary angiogram",
                InvestigationKind::Imaging,
                EmergencyLevel::Immediate,
                CostCategory::High,
                Availability::Specialist,
                "Filling defect in pulmonary artery",
            ),
        ],
        key_questions: vec![
            "Was the breathlessness sudden in onset?".into(),
            "Any recent surgery, long travel, immobilization, or calf swelling?".into(),
        ],
        specialty_referral: None,
    }
}

fn congestive_heart_failure() -> ConditionProfile {
    ConditionProfile {
        condition: "Congestive heart failure".into(),
        icd10: "I50.9".into(),
        base_emergency: EmergencyLevel::Urgent,
        supporting: vec![
            f("orthopnea", 0.35, "congestion pattern"),
            f("waking breathless", 0.30, "congestion pattern"),
            f("leg swelling", 0.25, "congestion pattern"),
            f("swollen ankles", 0.25, "congestion pattern"),
            f("shortness of breath", 0.20, "respiratory distress"),
            f("fatigue", 0.15, "constitutional symptoms"),
        ],
        opposing: vec![],
        demographics: vec![band(Some(65), None, None, 0.10)],
        investigations: vec![
            inv(
                "B-type natriuretic peptide",
                InvestigationKind::Laboratory,
                EmergencyLevel::Urgent,
                CostCategory::Medium,
                Availability::Widespread,
                "Elevated BNP",
            ),
            inv(
                "Echocardiogram",
                InvestigationKind::Imaging,
                EmergencyLevel::Soon,
                CostCategory::High,
                Availability::Specialist,
                "Reduced ejection fraction",
            ),
        ],
        key_questions: vec![
            "How many pillows do you sleep on, and do you wake at night breathless?".into(),
            "Has the ankle swelling or weight changed recently?".into(),
        ],
        specialty_referral: Some("Cardiology".into()),
    }
}

// ─── Neurological ────────────────────────────────────────────────────────────

fn migraine() -> ConditionProfile {
    ConditionProfile {
        condition: "Migraine".into(),
        icd10: "G43.9".into(),
        base_emergency: EmergencyLevel::Routine,
        supporting: vec![
            f("headache", 0.25, "headache character"),
            f("throbbing", 0.30, "headache character"),
            f("one side", 0.25, "headache character"),
            f("unilateral", 0.25, "headache character"),
            f("photophobia", 0.25, "sensory sensitivity"),
            f("aura", 0.30, "aura"),
            f("nausea", 0.15, "autonomic features"),
        ],
        opposing: vec![
            f("thunderclap", 0.40, "red flags"),
            f("worst headache", 0.40, "red flags"),
            f("neck stiffness", 0.30, "red flags"),
            f("fever", 0.25, "infective features"),
        ],
        demographics: vec![band(None, Some(50), Some(Sex::Female), 0.10)],
        investigations: vec![inv(
            "Headache diary",
            InvestigationKind::Bedside,
            EmergencyLevel::Routine,
            CostCategory::Low,
            Availability::Widespread,
            "Episodic pattern with identifiable triggers",
        )],
        key_questions: vec![
            "How long do the attacks last, and are there known triggers?".into(),
            "Any visual aura, nausea, or sensitivity to light and sound?".into(),
        ],
        specialty_referral: None,
    }
}

fn subarachnoid_hemorrhage() -> ConditionProfile {
    ConditionProfile {
        condition: "Subarachnoid hemorrhage".into(),
        icd10: "I60.9".into(),
        base_emergency: EmergencyLevel::Immediate,
        supporting: vec![
            f("thunderclap", 0.45, "red flags"),
            f("worst headache", 0.45, "red flags"),
            f("sudden", 0.15, "onset pattern"),
            f("neck stiffness", 0.25, "meningeal signs"),
            f("vomiting", 0.15, "autonomic features"),
        ],
        opposing: vec![f("gradual", 0.30, "onset pattern")],
        demographics: vec![],
        investigations: vec![
            inv(
                "Non-contrast CT head",
                InvestigationKind::Imaging,
                EmergencyLevel::Immediate,
                CostCategory::High,
                Availability::Widespread,
                "Subarachnoid blood",
            ),
            inv(
                "Lumbar puncture",
                InvestigationKind::Procedure,
                EmergencyLevel::Immediate,
                CostCategory::Medium,
                Availability::Specialist,
                "Xanthochromia",
            ),
        ],
        key_questions: vec![
            "Did the headache reach maximum intensity within one minute?".into(),
            "Any loss of consciousness, neck stiffness, or vomiting?".into(),
        ],
        specialty_referral: Some("Neurosurgery".into()),
    }
}

// ─── Abdominal / infectious ──────────────────────────────────────────────────

fn acute_appendicitis() -> ConditionProfile {
    ConditionProfile {
        condition: "Acute appendicitis".into(),
        icd10: "K35.80".into(),
        base_emergency: EmergencyLevel::Urgent,
        supporting: vec![
            f("right lower quadrant", 0.35, "pain localization"),
            f("right iliac", 0.35, "pain localization"),
            f("abdominal pain", 0.15, "pain localization"),
            f("migrat", 0.25, "pain migration"),
            f("rebound", 0.30, "peritoneal signs"),
            f("guarding", 0.30, "peritoneal signs"),
            f("loss of appetite", 0.20, "constitutional symptoms"),
        ],
        opposing: vec![f("diarrhea", 0.15, "gi symptoms")],
        demographics: vec![band(None, Some(40), None, 0.05)],
        investigations: vec![
            inv(
                "Abdominal ultrasound",
                InvestigationKind::Imaging,
                EmergencyLevel::Urgent,
                CostCategory::Medium,
                Availability::Widespread,
                "Non-compressible dilated appendix",
            ),
            inv(
                "Full blood count",
                InvestigationKind::Laboratory,
                EmergencyLevel::Urgent,
                CostCategory::Low,
                Availability::Widespread,
                "Leukocytosis",
            ),
        ],
        key_questions: vec![
            "Did the pain start centrally and move to the right lower abdomen?".into(),
            "Any fever, loss of appetite, or pain on movement?".into(),
        ],
        specialty_referral: Some("General surgery".into()),
    }
}

fn acute_gastroenteritis() -> ConditionProfile {
    ConditionProfile {
        condition: "Acute gastroenteritis".into(),
        icd10: "A09".into(),
        base_emergency: EmergencyLevel::Routine,
        supporting: vec![
            f("diarrhea", 0.30, "gi symptoms"),
            f("diarrhoea", 0.30, "gi symptoms"),
            f("vomiting", 0.25, "gi symptoms"),
            f("abdominal cramp", 0.25, "pain character"),
            f("recent travel", 0.20, "exposure"),
            f("food", 0.15, "exposure"),
        ],
        opposing: vec![
            f("rebound", 0.25, "peritoneal signs"),
            f("guarding", 0.25, "peritoneal signs"),
            f("blood in stool", 0.25, "red flags"),
        ],
        demographics: vec![],
        investigations: vec![inv(
            "Stool culture",
            InvestigationKind::Laboratory,
            EmergencyLevel::Routine,
            CostCategory::Low,
            Availability::Widespread,
            "Enteric pathogen if symptoms persist",
        )],
        key_questions: vec![
            "How many days of symptoms, and how many episodes per day?".into(),
            "Any blood in the stool, recent travel, or similar cases at home?".into(),
        ],
        specialty_referral: None,
    }
}

fn urinary_tract_infection() -> ConditionProfile {
    ConditionProfile {
        condition: "Urinary tract infection".into(),
        icd10: "N39.0".into(),
        base_emergency: EmergencyLevel::Soon,
        supporting: vec![
            f("dysuria", 0.35, "urinary symptoms"),
            f("burning on urination", 0.35, "urinary symptoms"),
            f("frequency", 0.20, "urinary symptoms"),
            f("urgency", 0.20, "urinary symptoms"),
            f("suprapubic", 0.25, "pain localization"),
        ],
        opposing: vec![
            f("flank pain", 0.25, "upper tract signs"),
            f("vaginal discharge", 0.25, "alternative source"),
        ],
        demographics: vec![band(None, None, Some(Sex::Female), 0.10)],
        investigations: vec![
            inv(
                "Urine dipstick",
                InvestigationKind::Bedside,
                EmergencyLevel::Soon,
                CostCategory::Low,
                Availability::Widespread,
                "Positive nitrites and leukocyte esterase",
            ),
            inv(
                "Urine culture",
                InvestigationKind::Laboratory,
                EmergencyLevel::Soon,
                CostCategory::Low,
                Availability::Widespread,
                "Significant bacterial growth",
            ),
        ],
        key_questions: vec![
            "How many days of burning, and any fever or flank pain?".into(),
            "Any previous urinary infections or known kidney stones?".into(),
        ],
        specialty_referral: None,
    }
}

fn type_2_diabetes() -> ConditionProfile {
    ConditionProfile {
        condition: "Type 2 diabetes mellitus".into(),
        icd10: "E11.9".into(),
        base_emergency: EmergencyLevel::Soon,
        supporting: vec![
            f("increased thirst", 0.30, "osmotic symptoms"),
            f("excessive thirst", 0.30, "osmotic symptoms"),
            f("frequent urination", 0.30, "osmotic symptoms"),
            f("blurred vision", 0.20, "osmotic symptoms"),
            f("weight loss", 0.20, "constitutional symptoms"),
            f("fatigue", 0.15, "constitutional symptoms"),
        ],
        opposing: vec![],
        demographics: vec![band(Some(40), None, None, 0.10)],
        investigations: vec![
            inv(
                "HbA1c",
                InvestigationKind::Laboratory,
                EmergencyLevel::Soon,
                CostCategory::Low,
                Availability::Widespread,
                "HbA1c of 6.5 percent or higher",
            ),
            inv(
                "Fasting plasma glucose",
                InvestigationKind::Laboratory,
                EmergencyLevel::Soon,
                CostCategory::Low,
                Availability::Widespread,
                "Fasting glucose of 7.0 mmol/L or higher",
            ),
        ],
        key_questions: vec![
            "How long have the thirst and urination changes been present?".into(),
            "Any family history of diabetes or previous raised glucose?".into(),
        ],
        specialty_referral: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_populated() {
        let registry = ConditionRegistry::builtin();
        assert!(registry.len() >= 12, "only {} profiles", registry.len());
    }

    #[test]
    fn builtin_profiles_are_well_formed() {
        for p in ConditionRegistry::builtin().profiles() {
            assert!(!p.condition.is_empty());
            assert!(!p.icd10.is_empty());
            assert!(!p.supporting.is_empty(), "{} has no supporting features", p.condition);
            assert!(!p.key_questions.is_empty(), "{} has no key questions", p.condition);
            for feature in p.supporting.iter().chain(p.opposing.iter()) {
                assert!(feature.weight > 0.0 && feature.weight <= 0.5);
                assert_eq!(feature.pattern, feature.pattern.to_lowercase());
            }
            for d in &p.demographics {
                assert!(d.weight <= 0.15, "{} demographic prior too strong", p.condition);
            }
        }
    }

    #[test]
    fn builtin_condition_names_are_unique() {
        let registry = ConditionRegistry::builtin();
        let mut names: Vec<&str> = registry.profiles().iter().map(|p| p.condition.as_str()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn registry_round_trips_through_json() {
        let registry = ConditionRegistry::builtin();
        let json = serde_json::to_string(registry.profiles()).unwrap();
        let loaded = ConditionRegistry::from_json(&json).unwrap();
        assert_eq!(loaded.len(), registry.len());
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        let err = ConditionRegistry::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("condition registry"));
    }

    #[test]
    fn from_file_reports_missing_path() {
        let err =
            ConditionRegistry::from_file(std::path::Path::new("/nonexistent/registry.json"))
                .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/registry.json"));
    }
}
