/// Engine-wide constants.
pub const ENGINE_NAME: &str = "Auscult";
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Section categorizations at or below this confidence are suppressed.
pub const CONFIDENCE_FLOOR: f32 = 0.40;

/// Candidate diagnoses scoring below this after normalization are dropped.
pub const MIN_DIAGNOSIS_SCORE: f32 = 0.15;

/// Default task due offset when a trigger carries no explicit window.
pub const DEFAULT_TASK_DUE_DAYS: i64 = 7;

/// How many top-ranked diagnoses feed the overall clinical priority.
pub const TOP_DIAGNOSES_FOR_PRIORITY: usize = 3;

/// Maximum extra weight a keyword match earns for appearing at the very
/// start of a transcript (dictation-order heuristic).
pub const EARLY_POSITION_BOOST: f32 = 0.25;

/// Repeat occurrences of the same keyword count at this fraction of the
/// first occurrence's weight.
pub const REPEAT_MATCH_DAMPING: f32 = 0.5;
