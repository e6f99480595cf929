//! Task trigger tables.
//!
//! Pure phrase-to-template mappings: when any trigger phrase appears in
//! the transcript, the corresponding task template is suggested. The
//! general table covers common clinical follow-through; the regional
//! table covers primary-care programme work (screening, immunization,
//! chronic-disease clubs). Descriptions are unique across both tables
//! because the description string is the dedup key.

use crate::config::DEFAULT_TASK_DUE_DAYS;
use crate::models::{TaskPriority, TaskType};

#[derive(Debug, Clone, Copy)]
pub struct TaskTrigger {
    pub phrases: &'static [&'static str],
    pub task_type: TaskType,
    pub description: &'static str,
    pub priority: TaskPriority,
    /// Days from the invocation clock to the due date.
    pub due_days: i64,
}

pub fn general_triggers() -> &'static [TaskTrigger] {
    GENERAL_TRIGGERS
}

pub fn regional_triggers() -> &'static [TaskTrigger] {
    REGIONAL_TRIGGERS
}

static GENERAL_TRIGGERS: &[TaskTrigger] = &[
    TaskTrigger {
        phrases: &["follow up", "follow-up", "review in", "come back", "return if"],
        task_type: TaskType::FollowUp,
        description: "Schedule follow-up appointment",
        priority: TaskPriority::Medium,
        due_days: DEFAULT_TASK_DUE_DAYS,
    },
    TaskTrigger {
        phrases: &["blood test", "bloods", "full blood count", "check hba1c", "lipid profile"],
        task_type: TaskType::LabTest,
        description: "Order blood tests",
        priority: TaskPriority::High,
        due_days: 3,
    },
    TaskTrigger {
        phrases: &["urine test", "urinalysis", "urine dipstick", "urine culture"],
        task_type: TaskType::LabTest,
        description: "Order urine tests",
        priority: TaskPriority::High,
        due_days: 3,
    },
    TaskTrigger {
        phrases: &["x-ray", "xray", "ultrasound", "ct scan", "mri"],
        task_type: TaskType::LabTest,
        description: "Arrange imaging",
        priority: TaskPriority::High,
        due_days: 5,
    },
    TaskTrigger {
        phrases: &["refer to", "referral", "specialist opinion"],
        task_type: TaskType::Referral,
        description: "Complete specialist referral",
        priority: TaskPriority::High,
        due_days: 3,
    },
    TaskTrigger {
        phrases: &["prescribe", "prescription", "start on", "dispense"],
        task_type: TaskType::Medication,
        description: "Issue prescription",
        priority: TaskPriority::Urgent,
        due_days: 1,
    },
    TaskTrigger {
        phrases: &["medication review", "review medication", "review the regimen"],
        task_type: TaskType::Medication,
        description: "Conduct medication review",
        priority: TaskPriority::Medium,
        due_days: 14,
    },
    TaskTrigger {
        phrases: &["diet", "dietary advice", "weight loss", "healthy eating"],
        task_type: TaskType::Lifestyle,
        description: "Provide dietary counselling",
        priority: TaskPriority::Low,
        due_days: 14,
    },
    TaskTrigger {
        phrases: &["exercise", "physical activity", "physiotherapy"],
        task_type: TaskType::Lifestyle,
        description: "Provide exercise guidance",
        priority: TaskPriority::Low,
        due_days: 14,
    },
    TaskTrigger {
        phrases: &["smoking cessation", "stop smoking", "quit smoking"],
        task_type: TaskType::Lifestyle,
        description: "Arrange smoking cessation support",
        priority: TaskPriority::Medium,
        due_days: DEFAULT_TASK_DUE_DAYS,
    },
];

static REGIONAL_TRIGGERS: &[TaskTrigger] = &[
    TaskTrigger {
        phrases: &["chronic club", "chronic disease club", "club visit"],
        task_type: TaskType::FollowUp,
        description: "Book chronic disease club visit",
        priority: TaskPriority::Medium,
        due_days: 30,
    },
    TaskTrigger {
        phrases: &["tb screen", "tb symptoms", "tuberculosis screen", "sputum for tb"],
        task_type: TaskType::LabTest,
        description: "Complete TB symptom screen and sputum collection",
        priority: TaskPriority::High,
        due_days: 2,
    },
    TaskTrigger {
        phrases: &["hiv test", "hiv counselling", "hiv counseling", "retest in"],
        task_type: TaskType::LabTest,
        description: "Offer HIV testing and counselling",
        priority: TaskPriority::High,
        due_days: DEFAULT_TASK_DUE_DAYS,
    },
    TaskTrigger {
        phrases: &["immunization", "immunisation", "vaccination", "vaccine due"],
        task_type: TaskType::Medication,
        description: "Complete immunization catch-up",
        priority: TaskPriority::Medium,
        due_days: 14,
    },
    TaskTrigger {
        phrases: &["antenatal", "pregnancy booking", "anc visit"],
        task_type: TaskType::Referral,
        description: "Arrange antenatal clinic booking",
        priority: TaskPriority::Urgent,
        due_days: 2,
    },
    TaskTrigger {
        phrases: &["home bp", "bp diary", "blood pressure diary", "monitor blood pressure"],
        task_type: TaskType::FollowUp,
        description: "Set up home blood pressure monitoring",
        priority: TaskPriority::Medium,
        due_days: DEFAULT_TASK_DUE_DAYS,
    },
];
