pub mod enums;
pub mod ids;
pub mod intake;
pub mod triage;

pub use intake::{
    BodyIssue, DangerSignFlags, FamilyHistoryEntry, History, IntakeRecord, SocialHistory,
    VitalReading, Vitals,
};
pub use triage::{
    AssistantPrompt, DifferentialEntry, DifferentialOutcome, Evidence, Explanation,
    LabSuggestion, LifestyleSuggestion, MedicationSuggestion, ReferralSuggestion, RiskBuckets,
    Suggestions, SupportRef, TriageReport, TriageResult,
};
