//! The structured triage verdict produced by one evaluation.
//!
//! `TriageResult` is the comparable payload: a pure function of the intake
//! record and the knowledge-pack snapshot. `TriageReport` wraps it with
//! per-run metadata (id, timestamp) that is excluded from equality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::knowledge::pack::SupportSource;
use crate::models::enums::{
    ActionCategory, AssistantActionCategory, Confidence, MedicationClass, SuggestionPriority,
    UrgencyStatus,
};
use crate::models::ids::{
    ActionId, AssistantActionId, ConditionId, LabId, MedicationOptionId, SpecialistId,
};

// ---------------------------------------------------------------------------
// Differential
// ---------------------------------------------------------------------------

/// A matched support edge kept as evidence on a differential entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportRef {
    pub source: SupportSource,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentialEntry {
    pub condition_id: ConditionId,
    pub condition_name: String,
    /// Canonical 0-1 scale, rounded to two decimals. Percentage conversion
    /// happens at the presentation boundary, never here.
    pub probability: f64,
    pub confidence: Confidence,
    pub evidence: Vec<SupportRef>,
}

/// Distinguishes "engine ran and found nothing" from an evaluation failure.
/// An empty differential list is only valid together with `NoSupportMatched`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferentialOutcome {
    Computed,
    NoSupportMatched,
}

// ---------------------------------------------------------------------------
// Risk buckets
// ---------------------------------------------------------------------------

/// Fixed named risk predicates, computed independently of danger signs and
/// of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBuckets {
    pub hypertension_risk: bool,
    pub hyperglycemia_risk: bool,
    pub respiratory_risk: bool,
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabSuggestion {
    pub lab_id: LabId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralSuggestion {
    pub specialist_id: SpecialistId,
    pub name: String,
    pub reason: String,
}

/// Medication suggestions are categories with a clinician-review annotation,
/// never dosed prescriptions. Downstream messaging must not surface dosing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationSuggestion {
    pub option_id: MedicationOptionId,
    pub name: String,
    pub class: MedicationClass,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleSuggestion {
    pub action_id: ActionId,
    pub category: ActionCategory,
    pub recommendation: String,
    pub priority: SuggestionPriority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub labs: Vec<LabSuggestion>,
    pub referrals: Vec<ReferralSuggestion>,
    pub medications: Vec<MedicationSuggestion>,
    pub lifestyle: Vec<LifestyleSuggestion>,
}

// ---------------------------------------------------------------------------
// Assistant actions
// ---------------------------------------------------------------------------

/// A prompt for missing data or clarification, with the UI hint resolved
/// from the knowledge pack's template for the action id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantPrompt {
    pub action_id: AssistantActionId,
    pub description: String,
    pub category: AssistantActionCategory,
    pub ui: crate::knowledge::pack::UiHint,
}

// ---------------------------------------------------------------------------
// Explanation
// ---------------------------------------------------------------------------

/// Closed set of evidence kinds for the clinician "why" view. Each kind has
/// a fixed field set and a relevance score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    DangerSign { reasons: Vec<String>, relevance: f64 },
    SymptomCluster { count: usize, relevance: f64 },
    BodyLocation { regions: Vec<String>, relevance: f64 },
    MedicalHistory { conditions: Vec<String>, relevance: f64 },
}

impl Evidence {
    pub fn relevance(&self) -> f64 {
        match self {
            Self::DangerSign { relevance, .. }
            | Self::SymptomCluster { relevance, .. }
            | Self::BodyLocation { relevance, .. }
            | Self::MedicalHistory { relevance, .. } => *relevance,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Ordered by descending relevance.
    pub evidence: Vec<Evidence>,
    /// Symbolic traversal chains, e.g.
    /// `symptom:itchy_eyes -[supports w=5]-> condition:allergic_rhinitis`.
    pub reasoning_paths: Vec<String>,
}

// ---------------------------------------------------------------------------
// TriageResult & TriageReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub status: UrgencyStatus,
    /// Ordered, deduplicated human-readable danger-sign reasons.
    pub triggered_reasons: Vec<String>,
    /// True when a danger sign forced urgent status. The differential below
    /// is still computed in that case, just flagged.
    pub overridden_by_danger_sign: bool,
    pub risk_buckets: RiskBuckets,
    pub differential_outcome: DifferentialOutcome,
    /// Ranked descending by probability, then ascending by condition id.
    pub differential: Vec<DifferentialEntry>,
    pub suggestions: Suggestions,
    pub assistant_actions: Vec<AssistantPrompt>,
    pub explanation: Explanation,
    /// Non-fatal degradations, e.g. unknown ids skipped during scoring.
    pub diagnostics: Vec<String>,
}

/// `TriageResult` plus per-run metadata. Two runs over the same record get
/// distinct ids and timestamps but equal `result` payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub triage_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub result: TriageResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_relevance_accessor() {
        let e = Evidence::SymptomCluster {
            count: 3,
            relevance: 0.8,
        };
        assert!((e.relevance() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn evidence_serializes_with_kind_tag() {
        let e = Evidence::DangerSign {
            reasons: vec!["Chest pain reported".into()],
            relevance: 1.0,
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["kind"], "danger_sign");
        assert_eq!(json["relevance"], 1.0);
    }

    #[test]
    fn differential_outcome_serde() {
        let json = serde_json::to_string(&DifferentialOutcome::NoSupportMatched).unwrap();
        assert_eq!(json, "\"no_support_matched\"");
    }
}
