//! The triage engine: one pure, deterministic evaluation per intake record.
//!
//! Danger signs run first and unconditionally. A fired danger sign forces
//! urgent status and flags the result, but never skips differential scoring;
//! risk buckets, suggestions, assistant actions, and the explanation always
//! run on both branches. Sub-component degradations surface as diagnostics
//! on the result, never as errors.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::error::TriageError;
use crate::knowledge::KnowledgeBase;
use crate::models::enums::UrgencyStatus;
use crate::models::intake::IntakeRecord;
use crate::models::triage::{TriageReport, TriageResult};

pub mod assistant;
pub mod danger;
pub mod differential;
pub mod explanation;
pub mod risk;
pub mod suggestions;

/// Holds the validated knowledge base and evaluates records against it.
/// No mutable state: one engine can serve concurrent evaluations by
/// reference.
pub struct TriageEngine {
    kb: KnowledgeBase,
}

impl TriageEngine {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Pure evaluation: identical records always produce identical results.
    /// `InvalidInput` is the only hard failure path.
    pub fn evaluate(&self, record: &IntakeRecord) -> Result<TriageResult, TriageError> {
        record.validate()?;

        let (status, triggered_reasons) = danger::evaluate_danger_signs(record);
        let overridden_by_danger_sign = status == UrgencyStatus::Urgent;

        let risk_buckets = risk::classify_risk_buckets(record);
        let scoring = differential::score_differential(record, &self.kb);
        let (suggestions, suggestion_diags) =
            suggestions::generate_suggestions(record, &risk_buckets, &status, &self.kb);
        let (assistant_actions, assistant_diags) =
            assistant::plan_assistant_actions(record, &self.kb);
        let explanation =
            explanation::build_explanation(record, &triggered_reasons, &scoring.entries);

        let mut diagnostics = scoring.diagnostics;
        diagnostics.extend(suggestion_diags);
        diagnostics.extend(assistant_diags);
        for note in &diagnostics {
            tracing::warn!(note = %note, "Triage evaluation degraded");
        }

        Ok(TriageResult {
            status,
            triggered_reasons,
            overridden_by_danger_sign,
            risk_buckets,
            differential_outcome: scoring.outcome,
            differential: scoring.entries,
            suggestions,
            assistant_actions,
            explanation,
            diagnostics,
        })
    }

    /// `evaluate` plus per-run metadata and a log summary.
    pub fn run(&self, record: &IntakeRecord) -> Result<TriageReport, TriageError> {
        let start = Instant::now();
        let result = self.evaluate(record)?;
        let triage_id = Uuid::new_v4();

        tracing::info!(
            triage_id = %triage_id,
            status = result.status.as_str(),
            reasons = result.triggered_reasons.len(),
            differential = result.differential.len(),
            assistant_actions = result.assistant_actions.len(),
            processing_ms = start.elapsed().as_millis() as u64,
            "Triage evaluation complete"
        );

        Ok(TriageReport {
            triage_id,
            generated_at: Utc::now(),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::SymptomId;
    use crate::models::intake::VitalReading;
    use crate::models::triage::DifferentialOutcome;

    fn engine() -> TriageEngine {
        TriageEngine::new(KnowledgeBase::builtin().unwrap())
    }

    fn record_with(symptoms: &[&str]) -> IntakeRecord {
        let mut record = IntakeRecord::default();
        for s in symptoms {
            record.symptoms.insert(SymptomId::from(*s));
        }
        record
    }

    /// Scenario A: allergy symptoms, vitals unknown, no danger signs.
    #[test]
    fn allergy_symptoms_rank_allergy_condition_on_top() {
        let result = engine()
            .evaluate(&record_with(&["itchy_eyes", "sneezing"]))
            .unwrap();

        assert_eq!(result.status, UrgencyStatus::NonUrgent);
        assert!(!result.overridden_by_danger_sign);
        assert_eq!(result.differential_outcome, DifferentialOutcome::Computed);
        assert_eq!(
            result.differential[0].condition_id.as_str(),
            "allergic_rhinitis"
        );
        let top = result.differential[0].probability;
        assert!(result.differential.iter().all(|e| e.probability <= top));
    }

    /// Scenario B: chest-pain flag with unknown vitals.
    #[test]
    fn chest_pain_overrides_but_keeps_differential() {
        let mut record = record_with(&["cough", "fever"]);
        record.danger_signs.chest_pain = true;

        let result = engine().evaluate(&record).unwrap();
        assert_eq!(result.status, UrgencyStatus::Urgent);
        assert!(result.overridden_by_danger_sign);
        assert!(result
            .triggered_reasons
            .contains(&"Chest pain reported".to_string()));
        assert_eq!(result.differential_outcome, DifferentialOutcome::Computed);
        assert!(!result.differential.is_empty());
    }

    /// Scenario C: stage-2 blood pressure without danger signs.
    #[test]
    fn elevated_bp_sets_risk_bucket_and_panels() {
        let mut record = IntakeRecord::default();
        record.vitals.bp_systolic = VitalReading::Measured(165.0);
        record.vitals.bp_diastolic = VitalReading::Measured(95.0);

        let result = engine().evaluate(&record).unwrap();
        assert_eq!(result.status, UrgencyStatus::NonUrgent);
        assert!(result.risk_buckets.hypertension_risk);
        let lab_ids: Vec<_> = result
            .suggestions
            .labs
            .iter()
            .map(|l| l.lab_id.as_str())
            .collect();
        assert!(lab_ids.contains(&"cmp_bmp"));
        assert!(lab_ids.contains(&"lipid_panel"));
    }

    /// Scenario D: critical SpO2 dominates everything else.
    #[test]
    fn critical_spo2_forces_urgent_regardless_of_symptoms() {
        let mut record = record_with(&["runny_nose"]);
        record.vitals.spo2 = VitalReading::Measured(90.0);

        let result = engine().evaluate(&record).unwrap();
        assert_eq!(result.status, UrgencyStatus::Urgent);
        assert!(result
            .triggered_reasons
            .iter()
            .any(|r| r.starts_with("Critical SpO2")));
    }

    /// Scenario E: an empty record still produces a usable result.
    #[test]
    fn empty_record_yields_explicit_empty_differential() {
        let result = engine().evaluate(&IntakeRecord::default()).unwrap();

        assert_eq!(
            result.differential_outcome,
            DifferentialOutcome::NoSupportMatched
        );
        assert!(result.differential.is_empty());
        assert_eq!(result.suggestions.lifestyle.len(), 1);
        assert_eq!(
            result.suggestions.lifestyle[0].action_id.as_str(),
            "action_rest"
        );
        assert!(!result.assistant_actions.is_empty());
    }

    #[test]
    fn all_vitals_unknown_gives_exactly_four_collection_actions() {
        let result = engine().evaluate(&IntakeRecord::default()).unwrap();
        assert_eq!(result.assistant_actions.len(), 4);
    }

    #[test]
    fn non_empty_differential_sums_to_one() {
        let result = engine()
            .evaluate(&record_with(&["cough", "fever"]))
            .unwrap();
        assert!(result.differential.len() > 2);
        let sum: f64 = result.differential.iter().map(|e| e.probability).sum();
        assert!(sum > 0.99 && sum <= 1.01 + 1e-9, "sum was {sum}");
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut record = record_with(&["cough", "fever", "dizziness"]);
        record.vitals.bp_systolic = VitalReading::Measured(165.0);
        record.danger_signs.severe_abdominal_pain = true;

        let engine = engine();
        let first = engine.evaluate(&record).unwrap();
        let second = engine.evaluate(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reverting_a_record_restores_the_original_result() {
        let engine = engine();
        let original = record_with(&["itchy_eyes", "sneezing"]);
        let baseline = engine.evaluate(&original).unwrap();

        let mut mutated = original.clone();
        mutated.symptoms.insert(SymptomId::from("fever"));
        mutated.vitals.spo2 = VitalReading::Measured(93.0);
        let changed = engine.evaluate(&mutated).unwrap();
        assert_ne!(baseline, changed);

        let reverted = engine.evaluate(&original).unwrap();
        assert_eq!(baseline, reverted);
    }

    #[test]
    fn unknown_symptom_degrades_to_diagnostics_not_error() {
        let result = engine()
            .evaluate(&record_with(&["cough", "not_a_symptom"]))
            .unwrap();
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].contains("not_a_symptom"));
        assert_eq!(result.differential_outcome, DifferentialOutcome::Computed);
    }

    #[test]
    fn invalid_input_is_the_only_hard_failure() {
        let mut record = IntakeRecord::default();
        record.vitals.heart_rate = VitalReading::Measured(f64::INFINITY);
        let err = engine().evaluate(&record).unwrap_err();
        assert!(matches!(err, TriageError::InvalidInput(_)));
    }

    #[test]
    fn run_attaches_fresh_metadata_over_equal_payloads() {
        let engine = engine();
        let record = record_with(&["cough"]);
        let a = engine.run(&record).unwrap();
        let b = engine.run(&record).unwrap();
        assert_ne!(a.triage_id, b.triage_id);
        assert_eq!(a.result, b.result);
    }
}
