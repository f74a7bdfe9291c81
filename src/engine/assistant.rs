//! Assistant-action planning: prompts for missing vitals and ambiguous
//! context.
//!
//! One collection action per unknown vital group. The blood-pressure pair is
//! a single action covering both fields and clears only when both components
//! are measured. Clarifications follow collection actions, stable order
//! within each group.

use crate::knowledge::KnowledgeBase;
use crate::models::ids::AssistantActionId;
use crate::models::intake::IntakeRecord;
use crate::models::triage::AssistantPrompt;

const COLLECT_TEMPERATURE: &str = "collect_temperature";
const COLLECT_BP: &str = "collect_bp";
const COLLECT_HEART_RATE: &str = "collect_heart_rate";
const COLLECT_SPO2: &str = "collect_spo2";
const CLARIFY_DURATION: &str = "clarify_symptom_duration";
const CLARIFY_SEVERITY: &str = "clarify_symptom_severity";

const SEVERITY_CLARIFY_PAIN: u8 = 7;

fn push_action(
    prompts: &mut Vec<AssistantPrompt>,
    diagnostics: &mut Vec<String>,
    kb: &KnowledgeBase,
    id: &str,
) {
    let action_id = AssistantActionId::from(id);
    match kb.assistant_action(&action_id) {
        Some((template, hint)) => prompts.push(AssistantPrompt {
            action_id,
            description: template.name.clone(),
            category: template.category.clone(),
            ui: hint.clone(),
        }),
        None => diagnostics.push(format!(
            "assistant action '{id}' not in knowledge pack, prompt skipped"
        )),
    }
}

pub fn plan_assistant_actions(
    record: &IntakeRecord,
    kb: &KnowledgeBase,
) -> (Vec<AssistantPrompt>, Vec<String>) {
    let mut prompts = Vec::new();
    let mut diagnostics = Vec::new();
    let vitals = &record.vitals;

    // Data collection: one action per unknown vital group.
    if vitals.temperature_c.is_unknown() {
        push_action(&mut prompts, &mut diagnostics, kb, COLLECT_TEMPERATURE);
    }
    if vitals.bp_systolic.is_unknown() || vitals.bp_diastolic.is_unknown() {
        push_action(&mut prompts, &mut diagnostics, kb, COLLECT_BP);
    }
    if vitals.heart_rate.is_unknown() {
        push_action(&mut prompts, &mut diagnostics, kb, COLLECT_HEART_RATE);
    }
    if vitals.spo2.is_unknown() {
        push_action(&mut prompts, &mut diagnostics, kb, COLLECT_SPO2);
    }

    // Clarifications: declarative triggers only.
    let missing_duration = record
        .symptoms
        .iter()
        .any(|s| !record.symptom_durations.contains_key(s));
    if missing_duration {
        push_action(&mut prompts, &mut diagnostics, kb, CLARIFY_DURATION);
    }

    let severe_issue = record.issues.iter().any(|i| {
        i.pain_score >= SEVERITY_CLARIFY_PAIN
            || i.functional_impact == crate::models::enums::FunctionalImpact::Severe
    });
    if severe_issue {
        push_action(&mut prompts, &mut diagnostics, kb, CLARIFY_SEVERITY);
    }

    (prompts, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{AssistantActionCategory, FunctionalImpact, UiControl};
    use crate::models::ids::SymptomId;
    use crate::models::intake::{BodyIssue, VitalReading};

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin().unwrap()
    }

    fn plan(record: &IntakeRecord) -> Vec<AssistantPrompt> {
        let (prompts, diagnostics) = plan_assistant_actions(record, &kb());
        assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
        prompts
    }

    #[test]
    fn all_vitals_unknown_yields_exactly_four_collection_actions() {
        let prompts = plan(&IntakeRecord::default());
        let ids: Vec<_> = prompts.iter().map(|p| p.action_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["collect_temperature", "collect_bp", "collect_heart_rate", "collect_spo2"]
        );
        for p in &prompts {
            assert_eq!(p.category, AssistantActionCategory::DataCollection);
        }
    }

    #[test]
    fn bp_action_stays_until_both_components_measured() {
        let mut record = IntakeRecord::default();
        record.vitals.bp_systolic = VitalReading::Measured(120.0);
        let prompts = plan(&record);
        assert!(prompts.iter().any(|p| p.action_id.as_str() == "collect_bp"));

        record.vitals.bp_diastolic = VitalReading::Measured(80.0);
        let prompts = plan(&record);
        assert!(!prompts.iter().any(|p| p.action_id.as_str() == "collect_bp"));
    }

    #[test]
    fn bp_prompt_carries_two_number_ui_hint() {
        let prompts = plan(&IntakeRecord::default());
        let bp = prompts
            .iter()
            .find(|p| p.action_id.as_str() == "collect_bp")
            .unwrap();
        assert_eq!(bp.ui.control, UiControl::TwoNumber);
        assert_eq!(bp.ui.field_keys, vec!["bp_systolic", "bp_diastolic"]);
    }

    #[test]
    fn measured_vitals_raise_no_collection_actions() {
        let mut record = IntakeRecord::default();
        record.vitals.temperature_c = VitalReading::Measured(36.8);
        record.vitals.bp_systolic = VitalReading::Measured(120.0);
        record.vitals.bp_diastolic = VitalReading::Measured(80.0);
        record.vitals.heart_rate = VitalReading::Measured(72.0);
        record.vitals.spo2 = VitalReading::Measured(98.0);
        assert!(plan(&record).is_empty());
    }

    #[test]
    fn symptom_without_duration_triggers_clarification_after_collection() {
        let mut record = IntakeRecord::default();
        record.symptoms.insert(SymptomId::from("cough"));
        let prompts = plan(&record);
        let last = prompts.last().unwrap();
        assert_eq!(last.action_id.as_str(), "clarify_symptom_duration");
        assert_eq!(last.category, AssistantActionCategory::Clarification);
    }

    #[test]
    fn recorded_durations_suppress_the_clarification() {
        let mut record = IntakeRecord::default();
        record.vitals.temperature_c = VitalReading::Measured(36.8);
        record.vitals.bp_systolic = VitalReading::Measured(120.0);
        record.vitals.bp_diastolic = VitalReading::Measured(80.0);
        record.vitals.heart_rate = VitalReading::Measured(72.0);
        record.vitals.spo2 = VitalReading::Measured(98.0);
        record.symptoms.insert(SymptomId::from("cough"));
        record
            .symptom_durations
            .insert(SymptomId::from("cough"), "days".into());
        assert!(plan(&record).is_empty());
    }

    #[test]
    fn high_pain_issue_triggers_severity_clarification() {
        let mut record = IntakeRecord::default();
        record.issues.push(BodyIssue {
            region_id: "lower_back".into(),
            description: String::new(),
            pain_score: 8,
            functional_impact: FunctionalImpact::Mild,
            tags: vec![],
        });
        let prompts = plan(&record);
        assert!(prompts
            .iter()
            .any(|p| p.action_id.as_str() == "clarify_symptom_severity"));
    }
}
