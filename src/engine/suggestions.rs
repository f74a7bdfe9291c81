//! Suggestion generation: labs, referrals, medication categories, and
//! lifestyle actions.
//!
//! Declarative condition -> suggestion rules over the risk buckets, history,
//! symptoms, and body issues. Every catalog id resolves against the loaded
//! pack; a custom pack missing a referenced id degrades that one suggestion
//! to a diagnostics note instead of failing the evaluation.

use std::collections::BTreeSet;

use crate::knowledge::KnowledgeBase;
use crate::models::enums::{SuggestionPriority, UrgencyStatus};
use crate::models::ids::{ActionId, LabId, MedicationOptionId, SpecialistId};
use crate::models::intake::IntakeRecord;
use crate::models::triage::{
    LabSuggestion, LifestyleSuggestion, MedicationSuggestion, ReferralSuggestion, RiskBuckets,
    Suggestions,
};

const PAIN_REFERRAL_THRESHOLD: u8 = 7;
/// Annotation carried on every medication suggestion. Categories only,
/// dosing is a clinician decision downstream.
const MEDICATION_REVIEW_NOTE: &str = "Category only; clinician review required before any use";

struct Collector<'a> {
    kb: &'a KnowledgeBase,
    out: Suggestions,
    diagnostics: Vec<String>,
    seen_labs: BTreeSet<LabId>,
    seen_specialists: BTreeSet<SpecialistId>,
    seen_medications: BTreeSet<MedicationOptionId>,
    seen_actions: BTreeSet<ActionId>,
}

impl<'a> Collector<'a> {
    fn new(kb: &'a KnowledgeBase) -> Self {
        Self {
            kb,
            out: Suggestions::default(),
            diagnostics: Vec::new(),
            seen_labs: BTreeSet::new(),
            seen_specialists: BTreeSet::new(),
            seen_medications: BTreeSet::new(),
            seen_actions: BTreeSet::new(),
        }
    }

    fn lab(&mut self, id: &str) {
        let lab_id = LabId::from(id);
        if !self.seen_labs.insert(lab_id.clone()) {
            return;
        }
        match self.kb.lab(&lab_id) {
            Some(lab) => self.out.labs.push(LabSuggestion {
                lab_id,
                name: lab.name.clone(),
            }),
            None => self
                .diagnostics
                .push(format!("lab '{id}' not in knowledge pack, suggestion skipped")),
        }
    }

    fn referral(&mut self, id: &str, reason: &str) {
        let specialist_id = SpecialistId::from(id);
        if !self.seen_specialists.insert(specialist_id.clone()) {
            return;
        }
        match self.kb.specialist(&specialist_id) {
            Some(specialist) => self.out.referrals.push(ReferralSuggestion {
                specialist_id,
                name: specialist.name.clone(),
                reason: reason.into(),
            }),
            None => self.diagnostics.push(format!(
                "specialist '{id}' not in knowledge pack, referral skipped"
            )),
        }
    }

    fn medication(&mut self, id: &str) {
        let option_id = MedicationOptionId::from(id);
        if !self.seen_medications.insert(option_id.clone()) {
            return;
        }
        match self.kb.medication_option(&option_id) {
            Some(option) => self.out.medications.push(MedicationSuggestion {
                option_id,
                name: option.name.clone(),
                class: option.class.clone(),
                note: MEDICATION_REVIEW_NOTE.into(),
            }),
            None => self.diagnostics.push(format!(
                "medication option '{id}' not in knowledge pack, suggestion skipped"
            )),
        }
    }

    fn lifestyle(&mut self, id: &str, recommendation: &str, priority: SuggestionPriority) {
        let action_id = ActionId::from(id);
        if !self.seen_actions.insert(action_id.clone()) {
            return;
        }
        match self.kb.action(&action_id) {
            Some(action) => self.out.lifestyle.push(LifestyleSuggestion {
                action_id,
                category: action.category.clone(),
                recommendation: recommendation.into(),
                priority,
            }),
            None => self.diagnostics.push(format!(
                "lifestyle action '{id}' not in knowledge pack, suggestion skipped"
            )),
        }
    }
}

pub fn generate_suggestions(
    record: &IntakeRecord,
    buckets: &RiskBuckets,
    status: &UrgencyStatus,
    kb: &KnowledgeBase,
) -> (Suggestions, Vec<String>) {
    let mut c = Collector::new(kb);
    let history = &record.history;
    let urgent = *status == UrgencyStatus::Urgent;

    // Labs
    if buckets.hyperglycemia_risk || history.has_condition("diabetes") {
        c.lab("fasting_glucose");
        c.lab("hba1c");
    }
    if buckets.hypertension_risk || history.has_condition("hypertension") {
        c.lab("cmp_bmp");
        c.lab("lipid_panel");
    }
    if buckets.respiratory_risk {
        c.lab("chest_xray");
        c.lab("pulse_ox_monitoring");
    }
    if record.has_symptom("fever") {
        c.lab("cbc");
    }

    // Referrals
    if urgent {
        c.referral("emergency_department", "Immediate physician evaluation");
    }
    if buckets.hypertension_risk {
        c.referral("cardiology", "Elevated blood pressure readings");
    }
    if buckets.hyperglycemia_risk {
        c.referral("endocrinology", "Symptoms suggesting elevated blood glucose");
    }
    if buckets.respiratory_risk && !urgent {
        c.referral("pulmonology", "Borderline oxygenation or breathing difficulty");
    }
    for issue in &record.issues {
        if issue.region_id.contains("eye") {
            c.referral("ophthalmology", "Eye-region issue reported");
        }
        let joint_tag = issue.tags.iter().any(|t| t.contains("joint"));
        if joint_tag || issue.pain_score >= PAIN_REFERRAL_THRESHOLD {
            c.referral("orthopedics", "Significant musculoskeletal pain");
        }
    }

    // Medication categories
    if record.has_symptom("fever") || record.has_symptom("headache") {
        c.medication("acetaminophen_category");
    }
    if record.has_symptom("cough") {
        c.medication("cough_suppressant_category");
    }
    if record.has_symptom("runny_nose")
        || record.has_symptom("sneezing")
        || record.has_symptom("itchy_eyes")
    {
        c.medication("antihistamine_nondrowsy");
    }
    if record.has_symptom("sore_throat") {
        c.medication("nsaid_category");
    }
    if buckets.hypertension_risk && !history.has_condition("hypertension") {
        c.medication("lifestyle_first_bp");
    }
    if buckets.hyperglycemia_risk {
        c.medication("glucose_monitoring");
    }

    // Lifestyle
    if buckets.hypertension_risk || history.has_condition("hypertension") {
        c.lifestyle(
            "action_gentle_activity",
            "Engage in 30 minutes of moderate aerobic activity 5 days per week",
            SuggestionPriority::High,
        );
        c.lifestyle(
            "action_dietary_adjustments",
            "Reduce sodium intake to less than 2,300 mg/day",
            SuggestionPriority::High,
        );
        c.lifestyle(
            "action_stress_management",
            "Practice stress-reduction techniques for 10-15 minutes daily",
            SuggestionPriority::Medium,
        );
    }
    if buckets.hyperglycemia_risk
        || history.has_condition("diabetes")
        || history.has_condition("prediabetes")
    {
        c.lifestyle(
            "action_dietary_adjustments",
            "Limit refined carbohydrates and sugary drinks",
            SuggestionPriority::High,
        );
        c.lifestyle(
            "action_gentle_activity",
            "Walk for 15-30 minutes after meals",
            SuggestionPriority::High,
        );
    }
    if record.has_symptom("fatigue") || record.has_symptom("headache") {
        c.lifestyle(
            "action_sleep_hygiene",
            "Aim for 7-9 hours of sleep with consistent sleep and wake times",
            SuggestionPriority::Medium,
        );
        c.lifestyle(
            "action_reduce_screen_time",
            "Reduce screen time before bed and take short breaks every hour",
            SuggestionPriority::Medium,
        );
    }
    if record.has_symptom("dizziness") {
        c.lifestyle(
            "action_hydration",
            "Stay well hydrated and avoid sudden position changes",
            SuggestionPriority::High,
        );
    }
    if record.has_symptom("itchy_eyes") || record.has_symptom("blurred_vision") {
        c.lifestyle(
            "action_reduce_screen_time",
            "Follow the 20-20-20 rule: every 20 minutes look 20 feet away for 20 seconds",
            SuggestionPriority::Medium,
        );
    }
    if buckets.respiratory_risk || history.has_condition("asthma_copd") {
        c.lifestyle(
            "action_avoid_triggers",
            "Avoid smoke, dust, and allergens; stay hydrated",
            SuggestionPriority::High,
        );
    }
    // The lifestyle list is never empty.
    if c.out.lifestyle.is_empty() {
        c.lifestyle(
            "action_rest",
            "Rest adequately and stay hydrated; monitor symptoms and return if worsening",
            SuggestionPriority::Low,
        );
    }

    (c.out, c.diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::FunctionalImpact;
    use crate::models::ids::SymptomId;
    use crate::models::intake::BodyIssue;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin().unwrap()
    }

    fn generate(
        record: &IntakeRecord,
        buckets: &RiskBuckets,
        status: UrgencyStatus,
    ) -> Suggestions {
        let (out, diagnostics) = generate_suggestions(record, buckets, &status, &kb());
        assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
        out
    }

    #[test]
    fn empty_record_gets_fallback_lifestyle_only() {
        let out = generate(
            &IntakeRecord::default(),
            &RiskBuckets::default(),
            UrgencyStatus::NonUrgent,
        );
        assert!(out.labs.is_empty());
        assert!(out.referrals.is_empty());
        assert!(out.medications.is_empty());
        assert_eq!(out.lifestyle.len(), 1);
        assert_eq!(out.lifestyle[0].action_id.as_str(), "action_rest");
        assert_eq!(out.lifestyle[0].priority, SuggestionPriority::Low);
    }

    #[test]
    fn hypertension_risk_adds_panels_and_cardiology() {
        let buckets = RiskBuckets {
            hypertension_risk: true,
            ..Default::default()
        };
        let out = generate(&IntakeRecord::default(), &buckets, UrgencyStatus::NonUrgent);
        let lab_ids: Vec<_> = out.labs.iter().map(|l| l.lab_id.as_str()).collect();
        assert_eq!(lab_ids, vec!["cmp_bmp", "lipid_panel"]);
        assert!(out
            .referrals
            .iter()
            .any(|r| r.specialist_id.as_str() == "cardiology"));
        assert!(out
            .medications
            .iter()
            .any(|m| m.option_id.as_str() == "lifestyle_first_bp"));
    }

    #[test]
    fn hypertension_history_suppresses_lifestyle_first_medication() {
        let buckets = RiskBuckets {
            hypertension_risk: true,
            ..Default::default()
        };
        let mut record = IntakeRecord::default();
        record.history.conditions.push("hypertension".into());
        let out = generate(&record, &buckets, UrgencyStatus::NonUrgent);
        assert!(!out
            .medications
            .iter()
            .any(|m| m.option_id.as_str() == "lifestyle_first_bp"));
    }

    #[test]
    fn urgent_status_always_adds_immediate_evaluation() {
        let out = generate(
            &IntakeRecord::default(),
            &RiskBuckets::default(),
            UrgencyStatus::Urgent,
        );
        assert_eq!(out.referrals.len(), 1);
        assert_eq!(out.referrals[0].specialist_id.as_str(), "emergency_department");
    }

    #[test]
    fn pulmonology_referral_only_when_non_urgent() {
        let buckets = RiskBuckets {
            respiratory_risk: true,
            ..Default::default()
        };
        let urgent = generate(&IntakeRecord::default(), &buckets, UrgencyStatus::Urgent);
        assert!(!urgent
            .referrals
            .iter()
            .any(|r| r.specialist_id.as_str() == "pulmonology"));
        let non_urgent = generate(&IntakeRecord::default(), &buckets, UrgencyStatus::NonUrgent);
        assert!(non_urgent
            .referrals
            .iter()
            .any(|r| r.specialist_id.as_str() == "pulmonology"));
    }

    #[test]
    fn body_issues_route_region_specific_referrals() {
        let mut record = IntakeRecord::default();
        record.issues.push(BodyIssue {
            region_id: "left_eye".into(),
            description: String::new(),
            pain_score: 2,
            functional_impact: FunctionalImpact::None,
            tags: vec![],
        });
        record.issues.push(BodyIssue {
            region_id: "right_knee".into(),
            description: String::new(),
            pain_score: 8,
            functional_impact: FunctionalImpact::Moderate,
            tags: vec!["joint".into()],
        });
        let out = generate(&record, &RiskBuckets::default(), UrgencyStatus::NonUrgent);
        let ids: Vec<_> = out.referrals.iter().map(|r| r.specialist_id.as_str()).collect();
        assert!(ids.contains(&"ophthalmology"));
        assert!(ids.contains(&"orthopedics"));
        // Orthopedics appears once even though two triggers matched.
        assert_eq!(ids.iter().filter(|i| **i == "orthopedics").count(), 1);
    }

    #[test]
    fn symptom_medications_carry_review_note_and_no_dosing() {
        let mut record = IntakeRecord::default();
        record.symptoms.insert(SymptomId::from("fever"));
        record.symptoms.insert(SymptomId::from("cough"));
        record.symptoms.insert(SymptomId::from("sneezing"));
        record.symptoms.insert(SymptomId::from("sore_throat"));
        let out = generate(&record, &RiskBuckets::default(), UrgencyStatus::NonUrgent);
        assert_eq!(out.medications.len(), 4);
        for m in &out.medications {
            assert_eq!(m.note, MEDICATION_REVIEW_NOTE);
        }
    }

    #[test]
    fn overlapping_rules_deduplicate_lifestyle_actions() {
        let buckets = RiskBuckets {
            hypertension_risk: true,
            hyperglycemia_risk: true,
            ..Default::default()
        };
        let out = generate(&IntakeRecord::default(), &buckets, UrgencyStatus::NonUrgent);
        let diet_entries = out
            .lifestyle
            .iter()
            .filter(|l| l.action_id.as_str() == "action_dietary_adjustments")
            .count();
        assert_eq!(diet_entries, 1);
    }

    #[test]
    fn fever_adds_cbc() {
        let mut record = IntakeRecord::default();
        record.symptoms.insert(SymptomId::from("fever"));
        let out = generate(&record, &RiskBuckets::default(), UrgencyStatus::NonUrgent);
        assert_eq!(out.labs.len(), 1);
        assert_eq!(out.labs[0].lab_id.as_str(), "cbc");
    }
}
