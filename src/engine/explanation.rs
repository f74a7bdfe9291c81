//! Explanation building for the clinician "why" view.
//!
//! A closed set of evidence kinds with fixed relevance scores, plus symbolic
//! reasoning paths rebuilt from the support edges that actually matched the
//! top differential entries.

use crate::models::intake::IntakeRecord;
use crate::models::triage::{DifferentialEntry, Evidence, Explanation};

const RELEVANCE_DANGER_SIGN: f64 = 1.0;
const RELEVANCE_SYMPTOM_CLUSTER: f64 = 0.8;
const RELEVANCE_BODY_LOCATION: f64 = 0.7;
const RELEVANCE_MEDICAL_HISTORY: f64 = 0.6;

const MAX_PATH_ENTRIES: usize = 3;
const MAX_PATHS: usize = 6;

pub fn build_explanation(
    record: &IntakeRecord,
    triggered_reasons: &[String],
    differential: &[DifferentialEntry],
) -> Explanation {
    let mut evidence = Vec::new();

    if !triggered_reasons.is_empty() {
        evidence.push(Evidence::DangerSign {
            reasons: triggered_reasons.to_vec(),
            relevance: RELEVANCE_DANGER_SIGN,
        });
    }
    if !record.symptoms.is_empty() {
        evidence.push(Evidence::SymptomCluster {
            count: record.symptoms.len(),
            relevance: RELEVANCE_SYMPTOM_CLUSTER,
        });
    }
    if !record.issues.is_empty() {
        evidence.push(Evidence::BodyLocation {
            regions: record.issues.iter().map(|i| i.region_id.clone()).collect(),
            relevance: RELEVANCE_BODY_LOCATION,
        });
    }
    if !record.history.conditions.is_empty() {
        evidence.push(Evidence::MedicalHistory {
            conditions: record.history.conditions.clone(),
            relevance: RELEVANCE_MEDICAL_HISTORY,
        });
    }

    // Push order above is already descending by the fixed relevance scores.
    let reasoning_paths = differential
        .iter()
        .take(MAX_PATH_ENTRIES)
        .flat_map(|entry| {
            entry.evidence.iter().map(|support| {
                format!(
                    "{} -[supports w={}]-> condition:{}",
                    support.source, support.weight, entry.condition_id
                )
            })
        })
        .take(MAX_PATHS)
        .collect();

    Explanation {
        evidence,
        reasoning_paths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::pack::SupportSource;
    use crate::models::enums::{Confidence, FunctionalImpact};
    use crate::models::ids::{ConditionId, SymptomId};
    use crate::models::intake::BodyIssue;
    use crate::models::triage::SupportRef;

    fn entry(condition: &str, symptom: &str, weight: u32) -> DifferentialEntry {
        DifferentialEntry {
            condition_id: ConditionId::from(condition),
            condition_name: condition.into(),
            probability: 0.5,
            confidence: Confidence::Medium,
            evidence: vec![SupportRef {
                source: SupportSource::Symptom(SymptomId::from(symptom)),
                weight,
            }],
        }
    }

    #[test]
    fn empty_record_yields_empty_explanation() {
        let explanation = build_explanation(&IntakeRecord::default(), &[], &[]);
        assert!(explanation.evidence.is_empty());
        assert!(explanation.reasoning_paths.is_empty());
    }

    #[test]
    fn evidence_is_ordered_by_descending_relevance() {
        let mut record = IntakeRecord::default();
        record.symptoms.insert(SymptomId::from("cough"));
        record.issues.push(BodyIssue {
            region_id: "chest".into(),
            description: String::new(),
            pain_score: 3,
            functional_impact: FunctionalImpact::None,
            tags: vec![],
        });
        record.history.conditions.push("asthma_copd".into());
        let reasons = vec!["Chest pain reported".to_string()];

        let explanation = build_explanation(&record, &reasons, &[]);
        assert_eq!(explanation.evidence.len(), 4);
        let relevances: Vec<f64> = explanation.evidence.iter().map(|e| e.relevance()).collect();
        assert!(relevances.windows(2).all(|w| w[0] >= w[1]));
        assert!(matches!(
            explanation.evidence[0],
            Evidence::DangerSign { .. }
        ));
    }

    #[test]
    fn reasoning_paths_come_from_matched_edges() {
        let explanation = build_explanation(
            &IntakeRecord::default(),
            &[],
            &[entry("allergic_rhinitis", "itchy_eyes", 5)],
        );
        assert_eq!(
            explanation.reasoning_paths,
            vec!["symptom:itchy_eyes -[supports w=5]-> condition:allergic_rhinitis".to_string()]
        );
    }

    #[test]
    fn reasoning_paths_are_capped() {
        let entries: Vec<DifferentialEntry> = (0..5)
            .map(|i| {
                let mut e = entry(&format!("cond_{i}"), "cough", 2);
                e.evidence = vec![e.evidence[0].clone(); 4];
                e
            })
            .collect();
        let explanation = build_explanation(&IntakeRecord::default(), &[], &entries);
        assert_eq!(explanation.reasoning_paths.len(), MAX_PATHS);
    }
}
