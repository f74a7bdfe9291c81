//! Differential scoring over the weighted support graph.
//!
//! Every present symptom and every satisfied vital rule contributes its edge
//! weights to the target conditions; scores normalize to a 0-1 probability
//! rounded to two decimals. Always computed, even under a danger-sign
//! override; the orchestrator only flags the result, never drops it.

use std::collections::BTreeMap;

use crate::knowledge::pack::SupportEdge;
use crate::knowledge::KnowledgeBase;
use crate::models::enums::Confidence;
use crate::models::ids::ConditionId;
use crate::models::intake::IntakeRecord;
use crate::models::triage::{DifferentialEntry, DifferentialOutcome, SupportRef};

pub struct DifferentialComputation {
    pub outcome: DifferentialOutcome,
    pub entries: Vec<DifferentialEntry>,
    /// Non-fatal notes, e.g. unknown symptom ids skipped during scoring.
    pub diagnostics: Vec<String>,
}

fn accumulate(
    scores: &mut BTreeMap<ConditionId, (u32, Vec<SupportRef>)>,
    edge: &SupportEdge,
) {
    let slot = scores
        .entry(edge.condition_id.clone())
        .or_insert_with(|| (0, Vec::new()));
    slot.0 += edge.weight;
    slot.1.push(SupportRef {
        source: edge.source.clone(),
        weight: edge.weight,
    });
}

pub fn score_differential(record: &IntakeRecord, kb: &KnowledgeBase) -> DifferentialComputation {
    let mut scores: BTreeMap<ConditionId, (u32, Vec<SupportRef>)> = BTreeMap::new();
    let mut diagnostics = Vec::new();

    // Symptom ids come from the capture collaborator and may drift from the
    // loaded pack version. Fail closed per id, never abort the evaluation.
    for symptom_id in &record.symptoms {
        if !kb.is_known_symptom(symptom_id) {
            diagnostics.push(format!(
                "unknown symptom id '{symptom_id}' excluded from scoring"
            ));
            continue;
        }
        for edge in kb.edges_from_symptom(symptom_id) {
            accumulate(&mut scores, edge);
        }
    }

    for rule in kb.vital_rules() {
        if rule.satisfied_by(&record.vitals) {
            for edge in kb.edges_from_vital_rule(&rule.id) {
                accumulate(&mut scores, edge);
            }
        }
    }

    let total: u32 = scores.values().map(|(score, _)| score).sum();
    if total == 0 {
        return DifferentialComputation {
            outcome: DifferentialOutcome::NoSupportMatched,
            entries: Vec::new(),
            diagnostics,
        };
    }

    let mut entries: Vec<DifferentialEntry> = scores
        .into_iter()
        .filter_map(|(condition_id, (score, evidence))| {
            let probability = (score as f64 / total as f64 * 100.0).round() / 100.0;
            if probability == 0.0 {
                return None;
            }
            let condition = kb.condition(&condition_id)?;
            Some(DifferentialEntry {
                condition_name: condition.name.clone(),
                condition_id,
                probability,
                confidence: Confidence::for_probability(probability),
                evidence,
            })
        })
        .collect();

    // BTreeMap iteration is id-ascending; the stable sort keeps that order
    // as the tie-break for equal probabilities.
    entries.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    DifferentialComputation {
        outcome: DifferentialOutcome::Computed,
        entries,
        diagnostics,
    }
}
