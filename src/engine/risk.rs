//! Risk-bucket classification.
//!
//! A small fixed set of named predicates computed independently of danger
//! signs and of each other. Buckets feed suggestion generation regardless of
//! urgency status.

use crate::models::intake::IntakeRecord;
use crate::models::triage::RiskBuckets;

const BP_STAGE2_SYSTOLIC: f64 = 160.0;
const SPO2_BORDERLINE_LOW: f64 = 92.0;
const SPO2_BORDERLINE_HIGH: f64 = 94.0;

pub fn classify_risk_buckets(record: &IntakeRecord) -> RiskBuckets {
    let hypertension_risk = record
        .vitals
        .bp_systolic
        .value()
        .is_some_and(|v| v >= BP_STAGE2_SYSTOLIC);

    let hyperglycemia_risk = record.has_symptom("polyuria") && record.has_symptom("polydipsia");

    let spo2_borderline = record
        .vitals
        .spo2
        .value()
        .is_some_and(|v| (SPO2_BORDERLINE_LOW..=SPO2_BORDERLINE_HIGH).contains(&v));
    let respiratory_risk = spo2_borderline || record.has_symptom("shortness_of_breath");

    RiskBuckets {
        hypertension_risk,
        hyperglycemia_risk,
        respiratory_risk,
    }
}
