//! Danger-sign evaluation.
//!
//! Runs first and unconditionally on every record. Any true explicit flag or
//! satisfied vital-derived rule forces urgent status; the reasons are kept as
//! ordered, deduplicated human-readable strings for the clinician view.

use crate::models::enums::UrgencyStatus;
use crate::models::intake::IntakeRecord;

/// SpO2 below this is treated as a danger sign outright.
const SPO2_CRITICAL: f64 = 92.0;
/// Hypertensive-crisis thresholds.
const BP_CRISIS_SYSTOLIC: f64 = 180.0;
const BP_CRISIS_DIASTOLIC: f64 = 120.0;

/// Formats a measurement without a trailing `.0` for whole values.
fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn push_once(reasons: &mut Vec<String>, reason: String) {
    if !reasons.contains(&reason) {
        reasons.push(reason);
    }
}

/// Evaluates explicit flags then vital-derived rules, in fixed order.
///
/// The vital cutoffs here are engine constants, not pack-driven: the
/// knowledge pack's danger-sign table carries names and urgency tiers for
/// authoring and display, but a custom pack cannot move these thresholds.
pub fn evaluate_danger_signs(record: &IntakeRecord) -> (UrgencyStatus, Vec<String>) {
    let mut reasons = Vec::new();

    let flags = &record.danger_signs;
    let explicit: [(bool, &str); 9] = [
        (flags.chest_pain, "Chest pain reported"),
        (flags.severe_shortness_of_breath, "Severe shortness of breath"),
        (flags.fainting_or_confusion, "Fainting or confusion"),
        (flags.new_neuro_deficit, "New neurologic deficit"),
        (flags.sudden_severe_headache, "Sudden severe headache"),
        (flags.fever_with_neck_stiffness, "Fever with neck stiffness"),
        (flags.blood_in_vomit_or_stool, "Blood in vomit or stool"),
        (flags.severe_abdominal_pain, "Severe abdominal pain"),
        (flags.pregnancy_complication, "Possible pregnancy complication"),
    ];
    for (fired, reason) in explicit {
        if fired {
            push_once(&mut reasons, reason.into());
        }
    }

    // Vital-derived rules. Unknown readings never fire.
    if let Some(spo2) = record.vitals.spo2.value() {
        if spo2 < SPO2_CRITICAL {
            push_once(&mut reasons, format!("Critical SpO2: {}%", fmt_value(spo2)));
        }
    }

    let sys = record.vitals.bp_systolic.value();
    let dia = record.vitals.bp_diastolic.value();
    let sys_text = sys.map(fmt_value).unwrap_or_else(|| "?".into());
    let dia_text = dia.map(fmt_value).unwrap_or_else(|| "?".into());
    if sys.is_some_and(|v| v >= BP_CRISIS_SYSTOLIC) || dia.is_some_and(|v| v >= BP_CRISIS_DIASTOLIC)
    {
        push_once(
            &mut reasons,
            format!("Hypertensive crisis: BP {sys_text}/{dia_text}"),
        );
    }

    let status = if reasons.is_empty() {
        UrgencyStatus::NonUrgent
    } else {
        UrgencyStatus::Urgent
    };
    (status, reasons)
}
