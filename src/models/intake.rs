//! The fully materialized intake snapshot the engine evaluates.
//!
//! Records are created and mutated entirely outside the core by the capture
//! workflow; the engine only ever reads a complete snapshot. Any change to a
//! record means a full re-evaluation, never a patch of a previous result.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::TriageError;
use crate::models::enums::{FunctionalImpact, VitalField};
use crate::models::ids::SymptomId;

// ---------------------------------------------------------------------------
// Vitals
// ---------------------------------------------------------------------------

/// One vital-sign field. "Not measured" and "measured as zero" are distinct
/// states; only `Unknown` triggers data-collection assistant actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalReading {
    Unknown,
    Measured(f64),
}

impl VitalReading {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Measured(v) => Some(*v),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl Default for VitalReading {
    fn default() -> Self {
        Self::Unknown
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    #[serde(default)]
    pub temperature_c: VitalReading,
    #[serde(default)]
    pub bp_systolic: VitalReading,
    #[serde(default)]
    pub bp_diastolic: VitalReading,
    #[serde(default)]
    pub heart_rate: VitalReading,
    #[serde(default)]
    pub spo2: VitalReading,
    #[serde(default)]
    pub respiratory_rate: VitalReading,
}

impl Vitals {
    pub fn get(&self, field: &VitalField) -> VitalReading {
        match field {
            VitalField::TemperatureC => self.temperature_c,
            VitalField::BpSystolic => self.bp_systolic,
            VitalField::BpDiastolic => self.bp_diastolic,
            VitalField::HeartRate => self.heart_rate,
            VitalField::Spo2 => self.spo2,
            VitalField::RespiratoryRate => self.respiratory_rate,
        }
    }

    fn readings(&self) -> [(&'static str, VitalReading); 6] {
        [
            ("temperature_c", self.temperature_c),
            ("bp_systolic", self.bp_systolic),
            ("bp_diastolic", self.bp_diastolic),
            ("heart_rate", self.heart_rate),
            ("spo2", self.spo2),
            ("respiratory_rate", self.respiratory_rate),
        ]
    }
}

// ---------------------------------------------------------------------------
// Danger-sign screening flags
// ---------------------------------------------------------------------------

/// Explicit yes/no danger-sign screens answered during intake.
/// Any true flag forces urgent triage regardless of differential scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DangerSignFlags {
    #[serde(default)]
    pub chest_pain: bool,
    #[serde(default)]
    pub severe_shortness_of_breath: bool,
    #[serde(default)]
    pub fainting_or_confusion: bool,
    #[serde(default)]
    pub new_neuro_deficit: bool,
    #[serde(default)]
    pub sudden_severe_headache: bool,
    #[serde(default)]
    pub fever_with_neck_stiffness: bool,
    #[serde(default)]
    pub blood_in_vomit_or_stool: bool,
    #[serde(default)]
    pub severe_abdominal_pain: bool,
    #[serde(default)]
    pub pregnancy_complication: bool,
}

impl DangerSignFlags {
    pub fn any(&self) -> bool {
        self.chest_pain
            || self.severe_shortness_of_breath
            || self.fainting_or_confusion
            || self.new_neuro_deficit
            || self.sudden_severe_headache
            || self.fever_with_neck_stiffness
            || self.blood_in_vomit_or_stool
            || self.severe_abdominal_pain
            || self.pregnancy_complication
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyHistoryEntry {
    pub relation: String,
    pub condition: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialHistory {
    #[serde(default)]
    pub tobacco: Option<String>,
    #[serde(default)]
    pub alcohol: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub stressors: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Known chronic conditions, e.g. "diabetes", "hypertension", "asthma_copd".
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medications_text: Option<String>,
    #[serde(default)]
    pub family_history: Vec<FamilyHistoryEntry>,
    #[serde(default)]
    pub social: SocialHistory,
}

impl History {
    pub fn has_condition(&self, name: &str) -> bool {
        self.conditions.iter().any(|c| c == name)
    }
}

// ---------------------------------------------------------------------------
// Body-region issues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyIssue {
    pub region_id: String,
    #[serde(default)]
    pub description: String,
    /// 0-10 pain scale.
    pub pain_score: u8,
    #[serde(default = "default_impact")]
    pub functional_impact: FunctionalImpact,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_impact() -> FunctionalImpact {
    FunctionalImpact::None
}

// ---------------------------------------------------------------------------
// IntakeRecord
// ---------------------------------------------------------------------------

/// One complete intake snapshot. Ordered collections keep evaluation
/// deterministic for identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    /// Symptom ids the patient reported as present.
    #[serde(default)]
    pub symptoms: BTreeSet<SymptomId>,
    #[serde(default)]
    pub vitals: Vitals,
    #[serde(default)]
    pub danger_signs: DangerSignFlags,
    #[serde(default)]
    pub history: History,
    #[serde(default)]
    pub issues: Vec<BodyIssue>,
    #[serde(default)]
    pub chief_concern: Option<String>,
    /// Reported duration per symptom, where the patient gave one.
    #[serde(default)]
    pub symptom_durations: BTreeMap<SymptomId, String>,
}

impl IntakeRecord {
    /// Structural validation. Violations abort the evaluation with
    /// `InvalidInput`; this is the only hard failure path out of the engine.
    pub fn validate(&self) -> Result<(), TriageError> {
        for issue in &self.issues {
            if issue.pain_score > 10 {
                return Err(TriageError::InvalidInput(format!(
                    "pain_score {} out of range 0-10 for region {}",
                    issue.pain_score, issue.region_id
                )));
            }
        }
        for (name, reading) in self.vitals.readings() {
            if let Some(v) = reading.value() {
                if !v.is_finite() {
                    return Err(TriageError::InvalidInput(format!(
                        "non-finite measurement for {name}"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn has_symptom(&self, id: &str) -> bool {
        self.symptoms.contains(&SymptomId::from(id))
    }
}
