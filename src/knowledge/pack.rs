//! Serde types for the authored clinical knowledge pack.
//!
//! A pack is versioned, authored offline, and loaded once per process. All
//! entities here are plain data; lookups and validation live on
//! [`crate::knowledge::KnowledgeBase`].

use serde::{Deserialize, Serialize};

use crate::models::enums::{
    ActionCategory, AssistantActionCategory, ConditionSeverity, GuideCategory, MedicationClass,
    SymptomCategory, UiControl, UrgencyTier, VitalComparison, VitalField,
};
use crate::models::ids::{
    ActionId, AssistantActionId, ConditionId, DangerSignId, GuideId, LabId, MedicationOptionId,
    SpecialistId, SymptomId, TemplateId, VitalRuleId,
};
use crate::models::intake::Vitals;

// ---------------------------------------------------------------------------
// Graph nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: ConditionId,
    pub name: String,
    pub severity: ConditionSeverity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DangerSignRule {
    pub id: DangerSignId,
    pub name: String,
    pub urgency: UrgencyTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    pub name: String,
    pub category: SymptomCategory,
}

/// A named threshold test on one vital-sign field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalRule {
    pub id: VitalRuleId,
    pub name: String,
    pub vital: VitalField,
    pub operator: VitalComparison,
    pub threshold: f64,
    pub unit: String,
}

impl VitalRule {
    /// True when the vital was measured and the measurement crosses the
    /// threshold. Unknown readings never satisfy a rule.
    pub fn satisfied_by(&self, vitals: &Vitals) -> bool {
        vitals
            .get(&self.vital)
            .value()
            .map(|v| self.operator.compare(v, self.threshold))
            .unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// Support edges
// ---------------------------------------------------------------------------

/// The origin of a weighted support link: a reported symptom or a satisfied
/// vital-threshold rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum SupportSource {
    Symptom(SymptomId),
    VitalRule(VitalRuleId),
}

impl std::fmt::Display for SupportSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symptom(id) => write!(f, "symptom:{id}"),
            Self::VitalRule(id) => write!(f, "vital_rule:{id}"),
        }
    }
}

/// Weighted many-to-many link used by differential scoring. Weights are
/// positive integers; zero-weight edges are rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportEdge {
    #[serde(flatten)]
    pub source: SupportSource,
    pub condition_id: ConditionId,
    pub weight: u32,
}

// ---------------------------------------------------------------------------
// Suggestion catalogs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub id: LabId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    pub id: SpecialistId,
    pub name: String,
}

/// A medication *category*, never a dosed prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationOption {
    pub id: MedicationOptionId,
    pub name: String,
    pub class: MedicationClass,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleAction {
    pub id: ActionId,
    pub name: String,
    pub category: ActionCategory,
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Assistant actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantActionTemplate {
    pub id: AssistantActionId,
    pub name: String,
    pub category: AssistantActionCategory,
    pub notes: String,
}

/// How the capture UI should render a prompt for this action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiHint {
    pub control: UiControl,
    pub field_keys: Vec<String>,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub unit_label: Option<String>,
    #[serde(default)]
    pub dropdown_options: Vec<String>,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantUiMapEntry {
    pub action_id: AssistantActionId,
    #[serde(flatten)]
    pub hint: UiHint,
}

// ---------------------------------------------------------------------------
// Guides & message templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientGuide {
    pub id: GuideId,
    pub title: String,
    pub filename: String,
    pub category: GuideCategory,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub id: TemplateId,
    pub name: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionGuideMapEntry {
    pub condition_id: ConditionId,
    pub guide_ids: Vec<GuideId>,
}

// ---------------------------------------------------------------------------
// KnowledgePack
// ---------------------------------------------------------------------------

/// The full authored dataset driving the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgePack {
    pub version: String,
    pub conditions: Vec<Condition>,
    pub danger_signs: Vec<DangerSignRule>,
    pub symptoms: Vec<Symptom>,
    pub vital_rules: Vec<VitalRule>,
    pub supports: Vec<SupportEdge>,
    pub labs: Vec<Lab>,
    pub specialists: Vec<Specialist>,
    pub medication_options: Vec<MedicationOption>,
    pub actions: Vec<LifestyleAction>,
    pub assistant_actions: Vec<AssistantActionTemplate>,
    pub assistant_ui_map: Vec<AssistantUiMapEntry>,
    pub guides: Vec<PatientGuide>,
    pub templates: Vec<MessageTemplate>,
    pub condition_guides: Vec<ConditionGuideMapEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::intake::VitalReading;

    fn spo2_rule() -> VitalRule {
        VitalRule {
            id: VitalRuleId::from("spo2_low"),
            name: "Low oxygen saturation".into(),
            vital: VitalField::Spo2,
            operator: VitalComparison::Lt,
            threshold: 92.0,
            unit: "%".into(),
        }
    }

    #[test]
    fn vital_rule_ignores_unknown_readings() {
        let rule = spo2_rule();
        let vitals = Vitals::default();
        assert!(!rule.satisfied_by(&vitals));
    }

    #[test]
    fn vital_rule_fires_on_measured_value() {
        let rule = spo2_rule();
        let mut vitals = Vitals::default();
        vitals.spo2 = VitalReading::Measured(90.0);
        assert!(rule.satisfied_by(&vitals));
        vitals.spo2 = VitalReading::Measured(92.0);
        assert!(!rule.satisfied_by(&vitals));
    }

    #[test]
    fn support_source_display() {
        let s = SupportSource::Symptom(SymptomId::from("itchy_eyes"));
        assert_eq!(s.to_string(), "symptom:itchy_eyes");
        let v = SupportSource::VitalRule(VitalRuleId::from("bp_stage2_sys"));
        assert_eq!(v.to_string(), "vital_rule:bp_stage2_sys");
    }

    #[test]
    fn support_edge_serde_tags_source() {
        let edge = SupportEdge {
            source: SupportSource::Symptom(SymptomId::from("cough")),
            condition_id: ConditionId::from("acute_bronchitis"),
            weight: 4,
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["type"], "symptom");
        assert_eq!(json["id"], "cough");
        let back: SupportEdge = serde_json::from_value(json).unwrap();
        assert_eq!(back, edge);
    }
}
