//! Knowledge pack loading, validation, and indexed lookups.
//!
//! A pack is validated fail-fast at load time; after `from_pack` succeeds the
//! engine can assume every cross-table reference resolves. Unknown ids coming
//! from *intake records* are a different story and degrade to diagnostics at
//! evaluation time.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::TriageError;
use crate::models::ids::{
    ActionId, AssistantActionId, ConditionId, GuideId, LabId, MedicationOptionId, SpecialistId,
    SymptomId, TemplateId, VitalRuleId,
};

pub mod builtin;
pub mod pack;

use pack::{
    AssistantActionTemplate, Condition, DangerSignRule, KnowledgePack, Lab, LifestyleAction,
    MedicationOption, MessageTemplate, PatientGuide, Specialist, SupportEdge, SupportSource,
    Symptom, UiHint, VitalRule,
};

/// Guide attached when a condition has no explicit guide mapping.
const FALLBACK_GUIDE: &str = "guide_return_precautions";

const TEMPLATE_GENERAL: &str = "tmpl_general";
const TEMPLATE_POSTURE_HEADACHE: &str = "tmpl_posture_headache";
const TEMPLATE_URGENT: &str = "tmpl_urgent";

/// A validated, indexed knowledge pack.
#[derive(Debug)]
pub struct KnowledgeBase {
    pack: KnowledgePack,
    conditions: BTreeMap<ConditionId, usize>,
    symptoms: BTreeMap<SymptomId, usize>,
    vital_rules: BTreeMap<VitalRuleId, usize>,
    labs: BTreeMap<LabId, usize>,
    specialists: BTreeMap<SpecialistId, usize>,
    medication_options: BTreeMap<MedicationOptionId, usize>,
    actions: BTreeMap<ActionId, usize>,
    assistant_actions: BTreeMap<AssistantActionId, usize>,
    ui_hints: BTreeMap<AssistantActionId, usize>,
    guides: BTreeMap<GuideId, usize>,
    templates: BTreeMap<TemplateId, usize>,
    /// Edge indices grouped by source, in pack order.
    edges_by_symptom: BTreeMap<SymptomId, Vec<usize>>,
    edges_by_vital_rule: BTreeMap<VitalRuleId, Vec<usize>>,
    condition_guides: BTreeMap<ConditionId, Vec<GuideId>>,
}

fn index_table<I, T>(
    table_name: &str,
    items: &[T],
    id_of: impl Fn(&T) -> I,
) -> Result<BTreeMap<I, usize>, TriageError>
where
    I: Ord + std::fmt::Display,
{
    let mut map = BTreeMap::new();
    for (i, item) in items.iter().enumerate() {
        let id = id_of(item);
        if map.contains_key(&id) {
            return Err(TriageError::KnowledgePackValidation(format!(
                "duplicate id '{id}' in {table_name}"
            )));
        }
        map.insert(id, i);
    }
    Ok(map)
}

impl KnowledgeBase {
    /// Validates cross-table references and builds lookup indexes.
    /// Any inconsistency rejects the whole pack.
    pub fn from_pack(pack: KnowledgePack) -> Result<Self, TriageError> {
        let conditions = index_table("conditions", &pack.conditions, |c| c.id.clone())?;
        index_table("danger_signs", &pack.danger_signs, |d| d.id.clone())?;
        let symptoms = index_table("symptoms", &pack.symptoms, |s| s.id.clone())?;
        let vital_rules = index_table("vital_rules", &pack.vital_rules, |r| r.id.clone())?;
        let labs = index_table("labs", &pack.labs, |l| l.id.clone())?;
        let specialists = index_table("specialists", &pack.specialists, |s| s.id.clone())?;
        let medication_options =
            index_table("medication_options", &pack.medication_options, |m| m.id.clone())?;
        let actions = index_table("actions", &pack.actions, |a| a.id.clone())?;
        let assistant_actions =
            index_table("assistant_actions", &pack.assistant_actions, |a| a.id.clone())?;
        let ui_hints =
            index_table("assistant_ui_map", &pack.assistant_ui_map, |e| e.action_id.clone())?;
        let guides = index_table("guides", &pack.guides, |g| g.id.clone())?;
        let templates = index_table("templates", &pack.templates, |t| t.id.clone())?;

        let mut edges_by_symptom: BTreeMap<SymptomId, Vec<usize>> = BTreeMap::new();
        let mut edges_by_vital_rule: BTreeMap<VitalRuleId, Vec<usize>> = BTreeMap::new();
        for (i, edge) in pack.supports.iter().enumerate() {
            if edge.weight == 0 {
                return Err(TriageError::KnowledgePackValidation(format!(
                    "zero-weight support edge {} -> {}",
                    edge.source, edge.condition_id
                )));
            }
            if !conditions.contains_key(&edge.condition_id) {
                return Err(TriageError::KnowledgePackValidation(format!(
                    "support edge {} targets unknown condition '{}'",
                    edge.source, edge.condition_id
                )));
            }
            match &edge.source {
                SupportSource::Symptom(id) => {
                    if !symptoms.contains_key(id) {
                        return Err(TriageError::KnowledgePackValidation(format!(
                            "support edge references unknown symptom '{id}'"
                        )));
                    }
                    edges_by_symptom.entry(id.clone()).or_default().push(i);
                }
                SupportSource::VitalRule(id) => {
                    if !vital_rules.contains_key(id) {
                        return Err(TriageError::KnowledgePackValidation(format!(
                            "support edge references unknown vital rule '{id}'"
                        )));
                    }
                    edges_by_vital_rule.entry(id.clone()).or_default().push(i);
                }
            }
        }

        for entry in &pack.assistant_ui_map {
            if !assistant_actions.contains_key(&entry.action_id) {
                return Err(TriageError::KnowledgePackValidation(format!(
                    "UI map entry references unknown assistant action '{}'",
                    entry.action_id
                )));
            }
        }
        for action in &pack.assistant_actions {
            if !ui_hints.contains_key(&action.id) {
                return Err(TriageError::KnowledgePackValidation(format!(
                    "assistant action '{}' has no UI map entry",
                    action.id
                )));
            }
        }

        let mut condition_guides: BTreeMap<ConditionId, Vec<GuideId>> = BTreeMap::new();
        let mut seen: BTreeSet<ConditionId> = BTreeSet::new();
        for entry in &pack.condition_guides {
            if !conditions.contains_key(&entry.condition_id) {
                return Err(TriageError::KnowledgePackValidation(format!(
                    "guide map references unknown condition '{}'",
                    entry.condition_id
                )));
            }
            if !seen.insert(entry.condition_id.clone()) {
                return Err(TriageError::KnowledgePackValidation(format!(
                    "duplicate guide map entry for condition '{}'",
                    entry.condition_id
                )));
            }
            for guide_id in &entry.guide_ids {
                if !guides.contains_key(guide_id) {
                    return Err(TriageError::KnowledgePackValidation(format!(
                        "guide map for '{}' references unknown guide '{guide_id}'",
                        entry.condition_id
                    )));
                }
            }
            condition_guides.insert(entry.condition_id.clone(), entry.guide_ids.clone());
        }

        if !guides.contains_key(&GuideId::from(FALLBACK_GUIDE)) {
            return Err(TriageError::KnowledgePackValidation(format!(
                "missing fallback guide '{FALLBACK_GUIDE}'"
            )));
        }
        if !templates.contains_key(&TemplateId::from(TEMPLATE_GENERAL)) {
            return Err(TriageError::KnowledgePackValidation(format!(
                "missing default template '{TEMPLATE_GENERAL}'"
            )));
        }

        tracing::info!(
            version = %pack.version,
            conditions = pack.conditions.len(),
            symptoms = pack.symptoms.len(),
            edges = pack.supports.len(),
            "Knowledge pack validated"
        );

        Ok(Self {
            pack,
            conditions,
            symptoms,
            vital_rules,
            labs,
            specialists,
            medication_options,
            actions,
            assistant_actions,
            ui_hints,
            guides,
            templates,
            edges_by_symptom,
            edges_by_vital_rule,
            condition_guides,
        })
    }

    /// Loads and validates a JSON pack from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TriageError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| TriageError::KnowledgePackLoad(path.display().to_string(), e.to_string()))?;
        let pack: KnowledgePack = serde_json::from_str(&raw)
            .map_err(|e| TriageError::KnowledgePackParse(path.display().to_string(), e.to_string()))?;
        Self::from_pack(pack)
    }

    /// The compiled-in pack. Its validity is covered by tests, so the only
    /// runtime failure would be a build defect.
    pub fn builtin() -> Result<Self, TriageError> {
        Self::from_pack(builtin::pack())
    }

    pub fn version(&self) -> &str {
        &self.pack.version
    }

    // -----------------------------------------------------------------------
    // Table lookups
    // -----------------------------------------------------------------------

    pub fn condition(&self, id: &ConditionId) -> Option<&Condition> {
        self.conditions.get(id).map(|&i| &self.pack.conditions[i])
    }

    pub fn symptom(&self, id: &SymptomId) -> Option<&Symptom> {
        self.symptoms.get(id).map(|&i| &self.pack.symptoms[i])
    }

    pub fn vital_rule(&self, id: &VitalRuleId) -> Option<&VitalRule> {
        self.vital_rules.get(id).map(|&i| &self.pack.vital_rules[i])
    }

    pub fn lab(&self, id: &LabId) -> Option<&Lab> {
        self.labs.get(id).map(|&i| &self.pack.labs[i])
    }

    pub fn specialist(&self, id: &SpecialistId) -> Option<&Specialist> {
        self.specialists.get(id).map(|&i| &self.pack.specialists[i])
    }

    pub fn medication_option(&self, id: &MedicationOptionId) -> Option<&MedicationOption> {
        self.medication_options
            .get(id)
            .map(|&i| &self.pack.medication_options[i])
    }

    pub fn action(&self, id: &ActionId) -> Option<&LifestyleAction> {
        self.actions.get(id).map(|&i| &self.pack.actions[i])
    }

    pub fn guide(&self, id: &GuideId) -> Option<&PatientGuide> {
        self.guides.get(id).map(|&i| &self.pack.guides[i])
    }

    pub fn template(&self, id: &TemplateId) -> Option<&MessageTemplate> {
        self.templates.get(id).map(|&i| &self.pack.templates[i])
    }

    pub fn danger_signs(&self) -> &[DangerSignRule] {
        &self.pack.danger_signs
    }

    pub fn vital_rules(&self) -> &[VitalRule] {
        &self.pack.vital_rules
    }

    // -----------------------------------------------------------------------
    // Support graph
    // -----------------------------------------------------------------------

    pub fn edges_from_symptom(&self, id: &SymptomId) -> impl Iterator<Item = &SupportEdge> {
        self.edges_by_symptom
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| &self.pack.supports[i])
    }

    pub fn edges_from_vital_rule(&self, id: &VitalRuleId) -> impl Iterator<Item = &SupportEdge> {
        self.edges_by_vital_rule
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| &self.pack.supports[i])
    }

    /// All support edges targeting a condition, in pack order.
    pub fn edges_for_condition<'a>(
        &'a self,
        id: &'a ConditionId,
    ) -> impl Iterator<Item = &'a SupportEdge> + 'a {
        self.pack
            .supports
            .iter()
            .filter(move |e| &e.condition_id == id)
    }

    pub fn is_known_symptom(&self, id: &SymptomId) -> bool {
        self.symptoms.contains_key(id)
    }

    // -----------------------------------------------------------------------
    // Assistant actions
    // -----------------------------------------------------------------------

    /// The action template plus its UI hint. Validation guarantees both exist
    /// together, so a `Some` here always carries a renderable prompt.
    pub fn assistant_action(
        &self,
        id: &AssistantActionId,
    ) -> Option<(&AssistantActionTemplate, &UiHint)> {
        let template = self
            .assistant_actions
            .get(id)
            .map(|&i| &self.pack.assistant_actions[i])?;
        let hint = self
            .ui_hints
            .get(id)
            .map(|&i| &self.pack.assistant_ui_map[i].hint)?;
        Some((template, hint))
    }

    // -----------------------------------------------------------------------
    // Guides & templates
    // -----------------------------------------------------------------------

    /// Guides mapped to the condition, or the return-precautions fallback
    /// when no mapping exists.
    pub fn guides_for_condition(&self, id: &ConditionId) -> Vec<&PatientGuide> {
        let ids: Vec<GuideId> = match self.condition_guides.get(id) {
            Some(ids) => ids.clone(),
            None => vec![GuideId::from(FALLBACK_GUIDE)],
        };
        ids.iter().filter_map(|g| self.guide(g)).collect()
    }

    /// Picks the outbound message template for a top condition. Posture and
    /// headache conditions get the targeted template, serious-bucket patterns
    /// get the urgent one, everything else the general summary.
    pub fn template_for_condition(&self, id: &ConditionId) -> &MessageTemplate {
        let key = id.as_str();
        let wanted = if key.contains("posture") || key.contains("headache") {
            TEMPLATE_POSTURE_HEADACHE
        } else if key.contains("urgency") || key.contains("warning") || key.contains("risk") {
            TEMPLATE_URGENT
        } else {
            TEMPLATE_GENERAL
        };
        self.template(&TemplateId::from(wanted))
            .or_else(|| self.template(&TemplateId::from(TEMPLATE_GENERAL)))
            .expect("validated pack carries the default template")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn builtin_pack_validates() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.version(), builtin::PACK_VERSION);
        assert!(kb.condition(&ConditionId::from("allergic_rhinitis")).is_some());
        assert!(kb.symptom(&SymptomId::from("itchy_eyes")).is_some());
    }

    #[test]
    fn knowledge_base_is_debug_printable() {
        let kb = KnowledgeBase::builtin().unwrap();
        let rendered = format!("{kb:?}");
        assert!(rendered.contains("KnowledgeBase"));
    }

    #[test]
    fn builtin_edges_are_indexed_both_ways() {
        let kb = KnowledgeBase::builtin().unwrap();
        let from_itchy: Vec<_> = kb
            .edges_from_symptom(&SymptomId::from("itchy_eyes"))
            .collect();
        assert!(from_itchy
            .iter()
            .any(|e| e.condition_id.as_str() == "allergic_rhinitis" && e.weight == 5));
        let from_bp: Vec<_> = kb
            .edges_from_vital_rule(&VitalRuleId::from("bp_stage2_sys"))
            .collect();
        assert_eq!(from_bp.len(), 1);
        assert_eq!(from_bp[0].condition_id.as_str(), "hypertension_risk");

        let hypertensive = ConditionId::from("hypertensive_urgency_risk");
        let incoming: Vec<_> = kb.edges_for_condition(&hypertensive).collect();
        assert_eq!(incoming.len(), 2);
    }

    #[test]
    fn rejects_edge_to_unknown_condition() {
        let mut pack = builtin::pack();
        pack.supports.push(pack::SupportEdge {
            source: SupportSource::Symptom(SymptomId::from("cough")),
            condition_id: ConditionId::from("no_such_condition"),
            weight: 3,
        });
        let err = KnowledgeBase::from_pack(pack).unwrap_err();
        assert!(err.to_string().contains("unknown condition"));
    }

    #[test]
    fn rejects_zero_weight_edge() {
        let mut pack = builtin::pack();
        pack.supports.push(pack::SupportEdge {
            source: SupportSource::Symptom(SymptomId::from("cough")),
            condition_id: ConditionId::from("viral_uri"),
            weight: 0,
        });
        assert!(KnowledgeBase::from_pack(pack).is_err());
    }

    #[test]
    fn rejects_duplicate_condition_id() {
        let mut pack = builtin::pack();
        let dup = pack.conditions[0].clone();
        pack.conditions.push(dup);
        let err = KnowledgeBase::from_pack(pack).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn rejects_ui_map_for_unknown_action() {
        let mut pack = builtin::pack();
        let mut entry = pack.assistant_ui_map[0].clone();
        entry.action_id = AssistantActionId::from("no_such_action");
        pack.assistant_ui_map.push(entry);
        assert!(KnowledgeBase::from_pack(pack).is_err());
    }

    #[test]
    fn loads_pack_from_json_file() {
        let pack = builtin::pack();
        let json = serde_json::to_string(&pack).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let kb = KnowledgeBase::load(file.path()).unwrap();
        assert_eq!(kb.version(), pack.version);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = KnowledgeBase::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TriageError::KnowledgePackLoad(_, _)));
    }

    #[test]
    fn load_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = KnowledgeBase::load(file.path()).unwrap_err();
        assert!(matches!(err, TriageError::KnowledgePackParse(_, _)));
    }

    #[test]
    fn guides_fall_back_to_return_precautions() {
        let kb = KnowledgeBase::builtin().unwrap();
        let mapped = kb.guides_for_condition(&ConditionId::from("posture_related_headache"));
        assert_eq!(mapped.len(), 3);
        let fallback = kb.guides_for_condition(&ConditionId::from("gerd"));
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].id.as_str(), FALLBACK_GUIDE);
    }

    #[test]
    fn template_selection_by_condition_family() {
        let kb = KnowledgeBase::builtin().unwrap();
        let posture = kb.template_for_condition(&ConditionId::from("posture_related_headache"));
        assert_eq!(posture.id.as_str(), "tmpl_posture_headache");
        let urgent = kb.template_for_condition(&ConditionId::from("hypertensive_urgency_risk"));
        assert_eq!(urgent.id.as_str(), "tmpl_urgent");
        let general = kb.template_for_condition(&ConditionId::from("gerd"));
        assert_eq!(general.id.as_str(), "tmpl_general");
    }
}
