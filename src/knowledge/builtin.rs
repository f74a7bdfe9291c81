//! The compiled-in clinical knowledge pack (v02).
//!
//! Authored dataset: conditions, danger-sign rules, symptoms, vital-threshold
//! rules, weighted support edges, and the suggestion/assistant/guide catalogs.
//! Deployments can override it with a JSON pack via `KnowledgeBase::load`;
//! the compiled-in copy is the default and the one exercised by tests.

use crate::models::enums::{
    ActionCategory, AssistantActionCategory, ConditionSeverity, GuideCategory, MedicationClass,
    SymptomCategory, UiControl, UrgencyTier, VitalComparison, VitalField,
};
use crate::models::ids::{
    ActionId, AssistantActionId, ConditionId, DangerSignId, GuideId, LabId, MedicationOptionId,
    SpecialistId, SymptomId, TemplateId, VitalRuleId,
};

use super::pack::{
    AssistantActionTemplate, AssistantUiMapEntry, Condition, ConditionGuideMapEntry,
    DangerSignRule, KnowledgePack, Lab, LifestyleAction, MedicationOption, MessageTemplate,
    PatientGuide, Specialist, SupportEdge, SupportSource, Symptom, UiHint, VitalRule,
};

pub const PACK_VERSION: &str = "v02";

fn cond(id: &str, name: &str, severity: ConditionSeverity, description: &str) -> Condition {
    Condition {
        id: ConditionId::from(id),
        name: name.into(),
        severity,
        description: description.into(),
    }
}

fn danger(id: &str, name: &str, urgency: UrgencyTier) -> DangerSignRule {
    DangerSignRule {
        id: DangerSignId::from(id),
        name: name.into(),
        urgency,
    }
}

fn sym(id: &str, name: &str, category: SymptomCategory) -> Symptom {
    Symptom {
        id: SymptomId::from(id),
        name: name.into(),
        category,
    }
}

fn vital_rule(
    id: &str,
    name: &str,
    vital: VitalField,
    operator: VitalComparison,
    threshold: f64,
    unit: &str,
) -> VitalRule {
    VitalRule {
        id: VitalRuleId::from(id),
        name: name.into(),
        vital,
        operator,
        threshold,
        unit: unit.into(),
    }
}

fn sym_edge(from: &str, condition: &str, weight: u32) -> SupportEdge {
    SupportEdge {
        source: SupportSource::Symptom(SymptomId::from(from)),
        condition_id: ConditionId::from(condition),
        weight,
    }
}

fn rule_edge(from: &str, condition: &str, weight: u32) -> SupportEdge {
    SupportEdge {
        source: SupportSource::VitalRule(VitalRuleId::from(from)),
        condition_id: ConditionId::from(condition),
        weight,
    }
}

fn lab(id: &str, name: &str) -> Lab {
    Lab {
        id: LabId::from(id),
        name: name.into(),
    }
}

fn specialist(id: &str, name: &str) -> Specialist {
    Specialist {
        id: SpecialistId::from(id),
        name: name.into(),
    }
}

fn med(id: &str, name: &str, class: MedicationClass, notes: &str) -> MedicationOption {
    MedicationOption {
        id: MedicationOptionId::from(id),
        name: name.into(),
        class,
        notes: notes.into(),
    }
}

fn action(id: &str, name: &str, category: ActionCategory, notes: &str) -> LifestyleAction {
    LifestyleAction {
        id: ActionId::from(id),
        name: name.into(),
        category,
        notes: notes.into(),
    }
}

fn assistant(
    id: &str,
    name: &str,
    category: AssistantActionCategory,
    notes: &str,
) -> AssistantActionTemplate {
    AssistantActionTemplate {
        id: AssistantActionId::from(id),
        name: name.into(),
        category,
        notes: notes.into(),
    }
}

fn ui_number(
    action_id: &str,
    field: &str,
    min: f64,
    max: f64,
    unit: &str,
    placeholder: &str,
) -> AssistantUiMapEntry {
    AssistantUiMapEntry {
        action_id: AssistantActionId::from(action_id),
        hint: UiHint {
            control: UiControl::Number,
            field_keys: vec![field.into()],
            min_value: Some(min),
            max_value: Some(max),
            unit_label: Some(unit.into()),
            dropdown_options: vec![],
            placeholder: placeholder.into(),
        },
    }
}

fn ui_dropdown(action_id: &str, field: &str, options: &[&str], placeholder: &str) -> AssistantUiMapEntry {
    AssistantUiMapEntry {
        action_id: AssistantActionId::from(action_id),
        hint: UiHint {
            control: UiControl::Dropdown,
            field_keys: vec![field.into()],
            min_value: None,
            max_value: None,
            unit_label: None,
            dropdown_options: options.iter().map(|s| s.to_string()).collect(),
            placeholder: placeholder.into(),
        },
    }
}

fn ui_textarea(action_id: &str, field: &str, placeholder: &str) -> AssistantUiMapEntry {
    AssistantUiMapEntry {
        action_id: AssistantActionId::from(action_id),
        hint: UiHint {
            control: UiControl::Textarea,
            field_keys: vec![field.into()],
            min_value: None,
            max_value: None,
            unit_label: None,
            dropdown_options: vec![],
            placeholder: placeholder.into(),
        },
    }
}

fn ui_yes_no(action_id: &str, field: &str, placeholder: &str) -> AssistantUiMapEntry {
    AssistantUiMapEntry {
        action_id: AssistantActionId::from(action_id),
        hint: UiHint {
            control: UiControl::YesNo,
            field_keys: vec![field.into()],
            min_value: None,
            max_value: None,
            unit_label: None,
            dropdown_options: vec![],
            placeholder: placeholder.into(),
        },
    }
}

fn guide(id: &str, title: &str, filename: &str, category: GuideCategory, desc: &str) -> PatientGuide {
    PatientGuide {
        id: GuideId::from(id),
        title: title.into(),
        filename: filename.into(),
        category,
        description: desc.into(),
    }
}

fn guide_map(condition: &str, guides: &[&str]) -> ConditionGuideMapEntry {
    ConditionGuideMapEntry {
        condition_id: ConditionId::from(condition),
        guide_ids: guides.iter().map(|g| GuideId::from(*g)).collect(),
    }
}

pub fn pack() -> KnowledgePack {
    use crate::models::enums::ConditionSeverity::{Common, SeriousBucket};
    use crate::models::enums::SymptomCategory as SC;
    use crate::models::enums::UrgencyTier::{ErNow, SameDayUrgentEval};
    use crate::models::enums::VitalComparison::{Ge, Le, Lt};

    let conditions = vec![
        cond("posture_related_headache", "Posture-related headache", Common, "Headache possibly related to posture and muscle strain"),
        cond("tension_headache", "Tension headache", Common, "Band-like headache without focal neurologic deficits"),
        cond("migraine_possible", "Migraine possible", Common, "Headache with features such as photophobia, nausea, or aura"),
        cond("eye_strain_headache", "Eye strain headache", Common, "Headache possibly related to prolonged screen use or visual strain"),
        cond("sleep_deprivation_headache", "Sleep deprivation headache", Common, "Headache associated with insufficient or disrupted sleep"),
        cond("dehydration_headache", "Dehydration headache", Common, "Headache associated with low fluid intake or fluid losses"),
        cond("viral_uri", "Viral upper respiratory infection", Common, "Cold-like symptoms including runny nose and sore throat"),
        cond("influenza_like_illness", "Influenza-like illness", Common, "Fever and body aches with respiratory symptoms"),
        cond("covid_like_illness", "COVID-like illness", Common, "Respiratory symptoms with systemic features"),
        cond("acute_sinusitis", "Acute sinusitis possible", Common, "Facial pressure and congestion with persistent symptoms"),
        cond("acute_pharyngitis", "Acute pharyngitis", Common, "Sore throat with inflammatory symptoms"),
        cond("acute_bronchitis", "Acute bronchitis", Common, "Cough after URI, often without pneumonia signs"),
        cond("allergic_rhinitis", "Allergic rhinitis", Common, "Sneezing and itchy eyes/runny nose often tied to allergens"),
        cond("asthma_exacerbation", "Asthma exacerbation", Common, "Wheeze or SOB in context of asthma history/triggers"),
        cond("copd_exacerbation", "COPD exacerbation", Common, "Increased cough/sputum/SOB in COPD context"),
        cond("acute_gastroenteritis", "Acute gastroenteritis", Common, "Nausea/vomiting/diarrhea"),
        cond("gerd", "GERD", Common, "Heartburn or reflux-related symptoms"),
        cond("gastritis_peptic_ulcer_possible", "Gastritis/ulcer possible", Common, "Epigastric pain with nausea or bleeding concern"),
        cond("ibs_possible", "IBS possible", Common, "Chronic abdominal discomfort with bowel changes"),
        cond("constipation", "Constipation", Common, "Infrequent hard stools and straining"),
        cond("uti_uncomplicated", "UTI possible (uncomplicated)", Common, "Dysuria and frequency without systemic signs"),
        cond("kidney_stone_possible", "Kidney stone possible", Common, "Flank pain with urinary symptoms"),
        cond("low_back_pain_strain", "Low back strain", Common, "Mechanical back pain after activity"),
        cond("neck_strain", "Neck strain", Common, "Neck pain/stiffness after posture or activity"),
        cond("shoulder_strain", "Shoulder strain", Common, "Shoulder pain after activity or overuse"),
        cond("sprain_strain_minor_injury", "Minor sprain/strain", Common, "Localized pain after minor injury"),
        cond("contact_dermatitis", "Contact dermatitis", Common, "Rash after exposure/irritant"),
        cond("urticaria_hives", "Urticaria (hives)", Common, "Itchy welts often due to allergic triggers"),
        cond("cellulitis_possible", "Cellulitis possible", Common, "Spreading redness/warmth suggesting skin infection"),
        cond("benign_vertigo_possible", "Benign vertigo possible", Common, "Positional dizziness without neuro red flags"),
        cond("tension_dizziness", "Tension-related dizziness", Common, "Lightheadedness associated with stress or dehydration"),
        cond("anxiety_related_symptoms", "Anxiety-related symptoms", Common, "Symptoms such as palpitations, sweating, worry"),
        cond("panic_attack_possible", "Panic attack possible", Common, "Acute episodes of fear with physical symptoms"),
        cond("sleep_disorder_possible", "Sleep disorder possible", Common, "Poor sleep quality with daytime impairment"),
        cond("stress_related_symptoms", "Stress-related symptoms", Common, "Somatic symptoms associated with high stress"),
        cond("hypertension_risk", "Hypertension risk", Common, "Elevated BP readings without emergency criteria"),
        cond("hypertensive_urgency_risk", "Hypertensive urgency risk", SeriousBucket, "Very high BP requiring prompt evaluation"),
        cond("hyperglycemia_risk_prediabetes_diabetes", "Hyperglycemia risk", SeriousBucket, "Symptoms suggesting elevated blood glucose"),
        cond("respiratory_compromise_risk", "Respiratory compromise risk", SeriousBucket, "Low oxygen or significant breathing difficulty risk"),
        cond("dehydration_risk", "Dehydration risk", SeriousBucket, "Fluid loss risk with signs of hemodynamic stress"),
        cond("infection_risk_systemic", "Systemic infection risk", SeriousBucket, "Concerning infection pattern requiring evaluation"),
        cond("neurologic_warning_risk", "Neurologic warning risk", SeriousBucket, "Possible neurologic emergency pattern"),
        cond("cardiac_warning_risk", "Cardiac warning risk", SeriousBucket, "Possible cardiac emergency pattern"),
    ];

    let danger_signs = vec![
        danger("redflag_chest_pain", "Chest pain", ErNow),
        danger("redflag_severe_shortness_of_breath", "Severe shortness of breath", ErNow),
        danger("redflag_spo2_low", "Low oxygen saturation", ErNow),
        danger("redflag_bp_very_high", "Very high blood pressure", SameDayUrgentEval),
        danger("redflag_fainting_syncope", "Fainting/syncope", ErNow),
        danger("redflag_new_neuro_deficit", "New neurologic deficit", ErNow),
        danger("redflag_severe_headache_sudden", "Sudden severe headache", ErNow),
        danger("redflag_high_fever_persistent", "High fever persistent", SameDayUrgentEval),
        danger("redflag_neck_stiffness_photophobia", "Neck stiffness with photophobia", ErNow),
        danger("redflag_severe_dehydration", "Severe dehydration signs", SameDayUrgentEval),
        danger("redflag_bloody_stool_or_vomit", "Blood in stool or vomit", ErNow),
        danger("redflag_severe_abdominal_pain", "Severe abdominal pain", ErNow),
        danger("redflag_severe_allergic_reaction", "Severe allergic reaction symptoms", ErNow),
        danger("redflag_uncontrolled_hyperglycemia", "Concerning hyperglycemia symptoms", SameDayUrgentEval),
        danger("redflag_possible_sepsis", "Possible sepsis pattern", ErNow),
        danger("redflag_acute_confusion", "Acute confusion", ErNow),
        danger("redflag_uncontrolled_pain", "Uncontrolled severe pain", ErNow),
        danger("redflag_pregnancy_complication", "Possible pregnancy complication", ErNow),
    ];

    let symptoms = vec![
        sym("fever", "Fever", SC::Systemic),
        sym("cough", "Cough", SC::Respiratory),
        sym("sore_throat", "Sore throat", SC::Respiratory),
        sym("runny_nose", "Runny nose", SC::Respiratory),
        sym("nasal_congestion", "Nasal congestion", SC::Respiratory),
        sym("sneezing", "Sneezing", SC::Allergy),
        sym("itchy_eyes", "Itchy eyes", SC::Allergy),
        sym("body_aches", "Body aches", SC::Systemic),
        sym("fatigue", "Fatigue", SC::Systemic),
        sym("headache", "Headache", SC::Neuro),
        sym("dizziness", "Dizziness", SC::Neuro),
        sym("shortness_of_breath", "Shortness of breath", SC::Respiratory),
        sym("wheezing", "Wheezing", SC::Respiratory),
        sym("chest_pain", "Chest pain", SC::Other),
        sym("chest_tightness", "Chest tightness", SC::Respiratory),
        sym("nausea", "Nausea", SC::Gi),
        sym("vomiting", "Vomiting", SC::Gi),
        sym("diarrhea", "Diarrhea", SC::Gi),
        sym("abdominal_pain", "Abdominal pain", SC::Gi),
        sym("heartburn", "Heartburn", SC::Gi),
        sym("blood_in_stool", "Blood in stool", SC::Gi),
        sym("blood_in_vomit", "Blood in vomit", SC::Gi),
        sym("flank_pain", "Flank pain", SC::Gu),
        sym("painful_urination", "Painful urination", SC::Gu),
        sym("urinary_frequency", "Urinary frequency", SC::Gu),
        sym("rash", "Rash", SC::Skin),
        sym("hives", "Hives", SC::Skin),
        sym("skin_redness_warmth", "Skin redness/warmth", SC::Skin),
        sym("rash_spreading", "Rash spreading", SC::Skin),
        sym("skin_pain", "Skin pain", SC::Skin),
        sym("polyuria", "Frequent urination", SC::Metabolic),
        sym("polydipsia", "Increased thirst", SC::Metabolic),
        sym("blurred_vision", "Blurred vision", SC::Metabolic),
        sym("polyphagia", "Increased appetite", SC::Metabolic),
        sym("poor_wound_healing", "Poor wound healing", SC::Metabolic),
        sym("neck_stiffness", "Neck stiffness", SC::Neuro),
        sym("photophobia", "Light sensitivity", SC::Neuro),
        sym("sound_sensitivity", "Sound sensitivity", SC::Neuro),
        sym("new_weakness", "New weakness", SC::Neuro),
        sym("confusion", "Confusion", SC::Neuro),
        sym("tingling", "Tingling", SC::Neuro),
        sym("numbness", "Numbness", SC::Neuro),
        sym("balance_issues", "Balance issues", SC::Neuro),
        sym("double_vision", "Double vision", SC::Neuro),
        sym("eye_strain", "Eye strain", SC::Neuro),
        sym("screen_overuse", "Prolonged screen use", SC::Lifestyle),
        sym("poor_posture", "Poor posture", SC::Lifestyle),
        sym("sleep_loss", "Sleep loss", SC::Lifestyle),
        sym("snoring", "Snoring", SC::Sleep),
        sym("daytime_sleepiness", "Daytime sleepiness", SC::Sleep),
        sym("palpitations", "Palpitations", SC::Cardio),
        sym("tremor", "Tremor", SC::Neuro),
        sym("sweating", "Sweating", SC::Systemic),
        sym("anxiety", "Anxiety", SC::Psych),
        sym("panic", "Panic episode", SC::Psych),
        sym("upper_back_pain", "Upper back pain", SC::Msk),
        sym("neck_pain", "Neck pain", SC::Msk),
        sym("shoulder_pain", "Shoulder pain", SC::Msk),
        sym("low_back_pain", "Low back pain", SC::Msk),
        sym("joint_swelling", "Joint swelling", SC::Msk),
        sym("joint_stiffness", "Joint stiffness", SC::Msk),
        sym("chills", "Chills", SC::Systemic),
        sym("weight_loss", "Weight loss", SC::Systemic),
        sym("weight_gain", "Weight gain", SC::Systemic),
        sym("night_sweats", "Night sweats", SC::Systemic),
        sym("leg_swelling", "Leg swelling", SC::Cardio),
        sym("urinary_urgency", "Urinary urgency", SC::Gu),
        sym("blood_in_urine", "Blood in urine", SC::Gu),
        sym("itching", "Itching", SC::Skin),
        sym("joint_pain", "Joint pain", SC::Msk),
        sym("muscle_pain", "Muscle pain", SC::Msk),
        sym("fainting_syncope", "Fainting or near-fainting", SC::Neuro),
        sym("constipation", "Constipation", SC::Gi),
    ];

    let vital_rules = vec![
        vital_rule("spo2_critical", "SpO2 critical low", VitalField::Spo2, Lt, 90.0, "%"),
        vital_rule("spo2_low", "Low oxygen saturation", VitalField::Spo2, Lt, 92.0, "%"),
        vital_rule("spo2_borderline", "Borderline oxygen saturation", VitalField::Spo2, Le, 94.0, "%"),
        vital_rule("bp_stage2_sys", "High systolic BP (stage 2)", VitalField::BpSystolic, Ge, 160.0, "mmHg"),
        vital_rule("bp_urgency_sys", "Very high systolic BP", VitalField::BpSystolic, Ge, 180.0, "mmHg"),
        vital_rule("bp_urgency_dia", "Very high diastolic BP", VitalField::BpDiastolic, Ge, 120.0, "mmHg"),
        vital_rule("hr_tachy", "Tachycardia", VitalField::HeartRate, Ge, 120.0, "bpm"),
        vital_rule("hr_brady", "Bradycardia", VitalField::HeartRate, Le, 45.0, "bpm"),
        vital_rule("temp_high", "High fever", VitalField::TemperatureC, Ge, 39.0, "C"),
        vital_rule("temp_moderate", "Fever", VitalField::TemperatureC, Ge, 38.0, "C"),
        vital_rule("temp_low", "Low temperature", VitalField::TemperatureC, Le, 35.0, "C"),
    ];

    let supports = vec![
        sym_edge("poor_posture", "posture_related_headache", 4),
        sym_edge("screen_overuse", "eye_strain_headache", 4),
        sym_edge("eye_strain", "eye_strain_headache", 4),
        sym_edge("sleep_loss", "sleep_deprivation_headache", 4),
        sym_edge("headache", "tension_headache", 3),
        sym_edge("photophobia", "migraine_possible", 4),
        sym_edge("sound_sensitivity", "migraine_possible", 4),
        sym_edge("nausea", "migraine_possible", 2),
        sym_edge("neck_pain", "neck_strain", 4),
        sym_edge("neck_stiffness", "neck_strain", 4),
        sym_edge("upper_back_pain", "posture_related_headache", 3),
        sym_edge("shoulder_pain", "shoulder_strain", 4),
        sym_edge("palpitations", "anxiety_related_symptoms", 3),
        sym_edge("panic", "panic_attack_possible", 4),
        sym_edge("anxiety", "anxiety_related_symptoms", 4),
        sym_edge("dizziness", "tension_dizziness", 2),
        sym_edge("dizziness", "benign_vertigo_possible", 3),
        sym_edge("balance_issues", "benign_vertigo_possible", 3),
        sym_edge("itchy_eyes", "allergic_rhinitis", 5),
        sym_edge("sneezing", "allergic_rhinitis", 4),
        sym_edge("runny_nose", "allergic_rhinitis", 3),
        sym_edge("nasal_congestion", "allergic_rhinitis", 3),
        sym_edge("runny_nose", "viral_uri", 3),
        sym_edge("sore_throat", "viral_uri", 2),
        sym_edge("cough", "viral_uri", 2),
        sym_edge("fever", "influenza_like_illness", 4),
        sym_edge("body_aches", "influenza_like_illness", 4),
        sym_edge("cough", "influenza_like_illness", 2),
        sym_edge("fever", "covid_like_illness", 3),
        sym_edge("cough", "covid_like_illness", 3),
        sym_edge("shortness_of_breath", "covid_like_illness", 2),
        sym_edge("nasal_congestion", "acute_sinusitis", 3),
        sym_edge("headache", "acute_sinusitis", 2),
        sym_edge("sore_throat", "acute_pharyngitis", 4),
        sym_edge("fever", "acute_pharyngitis", 2),
        sym_edge("cough", "acute_bronchitis", 4),
        sym_edge("wheezing", "asthma_exacerbation", 4),
        sym_edge("shortness_of_breath", "asthma_exacerbation", 3),
        sym_edge("wheezing", "copd_exacerbation", 3),
        sym_edge("shortness_of_breath", "copd_exacerbation", 3),
        sym_edge("diarrhea", "acute_gastroenteritis", 4),
        sym_edge("vomiting", "acute_gastroenteritis", 4),
        sym_edge("nausea", "acute_gastroenteritis", 3),
        sym_edge("heartburn", "gerd", 5),
        sym_edge("abdominal_pain", "gastritis_peptic_ulcer_possible", 3),
        sym_edge("blood_in_vomit", "gastritis_peptic_ulcer_possible", 4),
        sym_edge("blood_in_stool", "gastritis_peptic_ulcer_possible", 4),
        sym_edge("constipation", "constipation", 5),
        sym_edge("abdominal_pain", "ibs_possible", 2),
        sym_edge("painful_urination", "uti_uncomplicated", 5),
        sym_edge("urinary_frequency", "uti_uncomplicated", 3),
        sym_edge("flank_pain", "kidney_stone_possible", 5),
        sym_edge("rash", "contact_dermatitis", 4),
        sym_edge("hives", "urticaria_hives", 5),
        sym_edge("skin_redness_warmth", "cellulitis_possible", 5),
        sym_edge("rash_spreading", "cellulitis_possible", 4),
        sym_edge("polyuria", "hyperglycemia_risk_prediabetes_diabetes", 4),
        sym_edge("polydipsia", "hyperglycemia_risk_prediabetes_diabetes", 4),
        sym_edge("blurred_vision", "hyperglycemia_risk_prediabetes_diabetes", 2),
        sym_edge("poor_wound_healing", "hyperglycemia_risk_prediabetes_diabetes", 3),
        rule_edge("bp_stage2_sys", "hypertension_risk", 4),
        rule_edge("bp_urgency_sys", "hypertensive_urgency_risk", 5),
        rule_edge("bp_urgency_dia", "hypertensive_urgency_risk", 5),
        rule_edge("spo2_low", "respiratory_compromise_risk", 5),
        rule_edge("spo2_critical", "respiratory_compromise_risk", 5),
        rule_edge("temp_high", "infection_risk_systemic", 4),
        rule_edge("hr_tachy", "infection_risk_systemic", 2),
        sym_edge("fever", "infection_risk_systemic", 3),
        sym_edge("confusion", "neurologic_warning_risk", 4),
        sym_edge("new_weakness", "neurologic_warning_risk", 5),
        sym_edge("double_vision", "neurologic_warning_risk", 4),
        sym_edge("chest_pain", "cardiac_warning_risk", 5),
        sym_edge("palpitations", "cardiac_warning_risk", 2),
        sym_edge("shortness_of_breath", "respiratory_compromise_risk", 4),
        sym_edge("fatigue", "sleep_disorder_possible", 2),
        sym_edge("daytime_sleepiness", "sleep_disorder_possible", 4),
        sym_edge("snoring", "sleep_disorder_possible", 3),
        sym_edge("sleep_loss", "sleep_disorder_possible", 3),
    ];

    let labs = vec![
        lab("cbc", "Complete blood count (CBC)"),
        lab("cmp_bmp", "Metabolic panel (BMP/CMP)"),
        lab("lipid_panel", "Lipid panel"),
        lab("hba1c", "Hemoglobin A1c"),
        lab("fasting_glucose", "Fasting plasma glucose"),
        lab("urinalysis", "Urinalysis"),
        lab("ekg", "Electrocardiogram (EKG)"),
        lab("troponin", "Troponin"),
        lab("chest_xray", "Chest X-ray"),
        lab("pulse_ox_monitoring", "Pulse oximetry monitoring"),
        lab("flu_test", "Influenza test"),
        lab("covid_test", "COVID test"),
        lab("strep_test", "Rapid strep test"),
        lab("viral_panel", "Respiratory viral panel"),
        lab("d_dimer", "D-dimer (if indicated)"),
    ];

    let specialists = vec![
        specialist("primary_care", "Primary care"),
        specialist("urgent_care", "Urgent care"),
        specialist("emergency_department", "Emergency department"),
        specialist("cardiology", "Cardiology"),
        specialist("neurology", "Neurology"),
        specialist("endocrinology", "Endocrinology"),
        specialist("pulmonology", "Pulmonology"),
        specialist("allergy_immunology", "Allergy/Immunology"),
        specialist("dermatology", "Dermatology"),
        specialist("gastroenterology", "Gastroenterology"),
        specialist("urology", "Urology"),
        specialist("ophthalmology", "Ophthalmology"),
        specialist("orthopedics", "Orthopedics"),
        specialist("physical_therapy", "Physical therapy"),
    ];

    use crate::models::enums::MedicationClass::{ClinicianDiscussion, Otc, Supportive};
    let medication_options = vec![
        med("acetaminophen_category", "Acetaminophen category", Otc, "Fever/pain relief category; clinician review required"),
        med("nsaid_category", "NSAID category", Otc, "Pain/inflammation relief category; clinician review required"),
        med("antihistamine_nondrowsy", "Non-drowsy antihistamine", Otc, "Allergy symptom relief category; clinician review required"),
        med("intranasal_steroid", "Intranasal steroid spray", Otc, "Allergy/congestion category"),
        med("saline_rinse", "Saline nasal rinse", Supportive, "Supportive congestion relief"),
        med("antacid_category", "Antacid category", Otc, "Reflux symptom relief category"),
        med("acid_reducer_h2", "Acid reducer (H2 blocker)", Otc, "Reflux symptom relief category"),
        med("oral_rehydration", "Oral rehydration solution", Supportive, "Hydration support category"),
        med("antiemetic_category", "Antiemetic category", ClinicianDiscussion, "Discuss nausea management options"),
        med("cough_suppressant_category", "Cough suppressant category", Otc, "Cough symptom relief category; clinician review required"),
        med("topical_steroid_low", "Topical anti-itch steroid (low potency)", Otc, "Itch relief category"),
        med("topical_antifungal", "Topical antifungal category", Otc, "Discuss if fungal rash suspected"),
        med("bronchodilator_category", "Bronchodilator category", ClinicianDiscussion, "Discuss if wheeze/airway symptoms present"),
        med("nasal_decongestant", "Nasal decongestant category", Otc, "Congestion relief category; clinician review required"),
        med("sleep_aid_nonprescription", "Non-prescription sleep aid category", Otc, "Short-term sleep support category; clinician review required"),
        med("muscle_relaxant_discussion", "Muscle relaxant discussion", ClinicianDiscussion, "Discuss if muscle spasm suspected"),
        med("lifestyle_first_bp", "Lifestyle modification first", ClinicianDiscussion, "Discuss before starting antihypertensives; clinician review required"),
        med("glucose_monitoring", "Blood glucose monitoring", Supportive, "Medication decisions pending glucose results; clinician review required"),
    ];

    use crate::models::enums::ActionCategory::{
        Exercise, FollowUp, Lifestyle, Safety, Supportive as SupportiveAction,
    };
    let actions = vec![
        action("action_hydration", "Hydration", SupportiveAction, "Encourage adequate fluids if appropriate"),
        action("action_rest", "Rest", SupportiveAction, "Rest as needed"),
        action("action_sleep_hygiene", "Sleep hygiene", Lifestyle, "Maintain consistent sleep routine"),
        action("action_reduce_screen_time", "Reduce screen time", Lifestyle, "Reduce eye strain triggers if relevant"),
        action("action_ergonomic_adjustments", "Ergonomic adjustments", Lifestyle, "Adjust desk/monitor/phone position"),
        action("action_posture_correction", "Posture correction", Lifestyle, "Posture awareness and breaks"),
        action("action_neck_stretches", "Neck stretches", Exercise, "Gentle stretching as tolerated"),
        action("action_shoulder_mobility", "Shoulder mobility", Exercise, "Gentle range-of-motion as tolerated"),
        action("action_gentle_activity", "Gentle activity", SupportiveAction, "Movement as tolerated"),
        action("action_activity_modification", "Activity modification", Lifestyle, "Avoid aggravating activities temporarily"),
        action("action_avoid_triggers", "Avoid triggers", Lifestyle, "Avoid suspected triggers where possible"),
        action("action_dietary_adjustments", "Dietary adjustments", Lifestyle, "Supportive diet modifications as appropriate"),
        action("action_limit_alcohol", "Limit alcohol", Lifestyle, "Reduce alcohol intake if relevant"),
        action("action_avoid_vaping", "Avoid vaping", Lifestyle, "Reduce airway irritant exposure if relevant"),
        action("action_stress_management", "Stress management", Lifestyle, "Relaxation and coping strategies"),
        action("action_breathing_exercises", "Breathing exercises", SupportiveAction, "Breathing techniques if anxiety/stress"),
        action("action_return_precautions", "Return precautions", Safety, "Seek care if symptoms worsen or red flags develop"),
        action("action_symptom_monitoring", "Symptom monitoring", FollowUp, "Track symptom changes"),
        action("action_bp_self_monitoring", "BP self-monitoring", FollowUp, "Home BP checks if clinician recommends"),
        action("action_glucose_followup", "Glucose follow-up plan", FollowUp, "Follow-up evaluation for hyperglycemia"),
        action("action_followup_primary_care", "Follow-up with primary care", FollowUp, "Schedule follow-up visit"),
        action("action_followup_specialist", "Follow-up with specialist", FollowUp, "Schedule specialist visit if referred"),
    ];

    use crate::models::enums::AssistantActionCategory::{
        Clarification, DataCollection, FollowUp as FollowUpAction,
    };
    let assistant_actions = vec![
        assistant("collect_spo2", "Measure oxygen saturation (SpO2)", DataCollection, "Needed to assess respiratory risk and danger signs"),
        assistant("collect_bp", "Measure blood pressure", DataCollection, "Needed to assess hypertension risk and danger signs"),
        assistant("collect_temperature", "Measure temperature", DataCollection, "Helps assess infection risk and severity"),
        assistant("collect_heart_rate", "Measure heart rate", DataCollection, "Helps assess systemic stress and severity"),
        assistant("collect_respiratory_rate", "Measure respiratory rate", DataCollection, "Supports respiratory severity assessment"),
        assistant("collect_repeat_measurements", "Repeat key measurements", DataCollection, "Confirm abnormal vitals before disposition"),
        assistant("clarify_symptom_severity", "Clarify symptom severity", Clarification, "Severity can change triage and urgency"),
        assistant("clarify_symptom_duration", "Clarify symptom duration", Clarification, "Duration affects differential confidence"),
        assistant("clarify_functional_impact", "Clarify functional impact", Clarification, "Functional limitation may affect urgency"),
        assistant("clarify_posture_and_ergonomics", "Clarify posture/ergonomics", FollowUpAction, "Supports posture-related headache/strain assessment"),
        assistant("clarify_screen_time", "Clarify screen time", FollowUpAction, "Supports eye strain and posture assessment"),
        assistant("clarify_sleep_pattern", "Clarify sleep pattern", FollowUpAction, "Supports sleep-related symptoms assessment"),
        assistant("clarify_stress_level", "Clarify stress level", FollowUpAction, "Supports stress-related symptoms assessment"),
        assistant("clarify_substance_timing", "Clarify timing relative to substances", FollowUpAction, "Context may affect symptom interpretation"),
        assistant("clarify_exposure_history", "Clarify exposures (travel/sick contacts/new meds)", FollowUpAction, "Exposure context may shift likely causes"),
        assistant("clarify_neuro_symptoms", "Screen for neurologic warning signs", FollowUpAction, "Helps assess neurologic danger signs"),
        assistant("clarify_hydration_status", "Clarify hydration status", FollowUpAction, "Helps assess dehydration severity"),
        assistant("clarify_pain_character", "Clarify pain character/location", FollowUpAction, "Supports abdominal pain/headache interpretation"),
    ];

    let mut assistant_ui_map = vec![
        ui_number("collect_spo2", "spo2", 50.0, 100.0, "%", "Enter oxygen saturation"),
        ui_number("collect_temperature", "temperature_c", 30.0, 45.0, "C", "Enter temperature"),
        ui_number("collect_heart_rate", "heart_rate", 30.0, 220.0, "bpm", "Enter heart rate"),
        ui_number("collect_respiratory_rate", "respiratory_rate", 5.0, 60.0, "breaths/min", "Enter respiratory rate"),
        ui_dropdown("collect_repeat_measurements", "repeat_measurement_type", &["bp", "spo2", "temperature", "heart_rate", "respiratory_rate"], "Choose measurement to repeat"),
        ui_dropdown("clarify_symptom_severity", "symptom_severity", &["mild", "moderate", "severe"], "Select severity"),
        ui_dropdown("clarify_symptom_duration", "symptom_duration", &["today", "days", "weeks", "months"], "Select duration"),
        ui_dropdown("clarify_functional_impact", "functional_impact", &["none", "mild", "moderate", "severe"], "Select impact"),
        ui_textarea("clarify_posture_and_ergonomics", "posture_notes", "Add posture and ergonomics details"),
        ui_dropdown("clarify_screen_time", "screen_time_level", &["low", "moderate", "high"], "Select screen time level"),
        ui_dropdown("clarify_sleep_pattern", "sleep_quality", &["good", "fair", "poor", "irregular"], "Select sleep quality"),
        ui_dropdown("clarify_stress_level", "stress_level", &["low", "moderate", "high"], "Select stress level"),
        ui_textarea("clarify_substance_timing", "substance_timing_notes", "Add timing details (optional)"),
        ui_textarea("clarify_exposure_history", "exposure_notes", "Add exposure details (optional)"),
        ui_yes_no("clarify_neuro_symptoms", "neuro_danger_signs_present", "Any new weakness, facial droop, or speech trouble?"),
        ui_dropdown("clarify_hydration_status", "hydration_status", &["adequate", "possibly_low", "low"], "Select hydration status"),
        ui_textarea("clarify_pain_character", "pain_character_notes", "Describe pain character/location"),
    ];
    // The BP prompt covers both components with one action.
    assistant_ui_map.push(AssistantUiMapEntry {
        action_id: AssistantActionId::from("collect_bp"),
        hint: UiHint {
            control: UiControl::TwoNumber,
            field_keys: vec!["bp_systolic".into(), "bp_diastolic".into()],
            min_value: Some(50.0),
            max_value: Some(250.0),
            unit_label: Some("mmHg".into()),
            dropdown_options: vec![],
            placeholder: "Enter blood pressure".into(),
        },
    });

    use crate::models::enums::GuideCategory as GC;
    let guides = vec![
        guide("guide_posture_ergonomics", "Posture and ergonomics guide", "posture_ergonomics.pdf", GC::Ergonomics, "Tips for computer and phone posture"),
        guide("guide_computer_phone_posture", "Computer and phone posture", "computer_phone_posture.pdf", GC::Ergonomics, "Reducing strain from device use"),
        guide("guide_neck_stretches", "Neck stretches and mobility", "neck_stretches.pdf", GC::Exercise, "Gentle exercises for neck strain"),
        guide("guide_shoulder_mobility", "Shoulder mobility exercises", "shoulder_mobility.pdf", GC::Exercise, "Gentle exercises for shoulder strain"),
        guide("guide_migraine_selfcare", "Migraine self-care guide", "migraine_selfcare.pdf", GC::Education, "Triggers and supportive steps"),
        guide("guide_sleep_hygiene", "Sleep hygiene guide", "sleep_hygiene.pdf", GC::Education, "Sleep routine tips"),
        guide("guide_hydration", "Hydration guide", "hydration.pdf", GC::Education, "Hydration and dehydration signs"),
        guide("guide_stress_management", "Stress management guide", "stress_management.pdf", GC::Education, "Coping strategies"),
        guide("guide_breathing_exercises", "Breathing exercises", "breathing_exercises.pdf", GC::Exercise, "Simple breathing techniques"),
        guide("guide_bp_monitoring", "Blood pressure monitoring", "bp_monitoring.pdf", GC::Followup, "Home BP measurement tips"),
        guide("guide_glucose_followup", "Glucose follow-up info", "glucose_followup.pdf", GC::Followup, "Follow-up steps for glucose evaluation"),
        guide("guide_return_precautions", "Return precautions", "return_precautions.pdf", GC::Safety, "When to seek urgent care"),
        guide("guide_when_urgent", "When to seek urgent care", "when_to_seek_urgent_care.pdf", GC::Safety, "Urgent warning signs"),
        guide("guide_allergy_avoidance", "Allergy trigger avoidance", "allergy_avoidance.pdf", GC::Education, "Avoiding common allergens"),
        guide("guide_gi_diet", "Diet tips for GI symptoms", "diet_gi_symptoms.pdf", GC::Education, "Supportive diet guidance"),
        guide("guide_exercise_safety", "Exercise safety", "exercise_safety.pdf", GC::Education, "Safe movement guidance"),
        guide("guide_workplace_ergonomics", "Workplace ergonomics", "workplace_ergonomics.pdf", GC::Ergonomics, "Desk setup guidance"),
        guide("guide_substance_health", "Substance use and health", "substance_health_info.pdf", GC::Education, "Non-judgmental health information"),
    ];

    let templates = vec![
        MessageTemplate {
            id: TemplateId::from("tmpl_general"),
            name: "General visit summary".into(),
            subject: "Your visit summary and next steps".into(),
            body: "Hello {patient_name},\n\nThank you for completing your visit today.\n\nSummary:\n{plan_summary}\n\nFollow-up:\n{followup_instructions}\n\nImportant:\n{return_precautions}\n\nBest regards,\n{clinic_name}".into(),
        },
        MessageTemplate {
            id: TemplateId::from("tmpl_posture_headache"),
            name: "Posture-related headache guidance".into(),
            subject: "Your visit summary and posture-related headache guidance".into(),
            body: "Hello {patient_name},\n\nYour clinician reviewed your visit and discussed that your symptoms may be related to posture and muscle strain.\n\nPlan:\n{plan_summary}\n\nAttachments:\n- Posture and ergonomics guidance\n- Exercises as appropriate\n\nFollow-up:\n{followup_instructions}\n\nImportant:\n{return_precautions}\n\n{clinic_name}".into(),
        },
        MessageTemplate {
            id: TemplateId::from("tmpl_urgent"),
            name: "Urgent follow-up".into(),
            subject: "Important follow-up from your visit".into(),
            body: "Hello {patient_name},\n\nYour care team identified findings that require prompt evaluation.\n\nNext steps:\n{plan_summary}\n\nIf symptoms worsen or urgent warning signs develop, seek care promptly.\n\n{clinic_name}".into(),
        },
    ];

    let condition_guides = vec![
        guide_map("posture_related_headache", &["guide_posture_ergonomics", "guide_neck_stretches", "guide_return_precautions"]),
        guide_map("tension_headache", &["guide_stress_management", "guide_return_precautions"]),
        guide_map("migraine_possible", &["guide_migraine_selfcare", "guide_return_precautions"]),
        guide_map("eye_strain_headache", &["guide_computer_phone_posture", "guide_return_precautions"]),
        guide_map("sleep_deprivation_headache", &["guide_sleep_hygiene", "guide_return_precautions"]),
        guide_map("hypertension_risk", &["guide_bp_monitoring", "guide_return_precautions"]),
        guide_map("hyperglycemia_risk_prediabetes_diabetes", &["guide_glucose_followup", "guide_return_precautions"]),
    ];

    KnowledgePack {
        version: PACK_VERSION.into(),
        conditions,
        danger_signs,
        symptoms,
        vital_rules,
        supports,
        labs,
        specialists,
        medication_options,
        actions,
        assistant_actions,
        assistant_ui_map,
        guides,
        templates,
        condition_guides,
    }
}
