use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $s)]
                $variant
            ),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = TriageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(TriageError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(UrgencyStatus {
    Urgent => "urgent",
    NonUrgent => "non_urgent",
});

str_enum!(UrgencyTier {
    ErNow => "ER_now",
    SameDayUrgentEval => "same_day_urgent_eval",
});

str_enum!(ConditionSeverity {
    Common => "common",
    SeriousBucket => "serious_bucket",
});

str_enum!(
    /// Confidence label derived from the canonical 0-1 probability.
    /// Cutoffs live in one place (`Confidence::for_probability`); presentation
    /// layers convert to percentages themselves and never re-derive confidence.
    Confidence {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
);

impl Confidence {
    pub fn for_probability(probability: f64) -> Self {
        if probability > 0.5 {
            Self::High
        } else if probability > 0.25 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

str_enum!(SymptomCategory {
    Systemic => "systemic",
    Respiratory => "respiratory",
    Allergy => "allergy",
    Neuro => "neuro",
    Gi => "gi",
    Gu => "gu",
    Skin => "skin",
    Metabolic => "metabolic",
    Lifestyle => "lifestyle",
    Sleep => "sleep",
    Cardio => "cardio",
    Psych => "psych",
    Msk => "msk",
    Other => "other",
});

str_enum!(
    /// The vital-sign field a threshold rule targets.
    VitalField {
        TemperatureC => "temperature_c",
        BpSystolic => "bp_systolic",
        BpDiastolic => "bp_diastolic",
        HeartRate => "heart_rate",
        Spo2 => "spo2",
        RespiratoryRate => "respiratory_rate",
    }
);

str_enum!(VitalComparison {
    Lt => "<",
    Le => "<=",
    Ge => ">=",
    Gt => ">",
});

impl VitalComparison {
    pub fn compare(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Lt => value < threshold,
            Self::Le => value <= threshold,
            Self::Ge => value >= threshold,
            Self::Gt => value > threshold,
        }
    }
}

str_enum!(MedicationClass {
    Otc => "OTC",
    Supportive => "supportive",
    ClinicianDiscussion => "clinician_discussion",
});

str_enum!(ActionCategory {
    Supportive => "supportive",
    Lifestyle => "lifestyle",
    Exercise => "exercise",
    Safety => "safety",
    FollowUp => "follow_up",
});

str_enum!(AssistantActionCategory {
    DataCollection => "data_collection",
    Clarification => "clarification",
    FollowUp => "follow_up",
});

str_enum!(UiControl {
    Number => "number",
    TwoNumber => "two_number",
    Dropdown => "dropdown",
    Textarea => "textarea",
    YesNo => "yes_no",
});

str_enum!(GuideCategory {
    Ergonomics => "ergonomics",
    Exercise => "exercise",
    Education => "education",
    Followup => "followup",
    Safety => "safety",
});

str_enum!(SuggestionPriority {
    High => "high",
    Medium => "medium",
    Low => "low",
});

str_enum!(FunctionalImpact {
    None => "none",
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn confidence_cutoffs() {
        assert_eq!(Confidence::for_probability(0.51), Confidence::High);
        assert_eq!(Confidence::for_probability(0.5), Confidence::Medium);
        assert_eq!(Confidence::for_probability(0.26), Confidence::Medium);
        assert_eq!(Confidence::for_probability(0.25), Confidence::Low);
        assert_eq!(Confidence::for_probability(0.0), Confidence::Low);
    }

    #[test]
    fn vital_comparison_operators() {
        assert!(VitalComparison::Lt.compare(91.0, 92.0));
        assert!(!VitalComparison::Lt.compare(92.0, 92.0));
        assert!(VitalComparison::Le.compare(94.0, 94.0));
        assert!(VitalComparison::Ge.compare(160.0, 160.0));
        assert!(!VitalComparison::Gt.compare(160.0, 160.0));
    }

    #[test]
    fn str_enum_round_trip() {
        assert_eq!(UrgencyStatus::NonUrgent.as_str(), "non_urgent");
        assert_eq!(
            UrgencyStatus::from_str("urgent").unwrap(),
            UrgencyStatus::Urgent
        );
        assert_eq!(UrgencyTier::ErNow.as_str(), "ER_now");
        assert!(UrgencyStatus::from_str("bogus").is_err());
    }
}
