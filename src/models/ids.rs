//! Strongly typed identifiers for knowledge-pack entities.
//!
//! The reference data is authored as string ids; wrapping each id space in
//! its own newtype keeps a symptom id from ever being used where a condition
//! id is expected. Validity against the loaded pack is checked once, at
//! `KnowledgeBase` construction time.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

id_type!(ConditionId);
id_type!(DangerSignId);
id_type!(SymptomId);
id_type!(VitalRuleId);
id_type!(LabId);
id_type!(SpecialistId);
id_type!(MedicationOptionId);
id_type!(ActionId);
id_type!(AssistantActionId);
id_type!(GuideId);
id_type!(TemplateId);
