use super::schema::{CANCER_SCHEMA, DIABETES_SCHEMA, FeatureSchema, HEART_SCHEMA};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An independent prediction domain with its own schema and classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Heart,
    Diabetes,
    Cancer,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Heart, Category::Diabetes, Category::Cancer];

    /// Human-readable name used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            Category::Heart => "heart disease",
            Category::Diabetes => "diabetes",
            Category::Cancer => "breast cancer",
        }
    }

    /// Path segment under `/predict/`.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Heart => "heart-disease",
            Category::Diabetes => "diabetes",
            Category::Cancer => "cancer",
        }
    }

    pub fn schema(self) -> &'static FeatureSchema {
        match self {
            Category::Heart => &HEART_SCHEMA,
            Category::Diabetes => &DIABETES_SCHEMA,
            Category::Cancer => &CANCER_SCHEMA,
        }
    }

    pub fn message(self, prediction: u8) -> String {
        if prediction == 1 {
            format!("High risk of {} detected.", self.label())
        } else {
            format!("Low risk of {} detected.", self.label())
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
