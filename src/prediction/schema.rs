//! Feature order contracts for each category.
//!
//! The position of a field in `fields` is the column index the trained
//! classifier expects. Bump `version` whenever the order or membership changes.

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Alternate spellings accepted on input. The canonical name wins when both are sent.
    pub aliases: &'static [&'static str],
}

impl FieldSpec {
    const fn new(name: &'static str) -> Self {
        Self { name, aliases: &[] }
    }

    const fn with_aliases(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FeatureSchema {
    pub category: Category,
    pub version: u32,
    pub fields: &'static [FieldSpec],
}

impl FeatureSchema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

pub const HEART_SCHEMA: FeatureSchema = FeatureSchema {
    category: Category::Heart,
    version: 1,
    fields: &[
        FieldSpec::new("age"),
        FieldSpec::new("gender"),
        FieldSpec::new("cp"),
        FieldSpec::new("trestbps"),
        FieldSpec::new("chol"),
        FieldSpec::new("fbs"),
        FieldSpec::new("restecg"),
        FieldSpec::new("thalach"),
        FieldSpec::new("exang"),
        FieldSpec::new("oldpeak"),
        FieldSpec::new("slope"),
        FieldSpec::new("ca"),
        FieldSpec::new("thal"),
    ],
};

pub const DIABETES_SCHEMA: FeatureSchema = FeatureSchema {
    category: Category::Diabetes,
    version: 1,
    fields: &[
        FieldSpec::new("pregnancies"),
        FieldSpec::new("glucose"),
        FieldSpec::with_aliases("bloodPressure", &["blood_pressure"]),
        FieldSpec::with_aliases("skinThickness", &["skin_thickness"]),
        FieldSpec::new("insulin"),
        FieldSpec::new("bmi"),
        FieldSpec::with_aliases("diabetesPedigree", &["diabetes_pedigree"]),
        FieldSpec::new("age"),
    ],
};

pub const CANCER_SCHEMA: FeatureSchema = FeatureSchema {
    category: Category::Cancer,
    version: 1,
    fields: &[
        FieldSpec::new("radius_mean"),
        FieldSpec::new("texture_mean"),
        FieldSpec::new("perimeter_mean"),
        FieldSpec::new("area_mean"),
        FieldSpec::new("smoothness_mean"),
        FieldSpec::new("compactness_mean"),
        FieldSpec::new("concavity_mean"),
        FieldSpec::new("concave_points_mean"),
        FieldSpec::new("symmetry_mean"),
        FieldSpec::new("fractal_dimension_mean"),
        FieldSpec::new("radius_se"),
        FieldSpec::new("texture_se"),
        FieldSpec::new("perimeter_se"),
        FieldSpec::new("area_se"),
        FieldSpec::new("smoothness_se"),
        FieldSpec::new("compactness_se"),
        FieldSpec::new("concavity_se"),
        FieldSpec::new("concave_points_se"),
        FieldSpec::new("symmetry_se"),
        FieldSpec::new("fractal_dimension_se"),
        FieldSpec::new("radius_worst"),
        FieldSpec::new("texture_worst"),
    ],
};
