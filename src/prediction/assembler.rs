use super::{Category, PredictionRequest, schema::FieldSpec};
use crate::{Error, Result};
use serde_json::{Map, Value};

/// Orders the request's fields into the category's feature vector.
///
/// Values are passed through untouched; the classifiers were fitted on the raw scale.
pub fn assemble(request: &PredictionRequest) -> Result<Vec<f64>> {
    let schema = request.category.schema();
    schema
        .fields
        .iter()
        .map(|field| read_field(request.category, &request.fields, field))
        .collect()
}

fn read_field(category: Category, fields: &Map<String, Value>, spec: &FieldSpec) -> Result<f64> {
    let value = std::iter::once(spec.name)
        .chain(spec.aliases.iter().copied())
        .find_map(|name| fields.get(name))
        .ok_or_else(|| Error::validation(category, spec.name, "is missing"))?;

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| Error::validation(category, spec.name, format!("is not a number: {}", value)))?;

    if !number.is_finite() {
        return Err(Error::validation(category, spec.name, "must be finite"));
    }

    Ok(number)
}
