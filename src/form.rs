//! Host-side form objects and the submission hook that applies a keyword verdict to them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    keywords::KeywordList,
    source::KeywordSource,
    types::{FieldKind, SubmittedField, ValidationVerdict},
    validator,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub failed_validation: bool,
    #[serde(default)]
    pub validation_message: Option<String>,
}

impl FormField {
    pub fn new(id: u32, kind: impl Into<FieldKind>, label: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            label: label.into(),
            failed_validation: false,
            validation_message: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub form: Form,
}

impl ValidationResult {
    pub fn new(form: Form) -> Self {
        Self {
            is_valid: true,
            form,
        }
    }
}

/// Posted form parameters, keyed the way the host names them (`input_<fieldId>`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionData {
    params: HashMap<String, String>,
}

impl SubmissionData {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    pub fn value_for(&self, field_id: u32) -> Option<&str> {
        self.params
            .get(&format!("input_{field_id}"))
            .map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmissionData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

pub fn submitted_fields(form: &Form, data: &SubmissionData) -> Vec<SubmittedField> {
    form.fields
        .iter()
        .map(|field| SubmittedField {
            kind: field.kind.clone(),
            value: data.value_for(field.id).map(str::to_owned),
        })
        .collect()
}

/// Marks the failed field on the host's form. An already-invalid result stays invalid.
pub fn apply_verdict(result: &mut ValidationResult, verdict: &ValidationVerdict) {
    for (field, field_verdict) in result.form.fields.iter_mut().zip(&verdict.fields) {
        if field_verdict.failed {
            field.failed_validation = true;
            field.validation_message = field_verdict.message.clone();
        }
    }
    if !verdict.is_valid {
        result.is_valid = false;
    }
}

pub async fn validate_form_submission(
    mut result: ValidationResult,
    data: &SubmissionData,
    source: &dyn KeywordSource,
) -> anyhow::Result<ValidationResult> {
    let Some(raw) = source.raw_keywords().await? else {
        debug!(form_id = result.form.id, "no disallowed keywords configured");
        return Ok(result);
    };

    let keywords = KeywordList::normalize(&raw);
    if keywords.is_empty() {
        debug!(form_id = result.form.id, "disallowed keyword list is blank");
        return Ok(result);
    }

    let fields = submitted_fields(&result.form, data);
    let verdict = validator::validate(&keywords, &fields);
    if let Some(index) = verdict.failed_field_index {
        info!(
            form_id = result.form.id,
            field_id = result.form.fields[index].id,
            "rejected form submission with disallowed content"
        );
    }
    apply_verdict(&mut result, &verdict);

    Ok(result)
}
