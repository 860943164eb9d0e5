use tracing::debug;

use crate::{
    keywords::KeywordList,
    types::{DISALLOWED_CONTENT_MESSAGE, FieldVerdict, SubmittedField, ValidationVerdict},
};

/// Scans checkable fields in order and stops at the first keyword hit anywhere in the
/// submission, so at most one field is ever marked failed.
pub fn validate(keywords: &KeywordList, fields: &[SubmittedField]) -> ValidationVerdict {
    let mut verdict = ValidationVerdict::valid(fields.len());
    if keywords.is_empty() {
        return verdict;
    }

    let hit = fields.iter().enumerate().find_map(|(index, field)| {
        if !field.kind.is_checkable() {
            return None;
        }
        let value = field.value.as_deref().filter(|value| !value.is_empty())?;
        keywords.first_match(value).map(|keyword| (index, keyword))
    });

    if let Some((index, keyword)) = hit {
        debug!(field_index = index, "submission contains disallowed keyword");
        verdict.is_valid = false;
        verdict.fields[index] = FieldVerdict {
            failed: true,
            message: Some(DISALLOWED_CONTENT_MESSAGE.to_owned()),
        };
        verdict.failed_field_index = Some(index);
        verdict.matched_keyword = Some(keyword.to_owned());
    }

    verdict
}

pub fn validate_source(raw_keywords: &str, fields: &[SubmittedField]) -> ValidationVerdict {
    validate(&KeywordList::normalize(raw_keywords), fields)
}
