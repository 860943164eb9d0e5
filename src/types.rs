use serde::{Deserialize, Serialize};

pub const DISALLOWED_CONTENT_MESSAGE: &str =
    "This field contains content that is not allowed. Please remove it.";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Website,
    PostTitle,
    PostContent,
    PostExcerpt,
    Phone,
    Name,
    Other(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Email => "email",
            FieldKind::Website => "website",
            FieldKind::PostTitle => "post_title",
            FieldKind::PostContent => "post_content",
            FieldKind::PostExcerpt => "post_excerpt",
            FieldKind::Phone => "phone",
            FieldKind::Name => "name",
            FieldKind::Other(tag) => tag,
        }
    }

    /// Free-text kinds that get scanned for disallowed keywords.
    pub fn is_checkable(&self) -> bool {
        !matches!(self, FieldKind::Other(_))
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => FieldKind::Text,
            "textarea" => FieldKind::Textarea,
            "email" => FieldKind::Email,
            "website" => FieldKind::Website,
            "post_title" => FieldKind::PostTitle,
            "post_content" => FieldKind::PostContent,
            "post_excerpt" => FieldKind::PostExcerpt,
            "phone" => FieldKind::Phone,
            "name" => FieldKind::Name,
            other => FieldKind::Other(other.to_owned()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        FieldKind::from(tag.as_str())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedField {
    pub kind: FieldKind,
    #[serde(default)]
    pub value: Option<String>,
}

impl SubmittedField {
    pub fn new(kind: impl Into<FieldKind>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: Some(value.into()),
        }
    }

    pub fn absent(kind: impl Into<FieldKind>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub failed: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub fields: Vec<FieldVerdict>,
    pub failed_field_index: Option<usize>,
    pub matched_keyword: Option<String>,
}

impl ValidationVerdict {
    pub fn valid(field_count: usize) -> Self {
        Self {
            is_valid: true,
            fields: vec![FieldVerdict::default(); field_count],
            failed_field_index: None,
            matched_keyword: None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        self.failed_field_index
            .and_then(|index| self.fields.get(index))
            .and_then(|field| field.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldKind, SubmittedField};

    #[test]
    fn field_kind_round_trips_host_tags() {
        assert_eq!(FieldKind::from("post_content"), FieldKind::PostContent);
        assert_eq!(String::from(FieldKind::Website), "website");
        assert!(FieldKind::from("textarea").is_checkable());
    }

    #[test]
    fn unknown_field_kind_is_not_checkable() {
        let kind = FieldKind::from("date");
        assert_eq!(kind, FieldKind::Other("date".to_owned()));
        assert_eq!(kind.as_str(), "date");
        assert!(!kind.is_checkable());
    }

    #[test]
    fn submitted_field_deserializes_missing_value() {
        let field: SubmittedField =
            serde_json::from_str(r#"{"kind":"email"}"#).expect("field should parse");
        assert_eq!(field.kind, FieldKind::Email);
        assert_eq!(field.value, None);
    }
}
