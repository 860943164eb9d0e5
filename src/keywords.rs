/// Disallowed phrases, trimmed and non-empty, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordList {
    keywords: Vec<String>,
}

impl KeywordList {
    /// Splits a newline-delimited source, dropping blank lines and surrounding whitespace.
    pub fn normalize(raw: &str) -> Self {
        let keywords = raw
            .split('\n')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_owned)
            .collect();
        Self { keywords }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// First keyword contained in `value`, ignoring case. Not anchored to word boundaries.
    pub fn first_match(&self, value: &str) -> Option<&str> {
        let folded = fold_case(value);
        self.iter()
            .find(|keyword| folded.contains(fold_case(keyword).as_str()))
    }
}

// Per-character lowercasing; `str::to_lowercase` turns a word-final capital sigma into `ς`.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
