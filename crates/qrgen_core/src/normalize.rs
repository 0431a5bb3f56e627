use std::fmt;

/// Text the input field is pre-filled with.
pub const URL_PLACEHOLDER: &str = "https://";

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// A URL that always starts with `http://` or `https://` and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Nothing but whitespace was entered.
    Empty,
    /// The field still holds the untouched placeholder.
    Placeholder,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::Empty => write!(f, "no URL entered"),
            InvalidInput::Placeholder => write!(f, "URL field still holds the placeholder"),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Trim the raw input and make sure it carries an http(s) scheme.
///
/// Scheme detection is case-sensitive; anything else gets `https://`
/// prepended. Hosts and characters are not validated.
pub fn normalize_url(raw: &str) -> Result<NormalizedUrl, InvalidInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::Empty);
    }
    if trimmed == URL_PLACEHOLDER {
        return Err(InvalidInput::Placeholder);
    }

    if trimmed.starts_with(HTTP_PREFIX) || trimmed.starts_with(HTTPS_PREFIX) {
        Ok(NormalizedUrl(trimmed.to_owned()))
    } else {
        Ok(NormalizedUrl(format!("{HTTPS_PREFIX}{trimmed}")))
    }
}
