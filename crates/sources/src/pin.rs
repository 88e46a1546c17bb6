use std::fmt;

/// Opaque pinned-revision token threaded through to the sync engine.
///
/// The engine reports pins in one of two literal forms: a bare changelist
/// number for classic depot sources, or `<pattern>@<contentHash>` for
/// repository-graph sources. Nothing here parses or validates either form;
/// the token travels verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinToken(String);

impl PinToken {
    /// Wraps a raw pin literal.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw pin literal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PinToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for PinToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::PinToken;

    #[test]
    fn changelist_form_passes_through() {
        let pin = PinToken::new("10306");
        assert_eq!(pin.as_str(), "10306");
        assert_eq!(pin.to_string(), "10306");
    }

    #[test]
    fn content_hash_form_passes_through() {
        let raw = "//graph/scm-api-plugin.git@5631932f5cdf6c3b829911b6fe5ab42d436d74da";
        let pin = PinToken::from(raw);
        assert_eq!(pin.as_str(), raw);
    }
}
