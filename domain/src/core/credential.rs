//! Bearer credential value object

/// Opaque bearer token shared by every model call.
///
/// `Debug` never prints the token; call [`Credential::expose`] only when
/// building an outgoing request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Returns `None` for empty or whitespace-only values.
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new("ghp_secret").unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_blank_token_is_none() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
    }

    #[test]
    fn test_bearer_header() {
        let credential = Credential::new(" abc \n").unwrap();
        assert_eq!(credential.bearer_header(), "Bearer abc");
    }
}
