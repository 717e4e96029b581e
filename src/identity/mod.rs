//! Identity canonicalization
//!
//! Turns the raw value of a trusted environment variable into the
//! canonical identity string used for user lookup.

use serde::{Deserialize, Serialize};

/// Scope-stripping setting.
///
/// Mirrors the three shapes accepted in configuration:
///
/// ```yaml
/// drop_scope: true                  # strip any scope
/// drop_scope: "example.com"         # strip one specific scope
/// drop_scope: [a.com, b.com]        # first matching scope wins
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropScope {
    /// `true` strips any trailing scope; `false` disables stripping.
    Any(bool),
    /// Strip exactly this scope when it matches.
    One(String),
    /// Ordered candidate scopes; only the first match is stripped.
    Many(Vec<String>),
}

/// Canonicalizes raw identities.
///
/// Normalization is a pure string transformation: optional ASCII
/// lower-casing followed by optional scope stripping. Lower-casing always
/// runs first, so configured scopes are still matched case-insensitively.
///
/// # Example
///
/// ```
/// use torii_envauth::identity::{DropScope, IdentityNormalizer};
///
/// let normalizer = IdentityNormalizer::new(true, Some(DropScope::One("corp".into())));
/// assert_eq!(normalizer.normalize(Some("Alice@CORP")), Some("alice".into()));
/// ```
#[derive(Debug, Clone)]
pub struct IdentityNormalizer {
    force_lowercase: bool,
    drop_scope: Option<DropScope>,
}

impl IdentityNormalizer {
    /// Create a normalizer from explicit settings
    pub fn new(force_lowercase: bool, drop_scope: Option<DropScope>) -> Self {
        Self {
            force_lowercase,
            drop_scope,
        }
    }

    /// Normalize a raw identity value.
    ///
    /// An absent value is treated as empty. Returns `None` when the
    /// result is empty, meaning no usable identity.
    pub fn normalize(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw.unwrap_or("");
        if raw.is_empty() {
            return None;
        }

        let mut subject = if self.force_lowercase {
            raw.to_ascii_lowercase()
        } else {
            raw.to_string()
        };

        match &self.drop_scope {
            Some(DropScope::Any(true)) => {
                if let Some(at) = subject.rfind('@') {
                    subject.truncate(at);
                }
            }
            Some(DropScope::One(scope)) => {
                Self::strip_matching_scope(&mut subject, std::slice::from_ref(scope));
            }
            Some(DropScope::Many(scopes)) => {
                Self::strip_matching_scope(&mut subject, scopes);
            }
            Some(DropScope::Any(false)) | None => {}
        }

        if subject.is_empty() {
            None
        } else {
            Some(subject)
        }
    }

    /// Strip the first candidate scope that matches `@<scope>` at the end
    /// of the subject, comparing ASCII case-insensitively.
    ///
    /// Only the trailing occurrence is removed, and only one scope is
    /// ever stripped. The length guard runs before the suffix test, so a
    /// scope longer than the subject can never match.
    fn strip_matching_scope(subject: &mut String, scopes: &[String]) {
        let len = subject.len();
        for scope in scopes {
            let suffix_len = scope.len() + 1;
            if len < suffix_len {
                continue;
            }
            let at = len - suffix_len;
            let tail = &subject.as_bytes()[at..];
            // tail[0] == b'@' guarantees `at` is a char boundary
            if tail[0] == b'@' && tail[1..].eq_ignore_ascii_case(scope.as_bytes()) {
                subject.truncate(at);
                break;
            }
        }
    }
}
