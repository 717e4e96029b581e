//! Identity Normalizer Tests
//!
//! Covers the normalization contract: lower-casing order, drop-all and
//! specific-scope stripping, and the empty/no-identity signal.

#[cfg(test)]
mod tests {
    use torii_envauth::{DropScope, IdentityNormalizer};

    fn normalizer(force_lowercase: bool, drop_scope: Option<DropScope>) -> IdentityNormalizer {
        IdentityNormalizer::new(force_lowercase, drop_scope)
    }

    // ========================================================================
    // TEST: Passthrough
    // ========================================================================

    #[test]
    fn test_no_options_returns_input_verbatim() {
        let n = normalizer(false, None);
        for raw in ["bob", "Bob@Example.COM", "a@b@c", "  spaced  "] {
            assert_eq!(n.normalize(Some(raw)), Some(raw.to_string()));
        }
    }

    #[test]
    fn test_empty_and_absent_are_no_identity() {
        for drop_scope in [None, Some(DropScope::Any(true)), Some(DropScope::One("x".into()))] {
            let n = normalizer(true, drop_scope);
            assert_eq!(n.normalize(None), None);
            assert_eq!(n.normalize(Some("")), None);
        }
    }

    // ========================================================================
    // TEST: Lower-casing
    // ========================================================================

    #[test]
    fn test_force_lowercase_removes_uppercase_ascii() {
        let n = normalizer(true, None);
        for raw in ["BOB", "Bob@Example.COM", "MiXeD123"] {
            let result = n.normalize(Some(raw)).unwrap();
            assert!(
                !result.bytes().any(|b| b.is_ascii_uppercase()),
                "'{}' still contains uppercase ASCII",
                result
            );
        }
    }

    // ========================================================================
    // TEST: Drop any scope
    // ========================================================================

    #[test]
    fn test_drop_any_strips_from_last_at() {
        let n = normalizer(false, Some(DropScope::Any(true)));
        assert_eq!(n.normalize(Some("bob@example.com")), Some("bob".into()));
        assert_eq!(n.normalize(Some("bob@a@b")), Some("bob@a".into()));
        assert_eq!(n.normalize(Some("no-scope")), Some("no-scope".into()));
        assert_eq!(n.normalize(Some("@lonely")), None);
    }

    // ========================================================================
    // TEST: Drop specific scopes
    // ========================================================================

    #[test]
    fn test_single_scope_matches_case_insensitively() {
        let n = normalizer(false, Some(DropScope::One("example.com".into())));
        assert_eq!(n.normalize(Some("bob@example.com")), Some("bob".into()));
        assert_eq!(n.normalize(Some("bob@EXAMPLE.com")), Some("bob".into()));
        assert_eq!(
            n.normalize(Some("bob@other.com")),
            Some("bob@other.com".into())
        );
    }

    #[test]
    fn test_scope_list_checked_in_order_first_match_stops() {
        let n = normalizer(
            false,
            Some(DropScope::Many(vec!["a.com".into(), "b.com".into()])),
        );
        assert_eq!(n.normalize(Some("bob@b.com")), Some("bob".into()));
        assert_eq!(n.normalize(Some("bob@a.com")), Some("bob".into()));
        // only one scope is ever stripped
        assert_eq!(n.normalize(Some("bob@b.com@a.com")), Some("bob@b.com".into()));
    }

    #[test]
    fn test_scope_must_follow_separator() {
        let n = normalizer(false, Some(DropScope::One("corp".into())));
        // ends with the scope but without '@' before it
        assert_eq!(n.normalize(Some("bobcorp")), Some("bobcorp".into()));
    }

    #[test]
    fn test_overlong_scope_cannot_match() {
        let n = normalizer(false, Some(DropScope::One("longer-than-subject".into())));
        assert_eq!(n.normalize(Some("bo")), Some("bo".into()));
    }

    #[test]
    fn test_match_is_suffix_only() {
        let n = normalizer(false, Some(DropScope::One("corp".into())));
        // '@corp' in the middle is not a trailing scope
        assert_eq!(
            n.normalize(Some("bob@corp.example")),
            Some("bob@corp.example".into())
        );
    }

    #[test]
    fn test_case_outside_matched_suffix_is_preserved() {
        let n = normalizer(false, Some(DropScope::One("corp".into())));
        assert_eq!(n.normalize(Some("AlIcE@CoRp")), Some("AlIcE".into()));
    }

    // ========================================================================
    // TEST: Combined options
    // ========================================================================

    #[test]
    fn test_lowercase_applies_before_scope_stripping() {
        let n = normalizer(true, Some(DropScope::One("CORP".into())));
        assert_eq!(n.normalize(Some("Alice@Corp")), Some("alice".into()));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let n = normalizer(true, Some(DropScope::One("corp".into())));
        let once = n.normalize(Some("Alice@CORP")).unwrap();
        assert_eq!(n.normalize(Some(&once)), Some(once.clone()));
    }
}
