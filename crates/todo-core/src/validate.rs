//! Side-effect-free field checks.
//!
//! Each function looks at one field in isolation. Ordering between fields is
//! the caller's job (see [`crate::TodoPayload::validate`]).

use serde_json::Value;

use crate::error::ValidationError;
use crate::id::TodoId;
use crate::model::Status;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Hard ceiling of the secondary content check.
const DESCRIPTION_HARD_LIMIT: usize = 5000;

/// Lowercase fragments refused in descriptions.
const DESCRIPTION_BLOCKLIST: [&str; 4] = ["<script", "javascript:", "onerror=", "onload="];

/// Parses a path segment as a todo id.
///
/// The whole segment must be a decimal integer strictly greater than zero.
pub fn validate_id(raw: &str) -> Result<TodoId, ValidationError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(TodoId(id)),
        _ => Err(ValidationError::InvalidId),
    }
}

/// Trims a title and collapses interior whitespace runs to one space.
///
/// Absent and non-string values sanitize to the empty string.
pub fn sanitize_title(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(s)) => s.split_whitespace().collect::<Vec<_>>().join(" "),
        _ => String::new(),
    }
}

/// True iff `raw` is a string naming one of the known statuses.
pub fn is_valid_status(raw: Option<&Value>) -> bool {
    raw.and_then(Value::as_str).and_then(Status::parse).is_some()
}

/// The requested status, or [`Status::Incomplete`] when it is not valid.
pub fn resolve_status(raw: Option<&Value>) -> Status {
    raw.and_then(Value::as_str)
        .and_then(Status::parse)
        .unwrap_or_default()
}

/// Checks a description, distinguishing "too long" from "refused content".
///
/// The length check runs first; content is only inspected for descriptions
/// within the length bound.
pub fn check_description(raw: Option<&str>) -> Result<(), ValidationError> {
    let Some(text) = raw else {
        return Ok(());
    };
    if text.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }
    if !passes_content_check(text) {
        return Err(ValidationError::DescriptionRejected);
    }
    Ok(())
}

/// Secondary check: hard size ceiling plus a case-insensitive blocklist.
///
/// This is not an XSS defence. Clients must still escape on render.
fn passes_content_check(text: &str) -> bool {
    if text.chars().count() > DESCRIPTION_HARD_LIMIT {
        return false;
    }
    let lowered = text.to_lowercase();
    !DESCRIPTION_BLOCKLIST
        .iter()
        .any(|needle| lowered.contains(needle))
}

/// Boolean form of [`check_description`].
pub fn is_description_acceptable(raw: Option<&str>) -> bool {
    check_description(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn validate_id_accepts_positive_integers() {
        assert_eq!(validate_id("1"), Ok(TodoId(1)));
        assert_eq!(validate_id("42"), Ok(TodoId(42)));
        assert_eq!(validate_id("+7"), Ok(TodoId(7)));
    }

    #[test]
    fn validate_id_rejects_garbage() {
        for raw in ["abc", "0", "-1", "", " 3", "3 ", "1.5", "12abc", "99999999999999999999"] {
            assert_eq!(validate_id(raw), Err(ValidationError::InvalidId), "{raw:?}");
        }
    }

    #[test]
    fn sanitize_title_collapses_whitespace() {
        assert_eq!(sanitize_title(Some(&json!("  Buy   milk  "))), "Buy milk");
        assert_eq!(sanitize_title(Some(&json!("a\t\nb"))), "a b");
        assert_eq!(sanitize_title(Some(&json!("   "))), "");
        assert_eq!(sanitize_title(Some(&json!(1))), "");
        assert_eq!(sanitize_title(None), "");
    }

    #[test]
    fn status_checks() {
        assert!(is_valid_status(Some(&json!("in-progress"))));
        assert!(!is_valid_status(Some(&json!("in_progress"))));
        assert!(!is_valid_status(Some(&json!(null))));
        assert!(!is_valid_status(None));
        assert_eq!(resolve_status(Some(&json!("complete"))), Status::Complete);
        assert_eq!(resolve_status(Some(&json!("bogus"))), Status::Incomplete);
        assert_eq!(resolve_status(None), Status::Incomplete);
    }

    #[test]
    fn description_boundaries() {
        assert!(is_description_acceptable(None));
        assert!(is_description_acceptable(Some("")));
        assert!(is_description_acceptable(Some(&"a".repeat(MAX_DESCRIPTION_LEN))));
        assert_eq!(
            check_description(Some(&"a".repeat(MAX_DESCRIPTION_LEN + 1))),
            Err(ValidationError::DescriptionTooLong)
        );
        // Multi-byte characters count once each.
        assert!(is_description_acceptable(Some(&"é".repeat(MAX_DESCRIPTION_LEN))));
    }

    #[test]
    fn description_blocklist_is_case_insensitive() {
        for text in [
            "<SCRIPT>x</SCRIPT>",
            "click javascript:void(0)",
            "<img onerror=alert(1)>",
            "<body ONLOAD=go()>",
        ] {
            assert_eq!(
                check_description(Some(text)),
                Err(ValidationError::DescriptionRejected),
                "{text:?}"
            );
        }
        assert!(is_description_acceptable(Some("a script about java")));
        assert!(!passes_content_check(&"a".repeat(DESCRIPTION_HARD_LIMIT + 1)));
    }

    #[test]
    fn length_is_checked_before_blocklist() {
        let text = "<script>".repeat(200);
        assert!(!passes_content_check(&text));
        assert_eq!(
            check_description(Some(&text)),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    proptest! {
        #[test]
        fn non_positive_ids_are_invalid(n in i64::MIN..=0i64) {
            prop_assert_eq!(validate_id(&n.to_string()), Err(ValidationError::InvalidId));
        }

        #[test]
        fn positive_ids_round_trip(n in 1i64..=i64::MAX) {
            prop_assert_eq!(validate_id(&n.to_string()), Ok(TodoId(n)));
        }

        #[test]
        fn non_numeric_ids_are_invalid(raw in "[a-zA-Z_ ]{1,12}") {
            prop_assert_eq!(validate_id(&raw), Err(ValidationError::InvalidId));
        }

        #[test]
        fn whitespace_only_titles_sanitize_to_empty(raw in "[ \t\r\n]{0,40}") {
            prop_assert_eq!(sanitize_title(Some(&Value::String(raw))), "");
        }

        #[test]
        fn sanitized_titles_have_no_runs(raw in "[a-c \t]{0,40}") {
            let clean = sanitize_title(Some(&Value::String(raw)));
            prop_assert!(!clean.contains("  "));
            prop_assert!(!clean.contains('\t'));
            prop_assert_eq!(clean.trim(), clean.as_str());
        }

        #[test]
        fn oversized_descriptions_are_too_long(extra in 1usize..200, c in "[a-z<>:=]") {
            let text = c.repeat(MAX_DESCRIPTION_LEN + extra);
            prop_assert_eq!(check_description(Some(&text)), Err(ValidationError::DescriptionTooLong));
        }

        #[test]
        fn oversized_blocked_descriptions_are_too_long(
            needle in prop::sample::select(vec!["<script", "JavaScript:", "onerror=", "ONLOAD="]),
            pad in 0usize..50,
        ) {
            let text = format!("{}{}", "x".repeat(MAX_DESCRIPTION_LEN + pad), needle);
            prop_assert!(!passes_content_check(&text));
            prop_assert_eq!(check_description(Some(&text)), Err(ValidationError::DescriptionTooLong));
        }
    }
}
