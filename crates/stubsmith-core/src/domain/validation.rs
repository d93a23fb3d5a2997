//! Name validation for generated identifiers and directory segments.
//!
//! Everything here is pure: no state, no I/O. Every generator runs its
//! inputs through [`NameValidator`] before touching the filesystem.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::{DomainError, IdentifierRejection, SegmentRejection};

/// Maximum identifier length, counted in characters.
pub const MAX_IDENTIFIER_LENGTH: usize = 100;

/// Role used for directory segments when the caller does not name one.
pub const DEFAULT_SEGMENT_ROLE: &str = "directory";

/// Words that may not appear as a whole namespace segment.
///
/// Matching is case-insensitive and segment-exact: `Class` is rejected,
/// `Classical` and `UserClass` are not. `enum` is not on this list.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "callable",
    "case",
    "catch",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "die",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "eval",
    "exit",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "insteadof",
    "interface",
    "isset",
    "list",
    "match",
    "namespace",
    "new",
    "or",
    "print",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "require_once",
    "return",
    "static",
    "switch",
    "throw",
    "trait",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
];

/// Substrings that may never appear in a directory segment.
const FORBIDDEN_SEGMENT_SEQUENCES: &[&str] =
    &["..", "/", "\\", ":", "*", "?", "\"", "<", ">", "|"];

static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_][\p{L}\p{N}_\\]*$").expect("identifier pattern is a valid regex")
});

/// Stateless validator for user-supplied names.
pub struct NameValidator;

impl NameValidator {
    /// Validate a class-like identifier.
    ///
    /// Checks run in order and the first failure wins: empty (after trim),
    /// too long, bad characters, reserved segment. On success the name is
    /// returned exactly as given.
    pub fn validate_identifier<'a>(name: &'a str, role: &str) -> Result<&'a str, DomainError> {
        let reject = |rejection| DomainError::InvalidIdentifier {
            name: name.to_owned(),
            role: role.to_owned(),
            rejection,
        };

        if name.trim().is_empty() {
            return Err(reject(IdentifierRejection::Empty));
        }

        let length = name.chars().count();
        if length > MAX_IDENTIFIER_LENGTH {
            return Err(reject(IdentifierRejection::TooLong {
                length,
                max: MAX_IDENTIFIER_LENGTH,
            }));
        }

        if !IDENTIFIER_PATTERN.is_match(name) {
            return Err(reject(IdentifierRejection::InvalidCharacters));
        }

        if let Some(keyword) = name.split('\\').find_map(reserved_keyword) {
            return Err(reject(IdentifierRejection::ReservedKeyword {
                keyword: keyword.to_owned(),
                role: role.to_owned(),
            }));
        }

        Ok(name)
    }

    /// Validate a name that will become a single directory.
    ///
    /// Despite the name, nothing is ever cleaned and returned: if stripping
    /// forbidden sequences and trimming whitespace/dots changes the input at
    /// all, the input is rejected. The mutation check runs before the
    /// emptiness check, so `".."` reports forbidden characters.
    pub fn sanitize_directory_segment<'a>(
        name: &'a str,
        role: &str,
    ) -> Result<&'a str, DomainError> {
        let reject = |rejection| DomainError::InvalidDirectorySegment {
            name: name.to_owned(),
            role: role.to_owned(),
            rejection,
        };

        let stripped = FORBIDDEN_SEGMENT_SEQUENCES
            .iter()
            .fold(name.to_owned(), |acc, seq| acc.replace(*seq, ""));
        let candidate = stripped.trim_matches(|c: char| c.is_whitespace() || c == '.');

        if candidate != name {
            return Err(reject(SegmentRejection::ForbiddenCharacters));
        }

        if candidate.is_empty() {
            return Err(reject(SegmentRejection::EmptyAfterSanitization));
        }

        Ok(name)
    }
}

fn reserved_keyword(segment: &str) -> Option<&'static str> {
    let lowered = segment.to_lowercase();
    RESERVED_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| *keyword == lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier_rejection(name: &str) -> IdentifierRejection {
        match NameValidator::validate_identifier(name, "class") {
            Err(DomainError::InvalidIdentifier { rejection, .. }) => rejection,
            other => panic!("expected identifier rejection for {name:?}, got {other:?}"),
        }
    }

    fn segment_rejection(name: &str) -> SegmentRejection {
        match NameValidator::sanitize_directory_segment(name, DEFAULT_SEGMENT_ROLE) {
            Err(DomainError::InvalidDirectorySegment { rejection, .. }) => rejection,
            other => panic!("expected segment rejection for {name:?}, got {other:?}"),
        }
    }

    // ---------------------------------------------------------------------
    // validate_identifier
    // ---------------------------------------------------------------------

    #[test]
    fn accepts_plain_and_namespaced_names() {
        for name in ["CreateOrder", "_Internal", "Billing\\Invoice", "A", "Order2"] {
            assert_eq!(NameValidator::validate_identifier(name, "class"), Ok(name));
        }
    }

    #[test]
    fn returns_name_unchanged() {
        let name = "createORDER";
        let validated = NameValidator::validate_identifier(name, "class").unwrap();
        assert_eq!(validated, name);
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(identifier_rejection(""), IdentifierRejection::Empty);
        assert_eq!(identifier_rejection("   \t"), IdentifierRejection::Empty);
    }

    #[test]
    fn surrounding_whitespace_is_not_trimmed() {
        assert_eq!(
            identifier_rejection(" Order"),
            IdentifierRejection::InvalidCharacters
        );
    }

    #[test]
    fn length_boundary_is_one_hundred_characters() {
        let ok = "A".repeat(100);
        assert!(NameValidator::validate_identifier(&ok, "class").is_ok());

        let too_long = "A".repeat(101);
        assert_eq!(
            identifier_rejection(&too_long),
            IdentifierRejection::TooLong {
                length: 101,
                max: 100
            }
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let ok = "Ü".repeat(100);
        assert!(NameValidator::validate_identifier(&ok, "class").is_ok());

        let too_long = "Ü".repeat(101);
        assert!(matches!(
            identifier_rejection(&too_long),
            IdentifierRejection::TooLong { length: 101, .. }
        ));
    }

    #[test]
    fn length_is_checked_before_characters() {
        let name = format!("1{}", "A".repeat(100));
        assert!(matches!(
            identifier_rejection(&name),
            IdentifierRejection::TooLong { .. }
        ));
    }

    #[test]
    fn unicode_letters_are_accepted() {
        for name in ["Übung", "Café", "München"] {
            assert!(
                NameValidator::validate_identifier(name, "class").is_ok(),
                "rejected {name}"
            );
        }
    }

    #[test]
    fn rejects_bad_characters() {
        for name in ["1Order", "Order-Item", "Order Item", "\\Order", "Order/Item", "Order.php"] {
            assert_eq!(
                identifier_rejection(name),
                IdentifierRejection::InvalidCharacters,
                "for {name}"
            );
        }
    }

    #[test]
    fn reserved_words_are_rejected_in_any_case() {
        for keyword in RESERVED_KEYWORDS {
            let upper = keyword.to_uppercase();
            let mut title = keyword.to_string();
            title[..1].make_ascii_uppercase();

            for candidate in [keyword.to_string(), upper, title] {
                assert!(
                    matches!(
                        identifier_rejection(&candidate),
                        IdentifierRejection::ReservedKeyword { .. }
                    ),
                    "accepted {candidate}"
                );
            }
        }
    }

    #[test]
    fn reserved_rejection_ignores_role() {
        for role in ["class", "operation", "controller"] {
            let err = NameValidator::validate_identifier("Class", role).unwrap_err();
            assert!(err.to_string().contains(&format!("cannot be used as a {role} name")));
        }
    }

    #[test]
    fn reserved_match_is_segment_exact() {
        for name in ["Classical", "UserClass", "Enum", "Newsletter", "Listing"] {
            assert!(
                NameValidator::validate_identifier(name, "class").is_ok(),
                "rejected {name}"
            );
        }
        for name in ["class", "Class", "Foo\\Class\\Bar", "Billing\\New"] {
            assert!(matches!(
                identifier_rejection(name),
                IdentifierRejection::ReservedKeyword { .. }
            ));
        }
    }

    #[test]
    fn reserved_rejection_reports_keyword() {
        assert_eq!(
            identifier_rejection("Foo\\Class\\Bar"),
            IdentifierRejection::ReservedKeyword {
                keyword: "class".into(),
                role: "class".into(),
            }
        );
    }

    // ---------------------------------------------------------------------
    // sanitize_directory_segment
    // ---------------------------------------------------------------------

    #[test]
    fn plain_segments_round_trip() {
        for name in ["Checkout", "test_service", "Api2", "v1", "_"] {
            assert_eq!(
                NameValidator::sanitize_directory_segment(name, "service"),
                Ok(name)
            );
        }
    }

    #[test]
    fn any_forbidden_sequence_is_rejected() {
        for name in [
            "../etc", "a/b", "a\\b", "C:", "wild*", "what?", "say\"", "<tag", "tag>", "a|b",
            "Check..out",
        ] {
            assert_eq!(
                segment_rejection(name),
                SegmentRejection::ForbiddenCharacters,
                "for {name}"
            );
        }
    }

    #[test]
    fn leading_or_trailing_dots_and_spaces_are_rejected() {
        for name in [".hidden", "trailing.", " padded", "padded ", "\tTabbed"] {
            assert_eq!(
                segment_rejection(name),
                SegmentRejection::ForbiddenCharacters,
                "for {name:?}"
            );
        }
    }

    #[test]
    fn dots_only_report_forbidden_before_empty() {
        assert_eq!(segment_rejection(".."), SegmentRejection::ForbiddenCharacters);
        assert_eq!(segment_rejection("..."), SegmentRejection::ForbiddenCharacters);
        assert_eq!(segment_rejection("   "), SegmentRejection::ForbiddenCharacters);
    }

    #[test]
    fn empty_input_is_empty_after_sanitization() {
        assert_eq!(segment_rejection(""), SegmentRejection::EmptyAfterSanitization);
    }

    #[test]
    fn inner_dots_and_spaces_survive() {
        assert_eq!(
            NameValidator::sanitize_directory_segment("v1.2", "module"),
            Ok("v1.2")
        );
        assert_eq!(
            NameValidator::sanitize_directory_segment("My Module", "module"),
            Ok("My Module")
        );
    }
}
