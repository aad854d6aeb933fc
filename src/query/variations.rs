//! Alternate phrasings of a subject's name to widen recall.

use super::types::InvestigationInput;

/// Upper bound on the number of variations returned.
pub const MAX_VARIATIONS: usize = 5;

/// Generate up to [`MAX_VARIATIONS`] alternate search phrasings.
///
/// Returns nothing when the input has no full name.
#[must_use]
pub fn generate_name_variations(input: &InvestigationInput) -> Vec<String> {
    generate_name_variations_with_limit(input, MAX_VARIATIONS)
}

/// Same as [`generate_name_variations`] with a smaller cap.
///
/// `limit` is clamped to [`MAX_VARIATIONS`].
#[must_use]
pub fn generate_name_variations_with_limit(input: &InvestigationInput, limit: usize) -> Vec<String> {
    let Some(name) = input.full_name() else {
        return Vec::new();
    };

    let mut candidates = Vec::new();

    let parts: Vec<&str> = name.split_whitespace().collect();
    if let (Some(first), Some(last), true) = (parts.first(), parts.last(), parts.len() > 1) {
        candidates.push(format!("\"{first} {last}\""));
        if let Some(initial) = first.chars().next() {
            candidates.push(format!("\"{initial}. {last}\""));
        }
        if let Some(initial) = last.chars().next() {
            candidates.push(format!("\"{first} {initial}.\""));
        }
    }

    if let Some(domain) = input
        .email()
        .and_then(|email| email.rsplit_once('@'))
        .map(|(_, domain)| domain.trim())
        .filter(|domain| !domain.is_empty())
    {
        candidates.push(format!("site:{domain}"));
        candidates.push(format!("inurl:{domain}"));
    }

    if let Some(handle) = input
        .username()
        .map(|username| username.trim_start_matches('@'))
        .filter(|handle| !handle.is_empty())
    {
        candidates.push(format!("\"@{handle}\""));
        candidates.push(format!("inurl:{handle}"));
    }

    let mut variations: Vec<String> = Vec::with_capacity(MAX_VARIATIONS);
    for candidate in candidates {
        if variations.len() >= limit.min(MAX_VARIATIONS) {
            break;
        }
        if !variations.contains(&candidate) {
            variations.push(candidate);
        }
    }

    tracing::debug!(count = variations.len(), "generated name variations");
    variations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_part_name() {
        let input = InvestigationInput::new().with_full_name("John Smith");
        assert_eq!(
            generate_name_variations(&input),
            vec!["\"John Smith\"", "\"J. Smith\"", "\"John S.\""]
        );
    }

    #[test]
    fn test_middle_names_use_first_and_last() {
        let input = InvestigationInput::new().with_full_name("  Mary  Ann   Jones ");
        assert_eq!(
            generate_name_variations(&input),
            vec!["\"Mary Jones\"", "\"M. Jones\"", "\"Mary J.\""]
        );
    }

    #[test]
    fn test_capped_at_five() {
        let input = InvestigationInput::new()
            .with_full_name("John Smith")
            .with_email("john@example.com")
            .with_username("jsmith");
        assert_eq!(
            generate_name_variations(&input),
            vec![
                "\"John Smith\"",
                "\"J. Smith\"",
                "\"John S.\"",
                "site:example.com",
                "inurl:example.com",
            ]
        );
    }

    #[test]
    fn test_single_word_name() {
        let input = InvestigationInput::new()
            .with_full_name("Prince")
            .with_username("@prince");
        assert_eq!(
            generate_name_variations(&input),
            vec!["\"@prince\"", "inurl:prince"]
        );
    }

    #[test]
    fn test_no_name_no_variations() {
        let input = InvestigationInput::new().with_email("john@example.com");
        assert!(generate_name_variations(&input).is_empty());
    }

    #[test]
    fn test_duplicates_dropped() {
        let input = InvestigationInput::new()
            .with_full_name("Webmaster")
            .with_email("admin@example.com")
            .with_username("example.com");
        assert_eq!(
            generate_name_variations(&input),
            vec!["site:example.com", "inurl:example.com", "\"@example.com\""]
        );
    }

    #[test]
    fn test_unicode_initials() {
        let input = InvestigationInput::new().with_full_name("Émile Zola");
        assert_eq!(
            generate_name_variations(&input),
            vec!["\"Émile Zola\"", "\"É. Zola\"", "\"Émile Z.\""]
        );
    }

    #[test]
    fn test_custom_limit() {
        let input = InvestigationInput::new().with_full_name("John Smith");
        assert_eq!(generate_name_variations_with_limit(&input, 1), vec!["\"John Smith\""]);
        assert_eq!(generate_name_variations_with_limit(&input, 50).len(), 3);
    }
}
