//! Tokenizing and clause helpers shared by the builder and the preset table.

/// Separators accepted between list items in free-text fields.
const LIST_SEPARATORS: [char; 2] = [',', '\n'];

/// Split a comma or newline separated list into trimmed, non-empty tokens.
///
/// Order is preserved. Re-joining the output with `,` and tokenizing again
/// yields the same tokens.
#[must_use]
pub fn tokenize_list(text: &str) -> Vec<String> {
    text.split(LIST_SEPARATORS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Wrap a token in double quotes when it holds whitespace or an `@`.
///
/// Tokens that are already fully quoted are returned as-is, so applying this
/// twice gives the same result as applying it once.
#[must_use]
pub fn quote_if_needed(token: &str) -> String {
    let trimmed = token.trim();
    if is_quoted(trimmed) {
        return trimmed.to_string();
    }
    if trimmed.chars().any(|c| c.is_whitespace() || c == '@') {
        return format!("\"{trimmed}\"");
    }
    trimmed.to_string()
}

fn is_quoted(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

/// Build `prefix+token` alternatives joined by ` OR `.
///
/// More than one token gets parentheses; an empty list gives an empty string.
#[must_use]
pub fn or_clause<S: AsRef<str>>(prefix: &str, tokens: &[S]) -> String {
    let content = tokens
        .iter()
        .map(|token| format!("{prefix}{}", token.as_ref()))
        .collect::<Vec<_>>()
        .join(" OR ");

    if tokens.len() > 1 {
        format!("({content})")
    } else {
        content
    }
}

/// Join the non-empty terms with ` AND `.
#[must_use]
pub fn and_clause<S: AsRef<str>>(terms: &[S]) -> String {
    terms
        .iter()
        .map(AsRef::as_ref)
        .filter(|term| !term.is_empty())
        .collect::<Vec<_>>()
        .join(" AND ")
}
