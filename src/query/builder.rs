//! Query assembly from investigator input.

use super::engines::SearchEngine;
use super::error::QueryResult;
use super::presets::PresetTemplate;
use super::tokenize::{and_clause, or_clause, quote_if_needed, tokenize_list};
use super::types::{InvestigationInput, present};

/// Operator fields and the prefix each one is rendered with.
const OPERATOR_FIELDS: [(&str, fn(&InvestigationInput) -> Option<&String>); 5] = [
    ("site:", |input| input.sites.as_ref()),
    ("filetype:", |input| input.filetypes.as_ref()),
    ("inurl:", |input| input.inurl.as_ref()),
    ("intitle:", |input| input.intitle.as_ref()),
    ("intext:", |input| input.intext.as_ref()),
];

/// Build a query for an engine given by identifier.
///
/// # Errors
/// Returns [`QueryError::UnknownEngine`](super::QueryError::UnknownEngine) when
/// `engine_id` is not a registered engine.
pub fn build_query(
    input: &InvestigationInput,
    preset: Option<PresetTemplate>,
    use_and_logic: bool,
    engine_id: &str,
) -> QueryResult<String> {
    let engine = engine_id.parse::<SearchEngine>()?;
    Ok(build_query_for(input, preset, use_and_logic, engine))
}

/// Build a query for an already resolved engine.
///
/// Terms are joined with ` AND ` when `use_and_logic` is set, otherwise with a
/// single space. Identical arguments always give identical output.
#[must_use]
pub fn build_query_for(
    input: &InvestigationInput,
    preset: Option<PresetTemplate>,
    use_and_logic: bool,
    engine: SearchEngine,
) -> String {
    let terms = build_terms(input, preset, engine);
    if use_and_logic {
        and_clause(&terms)
    } else {
        terms.join(" ")
    }
}

/// Ordered, non-empty terms of a query, before joining.
#[must_use]
pub fn build_terms(
    input: &InvestigationInput,
    preset: Option<PresetTemplate>,
    engine: SearchEngine,
) -> Vec<String> {
    let mut terms = Vec::new();

    push_identity_terms(&mut terms, input);
    push_context_terms(&mut terms, input);
    push_keyword_terms(&mut terms, input);
    push_operator_terms(&mut terms, input);

    if engine.supports_temporal() {
        if let Some(after) = present(input.after.as_ref()) {
            terms.push(format!("after:{after}"));
        }
        if let Some(before) = present(input.before.as_ref()) {
            terms.push(format!("before:{before}"));
        }
    }

    if let Some(preset) = preset {
        terms.extend(preset.clauses(input, engine));
    }

    terms.retain(|term| !term.is_empty());
    terms
}

fn push_identity_terms(terms: &mut Vec<String>, input: &InvestigationInput) {
    if let Some(name) = input.full_name() {
        terms.push(quote_if_needed(name));
    }

    if let Some(username) = input.username() {
        terms.push(quote_if_needed(username));
        if !username.starts_with('@') {
            terms.push(quote_if_needed(&format!("@{username}")));
        }
    }

    // An address is already an exact token for every engine; only stray
    // whitespace forces quotes.
    if let Some(email) = input.email() {
        if email.chars().any(char::is_whitespace) {
            terms.push(quote_if_needed(email));
        } else {
            terms.push(email.to_string());
        }
    }

    if let Some(phone) = present(input.phone.as_ref()) {
        terms.push(quote_if_needed(phone));
    }
}

fn push_context_terms(terms: &mut Vec<String>, input: &InvestigationInput) {
    if let Some(location) = present(input.location.as_ref()) {
        terms.push(quote_if_needed(location));
        let mut parts: Vec<String> = Vec::new();
        for part in location.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let quoted = quote_if_needed(part);
            if !parts.contains(&quoted) {
                parts.push(quoted);
            }
        }
        terms.extend(parts);
    }

    if let Some(company) = present(input.company.as_ref()) {
        terms.push(quote_if_needed(company));
    }
    if let Some(school) = present(input.school.as_ref()) {
        terms.push(quote_if_needed(school));
    }
}

fn push_keyword_terms(terms: &mut Vec<String>, input: &InvestigationInput) {
    if let Some(include) = present(input.include.as_ref()) {
        terms.extend(tokenize_list(include).iter().map(|k| quote_if_needed(k)));
    }
    if let Some(exclude) = present(input.exclude.as_ref()) {
        terms.extend(
            tokenize_list(exclude)
                .iter()
                .map(|k| format!("-{}", quote_if_needed(k))),
        );
    }
}

fn push_operator_terms(terms: &mut Vec<String>, input: &InvestigationInput) {
    for (prefix, field) in OPERATOR_FIELDS {
        let Some(raw) = present(field(input)) else {
            continue;
        };
        // Operator values go in verbatim; callers quote phrases themselves.
        let tokens = tokenize_list(raw);
        if !tokens.is_empty() {
            terms.push(or_clause(prefix, &tokens));
        }
    }
}
