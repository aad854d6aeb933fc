//! Core value types for query building.

use serde::{Deserialize, Serialize};

use super::engines::SearchEngine;
use super::presets::PresetTemplate;
use super::risk::RiskLevel;

/// Structured investigator input.
///
/// Every field is optional. Empty or whitespace-only values count as absent.
/// List fields (`include`, `exclude`, `sites`, ...) hold comma or newline
/// separated items.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestigationInput {
    /// Full name of the subject.
    pub full_name: Option<String>,
    /// Online handle.
    pub username: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Location, optionally comma separated (e.g. "Austin, TX").
    pub location: Option<String>,
    /// Employer.
    pub company: Option<String>,
    /// School or university.
    pub school: Option<String>,
    /// Keywords that must appear.
    pub include: Option<String>,
    /// Keywords to exclude.
    pub exclude: Option<String>,
    /// Sites to restrict to.
    pub sites: Option<String>,
    /// File types to restrict to.
    pub filetypes: Option<String>,
    /// Fragments required in the URL.
    pub inurl: Option<String>,
    /// Fragments required in the title.
    pub intitle: Option<String>,
    /// Fragments required in the body text.
    pub intext: Option<String>,
    /// Lower date bound (ISO date), Google and Bing only.
    pub after: Option<String>,
    /// Upper date bound (ISO date), Google and Bing only.
    pub before: Option<String>,
}

/// Trimmed value of an optional field, `None` when blank.
pub(crate) fn present(field: Option<&String>) -> Option<&str> {
    field.map(|value| value.trim()).filter(|value| !value.is_empty())
}

impl InvestigationInput {
    /// Create an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full name.
    #[must_use]
    pub fn with_full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    /// Set the username.
    #[must_use]
    pub fn with_username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }

    /// Set the email address.
    #[must_use]
    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Set the phone number.
    #[must_use]
    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// Set the location.
    #[must_use]
    pub fn with_location(mut self, value: impl Into<String>) -> Self {
        self.location = Some(value.into());
        self
    }

    /// Set the company.
    #[must_use]
    pub fn with_company(mut self, value: impl Into<String>) -> Self {
        self.company = Some(value.into());
        self
    }

    /// Set the school.
    #[must_use]
    pub fn with_school(mut self, value: impl Into<String>) -> Self {
        self.school = Some(value.into());
        self
    }

    /// Set the include keyword list.
    #[must_use]
    pub fn with_include(mut self, value: impl Into<String>) -> Self {
        self.include = Some(value.into());
        self
    }

    /// Set the exclude keyword list.
    #[must_use]
    pub fn with_exclude(mut self, value: impl Into<String>) -> Self {
        self.exclude = Some(value.into());
        self
    }

    /// Set the site list.
    #[must_use]
    pub fn with_sites(mut self, value: impl Into<String>) -> Self {
        self.sites = Some(value.into());
        self
    }

    /// Set the file type list.
    #[must_use]
    pub fn with_filetypes(mut self, value: impl Into<String>) -> Self {
        self.filetypes = Some(value.into());
        self
    }

    /// Set the `inurl:` list.
    #[must_use]
    pub fn with_inurl(mut self, value: impl Into<String>) -> Self {
        self.inurl = Some(value.into());
        self
    }

    /// Set the `intitle:` list.
    #[must_use]
    pub fn with_intitle(mut self, value: impl Into<String>) -> Self {
        self.intitle = Some(value.into());
        self
    }

    /// Set the `intext:` list.
    #[must_use]
    pub fn with_intext(mut self, value: impl Into<String>) -> Self {
        self.intext = Some(value.into());
        self
    }

    /// Set the date range. Either bound may be empty.
    #[must_use]
    pub fn with_date_range(mut self, after: impl Into<String>, before: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self.before = Some(before.into());
        self
    }

    /// Full name, if present.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        present(self.full_name.as_ref())
    }

    /// Username, if present.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        present(self.username.as_ref())
    }

    /// Email address, if present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        present(self.email.as_ref())
    }

    /// Check whether no field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.full_name,
            &self.username,
            &self.email,
            &self.phone,
            &self.location,
            &self.company,
            &self.school,
            &self.include,
            &self.exclude,
            &self.sites,
            &self.filetypes,
            &self.inurl,
            &self.intitle,
            &self.intext,
            &self.after,
            &self.before,
        ]
        .into_iter()
        .all(|field| present(field.as_ref()).is_none())
    }
}

/// Advisory comparison of a query against an engine's length limit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthCheck {
    /// Query length in characters.
    pub length: usize,
    /// Engine limit.
    pub max_query_length: usize,
    /// Whether the limit is exceeded.
    pub exceeds: bool,
}

/// Compare `query` against the engine's `max_query_length`.
///
/// Never truncates; the caller decides what an over-length query means.
#[must_use]
pub fn check_length(query: &str, engine: SearchEngine) -> LengthCheck {
    let length = query.chars().count();
    let max_query_length = engine.max_query_length();
    LengthCheck {
        length,
        max_query_length,
        exceeds: length > max_query_length,
    }
}

/// A composed query with everything a caller needs to display or run it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltQuery {
    /// The query string.
    pub query: String,
    /// Engine the query was built for.
    pub engine: SearchEngine,
    /// Preset applied, if any.
    pub preset: Option<PresetTemplate>,
    /// Whether terms were joined with `AND`.
    pub use_and_logic: bool,
    /// Risk classification of the query text.
    pub risk: RiskLevel,
    /// Length check against the engine limit.
    pub length: LengthCheck,
    /// URL that runs the query, absent for an empty query.
    pub search_url: Option<String>,
}
