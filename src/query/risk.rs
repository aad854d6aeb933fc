//! Keyword-based risk classification of generated queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How sensitive or intrusive a query looks. Ordered from least to most.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Nothing notable.
    #[default]
    Low,
    /// Personal contact details.
    Medium,
    /// Internal or restricted material.
    High,
    /// Credentials, admin surfaces, databases.
    Critical,
}

/// Keyword sets, highest priority first.
const RISK_KEYWORDS: [(RiskLevel, &[&str]); 4] = [
    (
        RiskLevel::Critical,
        &[
            "password",
            "confidential",
            "secret",
            "admin",
            "login",
            "database",
            "backup",
            "root",
        ],
    ),
    (
        RiskLevel::High,
        &["internal", "private", "restricted", "config", "env", "credentials"],
    ),
    (
        RiskLevel::Medium,
        &["contact", "phone", "email", "address", "personal", "profile"],
    ),
    (RiskLevel::Low, &["public", "about", "general", "info"]),
];

impl RiskLevel {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Keywords that select this level.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        RISK_KEYWORDS
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, words)| *words)
            .unwrap_or_default()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`RiskLevel`].
#[derive(Debug, Clone)]
pub struct RiskLevelParseError {
    value: String,
}

impl RiskLevelParseError {
    /// The raw value that failed parsing.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for RiskLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid risk level: {}", self.value)
    }
}

impl std::error::Error for RiskLevelParseError {}

impl FromStr for RiskLevel {
    type Err = RiskLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        [Self::Low, Self::Medium, Self::High, Self::Critical]
            .into_iter()
            .find(|level| raw.eq_ignore_ascii_case(level.as_str()))
            .ok_or_else(|| RiskLevelParseError {
                value: raw.to_string(),
            })
    }
}

/// Classify a query by the highest-priority keyword set it contains.
///
/// Matching is a case-insensitive substring test. Falls back to `Low`.
#[must_use]
pub fn assess_risk(query: &str) -> RiskLevel {
    let text = query.to_lowercase();
    RISK_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|word| text.contains(word)))
        .map_or(RiskLevel::Low, |(level, _)| *level)
}
