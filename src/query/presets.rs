//! Preset dorking templates.
//!
//! Each preset maps to a pure clause function in [`PRESET_TABLE`]. The builder
//! appends whatever the function returns after the input terms, so a preset can
//! add to a query but never take anything away from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::engines::SearchEngine;
use super::error::QueryError;
use super::tokenize::or_clause;
use super::types::{InvestigationInput, present};

/// Named bundles of operator clauses for common investigation scenarios.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetTemplate {
    /// LinkedIn profiles and company pages.
    Linkedin = 0,
    /// Major social platforms.
    SocialMedia = 1,
    /// GitHub accounts and repositories.
    Github = 2,
    /// Resume and CV documents.
    Resume = 3,
    /// Contact and about pages.
    Contact = 4,
    /// Paste sites and leaked dumps.
    Leaks = 5,
    /// Research papers and academic profiles.
    Academic = 6,
    /// Career and company directories.
    Professional = 7,
    /// Documents marked confidential.
    Sensitive = 8,
    /// Exposed admin panels and directory listings.
    Infrastructure = 9,
}

/// Clause generator for a preset.
pub type ClauseFn = fn(&InvestigationInput, SearchEngine) -> Vec<String>;

/// One row of the preset table.
#[derive(Clone, Copy)]
pub struct PresetEntry {
    /// Preset this row describes.
    pub preset: PresetTemplate,
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Terms appended when the preset is active.
    pub clauses: ClauseFn,
}

impl fmt::Debug for PresetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Preset rows, indexed by the `PresetTemplate` discriminant.
pub static PRESET_TABLE: [PresetEntry; 10] = [
    PresetEntry {
        preset: PresetTemplate::Linkedin,
        id: "linkedin",
        name: "LinkedIn Profile",
        description: "LinkedIn member profiles and company pages",
        clauses: linkedin_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::SocialMedia,
        id: "social-media",
        name: "Social Media Hunt",
        description: "Find profiles across major social platforms",
        clauses: social_media_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::Github,
        id: "github",
        name: "Developer Profile",
        description: "GitHub repositories and developer activity",
        clauses: github_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::Resume,
        id: "resume",
        name: "Resume / CV",
        description: "Resumes and curricula vitae in document formats",
        clauses: resume_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::Contact,
        id: "contact",
        name: "Contact Information",
        description: "Email addresses, phone numbers, contact pages",
        clauses: contact_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::Leaks,
        id: "leaks",
        name: "Data Breach Search",
        description: "Pastebin, GitHub gists, leaked information",
        clauses: leaks_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::Academic,
        id: "academic",
        name: "Academic Research",
        description: "Research papers, academic profiles",
        clauses: academic_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::Professional,
        id: "professional",
        name: "Professional Profile",
        description: "LinkedIn, resumes, and career information",
        clauses: professional_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::Sensitive,
        id: "sensitive",
        name: "Sensitive Documents",
        description: "Office documents marked confidential or internal",
        clauses: sensitive_clauses,
    },
    PresetEntry {
        preset: PresetTemplate::Infrastructure,
        id: "infrastructure",
        name: "Infrastructure Recon",
        description: "Admin panels, login portals and open directory listings",
        clauses: infrastructure_clauses,
    },
];

impl PresetTemplate {
    /// All presets, in table order.
    pub const ALL: [Self; 10] = [
        Self::Linkedin,
        Self::SocialMedia,
        Self::Github,
        Self::Resume,
        Self::Contact,
        Self::Leaks,
        Self::Academic,
        Self::Professional,
        Self::Sensitive,
        Self::Infrastructure,
    ];

    /// Table row for this preset.
    #[must_use]
    pub fn entry(self) -> &'static PresetEntry {
        &PRESET_TABLE[self as usize]
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.entry().id
    }

    /// Terms this preset appends for the given input and engine.
    #[must_use]
    pub fn clauses(self, input: &InvestigationInput, engine: SearchEngine) -> Vec<String> {
        (self.entry().clauses)(input, engine)
    }
}

impl fmt::Display for PresetTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PresetTemplate {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| raw.eq_ignore_ascii_case(preset.id()))
            .ok_or_else(|| QueryError::UnknownPreset(raw.to_string()))
    }
}

fn linkedin_clauses(input: &InvestigationInput, engine: SearchEngine) -> Vec<String> {
    let site = match engine {
        SearchEngine::Google => or_clause(
            "site:",
            &["linkedin.com/in", "linkedin.com/pub", "linkedin.com/company"],
        ),
        SearchEngine::Bing | SearchEngine::Yandex | SearchEngine::Baidu | SearchEngine::DuckDuckGo => {
            "site:linkedin.com".to_string()
        }
    };

    let mut terms = vec![site];
    // A caller-supplied intitle list already narrows titles.
    if present(input.intitle.as_ref()).is_none() {
        terms.push(or_clause("intitle:", &["profile", "linkedin"]));
    }
    terms
}

fn social_media_clauses(_: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    vec![or_clause(
        "site:",
        &[
            "twitter.com",
            "instagram.com",
            "facebook.com",
            "tiktok.com",
            "snapchat.com",
            "youtube.com",
        ],
    )]
}

fn github_clauses(input: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    let mut terms = vec!["site:github.com".to_string()];
    if input.username().is_none() && input.full_name().is_some() {
        terms.push("in:fullname".to_string());
    }
    terms
}

fn resume_clauses(_: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    vec![
        or_clause("filetype:", &["pdf", "doc", "docx"]),
        or_clause("intitle:", &["resume", "cv", "\"curriculum vitae\""]),
    ]
}

fn contact_clauses(_: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    vec![
        or_clause("intitle:", &["contact", "about", "email"]),
        or_clause("intext:", &["phone", "email", "contact"]),
    ]
}

fn leaks_clauses(_: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    vec![or_clause(
        "site:",
        &[
            "pastebin.com",
            "ghostbin.com",
            "rentry.co",
            "gist.github.com",
            "justpaste.it",
            "controlc.com",
            "hastebin.com",
        ],
    )]
}

fn academic_clauses(_: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    vec![
        or_clause(
            "site:",
            &[
                "researchgate.net",
                "academia.edu",
                "scholar.google.com",
                "orcid.org",
                "pubmed.ncbi.nlm.nih.gov",
            ],
        ),
        or_clause("filetype:", &["pdf"]),
    ]
}

fn professional_clauses(_: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    vec![
        or_clause(
            "site:",
            &[
                "linkedin.com",
                "indeed.com",
                "glassdoor.com",
                "monster.com",
                "crunchbase.com",
            ],
        ),
        or_clause("intitle:", &["profile", "resume", "bio"]),
    ]
}

fn sensitive_clauses(_: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    vec![
        or_clause("filetype:", &["pdf", "doc", "docx", "xls", "xlsx", "txt"]),
        or_clause(
            "intext:",
            &[
                "confidential",
                "\"internal use only\"",
                "\"not for distribution\"",
            ],
        ),
    ]
}

fn infrastructure_clauses(_: &InvestigationInput, _: SearchEngine) -> Vec<String> {
    vec![
        or_clause("inurl:", &["admin", "login", "dashboard", "portal"]),
        or_clause("intitle:", &["\"index of\"", "login"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_discriminants() {
        for (index, preset) in PresetTemplate::ALL.into_iter().enumerate() {
            assert_eq!(PRESET_TABLE[index].preset, preset);
            assert_eq!(preset.entry().preset, preset);
        }
    }

    #[test]
    fn test_parse_preset_ids() {
        for preset in PresetTemplate::ALL {
            assert_eq!(preset.id().parse::<PresetTemplate>().ok(), Some(preset));
        }
        assert_eq!(
            "Social-Media".parse::<PresetTemplate>().ok(),
            Some(PresetTemplate::SocialMedia)
        );
        assert!(matches!(
            "dating".parse::<PresetTemplate>(),
            Err(QueryError::UnknownPreset(id)) if id == "dating"
        ));
    }

    #[test]
    fn test_serde_matches_ids() {
        for preset in PresetTemplate::ALL {
            let json = serde_json::to_string(&preset).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", preset.id()));
        }
    }

    #[test]
    fn test_linkedin_google_paths() {
        let terms = PresetTemplate::Linkedin.clauses(&InvestigationInput::new(), SearchEngine::Google);
        assert_eq!(
            terms,
            vec![
                "(site:linkedin.com/in OR site:linkedin.com/pub OR site:linkedin.com/company)",
                "(intitle:profile OR intitle:linkedin)",
            ]
        );
    }

    #[test]
    fn test_linkedin_other_engines() {
        let input = InvestigationInput::new().with_intitle("engineer");
        let terms = PresetTemplate::Linkedin.clauses(&input, SearchEngine::Bing);
        assert_eq!(terms, vec!["site:linkedin.com"]);
    }

    #[test]
    fn test_github_fullname_hint() {
        let named = InvestigationInput::new().with_full_name("Jane Doe");
        assert_eq!(
            PresetTemplate::Github.clauses(&named, SearchEngine::Google),
            vec!["site:github.com", "in:fullname"]
        );

        let handle = named.with_username("jdoe");
        assert_eq!(
            PresetTemplate::Github.clauses(&handle, SearchEngine::Google),
            vec!["site:github.com"]
        );
    }

    #[test]
    fn test_leaks_sites() {
        let terms = PresetTemplate::Leaks.clauses(&InvestigationInput::new(), SearchEngine::Google);
        assert_eq!(
            terms,
            vec![
                "(site:pastebin.com OR site:ghostbin.com OR site:rentry.co OR \
                 site:gist.github.com OR site:justpaste.it OR site:controlc.com OR \
                 site:hastebin.com)"
            ]
        );
    }

    fn google_clauses(preset: PresetTemplate) -> Vec<String> {
        preset.clauses(&InvestigationInput::new(), SearchEngine::Google)
    }

    #[test]
    fn test_social_media_clauses() {
        assert_eq!(
            google_clauses(PresetTemplate::SocialMedia),
            vec![
                "(site:twitter.com OR site:instagram.com OR site:facebook.com OR \
                 site:tiktok.com OR site:snapchat.com OR site:youtube.com)"
            ]
        );
    }

    #[test]
    fn test_resume_clauses() {
        assert_eq!(
            google_clauses(PresetTemplate::Resume),
            vec![
                "(filetype:pdf OR filetype:doc OR filetype:docx)",
                "(intitle:resume OR intitle:cv OR intitle:\"curriculum vitae\")",
            ]
        );
    }

    #[test]
    fn test_contact_clauses() {
        assert_eq!(
            google_clauses(PresetTemplate::Contact),
            vec![
                "(intitle:contact OR intitle:about OR intitle:email)",
                "(intext:phone OR intext:email OR intext:contact)",
            ]
        );
    }

    #[test]
    fn test_academic_clauses() {
        assert_eq!(
            google_clauses(PresetTemplate::Academic),
            vec![
                "(site:researchgate.net OR site:academia.edu OR site:scholar.google.com OR \
                 site:orcid.org OR site:pubmed.ncbi.nlm.nih.gov)",
                "filetype:pdf",
            ]
        );
    }

    #[test]
    fn test_professional_clauses() {
        assert_eq!(
            google_clauses(PresetTemplate::Professional),
            vec![
                "(site:linkedin.com OR site:indeed.com OR site:glassdoor.com OR \
                 site:monster.com OR site:crunchbase.com)",
                "(intitle:profile OR intitle:resume OR intitle:bio)",
            ]
        );
    }

    #[test]
    fn test_sensitive_clauses() {
        assert_eq!(
            google_clauses(PresetTemplate::Sensitive),
            vec![
                "(filetype:pdf OR filetype:doc OR filetype:docx OR filetype:xls OR \
                 filetype:xlsx OR filetype:txt)",
                "(intext:confidential OR intext:\"internal use only\" OR \
                 intext:\"not for distribution\")",
            ]
        );
    }

    #[test]
    fn test_infrastructure_clauses() {
        assert_eq!(
            google_clauses(PresetTemplate::Infrastructure),
            vec![
                "(inurl:admin OR inurl:login OR inurl:dashboard OR inurl:portal)",
                "(intitle:\"index of\" OR intitle:login)",
            ]
        );
    }

    #[test]
    fn test_every_preset_adds_terms() {
        let input = InvestigationInput::new();
        for preset in PresetTemplate::ALL {
            for engine in SearchEngine::ALL {
                let terms = preset.clauses(&input, engine);
                assert!(!terms.is_empty(), "{preset} on {engine}");
                assert!(terms.iter().all(|t| !t.is_empty()));
            }
        }
    }
}
