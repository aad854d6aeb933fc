//! Supported search engines and their static registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::query::error::{QueryError, QueryResult};

/// Search engines a query can target.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// Google (default).
    #[default]
    Google,
    /// Microsoft Bing.
    Bing,
    /// Yandex.
    Yandex,
    /// Baidu.
    Baidu,
    /// DuckDuckGo.
    #[serde(alias = "duck", alias = "ddg")]
    DuckDuckGo,
}

/// Static description of a search engine.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSpec {
    /// Canonical identifier.
    pub id: &'static str,
    /// Display label.
    pub name: &'static str,
    /// Query endpoint, without parameters.
    pub base_url: &'static str,
    /// Name of the parameter carrying the query text.
    pub query_param: &'static str,
    /// Operator prefixes the engine understands. Informational only.
    pub operators: &'static [&'static str],
    /// Longest query the engine reliably accepts.
    pub max_query_length: usize,
}

static GOOGLE: EngineSpec = EngineSpec {
    id: "google",
    name: "Google",
    base_url: "https://www.google.com/search",
    query_param: "q",
    operators: &[
        "site:", "filetype:", "inurl:", "intitle:", "intext:", "after:", "before:", "related:",
        "cache:",
    ],
    max_query_length: 2048,
};

static BING: EngineSpec = EngineSpec {
    id: "bing",
    name: "Bing",
    base_url: "https://www.bing.com/search",
    query_param: "q",
    operators: &[
        "site:", "filetype:", "inurl:", "intitle:", "inbody:", "after:", "before:",
    ],
    max_query_length: 2048,
};

static YANDEX: EngineSpec = EngineSpec {
    id: "yandex",
    name: "Yandex",
    base_url: "https://yandex.com/search/",
    query_param: "text",
    operators: &["site:", "mime:", "inurl:", "title:", "host:"],
    max_query_length: 400,
};

static BAIDU: EngineSpec = EngineSpec {
    id: "baidu",
    name: "Baidu",
    base_url: "https://www.baidu.com/s",
    query_param: "wd",
    operators: &["site:", "filetype:", "inurl:", "intitle:"],
    max_query_length: 76,
};

static DUCKDUCKGO: EngineSpec = EngineSpec {
    id: "duckduckgo",
    name: "DuckDuckGo",
    base_url: "https://duckduckgo.com/",
    query_param: "q",
    operators: &["site:", "filetype:", "inurl:", "intitle:", "intext:"],
    max_query_length: 500,
};

impl SearchEngine {
    /// Every registered engine, in display order.
    pub const ALL: [Self; 5] = [
        Self::Google,
        Self::Bing,
        Self::Yandex,
        Self::Baidu,
        Self::DuckDuckGo,
    ];

    /// Registry entry for this engine.
    #[must_use]
    pub const fn spec(self) -> &'static EngineSpec {
        match self {
            Self::Google => &GOOGLE,
            Self::Bing => &BING,
            Self::Yandex => &YANDEX,
            Self::Baidu => &BAIDU,
            Self::DuckDuckGo => &DUCKDUCKGO,
        }
    }

    /// Canonical identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.spec().id
    }

    /// Get the display name of the search engine.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Longest query the engine reliably accepts.
    #[must_use]
    pub const fn max_query_length(self) -> usize {
        self.spec().max_query_length
    }

    /// Check if the engine honours `after:` / `before:`.
    #[must_use]
    pub const fn supports_temporal(self) -> bool {
        matches!(self, Self::Google | Self::Bing)
    }

    /// Render the URL that runs `query` on this engine.
    ///
    /// # Errors
    /// Returns an error if the registered endpoint cannot be parsed.
    pub fn search_url(self, query: &str) -> QueryResult<Url> {
        let spec = self.spec();
        let mut url = Url::parse(spec.base_url)?;
        url.query_pairs_mut().append_pair(spec.query_param, query);
        Ok(url)
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SearchEngine {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();

        // Short ids used by older clients.
        if raw.eq_ignore_ascii_case("duck") || raw.eq_ignore_ascii_case("ddg") {
            return Ok(Self::DuckDuckGo);
        }

        Self::ALL
            .into_iter()
            .find(|engine| raw.eq_ignore_ascii_case(engine.id()))
            .ok_or_else(|| QueryError::UnknownEngine(raw.to_string()))
    }
}
