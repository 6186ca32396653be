use serde::{Deserialize, Serialize};

/// Server-assigned keyword identifier.
pub type KeywordId = u64;

/// A tracked search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: KeywordId,
    pub term: String,
    /// Opaque server timestamp; only ever displayed.
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub keyword_id: KeywordId,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub press: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One day of the article-count series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    #[serde(default)]
    pub keyword: String,
    pub fetched: u64,
    pub saved: u64,
    #[serde(default)]
    pub skipped_by_keyword: Option<u64>,
    #[serde(default)]
    pub skipped_by_dup: Option<u64>,
}

impl CrawlResult {
    /// Human-readable summary shown on the status line after a crawl.
    ///
    /// Counters the server did not report are rendered as `?`.
    pub fn summary(&self) -> String {
        format!(
            "Crawl done: fetched={}, saved={}, skipped_by_keyword={}, skipped_by_dup={}",
            self.fetched,
            self.saved,
            count_or_unknown(self.skipped_by_keyword),
            count_or_unknown(self.skipped_by_dup),
        )
    }
}

fn count_or_unknown(value: Option<u64>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

/// Articles and trend for one keyword, always applied together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailData {
    pub articles: Vec<Article>,
    pub trend: Vec<TrendPoint>,
}
