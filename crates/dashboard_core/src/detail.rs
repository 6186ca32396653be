use crate::{Article, DetailData, KeywordId, TrendPoint};

/// Articles and trend for whichever keyword was synced last.
///
/// Both sequences are replaced together or not at all, so overlapping syncs
/// can only ever leave one complete result behind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailView {
    keyword_id: Option<KeywordId>,
    articles: Vec<Article>,
    trend: Vec<TrendPoint>,
}

impl DetailView {
    /// Keyword the current data was fetched for, if any.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.keyword_id
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn trend(&self) -> &[TrendPoint] {
        &self.trend
    }

    pub fn is_empty(&self) -> bool {
        self.keyword_id.is_none() && self.articles.is_empty() && self.trend.is_empty()
    }

    /// Returns `true` if anything was cleared.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        *self = Self::default();
        true
    }

    pub fn apply(&mut self, keyword_id: KeywordId, data: DetailData) {
        let DetailData { articles, trend } = data;
        self.keyword_id = Some(keyword_id);
        self.articles = articles;
        self.trend = trend;
    }
}
