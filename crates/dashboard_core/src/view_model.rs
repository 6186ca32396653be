use crate::{Article, Keyword, KeywordId, Status, TrendPoint};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub keywords: Vec<Keyword>,
    pub selected: Option<KeywordId>,
    pub selected_keyword: Option<Keyword>,
    /// Keyword the articles and trend belong to. May differ from `selected`
    /// after a crawl of another keyword or a late response.
    pub detail_keyword: Option<KeywordId>,
    pub articles: Vec<Article>,
    pub trend: Vec<TrendPoint>,
    pub status: Status,
    pub term_input: String,
    pub dirty: bool,
}
