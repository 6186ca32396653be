use crate::{CrawlResult, DeleteResult, DetailData, Keyword, KeywordId, Workflow};

/// Result of a gateway call; the error is the description shown to the user.
pub type Outcome<T> = Result<T, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// First mount. Only the first one has any effect.
    Started,
    /// User edited the keyword input box.
    TermInputChanged(String),
    /// User submitted the keyword input.
    AddKeywordClicked,
    DeleteKeywordClicked(KeywordId),
    CrawlKeywordClicked(KeywordId),
    /// User focused a keyword, or cleared the focus with `None`.
    KeywordSelected(Option<KeywordId>),
    KeywordsLoaded {
        workflow: Workflow,
        select_first: bool,
        result: Outcome<Vec<Keyword>>,
    },
    /// `Ok(None)` when the server answered with an empty body.
    KeywordCreated {
        result: Outcome<Option<Keyword>>,
    },
    /// `Ok(None)` when the server answered with an empty body.
    KeywordDeleted {
        id: KeywordId,
        result: Outcome<Option<DeleteResult>>,
    },
    CrawlFinished {
        id: KeywordId,
        result: Outcome<CrawlResult>,
    },
    DetailLoaded {
        keyword_id: KeywordId,
        workflow: Workflow,
        result: Outcome<DetailData>,
    },
    /// Render tick from the front end loop.
    Tick,
}
