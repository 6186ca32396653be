use crate::KeywordId;

/// The user- or system-triggered sequence a request belongs to.
///
/// Carried through effects and back in completion messages so each step knows
/// which status to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Startup,
    SelectionChange,
    AddKeyword,
    DeleteKeyword,
    CrawlKeyword,
}

/// Gateway work requested by [`crate::update`]. The caller executes each
/// effect and feeds the outcome back as the matching completion message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadKeywords {
        select_first: bool,
        workflow: Workflow,
    },
    CreateKeyword {
        term: String,
    },
    DeleteKeyword {
        id: KeywordId,
    },
    CrawlKeyword {
        id: KeywordId,
    },
    /// Fetch articles and trend together for one keyword.
    LoadDetail {
        keyword_id: KeywordId,
        workflow: Workflow,
    },
}
