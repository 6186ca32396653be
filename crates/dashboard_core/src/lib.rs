//! Dashboard core: pure state machine, domain types and view-model helpers.
mod detail;
mod effect;
mod msg;
mod registry;
mod state;
mod status;
mod types;
mod update;
mod view_model;

pub use detail::DetailView;
pub use effect::{Effect, Workflow};
pub use msg::{Msg, Outcome};
pub use registry::KeywordRegistry;
pub use state::AppState;
pub use status::{Status, StatusTracker};
pub use types::{
    Article, CrawlResult, DeleteResult, DetailData, Keyword, KeywordId, TrendPoint,
};
pub use update::{
    update, CREATED, CREATING_KEYWORD, CRAWLING, DELETED, DELETING_KEYWORD,
    LOADING_ARTICLES_AND_TREND, LOADING_KEYWORDS, READY,
};
pub use view_model::AppViewModel;
