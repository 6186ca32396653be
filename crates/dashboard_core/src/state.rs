use crate::view_model::AppViewModel;
use crate::{DetailView, KeywordRegistry, Status, StatusTracker};

/// Every shared cell of the dashboard. Only [`crate::update`] writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) registry: KeywordRegistry,
    pub(crate) detail: DetailView,
    pub(crate) status: StatusTracker,
    pub(crate) term_input: String,
    pub(crate) started: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn status(&self) -> &Status {
        self.status.current()
    }

    pub fn term_input(&self) -> &str {
        &self.term_input
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            keywords: self.registry.keywords().to_vec(),
            selected: self.registry.selected(),
            selected_keyword: self.registry.selected_keyword().cloned(),
            detail_keyword: self.detail.keyword_id(),
            articles: self.detail.articles().to_vec(),
            trend: self.detail.trend().to_vec(),
            status: self.status.current().clone(),
            term_input: self.term_input.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        if self.status.set(status) {
            self.mark_dirty();
        }
    }
}
