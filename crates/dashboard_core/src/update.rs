use dashboard_logging::{dashboard_debug, dashboard_info, dashboard_warn};

use crate::{AppState, Effect, KeywordId, Msg, Status, Workflow};

pub const READY: &str = "Ready";
pub const LOADING_KEYWORDS: &str = "Loading keywords...";
pub const LOADING_ARTICLES_AND_TREND: &str = "Loading articles & trend...";
pub const CREATING_KEYWORD: &str = "Creating keyword...";
pub const CREATED: &str = "Created";
pub const DELETING_KEYWORD: &str = "Deleting keyword...";
pub const DELETED: &str = "Deleted";
pub const CRAWLING: &str = "Crawling...";

/// Pure update function: applies a message to state and returns any effects.
///
/// A workflow that fails stops at the failing step. Registry and detail keep
/// their last applied values and the error text becomes the status message.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.started {
                return (state, Vec::new());
            }
            state.started = true;
            dashboard_info!("Startup: loading keywords");
            state.set_status(Status::loading(LOADING_KEYWORDS));
            vec![Effect::LoadKeywords {
                select_first: true,
                workflow: Workflow::Startup,
            }]
        }
        Msg::TermInputChanged(text) => {
            if state.term_input != text {
                state.term_input = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AddKeywordClicked => {
            let term = state.term_input.trim().to_owned();
            if term.is_empty() {
                return (state, Vec::new());
            }
            dashboard_info!("AddKeyword: term={:?}", term);
            state.set_status(Status::loading(CREATING_KEYWORD));
            vec![Effect::CreateKeyword { term }]
        }
        Msg::DeleteKeywordClicked(id) => {
            dashboard_info!("DeleteKeyword: id={}", id);
            state.set_status(Status::loading(DELETING_KEYWORD));
            vec![Effect::DeleteKeyword { id }]
        }
        Msg::CrawlKeywordClicked(id) => {
            dashboard_info!("CrawlKeyword: id={}", id);
            state.set_status(Status::loading(CRAWLING));
            vec![Effect::CrawlKeyword { id }]
        }
        Msg::KeywordSelected(id) => {
            if let Some(id) = id {
                if !state.registry.contains(id) {
                    dashboard_warn!("Ignoring selection of unknown keyword id={}", id);
                    return (state, Vec::new());
                }
            }
            if state.registry.select(id) {
                state.mark_dirty();
            }
            // Reselecting the same id still refetches.
            let effects = sync_detail(&mut state, id, Workflow::SelectionChange);
            if id.is_none() {
                state.set_status(Status::ok(READY));
            }
            effects
        }
        Msg::KeywordsLoaded {
            workflow,
            select_first,
            result,
        } => match result {
            Ok(keywords) => {
                dashboard_debug!(
                    "{:?}: loaded {} keywords (select_first={})",
                    workflow,
                    keywords.len(),
                    select_first
                );
                let selection_changed = state.registry.replace(keywords, select_first);
                state.mark_dirty();
                state.set_status(Status::ok(reload_done_message(workflow)));
                if workflow == Workflow::Startup || selection_changed {
                    let selected = state.registry.selected();
                    sync_detail(&mut state, selected, Workflow::SelectionChange)
                } else {
                    Vec::new()
                }
            }
            Err(message) => fail(&mut state, workflow, message),
        },
        Msg::KeywordCreated { result } => match result {
            Ok(keyword) => {
                if let Some(keyword) = keyword {
                    dashboard_info!("Created keyword id={} term={:?}", keyword.id, keyword.term);
                } else {
                    dashboard_info!("Created keyword; server sent no body");
                }
                if !state.term_input.is_empty() {
                    state.term_input.clear();
                    state.mark_dirty();
                }
                // The new keyword is not auto-selected.
                vec![Effect::LoadKeywords {
                    select_first: false,
                    workflow: Workflow::AddKeyword,
                }]
            }
            Err(message) => fail(&mut state, Workflow::AddKeyword, message),
        },
        Msg::KeywordDeleted { id, result } => match result {
            Ok(outcome) => {
                if outcome.is_some_and(|outcome| !outcome.deleted) {
                    dashboard_warn!("Server reported keyword id={} as not deleted", id);
                }
                // Clear before reloading so select-first can pick a replacement.
                if state.registry.selected() == Some(id) {
                    state.registry.select(None);
                    state.detail.clear();
                    state.mark_dirty();
                }
                vec![Effect::LoadKeywords {
                    select_first: true,
                    workflow: Workflow::DeleteKeyword,
                }]
            }
            Err(message) => fail(&mut state, Workflow::DeleteKeyword, message),
        },
        Msg::CrawlFinished { id, result } => match result {
            Ok(crawl) => {
                let summary = crawl.summary();
                dashboard_info!("Crawl of keyword id={} finished: {}", id, summary);
                state.set_status(Status::ok(summary));
                // Refreshes the crawled keyword even if another one is selected.
                vec![Effect::LoadDetail {
                    keyword_id: id,
                    workflow: Workflow::CrawlKeyword,
                }]
            }
            Err(message) => fail(&mut state, Workflow::CrawlKeyword, message),
        },
        Msg::DetailLoaded {
            keyword_id,
            workflow,
            result,
        } => match result {
            Ok(data) => {
                dashboard_debug!(
                    "{:?}: detail for keyword id={} ({} articles, {} trend points)",
                    workflow,
                    keyword_id,
                    data.articles.len(),
                    data.trend.len()
                );
                state.detail.apply(keyword_id, data);
                state.mark_dirty();
                // A crawl keeps its summary on the status line.
                if workflow != Workflow::CrawlKeyword {
                    state.set_status(Status::ok(READY));
                }
                Vec::new()
            }
            Err(message) => fail(&mut state, workflow, message),
        },
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

/// Points the detail view at `keyword_id`: cleared at once for `None`,
/// otherwise fetched.
fn sync_detail(
    state: &mut AppState,
    keyword_id: Option<KeywordId>,
    workflow: Workflow,
) -> Vec<Effect> {
    match keyword_id {
        None => {
            if state.detail.clear() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Some(keyword_id) => {
            state.set_status(Status::loading(LOADING_ARTICLES_AND_TREND));
            vec![Effect::LoadDetail {
                keyword_id,
                workflow,
            }]
        }
    }
}

fn reload_done_message(workflow: Workflow) -> &'static str {
    match workflow {
        Workflow::AddKeyword => CREATED,
        Workflow::DeleteKeyword => DELETED,
        Workflow::Startup | Workflow::SelectionChange | Workflow::CrawlKeyword => READY,
    }
}

fn fail(state: &mut AppState, workflow: Workflow, message: String) -> Vec<Effect> {
    dashboard_warn!("{:?} failed: {}", workflow, message);
    state.set_status(Status::error(message));
    Vec::new()
}
