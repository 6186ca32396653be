#![allow(dead_code)]

use std::sync::Once;

use dashboard_core::{
    update, AppState, Article, CrawlResult, DeleteResult, DetailData, Effect, Keyword, KeywordId,
    Msg, TrendPoint, Workflow,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

pub fn keyword(id: KeywordId) -> Keyword {
    Keyword {
        id,
        term: format!("term-{id}"),
        created_at: "2024-05-01T09:00:00".to_string(),
    }
}

pub fn keywords(ids: &[KeywordId]) -> Vec<Keyword> {
    ids.iter().copied().map(keyword).collect()
}

pub fn detail_for(keyword_id: KeywordId, articles: usize) -> DetailData {
    DetailData {
        articles: (0..articles)
            .map(|n| Article {
                id: keyword_id * 100 + n as u64,
                keyword_id,
                title: format!("article {n} about term-{keyword_id}"),
                url: format!("https://news.example/{keyword_id}/{n}"),
                press: None,
                published_at: None,
                snippet: None,
                created_at: None,
            })
            .collect(),
        trend: vec![
            TrendPoint {
                date: "2024-05-01".to_string(),
                count: articles as u64,
            },
            TrendPoint {
                date: "2024-05-02".to_string(),
                count: 0,
            },
        ],
    }
}

/// Feeds the keyword-list response for a pending `LoadKeywords` effect.
pub fn keywords_loaded(
    state: AppState,
    effect: &Effect,
    list: Vec<Keyword>,
) -> (AppState, Vec<Effect>) {
    match effect {
        Effect::LoadKeywords {
            select_first,
            workflow,
        } => update(
            state,
            Msg::KeywordsLoaded {
                workflow: *workflow,
                select_first: *select_first,
                result: Ok(list),
            },
        ),
        other => panic!("expected LoadKeywords, got {other:?}"),
    }
}

/// Feeds a successful detail response for a pending `LoadDetail` effect.
pub fn detail_loaded(state: AppState, effect: &Effect, articles: usize) -> (AppState, Vec<Effect>) {
    match effect {
        Effect::LoadDetail {
            keyword_id,
            workflow,
        } => update(
            state,
            Msg::DetailLoaded {
                keyword_id: *keyword_id,
                workflow: *workflow,
                result: Ok(detail_for(*keyword_id, articles)),
            },
        ),
        other => panic!("expected LoadDetail, got {other:?}"),
    }
}

/// Runs startup against a server holding `ids`, resolving every request.
pub fn started_with(ids: &[KeywordId]) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    let (mut state, mut effects) = keywords_loaded(state, &effects[0], keywords(ids));
    while let Some(effect) = effects.pop() {
        let (next, more) = detail_loaded(state, &effect, 2);
        state = next;
        effects.extend(more);
    }
    state
}

pub fn deleted(id: KeywordId) -> Msg {
    Msg::KeywordDeleted {
        id,
        result: Ok(Some(DeleteResult { deleted: true })),
    }
}

pub fn crawled(id: KeywordId, result: CrawlResult) -> Msg {
    Msg::CrawlFinished {
        id,
        result: Ok(result),
    }
}

pub fn load_keywords(select_first: bool, workflow: Workflow) -> Effect {
    Effect::LoadKeywords {
        select_first,
        workflow,
    }
}

pub fn load_detail(keyword_id: KeywordId, workflow: Workflow) -> Effect {
    Effect::LoadDetail {
        keyword_id,
        workflow,
    }
}
