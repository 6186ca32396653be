use std::collections::HashMap;

use dashboard_core::{Effect, Msg, Outcome};
use dashboard_engine::{ApiRequest, ApiResponse, EngineEvent, EngineHandle, GatewayError, RequestId};
use dashboard_logging::{dashboard_debug, dashboard_info, dashboard_warn};

enum Pending {
    Effect(Effect),
    HealthProbe,
}

/// Executes core effects on the engine and turns completions back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    next_request_id: RequestId,
    pending: HashMap<RequestId, Pending>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            next_request_id: 1,
            pending: HashMap::new(),
        }
    }

    pub fn probe_health(&mut self) {
        self.submit(ApiRequest::Health, Pending::HealthProbe);
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let request = to_request(&effect);
            self.submit(request, Pending::Effect(effect));
        }
    }

    /// Returns the next completion message without blocking, if any.
    pub fn try_next_msg(&mut self) -> Option<Msg> {
        while let Some(event) = self.engine.try_recv() {
            if let Some(msg) = self.on_event(event) {
                return Some(msg);
            }
        }
        None
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    fn submit(&mut self, request: ApiRequest, pending: Pending) {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        dashboard_debug!("Submitting request #{} {:?}", request_id, request);
        self.pending.insert(request_id, pending);
        self.engine.submit(request_id, request);
    }

    fn on_event(&mut self, event: EngineEvent) -> Option<Msg> {
        let EngineEvent::Completed { request_id, result } = event;
        match self.pending.remove(&request_id) {
            Some(Pending::Effect(effect)) => Some(to_msg(effect, result)),
            Some(Pending::HealthProbe) => {
                match result {
                    Ok(ApiResponse::Health(true)) => dashboard_info!("Backend is healthy"),
                    Ok(other) => dashboard_warn!("Backend health check returned {:?}", other),
                    Err(err) => dashboard_warn!("Backend health check failed: {}", err),
                }
                None
            }
            None => {
                dashboard_warn!("Completion for unknown request #{}", request_id);
                None
            }
        }
    }
}

fn to_request(effect: &Effect) -> ApiRequest {
    match effect {
        Effect::LoadKeywords { .. } => ApiRequest::ListKeywords,
        Effect::CreateKeyword { term } => ApiRequest::CreateKeyword { term: term.clone() },
        Effect::DeleteKeyword { id } => ApiRequest::DeleteKeyword { id: *id },
        Effect::CrawlKeyword { id } => ApiRequest::CrawlKeyword { id: *id },
        Effect::LoadDetail { keyword_id, .. } => ApiRequest::LoadDetail {
            keyword_id: *keyword_id,
        },
    }
}

fn to_msg(effect: Effect, result: Result<ApiResponse, GatewayError>) -> Msg {
    let result = result.map_err(|err| err.to_string());
    match effect {
        Effect::LoadKeywords {
            select_first,
            workflow,
        } => Msg::KeywordsLoaded {
            workflow,
            select_first,
            result: expect_response(result, |response| match response {
                ApiResponse::Keywords(list) => Ok(list),
                other => Err(other),
            }),
        },
        Effect::CreateKeyword { .. } => Msg::KeywordCreated {
            result: expect_response(result, |response| match response {
                ApiResponse::Created(keyword) => Ok(keyword),
                other => Err(other),
            }),
        },
        Effect::DeleteKeyword { id } => Msg::KeywordDeleted {
            id,
            result: expect_response(result, |response| match response {
                ApiResponse::Deleted(outcome) => Ok(outcome),
                other => Err(other),
            }),
        },
        Effect::CrawlKeyword { id } => Msg::CrawlFinished {
            id,
            result: expect_response(result, |response| match response {
                ApiResponse::Crawled(crawl) => Ok(crawl),
                other => Err(other),
            }),
        },
        Effect::LoadDetail {
            keyword_id,
            workflow,
        } => Msg::DetailLoaded {
            keyword_id,
            workflow,
            result: expect_response(result, |response| match response {
                ApiResponse::Detail(detail) => Ok(detail),
                other => Err(other),
            }),
        },
    }
}

fn expect_response<T>(
    result: Outcome<ApiResponse>,
    pick: impl FnOnce(ApiResponse) -> Result<T, ApiResponse>,
) -> Outcome<T> {
    pick(result?).map_err(|other| format!("unexpected response: {other:?}"))
}
