//! Dashboard engine: remote data gateway and request execution.
mod detail;
mod engine;
mod gateway;
mod settings;
mod types;

pub use detail::fetch_detail;
pub use engine::EngineHandle;
pub use gateway::{Gateway, ReqwestGateway};
pub use settings::GatewaySettings;
pub use types::{ApiRequest, ApiResponse, EngineEvent, GatewayError, RequestId};
