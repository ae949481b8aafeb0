pub mod context;
pub mod gate;
pub mod host;

pub use context::{use_api_key, ApiKeyContext, ApiKeyProvider};
pub use gate::{GateEvent, GateState, GateStatus};
pub use host::{detect_host, AiStudioHost, HostError, KeyHost, NoHost};
