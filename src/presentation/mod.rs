pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings, UpstreamProvider};
pub use router::{LEGACY_PROXY_PATH, PROXY_PATH, create_router};
pub use state::AppState;
