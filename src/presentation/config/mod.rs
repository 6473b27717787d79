mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ClientSettings, LoggingSettings, ProxySettings, ServerSettings, Settings, UpstreamProvider,
    UpstreamSettings,
};
