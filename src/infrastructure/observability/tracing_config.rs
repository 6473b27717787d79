/// Options for [`super::init_tracing`].
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub default_filter: String,
    pub json_format: bool,
    /// Log to stderr instead of stdout, leaving stdout for command output.
    pub use_stderr: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            default_filter: "info,legalyze=debug,tower_http=debug".to_string(),
            json_format: false,
            use_stderr: false,
        }
    }
}
