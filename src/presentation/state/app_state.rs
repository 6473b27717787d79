use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::ProxyService;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub proxy_service: Arc<ProxyService<L>>,
    pub max_body_bytes: usize,
}

impl<L> AppState<L>
where
    L: LlmClient,
{
    pub fn new(proxy_service: ProxyService<L>, max_body_bytes: usize) -> Self {
        Self {
            proxy_service: Arc::new(proxy_service),
            max_body_bytes,
        }
    }
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            proxy_service: Arc::clone(&self.proxy_service),
            max_body_bytes: self.max_body_bytes,
        }
    }
}
