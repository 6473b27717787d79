mod proxy_http_client;

pub use proxy_http_client::HttpProxyClient;
