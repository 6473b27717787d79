mod http;
mod observability;
