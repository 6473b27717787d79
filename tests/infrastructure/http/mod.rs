mod proxy_http_client_test;
