use legalyze::domain::{Action, ProxyRequest, ProxyResponse};

#[test]
fn given_request_json_when_deserializing_then_reads_prompt_and_action() {
    let request: ProxyRequest =
        serde_json::from_str(r#"{"prompt":"What is the rent?","action":"qa"}"#).unwrap();

    assert_eq!(request, ProxyRequest::new("What is the rent?", Action::Qa));
}

#[test]
fn given_unknown_action_when_deserializing_request_then_fails() {
    let result = serde_json::from_str::<ProxyRequest>(r#"{"prompt":"x","action":"delete"}"#);

    assert!(result.is_err());
}

#[test]
fn given_success_response_when_serializing_then_only_response_key() {
    let json = serde_json::to_string(&ProxyResponse::success("ok")).unwrap();

    assert_eq!(json, r#"{"response":"ok"}"#);
}

#[test]
fn given_failure_response_when_serializing_then_only_error_key() {
    let json = serde_json::to_string(&ProxyResponse::failure("boom")).unwrap();

    assert_eq!(json, r#"{"error":"boom"}"#);
}

#[test]
fn given_body_with_both_keys_when_deserializing_then_rejects() {
    let result = serde_json::from_str::<ProxyResponse>(r#"{"response":"ok","error":"boom"}"#);

    assert!(result.is_err());
}

#[test]
fn given_error_body_when_converting_then_returns_err() {
    let response: ProxyResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();

    assert_eq!(response.into_result(), Err("boom".to_string()));
}
