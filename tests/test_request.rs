use microhttp::http::request::{Method, Request, RequestBuilder};

fn request_with_headers(headers: &[&str]) -> Request {
    Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        query: vec![],
        body: vec![],
    }
}

#[test]
fn test_request_header_retrieval() {
    let req = request_with_headers(&["Host: example.com", "Content-Type: application/json"]);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_first_duplicate_wins() {
    let req = request_with_headers(&["X-Tag: a", "X-Tag: b"]);
    assert_eq!(req.header("X-Tag"), Some("a"));
}

#[test]
fn test_request_header_line_without_colon_is_skipped() {
    let req = request_with_headers(&["BrokenHeader", "Host: x"]);
    assert_eq!(req.header("BrokenHeader"), None);
    assert_eq!(req.header("Host"), Some("x"));
}

#[test]
fn test_request_query_param_case_insensitive() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/search")
        .query_param("Last", "10")
        .query_param("last", "20")
        .build()
        .unwrap();

    assert_eq!(req.query_param("LAST"), Some("10"));
    assert_eq!(req.query_param("missing"), None);
    assert_eq!(req.query_param_or("missing", "fallback"), "fallback");
    assert_eq!(req.query_param_or("last", "fallback"), "10");
}

#[test]
fn test_request_builder_defaults() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/messages")
        .header("Content-Length: 5")
        .body(b"hello".to_vec())
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.headers, vec!["Content-Length: 5"]);
    assert_eq!(req.body_text(), "hello");
}

#[test]
fn test_request_builder_rejects_missing_fields() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_builder_rejects_relative_path() {
    let result = RequestBuilder::new()
        .method(Method::GET)
        .path("index.html")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_method_round_trip_names() {
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::GET.as_str(), "GET");
    assert_eq!(Method::POST.to_string(), "POST");
    assert_eq!(Method::from_str("PATCH"), None);
}
