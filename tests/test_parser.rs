use microhttp::http::error::ParseError;
use microhttp::http::parser::{content_length, parse_head};
use microhttp::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let head = parse_head(req).unwrap();

    assert_eq!(head.method, Method::GET);
    assert_eq!(head.path, "/");
    assert_eq!(head.version, "HTTP/1.1");
    assert_eq!(head.headers, vec!["Host: example.com"]);
    assert_eq!(head.body_start, req.len());
    assert_eq!(head.content_length, None);
}

#[test]
fn test_parse_post_request_reports_content_length() {
    let req = b"POST /messages HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
    let head = parse_head(req).unwrap();

    assert_eq!(head.method, Method::POST);
    assert_eq!(head.content_length, Some(5));
    assert_eq!(&req[head.body_start..], b"hello");
}

#[test]
fn test_parse_headers_keep_order_and_duplicates() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\nX-Dup: 1\r\nX-Dup: 2\r\n\r\n";
    let head = parse_head(req).unwrap();

    assert_eq!(
        head.headers,
        vec!["Host: example.com", "Accept: */*", "X-Dup: 1", "X-Dup: 2"]
    );
}

#[test]
fn test_parse_no_headers() {
    let req = b"GET /index.html HTTP/1.1\r\n\r\n";
    let head = parse_head(req).unwrap();

    assert!(head.headers.is_empty());
    assert_eq!(head.path, "/index.html");
}

#[test]
fn test_parse_query_string() {
    let req = b"GET /search?q=rust+lang&Page=2&name=%D0%BC%D0%B8%D1%80 HTTP/1.1\r\n\r\n";
    let head = parse_head(req).unwrap();

    assert_eq!(head.path, "/search?q=rust+lang&Page=2&name=%D0%BC%D0%B8%D1%80");
    assert_eq!(
        head.query,
        vec![
            ("q".to_string(), "rust lang".to_string()),
            ("Page".to_string(), "2".to_string()),
            ("name".to_string(), "мир".to_string()),
        ]
    );
}

#[test]
fn test_parse_request_line_without_terminator() {
    let result = parse_head(b"GET / HTTP/1.1");
    assert_eq!(result.unwrap_err(), ParseError::MalformedRequestLine);
}

#[test]
fn test_parse_request_line_wrong_token_count() {
    for line in [
        &b"GET /x\r\n\r\n"[..],
        b"GET / HTTP/1.1 extra\r\n\r\n",
        b"GET  / HTTP/1.1\r\n\r\n",
        b"\r\n\r\n",
    ] {
        assert_eq!(
            parse_head(line).unwrap_err(),
            ParseError::MalformedRequestLine,
            "input: {:?}",
            String::from_utf8_lossy(line)
        );
    }
}

#[test]
fn test_parse_unsupported_method() {
    for method in ["PUT", "DELETE", "get", "HEAD"] {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method);
        assert_eq!(
            parse_head(req.as_bytes()).unwrap_err(),
            ParseError::UnsupportedMethod(method.to_string())
        );
    }
}

#[test]
fn test_parse_path_must_start_with_slash() {
    let result = parse_head(b"GET index.html HTTP/1.1\r\n\r\n");
    assert_eq!(
        result.unwrap_err(),
        ParseError::MalformedPath("index.html".to_string())
    );
}

#[test]
fn test_parse_missing_header_terminator() {
    let result = parse_head(b"GET / HTTP/1.1\r\nHost: example.com\r\n");
    assert_eq!(result.unwrap_err(), ParseError::MalformedHeaders);
}

#[test]
fn test_parse_get_ignores_content_length() {
    let req = b"GET / HTTP/1.1\r\nContent-Length: abc\r\n\r\n";
    let head = parse_head(req).unwrap();

    assert_eq!(head.content_length, None);
}

#[test]
fn test_parse_post_invalid_content_length() {
    let req = b"POST /messages HTTP/1.1\r\nContent-Length: five\r\n\r\n";
    assert_eq!(
        parse_head(req).unwrap_err(),
        ParseError::InvalidContentLength("five".to_string())
    );

    let req = b"POST /messages HTTP/1.1\r\nContent-Length: -1\r\n\r\n";
    assert!(matches!(
        parse_head(req),
        Err(ParseError::InvalidContentLength(_))
    ));
}

#[test]
fn test_parse_post_without_content_length() {
    let req = b"POST /messages HTTP/1.1\r\nHost: x\r\n\r\n";
    let head = parse_head(req).unwrap();

    assert_eq!(head.content_length, None);
}

#[test]
fn test_content_length_first_match_wins() {
    let headers = vec![
        "Content-Length: 3".to_string(),
        "Content-Length: 10".to_string(),
    ];
    assert_eq!(content_length(&headers), Ok(Some(3)));
}

#[test]
fn test_content_length_value_is_trimmed() {
    let headers = vec!["Content-Length:   42  ".to_string()];
    assert_eq!(content_length(&headers), Ok(Some(42)));
}
