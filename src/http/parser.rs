use crate::http::error::ParseError;
use crate::http::request::{Method, Request};
use crate::http::scanner;

const REQUEST_LINE_DELIMITER: &[u8] = b"\r\n";
pub const HEADERS_DELIMITER: &[u8] = b"\r\n\r\n";

/// Everything known about a request once its head has been scanned.
///
/// The body is not part of the head; `body_start` and `content_length` tell
/// the caller where it begins in the buffer and how many bytes to collect.
#[derive(Debug)]
pub struct RequestHead {
    pub method: Method,
    pub path: String,
    pub version: String,
    pub headers: Vec<String>,
    pub query: Vec<(String, String)>,
    /// Offset of the first byte after the header block terminator
    pub body_start: usize,
    /// Body length to read; always `None` for GET
    pub content_length: Option<usize>,
}

impl RequestHead {
    pub fn into_request(self, body: Vec<u8>) -> Request {
        Request {
            method: self.method,
            path: self.path,
            version: self.version,
            headers: self.headers,
            query: self.query,
            body,
        }
    }
}

/// Parses the request line and header block out of the bytes read so far.
///
/// `buf` is the bounded prefix of the connection input; nothing past it is
/// looked at.
pub fn parse_head(buf: &[u8]) -> Result<RequestHead, ParseError> {
    let read = buf.len();

    // Request line
    let request_line_end = scanner::find(buf, REQUEST_LINE_DELIMITER, 0, read)
        .ok_or(ParseError::MalformedRequestLine)?;

    let request_line = std::str::from_utf8(&buf[..request_line_end])
        .map_err(|_| ParseError::MalformedRequestLine)?;

    let mut parts: Vec<&str> = request_line.split(' ').collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    let &[method_str, target, version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    let method = Method::from_str(method_str)
        .ok_or_else(|| ParseError::UnsupportedMethod(method_str.to_string()))?;

    if !target.starts_with('/') {
        return Err(ParseError::MalformedPath(target.to_string()));
    }

    // Header block. The terminator may start at the request line's own CRLF
    // when there are no header lines at all.
    let headers_start = request_line_end + REQUEST_LINE_DELIMITER.len();
    let headers_end = scanner::find(buf, HEADERS_DELIMITER, request_line_end, read)
        .ok_or(ParseError::MalformedHeaders)?;

    let headers = if headers_end < headers_start {
        Vec::new()
    } else {
        String::from_utf8_lossy(&buf[headers_start..headers_end])
            .split("\r\n")
            .map(str::to_string)
            .collect()
    };

    let path = target.to_string();
    let query = query_pairs(target);

    let content_length = match method {
        Method::GET => None,
        _ => content_length(&headers)?,
    };

    tracing::trace!(
        method = %method,
        path = %path,
        headers = headers.len(),
        content_length = ?content_length,
        "Parsed request head"
    );

    Ok(RequestHead {
        method,
        path,
        version: version.to_string(),
        headers,
        query,
        body_start: headers_end + HEADERS_DELIMITER.len(),
        content_length,
    })
}

/// Extracts the body length from raw header lines.
///
/// The first line starting with `Content-Length` wins; its value is whatever
/// follows the first space, trimmed. A missing header is not an error.
pub fn content_length(headers: &[String]) -> Result<Option<usize>, ParseError> {
    let Some(line) = headers.iter().find(|h| h.starts_with("Content-Length")) else {
        return Ok(None);
    };

    let value = line
        .split_once(' ')
        .map(|(_, v)| v.trim())
        .ok_or_else(|| ParseError::InvalidContentLength(line.clone()))?;

    value
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ParseError::InvalidContentLength(value.to_string()))
}

/// Decodes the query string of a request target into ordered pairs.
fn query_pairs(target: &str) -> Vec<(String, String)> {
    match target.split_once('?') {
        Some((_, query)) => url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect(),
        None => Vec::new(),
    }
}
