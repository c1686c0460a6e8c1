//! Request and response views consumed by the cache.
//!
//! The cache only needs a handful of accessors from the host's HTTP types.
//! [`Request`] and [`Response`] describe those accessors so any framework
//! can be adapted with a thin impl; [`PageRequest`] and [`PageResponse`]
//! are owned implementations used by the CLI and tests.

/// Canonical GET method token.
pub const METHOD_GET: &str = "GET";

/// The only status code considered cacheable.
pub const STATUS_OK: u16 = 200;

/// Read-only view of an incoming request.
pub trait Request {
    /// Method token in canonical upper-case form, e.g. `GET`.
    fn method(&self) -> &str;

    /// Raw query string without the leading `?`.
    fn query_string(&self) -> Option<&str>;

    /// Path component, always starting with `/`.
    fn path_info(&self) -> &str;
}

/// Read-only view of a produced response.
pub trait Response {
    /// Numeric status code.
    fn status_code(&self) -> u16;

    /// Response body bytes.
    fn content(&self) -> &[u8];
}

/// An owned request built from a method and a request URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    method: String,
    path: String,
    query: Option<String>,
}

impl PageRequest {
    /// Create a request from a method and a URI such as `/blog?page=2`.
    ///
    /// The fragment is dropped, an empty query string is treated as absent,
    /// and a path without a leading slash gets one.
    pub fn new(method: impl Into<String>, uri: &str) -> Self {
        let uri = uri.split_once('#').map_or(uri, |(before, _)| before);
        let (path, query) = match uri.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (uri, None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            method: method.into(),
            path,
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    /// Create a GET request for the given URI.
    pub fn get(uri: &str) -> Self {
        Self::new(METHOD_GET, uri)
    }
}

impl Request for PageRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn query_string(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn path_info(&self) -> &str {
        &self.path
    }
}

/// An owned response: status code plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    status: u16,
    body: Vec<u8>,
}

impl PageResponse {
    /// Create a response with an explicit status code.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Create a `200 OK` response.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(STATUS_OK, body)
    }
}

impl Response for PageResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn content(&self) -> &[u8] {
        &self.body
    }
}
