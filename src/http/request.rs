use std::path::{Path, PathBuf};

use tokio::io::AsyncRead;

use crate::http::line_reader::{LINE_MAX, LineReader};

/// Upper bound on the method and URL tokens; bytes past it are dropped.
const TOKEN_MAX: usize = 254;

/// Request method. GET and POST are the only methods with defined routing;
/// anything else is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other(String),
}

impl Method {
    /// Case-insensitive match against GET / POST.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("GET") {
            Method::Get
        } else if token.eq_ignore_ascii_case("POST") {
            Method::Post
        } else {
            Method::Other(token.to_string())
        }
    }

    /// The method as it goes into the `REQUEST_METHOD` CGI variable.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Other(token) => token,
        }
    }
}

/// One parsed request line. Built once per connection, immutable after.
#[derive(Debug, Clone)]
pub struct ParsedRequest {
    pub method: Method,
    /// URL path after query extraction (e.g. `/cgi-bin/echo`).
    pub raw_path: String,
    /// Query string for a GET whose URL contained `?`.
    pub query_string: Option<String>,
    /// Document root joined with `raw_path`; a trailing `/` gets
    /// `index.html` appended.
    pub resolved_path: PathBuf,
}

impl ParsedRequest {
    /// POST, or a GET that carried a query string, is routed to CGI
    /// execution no matter what the file's permission bits say.
    pub fn forces_execution(&self) -> bool {
        self.method == Method::Post || self.query_string.is_some()
    }
}

/// Reads and parses the request line.
///
/// Returns `None` when the line is empty, which happens when the client
/// closed the connection before sending anything; the caller should close
/// without responding.
///
/// Path resolution is plain string concatenation of the document root and
/// the URL path. There is no traversal sanitization: a path containing
/// `..` segments escapes the root.
pub async fn parse_request_line<R: AsyncRead + Unpin>(
    reader: &mut LineReader<R>,
    document_root: &Path,
) -> Option<ParsedRequest> {
    let line = reader.read_line(LINE_MAX).await;
    if line.is_empty() {
        return None;
    }

    let mut tokens = line[..]
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty());

    let method_token = token_to_string(tokens.next().unwrap_or(b""));
    let url = token_to_string(tokens.next().unwrap_or(b""));
    let method = Method::from_token(&method_token);

    // Only a GET URL is scanned for a query string.
    let (raw_path, query_string) = if method == Method::Get {
        match url.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (url, None),
        }
    } else {
        (url, None)
    };

    let mut resolved = format!("{}{}", document_root.display(), raw_path);
    if resolved.ends_with('/') {
        resolved.push_str("index.html");
    }

    Some(ParsedRequest {
        method,
        raw_path,
        query_string,
        resolved_path: PathBuf::from(resolved),
    })
}

/// Bounds a token at `TOKEN_MAX` bytes; overflow is dropped, not an error.
fn token_to_string(token: &[u8]) -> String {
    let token = &token[..token.len().min(TOKEN_MAX)];
    String::from_utf8_lossy(token).into_owned()
}
