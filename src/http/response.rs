/// HTTP status codes the server can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A canned response: status plus a fixed HTML body.
///
/// The body end is signalled by closing the connection, so responses never
/// carry a `Content-Length` header.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub body: &'static [u8],
}

impl Response {
    /// 400, sent when a POST arrives without a `Content-Length` header.
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BadRequest,
            body: b"<p>Your browser sent a request this server could not \
                    understand, such as a POST without a Content-Length.</p>\r\n",
        }
    }

    /// 404, sent when the resolved path does not exist or cannot be opened.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            body: b"<html><title>Not Found</title>\r\n<body><p>The server could \
                    not fulfill your request because the resource specified is \
                    unavailable or nonexistent.</p>\r\n</body></html>\r\n",
        }
    }

    /// 500, sent when a CGI subprocess could not be started.
    pub fn cannot_execute() -> Self {
        Self {
            status: StatusCode::InternalServerError,
            body: b"<p>Error prohibited CGI execution.</p>\r\n",
        }
    }
}
