use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.0";
const SERVER_STRING: &str = "Server: minihttpd/0.1.0";

/// Serializes the fixed header block: status line, server identifier,
/// content type, blank line. No `Content-Length`, ever.
pub fn serialize_header_block(status: StatusCode) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());
    buf.extend_from_slice(SERVER_STRING.as_bytes());
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(b"Content-Type: text/html\r\n");
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes a complete canned response: header block plus body.
pub async fn send_response<W: AsyncWrite + Unpin>(
    stream: &mut W,
    response: &Response,
) -> std::io::Result<()> {
    stream
        .write_all(&serialize_header_block(response.status))
        .await?;
    stream.write_all(response.body).await?;
    stream.flush().await
}

/// Writes the header block alone; used before streaming a file body.
pub async fn send_header_block<W: AsyncWrite + Unpin>(
    stream: &mut W,
    status: StatusCode,
) -> std::io::Result<()> {
    stream.write_all(&serialize_header_block(status)).await?;
    stream.flush().await
}

/// Writes a bare status line with no headers. The CGI path uses this:
/// the subprocess is expected to produce the remaining headers itself.
pub async fn send_status_line<W: AsyncWrite + Unpin>(
    stream: &mut W,
    status: StatusCode,
) -> std::io::Result<()> {
    let line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    stream.write_all(line.as_bytes()).await?;
    stream.flush().await
}
