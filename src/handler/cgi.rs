use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

use crate::http::line_reader::{LINE_MAX, LineReader};
use crate::http::request::{Method, ParsedRequest};
use crate::http::response::{Response, StatusCode};
use crate::http::writer;

/// Chunk size for streaming the subprocess's output.
const CHUNK_SIZE: usize = 1024;

/// Runs the resolved path as a CGI program and streams its output back.
///
/// For GET the remaining headers are drained; for POST they are scanned
/// for `Content-Length`, and its absence aborts with a 400 before any
/// subprocess exists. The 200 status line goes out before the spawn is
/// attempted, so a spawn failure produces a full 500 response after an
/// already-sent 200 line.
///
/// The subprocess gets `REQUEST_METHOD`, plus `QUERY_STRING` for GET or
/// `CONTENT_LENGTH` for POST, and talks over piped stdin/stdout. Exactly
/// `Content-Length` body bytes are forwarded into it, one byte at a time
/// through the line reader (a pending lookahead byte belongs to the
/// body). The child is waited on before returning, on every exit path.
/// Its exit status is not inspected; whatever it wrote is forwarded.
pub async fn execute_cgi<R, W>(
    reader: &mut LineReader<R>,
    stream: &mut W,
    path: &Path,
    request: &ParsedRequest,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let content_length = match request.method {
        Method::Post => match scan_content_length(reader).await {
            Some(n) => Some(n),
            None => {
                return writer::send_response(stream, &Response::bad_request()).await;
            }
        },
        _ => {
            reader.drain_headers().await;
            None
        }
    };

    // Point of no return for the status code.
    writer::send_status_line(stream, StatusCode::Ok).await?;

    let mut command = Command::new(path);
    command.stdin(Stdio::piped()).stdout(Stdio::piped());
    command.env("REQUEST_METHOD", request.method.as_str());
    match request.method {
        Method::Get => {
            command.env(
                "QUERY_STRING",
                request.query_string.as_deref().unwrap_or(""),
            );
        }
        Method::Post => {
            if let Some(n) = content_length {
                command.env("CONTENT_LENGTH", n.to_string());
            }
        }
        Method::Other(_) => {}
    }

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::error!("Failed to spawn CGI program {:?}: {}", path, e);
            return writer::send_response(stream, &Response::cannot_execute()).await;
        }
    };

    let mut stdin = child.stdin.take();
    let mut stdout = child.stdout.take();

    let io_result: std::io::Result<()> = async {
        if let (Some(stdin), Some(n)) = (stdin.as_mut(), content_length) {
            for _ in 0..n {
                match reader.read_byte().await? {
                    Some(b) => stdin.write_all(&[b]).await?,
                    None => break,
                }
            }
        }
        // Close the write end so the program sees EOF on its stdin.
        drop(stdin.take());

        if let Some(stdout) = stdout.as_mut() {
            let mut chunk = [0u8; CHUNK_SIZE];
            loop {
                let n = stdout.read(&mut chunk).await?;
                if n == 0 {
                    break;
                }
                stream.write_all(&chunk[..n]).await?;
            }
        }
        stream.flush().await
    }
    .await;

    // Reap even when the forwarding above failed; a run of this function
    // must never leave a zombie behind.
    let _ = child.wait().await;

    io_result
}

/// Drains the header section, returning the value of the last
/// `Content-Length` header seen, or `None` if there was none.
async fn scan_content_length<R: AsyncRead + Unpin>(
    reader: &mut LineReader<R>,
) -> Option<usize> {
    let mut content_length = None;
    loop {
        let line = reader.read_line(LINE_MAX).await;
        if line.is_empty() {
            return content_length;
        }
        if line.len() >= 15 && line[..15].eq_ignore_ascii_case(b"content-length:") {
            let value = String::from_utf8_lossy(&line[15..]);
            // An unparseable value counts as 0, not as a missing header.
            content_length = Some(value.trim().parse().unwrap_or(0));
        }
    }
}
