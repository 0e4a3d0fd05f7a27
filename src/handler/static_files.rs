use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::line_reader::LineReader;
use crate::http::response::{Response, StatusCode};
use crate::http::writer;

/// Chunk size for streaming file contents.
const CHUNK_SIZE: usize = 1024;

/// Streams a file back to the client.
///
/// The remaining request headers are read and discarded first, so the
/// whole request has been consumed before the response starts. A file
/// that cannot be opened turns into a 404. The body is streamed in fixed
/// chunks until end of file; its end is signalled by connection close,
/// not by a `Content-Length` header.
pub async fn serve_static<R, W>(
    reader: &mut LineReader<R>,
    stream: &mut W,
    path: &Path,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    reader.drain_headers().await;

    let mut file = match File::open(path).await {
        Ok(f) => f,
        Err(_) => {
            return writer::send_response(stream, &Response::not_found()).await;
        }
    };

    writer::send_header_block(stream, StatusCode::Ok).await?;

    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&chunk[..n]).await?;
    }
    stream.flush().await
}
