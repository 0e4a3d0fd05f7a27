use std::path::PathBuf;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::handler::cgi::execute_cgi;
use crate::handler::static_files::serve_static;
use crate::handler::{RouteDecision, route};
use crate::http::line_reader::LineReader;
use crate::http::request::parse_request_line;
use crate::http::response::Response;
use crate::http::writer;

/// One request-processing pipeline, owning its stream for the whole
/// lifetime of the connection.
///
/// Generic over the stream type so tests can drive it with in-memory
/// duplex streams instead of TCP sockets.
pub struct Connection<S> {
    stream: S,
    document_root: PathBuf,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, document_root: PathBuf) -> Self {
        Self {
            stream,
            document_root,
        }
    }

    /// Runs the pipeline to completion: parse, route, dispatch, close.
    ///
    /// Exactly one request is served; there is no keep-alive. The stream
    /// is closed on every exit path, either by the explicit shutdown here
    /// or by being dropped when an error propagates out.
    pub async fn run(self) -> anyhow::Result<()> {
        let (read_half, mut write_half) = tokio::io::split(self.stream);
        let mut reader = LineReader::new(read_half);

        let Some(request) = parse_request_line(&mut reader, &self.document_root).await else {
            // Client closed before sending a request line.
            return Ok(());
        };

        let decision = route(&request.resolved_path, request.forces_execution()).await;
        tracing::debug!(
            method = request.method.as_str(),
            path = %request.raw_path,
            decision = ?decision,
            "Routed request"
        );

        match decision {
            RouteDecision::NotFound => {
                // Finish reading the request before responding; the
                // connection is not abandoned mid-protocol.
                reader.drain_headers().await;
                writer::send_response(&mut write_half, &Response::not_found()).await?;
            }
            RouteDecision::StaticFile(path) => {
                serve_static(&mut reader, &mut write_half, &path).await?;
            }
            RouteDecision::ExecuteProgram(path) => {
                execute_cgi(&mut reader, &mut write_half, &path, &request).await?;
            }
        }

        write_half.shutdown().await.ok();
        Ok(())
    }
}
