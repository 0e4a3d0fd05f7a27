use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Upper bound on a single protocol line, content plus terminator.
pub const LINE_MAX: usize = 1024;

/// Byte-at-a-time line reader with a one-byte pushback.
///
/// Header lines on the wire may end in LF, CRLF, or a bare CR; all three
/// are normalized to a single logical terminator. Detecting a bare CR
/// requires looking at the byte after it, so the reader keeps a one-byte
/// pushback slot: a peeked byte that turned out not to be LF stays pending
/// and is returned by the next read. This is also why reads are one byte
/// at a time rather than batched.
pub struct LineReader<R> {
    inner: R,
    pushback: Option<u8>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: None,
        }
    }

    /// Reads one byte, honoring any pending pushback byte.
    ///
    /// Returns `None` once the stream is closed. Request-body forwarding
    /// must go through this method: after a bare-CR line ending, the first
    /// body byte may be sitting in the pushback slot.
    pub async fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        if let Some(b) = self.pushback.take() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf).await? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }

    /// Looks at the next byte without consuming it.
    async fn peek_byte(&mut self) -> std::io::Result<Option<u8>> {
        if self.pushback.is_none() {
            let mut buf = [0u8; 1];
            if self.inner.read(&mut buf).await? > 0 {
                self.pushback = Some(buf[0]);
            }
        }
        Ok(self.pushback)
    }

    /// Reads one logical line, returning its content without the terminator.
    ///
    /// Stops at the terminator, after `max - 1` content bytes (overflow
    /// bytes stay unread), or when the stream closes or errors mid-line;
    /// the latter two act as an implicit terminator. An empty result on a
    /// live stream is the blank line that ends a header section.
    pub async fn read_line(&mut self, max: usize) -> BytesMut {
        let mut line = BytesMut::with_capacity(64);
        while line.len() + 1 < max {
            let b = match self.read_byte().await {
                Ok(Some(b)) => b,
                Ok(None) | Err(_) => break,
            };
            match b {
                b'\n' => break,
                b'\r' => {
                    // CRLF is one terminator. A lone CR also terminates,
                    // and the peeked byte stays pending for the next read.
                    if let Ok(Some(b'\n')) = self.peek_byte().await {
                        self.pushback = None;
                    }
                    break;
                }
                other => line.put_u8(other),
            }
        }
        line
    }

    /// Reads and discards header lines up to and including the blank line
    /// that ends the header section.
    pub async fn drain_headers(&mut self) {
        while !self.read_line(LINE_MAX).await.is_empty() {}
    }
}
