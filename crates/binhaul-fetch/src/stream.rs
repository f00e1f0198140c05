//! Async-to-blocking byte stream bridge.

use std::io::{self, Read};

use bytes::{Buf, Bytes};
use tokio::sync::mpsc::Receiver;

/// Blocking reader over a bounded channel of response chunks.
///
/// The channel bound is the backpressure boundary: while the consumer
/// stalls, the sending side suspends and stops pulling bytes off the
/// network. Must be consumed on a blocking thread
/// (`tokio::task::spawn_blocking`), never inside the async runtime.
pub struct ChunkReader {
    rx: Receiver<io::Result<Bytes>>,
    current: Bytes,
}

impl ChunkReader {
    pub(crate) fn new(rx: Receiver<io::Result<Bytes>>) -> Self {
        Self {
            rx,
            current: Bytes::new(),
        }
    }
}

impl Read for ChunkReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.current.is_empty() {
            match self.rx.blocking_recv() {
                Some(Ok(chunk)) => self.current = chunk,
                Some(Err(err)) => return Err(err),
                None => return Ok(0),
            }
        }

        let len = buf.len().min(self.current.len());
        buf[..len].copy_from_slice(&self.current[..len]);
        self.current.advance(len);
        Ok(len)
    }
}
