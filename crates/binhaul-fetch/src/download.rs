//! Single-artifact HTTP transfer.

use std::io;
use std::path::Path;

use reqwest::{Client, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::stream::ChunkReader;
use crate::tracker::Tracker;

/// In-flight chunks between the network pump and a blocking consumer.
/// Bounds the memory held for a stalled unpack stage.
const CHANNEL_CAPACITY: usize = 8;

/// Issue the GET request for `url`. Only HTTP 200 yields a transfer; every
/// other status is terminal, as is any transport fault. No timeout is
/// applied: a hung response hangs the invocation, and the invoking package
/// manager decides whether to rerun.
pub async fn fetch(url: &str) -> Result<Download> {
    info!("downloading from {url}");

    let response = Client::new()
        .get(url)
        .send()
        .await
        .map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        debug!("download refused with status {status}");
        return Err(Error::Status {
            status: status.as_u16(),
        });
    }

    Ok(Download {
        url: url.to_string(),
        response,
    })
}

/// A verified (HTTP 200) response, consumed by exactly one transfer
/// strategy.
pub struct Download {
    url: String,
    response: reqwest::Response,
}

impl Download {
    /// Total size advertised by the server, when known.
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Stream the body straight into `dest`, flushed before returning.
    pub async fn save_to(mut self, dest: &Path) -> Result<()> {
        let tracker = Tracker::new(self.content_length());

        let mut file = File::create(dest).await.map_err(|source| Error::Write {
            path: dest.to_path_buf(),
            source,
        })?;

        while let Some(chunk) = self.chunk().await? {
            file.write_all(&chunk).await.map_err(|source| Error::Write {
                path: dest.to_path_buf(),
                source,
            })?;
            tracker.step(chunk.len() as u64);
        }

        file.flush().await.map_err(|source| Error::Write {
            path: dest.to_path_buf(),
            source,
        })?;

        tracker.finish();
        Ok(())
    }

    /// Bridge the body into a blocking reader for the unpack stages.
    ///
    /// A bounded channel carries the chunks; when the consumer stalls, the
    /// pump suspends and the network read throttles with it. Transport
    /// faults mid-stream surface as read errors on the consumer side,
    /// carrying the request URL.
    pub fn into_reader(mut self) -> ChunkReader {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

        tokio::spawn(async move {
            let tracker = Tracker::new(self.response.content_length());
            loop {
                match self.chunk().await {
                    Ok(Some(chunk)) => {
                        tracker.step(chunk.len() as u64);
                        if tx.send(Ok(chunk)).await.is_err() {
                            // consumer dropped the reader, likely a failed
                            // unpack stage; stop pulling
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(err) => {
                        let _ = tx.send(Err(io::Error::other(err))).await;
                        break;
                    }
                }
            }
            tracker.finish();
        });

        ChunkReader::new(rx)
    }

    async fn chunk(&mut self) -> Result<Option<bytes::Bytes>> {
        self.response.chunk().await.map_err(|source| Error::Request {
            url: self.url.clone(),
            source,
        })
    }
}
