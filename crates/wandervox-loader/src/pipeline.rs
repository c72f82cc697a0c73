//! The fetch/inflate worker pipeline.

use std::io::{Read, Write};
use std::thread;

use crossbeam::channel::{self, Receiver, TryRecvError};
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use tracing::{debug, warn};

use crate::error::LoadError;

/// Where a world payload comes from.
#[derive(Debug, Clone)]
pub enum WorldSource {
    /// Fetch over HTTP(S).
    Url(String),
    /// Raw bytes already in hand, e.g. from a dropped file.
    Bytes(Vec<u8>),
}

/// Runs the off-tick stages of world loading.
///
/// Each [`WorldLoader::begin`] spawns its own short-lived worker thread that
/// fetches (URL sources only) and inflates, then parks the result in a
/// one-slot channel. The tick loop drains results with the non-blocking
/// [`WorldLoader::poll`]. Overlapping loads are deliberately not serialized:
/// every call gets its own worker and results apply in arrival order.
#[derive(Debug, Default)]
pub struct WorldLoader {
    pending: Vec<Receiver<Result<Vec<u8>, LoadError>>>,
}

impl WorldLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading from a source. Never blocks.
    pub fn begin(&mut self, source: WorldSource) {
        let (tx, rx) = channel::bounded(1);
        let worker_tx = tx.clone();
        let spawned = thread::Builder::new()
            .name("world-loader".to_string())
            .spawn(move || {
                let _ = worker_tx.send(run_pipeline(source));
            });
        if let Err(err) = spawned {
            warn!("failed to spawn world loader thread: {err}");
            let _ = tx.send(Err(LoadError::Network(err.to_string())));
        }
        self.pending.push(rx);
    }

    /// Collect every finished load, in arrival order. Never blocks.
    pub fn poll(&mut self) -> Vec<Result<Vec<u8>, LoadError>> {
        let mut done = Vec::new();
        self.pending.retain(|rx| match rx.try_recv() {
            Ok(outcome) => {
                done.push(outcome);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                done.push(Err(LoadError::Network(
                    "world loader worker exited without a result".to_string(),
                )));
                false
            }
        });
        done
    }

    /// Number of loads still running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}

fn run_pipeline(source: WorldSource) -> Result<Vec<u8>, LoadError> {
    let raw = match source {
        WorldSource::Url(url) => fetch(&url)?,
        WorldSource::Bytes(bytes) => bytes,
    };
    let payload = inflate(&raw)?;
    debug!(
        compressed = raw.len(),
        inflated = payload.len(),
        "world payload ready"
    );
    Ok(payload)
}

/// Fetch a compressed world over HTTP. Redirects are followed by the client;
/// whatever non-success status remains fails the load, carrying the status.
fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = ureq::get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => LoadError::Network(status.to_string()),
        ureq::Error::Transport(transport) => LoadError::Network(transport.to_string()),
    })?;
    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|err| LoadError::Network(err.to_string()))?;
    Ok(bytes)
}

/// Inflate a raw-DEFLATE byte buffer.
pub fn inflate(bytes: &[u8]) -> Result<Vec<u8>, LoadError> {
    let mut payload = Vec::new();
    DeflateDecoder::new(bytes)
        .read_to_end(&mut payload)
        .map_err(|err| LoadError::Decompression(err.to_string()))?;
    Ok(payload)
}

/// Compress a payload the way worlds are stored on the wire. The inverse of
/// [`inflate`], used by world-authoring tools and tests.
pub fn deflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::time::{Duration, Instant};

    /// Serve one canned HTTP response on a local port.
    fn stub_server(response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0_u8; 1024];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(&response);
            }
        });
        format!("http://{addr}/world.bin")
    }

    fn drain(loader: &mut WorldLoader) -> Result<Vec<u8>, LoadError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let mut done = loader.poll();
            if let Some(outcome) = done.pop() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "load did not finish in time");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn deflate_inflate_roundtrip() {
        let payload = b"a world of voxels".to_vec();
        let compressed = deflate(&payload).unwrap();
        assert_eq!(inflate(&compressed).unwrap(), payload);
    }

    #[test]
    fn inflate_rejects_garbage() {
        let err = inflate(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, LoadError::Decompression(_)));
    }

    #[test]
    fn bytes_source_skips_the_fetch_stage() {
        let payload = b"dropped on the window".to_vec();
        let mut loader = WorldLoader::new();
        loader.begin(WorldSource::Bytes(deflate(&payload).unwrap()));
        assert_eq!(loader.in_flight(), 1);
        assert_eq!(drain(&mut loader).unwrap(), payload);
        assert_eq!(loader.in_flight(), 0);
    }

    #[test]
    fn url_source_fetches_and_inflates() {
        let payload = b"fetched from afar".to_vec();
        let body = deflate(&payload).unwrap();
        let mut response = format!(
            "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(&body);

        let mut loader = WorldLoader::new();
        loader.begin(WorldSource::Url(stub_server(response)));
        assert_eq!(drain(&mut loader).unwrap(), payload);
    }

    #[test]
    fn missing_world_surfaces_the_status() {
        let response =
            b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n".to_vec();
        let mut loader = WorldLoader::new();
        loader.begin(WorldSource::Url(stub_server(response)));
        let err = drain(&mut loader).unwrap_err();
        assert_eq!(err, LoadError::Network("404".to_string()));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let mut loader = WorldLoader::new();
        // A listener that is immediately dropped: connection refused.
        let url = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}/world.bin", listener.local_addr().unwrap())
        };
        loader.begin(WorldSource::Url(url));
        assert!(matches!(drain(&mut loader), Err(LoadError::Network(_))));
    }

    #[test]
    fn poll_with_nothing_pending_is_empty() {
        let mut loader = WorldLoader::new();
        assert!(loader.poll().is_empty());
        assert_eq!(loader.in_flight(), 0);
    }
}
