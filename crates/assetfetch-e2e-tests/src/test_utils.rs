//! Helpers for driving the fetcher against a local HTTP server.

use assetfetch_lib::table::{AssetEntry, AssetTable, BUILTIN_ASSETS};
use eyre::Result;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;
use tracing::Dispatch;
use url::Url;

/// Starts a server in a background thread answering `GET <path>` with the matching body and
/// 404 for anything else. Returns the base URL. The server runs until the process exits.
pub fn start_asset_server(bodies: HashMap<String, Vec<u8>>) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    let bodies = Arc::new(bodies);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let bodies = Arc::clone(&bodies);
            thread::spawn(move || handle(stream, &bodies));
        }
    });
    Url::parse(&format!("http://127.0.0.1:{port}/")).expect("base url")
}

fn handle(mut stream: TcpStream, bodies: &HashMap<String, Vec<u8>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = match bodies.get(path) {
        Some(body) => {
            let mut response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .into_bytes();
            response.extend_from_slice(body);
            response
        }
        None => b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
    };
    let _ = stream.write_all(&response);
    let _ = stream.flush();
}

/// A URL nothing is listening on: the port is bound and released straight away.
pub fn unreachable_url(path: &str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}/{path}")).expect("unreachable url")
}

/// Body served for the built-in destination `path`.
pub fn body_for(path: &str) -> Vec<u8> {
    format!("<asset src=\"{path}\">{}</asset>\n", "x".repeat(path.len() * 8)).into_bytes()
}

/// Server routes mirroring the built-in table layout: `/<destination>` serves `body_for`.
pub fn builtin_bodies() -> HashMap<String, Vec<u8>> {
    BUILTIN_ASSETS
        .iter()
        .map(|(path, _)| (format!("/{path}"), body_for(path)))
        .collect()
}

/// The built-in destinations, each sourced from `base_url` instead of its public host.
pub fn local_entries(base_url: &Url) -> Vec<AssetEntry> {
    BUILTIN_ASSETS
        .iter()
        .map(|(path, _)| AssetEntry {
            path: PathBuf::from(path),
            url: base_url.join(path).expect("asset url"),
        })
        .collect()
}

pub fn local_table(base_url: &Url) -> AssetTable {
    AssetTable::new(local_entries(base_url)).expect("valid table")
}

pub fn setup_test_environment() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

/// Writes a JSON config for `entries` into `dir` and returns its path.
pub fn write_config(dir: &TempDir, entries: &[AssetEntry]) -> Result<PathBuf> {
    let config_path = dir.path().join("assets.json");
    let config = serde_json::json!({
        "root": "site",
        "assets": entries,
    });
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    Ok(config_path)
}

/// In-memory log sink for asserting on what an operator would see on stderr.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// A plain-text fmt subscriber at `info` that writes into this buffer.
    pub fn dispatch(&self) -> Dispatch {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("assetfetch_lib=info")
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        Dispatch::new(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
