// Shared helpers for the integration tests: a local API server and a log sink.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};

use warp::http::{Method, Response};
use warp::hyper::body::Bytes;
use warp::path::FullPath;
use warp::Filter;

use wc::{ClientConfig, GroupStageClient, Origin};

/// A request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body_len: usize,
}

type Responder = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

/// Minimal stand-in for the match API, bound to an ephemeral port on 127.0.0.1.
pub struct MockApi {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    /// Every request gets the same status and body.
    pub fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::with_responder(move |_path| (status, body.clone()))
    }

    /// The response is chosen from the request path.
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let responder: Responder = Arc::new(responder);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let route = warp::method()
            .and(warp::path::full())
            .and(
                warp::query::raw()
                    .map(|query: String| Some(query))
                    .or(warp::any().map(|| None))
                    .unify(),
            )
            .and(warp::body::bytes())
            .map(
                move |method: Method, path: FullPath, query: Option<String>, body: Bytes| {
                    recorded.lock().unwrap().push(RecordedRequest {
                        method,
                        path: path.as_str().to_string(),
                        query,
                        body_len: body.len(),
                    });

                    let (status, body) = responder(path.as_str());
                    Response::builder()
                        .status(status)
                        .header("content-type", "application/json")
                        .body(body)
                },
            );

        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { addr, requests }
    }

    pub fn origin(&self) -> Origin {
        Origin::parse(&format!("http://{}", self.addr)).unwrap()
    }

    pub fn client(&self) -> GroupStageClient {
        GroupStageClient::new(&ClientConfig::new(self.origin())).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// Installs the capturing logger once per test binary.
pub fn init_logging() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Info);
    });
}

/// Captured log lines (info and above) that mention `needle` anywhere.
pub fn logged_mentions(needle: &str) -> Vec<String> {
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}

/// Captured log lines starting with `prefix`. Tests use unique group names
/// so parallel tests do not see each other's lines.
pub fn logged_lines(prefix: &str) -> Vec<String> {
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.starts_with(prefix))
        .cloned()
        .collect()
}
