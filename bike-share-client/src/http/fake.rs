//! Recording transport for unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::client::Transport;
use super::error::HttpError;

/// One request seen by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Recorded {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport that records every request and answers with a fixed result.
pub struct RecordingTransport {
    response: Mutex<Result<String, u16>>,
    delay: Duration,
    requests: Mutex<Vec<Recorded>>,
}

impl RecordingTransport {
    /// Answer every request with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            response: Mutex::new(Ok(body.into())),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with a non-200 `status`.
    pub fn status(status: u16) -> Self {
        Self {
            response: Mutex::new(Err(status)),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn respond_with(&self, response: Result<String, u16>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, path: &str, params: &[(&str, String)]) {
        self.requests.lock().unwrap().push(Recorded {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
    }

    async fn answer(&self) -> Result<Vec<u8>, HttpError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &*self.response.lock().unwrap() {
            Ok(body) => Ok(body.clone().into_bytes()),
            Err(status) => Err(HttpError::BadResponse {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get_raw(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, HttpError> {
        self.record(path, query);
        self.answer().await
    }

    async fn post_raw(&self, path: &str, form: &[(&str, String)]) -> Result<Vec<u8>, HttpError> {
        self.record(path, form);
        self.answer().await
    }
}
