// Client for the videos:annotate long-running operation flow.
//
// One client per run. Submission is a single POST; the wait is a poll loop
// with a hard deadline and no cancellation path, since killing this process
// does not stop the server-side work.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::annotate::error::AnnotateError;
use crate::annotate::types::{AnnotateVideoRequest, Operation};

pub const DEFAULT_ENDPOINT: &str = "https://videointelligence.googleapis.com";

pub struct VideoIntelligenceClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl VideoIntelligenceClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, token: String) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            http,
            endpoint,
            token,
        }
    }

    /// Submits one annotation request and returns the operation handle.
    /// From this point on the service works independently of this process
    /// and will write the result document to the request's output URI.
    pub async fn annotate_video(
        &self,
        request: &AnnotateVideoRequest,
    ) -> Result<Operation, AnnotateError> {
        let url = format!("{}/v1/videos:annotate", self.endpoint);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;
        decode_operation(response).await
    }

    /// Fetches the current state of an operation resource by name.
    pub async fn get_operation(&self, name: &str) -> Result<Operation, AnnotateError> {
        let url = format!("{}/v1/{}", self.endpoint, name);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        decode_operation(response).await
    }

    /// Blocks until the operation resolves or `timeout` elapses. Timeout is a
    /// distinct error, never conflated with submission or processing failure.
    pub async fn wait_for_operation(
        &self,
        operation: Operation,
        timeout: Duration,
        interval: Duration,
    ) -> Result<Operation, AnnotateError> {
        let name = operation.name.clone();
        await_operation(operation, timeout, interval, || {
            let name = name.clone();
            async move { self.get_operation(&name).await }
        })
        .await
    }
}

async fn decode_operation(response: reqwest::Response) -> Result<Operation, AnnotateError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AnnotateError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}

/// Deadline loop shared by the client and tests. Polls until the operation is
/// done, the deadline passes, or a poll fails. A poll already in flight when
/// the deadline hits is allowed to finish, so the worst case is the deadline
/// plus one poll round-trip.
pub async fn await_operation<F, Fut>(
    initial: Operation,
    timeout: Duration,
    interval: Duration,
    mut poll: F,
) -> Result<Operation, AnnotateError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Operation, AnnotateError>>,
{
    let deadline = Instant::now() + timeout;
    let name = initial.name.clone();
    let mut current = initial;

    loop {
        if current.done {
            if let Some(status) = current.error.take() {
                return Err(AnnotateError::Remote {
                    code: status.code,
                    message: status.message,
                });
            }
            return Ok(current);
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(AnnotateError::Timeout {
                name,
                waited: timeout,
            });
        }

        sleep(interval.min(deadline - now)).await;
        current = poll().await?;
        if !current.done {
            tracing::debug!("operation {} still running", name);
        }
    }
}
