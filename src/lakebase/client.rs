// lakebase/client.rs

//! # Workspace Client
//!
//! Blocking HTTP implementation of [`PostgresApi`] against the workspace
//! REST API. One client is built per invocation from a [`ClientConfig`].
//!
//! ## Endpoints
//! - `GET  /api/2.0/postgres/projects/{id}` looks a project up.
//! - `POST /api/2.0/postgres/projects?project_id={id}` starts creation.
//! - `GET  /api/2.0/postgres/{operation}` polls a long-running operation.
//!
//! ## Example Usage
//! ```rust
//! use crate::core::env::ClientConfig;
//! use crate::lakebase::client::WorkspaceClient;
//!
//! let client = WorkspaceClient::new(&ClientConfig::discover(".env")?)?;
//! ```

use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::app::{
    APP_NAME, APP_VERSION, HTTP_TIMEOUT, MAX_POLL_INTERVAL, OPERATION_TIMEOUT, POSTGRES_API_PATH,
};
use crate::core::env::ClientConfig;
use crate::lakebase::api::{ApiError, ApiResult, PostgresApi};
use crate::lakebase::models::{ErrorBody, Lookup, Operation, Project};

/// Error codes the API uses for a missing resource.
const NOT_FOUND_CODES: &[&str] = &["NOT_FOUND", "RESOURCE_DOES_NOT_EXIST"];

/// 404 code for an unknown route: a wrong host or API path, not a missing project.
const ENDPOINT_NOT_FOUND: &str = "ENDPOINT_NOT_FOUND";

/// Blocking client for the workspace Postgres API.
pub struct WorkspaceClient {
    http: Client,
    host: String,
    token: String,
    operation_timeout: Duration,
}

impl WorkspaceClient {
    /// Builds a client for the configured workspace.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(format!("{}/{}", APP_NAME, APP_VERSION))
            .build()?;

        Ok(Self {
            http,
            host: config.host.clone(),
            token: config.token.clone(),
            operation_timeout: OPERATION_TIMEOUT,
        })
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.host, path)
    }

    /// Sends a request and returns the body of a successful response.
    fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.bearer_auth(&self.token).send()?;
        let status = response.status();
        let body = response.text()?;
        debug!("Response status: {}", status);

        if status.is_success() {
            Ok(body)
        } else {
            Err(error_from_response(status, &body))
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let body = self.send(self.http.get(&url))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Polls `operation` until it is done or the timeout elapses.
    fn poll(&self, mut operation: Operation, spinner: &ProgressBar) -> ApiResult<Project> {
        let started = Instant::now();
        let mut attempt: u32 = 1;

        while !operation.done {
            let elapsed = started.elapsed();
            if elapsed >= self.operation_timeout {
                return Err(ApiError::Timeout {
                    operation: operation.name,
                    elapsed,
                });
            }

            let delay = poll_interval(attempt).min(self.operation_timeout - elapsed);
            debug!(
                "Operation {} not done, polling again in {:?} (attempt {})",
                operation.name, delay, attempt
            );
            thread::sleep(delay);
            attempt += 1;

            operation = self.get_json(&operation.name)?;
            spinner.set_message(format!("Waiting for {}", operation.name));
        }

        operation_result(operation)
    }
}

impl PostgresApi for WorkspaceClient {
    fn get_project(&self, name: &str) -> ApiResult<Lookup> {
        match self.get_json::<Project>(name) {
            Ok(project) => Ok(Lookup::Found(project)),
            Err(err) if is_not_found(&err) => {
                debug!("Project {} not found", name);
                Ok(Lookup::Absent)
            }
            Err(err) => Err(err),
        }
    }

    fn create_project(&self, project_id: &str, project: &Project) -> ApiResult<Operation> {
        let url = self.url("projects");
        debug!("POST {}?project_id={}", url, project_id);

        let request = self
            .http
            .post(&url)
            .query(&[("project_id", project_id)])
            .json(project);
        let body = self.send(request)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn wait(&self, operation: Operation) -> ApiResult<Project> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Waiting for {}", operation.name));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = self.poll(operation, &spinner);
        spinner.finish_and_clear();
        result
    }
}

/// Joins the workspace host, the API prefix and a resource path.
fn api_url(host: &str, path: &str) -> String {
    format!(
        "{}{}/{}",
        host.trim_end_matches('/'),
        POSTGRES_API_PATH,
        path.trim_start_matches('/')
    )
}

/// Linear backoff: one more second per attempt, capped.
fn poll_interval(attempt: u32) -> Duration {
    Duration::from_secs(u64::from(attempt)).min(MAX_POLL_INTERVAL)
}

/// Builds an `ApiError::Http` from a non-2xx response.
fn error_from_response(status: StatusCode, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let code = parsed.error_code.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("UNKNOWN")
            .to_uppercase()
            .replace(' ', "_")
    });
    let message = parsed.message.unwrap_or_else(|| body.trim().to_string());

    ApiError::Http {
        status: status.as_u16(),
        code,
        message,
    }
}

fn is_not_found(err: &ApiError) -> bool {
    match err {
        ApiError::Http { status, code, .. } => {
            code != ENDPOINT_NOT_FOUND
                && (*status == StatusCode::NOT_FOUND.as_u16()
                    || NOT_FOUND_CODES.contains(&code.as_str()))
        }
        _ => false,
    }
}

/// Extracts the project from a finished operation.
fn operation_result(operation: Operation) -> ApiResult<Project> {
    if let Some(status) = operation.error {
        let code = status
            .code
            .map(|code| code.as_str().map_or_else(|| code.to_string(), str::to_string));
        let message = match (code, status.message) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (None, Some(message)) => message,
            (Some(code), None) => code,
            (None, None) => "unknown error".to_string(),
        };
        return Err(ApiError::OperationFailed {
            operation: operation.name,
            message,
        });
    }

    match operation.response {
        Some(response) => Ok(serde_json::from_value(response)?),
        None => Err(ApiError::MissingResponse(operation.name)),
    }
}
