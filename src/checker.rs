use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::endpoints::Endpoint;
use crate::errors::{AppError, AppResult};

pub struct Checker {
	client: reqwest::Client,
	base_url: String,
}

#[derive(Debug, Clone)]
pub struct CheckReport {
	pub path: String,
	pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub enum Outcome {
	Done { status: u16, elapsed: Duration, passed: bool },
	Transport { error: String },
}

impl Checker {
	pub fn new(base_url: &str, token: &str) -> Self {
		let mut default_headers = HeaderMap::new();
		default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		if let Ok(v) = HeaderValue::from_str(&format!("Bearer {}", token)) {
			default_headers.insert(AUTHORIZATION, v);
		}
		// No per-request timeout is configured.
		let client = reqwest::Client::builder()
			.user_agent("spotirecap-smoke/1.0")
			.default_headers(default_headers)
			.build()
			.expect("failed to build reqwest client");
		Self { client, base_url: base_url.trim_end_matches('/').to_string() }
	}

	/// Checks one endpoint. Transport failures are captured in the report
	/// rather than returned, so a dead server never aborts the batch.
	pub async fn check(&self, endpoint: &Endpoint) -> CheckReport {
		match self.fetch(endpoint).await {
			Ok((status, elapsed, passed)) => CheckReport {
				path: endpoint.path.clone(),
				outcome: Outcome::Done { status, elapsed, passed },
			},
			Err(err) => CheckReport {
				path: endpoint.path.clone(),
				outcome: Outcome::Transport { error: err.to_string() },
			},
		}
	}

	async fn fetch(&self, endpoint: &Endpoint) -> AppResult<(u16, Duration, bool)> {
		let url = self.build_url(&endpoint.path, &endpoint.params)?;
		tracing::debug!(%url, "checking endpoint");
		let start = Instant::now();
		let resp = self.client.get(url).send().await?;
		let status = resp.status().as_u16();
		let body = resp.text().await?;
		let elapsed = start.elapsed();
		Ok((status, elapsed, response_passes(status, &body)))
	}

	fn build_url(&self, path: &str, params: &[(String, String)]) -> AppResult<reqwest::Url> {
		let mut url = reqwest::Url::parse(&self.base_url)
			.map_err(|e| AppError::BadRequest(format!("invalid base URL: {}", e)))?;
		url.set_path(&format!("{}{}", url.path().trim_end_matches('/'), path));
		if !params.is_empty() {
			let mut qp = url.query_pairs_mut();
			for (k, v) in params {
				qp.append_pair(k, v);
			}
		}
		Ok(url)
	}
}

// A non-200 status fails on its own; the body is only parsed for 200s.
fn response_passes(status: u16, body: &str) -> bool {
	status == 200 && serde_json::from_str::<Value>(body).map(|v| json_is_truthy(&v)).unwrap_or(false)
}

fn json_is_truthy(v: &Value) -> bool {
	match v {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
		Value::String(s) => !s.is_empty(),
		Value::Array(a) => !a.is_empty(),
		Value::Object(o) => !o.is_empty(),
	}
}
