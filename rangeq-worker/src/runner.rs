//! Fetch, compute, submit
//!
//! Orchestrates one pass of the workflow: fetch the payload, adopt its
//! session token if it carries one, answer every query through the engine,
//! and submit (or print) the result envelope. The computation itself is pure;
//! all logging and transport decisions live here.

use crate::client::ApiClient;
use crate::config::WorkerConfig;
use anyhow::{Context, Result};
use rangeq_core::{solve, DataPayload, QueryParser, ResultEnvelope};
use std::time::Duration;
use tracing::{info, warn};

/// Answer every query in the payload, in input order
///
/// Pure computation between the two I/O boundaries: no network, no logging.
pub fn compute(payload: &DataPayload) -> ResultEnvelope {
    let queries = QueryParser::parse_batch(&payload.query);
    let answers = solve(payload.data.clone(), &queries);
    ResultEnvelope::new(answers)
}

/// Run one fetch → compute → submit pass
pub async fn run(config: &WorkerConfig, dry_run: bool) -> Result<ResultEnvelope> {
    let mut client = ApiClient::new(
        &config.api.base_url,
        config.auth.token.clone(),
        Duration::from_secs(config.http.timeout_secs),
    )?;

    info!("Fetching task payload from {}", config.api.base_url);
    let payload = client.fetch_payload(&config.api.data_endpoint).await?;

    if let Some(token) = payload.token.clone() {
        info!("Adopting session token from payload");
        client.set_token(token);
    }

    info!(
        "Solving {} queries over {} elements",
        payload.query.len(),
        payload.data.len()
    );

    let envelope = compute(&payload);

    let unsupported = envelope.unsupported_count();
    if unsupported > 0 {
        warn!(
            "{} of {} queries were unrecognized or out of bounds",
            unsupported,
            envelope.result.len()
        );
    }

    if dry_run {
        let body =
            serde_json::to_string_pretty(&envelope).context("Failed to render result envelope")?;
        println!("{}", body);
        info!("Dry run: skipping submission");
    } else {
        client
            .submit_result(&config.api.result_endpoint, &envelope)
            .await?;
        info!("Submitted {} result slots", envelope.result.len());
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compute_worked_example() {
        let payload = DataPayload::from_value(json!({
            "data": [1, 2, 3, 4, 5],
            "query": [
                {"type": "1", "range": [1, 3]},
                {"type": "2", "range": [0, 4]},
                {"type": "3", "range": [0, 4]}
            ]
        }))
        .unwrap();

        let envelope = compute(&payload);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"result": [9, 3, null]})
        );
    }

    #[test]
    fn test_compute_empty_payload() {
        let payload = DataPayload::from_value(json!({"data": [], "query": []})).unwrap();
        let envelope = compute(&payload);
        assert!(envelope.result.is_empty());
    }

    #[test]
    fn test_compute_does_not_consume_payload() {
        let payload = DataPayload::from_value(json!({
            "data": [7],
            "query": [{"type": "1", "range": [0, 0]}]
        }))
        .unwrap();

        let first = compute(&payload);
        let second = compute(&payload);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
