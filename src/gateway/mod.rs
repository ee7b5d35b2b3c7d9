use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{Point, PointSet, Snapshot, SnapshotSequence};

/// Client for the external simulator. One POST per session: board size
/// as a query parameter, optional initial points in the body; the
/// response is the full precomputed generation sequence.
///
/// Boundary quirk, kept deliberately: the request carries points under
/// lower-case `x`/`y` keys while the response nests them under `Points`
/// with upper-case `X`/`Y` (and `Points` may be null for an empty
/// generation). Both casings are normalized into the one internal
/// `Point` type here and nowhere else.

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to simulator failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("simulator returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed simulator response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("simulator worker terminated unexpectedly")]
    WorkerGone,
}

pub type FetchResult = Result<SnapshotSequence, GatewayError>;

#[derive(Serialize, Debug, PartialEq)]
struct RequestPoint {
    x: u32,
    y: u32,
}

#[derive(Serialize, Debug)]
struct GenerationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<Vec<RequestPoint>>,
}

#[derive(Deserialize, Debug)]
struct ResponsePoint {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "Y")]
    y: u32,
}

#[derive(Deserialize, Debug)]
struct WireGeneration {
    #[serde(rename = "Points")]
    points: Option<Vec<ResponsePoint>>,
}

fn normalize(generations: Vec<WireGeneration>) -> SnapshotSequence {
    let snapshots = generations
        .into_iter()
        .map(|generation| {
            let points = generation
                .points
                .unwrap_or_default()
                .into_iter()
                .map(|p| Point::new(p.x, p.y))
                .collect();
            Snapshot::new(points)
        })
        .collect();
    SnapshotSequence::new(snapshots)
}

/// An in-flight gateway request, polled from the frame loop.
pub struct PendingFetch {
    rx: Receiver<FetchResult>,
}

impl PendingFetch {
    /// Non-blocking. Returns Some exactly once when the worker finishes
    /// (or has died); None while the request is still in flight.
    pub fn poll(&mut self) -> Option<FetchResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(GatewayError::WorkerGone)),
        }
    }
}

/// Issue the request on a worker thread so the UI keeps running while
/// the simulator computes.
pub fn request_generations(
    base_url: &str,
    board_size: u32,
    initial_state: Option<&PointSet>,
) -> PendingFetch {
    let url = format!("{base_url}/api/points?gridSize={board_size}");
    let body = GenerationsRequest {
        points: initial_state
            .map(|set| set.iter().map(|p| RequestPoint { x: p.x, y: p.y }).collect()),
    };

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may already be gone if the viewer shut down.
        let _ = tx.send(fetch(&url, &body));
    });
    PendingFetch { rx }
}

fn fetch(url: &str, body: &GenerationsRequest) -> FetchResult {
    info!(url, "requesting generation sequence");
    let response = reqwest::blocking::Client::new()
        .post(url)
        .json(body)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        error!(%status, "simulator rejected the request");
        return Err(GatewayError::Status(status));
    }

    let payload = response.text()?;
    let generations: Vec<WireGeneration> = serde_json::from_str(&payload)?;
    info!(generations = generations.len(), "received generation sequence");
    Ok(normalize(generations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_lower_case_keys() {
        let body = GenerationsRequest {
            points: Some(vec![RequestPoint { x: 1, y: 3 }]),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"points":[{"x":1,"y":3}]}"#
        );
    }

    #[test]
    fn test_request_body_omits_points_when_absent() {
        let body = GenerationsRequest { points: None };
        assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
    }

    #[test]
    fn test_response_upper_case_keys_normalize_to_points() {
        let generations: Vec<WireGeneration> =
            serde_json::from_str(r#"[{"Points":[{"X":1,"Y":1}]}]"#).unwrap();
        let sequence = normalize(generations);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.get(0).unwrap().points(), &[Point::new(1, 1)]);
    }

    #[test]
    fn test_null_points_normalize_to_empty_snapshot() {
        let generations: Vec<WireGeneration> =
            serde_json::from_str(r#"[{"Points":null},{"Points":[{"X":0,"Y":2}]}]"#).unwrap();
        let sequence = normalize(generations);
        assert_eq!(sequence.len(), 2);
        assert!(sequence.get(0).unwrap().points().is_empty());
        assert_eq!(sequence.get(1).unwrap().points(), &[Point::new(0, 2)]);
    }

    #[test]
    fn test_empty_response_is_a_valid_empty_sequence() {
        let generations: Vec<WireGeneration> = serde_json::from_str("[]").unwrap();
        assert!(normalize(generations).is_empty());
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let result: Result<Vec<WireGeneration>, _> =
            serde_json::from_str(r#"{"not":"a list"}"#);
        assert!(result.is_err());
    }
}
