use std::time::Duration;

use formats::positions::{PositionSeries, PositionsError, decode_positions};
use formats::topology::boundary_from_topology_str;
use scene::boundary::BoundaryGeometry;
use scene::observer::ObservationWindow;

use crate::error::{FetchError, FetchErrorKind};
use crate::source::{BoxFuture, PositionSource};

/// HTTP position source.
///
/// Every request is bounded by the client timeout so a hung fetch maps
/// into the normal failure path instead of leaving the UI loading forever.
pub struct HttpPositionSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpPositionSource {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                FetchError::with_source(FetchErrorKind::Position, "HTTP client setup failed", e)
            })?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn position_url(&self, object_id: u32, window: ObservationWindow) -> String {
        format!(
            "{}/positions/{}/{}/{}/{}/{}/",
            self.base_url,
            object_id,
            window.observer_latitude,
            window.observer_longitude,
            window.observer_elevation,
            window.end_time_seconds(),
        )
    }
}

impl PositionSource for HttpPositionSource {
    fn positions(
        &self,
        object_id: u32,
        window: ObservationWindow,
    ) -> BoxFuture<'_, Result<PositionSeries, FetchError>> {
        let url = self.position_url(object_id, window);
        Box::pin(async move {
            tracing::debug!(object_id, %url, "requesting position series");
            let resp = self
                .client
                .get(&url)
                .query(&[("apiKey", self.api_key.as_str())])
                .send()
                .await
                .map_err(|e| {
                    FetchError::with_source(
                        FetchErrorKind::Position,
                        format!("position request for object {object_id} failed"),
                        e,
                    )
                })?;

            if !resp.status().is_success() {
                return Err(FetchError::new(
                    FetchErrorKind::Position,
                    format!(
                        "position request for object {object_id} returned HTTP {}",
                        resp.status()
                    ),
                ));
            }

            let body = resp.text().await.map_err(|e| {
                FetchError::with_source(
                    FetchErrorKind::Position,
                    format!("failed to read position response for object {object_id}"),
                    e,
                )
            })?;

            decode_positions(&body).map_err(|e| {
                let kind = match &e {
                    PositionsError::MissingPositions { .. } => FetchErrorKind::MalformedPosition,
                    PositionsError::Parse(_) => FetchErrorKind::Position,
                };
                FetchError::with_source(
                    kind,
                    format!("position response for object {object_id} was invalid"),
                    e,
                )
            })
        })
    }
}

/// One-shot fetch of the boundary topology payload.
pub async fn fetch_boundary(
    url: &str,
    object_name: &str,
    timeout: Duration,
) -> Result<BoundaryGeometry, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| {
            FetchError::with_source(FetchErrorKind::Boundary, "HTTP client setup failed", e)
        })?;

    let resp = client.get(url).send().await.map_err(|e| {
        FetchError::with_source(FetchErrorKind::Boundary, "boundary request failed", e)
    })?;
    if !resp.status().is_success() {
        return Err(FetchError::new(
            FetchErrorKind::Boundary,
            format!("boundary request returned HTTP {}", resp.status()),
        ));
    }

    let body = resp.text().await.map_err(|e| {
        FetchError::with_source(FetchErrorKind::Boundary, "failed to read boundary payload", e)
    })?;

    boundary_from_topology_str(&body, object_name).map_err(|e| {
        FetchError::with_source(FetchErrorKind::Boundary, "boundary payload was invalid", e)
    })
}
