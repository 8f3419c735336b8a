use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;

use formats::positions::PositionSeries;
use scene::observer::ObservationWindow;

use crate::error::{FetchError, FetchErrorKind};

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of per-object position series.
///
/// Implementations must be `Send + Sync` for use across async tasks.
/// Methods return boxed futures for dyn-compatibility, so the fetch join
/// can be exercised against an in-memory source in tests.
pub trait PositionSource: Send + Sync {
    /// Fetch one object's position series over the observation window.
    fn positions(
        &self,
        object_id: u32,
        window: ObservationWindow,
    ) -> BoxFuture<'_, Result<PositionSeries, FetchError>>;
}

/// In-memory position source for testing.
#[derive(Debug, Default)]
pub struct MemorySource {
    series: HashMap<u32, PositionSeries>,
    failing: HashSet<u32>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object_id: u32, series: PositionSeries) {
        self.series.insert(object_id, series);
    }

    /// Makes requests for `object_id` fail.
    pub fn fail(&mut self, object_id: u32) {
        self.failing.insert(object_id);
    }
}

impl PositionSource for MemorySource {
    fn positions(
        &self,
        object_id: u32,
        _window: ObservationWindow,
    ) -> BoxFuture<'_, Result<PositionSeries, FetchError>> {
        Box::pin(async move {
            if self.failing.contains(&object_id) {
                return Err(FetchError::new(
                    FetchErrorKind::Position,
                    format!("request for object {object_id} failed"),
                ));
            }
            self.series.get(&object_id).cloned().ok_or_else(|| {
                FetchError::new(
                    FetchErrorKind::Position,
                    format!("no series for object {object_id}"),
                )
            })
        })
    }
}
