use futures_util::future::try_join_all;

use scene::observer::ObservationWindow;
use scene::track::{GroundTrack, TrackSet, TrackedObject};

use crate::error::FetchError;
use crate::source::PositionSource;

/// Issues one concurrent request per selected object and joins them with
/// all-succeed semantics.
///
/// Fail-fast: the first failing request fails the whole batch and no
/// partial result is surfaced. On success the returned set pairs each
/// object with its ordered sample sequence, in selection order.
pub async fn fetch_tracks(
    source: &dyn PositionSource,
    objects: &[TrackedObject],
    window: ObservationWindow,
) -> Result<TrackSet, FetchError> {
    let requests = objects.iter().map(|obj| source.positions(obj.id, window));
    let series = try_join_all(requests).await?;

    let tracks = objects
        .iter()
        .zip(series)
        .map(|(obj, series)| GroundTrack::new(obj.clone(), series.samples))
        .collect();
    Ok(TrackSet::new(tracks))
}

#[cfg(test)]
mod tests {
    use super::fetch_tracks;
    use crate::error::FetchErrorKind;
    use crate::source::MemorySource;
    use foundation::time::Time;
    use formats::positions::{ObjectInfo, PositionSeries};
    use scene::observer::ObservationWindow;
    use scene::track::{PositionSample, TrackedObject};

    fn window() -> ObservationWindow {
        ObservationWindow::new(52.3, 4.9, 0.0, 90)
    }

    fn series(name: &str, id: u32, len: usize) -> PositionSeries {
        PositionSeries {
            info: ObjectInfo {
                satname: name.to_string(),
                satid: id,
                transactionscount: 1,
            },
            samples: vec![PositionSample::new(10.0, 20.0, Time(0.0)); len],
        }
    }

    #[tokio::test]
    async fn joins_all_in_selection_order() {
        let mut source = MemorySource::new();
        source.insert(1, series("A 1", 1, 120));
        source.insert(2, series("B 2", 2, 180));

        let objects = vec![TrackedObject::new(2, "B 2"), TrackedObject::new(1, "A 1")];
        let set = fetch_tracks(&source, &objects, window()).await.unwrap();

        assert_eq!(set.tracks.len(), 2);
        assert_eq!(set.tracks[0].object.id, 2);
        assert_eq!(set.tracks[1].object.id, 1);
        assert_eq!(set.max_len(), 180);
    }

    #[tokio::test]
    async fn one_failure_fails_the_whole_batch() {
        let mut source = MemorySource::new();
        source.insert(1, series("A 1", 1, 10));
        source.fail(2);
        source.insert(3, series("C 3", 3, 10));

        let objects = vec![
            TrackedObject::new(1, "A 1"),
            TrackedObject::new(2, "B 2"),
            TrackedObject::new(3, "C 3"),
        ];
        let err = fetch_tracks(&source, &objects, window()).await.unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Position);
    }

    #[tokio::test]
    async fn empty_selection_joins_to_an_empty_set() {
        let source = MemorySource::new();
        let set = fetch_tracks(&source, &[], window()).await.unwrap();
        assert!(set.is_empty());
        assert_eq!(set.max_len(), 0);
    }
}
