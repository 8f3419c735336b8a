use foundation::time::Time;

/// Coordinate value the position service emits when it has no reading.
///
/// Known limitation carried from the service contract: a legitimate sample
/// exactly on the equator or prime meridian is indistinguishable from a
/// missing reading and is skipped too.
pub const NO_READING: f64 = 0.0;

/// An orbiting object selected for tracking.
///
/// Ids are unique across a selection; the selection collaborator enforces
/// that, not this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackedObject {
    pub id: u32,
    pub display_name: String,
}

impl TrackedObject {
    pub fn new(id: u32, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// One ground-track position reading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionSample {
    pub latitude: f64,
    pub longitude: f64,
    pub sample_time: Time,
}

impl PositionSample {
    pub fn new(latitude: f64, longitude: f64, sample_time: Time) -> Self {
        Self {
            latitude,
            longitude,
            sample_time,
        }
    }

    /// True when either coordinate carries the no-reading sentinel.
    pub fn is_no_reading(&self) -> bool {
        self.latitude == NO_READING || self.longitude == NO_READING
    }
}

/// The ordered sample sequence of one tracked object.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTrack {
    pub object: TrackedObject,
    pub samples: Vec<PositionSample>,
}

impl GroundTrack {
    pub fn new(object: TrackedObject, samples: Vec<PositionSample>) -> Self {
        Self { object, samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at the shared animation index, if this track is long enough.
    pub fn sample_at(&self, index: usize) -> Option<&PositionSample> {
        self.samples.get(index)
    }
}

/// The joined fetch result: one track per selected object.
///
/// Sequences may differ in length across objects; the animation runs until
/// the shared index walks past the longest one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSet {
    pub tracks: Vec<GroundTrack>,
}

impl TrackSet {
    pub fn new(tracks: Vec<GroundTrack>) -> Self {
        Self { tracks }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Length of the longest sample sequence in the set.
    pub fn max_len(&self) -> usize {
        self.tracks.iter().map(GroundTrack::len).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroundTrack> {
        self.tracks.iter()
    }
}
