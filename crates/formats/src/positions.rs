use serde::Deserialize;

use foundation::time::Time;
use scene::track::PositionSample;

/// Decoder for one position-service response.
///
/// The wire shape is `{info: {...}, positions: [...]}`. A response without
/// a `positions` field is malformed and unrecoverable for the animation
/// attempt that issued it.
#[derive(Debug)]
pub enum PositionsError {
    Parse(serde_json::Error),
    MissingPositions { object_name: String },
}

impl std::fmt::Display for PositionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionsError::Parse(e) => write!(f, "position payload parse error: {e}"),
            PositionsError::MissingPositions { object_name } => {
                write!(f, "position payload for {object_name:?} has no positions field")
            }
        }
    }
}

impl std::error::Error for PositionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PositionsError::Parse(e) => Some(e),
            PositionsError::MissingPositions { .. } => None,
        }
    }
}

/// Service-side description of the object a series belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectInfo {
    pub satname: String,
    pub satid: u32,
    #[serde(default)]
    pub transactionscount: u32,
}

// Azimuth, elevation, and altitude fields also arrive on the wire; the
// ground track only needs the geographic fix and its timestamp.
#[derive(Debug, Copy, Clone, Deserialize)]
struct WirePosition {
    satlatitude: f64,
    satlongitude: f64,
    timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    info: ObjectInfo,
    #[serde(default)]
    positions: Option<Vec<WirePosition>>,
}

/// The decoded response: service info plus the ordered sample sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSeries {
    pub info: ObjectInfo,
    pub samples: Vec<PositionSample>,
}

pub fn decode_positions(payload: &str) -> Result<PositionSeries, PositionsError> {
    let wire: WireResponse = serde_json::from_str(payload).map_err(PositionsError::Parse)?;

    let Some(positions) = wire.positions else {
        return Err(PositionsError::MissingPositions {
            object_name: wire.info.satname,
        });
    };

    let samples = positions
        .iter()
        .map(|p| PositionSample::new(p.satlatitude, p.satlongitude, Time(p.timestamp as f64)))
        .collect();

    Ok(PositionSeries {
        info: wire.info,
        samples,
    })
}
