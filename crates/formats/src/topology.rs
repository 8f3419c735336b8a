use serde_json::Value;

use foundation::geo::GeoPoint;
use scene::boundary::{BoundaryGeometry, RegionPolygon};

/// Decoder for the boundary topology payload.
///
/// The payload is a topology: shared arcs of quantized, delta-encoded
/// coordinates plus named geometry objects that reference arcs by index
/// (a negative index `~i` means arc `i` reversed). Conversion to plain
/// region polygons happens once at startup.
#[derive(Debug)]
pub enum TopologyError {
    NotATopology,
    MissingObject(String),
    InvalidArc { index: usize, reason: String },
    InvalidGeometry { reason: String },
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::NotATopology => write!(f, "expected a Topology payload"),
            TopologyError::MissingObject(name) => {
                write!(f, "topology has no object named {name:?}")
            }
            TopologyError::InvalidArc { index, reason } => {
                write!(f, "invalid arc at index {index}: {reason}")
            }
            TopologyError::InvalidGeometry { reason } => {
                write!(f, "invalid geometry: {reason}")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

/// Decodes the named geometry object of a topology payload into boundary
/// geometry.
pub fn boundary_from_topology_str(
    payload: &str,
    object_name: &str,
) -> Result<BoundaryGeometry, TopologyError> {
    let value: Value = serde_json::from_str(payload).map_err(|e| TopologyError::InvalidGeometry {
        reason: format!("JSON parse error: {e}"),
    })?;
    boundary_from_topology_value(&value, object_name)
}

pub fn boundary_from_topology_value(
    value: &Value,
    object_name: &str,
) -> Result<BoundaryGeometry, TopologyError> {
    let obj = value.as_object().ok_or(TopologyError::NotATopology)?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(TopologyError::NotATopology)?;
    if ty != "Topology" {
        return Err(TopologyError::NotATopology);
    }

    let transform = parse_transform(obj.get("transform"))?;
    let arcs = decode_arcs(
        obj.get("arcs")
            .and_then(|v| v.as_array())
            .ok_or(TopologyError::NotATopology)?,
        transform,
    )?;

    let geometry = obj
        .get("objects")
        .and_then(|v| v.as_object())
        .and_then(|objects| objects.get(object_name))
        .ok_or_else(|| TopologyError::MissingObject(object_name.to_string()))?;

    let mut regions = Vec::new();
    collect_regions(geometry, &arcs, &mut regions)?;
    Ok(BoundaryGeometry::new(regions))
}

#[derive(Debug, Copy, Clone)]
struct Transform {
    scale: (f64, f64),
    translate: (f64, f64),
}

fn parse_transform(value: Option<&Value>) -> Result<Option<Transform>, TopologyError> {
    let Some(value) = value else {
        // Unquantized topology: arc coordinates are absolute lon/lat.
        return Ok(None);
    };
    let obj = value.as_object().ok_or(TopologyError::InvalidGeometry {
        reason: "transform must be an object".to_string(),
    })?;

    let pair = |key: &str| -> Result<(f64, f64), TopologyError> {
        let arr = obj
            .get(key)
            .and_then(|v| v.as_array())
            .ok_or_else(|| TopologyError::InvalidGeometry {
                reason: format!("transform missing {key}"),
            })?;
        match (
            arr.first().and_then(Value::as_f64),
            arr.get(1).and_then(Value::as_f64),
        ) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(TopologyError::InvalidGeometry {
                reason: format!("transform {key} must be two numbers"),
            }),
        }
    };

    Ok(Some(Transform {
        scale: pair("scale")?,
        translate: pair("translate")?,
    }))
}

/// Delta-decodes every arc into absolute lon/lat vertices.
fn decode_arcs(
    raw_arcs: &[Value],
    transform: Option<Transform>,
) -> Result<Vec<Vec<GeoPoint>>, TopologyError> {
    let mut arcs = Vec::with_capacity(raw_arcs.len());
    for (index, raw) in raw_arcs.iter().enumerate() {
        let pairs = raw.as_array().ok_or_else(|| TopologyError::InvalidArc {
            index,
            reason: "arc must be an array".to_string(),
        })?;

        let mut arc = Vec::with_capacity(pairs.len());
        let mut x = 0.0;
        let mut y = 0.0;
        for pair in pairs {
            let coords = pair.as_array().ok_or_else(|| TopologyError::InvalidArc {
                index,
                reason: "arc position must be an array".to_string(),
            })?;
            let (dx, dy) = match (
                coords.first().and_then(Value::as_f64),
                coords.get(1).and_then(Value::as_f64),
            ) {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    return Err(TopologyError::InvalidArc {
                        index,
                        reason: "arc position must be two numbers".to_string(),
                    });
                }
            };

            match transform {
                Some(t) => {
                    // Quantized arcs are delta-encoded from the previous position.
                    x += dx;
                    y += dy;
                    arc.push(GeoPoint::new(
                        x * t.scale.0 + t.translate.0,
                        y * t.scale.1 + t.translate.1,
                    ));
                }
                None => arc.push(GeoPoint::new(dx, dy)),
            }
        }
        arcs.push(arc);
    }
    Ok(arcs)
}

fn collect_regions(
    geometry: &Value,
    arcs: &[Vec<GeoPoint>],
    out: &mut Vec<RegionPolygon>,
) -> Result<(), TopologyError> {
    let obj = geometry
        .as_object()
        .ok_or_else(|| TopologyError::InvalidGeometry {
            reason: "geometry must be an object".to_string(),
        })?;
    let Some(ty) = obj.get("type").and_then(|v| v.as_str()) else {
        // Null geometry: a named region with no boundary data.
        return Ok(());
    };

    match ty {
        "GeometryCollection" => {
            let geometries = obj.get("geometries").and_then(|v| v.as_array()).ok_or_else(
                || TopologyError::InvalidGeometry {
                    reason: "GeometryCollection missing geometries".to_string(),
                },
            )?;
            for geom in geometries {
                collect_regions(geom, arcs, out)?;
            }
        }
        "Polygon" => {
            let rings = arc_rings(obj.get("arcs"), arcs)?;
            out.push(RegionPolygon::new(rings));
        }
        "MultiPolygon" => {
            let polys = obj
                .get("arcs")
                .and_then(|v| v.as_array())
                .ok_or_else(|| TopologyError::InvalidGeometry {
                    reason: "MultiPolygon missing arcs".to_string(),
                })?;
            for poly in polys {
                let rings = arc_rings(Some(poly), arcs)?;
                out.push(RegionPolygon::new(rings));
            }
        }
        other => {
            return Err(TopologyError::InvalidGeometry {
                reason: format!("unsupported geometry type: {other}"),
            });
        }
    }
    Ok(())
}

/// Stitches arc references into closed rings.
fn arc_rings(
    value: Option<&Value>,
    arcs: &[Vec<GeoPoint>],
) -> Result<Vec<Vec<GeoPoint>>, TopologyError> {
    let ring_refs = value
        .and_then(|v| v.as_array())
        .ok_or_else(|| TopologyError::InvalidGeometry {
            reason: "Polygon missing arcs".to_string(),
        })?;

    let mut rings = Vec::with_capacity(ring_refs.len());
    for ring_ref in ring_refs {
        let indices = ring_ref
            .as_array()
            .ok_or_else(|| TopologyError::InvalidGeometry {
                reason: "ring must be an array of arc indices".to_string(),
            })?;

        let mut ring: Vec<GeoPoint> = Vec::new();
        for raw_index in indices {
            let i = raw_index
                .as_i64()
                .ok_or_else(|| TopologyError::InvalidGeometry {
                    reason: "arc index must be an integer".to_string(),
                })?;

            // ~i encodes arc i traversed backwards.
            let (arc_index, reversed) = if i < 0 {
                ((!i) as usize, true)
            } else {
                (i as usize, false)
            };
            let arc = arcs
                .get(arc_index)
                .ok_or_else(|| TopologyError::InvalidGeometry {
                    reason: format!("arc index {arc_index} out of range"),
                })?;

            let mut points: Vec<GeoPoint> = if reversed {
                arc.iter().rev().copied().collect()
            } else {
                arc.clone()
            };

            // Consecutive arcs share their junction point; keep it once.
            if !ring.is_empty() && !points.is_empty() {
                points.remove(0);
            }
            ring.extend(points);
        }
        rings.push(ring);
    }
    Ok(rings)
}

#[cfg(test)]
mod tests {
    use super::{TopologyError, boundary_from_topology_str};
    use foundation::geo::GeoPoint;
    use pretty_assertions::assert_eq;

    // Two arcs forming a square: one across the top, one back along the
    // bottom, quantized with unit scale.
    fn square_topology() -> String {
        r#"{
            "type": "Topology",
            "transform": {"scale": [1.0, 1.0], "translate": [0.0, 0.0]},
            "objects": {
                "countries": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "arcs": [[0, 1]]}
                    ]
                }
            },
            "arcs": [
                [[0, 0], [10, 0], [0, 10]],
                [[10, 10], [-10, 0], [0, -10]]
            ]
        }"#
        .to_string()
    }

    #[test]
    fn decodes_delta_encoded_square() {
        let boundary = boundary_from_topology_str(&square_topology(), "countries").unwrap();
        assert_eq!(boundary.regions.len(), 1);
        let ring = &boundary.regions[0].rings[0];
        assert_eq!(
            ring.clone(),
            vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(10.0, 0.0),
                GeoPoint::new(10.0, 10.0),
                GeoPoint::new(0.0, 10.0),
                GeoPoint::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn negative_index_reverses_the_arc() {
        let payload = r#"{
            "type": "Topology",
            "transform": {"scale": [1.0, 1.0], "translate": [0.0, 0.0]},
            "objects": {
                "countries": {"type": "Polygon", "arcs": [[-1, -2]]}
            },
            "arcs": [
                [[10, 10], [-10, 0], [0, -10]],
                [[0, 0], [10, 0], [0, 10]]
            ]
        }"#;
        let boundary = boundary_from_topology_str(payload, "countries").unwrap();
        let ring = &boundary.regions[0].rings[0];
        assert_eq!(ring.first().copied(), Some(GeoPoint::new(0.0, 0.0)));
        assert_eq!(ring.last().copied(), Some(GeoPoint::new(0.0, 0.0)));
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn transform_scales_and_translates() {
        let payload = r#"{
            "type": "Topology",
            "transform": {"scale": [0.5, 2.0], "translate": [-180.0, -90.0]},
            "objects": {"countries": {"type": "Polygon", "arcs": [[0]]}},
            "arcs": [[[0, 0], [2, 1], [2, 1]]]
        }"#;
        let boundary = boundary_from_topology_str(payload, "countries").unwrap();
        let ring = &boundary.regions[0].rings[0];
        assert_eq!(ring[0], GeoPoint::new(-180.0, -90.0));
        assert_eq!(ring[1], GeoPoint::new(-179.0, -88.0));
        assert_eq!(ring[2], GeoPoint::new(-178.0, -86.0));
    }

    #[test]
    fn multipolygon_yields_one_region_per_part() {
        let payload = r#"{
            "type": "Topology",
            "objects": {
                "countries": {
                    "type": "MultiPolygon",
                    "arcs": [[[0]], [[1]]]
                }
            },
            "arcs": [
                [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
                [[5.0, 5.0], [6.0, 5.0], [6.0, 6.0]]
            ]
        }"#;
        let boundary = boundary_from_topology_str(payload, "countries").unwrap();
        assert_eq!(boundary.regions.len(), 2);
    }

    #[test]
    fn missing_object_is_reported_by_name() {
        let err = boundary_from_topology_str(&square_topology(), "lakes").unwrap_err();
        match err {
            TopologyError::MissingObject(name) => assert_eq!(name, "lakes"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_topology_payload_is_rejected() {
        let err = boundary_from_topology_str(r#"{"type": "FeatureCollection"}"#, "countries")
            .unwrap_err();
        assert!(matches!(err, TopologyError::NotATopology));
    }

    #[test]
    fn null_geometry_contributes_nothing() {
        let payload = r#"{
            "type": "Topology",
            "objects": {
                "countries": {
                    "type": "GeometryCollection",
                    "geometries": [{"type": null}]
                }
            },
            "arcs": []
        }"#;
        let boundary = boundary_from_topology_str(payload, "countries").unwrap();
        assert!(boundary.is_empty());
    }
}
