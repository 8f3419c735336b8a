use foundation::geo::GeoPoint;

/// One land-mass region as closed rings of lon/lat vertices.
///
/// Ring 0 is the outer boundary; any further rings are holes.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPolygon {
    pub rings: Vec<Vec<GeoPoint>>,
}

impl RegionPolygon {
    pub fn new(rings: Vec<Vec<GeoPoint>>) -> Self {
        Self { rings }
    }

    pub fn outer(&self) -> Option<&[GeoPoint]> {
        self.rings.first().map(|r| r.as_slice())
    }
}

/// Immutable collection of region polygons derived once from the raw
/// topology payload. Owned by the base map for the lifetime of the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryGeometry {
    pub regions: Vec<RegionPolygon>,
}

impl BoundaryGeometry {
    pub fn new(regions: Vec<RegionPolygon>) -> Self {
        Self { regions }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
