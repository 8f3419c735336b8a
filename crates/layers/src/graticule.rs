use foundation::geo::GeoPoint;

/// Coordinate grid (meridians + parallels) overlaid on the base map.
///
/// Defaults match the conventional world graticule: a line every 10
/// degrees, parallels limited to +/-80, vertices sampled every 2.5 degrees
/// so lines stay smooth under a curved projection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Graticule {
    pub step_deg: f64,
    pub parallel_extent_deg: f64,
    pub precision_deg: f64,
}

impl Default for Graticule {
    fn default() -> Self {
        Self {
            step_deg: 10.0,
            parallel_extent_deg: 80.0,
            precision_deg: 2.5,
        }
    }
}

impl Graticule {
    /// All grid lines, meridians first, as lon/lat polylines.
    pub fn lines(&self) -> Vec<Vec<GeoPoint>> {
        let mut out = Vec::new();

        let mut lon = -180.0;
        while lon <= 180.0 {
            out.push(sample_meridian(
                lon,
                self.parallel_extent_deg,
                self.precision_deg,
            ));
            lon += self.step_deg;
        }

        let mut lat = -self.parallel_extent_deg;
        while lat <= self.parallel_extent_deg {
            out.push(sample_parallel(lat, self.precision_deg));
            lat += self.step_deg;
        }

        out
    }

    /// The closed boundary of the graticule's full extent.
    pub fn outline(&self) -> Vec<GeoPoint> {
        let mut out = Vec::new();
        // West edge south to north, north edge, east edge, south edge.
        let mut lat = -90.0;
        while lat <= 90.0 {
            out.push(GeoPoint::new(-180.0, lat));
            lat += self.precision_deg;
        }
        let mut lon = -180.0;
        while lon <= 180.0 {
            out.push(GeoPoint::new(lon, 90.0));
            lon += self.precision_deg;
        }
        let mut lat = 90.0;
        while lat >= -90.0 {
            out.push(GeoPoint::new(180.0, lat));
            lat -= self.precision_deg;
        }
        let mut lon = 180.0;
        while lon >= -180.0 {
            out.push(GeoPoint::new(lon, -90.0));
            lon -= self.precision_deg;
        }
        out
    }
}

fn sample_meridian(lon: f64, extent: f64, precision: f64) -> Vec<GeoPoint> {
    let mut line = Vec::new();
    let mut lat = -extent;
    while lat <= extent {
        line.push(GeoPoint::new(lon, lat));
        lat += precision;
    }
    line
}

fn sample_parallel(lat: f64, precision: f64) -> Vec<GeoPoint> {
    let mut line = Vec::new();
    let mut lon = -180.0;
    while lon <= 180.0 {
        line.push(GeoPoint::new(lon, lat));
        lon += precision;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::Graticule;

    #[test]
    fn default_line_count() {
        // 37 meridians (-180..=180 every 10) + 17 parallels (-80..=80).
        let lines = Graticule::default().lines();
        assert_eq!(lines.len(), 37 + 17);
    }

    #[test]
    fn parallels_stay_within_extent() {
        let lines = Graticule::default().lines();
        for line in &lines {
            for p in line {
                assert!(p.lat_deg.abs() <= 80.0 + 1e-9);
            }
        }
    }

    #[test]
    fn outline_is_closed_extent() {
        let outline = Graticule::default().outline();
        assert!(outline.len() > 4);
        let first = outline.first().unwrap();
        let last = outline.last().unwrap();
        assert_eq!((first.lon_deg, first.lat_deg), (-180.0, -90.0));
        assert_eq!((last.lon_deg, last.lat_deg), (-180.0, -90.0));
    }
}
