/// Geographic coordinates in degrees, WGS84 lon/lat order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    pub fn lon_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }
}
