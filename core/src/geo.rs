/// A single position fix reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude_text(&self) -> String {
        self.latitude.to_string()
    }

    pub fn longitude_text(&self) -> String {
        self.longitude.to_string()
    }
}
