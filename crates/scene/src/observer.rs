/// Observer location and duration used to request a position series.
///
/// Immutable for the duration of one fetch + animation cycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ObservationWindow {
    pub observer_latitude: f64,
    pub observer_longitude: f64,
    /// Observer elevation above sea level (meters).
    pub observer_elevation: f64,
    pub duration_minutes: u32,
}

impl ObservationWindow {
    pub fn new(
        observer_latitude: f64,
        observer_longitude: f64,
        observer_elevation: f64,
        duration_minutes: u32,
    ) -> Self {
        Self {
            observer_latitude,
            observer_longitude,
            observer_elevation,
            duration_minutes,
        }
    }

    /// End time of the requested series, in seconds from now.
    pub fn end_time_seconds(&self) -> u32 {
        self.duration_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::ObservationWindow;

    #[test]
    fn end_time_is_minutes_times_sixty() {
        let window = ObservationWindow::new(52.3, 4.9, 0.0, 90);
        assert_eq!(window.end_time_seconds(), 5400);
    }
}
