use crate::constants::EARTH_RADIUS_KM;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Initial compass bearing from this point toward `other`, in degrees
    /// normalized to [0, 360). 0 = north, clockwise.
    ///
    /// Undefined for coincident points (atan2(0, 0) is platform-dependent);
    /// returns 0.0 in that case so callers get a deterministic value
    /// instead of a possible NaN.
    pub fn bearing_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let y = delta_lng.sin() * lat2_rad.cos();
        let x =
            lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lng.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(28.6525, 77.3661).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(Coordinates::new(0.0, 181.0).is_err()); // Invalid lng
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_distance_calculation() {
        let paris = Coordinates::new(48.8566, 2.3522).unwrap();
        let london = Coordinates::new(51.5074, -0.1278).unwrap();

        let distance = paris.distance_to(&london);
        // Paris to London is approximately 344 km
        assert!((distance - 344.0).abs() < 10.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinates::new(28.6525, 77.3661).unwrap();
        let b = Coordinates::new(28.4646, 77.0299).unwrap();

        let forward = a.distance_to(&b);
        let backward = b.distance_to(&a);
        assert!((forward - backward).abs() < 1e-9 * forward.max(1.0));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Coordinates::new(28.6525, 77.3661).unwrap();
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Coordinates::new(0.0, 0.0).unwrap();
        let north = Coordinates::new(1.0, 0.0).unwrap();
        let east = Coordinates::new(0.0, 1.0).unwrap();

        assert!((origin.bearing_to(&north) - 0.0).abs() < 1e-9);
        assert!((origin.bearing_to(&east) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_in_range() {
        let points = [
            Coordinates::new(28.6525, 77.3661).unwrap(),
            Coordinates::new(-33.8688, 151.2093).unwrap(),
            Coordinates::new(51.5074, -0.1278).unwrap(),
            Coordinates::new(0.0, -179.9).unwrap(),
        ];

        for a in &points {
            for b in &points {
                if a == b {
                    continue;
                }
                let bearing = a.bearing_to(b);
                assert!(
                    (0.0..360.0).contains(&bearing),
                    "bearing {} out of range",
                    bearing
                );
            }
        }
    }

    #[test]
    fn test_bearing_coincident_points_fallback() {
        let a = Coordinates::new(28.6525, 77.3661).unwrap();
        assert_eq!(a.bearing_to(&a), 0.0);
    }

    #[test]
    fn test_bearing_roughly_reverses() {
        let a = Coordinates::new(28.6525, 77.3661).unwrap();
        let b = Coordinates::new(28.4646, 77.0299).unwrap();

        let forward = a.bearing_to(&b);
        let backward = b.bearing_to(&a);
        // Over a short leg the reverse bearing differs by roughly 180 degrees
        assert!(((forward - backward).abs() - 180.0).abs() < 2.0);
    }
}
