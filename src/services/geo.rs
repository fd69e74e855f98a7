use crate::models::{RankedSchool, SchoolRow};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two lat/lon points
/// (haversine). Identical points short-circuit to exactly 0 so the zero
/// central angle never picks up floating-point noise.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Nearest-first ranking of schools around a reference point. Sorts on full
/// precision with a stable sort, so equal-distance schools keep their stored
/// order; the distance is rounded to 2 decimals only for the response.
pub fn rank_by_distance(lat: f64, lon: f64, schools: Vec<SchoolRow>) -> Vec<RankedSchool> {
    let mut ranked: Vec<(f64, SchoolRow)> = schools
        .into_iter()
        .map(|school| (haversine_km(lat, lon, school.latitude, school.longitude), school))
        .collect();

    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .into_iter()
        .map(|(dist, school)| RankedSchool {
            school,
            distance_km: round_km(dist),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: i64, lat: f64, lon: f64) -> SchoolRow {
        SchoolRow {
            id,
            name: format!("School {}", id),
            address: format!("{} Test St", id),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn distance_to_self_is_exactly_zero() {
        for (lat, lon) in [(0.0, 0.0), (52.37, 4.89), (-33.87, 151.21), (90.0, 180.0)] {
            assert_eq!(haversine_km(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ((40.0, -75.0), (51.5, -0.12)),
            ((0.0, 0.0), (0.0, 90.0)),
            ((-45.0, 170.0), (45.0, -170.0)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let forward = haversine_km(lat1, lon1, lat2, lon2);
            let back = haversine_km(lat2, lon2, lat1, lon1);
            assert!((forward - back).abs() < 1e-9);
        }
    }

    #[test]
    fn distance_stays_within_earth_bounds() {
        // Half the circumference: R * pi ~= 20015.09 km.
        let pairs = [
            ((90.0, 0.0), (-90.0, 0.0)),
            ((0.0, 0.0), (0.0, 180.0)),
            ((12.3, 45.6), (-12.3, -134.4)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let d = haversine_km(lat1, lon1, lat2, lon2);
            assert!(d >= 0.0);
            assert!(d <= 20015.1);
        }
    }

    #[test]
    fn quarter_circumference_from_equator() {
        let d = haversine_km(0.0, 0.0, 0.0, 90.0);
        assert_eq!(round_km(d), 10007.54);
    }

    #[test]
    fn ranking_is_non_decreasing_and_nearest_first() {
        let schools = vec![
            school(1, 0.0, 90.0),
            school(2, 0.0, 0.0),
            school(3, 10.0, 10.0),
        ];
        let ranked = rank_by_distance(0.0, 0.0, schools);

        assert_eq!(ranked[0].school.id, 2);
        assert_eq!(ranked[0].distance_km, 0.0);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn equal_distances_keep_stored_order() {
        let schools = vec![
            school(7, 1.0, 1.0),
            school(8, 1.0, 1.0),
            school(9, 1.0, 1.0),
        ];
        let ranked = rank_by_distance(50.0, 50.0, schools);
        let ids: Vec<i64> = ranked.iter().map(|r| r.school.id).collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_km(10007.543398), 10007.54);
        assert_eq!(round_km(0.005), 0.01);
        assert_eq!(round_km(0.0), 0.0);
    }
}
