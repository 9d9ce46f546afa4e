// crates/tatra-core/src/markers.rs

//! Map-marker projection.
//!
//! A trail becomes a marker only when both of its GPS strings parse to finite
//! numbers. Everything else is dropped silently: partial geocoding is normal
//! for this data set.

use crate::model::{Difficulty, Trail};
use serde::{Deserialize, Serialize};

/// Default map center (Tatra Mountains).
pub const TATRA_CENTER: LatLng = LatLng {
    lat: 49.2745,
    lng: 20.0419,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Map-displayable projection of a trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub position: LatLng,
    pub title: String,
    pub difficulty: Difficulty,
    pub slug: String,
    pub distance_km: f64,
    /// Name of the trail's first region.
    pub region: Option<String>,
}

/// Bounding box of a marker set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl MapBounds {
    /// Smallest box containing every marker, `None` for an empty set.
    pub fn from_markers(markers: &[Marker]) -> Option<Self> {
        let first = markers.first()?.position;
        let init = MapBounds {
            north: first.lat,
            south: first.lat,
            east: first.lng,
            west: first.lng,
        };
        Some(markers.iter().fold(init, |b, m| MapBounds {
            north: b.north.max(m.position.lat),
            south: b.south.min(m.position.lat),
            east: b.east.max(m.position.lng),
            west: b.west.min(m.position.lng),
        }))
    }

    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.north + self.south) / 2.0,
            lng: (self.east + self.west) / 2.0,
        }
    }
}

/// Parses an optional coordinate string.
///
/// - Trims surrounding whitespace.
/// - Returns `None` when missing, unparseable, NaN or infinite.
pub fn parse_coordinate(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|f| f.is_finite())
}

/// `true` when both coordinates are finite and inside ±90 / ±180.
pub fn is_valid_gps(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

/// Position of a trail, if it has parseable coordinates.
///
/// Range is not checked here; use [`is_valid_gps`] for that.
pub fn trail_position(trail: &Trail) -> Option<LatLng> {
    let lat = parse_coordinate(trail.trail_data.gps_latitude.as_deref())?;
    let lng = parse_coordinate(trail.trail_data.gps_longitude.as_deref())?;
    Some(LatLng { lat, lng })
}

pub fn marker_for(trail: &Trail) -> Option<Marker> {
    trail_position(trail).map(|position| Marker {
        id: trail.id.clone(),
        position,
        title: trail.title.clone(),
        difficulty: trail.trail_data.difficulty,
        slug: trail.slug.clone(),
        distance_km: trail.trail_data.distance_km,
        region: trail.primary_region().map(str::to_string),
    })
}

/// Project trails to markers, preserving input order.
pub fn project_markers<'a>(trails: impl IntoIterator<Item = &'a Trail>) -> Vec<Marker> {
    trails.into_iter().filter_map(marker_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrailData;

    fn located(slug: &str, lat: Option<&str>, lng: Option<&str>) -> Trail {
        let mut data = TrailData::new(Difficulty::Moderate);
        data.gps_latitude = lat.map(str::to_string);
        data.gps_longitude = lng.map(str::to_string);
        Trail::new(slug, slug, slug, data)
    }

    #[test]
    fn drops_missing_and_unparseable_coordinates() {
        let trails = vec![
            located("ok", Some("49.2016"), Some(" 20.0731 ")),
            located("no-lat", None, Some("20.0")),
            located("garbage", Some("north"), Some("20.0")),
            located("nan", Some("NaN"), Some("20.0")),
            located("inf", Some("49.0"), Some("inf")),
            located("empty", Some(""), Some("")),
        ];
        let markers = project_markers(&trails);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].slug, "ok");
        assert_eq!(markers[0].position, LatLng { lat: 49.2016, lng: 20.0731 });
    }

    #[test]
    fn out_of_range_coordinates_pass_through() {
        let trails = vec![located("far", Some("123.0"), Some("-500"))];
        let markers = project_markers(&trails);
        assert_eq!(markers.len(), 1);
        assert!(!is_valid_gps(markers[0].position.lat, markers[0].position.lng));
    }

    #[test]
    fn bounds_enclose_all_markers() {
        let trails = vec![
            located("a", Some("49.2"), Some("19.9")),
            located("b", Some("49.3"), Some("20.1")),
        ];
        let bounds = MapBounds::from_markers(&project_markers(&trails)).unwrap();
        assert_eq!(bounds.north, 49.3);
        assert_eq!(bounds.south, 49.2);
        assert_eq!(bounds.east, 20.1);
        assert_eq!(bounds.west, 19.9);
        assert!(MapBounds::from_markers(&[]).is_none());
    }
}
