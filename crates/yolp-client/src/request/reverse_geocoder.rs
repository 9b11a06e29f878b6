use serde::Serialize;

use super::GeoCoderDatum;
use crate::query::decimal;

/// Parameters for the reverse geocoder endpoint (`/geoapi/V1/reverseGeoCoder`).
///
/// `lat` and `lon` are mandatory on the wire; they are plain `f64` so they
/// are always sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReverseGeoCoderRequest {
    #[serde(serialize_with = "decimal")]
    pub lat: f64,

    #[serde(serialize_with = "decimal")]
    pub lon: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datum: Option<GeoCoderDatum>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

impl ReverseGeoCoderRequest {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::to_query_string;

    #[test]
    fn coordinates_are_always_present() {
        assert_eq!(
            to_query_string(&ReverseGeoCoderRequest::new(35.0, 139.0)).unwrap(),
            "lat=35&lon=139"
        );
    }

    #[test]
    fn optional_fields_follow_coordinates() {
        let request = ReverseGeoCoderRequest {
            datum: Some(GeoCoderDatum::World),
            ..ReverseGeoCoderRequest::new(35.681_236, 139.767_125)
        };
        assert_eq!(
            to_query_string(&request).unwrap(),
            "lat=35.681236&lon=139.767125&datum=wgs"
        );
    }
}
