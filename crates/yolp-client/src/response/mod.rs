//! Response models for the three YOLP endpoints.
//!
//! All records use PascalCase wire names, tolerate missing keys (absent
//! strings and objects become `None`, absent arrays empty, absent numbers
//! zero), and are decoded case-insensitively by [`crate::json`]. Only the
//! `Detail` records keep keys they do not name, in an [`crate::ExtraFields`].

mod geocoder;
mod local_search;
mod reverse_geocoder;

use serde::{Deserialize, Deserializer, Serialize};

pub use geocoder::{GeoCoderFeature, GeoCoderProperty, GeoCoderPropertyDetail, GeoCoderResult};
pub use local_search::{
    Area, Genre, LocalSearchFeature, LocalSearchProperty, LocalSearchPropertyDetail,
    LocalSearchResult, Place, Station,
};
pub use reverse_geocoder::{
    ReverseGeoCoderFeature, ReverseGeoCoderProperty, ReverseGeoCoderResult, Road,
};

/// Decodes an array field, reading an explicit `null` as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Summary block (`ResultInfo`) present on every response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultInfo {
    /// Records contained in this response.
    pub count: u32,
    /// Records matching the request overall.
    pub total: u32,
    /// Position of the first record within `total`.
    pub start: u32,
    /// Processing status; `200` on success.
    pub status: u32,
    /// Seconds the server spent producing the response.
    pub latency: f64,
    pub description: Option<String>,
}

/// Location of a feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Geometry {
    /// Shape kind, e.g. `"point"`.
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    /// `"lon,lat"` in decimal degrees.
    pub coordinates: Option<String>,
    pub bounding_box: Option<String>,
}

impl Geometry {
    /// Parses `coordinates` as a `(lon, lat)` point.
    ///
    /// Returns `None` when the string is missing or not two comma-separated
    /// numbers.
    #[must_use]
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        let (lon, lat) = self.coordinates.as_deref()?.split_once(',')?;
        Some((lon.trim().parse().ok()?, lat.trim().parse().ok()?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Country {
    /// ISO 3166-1 country code.
    pub code: Option<String>,
    pub name: Option<String>,
}

/// One level of a structured address (prefecture, city, *ōaza*, *aza*, ...).
///
/// Local search fills `name`/`kana`/`level`; the geocoder adds
/// `government_code`; the reverse geocoder uses `code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AddressElement {
    /// `prefecture`, `city`, `oaza`, `aza`, `detail1`, ...
    pub level: Option<String>,
    pub name: Option<String>,
    /// Reading in katakana.
    pub kana: Option<String>,
    pub code: Option<String>,
    pub government_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Building {
    /// Building ID. May change over time.
    pub id: Option<String>,
    pub name: Option<String>,
    pub floor: Option<String>,
    pub area: Option<String>,
}
