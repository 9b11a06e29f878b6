use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::query::decimal_opt;

/// Parameters for the geocoder endpoint (`/geocode/V1/geoCoder`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoCoderRequest {
    /// Address to look up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Character encoding of `query`.
    #[serde(rename = "ei", skip_serializing_if = "Option::is_none")]
    pub encoding: Option<GeoCoderEncoding>,

    #[serde(serialize_with = "decimal_opt", skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(serialize_with = "decimal_opt", skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,

    /// `min_lon,min_lat,max_lon,max_lat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datum: Option<GeoCoderDatum>,

    /// JIS X 0401/0402 address code.
    #[serde(rename = "ac", skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,

    #[serde(rename = "al", skip_serializing_if = "Option::is_none")]
    pub address_level: Option<GeoCoderAddressLevel>,

    /// How `address_level` is compared against each record's level.
    #[serde(rename = "ar", skip_serializing_if = "Option::is_none")]
    pub address_range: Option<GeoCoderAddressRange>,

    /// Retry at the next coarser level when nothing matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<GeoCoderSort>,

    /// `false` includes prefecture records in the search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_prefecture: Option<bool>,

    /// `false` includes designated-city records in the search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_seireishi: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,

    /// Page number; mutually exclusive with `start`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<YdfDetailLevel>,
}

impl GeoCoderRequest {
    pub const START_RANGE: RangeInclusive<u32> = 1..=100;
    pub const PAGE_RANGE: RangeInclusive<u32> = 1..=100;
    pub const RESULTS_RANGE: RangeInclusive<u32> = 1..=100;

    /// Request with only an address query set.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }
}

/// Character encoding of the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoCoderEncoding {
    #[serde(rename = "UTF-8")]
    Utf8,
    #[serde(rename = "EUC-JP")]
    EucJp,
    #[serde(rename = "SJIS")]
    ShiftJis,
}

impl GeoCoderEncoding {
    pub const ALL: [Self; 3] = [Self::Utf8, Self::EucJp, Self::ShiftJis];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::EucJp => "EUC-JP",
            Self::ShiftJis => "SJIS",
        }
    }
}

/// Geodetic datum of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoCoderDatum {
    /// World Geodetic System (WGS84).
    #[serde(rename = "wgs")]
    World,
    /// Tokyo datum.
    #[serde(rename = "tky")]
    Tokyo,
}

impl GeoCoderDatum {
    pub const ALL: [Self; 2] = [Self::World, Self::Tokyo];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::World => "wgs",
            Self::Tokyo => "tky",
        }
    }
}

/// Depth of the address hierarchy to search at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeoCoderAddressLevel {
    #[serde(rename = "1")]
    Prefecture,
    #[serde(rename = "2")]
    Municipality,
    /// Town or *ōaza*.
    #[serde(rename = "3")]
    District,
    /// *Chōme* or *aza*.
    #[serde(rename = "4")]
    Block,
}

impl GeoCoderAddressLevel {
    pub const ALL: [Self; 4] = [
        Self::Prefecture,
        Self::Municipality,
        Self::District,
        Self::Block,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prefecture => "1",
            Self::Municipality => "2",
            Self::District => "3",
            Self::Block => "4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoCoderAddressRange {
    #[serde(rename = "ge")]
    GreaterOrEqual,
    #[serde(rename = "le")]
    LessOrEqual,
    #[serde(rename = "eq")]
    Equal,
}

impl GeoCoderAddressRange {
    pub const ALL: [Self; 3] = [Self::GreaterOrEqual, Self::LessOrEqual, Self::Equal];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GreaterOrEqual => "ge",
            Self::LessOrEqual => "le",
            Self::Equal => "eq",
        }
    }
}

/// Result ordering for geocoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoCoderSort {
    /// Best match first.
    #[serde(rename = "score")]
    Score,
    #[serde(rename = "dist")]
    Distance,
    #[serde(rename = "kana")]
    Kana,
    #[serde(rename = "-kana")]
    KanaDescending,
    /// Address hierarchy order.
    #[serde(rename = "address")]
    Address,
    /// Most frequently searched addresses first.
    #[serde(rename = "address2")]
    Popularity,
}

impl GeoCoderSort {
    pub const ALL: [Self; 6] = [
        Self::Score,
        Self::Distance,
        Self::Kana,
        Self::KanaDescending,
        Self::Address,
        Self::Popularity,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Distance => "dist",
            Self::Kana => "kana",
            Self::KanaDescending => "-kana",
            Self::Address => "address",
            Self::Popularity => "address2",
        }
    }
}

/// Output detail level of YDF responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YdfDetailLevel {
    Simple,
    Standard,
    Full,
}

impl YdfDetailLevel {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Standard, Self::Full];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Standard => "standard",
            Self::Full => "full",
        }
    }
}

display_via_as_str!(
    GeoCoderEncoding,
    GeoCoderDatum,
    GeoCoderAddressLevel,
    GeoCoderAddressRange,
    GeoCoderSort,
    YdfDetailLevel,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::to_query_string;

    #[test]
    fn default_request_serializes_to_nothing() {
        assert_eq!(to_query_string(&GeoCoderRequest::default()).unwrap(), "");
    }

    #[test]
    fn enum_fields_use_wire_tokens() {
        let request = GeoCoderRequest {
            query: Some("東京都港区六本木".to_string()),
            encoding: Some(GeoCoderEncoding::Utf8),
            datum: Some(GeoCoderDatum::Tokyo),
            address_level: Some(GeoCoderAddressLevel::District),
            address_range: Some(GeoCoderAddressRange::LessOrEqual),
            recursive: Some(true),
            sort: Some(GeoCoderSort::KanaDescending),
            exclude_seireishi: Some(false),
            results: Some(10),
            detail: Some(YdfDetailLevel::Full),
            ..GeoCoderRequest::default()
        };
        let query = to_query_string(&request).unwrap();
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&query).unwrap();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "query",
                "ei",
                "datum",
                "al",
                "ar",
                "recursive",
                "sort",
                "exclude_seireishi",
                "results",
                "detail"
            ]
        );
        assert_eq!(pairs[0].1, "東京都港区六本木");
        assert_eq!(pairs[1].1, "UTF-8");
        assert_eq!(pairs[2].1, "tky");
        assert_eq!(pairs[3].1, "3");
        assert_eq!(pairs[4].1, "le");
        assert_eq!(pairs[6].1, "-kana");
        assert_eq!(pairs[7].1, "false");
        assert_eq!(pairs[9].1, "full");
    }

    #[test]
    fn display_matches_wire_token() {
        assert_eq!(GeoCoderSort::Popularity.to_string(), "address2");
        assert_eq!(GeoCoderEncoding::ShiftJis.to_string(), "SJIS");
        assert_eq!(GeoCoderAddressLevel::Block.to_string(), "4");
    }

    #[test]
    fn address_levels_order_coarse_to_fine() {
        assert!(GeoCoderAddressLevel::Prefecture < GeoCoderAddressLevel::Block);
    }
}
