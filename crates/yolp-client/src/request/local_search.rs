use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::query::decimal_opt;

/// Parameters for the local search endpoint (`/search/local/V1/localSearch`).
///
/// Multi-valued identifiers (`cid`, `gid`, `id`, `bid`) are comma-separated
/// strings, as the API expects them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocalSearchRequest {
    /// `"mobile"` when results are shown on a mobile device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Free-text query over place names and business categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Cassette IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,

    /// Deduplicated store IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gid: Option<String>,

    /// IDs assigned inside a cassette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Building IDs. These can change over time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<String>,

    /// `"gid"` groups records that describe the same store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// With `group=gid`, whether duplicate records are collapsed (API default `true`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<LocalSearchSort>,

    /// Offset of the first result; see [`LocalSearchRequest::START_RANGE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,

    /// Page size; see [`LocalSearchRequest::RESULTS_RANGE`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<LocalSearchDetail>,

    /// JSONP callback name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,

    #[serde(serialize_with = "decimal_opt", skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(serialize_with = "decimal_opt", skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,

    /// Search radius in kilometres around `lat`/`lon` (max 20, fractions allowed).
    #[serde(serialize_with = "decimal_opt", skip_serializing_if = "Option::is_none")]
    pub dist: Option<f64>,

    /// `min_lon,min_lat,max_lon,max_lat` in WGS84 decimal degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<String>,

    /// JIS X 0401 prefecture code or ISO 3166-1 alpha-2 country code.
    #[serde(rename = "ac", skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,

    /// YOLP industry (genre) code.
    #[serde(rename = "gc", skip_serializing_if = "Option::is_none")]
    pub genre_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking: Option<bool>,

    #[serde(rename = "creditcard", skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<bool>,

    /// Only records that have an image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<LocalSearchSmoking>,

    /// `"1"` restricts results to places that accept reservations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<String>,

    /// Open at a given time: `date,hour`, `week,hour`, or `now`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,

    /// Enables special query handling (e.g. for queries of three characters or fewer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc_mode: Option<String>,

    /// Upper bound on the `Price` tag.
    #[serde(rename = "maxprice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,

    /// Lower bound on the `Price` tag.
    #[serde(rename = "minprice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u32>,
}

impl LocalSearchRequest {
    pub const START_RANGE: RangeInclusive<u32> = 0..=3000;
    pub const RESULTS_RANGE: RangeInclusive<u32> = 1..=100;

    /// Request with only a free-text query set.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }
}

/// Result ordering for local search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalSearchSort {
    #[serde(rename = "score")]
    Score,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "review")]
    Review,
    #[serde(rename = "hybrid")]
    Hybrid,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "distance")]
    Distance,
    #[serde(rename = "kan_lat")]
    KanLat,
    #[serde(rename = "pref_dist")]
    PrefDist,
    #[serde(rename = "area_code")]
    AreaCode,
    #[serde(rename = "gc_id")]
    GcId,
    #[serde(rename = "match")]
    Match,
}

impl LocalSearchSort {
    pub const ALL: [Self; 11] = [
        Self::Score,
        Self::Rating,
        Self::Review,
        Self::Hybrid,
        Self::Name,
        Self::Distance,
        Self::KanLat,
        Self::PrefDist,
        Self::AreaCode,
        Self::GcId,
        Self::Match,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Rating => "rating",
            Self::Review => "review",
            Self::Hybrid => "hybrid",
            Self::Name => "name",
            Self::Distance => "distance",
            Self::KanLat => "kan_lat",
            Self::PrefDist => "pref_dist",
            Self::AreaCode => "area_code",
            Self::GcId => "gc_id",
            Self::Match => "match",
        }
    }
}

/// How many fields each result carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalSearchDetail {
    Simple,
    Standard,
    Full,
}

impl LocalSearchDetail {
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

/// Smoking policy filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalSearchSmoking {
    /// Non-smoking.
    #[serde(rename = "1")]
    NonSmoking,
    /// Separate smoking area.
    #[serde(rename = "2")]
    Separated,
    /// Smoking allowed.
    #[serde(rename = "3")]
    Allowed,
}

impl LocalSearchSmoking {
    pub const ALL: [Self; 3] = [Self::NonSmoking, Self::Separated, Self::Allowed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonSmoking => "1",
            Self::Separated => "2",
            Self::Allowed => "3",
        }
    }
}

display_via_as_str!(LocalSearchSort, LocalSearchDetail, LocalSearchSmoking);
