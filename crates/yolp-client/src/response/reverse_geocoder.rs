use serde::{Deserialize, Serialize};

use super::{AddressElement, Building, Country, Geometry, ResultInfo};

/// Response of the reverse geocoder endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReverseGeoCoderResult {
    pub result_info: Option<ResultInfo>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub feature: Vec<ReverseGeoCoderFeature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReverseGeoCoderFeature {
    pub geometry: Option<Geometry>,
    pub property: Option<ReverseGeoCoderProperty>,
}

/// Address, building, and road at the requested coordinate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReverseGeoCoderProperty {
    pub country: Option<Country>,
    pub address: Option<String>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub address_element: Vec<AddressElement>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub building: Vec<Building>,
    pub road: Option<Road>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Road {
    pub name: Option<String>,
    pub kana: Option<String>,
    pub popular_name: Option<String>,
    pub popular_kana: Option<String>,
}
