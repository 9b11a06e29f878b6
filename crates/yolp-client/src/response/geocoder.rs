use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::{AddressElement, Country, Geometry, ResultInfo};
use crate::extra::ExtraFields;

/// Response of the geocoder endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeoCoderResult {
    pub result_info: Option<ResultInfo>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub feature: Vec<GeoCoderFeature>,
}

/// One address matching the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeoCoderFeature {
    /// Address ID.
    pub id: Option<String>,
    pub gid: Option<String>,
    pub name: Option<String>,
    pub geometry: Option<Geometry>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub category: Vec<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub style: Vec<String>,
    pub property: Option<GeoCoderProperty>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeoCoderProperty {
    pub uid: Option<String>,
    pub cassette_id: Option<String>,
    /// Reading of the name in katakana.
    pub yomi: Option<String>,
    pub country: Option<Country>,
    pub address: Option<String>,
    /// Prefecture down to block, coarse to fine.
    #[serde(deserialize_with = "super::null_as_empty")]
    pub address_element: Vec<AddressElement>,
    /// JIS X 0402 code.
    pub government_code: Option<String>,
    pub address_matching_level: Option<String>,
    pub detail: Option<GeoCoderPropertyDetail>,
    /// How closely the address matched the query.
    pub approximation: Option<String>,
}

/// Detail record of a geocoder feature; unnamed keys land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoCoderPropertyDetail {
    /// Reading of the name in hiragana.
    pub name_hiragana: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl GeoCoderPropertyDetail {
    /// Decodes an unnamed detail key into `T`; see [`ExtraFields::get_extra`].
    #[must_use]
    pub fn get_extra<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.extra.get_extra(key)
    }
}

impl<'de> Deserialize<'de> for GeoCoderPropertyDetail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut extra = ExtraFields::deserialize(deserializer)?;
        let name_hiragana = extra.take("NameHiragana").map_err(de::Error::custom)?;
        Ok(Self {
            name_hiragana,
            extra,
        })
    }
}
