use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::{AddressElement, Building, Country, Geometry, ResultInfo};
use crate::extra::ExtraFields;

/// Response of the local search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocalSearchResult {
    pub result_info: Option<ResultInfo>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub feature: Vec<LocalSearchFeature>,
}

/// One point of interest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocalSearchFeature {
    /// ID inside the cassette.
    pub id: Option<String>,
    /// Per-location management ID.
    pub gid: Option<String>,
    pub name: Option<String>,
    /// WGS84 position of the place.
    pub geometry: Option<Geometry>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub category: Vec<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub style: Vec<String>,
    pub property: Option<LocalSearchProperty>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocalSearchProperty {
    /// Identifier inside YOLP.
    pub uid: Option<String>,
    pub cassette_id: Option<String>,
    /// Reading of the name.
    pub yomi: Option<String>,
    pub country: Option<Country>,
    /// Single-line address.
    pub address: Option<String>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub address_element: Vec<AddressElement>,
    /// JIS X 0401 code (five digits).
    pub government_code: Option<String>,
    pub address_matching_level: Option<String>,
    /// Up to three nearby stations.
    #[serde(deserialize_with = "super::null_as_empty")]
    pub station: Vec<Station>,
    pub place: Option<Place>,
    pub tel1: Option<String>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub genre: Vec<Genre>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub building: Vec<Building>,
    pub catch_copy: Option<String>,
    pub review_count: u32,
    pub create_date: Option<String>,
    pub smart_phone_coupon_flag: Option<String>,
    pub open_for_business: Option<String>,
    pub parking_flag: Option<String>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub coupon: Vec<String>,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub area: Vec<Area>,
    pub detail: Option<LocalSearchPropertyDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Area {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Nearest station, measured from its closest exit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Station {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Main line serving the station.
    pub railway: Option<String>,
    pub exit: Option<String>,
    pub exit_id: Option<String>,
    /// Metres from the exit.
    pub distance: Option<String>,
    /// Walking time from the exit.
    pub time: Option<String>,
    pub geometry: Option<Geometry>,
}

/// Where inside a building the place is, and how to map it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Place {
    pub floor_name: Option<String>,
    pub map_type: Option<String>,
    /// Map scale suited to showing this place.
    pub map_scale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Genre {
    /// YOLP industry code.
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Cassette-specific detail fields.
///
/// Cassettes attach their own keys here; anything not named below is kept
/// in [`LocalSearchPropertyDetail::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalSearchPropertyDetail {
    pub zip_code: Option<String>,
    pub altitude: Option<String>,
    pub copyright: Option<String>,
    pub cassette_owner: Option<String>,
    pub cassette_header: Option<String>,
    pub cassette_footer: Option<String>,
    pub cassette_owner_url: Option<String>,
    pub cassette_owner_mobile_url: Option<String>,
    pub fax1: Option<String>,
    pub access1: Option<String>,
    pub pc_url1: Option<String>,
    pub mobile_url1: Option<String>,
    pub review_url: Option<String>,
    pub image1: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl LocalSearchPropertyDetail {
    /// Decodes an unnamed detail key into `T`; see [`ExtraFields::get_extra`].
    #[must_use]
    pub fn get_extra<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.extra.get_extra(key)
    }
}

impl<'de> Deserialize<'de> for LocalSearchPropertyDetail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut extra = ExtraFields::deserialize(deserializer)?;
        let mut field = |key: &str| -> Result<Option<String>, D::Error> {
            extra.take(key).map_err(de::Error::custom)
        };

        let zip_code = field("ZipCode")?;
        let altitude = field("Altitude")?;
        let copyright = field("Copyright")?;
        let cassette_owner = field("CassetteOwner")?;
        let cassette_header = field("CassetteHeader")?;
        let cassette_footer = field("CassetteFooter")?;
        let cassette_owner_url = field("CassetteOwnerUrl")?;
        let cassette_owner_mobile_url = field("CassetteOwnerMobileUrl")?;
        let fax1 = field("Fax1")?;
        let access1 = field("Access1")?;
        let pc_url1 = field("PcUrl1")?;
        let mobile_url1 = field("MobileUrl1")?;
        let review_url = field("ReviewUrl")?;
        let image1 = field("Image1")?;

        Ok(Self {
            zip_code,
            altitude,
            copyright,
            cassette_owner,
            cassette_header,
            cassette_footer,
            cassette_owner_url,
            cassette_owner_mobile_url,
            fax1,
            access1,
            pc_url1,
            mobile_url1,
            review_url,
            image1,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::json::from_value;

    fn fixture() -> serde_json::Value {
        json!({
            "ResultInfo": {
                "Count": 1,
                "Total": 128,
                "Start": 1,
                "Status": 200,
                "Latency": 0.042
            },
            "Feature": [{
                "Id": "20130315165853_ramen",
                "Gid": "a1b2c3",
                "Name": "麺屋 六本木",
                "Geometry": { "Type": "point", "Coordinates": "139.73359259,35.66288632" },
                "Category": ["ラーメン"],
                "Description": "",
                "Style": [],
                "Property": {
                    "Uid": "9f8e7d",
                    "CassetteId": "d8a23e9e64a4c817227ab09858bc1330",
                    "Yomi": "メンヤロッポンギ",
                    "Country": { "Code": "JP", "Name": "日本" },
                    "Address": "東京都港区六本木6-10-1",
                    "GovernmentCode": "13103",
                    "AddressMatchingLevel": "6",
                    "Tel1": "03-0000-0000",
                    "Genre": [{ "Code": "0101001", "Name": "ラーメン" }],
                    "Station": [{
                        "Id": "22715",
                        "Name": "六本木",
                        "Railway": "東京メトロ日比谷線",
                        "Exit": "1C",
                        "ExitId": "22715-1c",
                        "Distance": "120",
                        "Time": "2",
                        "Geometry": { "Type": "point", "Coordinates": "139.7317,35.6627" }
                    }],
                    "ReviewCount": 12,
                    "ParkingFlag": "false",
                    "Coupon": [],
                    "Area": [{ "Code": "A01", "Name": "六本木" }],
                    "Detail": {
                        "ZipCode": "106-0032",
                        "PcUrl1": "https://example.jp/menya",
                        "OpenTime": "11:00-23:00",
                        "Seats": 20
                    }
                }
            }]
        })
    }

    #[test]
    fn decodes_full_feature() {
        let result: LocalSearchResult = from_value(fixture()).expect("fixture should decode");

        let info = result.result_info.expect("result info");
        assert_eq!(info.count, 1);
        assert_eq!(info.total, 128);
        assert_eq!(info.status, 200);
        assert_eq!(result.feature.len(), 1);

        let feature = &result.feature[0];
        assert_eq!(feature.name.as_deref(), Some("麺屋 六本木"));
        assert_eq!(feature.category, ["ラーメン"]);

        let property = feature.property.as_ref().expect("property");
        assert_eq!(property.government_code.as_deref(), Some("13103"));
        assert_eq!(property.review_count, 12);
        assert_eq!(property.station[0].exit_id.as_deref(), Some("22715-1c"));
        assert_eq!(property.genre[0].code.as_deref(), Some("0101001"));
        assert_eq!(
            property.country.as_ref().and_then(|c| c.code.as_deref()),
            Some("JP")
        );
    }

    #[test]
    fn detail_splits_named_and_extra_keys() {
        let result: LocalSearchResult = from_value(fixture()).unwrap();
        let detail = result.feature[0]
            .property
            .as_ref()
            .and_then(|p| p.detail.as_ref())
            .expect("detail");

        assert_eq!(detail.zip_code.as_deref(), Some("106-0032"));
        assert_eq!(detail.pc_url1.as_deref(), Some("https://example.jp/menya"));
        assert_eq!(detail.extra.len(), 2);
        assert_eq!(
            detail.get_extra::<String>("opentime").as_deref(),
            Some("11:00-23:00")
        );
        assert_eq!(detail.get_extra::<u32>("Seats"), Some(20));
        assert_eq!(detail.get_extra::<u32>("Missing"), None);
    }

    #[test]
    fn detail_named_keys_match_any_case() {
        let detail: LocalSearchPropertyDetail =
            from_value(json!({ "zipcode": "100-0001", "FAX1": "03-1111-2222" })).unwrap();
        assert_eq!(detail.zip_code.as_deref(), Some("100-0001"));
        assert_eq!(detail.fax1.as_deref(), Some("03-1111-2222"));
        assert!(detail.extra.is_empty());
    }

    #[test]
    fn detail_rejects_non_string_named_field() {
        let result = from_value::<LocalSearchPropertyDetail>(json!({ "ZipCode": 1_000_001 }));
        assert!(result.is_err());
    }

    #[test]
    fn detail_reserializes_extra_inline() {
        let result: LocalSearchResult = from_value(fixture()).unwrap();
        let detail = result.feature[0]
            .property
            .as_ref()
            .and_then(|p| p.detail.clone())
            .unwrap();

        let rendered = serde_json::to_value(&detail).unwrap();
        assert_eq!(rendered["ZipCode"], "106-0032");
        assert_eq!(rendered["OpenTime"], "11:00-23:00");

        let reparsed: LocalSearchPropertyDetail = from_value(rendered).unwrap();
        assert_eq!(reparsed, detail);
    }

    #[test]
    fn null_feature_list_decodes_as_empty() {
        let result: LocalSearchResult = crate::json::from_str(
            r#"{"ResultInfo":{"Count":0,"Total":0,"Start":1,"Status":200},"Feature":null}"#,
        )
        .expect("null Feature should be accepted");
        assert_eq!(result.result_info.unwrap().status, 200);
        assert!(result.feature.is_empty());
    }

    #[test]
    fn null_property_lists_decode_as_empty() {
        let result: LocalSearchResult = from_value(json!({
            "Feature": [{
                "Category": null,
                "Style": null,
                "Property": {
                    "AddressElement": null, "Station": null, "Genre": null,
                    "Building": null, "Coupon": null, "Area": null
                }
            }]
        }))
        .unwrap();
        let feature = &result.feature[0];
        assert!(feature.category.is_empty() && feature.style.is_empty());
        let property = feature.property.as_ref().unwrap();
        assert!(property.address_element.is_empty());
        assert!(property.station.is_empty());
        assert!(property.genre.is_empty());
        assert!(property.building.is_empty());
        assert!(property.coupon.is_empty());
        assert!(property.area.is_empty());
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let result: LocalSearchResult = crate::json::from_str("{}").unwrap();
        assert!(result.result_info.is_none());
        assert!(result.feature.is_empty());
    }
}
