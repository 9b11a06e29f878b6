//! Case-insensitive JSON decoding.
//!
//! YOLP documents its keys in PascalCase but does not guarantee the casing,
//! so struct fields are matched against incoming object keys ignoring ASCII
//! case. Decoding goes through a [`serde_json::Value`] wrapped in a
//! deserializer that rewrites keys to the declared wire names whenever the
//! target asks for a struct; every other shape defers to `Value` itself.

use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer, Visitor};
use serde::{forward_to_deserialize_any, Deserializer};
use serde_json::{Map, Value};

/// Parses `text` as JSON and decodes it into `T`, matching struct fields
/// case-insensitively.
///
/// # Errors
///
/// Returns the underlying `serde_json::Error` if `text` is not JSON or does
/// not fit the shape of `T`.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    from_value(value)
}

/// Decodes an already-parsed JSON value into `T`, matching struct fields
/// case-insensitively.
///
/// # Errors
///
/// Returns a `serde_json::Error` if `value` does not fit the shape of `T`.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    T::deserialize(CaseInsensitive(value))
}

/// Maps `key` onto the declared field it matches ignoring ASCII case. Keys
/// with no counterpart pass through untouched so overflow maps keep them.
fn canonical_key(key: String, fields: &[&str]) -> String {
    if fields.contains(&key.as_str()) {
        return key;
    }
    fields
        .iter()
        .find(|field| field.eq_ignore_ascii_case(&key))
        .map_or(key, |field| (*field).to_string())
}

struct CaseInsensitive(Value);

impl CaseInsensitive {
    fn visit_object<'de, V>(
        map: Map<String, Value>,
        fields: &[&str],
        visitor: V,
    ) -> Result<V::Value, serde_json::Error>
    where
        V: Visitor<'de>,
    {
        // Fields spelled exactly as declared shadow their case variants; among
        // variants alone, the last one seen wins.
        let exact: Vec<&str> = fields
            .iter()
            .copied()
            .filter(|field| map.contains_key(*field))
            .collect();
        let mut folded = Map::new();
        for (key, value) in map {
            let shadowed = !exact.contains(&key.as_str())
                && exact.iter().any(|field| field.eq_ignore_ascii_case(&key));
            if !shadowed {
                folded.insert(canonical_key(key, fields), value);
            }
        }

        let entries = folded.into_iter().map(|(key, value)| (key, CaseInsensitive(value)));
        let mut access = MapDeserializer::new(entries);
        let decoded = visitor.visit_map(&mut access)?;
        access.end()?;
        Ok(decoded)
    }
}

impl<'de> IntoDeserializer<'de, serde_json::Error> for CaseInsensitive {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> Deserializer<'de> for CaseInsensitive {
    type Error = serde_json::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Array(items) => {
                let mut access = SeqDeserializer::new(items.into_iter().map(CaseInsensitive));
                let decoded = visitor.visit_seq(&mut access)?;
                access.end()?;
                Ok(decoded)
            }
            Value::Object(map) => Self::visit_object(map, &[], visitor),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(CaseInsensitive(other)),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Value::Object(map) => Self::visit_object(map, fields, visitor),
            other => CaseInsensitive(other).deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        // Wire tokens are exact ("-kana" and "kana" differ only by prefix).
        self.0.deserialize_enum(name, variants, visitor)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase", default)]
    struct Inner {
        zip_code: Option<String>,
        count: u32,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase", default)]
    struct Outer {
        name: Option<String>,
        inner: Option<Inner>,
        items: Vec<Inner>,
    }

    #[test]
    fn matches_fields_regardless_of_case() {
        let decoded: Outer = from_value(json!({
            "NAME": "Tokyo Tower",
            "inner": { "zipcode": "105-0011", "COUNT": 3 },
            "Items": [{ "zipCode": "100-0001" }]
        }))
        .expect("should decode");

        assert_eq!(decoded.name.as_deref(), Some("Tokyo Tower"));
        let inner = decoded.inner.expect("inner should be present");
        assert_eq!(inner.zip_code.as_deref(), Some("105-0011"));
        assert_eq!(inner.count, 3);
        assert_eq!(decoded.items[0].zip_code.as_deref(), Some("100-0001"));
    }

    #[test]
    fn exact_case_wins_over_folded_match() {
        assert_eq!(canonical_key("Count".to_string(), &["Count"]), "Count");
        assert_eq!(canonical_key("count".to_string(), &["Count"]), "Count");
        assert_eq!(canonical_key("Unknown".to_string(), &["Count"]), "Unknown");
    }

    #[test]
    fn exact_spelling_shadows_case_variant() {
        let decoded: Outer =
            from_value(json!({ "Name": "exact", "name": "lower", "NAME": "upper" })).unwrap();
        assert_eq!(decoded.name.as_deref(), Some("exact"));
    }

    #[test]
    fn case_variants_without_exact_spelling_keep_one_value() {
        let decoded: Outer = from_value(json!({ "name": "a", "NAME": "b" }))
            .expect("case variants of one field should not be a duplicate");
        assert!(matches!(decoded.name.as_deref(), Some("a" | "b")));
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let decoded: Inner = from_value(json!({ "Count": 1, "Surprise": [1, 2, 3] }))
            .expect("unknown keys should be ignored");
        assert_eq!(decoded.count, 1);
    }

    #[test]
    fn null_decodes_to_none() {
        let decoded: Outer = from_value(json!({ "Name": null, "Inner": null })).unwrap();
        assert_eq!(decoded, Outer::default());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let decoded: Outer = from_str("{}").unwrap();
        assert_eq!(decoded, Outer::default());
    }

    #[test]
    fn raw_values_survive_untouched() {
        let value = json!({ "Nested": { "lowercase": [1, "two", null] } });
        let decoded: Value = from_value(value.clone()).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(from_str::<Outer>("{not json").is_err());
        assert!(from_str::<Inner>(r#"{"Count": "many"}"#).is_err());
    }
}
