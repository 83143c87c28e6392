// src/models/numeric.rs

//! Deserializers for integer fields that browsers may send as strings.
//! Form values and object keys reach the API as `"3"` as often as `3`.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber<T> {
    Number(T),
    Text(String),
}

impl<T> RawNumber<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn into_number<E: serde::de::Error>(self) -> Result<T, E> {
        match self {
            RawNumber::Number(n) => Ok(n),
            RawNumber::Text(s) => s.trim().parse().map_err(E::custom),
        }
    }
}

/// Accepts `3` or `"3"`.
pub fn number_or_numeric_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    RawNumber::<T>::deserialize(deserializer)?.into_number()
}

/// Like [`number_or_numeric_string`], with `null` read as `None`.
/// Pair with `#[serde(default)]` so a missing field is `None` too.
pub fn optional_number_or_numeric_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    Option::<RawNumber<T>>::deserialize(deserializer)?
        .map(|raw| raw.into_number::<D::Error>())
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "number_or_numeric_string")]
        count: i32,
        #[serde(default, deserialize_with = "optional_number_or_numeric_string")]
        id: Option<i64>,
    }

    #[test]
    fn reads_numbers_and_numeric_strings() {
        let a: Sample = serde_json::from_value(json!({ "count": 3, "id": 7 })).unwrap();
        let b: Sample = serde_json::from_value(json!({ "count": " 3 ", "id": "7" })).unwrap();
        assert_eq!((a.count, a.id), (3, Some(7)));
        assert_eq!((b.count, b.id), (3, Some(7)));
    }

    #[test]
    fn optional_field_may_be_missing_or_null() {
        let missing: Sample = serde_json::from_value(json!({ "count": 1 })).unwrap();
        let null: Sample = serde_json::from_value(json!({ "count": 1, "id": null })).unwrap();
        assert_eq!(missing.id, None);
        assert_eq!(null.id, None);
    }

    #[test]
    fn rejects_text_and_fractions() {
        assert!(serde_json::from_value::<Sample>(json!({ "count": "three" })).is_err());
        assert!(serde_json::from_value::<Sample>(json!({ "count": 1.5 })).is_err());
        assert!(serde_json::from_value::<Sample>(json!({ "count": 1, "id": "x" })).is_err());
    }
}
