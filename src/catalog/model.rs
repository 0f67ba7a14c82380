//! Emoji records and the decoder that builds them from raw catalog JSON.
//!
//! Decoding works on `serde_json::Value` rather than derived structs so each
//! failure maps onto a precise `CatalogError` (missing field, wrong type,
//! unknown modifier). A list decodes all-or-nothing: the first bad entry fails
//! the whole batch, wrapped with its index.

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::modifiers::{ColorModifier, Morph, is_valid_pairing};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Eq, PartialEq)]
/// One catalog entry.
pub struct Emoji {
    /// Unique shortcode; the catalog key.
    pub short: String,
    /// Shortcode of the unmodified base emoji (equal to `short` when unmodified).
    pub root: String,
    pub desc: String,
    pub cat: String,
    /// Unicode codepoints; empty when the dataset assigns none.
    pub code: Vec<u32>,
    pub color: Option<ColorModifier>,
    pub morph: Option<Morph>,
}

impl Emoji {
    /// True when the entry carries any modifier axis, so the picker should
    /// offer variants for it.
    pub fn is_modifiable(&self) -> bool {
        self.morph.is_some() || self.color.is_some()
    }

    pub fn has_valid_pairing(&self) -> bool {
        is_valid_pairing(self.morph, self.color)
    }
}

/// Reject entries whose morph/color pairing is not allowed.
///
/// Never called by the decoder; callers opt in when they want to enforce it.
pub fn check_pairing(emoji: &Emoji) -> CatalogResult<()> {
    if emoji.has_valid_pairing() {
        return Ok(());
    }
    Err(CatalogError::InvalidModifierCombo {
        short: emoji.short.clone(),
        morph: emoji.morph,
        color: emoji.color,
    })
}

/// Parse catalog JSON text and decode every entry.
pub fn decode_catalog_str(input: &str) -> CatalogResult<Vec<Emoji>> {
    let value: Value = serde_json::from_str(input)?;
    decode_catalog(&value)
}

/// Decode a JSON array of raw entries, failing on the first bad one.
pub fn decode_catalog(value: &Value) -> CatalogResult<Vec<Emoji>> {
    let entries = value.as_array().ok_or(CatalogError::NotAList)?;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            decode_emoji(entry).map_err(|err| CatalogError::Entry {
                index,
                source: Box::new(err),
            })
        })
        .collect()
}

/// Decode a single raw entry.
pub fn decode_emoji(value: &Value) -> CatalogResult<Emoji> {
    let object = value.as_object().ok_or(CatalogError::TypeMismatch {
        field: "entry",
        expected: "an object",
    })?;

    Ok(Emoji {
        short: required_str(object, "short")?,
        root: required_str(object, "root")?,
        desc: required_str(object, "desc")?,
        cat: required_str(object, "cat")?,
        code: decode_code(object)?,
        color: optional_modifier(object, "color", ColorModifier::from_code)?,
        morph: optional_modifier(object, "morph", Morph::from_code)?,
    })
}

fn required_str(object: &Map<String, Value>, field: &'static str) -> CatalogResult<String> {
    let value = object
        .get(field)
        .ok_or(CatalogError::FieldMissing { field })?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or(CatalogError::TypeMismatch {
            field,
            expected: "a string",
        })
}

// `code` is either a codepoint list or a string placeholder (the dataset uses
// "!") for entries without assigned codepoints. The string's content is ignored.
fn decode_code(object: &Map<String, Value>) -> CatalogResult<Vec<u32>> {
    const FIELD: &str = "code";
    const EXPECTED: &str = "an array of codepoints or a string";
    match object.get(FIELD) {
        None => Err(CatalogError::FieldMissing { field: FIELD }),
        Some(Value::String(_)) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|raw| u32::try_from(raw).ok())
                    .ok_or(CatalogError::TypeMismatch {
                        field: FIELD,
                        expected: EXPECTED,
                    })
            })
            .collect(),
        Some(_) => Err(CatalogError::TypeMismatch {
            field: FIELD,
            expected: EXPECTED,
        }),
    }
}

// Absent means the key is missing; an explicit `null` is a type error.
fn optional_modifier<T>(
    object: &Map<String, Value>,
    field: &'static str,
    decode: fn(&str) -> Option<T>,
) -> CatalogResult<Option<T>> {
    let Some(value) = object.get(field) else {
        return Ok(None);
    };
    let raw = value.as_str().ok_or(CatalogError::TypeMismatch {
        field,
        expected: "a string",
    })?;
    decode(raw)
        .map(Some)
        .ok_or_else(|| CatalogError::UnsupportedModifier {
            field,
            value: raw.to_string(),
        })
}

impl Serialize for Emoji {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 5 + usize::from(self.color.is_some()) + usize::from(self.morph.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("short", &self.short)?;
        map.serialize_entry("root", &self.root)?;
        map.serialize_entry("desc", &self.desc)?;
        map.serialize_entry("cat", &self.cat)?;
        map.serialize_entry("code", &self.code)?;
        if let Some(color) = &self.color {
            map.serialize_entry("color", color)?;
        }
        if let Some(morph) = &self.morph {
            map.serialize_entry("morph", morph)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Emoji {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_emoji(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::Color;
    use serde_json::json;

    fn raw_entry() -> Value {
        json!({
            "short": "poo",
            "root": "poo",
            "desc": "pile of poo",
            "cat": "objects",
            "code": [128169]
        })
    }

    #[test]
    fn decodes_codepoint_array_verbatim() {
        let emoji = decode_emoji(&raw_entry()).unwrap();
        assert_eq!(emoji.code, vec![128169]);
        assert_eq!(emoji.short, "poo");
        assert_eq!(emoji.desc, "pile of poo");
        assert_eq!(emoji.color, None);
        assert_eq!(emoji.morph, None);
        assert!(!emoji.is_modifiable());
    }

    #[test]
    fn string_code_decodes_to_empty() {
        for placeholder in ["!", "", "anything at all"] {
            let mut raw = raw_entry();
            raw["code"] = json!(placeholder);
            let emoji = decode_emoji(&raw).unwrap();
            assert!(emoji.code.is_empty(), "placeholder {placeholder:?}");
        }
    }

    #[test]
    fn multi_codepoint_order_is_preserved() {
        let mut raw = raw_entry();
        raw["code"] = json!([128075, 127995, 8205]);
        let emoji = decode_emoji(&raw).unwrap();
        assert_eq!(emoji.code, vec![128075, 127995, 8205]);
    }

    #[test]
    fn missing_and_mistyped_fields_are_reported() {
        let mut raw = raw_entry();
        raw.as_object_mut().unwrap().remove("desc");
        let err = decode_emoji(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::FieldMissing { field: "desc" }));

        let mut raw = raw_entry();
        raw["cat"] = json!(7);
        let err = decode_emoji(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::TypeMismatch { field: "cat", .. }));

        let mut raw = raw_entry();
        raw.as_object_mut().unwrap().remove("code");
        let err = decode_emoji(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::FieldMissing { field: "code" }));

        let mut raw = raw_entry();
        raw["code"] = json!([-1]);
        let err = decode_emoji(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::TypeMismatch { field: "code", .. }));

        let err = decode_emoji(&json!("poo")).unwrap_err();
        assert!(matches!(err, CatalogError::TypeMismatch { field: "entry", .. }));
    }

    #[test]
    fn modifiers_decode_through_code_tables() {
        let mut raw = raw_entry();
        raw["color"] = json!("h3");
        raw["morph"] = json!("hmn");
        let emoji = decode_emoji(&raw).unwrap();
        assert_eq!(emoji.color, Some(ColorModifier::Color(Color::H3)));
        assert_eq!(emoji.morph, Some(Morph::Human));
        assert!(emoji.is_modifiable());

        raw["color"] = json!("default");
        raw["morph"] = json!("clw");
        let emoji = decode_emoji(&raw).unwrap();
        assert_eq!(emoji.color, Some(ColorModifier::Default));
        assert_eq!(emoji.morph, Some(Morph::Claw));
    }

    #[test]
    fn unknown_modifier_names_field_and_value() {
        let mut raw = raw_entry();
        raw["morph"] = json!("claw");
        let err = decode_emoji(&raw).unwrap_err();
        match err {
            CatalogError::UnsupportedModifier { field, value } => {
                assert_eq!(field, "morph");
                assert_eq!(value, "claw");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let mut raw = raw_entry();
        raw["color"] = json!("chartreuse");
        let err = decode_emoji(&raw).unwrap_err();
        assert!(err.to_string().contains("chartreuse"));
    }

    #[test]
    fn null_modifier_is_a_type_mismatch_not_absent() {
        for field in ["color", "morph"] {
            let mut raw = raw_entry();
            raw[field] = Value::Null;
            let err = decode_emoji(&raw).unwrap_err();
            match err {
                CatalogError::TypeMismatch { field: got, expected } => {
                    assert_eq!(got, field);
                    assert_eq!(expected, "a string");
                }
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn decoder_accepts_invalid_pairings() {
        let mut raw = raw_entry();
        raw["morph"] = json!("clw");
        raw["color"] = json!("h1");
        let emoji = decode_emoji(&raw).unwrap();
        assert!(!emoji.has_valid_pairing());
        let err = check_pairing(&emoji).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidModifierCombo { .. }));
        assert!(err.to_string().starts_with("poo:"));
    }

    #[test]
    fn list_decode_is_all_or_nothing() {
        let mut bad = raw_entry();
        bad["color"] = json!("nope");
        let doc = json!([raw_entry(), bad, raw_entry()]);
        let err = decode_catalog(&doc).unwrap_err();
        match &err {
            CatalogError::Entry { index, .. } => assert_eq!(*index, 1),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(
            err.root_cause(),
            CatalogError::UnsupportedModifier { field: "color", .. }
        ));

        assert!(matches!(
            decode_catalog(&json!({"short": "poo"})),
            Err(CatalogError::NotAList)
        ));
        assert!(matches!(
            decode_catalog_str("[{"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn serialized_entry_decodes_again() {
        let mut raw = raw_entry();
        raw["color"] = json!("fe1");
        raw["morph"] = json!("paw");
        let emoji = decode_emoji(&raw).unwrap();
        let json = serde_json::to_value(&emoji).unwrap();
        assert_eq!(json, raw);
        let back: Emoji = serde_json::from_value(json).unwrap();
        assert_eq!(back, emoji);
    }
}
