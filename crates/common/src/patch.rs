//! Serde helper for PATCH bodies that must tell "field absent" apart from
//! "field explicitly null" on nullable columns.
//!
//! Use on an `Option<Option<T>>` field together with `#[serde(default)]`:
//! absent stays `None`, `null` becomes `Some(None)`, a value becomes
//! `Some(Some(v))`.

use serde::{Deserialize, Deserializer};

pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use uuid::Uuid;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::double_option")]
        parent_id: Option<Option<Uuid>>,
    }

    #[test]
    fn absent_field_is_outer_none() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert!(p.parent_id.is_none());
    }

    #[test]
    fn explicit_null_is_some_none() {
        let p: Patch = serde_json::from_str(r#"{"parent_id": null}"#).unwrap();
        assert_eq!(p.parent_id, Some(None));
    }

    #[test]
    fn value_is_some_some() {
        let id = Uuid::new_v4();
        let p: Patch = serde_json::from_str(&format!(r#"{{"parent_id": "{id}"}}"#)).unwrap();
        assert_eq!(p.parent_id, Some(Some(id)));
    }
}
