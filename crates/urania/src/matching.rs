//! JSON filters over horoscopes.
//!
//! Both sides are normalized first: object keys and strings are upper-cased,
//! so `{"planets": {"sun": {"position": {"sign": "leo"}}}}` matches a
//! horoscope with the Sun in Leo. A filter object matches when every key it
//! names exists in the object and matches recursively. Other values match by
//! equality, numbers as `f64`. A `null` filter value selects fields that are
//! absent, such as the sign of a body sitting in a constellation gap.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid filter, type mismatch: obj {object} and filter {filter}")]
    TypeMismatch { object: Value, filter: Value },
    #[error("Failed to serialize match target: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Upper-cases keys and strings throughout `value`.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_uppercase()),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_uppercase(), normalize(value)))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

/// Matches an already-normalized object against a normalized filter.
pub fn match_value(object: &Value, filter: &Value) -> Result<bool, MatchError> {
    match (object, filter) {
        (Value::Null, Value::Null) => Ok(true),
        // a missing optional field matches nothing else
        (Value::Null, _) => Ok(false),
        (Value::Object(object), Value::Object(filter)) => {
            for (key, expected) in filter {
                let Some(actual) = object.get(key) else {
                    return Ok(false);
                };
                if !match_value(actual, expected)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Number(a), Value::Number(b)) => Ok(a.as_f64() == b.as_f64()),
        (Value::String(a), Value::String(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Array(a), Value::Array(b)) => Ok(a == b),
        _ => Err(MatchError::TypeMismatch {
            object: object.clone(),
            filter: filter.clone(),
        }),
    }
}

/// Anything serializable can be matched against a filter.
pub trait Matchable: Serialize {
    fn to_matchable(&self) -> Result<Value, MatchError> {
        Ok(normalize(serde_json::to_value(self)?))
    }

    fn matches(&self, filter: &Value) -> Result<bool, MatchError> {
        let object = self.to_matchable()?;
        match_value(&object, &normalize(filter.clone()))
    }
}

impl<T: Serialize> Matchable for T {}

/// Shallow merge: keys of `extra` replace those of `base`.
pub fn merge_filters(base: &Value, extra: &Value) -> Value {
    match (base, extra) {
        (Value::Object(base), Value::Object(extra)) => {
            let mut merged = base.clone();
            for (key, value) in extra {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        (_, Value::Null) => base.clone(),
        _ => extra.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_uppercases() {
        let value = normalize(json!({"sun": {"sign": "leo", "speed": 1.0}}));
        assert_eq!(value, json!({"SUN": {"SIGN": "LEO", "SPEED": 1.0}}));
    }

    #[test]
    fn test_nested_subset_match() {
        let object = json!({"A": {"B": "X", "C": 2}, "D": true});
        assert!(match_value(&object, &json!({"A": {"B": "X"}})).unwrap());
        assert!(match_value(&object, &json!({})).unwrap());
        assert!(!match_value(&object, &json!({"A": {"B": "Y"}})).unwrap());
        assert!(!match_value(&object, &json!({"E": 1})).unwrap());
    }

    #[test]
    fn test_numbers_compare_as_floats() {
        let object = json!({"ORB": 2.0});
        assert!(match_value(&object, &json!({"ORB": 2})).unwrap());
    }

    #[test]
    fn test_type_mismatch_is_error() {
        let object = json!({"SIGN": "LEO"});
        let err = match_value(&object, &json!({"SIGN": 5})).unwrap_err();
        assert!(matches!(err, MatchError::TypeMismatch { .. }));
        assert!(err.to_string().contains("LEO"));
    }

    #[test]
    fn test_null_never_matches() {
        let object = json!({"SIGN": null});
        assert!(!match_value(&object, &json!({"SIGN": "LEO"})).unwrap());
    }

    #[test]
    fn test_null_filter_matches_null_field() {
        let object = json!({"SUN": {"SIGN": null, "HOUSE": "FIRST"}});
        assert!(match_value(&object, &json!({"SUN": {"SIGN": null}})).unwrap());
        let placed = json!({"SUN": {"SIGN": "LEO"}});
        assert!(matches!(
            match_value(&placed, &json!({"SUN": {"SIGN": null}})),
            Err(MatchError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_matchable_is_case_insensitive() {
        #[derive(Serialize)]
        struct Target {
            sign: &'static str,
        }
        let target = Target { sign: "Leo" };
        assert!(target.matches(&json!({"Sign": "leo"})).unwrap());
    }

    #[test]
    fn test_merge_filters() {
        let merged = merge_filters(&json!({"A": 1, "B": 2}), &json!({"B": 3, "C": 4}));
        assert_eq!(merged, json!({"A": 1, "B": 3, "C": 4}));
    }
}
