//! Option merging: user options extend a set of defaults.

use crate::shared::error::{WidgetError, WidgetResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Merge `overrides` on top of `defaults`.
///
/// `overrides` must be a JSON object or `null`. Keys the options type does not
/// know are ignored; known keys with a value of the wrong shape are an error.
pub fn merge_options<T>(defaults: &T, overrides: &Value) -> WidgetResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(defaults)?;

    match overrides {
        Value::Null => {}
        Value::Object(user) => {
            if let Value::Object(base) = &mut merged {
                for (key, value) in user {
                    if base.contains_key(key) {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        other => {
            return Err(WidgetError::InvalidOptions(format!(
                "expected an options object, got {}",
                json_kind(other)
            )))
        }
    }

    Ok(serde_json::from_value(merged)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        fade_duration: u32,
        label: Option<String>,
    }

    fn defaults() -> Sample {
        Sample {
            fade_duration: 600,
            label: None,
        }
    }

    #[test]
    fn test_partial_override() {
        let merged = merge_options(&defaults(), &json!({ "label": "main" })).unwrap();
        assert_eq!(merged.fade_duration, 600);
        assert_eq!(merged.label.as_deref(), Some("main"));
    }

    #[test]
    fn test_null_keeps_defaults() {
        assert_eq!(merge_options(&defaults(), &Value::Null).unwrap(), defaults());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let merged = merge_options(&defaults(), &json!({ "template": true })).unwrap();
        assert_eq!(merged, defaults());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = merge_options(&defaults(), &json!({ "fadeDuration": "slow" })).unwrap_err();
        assert!(matches!(err, WidgetError::InvalidOptions(_)));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = merge_options(&defaults(), &json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            WidgetError::InvalidOptions("expected an options object, got array".into())
        );
    }
}
