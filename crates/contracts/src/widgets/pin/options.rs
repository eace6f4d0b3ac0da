use serde::{Deserialize, Serialize};

/// Horizontal side the pinned element is offset from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Left,
    #[default]
    Right,
}

impl Location {
    /// CSS property name the x offset is written to.
    pub fn as_css_property(&self) -> &'static str {
        match self {
            Location::Left => "left",
            Location::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PinOptions {
    /// Extra class added to the pinned element.
    pub class_name: String,
    /// Animation class added to the pinned element.
    pub animation: String,
    pub location: Location,
    pub x_offset: f64,
    pub y_offset: f64,
    /// Minimum milliseconds between two scroll repositionings.
    pub throttle: u32,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            animation: "pin".to_string(),
            location: Location::Right,
            x_offset: 0.0,
            y_offset: 0.0,
            throttle: 50,
        }
    }
}

impl PinOptions {
    /// Non-empty classes to put on the element when it is attached.
    pub fn element_classes(&self) -> impl Iterator<Item = &str> {
        [self.class_name.as_str(), self.animation.as_str()]
            .into_iter()
            .flat_map(|class| class.split_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::merge_options;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = PinOptions::default();
        assert_eq!(options.animation, "pin");
        assert_eq!(options.location, Location::Right);
        assert_eq!(options.throttle, 50);
    }

    #[test]
    fn test_merge_js_style_keys() {
        let options = merge_options(
            &PinOptions::default(),
            &json!({ "location": "left", "xOffset": 12, "yOffset": 4.5, "className": "sidebar" }),
        )
        .unwrap();
        assert_eq!(options.location, Location::Left);
        assert_eq!(options.x_offset, 12.0);
        assert_eq!(options.y_offset, 4.5);
        assert_eq!(options.class_name, "sidebar");
        assert_eq!(options.animation, "pin");
    }

    #[test]
    fn test_unknown_location_rejected() {
        assert!(merge_options(&PinOptions::default(), &json!({ "location": "top" })).is_err());
    }

    #[test]
    fn test_element_classes_skip_empty() {
        let options = PinOptions::default();
        assert_eq!(options.element_classes().collect::<Vec<_>>(), vec!["pin"]);

        let options = PinOptions {
            class_name: "sidebar is-sticky".into(),
            animation: String::new(),
            ..PinOptions::default()
        };
        assert_eq!(
            options.element_classes().collect::<Vec<_>>(),
            vec!["sidebar", "is-sticky"]
        );
    }
}
