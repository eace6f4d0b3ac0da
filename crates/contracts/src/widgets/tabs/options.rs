use crate::shared::cookie::camel_case;
use serde::{Deserialize, Serialize};

pub const COOKIE_PREFIX: &str = "titon.tabs.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabsOptions {
    /// Fade sections in instead of showing them at once.
    pub fade: bool,
    pub fade_duration: u32,
    /// Class put on the active tab.
    pub active_class: String,
    pub default_index: usize,
    /// Remember the last clicked tab between page loads.
    pub persist_state: bool,
    /// Cookie key; the widget query is used when unset.
    pub cookie: Option<String>,
    /// Cookie lifetime in days.
    pub cookie_duration: u32,
    /// Selector for the tab anchors, relative to the widget root.
    pub tabs_element: String,
    /// Selector for the content sections, relative to the widget root.
    pub sections_element: String,
}

impl Default for TabsOptions {
    fn default() -> Self {
        Self {
            fade: false,
            fade_duration: 600,
            active_class: "is-active".to_string(),
            default_index: 0,
            persist_state: false,
            cookie: None,
            cookie_duration: 30,
            tabs_element: "nav a".to_string(),
            sections_element: "section".to_string(),
        }
    }
}

/// Full cookie name the active index is stored under.
pub fn cookie_name(options: &TabsOptions, query: &str) -> String {
    let key = match options.cookie.as_deref() {
        Some(cookie) if !cookie.is_empty() => cookie,
        _ => query.trim_start_matches('#'),
    };
    format!("{}{}", COOKIE_PREFIX, camel_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::merge_options;
    use serde_json::json;

    #[test]
    fn test_cookie_name_from_query() {
        let options = TabsOptions::default();
        assert_eq!(cookie_name(&options, "tabs"), "titon.tabs.tabs");
        assert_eq!(cookie_name(&options, "#profile-tabs"), "titon.tabs.profileTabs");
    }

    #[test]
    fn test_cookie_name_from_option() {
        let options = TabsOptions {
            cookie: Some("account-settings".into()),
            ..TabsOptions::default()
        };
        assert_eq!(cookie_name(&options, "tabs"), "titon.tabs.accountSettings");

        let empty = TabsOptions {
            cookie: Some(String::new()),
            ..TabsOptions::default()
        };
        assert_eq!(cookie_name(&empty, "tabs"), "titon.tabs.tabs");
    }

    #[test]
    fn test_merge() {
        let options = merge_options(
            &TabsOptions::default(),
            &json!({ "persistState": true, "defaultIndex": 2, "fade": true, "onShow": null }),
        )
        .unwrap();
        assert!(options.persist_state);
        assert!(options.fade);
        assert_eq!(options.default_index, 2);
        assert_eq!(options.fade_duration, 600);
        assert_eq!(options.tabs_element, "nav a");
    }
}
