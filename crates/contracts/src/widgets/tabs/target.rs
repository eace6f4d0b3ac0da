/// Id of the section a tab points at.
///
/// An explicit `data-tabs-target` wins over `href`. Only the fragment is kept,
/// so `#tab-1` and `/account#tab-1` both resolve to `tab-1`.
pub fn section_target(data_target: Option<&str>, href: Option<&str>) -> Option<String> {
    let raw = data_target
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| href.map(str::trim))?;

    let id = match raw.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => raw,
    };

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_fragment() {
        assert_eq!(section_target(None, Some("#tab-1")).as_deref(), Some("tab-1"));
        assert_eq!(
            section_target(None, Some("/account#billing")).as_deref(),
            Some("billing")
        );
    }

    #[test]
    fn test_data_target_wins() {
        assert_eq!(
            section_target(Some("details"), Some("#tab-1")).as_deref(),
            Some("details")
        );
        assert_eq!(
            section_target(Some("  "), Some("#tab-1")).as_deref(),
            Some("tab-1")
        );
    }

    #[test]
    fn test_missing_target() {
        assert_eq!(section_target(None, None), None);
        assert_eq!(section_target(None, Some("#")), None);
        assert_eq!(section_target(Some(""), Some("")), None);
    }
}
