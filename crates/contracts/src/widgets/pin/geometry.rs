use super::options::{Location, PinOptions};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Sizes measured on resize and reused by every scroll until the next resize.
///
/// Heights are outer (border-box) heights, `parent_top` is the parent's offset
/// from the top of the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinMetrics {
    pub viewport: Viewport,
    pub element_height: f64,
    pub parent_height: f64,
    pub parent_top: f64,
}

/// Pinning only makes sense when the parent is at least twice the element.
pub fn should_pin(metrics: &PinMetrics) -> bool {
    metrics.parent_height >= metrics.element_height * 2.0
}

/// Absolute position for the pinned element, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinPosition {
    pub location: Location,
    pub x: f64,
    pub y: f64,
}

impl PinPosition {
    pub fn css_declarations(&self) -> [(&'static str, String); 3] {
        [
            ("position", "absolute".to_string()),
            (self.location.as_css_property(), format!("{}px", self.x)),
            ("top", format!("{}px", self.y)),
        ]
    }
}

/// Where the element goes for the given window scroll offset.
///
/// Above the parent the element sits at the origin. Past the parent's top it
/// follows the scroll, until its bottom edge would cross the parent's bottom
/// edge, where it stays.
pub fn compute_position(metrics: &PinMetrics, scroll_top: f64, options: &PinOptions) -> PinPosition {
    let mut position = PinPosition {
        location: options.location,
        x: 0.0,
        y: 0.0,
    };

    if scroll_top > metrics.parent_top {
        position.x = options.x_offset;
        position.y = options.y_offset;

        let element_bottom = scroll_top + metrics.element_height;
        let parent_bottom = metrics.parent_height + metrics.parent_top;

        if element_bottom >= parent_bottom {
            position.y += metrics.parent_height - metrics.element_height;
        } else {
            position.y += scroll_top - metrics.parent_top;
        }
    }

    position
}

/// Position to apply right after a resize.
///
/// New metrics can leave the last scroll position outside the parent, so the
/// element is placed again at once: clamped against the new metrics while it
/// stays pinnable, back at the origin once it is not.
pub fn settle_position(metrics: &PinMetrics, scroll_top: f64, options: &PinOptions) -> PinPosition {
    if should_pin(metrics) {
        compute_position(metrics, scroll_top, options)
    } else {
        PinPosition {
            location: options.location,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> PinMetrics {
        PinMetrics {
            viewport: Viewport {
                width: 1280.0,
                height: 800.0,
            },
            element_height: 200.0,
            parent_height: 1000.0,
            parent_top: 300.0,
        }
    }

    #[test]
    fn test_should_pin() {
        assert!(should_pin(&metrics()));

        let boundary = PinMetrics {
            parent_height: 400.0,
            ..metrics()
        };
        assert!(should_pin(&boundary));

        let short_parent = PinMetrics {
            parent_height: 399.0,
            ..metrics()
        };
        assert!(!should_pin(&short_parent));
    }

    #[test]
    fn test_above_parent_resets_to_origin() {
        let options = PinOptions {
            x_offset: 10.0,
            y_offset: 20.0,
            ..PinOptions::default()
        };
        let position = compute_position(&metrics(), 300.0, &options);
        assert_eq!(position.x, 0.0);
        assert_eq!(position.y, 0.0);
    }

    #[test]
    fn test_follows_scroll_inside_parent() {
        let position = compute_position(&metrics(), 450.0, &PinOptions::default());
        assert_eq!(position.y, 150.0);
        assert_eq!(position.location, Location::Right);
    }

    #[test]
    fn test_clamped_at_parent_bottom() {
        // element bottom 1100 + 200 >= 1300 parent bottom
        let position = compute_position(&metrics(), 1100.0, &PinOptions::default());
        assert_eq!(position.y, 800.0);

        let far = compute_position(&metrics(), 5000.0, &PinOptions::default());
        assert_eq!(far.y, 800.0);
    }

    #[test]
    fn test_offsets_applied_when_pinned() {
        let options = PinOptions {
            location: Location::Left,
            x_offset: 15.0,
            y_offset: 5.0,
            ..PinOptions::default()
        };
        let position = compute_position(&metrics(), 400.0, &options);
        assert_eq!(position.x, 15.0);
        assert_eq!(position.y, 105.0);

        let bottom = compute_position(&metrics(), 2000.0, &options);
        assert_eq!(bottom.y, 805.0);
    }

    #[test]
    fn test_css_declarations() {
        let position = PinPosition {
            location: Location::Left,
            x: 0.0,
            y: 12.5,
        };
        assert_eq!(
            position.css_declarations(),
            [
                ("position", "absolute".to_string()),
                ("left", "0px".to_string()),
                ("top", "12.5px".to_string()),
            ]
        );
    }

    #[test]
    fn test_shrunk_parent_returns_to_origin() {
        let options = PinOptions::default();
        let pinned = compute_position(&metrics(), 1100.0, &options);
        assert_eq!(pinned.y, 800.0);

        let shrunk = PinMetrics {
            parent_height: 350.0,
            ..metrics()
        };
        assert!(!should_pin(&shrunk));

        let settled = settle_position(&shrunk, 1100.0, &options);
        assert_eq!(settled.x, 0.0);
        assert_eq!(settled.y, 0.0);
        assert!(settled.y <= shrunk.parent_height - shrunk.element_height);
    }

    #[test]
    fn test_resize_while_pinned_reclamps() {
        let options = PinOptions::default();
        assert_eq!(compute_position(&metrics(), 1100.0, &options).y, 800.0);

        let shorter = PinMetrics {
            parent_height: 600.0,
            ..metrics()
        };
        assert!(should_pin(&shorter));
        assert_eq!(settle_position(&shorter, 1100.0, &options).y, 400.0);
    }
}
