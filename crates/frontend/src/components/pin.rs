//! `<Pin>` — keeps its children in view while the page scrolls.
//!
//! The wrapper is positioned absolutely inside its parent, so the parent should
//! be a positioned element (`position: relative`).
//!
//! ```text
//! <aside style="position: relative;">
//!     <Pin location=Location::Left y_offset=16.0>
//!         <TableOfContents/>
//!     </Pin>
//! </aside>
//! ```

use crate::widgets::pin::{self as pin_widget, PinWidget};
use contracts::widgets::pin::Location;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn Pin(
    /// Side the horizontal offset is measured from.
    #[prop(optional)]
    location: Location,
    #[prop(optional)]
    x_offset: f64,
    #[prop(optional)]
    y_offset: f64,
    /// Minimum milliseconds between repositionings, defaults to the global pin defaults.
    #[prop(optional)]
    throttle: Option<u32>,
    /// Extra classes for the wrapper.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let widget = StoredValue::new_local(None::<PinWidget>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if widget.with_value(|w| w.is_some()) {
            return;
        }

        let mut options = pin_widget::defaults();
        options.location = location;
        options.x_offset = x_offset;
        options.y_offset = y_offset;
        if let Some(throttle) = throttle {
            options.throttle = throttle;
        }

        match PinWidget::attach(element.into(), options) {
            Ok(attached) => widget.set_value(Some(attached)),
            Err(err) => log!("Pin: attach failed: {}", err),
        }
    });

    on_cleanup(move || {
        widget.update_value(|w| {
            if let Some(w) = w.take() {
                w.detach();
            }
        });
    });

    view! {
        <div class=class node_ref=node_ref>
            {children()}
        </div>
    }
}
