//! `<Tabs>` — renders the tab navigation and drives it with [`TabsWidget`].
//!
//! Children are the sections; each needs an `id` matching a [`TabItem::target`].

use crate::widgets::tabs::{self as tabs_widget, ShowCallback, TabsWidget};
use contracts::widgets::tabs::TabsOptions;
use leptos::logging::log;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Id of the section this tab shows.
    pub target: String,
    pub label: String,
}

impl TabItem {
    pub fn new(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn Tabs(
    /// Root element id; also names the instance and its cookie.
    #[prop(into)]
    id: String,
    items: Vec<TabItem>,
    #[prop(optional)]
    default_index: usize,
    #[prop(optional)]
    persist_state: bool,
    #[prop(optional)]
    fade: bool,
    #[prop(optional)]
    on_show: Option<Callback<usize>>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let attached = StoredValue::new(false);
    let query = StoredValue::new(id.clone());

    Effect::new(move |_| {
        let Some(root) = node_ref.get() else {
            return;
        };
        if attached.get_value() {
            return;
        }

        let options = TabsOptions {
            default_index,
            persist_state,
            fade,
            ..TabsOptions::default()
        };
        let callback: Option<ShowCallback> =
            on_show.map(|handler| Rc::new(move |index: usize, _: &web_sys::Element| handler.run(index)) as ShowCallback);

        let query = query.get_value();
        let root: web_sys::Element = root.into();
        match TabsWidget::with_root(&query, &root, options, callback) {
            Ok(widget) => {
                tabs_widget::register(&query, widget);
                attached.set_value(true);
            }
            Err(err) => log!("Tabs {}: attach failed: {}", query, err),
        }
    });

    on_cleanup(move || {
        let query = query.get_value();
        if tabs_widget::destroy(&query) {
            log!("Tabs {}: destroyed", query);
        }
    });

    view! {
        <div id=id class="tabs" node_ref=node_ref>
            <nav class="tabs-nav">
                {items
                    .into_iter()
                    .map(|item| {
                        view! { <a href=format!("#{}", item.target)>{item.label}</a> }
                    })
                    .collect_view()}
            </nav>
            {children()}
        </div>
    }
}
