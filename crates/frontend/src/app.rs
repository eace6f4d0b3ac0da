use crate::components::{Pin, TabItem, Tabs};
use contracts::widgets::pin::Location;
use leptos::logging::log;
use leptos::prelude::*;

/// Demo page: a pinned sidebar next to a long article, and persisted tabs.
#[component]
pub fn App() -> impl IntoView {
    let (shown, set_shown) = signal(0usize);

    let items = vec![
        TabItem::new("tab-overview", "Overview"),
        TabItem::new("tab-details", "Details"),
        TabItem::new("tab-history", "History"),
    ];

    let on_show = Callback::new(move |index: usize| {
        log!("demo: tab {} shown", index);
        set_shown.set(index);
    });

    view! {
        <main class="demo">
            <h1>"Widgets"</h1>

            <Tabs id="demo-tabs" items=items persist_state=true fade=true on_show=on_show>
                <section id="tab-overview">
                    <p>"Pick a tab, then reload: the choice is kept in a cookie."</p>
                </section>
                <section id="tab-details">
                    <p>"Sections fade in when they are shown."</p>
                </section>
                <section id="tab-history">
                    <p>"Each click records the previous and current index."</p>
                </section>
            </Tabs>
            <p class="demo-status">{move || format!("Active tab: {}", shown.get())}</p>

            <div class="demo-columns" style="position: relative; min-height: 3000px;">
                <article style="margin-right: 260px;">
                    {(1..=40)
                        .map(|n| view! { <p>{format!("Paragraph {}", n)}</p> })
                        .collect_view()}
                </article>
                <Pin location=Location::Right y_offset=16.0 class="demo-sidebar">
                    <nav style="width: 240px;">
                        <strong>"Pinned sidebar"</strong>
                        <p>"Follows the scroll, stays inside the column."</p>
                    </nav>
                </Pin>
            </div>
        </main>
    }
}
