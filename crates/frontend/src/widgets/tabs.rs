//! Tabs widget controller.
//!
//! Markup it expects under the root element:
//!
//! ```html
//! <div id="tabs">
//!     <nav>
//!         <a href="#tab-1">Tab 1</a>
//!         <a href="#tab-2">Tab 2</a>
//!     </nav>
//!     <section id="tab-1"></section>
//!     <section id="tab-2"></section>
//! </div>
//! ```

use crate::shared::listener::EventListener;
use crate::shared::{cookie, dom, fade};
use contracts::shared::cookie::CookieWrite;
use contracts::widgets::tabs::{
    cookie_name, initial_index, section_target, tab_index, Activation, Selection, TabsOptions,
    TabsState,
};
use contracts::WidgetError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use web_sys::{Element, Event};

const INDEX_ATTR: &str = "data-tabs-index";
const TARGET_ATTR: &str = "data-tabs-target";

/// Called after a section is shown with the tab index and the tab element.
pub type ShowCallback = Rc<dyn Fn(usize, &Element)>;

thread_local! {
    static INSTANCES: RefCell<HashMap<String, TabsWidget>> = RefCell::new(HashMap::new());
}

/// A tab addressed by position or by its anchor element.
pub enum TabRef {
    Index(usize),
    Element(Element),
}

struct TabsInner {
    query: String,
    options: TabsOptions,
    cookie_name: String,
    tabs: Vec<Element>,
    sections: Vec<Element>,
    state: TabsState,
    listeners: Vec<EventListener>,
}

impl TabsInner {
    fn index_of(&self, tab: &Element) -> Option<usize> {
        tab_index(&self.tabs, tab)
    }

    /// Select `index` and update the DOM to match. Returns the tab element.
    fn activate(&mut self, index: usize) -> Option<(Selection, Element)> {
        let tab = self.tabs.get(index)?.clone();
        let target = section_target(
            tab.get_attribute(TARGET_ATTR).as_deref(),
            tab.get_attribute("href").as_deref(),
        );
        let section_ids: Vec<String> = self.sections.iter().map(|section| section.id()).collect();
        let Activation { selection, section } =
            self.state.activate(index, target.as_deref(), &section_ids)?;

        let class = &self.options.active_class;
        for other in &self.tabs {
            dom::remove_class(other, class);
        }
        dom::add_class(&tab, class);

        for section in &self.sections {
            dom::hide(section);
        }

        // Sections outside the root are still looked up by id.
        let section = section
            .and_then(|position| self.sections.get(position).cloned())
            .or_else(|| target.as_deref().and_then(dom::find_by_id));
        match section {
            Some(section) if self.options.fade => fade::fade_in(&section, self.options.fade_duration),
            Some(section) => dom::show(&section),
            None => log::warn!("tabs {}: no section for tab {} ({:?})", self.query, index, target),
        }

        if self.options.persist_state {
            let write = CookieWrite::new(self.cookie_name.clone(), index.to_string())
                .with_duration_days(self.options.cookie_duration);
            if let Err(err) = cookie::write(&write) {
                log::warn!("tabs {}: could not persist state: {}", self.query, err);
            }
        }

        Some((selection, tab))
    }
}

#[derive(Clone)]
pub struct TabsWidget {
    inner: Rc<RefCell<TabsInner>>,
    on_show: Option<ShowCallback>,
}

impl TabsWidget {
    /// Build tabs on the element whose id is `query` (a leading `#` is allowed).
    pub fn new(query: &str, options: TabsOptions, on_show: Option<ShowCallback>) -> Result<Self, WidgetError> {
        let root = dom::find_by_id(query.trim_start_matches('#'))
            .ok_or_else(|| WidgetError::ElementNotFound(query.to_string()))?;
        Self::with_root(query, &root, options, on_show)
    }

    /// Build tabs on an element already at hand. `query` only names the
    /// instance and its cookie.
    pub fn with_root(
        query: &str,
        root: &Element,
        options: TabsOptions,
        on_show: Option<ShowCallback>,
    ) -> Result<Self, WidgetError> {
        let tabs = dom::query_all(root, &options.tabs_element)?;
        for (index, tab) in tabs.iter().enumerate() {
            tab.set_attribute(INDEX_ATTR, &index.to_string())
                .map_err(dom::js_error)?;
            dom::remove_class(tab, &options.active_class);
        }

        let sections = dom::query_all(root, &options.sections_element)?;
        for section in &sections {
            dom::hide(section);
        }

        let widget = Self {
            inner: Rc::new(RefCell::new(TabsInner {
                query: query.to_string(),
                cookie_name: cookie_name(&options, query),
                state: TabsState::new(tabs.len()),
                tabs,
                sections,
                options,
                listeners: Vec::new(),
            })),
            on_show,
        };

        let listeners = widget.bind_clicks()?;
        widget.inner.borrow_mut().listeners = listeners;

        let (stored, default_index, count) = {
            let inner = widget.inner.borrow();
            (
                cookie::read(&inner.cookie_name),
                inner.options.default_index,
                inner.state.count(),
            )
        };
        match initial_index(stored.as_deref(), default_index, count) {
            Some(index) => {
                widget.show(TabRef::Index(index));
            }
            None => log::warn!("tabs {}: no tab at default index {}", query, default_index),
        }

        Ok(widget)
    }

    fn bind_clicks(&self) -> Result<Vec<EventListener>, WidgetError> {
        let tabs = self.inner.borrow().tabs.clone();

        tabs.iter()
            .enumerate()
            .map(|(index, tab)| {
                let weak: Weak<RefCell<TabsInner>> = Rc::downgrade(&self.inner);
                let on_show = self.on_show.clone();
                EventListener::new(tab, "click", move |event: Event| {
                    event.prevent_default();
                    event.stop_propagation();
                    if let Some(inner) = weak.upgrade() {
                        let widget = TabsWidget {
                            inner,
                            on_show: on_show.clone(),
                        };
                        widget.show(TabRef::Index(index));
                    }
                })
            })
            .collect()
    }

    /// Show the section for `tab`. Unknown tabs are ignored.
    pub fn show(&self, tab: TabRef) -> Option<Selection> {
        let (selection, element) = {
            let mut inner = self.inner.borrow_mut();
            let index = match tab {
                TabRef::Index(index) => index,
                TabRef::Element(element) => inner.index_of(&element)?,
            };
            let (selection, element) = inner.activate(index)?;
            log::debug!("tabs {}: {} -> {}", inner.query, selection.previous, selection.index);
            (selection, element)
        };

        // Released the borrow first: the callback may call back into the widget.
        if let Some(on_show) = &self.on_show {
            on_show(selection.index, &element);
        }

        Some(selection)
    }

    pub fn current_index(&self) -> usize {
        self.inner.borrow().state.current()
    }

    pub fn previous_index(&self) -> usize {
        self.inner.borrow().state.previous()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().state.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delete the persisted tab cookie; the next load starts at the default.
    pub fn clear_persisted_state(&self) -> Result<(), WidgetError> {
        let name = self.inner.borrow().cookie_name.clone();
        cookie::remove(&name)
    }

    /// Remove the click listeners.
    pub fn detach(&self) {
        self.inner.borrow_mut().listeners.clear();
    }
}

/// Tabs for `query`, created on first use and reused afterwards.
pub fn factory(query: &str, options: TabsOptions, on_show: Option<ShowCallback>) -> Result<TabsWidget, WidgetError> {
    if let Some(existing) = instance(query) {
        return Ok(existing);
    }

    let widget = TabsWidget::new(query, options, on_show)?;
    register(query, widget.clone());
    Ok(widget)
}

pub fn register(query: &str, widget: TabsWidget) {
    INSTANCES.with(|instances| instances.borrow_mut().insert(query.to_string(), widget));
}

pub fn instance(query: &str) -> Option<TabsWidget> {
    INSTANCES.with(|instances| instances.borrow().get(query).cloned())
}

/// Detach and forget the tabs registered under `query`.
pub fn destroy(query: &str) -> bool {
    match INSTANCES.with(|instances| instances.borrow_mut().remove(query)) {
        Some(widget) => {
            widget.detach();
            true
        }
        None => false,
    }
}
