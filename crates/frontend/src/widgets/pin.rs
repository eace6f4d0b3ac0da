//! Pin widget controller.
//!
//! Measures the element and its parent on every window resize, and while the
//! parent is tall enough keeps a scroll listener that repositions the element
//! so it follows the viewport without leaving the parent.

use crate::shared::dom;
use crate::shared::listener::EventListener;
use contracts::widgets::pin::{
    compute_position, settle_position, should_pin, PinMetrics, PinOptions, ScrollThrottle,
};
use contracts::WidgetError;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use web_sys::Element;

const INSTANCE_ATTR: &str = "data-pin-id";

thread_local! {
    static DEFAULTS: RefCell<PinOptions> = RefCell::new(PinOptions::default());
    static INSTANCES: RefCell<HashMap<u32, PinWidget>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

/// Options new pins start from.
pub fn defaults() -> PinOptions {
    DEFAULTS.with(|defaults| defaults.borrow().clone())
}

/// Replace the options new pins start from.
pub fn set_defaults(options: PinOptions) {
    DEFAULTS.with(|defaults| *defaults.borrow_mut() = options);
}

struct PinInner {
    element: Element,
    options: PinOptions,
    metrics: PinMetrics,
    throttle: ScrollThrottle,
    resize_listener: Option<EventListener>,
    scroll_listener: Option<EventListener>,
    trailing: Option<Timeout>,
    trailing_pending: bool,
}

#[derive(Clone)]
pub struct PinWidget {
    inner: Rc<RefCell<PinInner>>,
}

impl PinWidget {
    /// Start pinning `element`. Binds window resize and measures right away.
    pub fn attach(element: Element, options: PinOptions) -> Result<Self, WidgetError> {
        for class in options.element_classes() {
            dom::add_class(&element, class);
        }

        let widget = Self {
            inner: Rc::new(RefCell::new(PinInner {
                element,
                throttle: ScrollThrottle::new(options.throttle),
                options,
                metrics: PinMetrics::default(),
                resize_listener: None,
                scroll_listener: None,
                trailing: None,
                trailing_pending: false,
            })),
        };

        let weak = Rc::downgrade(&widget.inner);
        let window = dom::window()?;
        let resize = EventListener::new(&window, "resize", move |_| {
            if let Some(widget) = Self::upgrade(&weak) {
                widget.resize();
            }
        })?;
        widget.inner.borrow_mut().resize_listener = Some(resize);

        widget.resize();
        Ok(widget)
    }

    fn upgrade(weak: &Weak<RefCell<PinInner>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    pub fn element(&self) -> Element {
        self.inner.borrow().element.clone()
    }

    pub fn options(&self) -> PinOptions {
        self.inner.borrow().options.clone()
    }

    pub fn metrics(&self) -> PinMetrics {
        self.inner.borrow().metrics
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().scroll_listener.is_some()
    }

    /// Re-measure, decide whether scrolling should move the element and place
    /// it against the new metrics.
    pub fn resize(&self) -> &Self {
        let pinnable = {
            let mut inner = self.inner.borrow_mut();
            let Some(parent) = inner.element.parent_element() else {
                log::warn!("pin: element has no parent, nothing to pin against");
                return self;
            };

            let metrics = PinMetrics {
                viewport: dom::viewport(),
                element_height: dom::outer_height(&inner.element),
                parent_height: dom::outer_height(&parent),
                parent_top: dom::offset_top(&parent),
            };
            inner.metrics = metrics;
            should_pin(&metrics)
        };

        if pinnable {
            self.enable();
        } else {
            self.disable();
        }

        let inner = self.inner.borrow();
        let position = settle_position(&inner.metrics, dom::scroll_top(), &inner.options);
        dom::set_styles(&inner.element, &position.css_declarations());
        self
    }

    /// Listen to window scroll. Calling it twice keeps a single listener.
    pub fn enable(&self) -> &Self {
        if self.is_enabled() {
            return self;
        }

        let weak = Rc::downgrade(&self.inner);
        let listener = dom::window().and_then(|window| {
            EventListener::new(&window, "scroll", move |_| {
                if let Some(widget) = Self::upgrade(&weak) {
                    widget.scroll();
                }
            })
        });

        match listener {
            Ok(listener) => {
                log::debug!("pin: enabled");
                self.inner.borrow_mut().scroll_listener = Some(listener);
            }
            Err(err) => log::warn!("pin: could not bind scroll: {}", err),
        }
        self
    }

    pub fn disable(&self) -> &Self {
        let mut inner = self.inner.borrow_mut();
        if inner.scroll_listener.take().is_some() {
            log::debug!("pin: disabled");
        }
        inner.trailing = None;
        inner.trailing_pending = false;
        inner.throttle.reset();
        self
    }

    /// Scroll handler. Throttled; the last skipped scroll is replayed once the
    /// interval has passed so the element ends up at the final offset.
    pub fn scroll(&self) -> &Self {
        let mut inner = self.inner.borrow_mut();

        if inner.throttle.ready(js_sys::Date::now()) {
            inner.trailing = None;
            inner.trailing_pending = false;
            drop(inner);
            return self.reposition();
        }

        if !inner.trailing_pending {
            let interval = inner.options.throttle;
            let weak = Rc::downgrade(&self.inner);
            inner.trailing_pending = true;
            inner.trailing = Some(Timeout::new(interval, move || {
                if let Some(widget) = Self::upgrade(&weak) {
                    widget.inner.borrow_mut().trailing_pending = false;
                    widget.reposition();
                }
            }));
        }
        self
    }

    /// Move the element for the current scroll offset, ignoring the throttle.
    pub fn reposition(&self) -> &Self {
        let inner = self.inner.borrow();
        let position = compute_position(&inner.metrics, dom::scroll_top(), &inner.options);
        dom::set_styles(&inner.element, &position.css_declarations());
        self
    }

    /// Drop every listener. The element keeps its last position.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.scroll_listener = None;
        inner.resize_listener = None;
        inner.trailing = None;
        inner.trailing_pending = false;
    }
}

/// Pin `element`, or return the pin already attached to it.
pub fn pin(element: Element, options: PinOptions) -> Result<PinWidget, WidgetError> {
    if let Some(existing) = instance(&element) {
        return Ok(existing);
    }

    let widget = PinWidget::attach(element.clone(), options)?;
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });

    element
        .set_attribute(INSTANCE_ATTR, &id.to_string())
        .map_err(dom::js_error)?;
    INSTANCES.with(|instances| instances.borrow_mut().insert(id, widget.clone()));

    Ok(widget)
}

pub fn instance(element: &Element) -> Option<PinWidget> {
    let id = element.get_attribute(INSTANCE_ATTR)?.parse::<u32>().ok()?;
    INSTANCES.with(|instances| instances.borrow().get(&id).cloned())
}

/// Detach and forget the pin on `element`. Returns false when there was none.
pub fn unpin(element: &Element) -> bool {
    let Some(id) = element
        .get_attribute(INSTANCE_ATTR)
        .and_then(|id| id.parse::<u32>().ok())
    else {
        return false;
    };

    let _ = element.remove_attribute(INSTANCE_ATTR);
    match INSTANCES.with(|instances| instances.borrow_mut().remove(&id)) {
        Some(widget) => {
            widget.detach();
            true
        }
        None => false,
    }
}
