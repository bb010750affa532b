// Browser-side helpers: console logging, timers and DOM class utilities.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::state::Debounce;

/// `log` backend writing to the browser console.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

pub fn init_logging() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Browser driver for [`Debounce`]: one pending timeout per burst. When the timeout wakes
/// before the pushed-back deadline it sleeps again for the remainder.
pub struct Debounced {
    window: Window,
    state: Rc<Cell<Debounce>>,
    pending: Rc<Cell<Option<i32>>>,
    fire: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

fn schedule(window: &Window, cb: &Closure<dyn FnMut()>, delay_ms: i32, pending: &Cell<Option<i32>>) {
    if let Ok(id) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)
    {
        pending.set(Some(id));
    }
}

impl Debounced {
    pub fn new(window: Window, wait_ms: u32, mut f: impl FnMut() + 'static) -> Self {
        let state = Rc::new(Cell::new(Debounce::new(wait_ms)));
        let pending = Rc::new(Cell::new(None));
        let fire: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let cb = {
            let window = window.clone();
            let state = state.clone();
            let pending = pending.clone();
            let this = Rc::downgrade(&fire);
            Closure::wrap(Box::new(move || {
                pending.set(None);
                let now = js_sys::Date::now();
                let mut s = state.get();
                let due = s.fire_due(now);
                state.set(s);
                if due {
                    f();
                    return;
                }
                let (Some(deadline), Some(cell)) = (s.deadline(), this.upgrade()) else {
                    return;
                };
                if let Some(cb) = cell.borrow().as_ref() {
                    let remaining = (deadline - now).ceil().max(1.0) as i32;
                    schedule(&window, cb, remaining, &pending);
                }
            }) as Box<dyn FnMut()>)
        };
        *fire.borrow_mut() = Some(cb);
        Self { window, state, pending, fire }
    }

    pub fn call(&self) {
        let mut s = self.state.get();
        s.call(js_sys::Date::now());
        self.state.set(s);
        if self.pending.get().is_some() {
            return;
        }
        if let Some(cb) = self.fire.borrow().as_ref() {
            schedule(&self.window, cb, s.wait_ms() as i32, &self.pending);
        }
    }
}

impl Drop for Debounced {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.window.clear_timeout_with_handle(id);
        }
        let mut s = self.state.get();
        s.cancel();
        self.state.set(s);
        self.fire.borrow_mut().take();
    }
}

/// Repeating timer that is cleared when dropped.
pub struct Interval {
    window: Window,
    id: Option<i32>,
    _tick: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(window: &Window, period_ms: u32, f: impl FnMut() + 'static) -> Self {
        let tick = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .ok();
        Self { window: window.clone(), id, _tick: tick }
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.id.take() {
            self.window.clear_interval_with_handle(id);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run `f` once after `delay_ms`. The closure is released after it fires.
pub fn set_timeout_once(window: &Window, delay_ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

/// DOM event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, kind: &'static str, f: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Intersection observer that reports elements as they enter the viewport.
/// Disconnects when dropped.
pub struct Observer {
    inner: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observer {
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut on_enter: impl FnMut(&Element, &IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        if entry.is_intersecting() {
                            on_enter(&entry.target(), &observer);
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let inner =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        Some(Self { inner, _callback: callback })
    }

    pub fn observe(&self, el: &Element) {
        self.inner.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}

/// Smooth-scroll to the element matched by an in-page `#id` selector.
pub fn scroll_to_anchor(document: &Document, selector: &str) {
    if let Ok(Some(target)) = document.query_selector(selector) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

pub fn scroll_to_top(window: &Window) {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Call `f` for every element matching `selector`.
pub fn for_each_match(document: &Document, selector: &str, mut f: impl FnMut(Element)) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            f(el);
        }
    }
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
