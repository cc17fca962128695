//! web-sys implementations of the platform traits, plus the listeners that
//! only make sense once the page is hydrated.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{document, window};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    ErrorEvent, Event, File, FileReader, HtmlElement, HtmlImageElement, HtmlInputElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList,
    ScrollBehavior, ScrollToOptions, Storage,
};

use crate::dom::{Document, Element, KeyValueStore, StorageError};
use crate::effects::{BODY_FADE_DELAY, PHOTO_ACCEPT};
use crate::nav::{scroll_target, SectionOffset};
use crate::reveal::{Intersection, RevealObserver, ROOT_MARGIN, THRESHOLD};
use crate::schedule::Scheduler;

const HEADER_ID: &str = "header";

#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(pub HtmlElement);

fn html_elements(nodes: NodeList) -> Vec<DomElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(DomElement)
        .collect()
}

impl Element for DomElement {
    fn id(&self) -> Option<String> {
        let id = self.0.id();
        (!id.is_empty()).then_some(id)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.0.style().set_property(property, value) {
            log::warn!("couldn't set {property}: {e:?}");
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn descendants(&self, selector: &str) -> Vec<Self> {
        self.0
            .query_selector_all(selector)
            .map(html_elements)
            .unwrap_or_default()
    }
}

pub struct BrowserDocument(web_sys::Document);

impl BrowserDocument {
    pub fn current() -> Self {
        Self(document())
    }

    fn by_id(&self, id: &str) -> Option<HtmlElement> {
        self.0.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }
}

impl Document for BrowserDocument {
    type Element = DomElement;

    fn query_all(&self, selector: &str) -> Vec<DomElement> {
        self.0
            .query_selector_all(selector)
            .map(html_elements)
            .unwrap_or_default()
    }
}

/// `window.localStorage`, if the browser lets us have it.
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    pub fn new() -> Self {
        Self(window().local_storage().ok().flatten())
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.0.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

/// Hooks the reveal observer up to a real `IntersectionObserver`.
pub fn install_reveal(scheduler: Rc<dyn Scheduler>) -> Result<(), JsValue> {
    let reveal = RevealObserver::attach(&BrowserDocument::current(), scheduler);
    let targets = reveal.targets();
    let reveal = Rc::new(RefCell::new(reveal));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target().dyn_into::<HtmlElement>().ok()?;
                    Some(Intersection {
                        target: DomElement(target),
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            let finished = reveal.borrow_mut().on_intersection(entries);
            for el in finished {
                observer.unobserve(&el.0);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(THRESHOLD));
    init.set_root_margin(ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in &targets {
        observer.observe(&target.0);
    }
    // lives as long as the page
    callback.forget();
    Ok(())
}

pub fn fade_in_body(scheduler: Rc<dyn Scheduler>) {
    let Some(body) = document().body() else {
        return;
    };
    let body = DomElement(body);
    body.set_style("opacity", "0");
    scheduler.schedule(
        BODY_FADE_DELAY,
        Box::new(move || {
            body.set_style("transition", "opacity 0.5s ease-in-out");
            body.set_style("opacity", "1");
        }),
    );
}

pub fn section_offsets() -> Vec<SectionOffset> {
    BrowserDocument::current()
        .query_all("section[id]")
        .into_iter()
        .filter_map(|section| {
            let id = section.id()?;
            Some(SectionOffset {
                id,
                top: f64::from(section.0.offset_top()),
            })
        })
        .collect()
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn scroll_to_section(id: &str) {
    let doc = BrowserDocument::current();
    let Some(section) = doc.by_id(id) else {
        log::warn!("no section #{id} to scroll to");
        return;
    };
    let header_height = doc
        .by_id(HEADER_ID)
        .map(|h| f64::from(h.offset_height()))
        .unwrap_or_default();
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top()), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Opens the file picker and hands the chosen image back as a data URL.
pub fn pick_photo<F>(on_loaded: F) -> Result<(), JsValue>
where
    F: Fn(String) + 'static,
{
    let input = document()
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()?;
    input.set_type("file");
    input.set_accept(PHOTO_ACCEPT);

    let on_loaded = Rc::new(on_loaded);
    let picker = input.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let Some(file) = picker.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(e) = read_data_url(&file, on_loaded.clone()) {
            log::warn!("couldn't read {}: {e:?}", file.name());
        }
    });
    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    input.click();
    Ok(())
}

fn read_data_url(file: &File, on_loaded: Rc<dyn Fn(String)>) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let done = reader.clone();
    let on_load = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        match done.result().ok().and_then(|r| r.as_string()) {
            Some(url) => on_loaded(url),
            None => log::warn!("photo reader finished without data"),
        }
    });
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();
    reader.read_as_data_url(file)
}

/// Tag name of the focused element, e.g. `INPUT`.
pub fn focused_tag() -> Option<String> {
    document().active_element().map(|el| el.tag_name())
}

/// Window-level error logging and image load handling. Nothing here is
/// fatal; the page keeps running.
pub fn install_global_handlers() -> Result<(), JsValue> {
    let on_error = Closure::<dyn FnMut(ErrorEvent)>::new(|ev: ErrorEvent| {
        log::warn!("An error occurred: {}", ev.message());
    });
    window().add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
    on_error.forget();

    let images = document().query_selector_all("img")?;
    for img in (0..images.length()).filter_map(|i| images.get(i)) {
        let Ok(img) = img.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let loaded = img.clone();
        let on_load = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            DomElement(loaded.clone().unchecked_into()).set_style("opacity", "1");
        });
        let failed = img.clone();
        let on_fail = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            log::warn!("Failed to load image: {}", failed.src());
        });
        img.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
        img.add_event_listener_with_callback("error", on_fail.as_ref().unchecked_ref())?;
        on_load.forget();
        on_fail.forget();
    }
    Ok(())
}
