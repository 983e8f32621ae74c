//! `web-sys` implementation of the page port.

use sleepy_app::ports::{Element, Page};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// The live document.
#[derive(Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// An HTML element of the live document.
#[derive(Clone)]
pub struct DomElement(HtmlElement);

impl DomElement {
    pub fn html(&self) -> &HtmlElement {
        &self.0
    }
}

fn as_html(el: web_sys::Element) -> Option<DomElement> {
    el.dyn_into::<HtmlElement>().ok().map(DomElement)
}

impl Page for DomPage {
    type Element = DomElement;

    fn query(&self, selector: &str) -> Option<DomElement> {
        // An invalid selector throws; treat it like a missing element.
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(as_html)
    }

    fn query_all(&self, selector: &str) -> Vec<DomElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<DomElement> {
        self.document.get_element_by_id(id).and_then(as_html)
    }
}

impl Element for DomElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        let style = self.0.style();
        if value.is_empty() {
            let _ = style.remove_property(property);
        } else {
            let _ = style.set_property(property, value);
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }
}
