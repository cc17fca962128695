//! Platform access: the only surface the page behaviour uses to touch
//! elements and storage.

use thiserror::Error;

/// Handle to a rendered element. Clones refer to the same element and
/// equality is identity.
pub trait Element: Clone + PartialEq + 'static {
    fn id(&self) -> Option<String>;
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);
    fn set_text(&self, text: &str);
    fn descendants(&self, selector: &str) -> Vec<Self>;
}

pub trait Document {
    type Element: Element;

    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("couldn't write key {0}")]
    WriteFailed(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{Document, Element, KeyValueStore, StorageError};

    #[derive(Debug, Default)]
    struct Node {
        id: Option<String>,
        classes: Vec<String>,
        attributes: HashMap<String, String>,
        style: HashMap<String, String>,
        text: Vec<String>,
        children: Vec<FakeElement>,
    }

    /// In-memory element that records every text write.
    #[derive(Debug, Clone, Default)]
    pub struct FakeElement(Rc<RefCell<Node>>);

    impl PartialEq for FakeElement {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl FakeElement {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_id(self, id: &str) -> Self {
            self.0.borrow_mut().id = Some(id.to_string());
            self
        }

        pub fn with_class(self, class: &str) -> Self {
            self.0.borrow_mut().classes.push(class.to_string());
            self
        }

        pub fn with_attr(self, name: &str, value: &str) -> Self {
            self.0
                .borrow_mut()
                .attributes
                .insert(name.to_string(), value.to_string());
            self
        }

        pub fn with_child(self, child: FakeElement) -> Self {
            self.0.borrow_mut().children.push(child);
            self
        }

        pub fn style(&self, property: &str) -> Option<String> {
            self.0.borrow().style.get(property).cloned()
        }

        pub fn text(&self) -> Option<String> {
            self.0.borrow().text.last().cloned()
        }

        pub fn text_history(&self) -> Vec<String> {
            self.0.borrow().text.clone()
        }

        fn matches(&self, selector: &str) -> bool {
            selector.split(',').map(str::trim).any(|part| {
                if let Some(class) = part.strip_prefix('.') {
                    self.has_class(class)
                } else if let Some(id) = part.strip_prefix('#') {
                    self.id().as_deref() == Some(id)
                } else {
                    false
                }
            })
        }

        fn collect(&self, selector: &str, out: &mut Vec<FakeElement>) {
            for child in self.0.borrow().children.iter() {
                if child.matches(selector) {
                    out.push(child.clone());
                }
                child.collect(selector, out);
            }
        }
    }

    impl Element for FakeElement {
        fn id(&self) -> Option<String> {
            self.0.borrow().id.clone()
        }

        fn has_class(&self, class: &str) -> bool {
            self.0.borrow().classes.iter().any(|c| c == class)
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.borrow().attributes.get(name).cloned()
        }

        fn set_style(&self, property: &str, value: &str) {
            self.0
                .borrow_mut()
                .style
                .insert(property.to_string(), value.to_string());
        }

        fn set_text(&self, text: &str) {
            self.0.borrow_mut().text.push(text.to_string());
        }

        fn descendants(&self, selector: &str) -> Vec<Self> {
            let mut out = Vec::new();
            self.collect(selector, &mut out);
            out
        }
    }

    /// Document whose body is a single root element.
    pub struct FakeDocument {
        pub body: FakeElement,
    }

    impl Document for FakeDocument {
        type Element = FakeElement;

        fn query_all(&self, selector: &str) -> Vec<FakeElement> {
            self.body.descendants(selector)
        }
    }

    #[derive(Default)]
    pub struct MemoryStore {
        pub(crate) values: RefCell<HashMap<String, String>>,
        pub read_only: bool,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::WriteFailed(key.to_string()));
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
