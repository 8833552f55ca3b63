//! Headless markup document.
//!
//! A flat element tree with ids, classes and attributes, queried with the
//! `.class` / `#id` selectors from [`SliderConfig`]. It plays all three
//! collaborator roles without a window: it is the presentation surface
//! (active classes), the image provider (`data-src` copied into `src`) and
//! the input adapter (clicks on buttons and bar items become intents).

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::{trace, warn};

use crate::config::SliderConfig;
use crate::constants::{DEFERRED_SOURCE_ATTR, RESOLVED_SOURCE_ATTR, SLIDE_NUMBER_ATTR};
use crate::input::Intent;
use crate::surface::{Collection, ImageProvider, PresentationSurface};

#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub parent: Option<ElementId>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.has_class(class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else {
            self.tag == selector
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    config: SliderConfig,
    elements: Vec<Element>,
    fetches: Vec<String>,
}

impl Document {
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
            fetches: Vec::new(),
        }
    }

    /// Standard carousel markup: prev/next buttons, one lazy image per
    /// source, and an empty bar container.
    pub fn carousel<T: AsRef<str>>(config: SliderConfig, sources: &[T]) -> Self {
        let mut doc = Self::new(config);
        let prev = doc.config.prev_button_selector.clone();
        let next = doc.config.next_button_selector.clone();
        let item = doc.config.item_selector.clone();
        let bar = doc.config.bar_selector.clone();

        let root = doc.append(None, "div");
        doc.elements[root.0].id = Some("slider".into());
        let button = doc.append(Some(root), "button");
        doc.apply_selector(button, &prev);
        for source in sources {
            let img = doc.append(Some(root), "img");
            doc.apply_selector(img, &item);
            doc.set_attr(img, DEFERRED_SOURCE_ATTR, source.as_ref());
        }
        let button = doc.append(Some(root), "button");
        doc.apply_selector(button, &next);
        let container = doc.append(None, "div");
        doc.apply_selector(container, &bar);
        doc
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn append(&mut self, parent: Option<ElementId>, tag: &str) -> ElementId {
        self.elements.push(Element {
            tag: tag.to_string(),
            parent,
            ..Element::default()
        });
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        let element = &mut self.elements[id.0];
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.retain(|c| c != class);
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        self.elements[id.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)?.attrs.get(name).map(String::as_str)
    }

    /// Matching elements in document order.
    pub fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(selector))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    pub fn query(&self, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.matches(selector))
            .map(ElementId)
    }

    pub fn children(&self, parent: ElementId) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.parent == Some(parent))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    /// Indices (within the collection) of the elements carrying the active class.
    pub fn active_indices(&self, collection: Collection) -> Vec<usize> {
        let (members, active) = self.collection(collection);
        members
            .iter()
            .enumerate()
            .filter(|(_, id)| self.elements[id.0].has_class(&active))
            .map(|(i, _)| i)
            .collect()
    }

    /// Every resolved source, in the order the loads were triggered.
    pub fn fetches(&self) -> &[String] {
        &self.fetches
    }

    /// Translates a click on `target` into an intent. Bar items report the
    /// slide number they were built with.
    pub fn click(&self, target: ElementId) -> Option<Intent> {
        let element = self.element(target)?;
        if element.matches(&self.config.prev_button_selector) {
            return Some(Intent::PreviousRequested);
        }
        if element.matches(&self.config.next_button_selector) {
            return Some(Intent::NextRequested);
        }
        if element.has_class(&self.config.bar_item_class_name) {
            let raw = element.attrs.get(SLIDE_NUMBER_ATTR)?;
            return match raw.parse::<usize>() {
                Ok(index) => Some(Intent::JumpRequested(index)),
                Err(e) => {
                    warn!(%raw, "bar item carries an unreadable slide number: {}", e);
                    None
                }
            };
        }
        trace!(?target, "click outside slider controls");
        None
    }

    fn apply_selector(&mut self, id: ElementId, selector: &str) {
        if let Some(class) = selector.strip_prefix('.') {
            self.add_class(id, class);
        } else if let Some(name) = selector.strip_prefix('#') {
            self.elements[id.0].id = Some(name.to_string());
        }
    }

    fn collection(&self, collection: Collection) -> (Vec<ElementId>, String) {
        match collection {
            Collection::Slides => (
                self.query_all(&self.config.item_selector),
                self.config.active_class_name.clone(),
            ),
            Collection::Bar => (
                self.query_all(&format!(".{}", self.config.bar_item_class_name)),
                self.config.bar_active_class_name.clone(),
            ),
        }
    }

    fn slide(&self, index: usize) -> Option<ElementId> {
        self.query_all(&self.config.item_selector).get(index).copied()
    }
}

impl PresentationSurface for Document {
    fn count(&self, collection: Collection) -> usize {
        self.collection(collection).0.len()
    }

    fn set_active(&mut self, collection: Collection, index: usize) {
        let (members, active) = self.collection(collection);
        match members.get(index) {
            Some(&id) => self.add_class(id, &active),
            None => warn!(?collection, index, "no element to mark active"),
        }
    }

    fn clear_active(&mut self, collection: Collection) {
        // only this collection's members: slides and dots may share a class name
        let (members, active) = self.collection(collection);
        for id in members {
            self.remove_class(id, &active);
        }
    }

    fn append_bar_item(&mut self, index: usize) {
        let container = self.query(&self.config.bar_selector);
        if container.is_none() {
            warn!(selector = %self.config.bar_selector, "bar container missing");
        }
        let class = self.config.bar_item_class_name.clone();
        let item = self.append(container, "i");
        self.add_class(item, &class);
        self.set_attr(item, SLIDE_NUMBER_ATTR, &index.to_string());
    }
}

impl ImageProvider for Document {
    fn deferred_source(&self, index: usize) -> Option<String> {
        let slide = self.slide(index)?;
        self.attr(slide, DEFERRED_SOURCE_ATTR).map(str::to_string)
    }

    fn has_resolved_source(&self, index: usize) -> bool {
        self.slide(index)
            .and_then(|slide| self.attr(slide, RESOLVED_SOURCE_ATTR))
            .is_some_and(|src| !src.is_empty())
    }

    fn set_resolved_source(&mut self, index: usize, value: String) {
        if let Some(slide) = self.slide(index) {
            self.set_attr(slide, RESOLVED_SOURCE_ATTR, &value);
            self.fetches.push(value);
        }
    }
}

/// Shared handle on a [`Document`], so one document can be injected as both
/// the surface and the image provider while the caller keeps reading it.
#[derive(Debug, Clone)]
pub struct SharedDocument(Rc<RefCell<Document>>);

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self(Rc::new(RefCell::new(document)))
    }

    pub fn borrow(&self) -> Ref<'_, Document> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Document> {
        self.0.borrow_mut()
    }
}

impl PresentationSurface for SharedDocument {
    fn count(&self, collection: Collection) -> usize {
        self.0.borrow().count(collection)
    }

    fn set_active(&mut self, collection: Collection, index: usize) {
        self.0.borrow_mut().set_active(collection, index);
    }

    fn clear_active(&mut self, collection: Collection) {
        self.0.borrow_mut().clear_active(collection);
    }

    fn append_bar_item(&mut self, index: usize) {
        self.0.borrow_mut().append_bar_item(index);
    }
}

impl ImageProvider for SharedDocument {
    fn deferred_source(&self, index: usize) -> Option<String> {
        self.0.borrow().deferred_source(index)
    }

    fn has_resolved_source(&self, index: usize) -> bool {
        self.0.borrow().has_resolved_source(index)
    }

    fn set_resolved_source(&mut self, index: usize, value: String) {
        self.0.borrow_mut().set_resolved_source(index, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(n: usize) -> Document {
        let sources: Vec<String> = (0..n).map(|i| format!("img/{i}.jpg")).collect();
        Document::carousel(SliderConfig::default(), &sources)
    }

    #[test]
    fn carousel_markup_uses_configured_selectors() {
        let d = doc(3);
        assert_eq!(d.count(Collection::Slides), 3);
        assert_eq!(d.count(Collection::Bar), 0);
        assert!(d.query("#slider-btn-prev").is_some());
        assert!(d.query("#bar").is_some());
        assert_eq!(d.deferred_source(2).as_deref(), Some("img/2.jpg"));
        assert!(!d.has_resolved_source(2));
    }

    #[test]
    fn bar_items_land_in_the_bar_with_their_index() {
        let mut d = doc(2);
        d.append_bar_item(0);
        d.append_bar_item(1);
        let bar = d.query("#bar").unwrap();
        let items = d.children(bar);
        assert_eq!(items.len(), 2);
        assert_eq!(d.attr(items[1], SLIDE_NUMBER_ATTR), Some("1"));
        assert_eq!(d.click(items[1]), Some(Intent::JumpRequested(1)));
    }

    #[test]
    fn clear_then_set_leaves_a_single_marker() {
        let mut d = doc(3);
        d.set_active(Collection::Slides, 0);
        d.set_active(Collection::Slides, 2);
        d.clear_active(Collection::Slides);
        d.set_active(Collection::Slides, 1);
        assert_eq!(d.active_indices(Collection::Slides), vec![1]);
    }

    #[test]
    fn clicks_on_buttons_map_to_intents() {
        let d = doc(1);
        let prev = d.query("#slider-btn-prev").unwrap();
        let next = d.query("#slider-btn-next").unwrap();
        let slide = d.query(".slider-item").unwrap();
        assert_eq!(d.click(prev), Some(Intent::PreviousRequested));
        assert_eq!(d.click(next), Some(Intent::NextRequested));
        assert_eq!(d.click(slide), None);
    }

    #[test]
    fn unreadable_slide_number_is_ignored() {
        let mut d = doc(1);
        d.append_bar_item(0);
        let item = d.query(".bar-item").unwrap();
        d.set_attr(item, SLIDE_NUMBER_ATTR, "first");
        assert_eq!(d.click(item), None);
    }

    #[test]
    fn custom_class_names_are_honoured() {
        let config = SliderConfig {
            item_selector: ".photo".into(),
            active_class_name: "current".into(),
            bar_item_class_name: "dot".into(),
            bar_active_class_name: "dot-on".into(),
            ..SliderConfig::default()
        };
        let mut d = Document::carousel(config, &["a.png", "b.png"]);
        d.append_bar_item(0);
        d.append_bar_item(1);
        d.set_active(Collection::Slides, 1);
        d.set_active(Collection::Bar, 1);
        let photo = d.query_all(".photo")[1];
        assert!(d.element(photo).unwrap().has_class("current"));
        assert_eq!(d.active_indices(Collection::Bar), vec![1]);
        assert_eq!(d.query_all(".dot-on").len(), 1);
    }

    #[test]
    fn clearing_one_collection_spares_the_other() {
        let config = SliderConfig {
            active_class_name: "active".into(),
            bar_active_class_name: "active".into(),
            ..SliderConfig::default()
        };
        let mut d = Document::carousel(config, &["a.png", "b.png"]);
        d.append_bar_item(0);
        d.append_bar_item(1);
        d.set_active(Collection::Slides, 0);
        d.set_active(Collection::Bar, 0);
        d.clear_active(Collection::Bar);
        d.set_active(Collection::Bar, 1);
        assert_eq!(d.active_indices(Collection::Slides), vec![0]);
        assert_eq!(d.active_indices(Collection::Bar), vec![1]);
    }
}
