//! Document - High-level document API

use std::collections::HashSet;
use std::iter;

use crate::engine::{ButtonEncoding, Engine, ListenerModel, Quirks};
use crate::listener::ListenerTable;
use crate::style::{self, DEFAULT_FONT_SIZE};
use crate::{
    DomError, DomTree, ElementData, ElementGeometry, Event, Length, Listener, MouseButton,
    MouseEventInit, Node, NodeId, WeakNode,
};

/// Document loading state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadyState {
    #[default]
    Loading,
    Interactive,
    Complete,
}

/// HTML Document
pub struct Document {
    tree: DomTree,
    url: String,
    engine: Engine,
    quirks: Quirks,
    listeners: ListenerTable,
    /// Nodes whose listeners cannot be touched (cross-origin frames)
    denied: HashSet<NodeId>,
    ready_state: ReadyState,
    /// Set once `dom:loaded` has been announced
    loaded: bool,
    scroll_x: f64,
    scroll_y: f64,
    viewport_width: f64,
    viewport_height: f64,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    active_element: Option<NodeId>,
    selection_owner: Option<NodeId>,
}

impl Document {
    /// Create a new document rendered by the default engine
    pub fn new(url: &str) -> Self {
        Self::with_engine(url, Engine::default())
    }

    /// Create a document rendered by `engine`
    pub fn with_engine(url: &str, engine: Engine) -> Self {
        Self::with_quirks(url, engine, engine.quirks())
    }

    /// Create a document with explicit quirks
    pub fn with_quirks(url: &str, engine: Engine, quirks: Quirks) -> Self {
        let mut tree = DomTree::new();

        let html = tree.push(Node::element("html"));
        let head = tree.push(Node::element("head"));
        let body = tree.push(Node::element("body"));
        tree.link(NodeId::ROOT, html);
        tree.link(html, head);
        tree.link(html, body);

        tracing::debug!("Created {:?} document for {}", engine, url);

        Self {
            tree,
            url: url.to_string(),
            engine,
            quirks,
            listeners: ListenerTable::default(),
            denied: HashSet::new(),
            ready_state: ReadyState::Loading,
            loaded: false,
            scroll_x: 0.0,
            scroll_y: 0.0,
            viewport_width: 1024.0,
            viewport_height: 768.0,
            html_element: html,
            head_element: head,
            body_element: body,
            active_element: None,
            selection_owner: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn quirks(&self) -> &Quirks {
        &self.quirks
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// `<head>` element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// `<body>` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    // === Tree ===

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.tree.push(Node::text(text))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.tree.append_child(parent, child)
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
        let id = self.create_element(tag);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Create a text node and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DomError> {
        let id = self.create_text(text);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Remove a node and its subtree from the document.
    ///
    /// Removed nodes keep their arena slot but are no longer alive, and any
    /// native listeners they carried are released.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), DomError> {
        self.tree.detach(id)?;
        for node in iter::once(id).chain(self.tree.descendants(id)) {
            let released = self.listeners.clear_node(node);
            let entry = self.tree.node_mut(node)?;
            entry.alive = false;
            entry.generation += 1;
            if released > 0 {
                tracing::debug!("Released {} listeners of removed node {:?}", released, node);
            }
        }
        Ok(())
    }

    /// A node still part of the document
    fn live_node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.tree
            .node(id)
            .and_then(|n| if n.alive { Ok(n) } else { Err(DomError::NoSuchNode(id)) })
    }

    /// Non-owning handle to a live node
    pub fn weak(&self, id: NodeId) -> Result<WeakNode, DomError> {
        let node = self.live_node(id)?;
        Ok(WeakNode {
            id,
            generation: node.generation,
        })
    }

    /// Whether the node behind a handle is still part of the document
    pub fn is_alive(&self, weak: WeakNode) -> bool {
        self.tree
            .get(weak.id)
            .is_some_and(|n| n.alive && n.generation == weak.generation)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(Node::is_element)
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(Node::is_text)
    }

    /// Element data, failing for non-elements
    pub fn element(&self, id: NodeId) -> Result<&ElementData, DomError> {
        self.tree
            .node(id)?
            .as_element()
            .ok_or(DomError::NotAnElement(id))
    }

    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        self.tree
            .node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.tree
            .get(id)
            .and_then(Node::as_element)
            .map(|e| e.tag.as_str())
    }

    /// Elements below `root` with the given tag (`*` for all), in document
    /// order
    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.tree
            .descendants(root)
            .into_iter()
            .filter(|&id| {
                self.tag_name(id)
                    .is_some_and(|t| tag == "*" || t.eq_ignore_ascii_case(tag))
            })
            .collect()
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&node| self.get_attribute(node, "id") == Some(id))
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.tree.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.tree
            .descendants(id)
            .into_iter()
            .filter_map(|n| self.tree.get(n).and_then(Node::as_text))
            .collect()
    }

    // === Attributes ===

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.tree
            .get(id)
            .and_then(Node::as_element)
            .and_then(|e| e.attrs.get(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    /// Set an attribute. `checked` and `selected` also set the live state,
    /// as they do while a page is parsed.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let element = self.element_mut(id)?;
        element.attrs.set(name, value);
        match name.to_ascii_lowercase().as_str() {
            "checked" => element.control.checked = true,
            "selected" => element.control.selected = true,
            _ => {}
        }
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.element_mut(id)?.attrs.remove(name))
    }

    // === Style ===

    /// Set an inline style property
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?.style.set(property, value);
        Ok(())
    }

    /// Computed value of a longhand property: the inline value, else the
    /// property's initial value
    pub fn computed_style(&self, id: NodeId, property: &str) -> String {
        let property = property.to_ascii_lowercase();
        self.tree
            .get(id)
            .and_then(Node::as_element)
            .and_then(|e| e.style.get(&property))
            .unwrap_or_else(|| style::initial_value(&property))
            .to_string()
    }

    /// Font size in pixels, inherited down the tree
    pub fn font_size(&self, id: NodeId) -> f64 {
        let parent_size = self
            .tree
            .parent(id)
            .filter(|&p| self.is_element(p))
            .map(|p| self.font_size(p))
            .unwrap_or(DEFAULT_FONT_SIZE);

        let declared = self
            .tree
            .get(id)
            .and_then(Node::as_element)
            .and_then(|e| e.style.get("font-size"))
            .and_then(Length::parse);

        match declared {
            Some(Length::Em(n)) => n * parent_size,
            Some(Length::Percent(n)) => n * parent_size / 100.0,
            Some(length) => length
                .to_px(parent_size, DEFAULT_FONT_SIZE, 0.0)
                .unwrap_or(parent_size),
            None => parent_size,
        }
    }

    /// Convert a length value to pixels in the context of `id`.
    ///
    /// Percentages resolve against the parent's content width. Returns
    /// `None` for `auto` and values that are not lengths.
    pub fn resolve_length(&self, id: NodeId, value: &str) -> Option<f64> {
        let length = Length::parse(value)?;
        let percent_base = match length {
            Length::Percent(_) => self
                .tree
                .parent(id)
                .map(|p| self.content_width(p))
                .unwrap_or(self.viewport_width),
            _ => 0.0,
        };
        let root_font_size = self.font_size(self.html_element);
        length.to_px(self.font_size(id), root_font_size, percent_base)
    }

    fn used_px(&self, id: NodeId, property: &str) -> f64 {
        self.resolve_length(id, &self.computed_style(id, property))
            .unwrap_or(0.0)
    }

    /// Width of the content box. `auto` fills the parent's content box.
    fn content_width(&self, id: NodeId) -> f64 {
        if !self.is_element(id) {
            return self.viewport_width;
        }
        if let Some(width) = self.resolve_length(id, &self.computed_style(id, "width")) {
            return width.max(0.0);
        }
        let available = self
            .tree
            .parent(id)
            .map(|p| self.content_width(p))
            .unwrap_or(self.viewport_width);
        let edges: f64 = [
            "margin-left",
            "margin-right",
            "border-left-width",
            "border-right-width",
            "padding-left",
            "padding-right",
        ]
        .iter()
        .map(|p| self.used_px(id, p))
        .sum();
        (available - edges).max(0.0)
    }

    /// Box metrics of an element under content-box sizing
    pub fn geometry(&self, id: NodeId) -> ElementGeometry {
        if !self.is_element(id) {
            return ElementGeometry::default();
        }

        let px = |property: &str| self.used_px(id, property);
        let (bt, br, bb, bl) = (
            px("border-top-width"),
            px("border-right-width"),
            px("border-bottom-width"),
            px("border-left-width"),
        );
        let (pt, pr, pb, pl) = (
            px("padding-top"),
            px("padding-right"),
            px("padding-bottom"),
            px("padding-left"),
        );
        let width = self.content_width(id);
        let height = px("height").max(0.0);

        let positioned = !matches!(self.computed_style(id, "position").as_str(), "static");
        let (offset_left, offset_top) = if positioned {
            (px("left"), px("top"))
        } else {
            (0.0, 0.0)
        };

        ElementGeometry {
            offset_top,
            offset_left,
            offset_width: width + pl + pr + bl + br,
            offset_height: height + pt + pb + bt + bb,
            client_top: bt,
            client_left: bl,
            client_right: br,
            client_bottom: bb,
            client_width: width + pl + pr,
            client_height: height + pt + pb,
        }
    }

    // === Viewport ===

    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll_x = x.max(0.0);
        self.scroll_y = y.max(0.0);
    }

    /// Current page scroll
    pub fn scroll(&self) -> (f64, f64) {
        (self.scroll_x, self.scroll_y)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    // === Form controls ===

    /// Current value of a control. Unset values fall back to the `value`
    /// attribute, the text of a textarea, or `on` for check boxes.
    pub fn value(&self, id: NodeId) -> String {
        let Ok(element) = self.element(id) else {
            return String::new();
        };
        if let Some(value) = &element.control.value {
            return value.clone();
        }
        if let Some(value) = element.attrs.get("value") {
            return value.to_string();
        }
        match element.control_type().as_str() {
            "textarea" => self.text_content(id),
            "checkbox" | "radio" => "on".to_string(),
            _ => String::new(),
        }
    }

    pub fn set_value(&mut self, id: NodeId, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?.control.value = Some(value.to_string());
        Ok(())
    }

    pub fn checked(&self, id: NodeId) -> bool {
        self.element(id).is_ok_and(|e| e.control.checked)
    }

    /// Check or uncheck a control. Checking a radio button unchecks the
    /// other buttons of its group within the same form.
    pub fn set_checked(&mut self, id: NodeId, checked: bool) -> Result<(), DomError> {
        let element = self.element(id)?;
        if checked && element.control_type() == "radio" {
            let name = element.attrs.get("name").map(str::to_string);
            let scope = self.closest(id, "form").unwrap_or(NodeId::ROOT);
            let group: Vec<NodeId> = self
                .elements_by_tag(scope, "input")
                .into_iter()
                .filter(|&other| {
                    other != id
                        && self.element(other).is_ok_and(|e| e.control_type() == "radio")
                        && name.is_some()
                        && self.get_attribute(other, "name") == name.as_deref()
                })
                .collect();
            for other in group {
                self.element_mut(other)?.control.checked = false;
            }
        }
        self.element_mut(id)?.control.checked = checked;
        Ok(())
    }

    /// Options of a select element, optgroups included
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.elements_by_tag(select, "option")
    }

    /// Whether an option is selected. A single select with nothing selected
    /// shows its first option as selected.
    pub fn selected(&self, option: NodeId) -> bool {
        if self.element(option).is_ok_and(|e| e.control.selected) {
            return true;
        }
        let Some(select) = self.closest(option, "select") else {
            return false;
        };
        self.element(select).is_ok_and(|e| e.control_type() == "select-one")
            && self.options(select).first() == Some(&option)
            && !self.options(select).iter().any(|&o| {
                self.element(o).is_ok_and(|e| e.control.selected)
            })
    }

    /// Select or deselect an option. Selecting in a single select
    /// deselects its siblings.
    pub fn set_selected(&mut self, option: NodeId, selected: bool) -> Result<(), DomError> {
        if selected {
            if let Some(select) = self.closest(option, "select") {
                if self.element(select)?.control_type() == "select-one" {
                    for other in self.options(select) {
                        self.element_mut(other)?.control.selected = false;
                    }
                }
            }
        }
        self.element_mut(option)?.control.selected = selected;
        Ok(())
    }

    /// Index of the first selected option, if any
    pub fn selected_index(&self, select: NodeId) -> Option<usize> {
        self.options(select).into_iter().position(|o| self.selected(o))
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.has_attribute(id, "disabled")
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) -> Result<(), DomError> {
        let element = self.element_mut(id)?;
        if disabled {
            element.attrs.set("disabled", "disabled");
        } else {
            element.attrs.remove("disabled");
        }
        Ok(())
    }

    /// Parsed `tabindex` attribute
    pub fn tab_index(&self, id: NodeId) -> Option<i32> {
        self.get_attribute(id, "tabindex")
            .and_then(|v| v.trim().parse().ok())
    }

    /// Restore a control to its default state
    pub fn reset_control(&mut self, id: NodeId) -> Result<(), DomError> {
        let element = self.element_mut(id)?;
        element.control.value = None;
        element.control.checked = element.attrs.contains("checked");
        element.control.selected = element.attrs.contains("selected");
        Ok(())
    }

    pub fn focus(&mut self, id: NodeId) -> Result<(), DomError> {
        self.element(id)?;
        self.active_element = Some(id);
        Ok(())
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.active_element
    }

    /// Select the text of a control
    pub fn select_text(&mut self, id: NodeId) -> Result<(), DomError> {
        self.element(id)?;
        self.selection_owner = Some(id);
        Ok(())
    }

    /// Control whose text is currently selected
    pub fn selection_owner(&self) -> Option<NodeId> {
        self.selection_owner
    }

    /// Nearest inclusive ancestor with the given tag
    pub fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        iter::once(id)
            .chain(self.tree.ancestors(id))
            .find(|&n| self.tag_name(n).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
    }

    // === Native listeners ===

    fn require_model(&self, model: ListenerModel) -> Result<(), DomError> {
        if self.quirks.listener_model == model {
            Ok(())
        } else {
            Err(DomError::UnsupportedListenerModel {
                engine: self.engine,
                model,
            })
        }
    }

    fn require_access(&self, id: NodeId) -> Result<(), DomError> {
        if self.denied.contains(&id) {
            Err(DomError::AccessDenied(id))
        } else {
            Ok(())
        }
    }

    /// W3C `addEventListener(type, listener, false)`
    pub fn add_event_listener(
        &mut self,
        id: NodeId,
        event_type: &str,
        listener: Listener,
    ) -> Result<(), DomError> {
        self.require_model(ListenerModel::AddEventListener)?;
        self.live_node(id)?;
        self.listeners
            .add(id, event_type.to_string(), listener, self.quirks.dedupes_listeners);
        Ok(())
    }

    /// W3C `removeEventListener(type, listener, false)`
    pub fn remove_event_listener(
        &mut self,
        id: NodeId,
        event_type: &str,
        listener: &Listener,
    ) -> Result<(), DomError> {
        self.require_model(ListenerModel::AddEventListener)?;
        self.require_access(id)?;
        self.listeners.remove(id, event_type, listener);
        Ok(())
    }

    /// Trident `attachEvent("on" + type, listener)`
    pub fn attach_event(
        &mut self,
        id: NodeId,
        slot: &str,
        listener: Listener,
    ) -> Result<(), DomError> {
        self.require_model(ListenerModel::AttachEvent)?;
        self.live_node(id)?;
        self.listeners
            .add(id, slot.to_string(), listener, self.quirks.dedupes_listeners);
        Ok(())
    }

    /// Trident `detachEvent("on" + type, listener)`
    pub fn detach_event(
        &mut self,
        id: NodeId,
        slot: &str,
        listener: &Listener,
    ) -> Result<(), DomError> {
        self.require_model(ListenerModel::AttachEvent)?;
        self.require_access(id)?;
        self.listeners.remove(id, slot, listener);
        Ok(())
    }

    /// Native listeners currently subscribed on a node
    pub fn listener_count(&self, id: NodeId) -> usize {
        self.listeners.count(id)
    }

    /// Deny listener removal on a node, as a cross-origin frame would
    pub fn deny_access(&mut self, id: NodeId) {
        self.denied.insert(id);
    }

    // === Dispatch ===

    /// Build a mouse event shaped the way this engine reports it
    pub fn create_mouse_event(&self, event_type: &str, target: NodeId, init: MouseEventInit) -> Event {
        let mut event = Event::new(event_type, true, true);
        event.meta_key = init.meta_key;

        let trident = self.quirks.listener_model == ListenerModel::AttachEvent;
        let edge = self.quirks.document_client_edge;
        event.client_x = init.client_x + edge;
        event.client_y = init.client_y + edge;
        if self.quirks.reports_page_coords {
            event.page_x = Some(init.client_x + self.scroll_x);
            event.page_y = Some(init.client_y + self.scroll_y);
        }

        match self.quirks.button_encoding {
            ButtonEncoding::Standard => {
                let code = match init.button {
                    MouseButton::Left => 0,
                    MouseButton::Middle => 1,
                    MouseButton::Right => 2,
                };
                event.button = code;
                event.which = Some(code + 1);
            }
            ButtonEncoding::Trident => {
                event.button = match init.button {
                    MouseButton::Left => 1,
                    MouseButton::Right => 2,
                    MouseButton::Middle => 4,
                };
            }
            ButtonEncoding::WebKit => {
                event.which = Some(match init.button {
                    MouseButton::Right => 3,
                    _ => 1,
                });
                event.meta_key = init.meta_key || init.button == MouseButton::Middle;
            }
        }

        if trident {
            match event_type {
                "mouseover" => {
                    event.from_element = init.related;
                    event.to_element = Some(target);
                }
                "mouseout" => {
                    event.from_element = Some(target);
                    event.to_element = init.related;
                }
                _ => {}
            }
        } else {
            event.related_target = init.related;
        }

        event
    }

    /// Dispatch an event at `target`.
    ///
    /// The event visits the target, then (when it bubbles) each ancestor up
    /// to the document node. Listeners of a node are snapshotted before any
    /// of them runs, so listeners may freely add or remove listeners.
    /// Returns false when a listener prevented the default action.
    pub fn dispatch_event(&mut self, target: NodeId, event: &mut Event) -> Result<bool, DomError> {
        if !self.tree.node(target)?.alive {
            return Err(DomError::NoSuchNode(target));
        }

        let model = self.quirks.listener_model;
        match model {
            ListenerModel::AddEventListener => {
                event.target.get_or_insert(target);
            }
            ListenerModel::AttachEvent => {
                event.src_element.get_or_insert(target);
            }
        }

        let path: Vec<NodeId> = if event.bubbles {
            iter::once(target).chain(self.tree.ancestors(target)).collect()
        } else {
            vec![target]
        };
        let key = model.key(&event.event_type);

        for node in path {
            if model == ListenerModel::AddEventListener {
                event.current_target = Some(node);
            }
            for listener in self.listeners.snapshot(node, &key) {
                listener.call(event, self);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        event.current_target = None;

        Ok(!event.is_default_prevented())
    }

    // === Lifecycle ===

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Whether `dom:loaded` has been announced
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }

    fn signal(&mut self, event_type: &str, bubbles: bool) {
        let mut event = Event::new(event_type, bubbles, false);
        if let Err(err) = self.dispatch_event(NodeId::ROOT, &mut event) {
            tracing::warn!("Failed to signal {}: {}", event_type, err);
        }
    }

    /// The parser has finished building the tree
    pub fn finish_parsing(&mut self) {
        self.ready_state = ReadyState::Interactive;
        match self.quirks.listener_model {
            ListenerModel::AddEventListener => self.signal("DOMContentLoaded", true),
            ListenerModel::AttachEvent => self.signal("readystatechange", false),
        }
    }

    /// All subresources have loaded
    pub fn finish_loading(&mut self) {
        if self.ready_state == ReadyState::Loading {
            self.finish_parsing();
        }
        self.ready_state = ReadyState::Complete;
        self.signal("readystatechange", false);
        self.signal("load", false);
    }

    /// The page is being navigated away from
    pub fn unload(&mut self) {
        tracing::debug!("Unloading {}", self.url);
        self.signal("unload", false);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("url", &self.url)
            .field("engine", &self.engine)
            .field("nodes", &self.tree.len())
            .field("ready_state", &self.ready_state)
            .finish()
    }
}
