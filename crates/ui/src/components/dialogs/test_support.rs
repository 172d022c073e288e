//! Headless mounting for dialog tests
//!
//! [`Harness`] mounts a root component in a `VirtualDom` whose root context
//! holds an [`OverlayHost`] over a [`MemorySurface`]. It records the class
//! attributes and text nodes the renderer would have written, and dispatches
//! clicks and key presses the same way the desktop host does.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::core::{AttributeValue, ElementId, Event, Mutation, Mutations, ScopeId, VirtualDom};
use dioxus::html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};
use dioxus::prelude::*;
use unidoc_core::{Dismissal, MemorySurface, OverlayHost};

// ============================================================================
// Recorder
// ============================================================================

/// Caller-side state shared between a test and its root component
///
/// Holds the dialog's `open` signal the way a page would, and counts what the
/// dialog reported back.
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    initially_open: bool,
    open: Rc<Cell<Option<Signal<bool>>>>,
    closes: Rc<RefCell<Vec<Dismissal>>>,
    actions: Rc<Cell<u32>>,
}

impl Recorder {
    pub fn opened() -> Self {
        Self {
            initially_open: true,
            ..Self::default()
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }

    /// The root's open flag; call once per render of the root component
    pub fn use_open(&self) -> bool {
        let initial = self.initially_open;
        let open = use_signal(move || initial);
        self.open.set(Some(open));
        open()
    }

    pub fn set_open(&self, value: bool) {
        if let Some(mut open) = self.open.get() {
            open.set(value);
        }
    }

    /// `on_close` handler: remember the reason and close, like a page does
    pub fn close(&self, reason: Dismissal) {
        self.closes.borrow_mut().push(reason);
        self.set_open(false);
    }

    /// `on_confirm` / `on_submit` handler
    pub fn act(&self) {
        self.actions.set(self.actions.get() + 1);
    }

    pub fn closes(&self) -> Vec<Dismissal> {
        self.closes.borrow().clone()
    }

    pub fn actions(&self) -> u32 {
        self.actions.get()
    }
}

// ============================================================================
// Harness
// ============================================================================

pub(crate) struct Harness {
    dom: VirtualDom,
    host: OverlayHost,
    surface: MemorySurface,
    classes: Vec<(ElementId, String)>,
    texts: Vec<String>,
}

impl Harness {
    pub fn mount<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let surface = MemorySurface::new();
        let host = OverlayHost::new(surface.clone());
        let mut dom = VirtualDom::new_with_props(root, props);
        dom.provide_root_context(host.clone());
        let edits = dom.rebuild_to_vec();

        let mut harness = Self {
            dom,
            host,
            surface,
            classes: Vec::new(),
            texts: Vec::new(),
        };
        harness.record(edits);
        harness
    }

    fn record(&mut self, mutations: Mutations) {
        for edit in mutations.edits {
            match edit {
                Mutation::SetAttribute {
                    name: "class",
                    value: AttributeValue::Text(class),
                    id,
                    ..
                } => self.classes.push((id, class)),
                Mutation::CreateTextNode { value, .. } | Mutation::SetText { value, .. } => {
                    self.texts.push(value)
                }
                _ => {}
            }
        }
    }

    /// Flush pending signal writes and diff dirty scopes
    pub fn render(&mut self) {
        let edits = self.dom.render_immediate_to_vec();
        self.record(edits);
    }

    /// Re-render the root without changing any state
    pub fn refresh(&mut self) {
        self.dom.mark_dirty(ScopeId::APP);
        self.render();
    }

    /// Run `f` inside the runtime, then render
    pub fn run(&mut self, f: impl FnOnce()) {
        self.dom.in_runtime(f);
        self.render();
    }

    /// Forward a document key press through the overlay host
    pub fn press(&mut self, key: &str) -> bool {
        let host = self.host.clone();
        let handled = self.dom.in_runtime(|| host.handle_key(key));
        self.render();
        handled
    }

    /// Newest element whose class contains `fragment`
    pub fn element(&self, fragment: &str) -> Option<ElementId> {
        let mut seen = Vec::new();
        for (id, class) in self.classes.iter().rev() {
            if seen.contains(id) {
                continue;
            }
            seen.push(*id);
            if class.contains(fragment) {
                return Some(*id);
            }
        }
        None
    }

    /// Dispatch a bubbling click on the newest element matching `fragment`
    pub fn click(&mut self, fragment: &str) {
        let id = self
            .element(fragment)
            .unwrap_or_else(|| panic!("no element with class containing '{fragment}'"));
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        self.dom.runtime().handle_event("click", event, id);
        self.render();
    }

    /// How many class attributes containing `fragment` were ever written
    pub fn class_writes(&self, fragment: &str) -> usize {
        self.classes
            .iter()
            .filter(|(_, class)| class.contains(fragment))
            .count()
    }

    /// How many text nodes equal to `text` were ever written
    pub fn text_writes(&self, text: &str) -> usize {
        self.texts.iter().filter(|t| t.as_str() == text).count()
    }

    pub fn listeners(&self) -> usize {
        self.host.escape_listeners().active()
    }

    pub fn locked(&self) -> bool {
        self.surface.is_locked()
    }

    pub fn holders(&self) -> usize {
        self.host.scroll_lock().holders()
    }

    /// Drop the whole tree, keeping the host and surface for inspection
    pub fn unmount(self) -> (OverlayHost, MemorySurface) {
        let Self {
            dom, host, surface, ..
        } = self;
        drop(dom);
        (host, surface)
    }
}
