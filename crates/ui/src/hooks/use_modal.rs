//! # Modal Lifecycle Hook
//!
//! Ties a dialog component's `open` prop to the shared overlay resources.
//! The hook keeps one [`ModalLifecycle`] per component instance, reconciles
//! it on every render and tears it down when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use unidoc_core::{ModalLifecycle, OverlayHost};

/// The overlay host provided by the application shell.
///
/// Dialogs rendered outside the shell (previews, tests) get a detached host
/// so they still behave, just without touching the page.
pub fn use_overlay_host() -> OverlayHost {
    let provided = try_use_context::<OverlayHost>();
    use_hook(move || {
        provided.unwrap_or_else(|| {
            tracing::debug!("no overlay host in context, using a detached one");
            OverlayHost::detached()
        })
    })
}

/// Hold the Escape subscription and scroll lock while `open` is true.
///
/// `on_escape` is registered when the dialog opens. Returns whether the
/// dialog currently holds its resources.
pub fn use_modal_lifecycle(open: bool, on_escape: impl Fn() + 'static) -> bool {
    let host = use_overlay_host();
    let lifecycle = use_hook(move || Rc::new(RefCell::new(ModalLifecycle::new(host))));

    lifecycle.borrow_mut().sync(open, on_escape);

    use_drop({
        let lifecycle = Rc::clone(&lifecycle);
        move || lifecycle.borrow_mut().teardown()
    });

    lifecycle.borrow().is_open()
}
