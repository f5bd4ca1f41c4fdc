//! Document-wide pointer listeners scoped to a single drag.
//!
//! The dock must see pointer movement and release anywhere on the page, not
//! just over itself, but only while a drag is in progress. `DragListeners` is
//! created on drag start and must be released on every exit path: pointer-up,
//! pointer-cancel, reset, and component cleanup. `ListenerSlot` holds at most
//! one set and releases the previous set whenever it is replaced.

#[cfg(test)]
#[path = "drag_listeners_test.rs"]
mod drag_listeners_test;

use leptos::ev::{self, PointerEvent};
use leptos::prelude::*;

/// Handles for the move/up/cancel listeners of one drag.
pub struct DragListeners {
    handles: Vec<WindowListenerHandle>,
}

impl DragListeners {
    /// Register window-level listeners. Pointer events bubble from every
    /// element in the document to the window.
    pub fn attach<M, U, C>(on_move: M, on_up: U, on_cancel: C) -> Self
    where
        M: Fn(PointerEvent) + 'static,
        U: Fn(PointerEvent) + 'static,
        C: Fn(PointerEvent) + 'static,
    {
        let handles = vec![
            window_event_listener(ev::pointermove, on_move),
            window_event_listener(ev::pointerup, on_up),
            window_event_listener(ev::pointercancel, on_cancel),
        ];
        Self { handles }
    }

    /// Remove every listener.
    pub fn release(self) {
        for handle in self.handles {
            handle.remove();
        }
    }
}

/// Component-owned slot for the active drag's listeners.
#[derive(Clone, Copy)]
pub struct ListenerSlot {
    inner: StoredValue<Option<DragListeners>, LocalStorage>,
}

impl ListenerSlot {
    /// Create an empty slot that releases its listeners when the owning
    /// reactive scope is cleaned up.
    pub fn new() -> Self {
        let slot = Self { inner: StoredValue::new_local(None) };
        on_cleanup(move || slot.release());
        slot
    }

    /// Store `listeners`, releasing any set left over from an earlier drag.
    pub fn replace(&self, listeners: DragListeners) {
        let previous = self.inner.try_update_value(|current| current.replace(listeners)).flatten();
        if let Some(previous) = previous {
            previous.release();
        }
    }

    /// Release the active listeners, if any.
    pub fn release(&self) {
        if let Some(listeners) = self.inner.try_update_value(Option::take).flatten() {
            listeners.release();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.try_with_value(Option::is_some).unwrap_or(false)
    }
}

impl Default for ListenerSlot {
    fn default() -> Self {
        Self::new()
    }
}
