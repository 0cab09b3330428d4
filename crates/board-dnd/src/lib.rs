//! Board DragDrop Utilities
//!
//! Mouse-event drag-and-drop for Leptos status boards.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type MouseClosure = Closure<dyn FnMut(web_sys::MouseEvent)>;

/// Where a dragged card is about to land: a column and a position inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropSlot {
    /// Column index in the board's column order
    pub column: usize,
    /// Insertion index within the column
    pub index: usize,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_slot_read: ReadSignal<Option<DropSlot>>,
    pub drop_slot_write: WriteSignal<Option<DropSlot>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_slot_read, drop_slot_write) = signal(None::<DropSlot>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_slot_read,
        drop_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
///
/// The trailing one-shot timeout can outlive the owning board, so every
/// signal access is the fallible variant; after unmount this is a no-op.
pub fn end_drag(dnd: &DndSignals) {
    let _ = dnd.dragging_id_write.try_set(None);
    let _ = dnd.drop_slot_write.try_set(None);
    let _ = dnd.pending_id_write.try_set(None);
    let _ = dnd.drag_just_ended_write.try_set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, card_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(card_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Document mousemove handler - starts drag once the pointer has moved
/// past the threshold
fn mousemove_closure(dnd: DndSignals) -> MouseClosure {
    Closure::new(move |ev: web_sys::MouseEvent| {
        // Signals are gone once the owning board unmounts
        let Some(pending) = dnd.pending_id_read.try_get_untracked() else {
            return;
        };

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.try_get_untracked().flatten().is_none() {
            let start_x = dnd.start_x_read.try_get_untracked().unwrap_or(0);
            let start_y = dnd.start_y_read.try_get_untracked().unwrap_or(0);
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                let _ = dnd.dragging_id_write.try_set(pending);
            }
        }
    })
}

/// Create mouseenter handler for drop slots
pub fn make_on_slot_mouseenter(dnd: DndSignals, column: usize, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(Some(DropSlot { column, index }));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(None);
        }
    }
}

/// Document mouseleave handler - clears drag state when the pointer
/// leaves the window mid-drag
fn window_leave_closure(dnd: DndSignals) -> MouseClosure {
    Closure::new(move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.try_get_untracked().flatten().is_some() {
            end_drag(&dnd);
        }
    })
}

/// Document mouseup handler - drop detection
fn mouseup_closure<F>(dnd: DndSignals, on_drop: F) -> MouseClosure
where
    F: Fn(String, DropSlot) + Clone + 'static,
{
    Closure::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else {
            return;
        };
        let drop_slot = dnd.drop_slot_read.try_get_untracked().flatten();

        // Clear pending state first
        let _ = dnd.pending_id_write.try_set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(slot)) = (dragging_id, drop_slot) {
            end_drag(&dnd);
            on_drop(dragged, slot);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
            // Click event will fire naturally on the element
        }
    })
}

/// Attach the document-level listeners one board needs for a drag
/// session: mousemove (threshold detection), mouseup (drop) and
/// mouseleave (abort when the pointer leaves the window).
///
/// Must be called from a component body. The listeners are detached
/// and their closures dropped when that component is cleaned up, so
/// boards can mount and unmount without piling up document handlers.
pub fn bind_document_listeners<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, DropSlot) + Clone + 'static,
{
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let handlers = vec![
        ("mousemove", mousemove_closure(dnd)),
        ("mouseup", mouseup_closure(dnd, on_drop)),
        ("mouseleave", window_leave_closure(dnd)),
    ];
    for (event, cb) in &handlers {
        let _ = doc.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    }

    // Closures live in arena storage until cleanup; detaching before the
    // drop keeps stale boards from seeing further mouse events at all.
    let bound: StoredValue<Option<(web_sys::Document, Vec<(&'static str, MouseClosure)>)>, LocalStorage> =
        StoredValue::new_local(Some((doc, handlers)));
    on_cleanup(move || {
        let _ = bound.try_update_value(|b| {
            if let Some((doc, handlers)) = b.take() {
                for (event, cb) in &handlers {
                    let _ = doc
                        .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
                }
            }
        });
    });
}
