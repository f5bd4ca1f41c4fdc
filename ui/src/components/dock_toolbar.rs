//! Floating action dock that snaps to the nearest viewport edge.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dock hosts the desk's counter actions and can be dragged anywhere by
//! its handle. While dragging it tracks the pointer 1:1 with no animation;
//! on release it snaps flush to the closest edge and eases into place. All
//! placement decisions come from `dock::gesture::Dock`; this component only
//! measures, forwards events, and renders.

use dock::config::DockConfig;
use dock::geom::Point;
use dock::gesture::{Button, Dock, Outcome};
use dock::snap::Metrics;
use leptos::ev::{MouseEvent, PointerEvent};
use leptos::prelude::*;

use crate::util::dock_style::{handle_style, root_class, root_style, tooltip_class};
use crate::util::drag_listeners::{DragListeners, ListenerSlot};
use crate::util::measure;

fn pointer_of(ev: &PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn measured_metrics(root_ref: NodeRef<leptos::html::Div>) -> Option<Metrics> {
    match measure::metrics(root_ref) {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::debug!("dock: skipping snap, {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            None
        }
    }
}

fn log_outcome(outcome: Outcome) {
    #[cfg(feature = "hydrate")]
    match outcome {
        Outcome::Snapped(p) => log::debug!("dock: snapped to {} at ({}, {})", p.edge.as_str(), p.position.x, p.position.y),
        Outcome::SnapSkipped { position } => {
            log::debug!("dock: resting unsnapped at ({}, {})", position.x, position.y);
        }
        Outcome::Reset(p) => log::debug!("dock: reset to ({}, {})", p.position.x, p.position.y),
        Outcome::DragStarted { grab } => log::trace!("dock: drag started, grab ({}, {})", grab.x, grab.y),
        Outcome::Moved { .. } | Outcome::Ignored => {}
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = outcome;
}

/// Click handler that runs `cb` when present and does nothing otherwise.
fn fire(cb: Option<Callback<()>>) -> impl Fn(MouseEvent) + Clone + 'static {
    move |_| {
        if let Some(cb) = cb {
            cb.run(());
        }
    }
}

/// Draggable, edge-snapping action dock.
///
/// Every callback is optional; a missing one leaves its button inert. The
/// reset-position control is handled internally.
#[component]
pub fn DockToolbar(
    #[prop(optional, into)] on_increment: Option<Callback<()>>,
    #[prop(optional, into)] on_decrement: Option<Callback<()>>,
    #[prop(optional, into)] on_reset: Option<Callback<()>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] config: Option<DockConfig>,
) -> impl IntoView {
    let config = match config.unwrap_or_default().validated_or_default() {
        (config, None) => config,
        (config, Some(e)) => {
            #[cfg(feature = "hydrate")]
            log::warn!("dock: invalid config, using defaults: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            config
        }
    };

    let root_ref = NodeRef::<leptos::html::Div>::new();
    let dock = RwSignal::new(Dock::new(config.clone(), None));
    let listeners = ListenerSlot::new();

    // First snap once the element has a size to measure.
    Effect::new(move |_| {
        if root_ref.get().is_none() {
            return;
        }
        if let Some(metrics) = measured_metrics(root_ref) {
            dock.set(Dock::new(config.clone(), Some(metrics)));
        }
    });

    let finish_drag = move |cancelled: bool| {
        let metrics = measured_metrics(root_ref);
        let outcome = dock
            .try_update(|d| if cancelled { d.pointer_cancel(metrics) } else { d.pointer_up(metrics) })
            .unwrap_or(Outcome::Ignored);
        listeners.release();
        log_outcome(outcome);
    };

    let on_handle_pointer_down = move |ev: PointerEvent| {
        let button = Button::from_dom(ev.button());
        let outcome = dock
            .try_update(|d| d.pointer_down(pointer_of(&ev), button))
            .unwrap_or(Outcome::Ignored);
        if !matches!(outcome, Outcome::DragStarted { .. }) {
            return;
        }
        ev.prevent_default();
        listeners.replace(DragListeners::attach(
            move |ev: PointerEvent| {
                dock.update(|d| {
                    d.pointer_move(pointer_of(&ev));
                });
            },
            move |_: PointerEvent| finish_drag(false),
            move |_: PointerEvent| finish_drag(true),
        ));
        log_outcome(outcome);
    };

    let on_reset_position = move |_| {
        let viewport = match measure::viewport_size() {
            Ok(size) => Some(size),
            Err(e) => {
                #[cfg(feature = "hydrate")]
                log::debug!("dock: reset skipped, {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
                None
            }
        };
        let outcome = dock.try_update(|d| d.reset_position(viewport)).unwrap_or(Outcome::Ignored);
        listeners.release();
        log_outcome(outcome);
    };

    let class_attr = move || dock.with(|d| root_class(d, class.as_deref()));
    let style_attr = move || dock.with(root_style);
    let handle_attr = move || dock.with(handle_style);
    let tip = move || dock.with(|d| tooltip_class(d.edge()));

    view! {
        <div class=class_attr style=style_attr node_ref=root_ref role="toolbar" aria-label="Desk actions">
            <div
                class="dock__handle"
                style=handle_attr
                aria-label="Drag to move"
                on:pointerdown=on_handle_pointer_down
            >
                "\u{22EE}\u{22EE}"
            </div>
            <button class="dock__btn" aria-label="Increment" on:click=fire(on_increment)>
                "+"
                <span class=tip>"Increment"</span>
            </button>
            <button class="dock__btn" aria-label="Decrement" on:click=fire(on_decrement)>
                "\u{2212}"
                <span class=tip>"Decrement"</span>
            </button>
            <button class="dock__btn" aria-label="Reset counter" on:click=fire(on_reset)>
                "\u{21BA}"
                <span class=tip>"Reset counter"</span>
            </button>
            <button class="dock__btn dock__btn--muted" aria-label="Reset position" on:click=on_reset_position>
                "\u{2316}"
                <span class=tip>"Reset position"</span>
            </button>
        </div>
    }
}
