//! Fulfillment desk page hosting the floating action dock.

use leptos::prelude::*;

use crate::components::dock_toolbar::DockToolbar;
use crate::state::counter::CounterState;

/// Desk page: a pick counter driven by the dock's action buttons.
#[component]
pub fn DeskPage() -> impl IntoView {
    let counter = expect_context::<RwSignal<CounterState>>();

    let count = move || counter.get().count;

    view! {
        <main class="desk">
            <header class="desk__header">
                <h1 class="desk__title">"Fulfillment desk"</h1>
                <p class="desk__hint">"Drag the dock by its handle; it snaps to the nearest edge."</p>
            </header>
            <section class="desk__counter">
                <span class="desk__counter-label">"Picks queued"</span>
                <span class="desk__counter-value">{count}</span>
            </section>
            <DockToolbar
                class="desk__dock"
                on_increment=move |()| counter.update(CounterState::increment)
                on_decrement=move |()| counter.update(CounterState::decrement)
                on_reset=move |()| counter.update(CounterState::reset)
            />
        </main>
    }
}
