//! To-do list page: creation form, error banner, and the item list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering reads only from the `ViewState` signal. Every input event becomes
//! an `Action` passed to `controller::dispatch_local`, which owns all mutation
//! and network traffic.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use leptos::prelude::*;

use crate::net::types::TodoItem;
use crate::state::controller;
use crate::state::todos::{Action, EditSession, ViewState};

/// Text shown in place of the list while the first load is in flight.
fn placeholder_text(state: &ViewState) -> Option<&'static str> {
    if !state.items.is_empty() {
        return None;
    }
    if state.loading {
        Some("Loading...")
    } else {
        Some("Nothing to do.")
    }
}

fn edit_field(state: &ViewState, field: fn(&EditSession) -> &str) -> String {
    state.editing.as_ref().map(|session| field(session).to_owned()).unwrap_or_default()
}

/// The to-do page. Loads the collection once on mount.
#[component]
pub fn TodoPage() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let dispatch = Callback::new(move |action: Action| controller::dispatch_local(state, action));

    Effect::new(move || dispatch.run(Action::Load));

    view! {
        <div class="container py-5">
            <h2 class="mb-4">"📝 To-do List"</h2>

            <DraftForm state=state dispatch=dispatch/>

            <Show when=move || state.with(|s| s.error_message.is_some())>
                <div class="alert alert-danger" role="alert">
                    {move || state.with(|s| s.error_message.clone().unwrap_or_default())}
                </div>
            </Show>

            {move || {
                state
                    .with(placeholder_text)
                    .map(|text| view! { <p class="text-muted">{text}</p> })
            }}

            <ul class="list-group">
                {move || {
                    state
                        .with(|s| s.items.clone())
                        .into_iter()
                        .map(|todo| view! { <TodoRow todo=todo state=state dispatch=dispatch/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

/// Creation form bound to the draft fields.
#[component]
fn DraftForm(state: RwSignal<ViewState>, dispatch: Callback<Action>) -> impl IntoView {
    view! {
        <div class="mb-3">
            <input
                class="form-control mb-2"
                type="text"
                placeholder="Title"
                prop:value=move || state.with(|s| s.draft_title.clone())
                on:input=move |ev| dispatch.run(Action::DraftTitleChanged(event_target_value(&ev)))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        dispatch.run(Action::SubmitCreate);
                    }
                }
            />
            <textarea
                class="form-control mb-2"
                placeholder="Description"
                rows="2"
                prop:value=move || state.with(|s| s.draft_description.clone())
                on:input=move |ev| dispatch.run(Action::DraftDescriptionChanged(event_target_value(&ev)))
            ></textarea>
            <button class="btn btn-primary" on:click=move |_| dispatch.run(Action::SubmitCreate)>
                "Add Todo"
            </button>
        </div>
    }
}

/// One list entry, rendered as an editor while it is the edited item.
#[component]
fn TodoRow(todo: TodoItem, state: RwSignal<ViewState>, dispatch: Callback<Action>) -> impl IntoView {
    let id = todo.id.clone();
    let is_editing = move || state.with(|s| s.is_editing(&id));

    view! {
        <li class="list-group-item">
            <Show
                when=is_editing
                fallback=move || view! { <TodoSummary todo=todo.clone() dispatch=dispatch/> }
            >
                <TodoEditor state=state dispatch=dispatch/>
            </Show>
        </li>
    }
}

#[component]
fn TodoSummary(todo: TodoItem, dispatch: Callback<Action>) -> impl IntoView {
    let title = todo.title.clone();
    let description = todo.description.clone();
    let id = todo.id.clone();

    view! {
        <div class="d-flex justify-content-between align-items-center">
            <div>
                <h5>{title}</h5>
                <p class="mb-1">{description}</p>
            </div>
            <div>
                <button
                    class="btn btn-sm btn-warning me-2"
                    on:click=move |_| dispatch.run(Action::BeginEdit(todo.clone()))
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-sm btn-danger"
                    on:click=move |_| dispatch.run(Action::Delete(id.clone()))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[component]
fn TodoEditor(state: RwSignal<ViewState>, dispatch: Callback<Action>) -> impl IntoView {
    view! {
        <div>
            <input
                class="form-control mb-1"
                type="text"
                prop:value=move || state.with(|s| edit_field(s, |e| e.title.as_str()))
                on:input=move |ev| dispatch.run(Action::EditTitleChanged(event_target_value(&ev)))
            />
            <textarea
                class="form-control mb-2"
                rows="2"
                prop:value=move || state.with(|s| edit_field(s, |e| e.description.as_str()))
                on:input=move |ev| dispatch.run(Action::EditDescriptionChanged(event_target_value(&ev)))
            ></textarea>
            <button class="btn btn-sm btn-success me-2" on:click=move |_| dispatch.run(Action::SubmitSave)>
                "Save"
            </button>
            <button class="btn btn-sm btn-secondary" on:click=move |_| dispatch.run(Action::CancelEdit)>
                "Cancel"
            </button>
        </div>
    }
}
