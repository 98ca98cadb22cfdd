//! Effect runner between view state and the REST collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `update` only describes what should happen next. This module performs each
//! requested [`Command`] against a [`TodoApi`], turns the outcome into an
//! [`Action`], and applies it, looping until the state asks for nothing more.
//! Calls triggered by one user action are therefore strictly sequential.
//!
//! ERROR HANDLING
//! ==============
//! Rejected creates and saves come back as user-facing messages. List and
//! delete failures are logged only; the view keeps showing the last list.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use super::todos::{Action, Command, ViewState, update};
use crate::net::api::TodoApi;

/// Something holding a [`ViewState`] that actions can be applied to.
pub trait Store {
    /// Apply `action` and return the command it requested, if any.
    fn apply(&self, action: Action) -> Option<Command>;
}

impl Store for RefCell<ViewState> {
    fn apply(&self, action: Action) -> Option<Command> {
        let mut state = self.borrow_mut();
        let transition = update(std::mem::take(&mut *state), action);
        *state = transition.state;
        transition.command
    }
}

impl Store for RwSignal<ViewState> {
    fn apply(&self, action: Action) -> Option<Command> {
        let mut command = None;
        self.update(|state| {
            let transition = update(std::mem::take(state), action);
            *state = transition.state;
            command = transition.command;
        });
        command
    }
}

/// Perform one network call and describe its outcome.
pub async fn execute<A: TodoApi>(api: &A, command: Command) -> Action {
    log::debug!("executing {command:?}");
    match command {
        Command::Refresh => match api.list().await {
            Ok(items) => {
                log::info!("loaded {} todos", items.len());
                Action::ItemsLoaded(items)
            }
            Err(err) => {
                log::warn!("todo list refresh failed: {err}");
                Action::RefreshFailed
            }
        },
        Command::Create(payload) => match api.create(&payload).await {
            Ok(()) => Action::Created,
            Err(err) => Action::CreateFailed(err.user_message()),
        },
        Command::Update(id, payload) => match TodoApi::update(api, &id, &payload).await {
            Ok(()) => Action::Saved,
            Err(err) => Action::SaveFailed(err.user_message()),
        },
        Command::Delete(id) => {
            if let Err(err) = api.delete(&id).await {
                log::warn!("delete of todo {id} failed: {err}");
            }
            Action::Deleted
        }
    }
}

/// Run `command` and every follow-up command it leads to.
pub async fn drive<A, S>(api: &A, store: &S, command: Command)
where
    A: TodoApi,
    S: Store + ?Sized,
{
    let mut next = Some(command);
    while let Some(command) = next {
        let action = execute(api, command).await;
        next = store.apply(action);
    }
}

/// Apply `action` and run whatever network work it triggers to completion.
pub async fn dispatch<A, S>(api: &A, store: &S, action: Action)
where
    A: TodoApi,
    S: Store + ?Sized,
{
    if let Some(command) = store.apply(action) {
        drive(api, store, command).await;
    }
}

/// Page entry point: apply synchronously, then drive any command on the
/// browser's local executor.
pub fn dispatch_local(state: RwSignal<ViewState>, action: Action) {
    let Some(command) = state.apply(action) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpTodoApi::default();
        drive(&api, &state, command).await;
    });
    #[cfg(not(feature = "csr"))]
    log::debug!("dropping {command:?} outside the browser");
}
