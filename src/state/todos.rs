//! To-do view state and its transitions.
//!
//! DESIGN
//! ======
//! All mutation goes through [`update`], a pure function from the current
//! state and an [`Action`] to the next state plus at most one [`Command`].
//! The page never assigns fields directly, and the controller is the only
//! thing that talks to the network.
//!
//! The edit buffer lives inside `Option<EditSession>`, so at most one item can
//! be in edit mode and the edit fields cannot outlive the session.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::types::{TodoId, TodoItem, TodoPayload};

pub const TITLE_REQUIRED: &str = "Title is required.";
pub const DESCRIPTION_REQUIRED: &str = "Description is required.";

/// In-progress edit of one existing item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub id: TodoId,
    pub title: String,
    pub description: String,
}

impl EditSession {
    fn from_item(item: &TodoItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
        }
    }
}

/// Everything the to-do page renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Collection as last returned by the server, in server order.
    pub items: Vec<TodoItem>,
    pub draft_title: String,
    pub draft_description: String,
    pub editing: Option<EditSession>,
    pub error_message: Option<String>,
    /// A list refresh is in flight.
    pub loading: bool,
}

impl ViewState {
    #[must_use]
    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.editing.as_ref().is_some_and(|session| &session.id == id)
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<&TodoId> {
        self.editing.as_ref().map(|session| &session.id)
    }
}

/// User input or network outcome fed into [`update`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The page was mounted; fetch the collection.
    Load,
    ItemsLoaded(Vec<TodoItem>),
    RefreshFailed,

    DraftTitleChanged(String),
    DraftDescriptionChanged(String),
    SubmitCreate,
    Created,
    CreateFailed(String),

    BeginEdit(TodoItem),
    EditTitleChanged(String),
    EditDescriptionChanged(String),
    SubmitSave,
    Saved,
    SaveFailed(String),
    CancelEdit,

    Delete(TodoId),
    Deleted,
}

/// Network call requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Create(TodoPayload),
    Update(TodoId, TodoPayload),
    Delete(TodoId),
}

/// Result of [`update`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    pub command: Option<Command>,
}

impl Transition {
    fn stay(state: ViewState) -> Self {
        Self { state, command: None }
    }

    fn then(state: ViewState, command: Command) -> Self {
        Self {
            state,
            command: Some(command),
        }
    }
}

/// Check both fields are non-blank and build the payload from the text as
/// typed. Blankness is judged on the trimmed value only.
///
/// # Errors
///
/// Returns the message to show when the title or description is blank. The
/// title is checked first.
pub fn validate(title: &str, description: &str) -> Result<TodoPayload, &'static str> {
    if title.trim().is_empty() {
        return Err(TITLE_REQUIRED);
    }
    if description.trim().is_empty() {
        return Err(DESCRIPTION_REQUIRED);
    }
    Ok(TodoPayload {
        title: title.to_owned(),
        description: description.to_owned(),
    })
}

/// Apply `action` to `state`.
#[must_use]
pub fn update(mut state: ViewState, action: Action) -> Transition {
    match action {
        Action::Load => {
            state.loading = true;
            Transition::then(state, Command::Refresh)
        }
        Action::ItemsLoaded(items) => {
            state.loading = false;
            if let Some(id) = state.editing_id() {
                if !items.iter().any(|item| &item.id == id) {
                    state.editing = None;
                }
            }
            state.items = items;
            Transition::stay(state)
        }
        Action::RefreshFailed => {
            state.loading = false;
            Transition::stay(state)
        }

        Action::DraftTitleChanged(title) => {
            state.draft_title = title;
            Transition::stay(state)
        }
        Action::DraftDescriptionChanged(description) => {
            state.draft_description = description;
            Transition::stay(state)
        }
        Action::SubmitCreate => {
            state.error_message = None;
            match validate(&state.draft_title, &state.draft_description) {
                Ok(payload) => Transition::then(state, Command::Create(payload)),
                Err(message) => {
                    state.error_message = Some(message.to_owned());
                    Transition::stay(state)
                }
            }
        }
        Action::Created => {
            state.draft_title.clear();
            state.draft_description.clear();
            state.loading = true;
            Transition::then(state, Command::Refresh)
        }
        Action::CreateFailed(message) | Action::SaveFailed(message) => {
            state.error_message = Some(message);
            Transition::stay(state)
        }

        Action::BeginEdit(item) => {
            state.editing = Some(EditSession::from_item(&item));
            state.error_message = None;
            Transition::stay(state)
        }
        Action::EditTitleChanged(title) => {
            if let Some(session) = state.editing.as_mut() {
                session.title = title;
            }
            Transition::stay(state)
        }
        Action::EditDescriptionChanged(description) => {
            if let Some(session) = state.editing.as_mut() {
                session.description = description;
            }
            Transition::stay(state)
        }
        Action::SubmitSave => {
            let Some(session) = state.editing.as_ref() else {
                return Transition::stay(state);
            };
            let outcome = validate(&session.title, &session.description).map(|payload| (session.id.clone(), payload));
            state.error_message = None;
            match outcome {
                Ok((id, payload)) => Transition::then(state, Command::Update(id, payload)),
                Err(message) => {
                    state.error_message = Some(message.to_owned());
                    Transition::stay(state)
                }
            }
        }
        Action::Saved => {
            state.editing = None;
            state.loading = true;
            Transition::then(state, Command::Refresh)
        }
        Action::CancelEdit => {
            state.editing = None;
            Transition::stay(state)
        }

        Action::Delete(id) => {
            state.error_message = None;
            Transition::then(state, Command::Delete(id))
        }
        Action::Deleted => {
            state.loading = true;
            Transition::then(state, Command::Refresh)
        }
    }
}
