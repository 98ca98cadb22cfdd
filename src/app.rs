//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::config;
use crate::pages::todos::TodoPage;
use crate::state::todos::ViewState;

/// Root application component.
///
/// Owns the single `ViewState` signal and provides it to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(ViewState::default());
    provide_context(state);

    view! {
        <Stylesheet id="bootstrap" href=config::STYLESHEET_URL/>
        <Title text="To-do List"/>
        <TodoPage/>
    }
}
