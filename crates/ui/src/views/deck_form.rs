use dioxus::prelude::*;
use dioxus_router::use_navigator;

use api::ApiError;
use flashdeck_core::model::{Deck, DeckDraft, DeckDraftError, DeckId, FieldLimits};

use crate::context::AppContext;
use crate::notify::Notices;
use crate::views::{SaveState, ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Which branch of the dual-purpose deck form is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(DeckId),
}

#[derive(Clone, Debug, PartialEq)]
struct DeckFormData {
    limits: FieldLimits,
    current: Option<Deck>,
}

#[component]
pub fn DeckCreateView() -> Element {
    rsx! {
        DeckForm { mode: FormMode::Create }
    }
}

#[component]
pub fn DeckEditView(deck_id: u64) -> Element {
    rsx! {
        DeckForm { mode: FormMode::Update(DeckId::new(deck_id)) }
    }
}

#[component]
fn DeckForm(mode: FormMode) -> Element {
    let ctx = use_context::<AppContext>();
    let notices = use_context::<Notices>();
    let navigator = use_navigator();
    let gateway = ctx.deck_gateway();
    let gateway_for_resource = gateway.clone();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut save_state = use_signal(|| SaveState::Idle);
    let mut prefilled_for = use_signal(|| None::<DeckId>);

    // Both limits must resolve before the inputs render, so the server never
    // sees a value the form would have allowed past its maxlength.
    let resource = use_resource(move || {
        let gateway = gateway_for_resource.clone();
        async move {
            match mode {
                FormMode::Create => {
                    let (name_max, description_max) = tokio::try_join!(
                        gateway.name_max_length(),
                        gateway.description_max_length()
                    )
                    .map_err(|_| ViewError::Fetch)?;
                    Ok(DeckFormData {
                        limits: FieldLimits::new(name_max, description_max),
                        current: None,
                    })
                }
                FormMode::Update(deck_id) => {
                    let (name_max, description_max, deck) = tokio::try_join!(
                        gateway.name_max_length(),
                        gateway.description_max_length(),
                        gateway.get_deck(deck_id)
                    )
                    .map_err(|_| ViewError::Fetch)?;
                    Ok(DeckFormData {
                        limits: FieldLimits::new(name_max, description_max),
                        current: Some(deck),
                    })
                }
            }
        }
    });
    let state = view_state_from_resource(&resource);

    use_effect(move || {
        let deck = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok())
            .and_then(|data| data.current.clone());
        if let Some(deck) = deck {
            let should_fill = prefilled_for().is_none_or(|id| id != deck.id());
            if should_fill {
                prefilled_for.set(Some(deck.id()));
                name.set(deck.name().to_owned());
                description.set(deck.description().to_owned());
                save_state.set(SaveState::Idle);
            }
        }
    });

    let on_submit = {
        let gateway = gateway.clone();
        use_callback(move |()| {
            let mut save_state = save_state;
            if save_state() == SaveState::Saving {
                return;
            }
            let draft = DeckDraft::new(&name(), &description());
            let limits = resource
                .value()
                .read()
                .as_ref()
                .and_then(|value| value.as_ref().ok())
                .map(|data| data.limits);
            let Some(limits) = limits else {
                return;
            };
            if let Err(err) = draft.validate(limits) {
                save_state.set(SaveState::Error(invalid_message(&err)));
                return;
            }

            let gateway = gateway.clone();
            spawn(async move {
                save_state.set(SaveState::Saving);
                let result = match mode {
                    FormMode::Create => gateway.create_deck(&draft).await,
                    FormMode::Update(deck_id) => gateway.update_deck(deck_id, &draft).await,
                };
                match result {
                    Ok(_) => {
                        save_state.set(SaveState::Idle);
                        notices.success(success_message(mode));
                        navigator.go_back();
                    }
                    Err(err) => {
                        let message = failure_message(&err);
                        notices.error(message.clone());
                        save_state.set(SaveState::Error(message));
                    }
                }
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DeckFormTestHandles>() {
                handles.register(on_submit, name, description);
            }
        }
    }

    let heading = match mode {
        FormMode::Create => "New Deck",
        FormMode::Update(_) => "Edit Deck",
    };

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => {
                    let name_max = data.limits.name_max();
                    let description_max = data.limits.description_max();
                    rsx! {
                        div { class: "text-center fs-2 my-3", "{heading}" }
                        form { class: "container m-3",
                            onsubmit: move |evt| {
                                evt.prevent_default();
                                on_submit.call(());
                            },
                            div { class: "mb-3",
                                label { class: "form-label", r#for: "deckName", "Deck Name" }
                                input {
                                    id: "deckName",
                                    class: "form-control",
                                    r#type: "text",
                                    required: true,
                                    maxlength: "{name_max}",
                                    placeholder: "Computer Science",
                                    value: "{name()}",
                                    oninput: move |evt| name.set(evt.value()),
                                }
                                div { class: "form-text", "This is the name of the deck." }
                            }
                            div { class: "mb-3",
                                label { class: "form-label", r#for: "deckDescription", "Deck Description" }
                                input {
                                    id: "deckDescription",
                                    class: "form-control",
                                    r#type: "text",
                                    maxlength: "{description_max}",
                                    placeholder: "This a deck containing all the topics in computer science",
                                    value: "{description()}",
                                    oninput: move |evt| description.set(evt.value()),
                                }
                                div { class: "form-text", "This is the description of the deck." }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: save_state() == SaveState::Saving,
                                "Submit"
                            }
                            button {
                                class: "btn btn-secondary mx-2",
                                r#type: "button",
                                onclick: move |_| {
                                    navigator.go_back();
                                },
                                "Cancel"
                            }
                            if let SaveState::Error(message) = save_state() {
                                p { class: "text-danger mt-2", "{message}" }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DeckFormTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    name: Rc<RefCell<Option<Signal<String>>>>,
    description: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl DeckFormTestHandles {
    pub(crate) fn register(
        &self,
        submit: Callback<()>,
        name: Signal<String>,
        description: Signal<String>,
    ) {
        *self.submit.borrow_mut() = Some(submit);
        *self.name.borrow_mut() = Some(name);
        *self.description.borrow_mut() = Some(description);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        self.submit.borrow().clone().expect("submit registered")
    }

    pub(crate) fn name(&self) -> Signal<String> {
        self.name.borrow().clone().expect("name registered")
    }

    pub(crate) fn description(&self) -> Signal<String> {
        self.description.borrow().clone().expect("description registered")
    }
}

fn success_message(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Create => "Deck created successfully",
        FormMode::Update(_) => "Deck updated successfully",
    }
}

fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::NameTaken => "A deck with that name already exists".to_owned(),
        _ => "Error submitting form".to_owned(),
    }
}

fn invalid_message(err: &DeckDraftError) -> String {
    match err {
        DeckDraftError::EmptyName => "Name cannot be empty.".to_owned(),
        DeckDraftError::NameTooLong { max } => {
            format!("Name cannot exceed {max} characters.")
        }
        DeckDraftError::DescriptionTooLong { max } => {
            format!("Description cannot exceed {max} characters.")
        }
        _ => err.to_string(),
    }
}
