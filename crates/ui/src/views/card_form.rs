use dioxus::prelude::*;
use dioxus_router::use_navigator;

use flashdeck_core::model::{CardDraft, CardDraftError, DeckId};

use crate::context::AppContext;
use crate::notify::Notices;
use crate::views::{SaveState, ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
struct CardFormData {
    deck_name: String,
    deck_description: String,
}

#[component]
pub fn CardFormView(deck_id: u64) -> Element {
    let deck_id = DeckId::new(deck_id);
    let ctx = use_context::<AppContext>();
    let notices = use_context::<Notices>();
    let navigator = use_navigator();
    let gateway = ctx.deck_gateway();
    let gateway_for_resource = gateway.clone();

    let mut front = use_signal(String::new);
    let mut back = use_signal(String::new);
    let mut source = use_signal(String::new);
    let save_state = use_signal(|| SaveState::Idle);

    // The deck is fetched only to put its name above the form.
    let resource = use_resource(move || {
        let gateway = gateway_for_resource.clone();
        async move {
            let deck = gateway
                .get_deck(deck_id)
                .await
                .map_err(|_| ViewError::Fetch)?;
            Ok(CardFormData {
                deck_name: deck.name().to_owned(),
                deck_description: deck.description().to_owned(),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    let on_submit = {
        let gateway = gateway.clone();
        use_callback(move |()| {
            let mut save_state = save_state;
            if save_state() == SaveState::Saving {
                return;
            }
            let draft = CardDraft::new(&front(), &back(), &source());
            if let Err(err) = draft.validate() {
                save_state.set(SaveState::Error(invalid_message(&err)));
                return;
            }

            let gateway = gateway.clone();
            let mut front = front;
            let mut back = back;
            let mut source = source;
            spawn(async move {
                save_state.set(SaveState::Saving);
                match gateway.create_card(deck_id, &draft).await {
                    Ok(()) => {
                        save_state.set(SaveState::Idle);
                        front.set(String::new());
                        back.set(String::new());
                        source.set(String::new());
                        notices.success("Card created successfully");
                    }
                    Err(_) => {
                        let message = "Error submitting form".to_owned();
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
            if let Some(handles) = try_consume_context::<CardFormTestHandles>() {
                handles.register(on_submit, front, back, source);
            }
        }
    }

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "text-center fs-2 my-3",
                        "{data.deck_name}"
                        p { class: "fs-5", "{data.deck_description}" }
                    }
                    form { class: "container m-3",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            on_submit.call(());
                        },
                        div { class: "mb-3",
                            label { class: "form-label", r#for: "cardFront", "Front" }
                            input {
                                id: "cardFront",
                                class: "form-control",
                                r#type: "text",
                                required: true,
                                placeholder: "What is the capital of France?",
                                value: "{front()}",
                                oninput: move |evt| front.set(evt.value()),
                            }
                            div { class: "form-text",
                                "This is what you will see on the front of the card."
                            }
                        }
                        div { class: "mb-3",
                            label { class: "form-label", r#for: "cardBack", "Back" }
                            input {
                                id: "cardBack",
                                class: "form-control",
                                r#type: "text",
                                required: true,
                                placeholder: "Paris",
                                value: "{back()}",
                                oninput: move |evt| back.set(evt.value()),
                            }
                            div { class: "form-text",
                                "This is what you will see on the back of the card."
                            }
                        }
                        div { class: "mb-3",
                            label { class: "form-label", r#for: "cardSource", "Source" }
                            input {
                                id: "cardSource",
                                class: "form-control",
                                r#type: "text",
                                placeholder: "http://source.com",
                                value: "{source()}",
                                oninput: move |evt| source.set(evt.value()),
                            }
                            div { class: "form-text",
                                "This is where you found the information."
                            }
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
                            "Go Back"
                        }
                        if let SaveState::Error(message) = save_state() {
                            p { class: "text-danger mt-2", "{message}" }
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
pub(crate) struct CardFormTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    front: Rc<RefCell<Option<Signal<String>>>>,
    back: Rc<RefCell<Option<Signal<String>>>>,
    source: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl CardFormTestHandles {
    pub(crate) fn register(
        &self,
        submit: Callback<()>,
        front: Signal<String>,
        back: Signal<String>,
        source: Signal<String>,
    ) {
        *self.submit.borrow_mut() = Some(submit);
        *self.front.borrow_mut() = Some(front);
        *self.back.borrow_mut() = Some(back);
        *self.source.borrow_mut() = Some(source);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        self.submit.borrow().clone().expect("submit registered")
    }

    pub(crate) fn front(&self) -> Signal<String> {
        self.front.borrow().clone().expect("front registered")
    }

    pub(crate) fn back(&self) -> Signal<String> {
        self.back.borrow().clone().expect("back registered")
    }

    pub(crate) fn source(&self) -> Signal<String> {
        self.source.borrow().clone().expect("source registered")
    }
}

fn invalid_message(err: &CardDraftError) -> String {
    match err {
        CardDraftError::EmptyFront => "Front cannot be empty.".to_owned(),
        CardDraftError::EmptyBack => "Back cannot be empty.".to_owned(),
        _ => err.to_string(),
    }
}
