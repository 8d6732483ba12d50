use dioxus::prelude::*;
use dioxus_router::Link;

use flashdeck_core::model::DeckId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DeckDetailVm, map_deck_detail};

#[component]
pub fn DeckDetailView(deck_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let gateway = ctx.deck_gateway();

    let resource = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let deck = gateway
                .get_deck(DeckId::new(deck_id))
                .await
                .map_err(|_| ViewError::Fetch)?;
            Ok(map_deck_detail(&deck))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    DeckCard { vm }
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

#[component]
fn DeckCard(vm: DeckDetailVm) -> Element {
    let deck_id = vm.id.value();

    rsx! {
        div { class: "card text-center m-2",
            div { class: "card-header", "Last Studied: {vm.last_studied_str}" }
            div { class: "card-body",
                h5 { class: "card-title", "{vm.name}" }
                p { class: "card-text", "{vm.description}" }
                p { class: "card-text",
                    small { class: "text-body-secondary",
                        "Created: {vm.created_str}"
                        br {}
                        "Last updated: {vm.updated_str}"
                        br {}
                        "Total cards: {vm.total_cards}"
                    }
                }
                div { class: "btn-group mb-3", role: "group",
                    Link { class: "btn btn-primary", to: Route::CardNew { deck_id }, "Add Cards" }
                    Link { class: "btn btn-secondary", to: Route::DeckEdit { deck_id }, "Edit" }
                    Link { class: "btn btn-danger", to: Route::DeleteDeck { deck_id }, "Delete" }
                }
            }
        }
    }
}
