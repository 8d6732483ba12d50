use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DeckRowVm, map_deck_rows};

#[derive(Clone, Debug, PartialEq)]
struct DeckListData {
    rows: Vec<DeckRowVm>,
}

#[component]
pub fn DeckListView() -> Element {
    let ctx = use_context::<AppContext>();
    let gateway = ctx.deck_gateway();

    let resource = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let decks = gateway.list_decks().await.map_err(|_| ViewError::Fetch)?;
            let rows = map_deck_rows(&decks);
            Ok(DeckListData { rows })
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
                    Spinner {}
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { class: "text-center m-4", "No decks yet." }
                    } else {
                        ul { class: "list-group",
                            for row in data.rows {
                                DeckRow { key: "{row.id}", row }
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

#[component]
fn DeckRow(row: DeckRowVm) -> Element {
    rsx! {
        li { class: "list-group-item list-group-item-action d-flex justify-content-between align-items-start",
            Link { class: "ms-2 me-auto", to: Route::DeckDetail { deck_id: row.id.value() },
                div { class: "fw-bold", "{row.name}" }
                "{row.description}"
            }
        }
    }
}

#[component]
fn Spinner() -> Element {
    rsx! {
        div { class: "text-center m-5",
            div { class: "spinner-border", role: "status",
                span { class: "visually-hidden", "Loading..." }
            }
        }
    }
}
