use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::notify::NoticeHost;
use crate::views::{
    CardFormView, DeckCreateView, DeckDetailView, DeckEditView, DeckListView, DeleteDeckView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DeckListView)] DeckList {},
        #[route("/deck/new", DeckCreateView)] DeckCreate {},
        #[route("/deck/:deck_id", DeckDetailView)] DeckDetail { deck_id: u64 },
        #[route("/deck/:deck_id/edit", DeckEditView)] DeckEdit { deck_id: u64 },
        #[route("/deck/:deck_id/delete", DeleteDeckView)] DeleteDeck { deck_id: u64 },
        #[route("/deck/:deck_id/card/new", CardFormView)] CardNew { deck_id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        NavBar {}
        main { class: "content",
            Outlet::<Route> {}
        }
        NoticeHost {}
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav { class: "navbar bg-body-tertiary", "data-bs-theme": "dark",
            div { class: "container-fluid",
                Link { class: "navbar-brand", to: Route::DeckList {}, "Flash Learn" }
                Link { class: "btn btn-primary", to: Route::DeckCreate {}, "New Deck" }
            }
        }
    }
}
