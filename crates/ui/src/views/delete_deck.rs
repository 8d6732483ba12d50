use dioxus::prelude::*;
use dioxus_router::use_navigator;

use flashdeck_core::model::DeckId;

use crate::context::AppContext;
use crate::notify::Notices;
use crate::routes::Route;
use crate::views::DeleteState;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn DeleteDeckView(deck_id: u64) -> Element {
    let deck_id = DeckId::new(deck_id);
    let ctx = use_context::<AppContext>();
    let notices = use_context::<Notices>();
    let navigator = use_navigator();
    let gateway = ctx.deck_gateway();

    let delete_state = use_signal(|| DeleteState::Idle);

    let on_delete = {
        let gateway = gateway.clone();
        use_callback(move |()| {
            let mut delete_state = delete_state;
            if delete_state() == DeleteState::Deleting {
                return;
            }
            // Flips before the spawn so a repeat confirm in the same tick sees Deleting.
            delete_state.set(DeleteState::Deleting);

            let gateway = gateway.clone();
            spawn(async move {
                match gateway.delete_deck(deck_id).await {
                    Ok(()) => {
                        delete_state.set(DeleteState::Idle);
                        notices.success("Deck deleted successfully");
                        navigator.push(Route::DeckList {});
                    }
                    Err(err) => {
                        let message = format!("Error deleting deck: {err}");
                        notices.error(message.clone());
                        delete_state.set(DeleteState::Error(message));
                    }
                }
            });
        })
    };

    let on_cancel = use_callback(move |()| {
        navigator.go_back();
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DeleteDeckTestHandles>() {
                handles.register(on_delete, on_cancel);
            }
        }
    }

    rsx! {
        div { class: "card text-center m-4",
            h5 { class: "card-header text-bg-danger", "Warning" }
            div { class: "card-body",
                h5 { class: "card-title", "Are you sure you want to delete this deck?" }
                p { class: "card-text", "This action cannot be undone." }
                button {
                    class: "btn btn-danger m-2",
                    r#type: "button",
                    disabled: delete_state() == DeleteState::Deleting,
                    onclick: move |_| {
                        on_delete.call(());
                    },
                    "Delete"
                }
                button {
                    class: "btn btn-secondary m-2",
                    r#type: "button",
                    onclick: move |_| {
                        on_cancel.call(());
                    },
                    "Cancel"
                }
                if let DeleteState::Error(message) = delete_state() {
                    p { class: "text-danger", "{message}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DeleteDeckTestHandles {
    delete: Rc<RefCell<Option<Callback<()>>>>,
    cancel: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl DeleteDeckTestHandles {
    pub(crate) fn register(&self, delete: Callback<()>, cancel: Callback<()>) {
        *self.delete.borrow_mut() = Some(delete);
        *self.cancel.borrow_mut() = Some(cancel);
    }

    pub(crate) fn delete(&self) -> Callback<()> {
        self.delete.borrow().clone().expect("delete registered")
    }

    pub(crate) fn cancel(&self) -> Callback<()> {
        self.cancel.borrow().clone().expect("cancel registered")
    }
}
