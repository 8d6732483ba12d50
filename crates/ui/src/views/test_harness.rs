use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use api::{DeckGateway, InMemoryDeckGateway};
use flashdeck_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::notify::{NoticeHost, Notices};
use crate::views::card_form::CardFormTestHandles;
use crate::views::deck_form::DeckFormTestHandles;
use crate::views::delete_deck::DeleteDeckTestHandles;
use crate::views::{
    CardFormView, DeckCreateView, DeckDetailView, DeckEditView, DeckListView, DeleteDeckView,
};

#[derive(Clone)]
struct TestApp {
    gateway: Arc<dyn DeckGateway>,
}

impl UiApp for TestApp {
    fn deck_gateway(&self) -> Arc<dyn DeckGateway> {
        Arc::clone(&self.gateway)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    DeckList,
    DeckDetail(u64),
    DeckCreate,
    DeckEdit(u64),
    DeleteDeck(u64),
    CardNew(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    form_handles: Option<DeckFormTestHandles>,
    card_handles: Option<CardFormTestHandles>,
    delete_handles: Option<DeleteDeckTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(Notices::new);
    use_context_provider(|| props.view);
    if let Some(handles) = props.form_handles.clone() {
        use_context_provider(|| handles);
    }
    if let Some(handles) = props.card_handles.clone() {
        use_context_provider(|| handles);
    }
    if let Some(handles) = props.delete_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let body = match view {
        ViewKind::DeckList => rsx! { DeckListView {} },
        ViewKind::DeckDetail(deck_id) => rsx! { DeckDetailView { deck_id } },
        ViewKind::DeckCreate => rsx! { DeckCreateView {} },
        ViewKind::DeckEdit(deck_id) => rsx! { DeckEditView { deck_id } },
        ViewKind::DeleteDeck(deck_id) => rsx! { DeleteDeckView { deck_id } },
        ViewKind::CardNew(deck_id) => rsx! { CardFormView { deck_id } },
    };
    rsx! {
        {body}
        NoticeHost {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub gateway: Arc<dyn DeckGateway>,
    pub form_handles: Option<DeckFormTestHandles>,
    pub card_handles: Option<CardFormTestHandles>,
    pub delete_handles: Option<DeleteDeckTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let gateway: Arc<dyn DeckGateway> = Arc::new(InMemoryDeckGateway::new(fixed_clock()));
    setup_view_harness_with_gateway(view, gateway)
}

pub fn setup_view_harness_with_gateway(
    view: ViewKind,
    gateway: Arc<dyn DeckGateway>,
) -> ViewHarness {
    let form_handles = match view {
        ViewKind::DeckCreate | ViewKind::DeckEdit(_) => Some(DeckFormTestHandles::default()),
        _ => None,
    };
    let card_handles = match view {
        ViewKind::CardNew(_) => Some(CardFormTestHandles::default()),
        _ => None,
    };
    let delete_handles = match view {
        ViewKind::DeleteDeck(_) => Some(DeleteDeckTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        gateway: Arc::clone(&gateway),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            form_handles: form_handles.clone(),
            card_handles: card_handles.clone(),
            delete_handles: delete_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        gateway,
        form_handles,
        card_handles,
        delete_handles,
    }
}
