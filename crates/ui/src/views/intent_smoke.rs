use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use api::{ApiError, DeckGateway, InMemoryDeckGateway};
use flashdeck_core::model::{CardDraft, Deck, DeckDraft, DeckId, DeckSummary};
use flashdeck_core::time::fixed_clock;

use super::card_form::CardFormTestHandles;
use super::deck_form::DeckFormTestHandles;
use super::test_harness::{ViewKind, drive_dom, setup_view_harness_with_gateway};

fn set_deck_fields(handles: &DeckFormTestHandles, name: &str, description: &str) {
    let mut name_signal = handles.name();
    let mut description_signal = handles.description();
    name_signal.set(name.to_string());
    description_signal.set(description.to_string());
}

fn set_card_fields(handles: &CardFormTestHandles, front: &str, back: &str, source: &str) {
    let mut front_signal = handles.front();
    let mut back_signal = handles.back();
    let mut source_signal = handles.source();
    front_signal.set(front.to_string());
    back_signal.set(back.to_string());
    source_signal.set(source.to_string());
}

#[tokio::test(flavor = "current_thread")]
async fn deck_create_intent_persists_and_notifies() {
    let mem = InMemoryDeckGateway::new(fixed_clock());
    let mut harness =
        setup_view_harness_with_gateway(ViewKind::DeckCreate, Arc::new(mem.clone()));
    harness.rebuild();

    let handles = harness.form_handles.clone().expect("form handles");
    set_deck_fields(&handles, "Biology", "Cells and organisms");
    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let decks = mem.list_decks().await.expect("list decks");
    assert_eq!(decks.len(), 1);
    assert_eq!(decks[0].name(), "Biology");
    assert_eq!(decks[0].description(), "Cells and organisms");

    let html = harness.render();
    assert!(html.contains("Deck created successfully"), "missing toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_create_intent_surfaces_name_conflict() {
    let mem = InMemoryDeckGateway::new(fixed_clock());
    mem.create_deck(&DeckDraft::new("Biology", ""))
        .await
        .expect("create deck");

    let mut harness =
        setup_view_harness_with_gateway(ViewKind::DeckCreate, Arc::new(mem.clone()));
    harness.rebuild();

    let handles = harness.form_handles.clone().expect("form handles");
    set_deck_fields(&handles, "Biology", "A duplicate");
    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("A deck with that name already exists"),
        "missing conflict message in {html}"
    );
    let decks = mem.list_decks().await.expect("list decks");
    assert_eq!(decks.len(), 1, "conflicting submit must not create a deck");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_create_intent_rejects_whitespace_name() {
    let mem = InMemoryDeckGateway::new(fixed_clock());
    let mut harness =
        setup_view_harness_with_gateway(ViewKind::DeckCreate, Arc::new(mem.clone()));
    harness.rebuild();

    let handles = harness.form_handles.clone().expect("form handles");
    set_deck_fields(&handles, "   ", "Cells and organisms");
    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("Name cannot be empty."),
        "missing validation message in {html}"
    );
    let decks = mem.list_decks().await.expect("list decks");
    assert!(decks.is_empty(), "whitespace name must not create a deck");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_edit_intent_updates_deck() {
    let mem = InMemoryDeckGateway::new(fixed_clock());
    let deck_id = mem
        .create_deck(&DeckDraft::new("Biology", "First year"))
        .await
        .expect("create deck");

    let mut harness = setup_view_harness_with_gateway(
        ViewKind::DeckEdit(deck_id.value()),
        Arc::new(mem.clone()),
    );
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness.form_handles.clone().expect("form handles");
    set_deck_fields(&handles, "Advanced Biology", "Second year");
    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let deck = mem.get_deck(deck_id).await.expect("get deck");
    assert_eq!(deck.name(), "Advanced Biology");
    assert_eq!(deck.description(), "Second year");

    let html = harness.render();
    assert!(html.contains("Deck updated successfully"), "missing toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_edit_intent_surfaces_name_conflict() {
    let mem = InMemoryDeckGateway::new(fixed_clock());
    mem.create_deck(&DeckDraft::new("Biology", ""))
        .await
        .expect("create deck");
    let second_id = mem
        .create_deck(&DeckDraft::new("Chemistry", ""))
        .await
        .expect("create deck");

    let mut harness = setup_view_harness_with_gateway(
        ViewKind::DeckEdit(second_id.value()),
        Arc::new(mem.clone()),
    );
    harness.rebuild();
    harness.drive_async().await;

    let handles = harness.form_handles.clone().expect("form handles");
    set_deck_fields(&handles, "Biology", "");
    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("A deck with that name already exists"),
        "missing conflict message in {html}"
    );
    let deck = mem.get_deck(second_id).await.expect("get deck");
    assert_eq!(deck.name(), "Chemistry", "conflicting submit must not rename");
}

#[tokio::test(flavor = "current_thread")]
async fn card_create_intent_stores_card_and_resets_fields() {
    let mem = InMemoryDeckGateway::new(fixed_clock());
    let deck_id = mem
        .create_deck(&DeckDraft::new("Geography", ""))
        .await
        .expect("create deck");

    let mut harness = setup_view_harness_with_gateway(
        ViewKind::CardNew(deck_id.value()),
        Arc::new(mem.clone()),
    );
    harness.rebuild();

    let handles = harness.card_handles.clone().expect("card handles");
    set_card_fields(
        &handles,
        "What is the capital of France?",
        "Paris",
        "http://source.com",
    );
    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let cards = mem.cards(deck_id).expect("cards");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].front(), "What is the capital of France?");
    assert_eq!(cards[0].back(), "Paris");
    assert_eq!(cards[0].source(), "http://source.com");

    assert_eq!(handles.front()(), "", "front must reset after submit");
    assert_eq!(handles.back()(), "", "back must reset after submit");
    assert_eq!(handles.source()(), "", "source must reset after submit");

    let html = harness.render();
    assert!(html.contains("Card created successfully"), "missing toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn card_create_intent_rejects_blank_front() {
    let mem = InMemoryDeckGateway::new(fixed_clock());
    let deck_id = mem
        .create_deck(&DeckDraft::new("Geography", ""))
        .await
        .expect("create deck");

    let mut harness = setup_view_harness_with_gateway(
        ViewKind::CardNew(deck_id.value()),
        Arc::new(mem.clone()),
    );
    harness.rebuild();

    let handles = harness.card_handles.clone().expect("card handles");
    set_card_fields(&handles, "   ", "Paris", "");
    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("Front cannot be empty."),
        "missing validation message in {html}"
    );
    let cards = mem.cards(deck_id).expect("cards");
    assert!(cards.is_empty(), "blank front must not store a card");
}

#[tokio::test(flavor = "current_thread")]
async fn delete_deck_intent_removes_deck_and_notifies() {
    let mem = InMemoryDeckGateway::new(fixed_clock());
    let deck_id = mem
        .create_deck(&DeckDraft::new("Biology", ""))
        .await
        .expect("create deck");

    let mut harness = setup_view_harness_with_gateway(
        ViewKind::DeleteDeck(deck_id.value()),
        Arc::new(mem.clone()),
    );
    harness.rebuild();

    let handles = harness.delete_handles.clone().expect("delete handles");
    handles.delete().call(());
    drive_dom(&mut harness.dom);

    let decks = mem.list_decks().await.expect("list decks");
    assert!(decks.is_empty(), "deck must be gone after confirm");

    let html = harness.render();
    assert!(html.contains("Deck deleted successfully"), "missing toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn delete_deck_intent_surfaces_failure() {
    let mem = InMemoryDeckGateway::new(fixed_clock());

    // No deck with this id, so the confirm hits the missing-deck rejection.
    let mut harness =
        setup_view_harness_with_gateway(ViewKind::DeleteDeck(7), Arc::new(mem.clone()));
    harness.rebuild();

    let handles = harness.delete_handles.clone().expect("delete handles");
    handles.delete().call(());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Error deleting deck:"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn delete_deck_intent_cancel_issues_no_request() {
    let counting = Arc::new(CountingGateway {
        inner: InMemoryDeckGateway::new(fixed_clock()),
        deletes: AtomicUsize::new(0),
    });
    let deck_id = counting
        .inner
        .create_deck(&DeckDraft::new("Biology", ""))
        .await
        .expect("create deck");

    let mut harness = setup_view_harness_with_gateway(
        ViewKind::DeleteDeck(deck_id.value()),
        counting.clone(),
    );
    harness.rebuild();

    let handles = harness.delete_handles.clone().expect("delete handles");
    handles.cancel().call(());
    drive_dom(&mut harness.dom);

    assert_eq!(counting.deletes(), 0, "cancel must not issue a delete");
    let decks = counting.inner.list_decks().await.expect("list decks");
    assert_eq!(decks.len(), 1, "deck must survive a cancel");
}

#[tokio::test(flavor = "current_thread")]
async fn delete_deck_intent_double_confirm_sends_one_request() {
    let counting = Arc::new(CountingGateway {
        inner: InMemoryDeckGateway::new(fixed_clock()),
        deletes: AtomicUsize::new(0),
    });
    let deck_id = counting
        .inner
        .create_deck(&DeckDraft::new("Biology", ""))
        .await
        .expect("create deck");

    let mut harness = setup_view_harness_with_gateway(
        ViewKind::DeleteDeck(deck_id.value()),
        counting.clone(),
    );
    harness.rebuild();

    let handles = harness.delete_handles.clone().expect("delete handles");
    handles.delete().call(());
    handles.delete().call(());
    drive_dom(&mut harness.dom);

    assert_eq!(
        counting.deletes(),
        1,
        "repeat confirm must not issue a second delete"
    );
    let decks = counting.inner.list_decks().await.expect("list decks");
    assert!(decks.is_empty(), "deck must be gone after confirm");
}

struct CountingGateway {
    inner: InMemoryDeckGateway,
    deletes: AtomicUsize,
}

impl CountingGateway {
    fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DeckGateway for CountingGateway {
    async fn list_decks(&self) -> Result<Vec<DeckSummary>, ApiError> {
        self.inner.list_decks().await
    }

    async fn get_deck(&self, id: DeckId) -> Result<Deck, ApiError> {
        self.inner.get_deck(id).await
    }

    async fn create_deck(&self, draft: &DeckDraft) -> Result<DeckId, ApiError> {
        self.inner.create_deck(draft).await
    }

    async fn update_deck(&self, id: DeckId, draft: &DeckDraft) -> Result<DeckId, ApiError> {
        self.inner.update_deck(id, draft).await
    }

    async fn delete_deck(&self, id: DeckId) -> Result<(), ApiError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_deck(id).await
    }

    async fn name_max_length(&self) -> Result<u32, ApiError> {
        self.inner.name_max_length().await
    }

    async fn description_max_length(&self) -> Result<u32, ApiError> {
        self.inner.description_max_length().await
    }

    async fn create_card(&self, deck_id: DeckId, draft: &CardDraft) -> Result<(), ApiError> {
        self.inner.create_card(deck_id, draft).await
    }
}
