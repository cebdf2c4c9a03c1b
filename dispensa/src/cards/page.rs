//! One catalog screen's worth of card workflow.
//!
//! A [`CatalogPage`] owns the store for one entity type together with the raw
//! filter inputs, the rendered container, the binder and the popup bus. The
//! category and product screens are two instances of the same page.

use super::binder::{CardAction, InteractionBinder};
use super::images::CardImages;
use super::render::{render, AffordanceId, Card, CardContainer};
use super::workflow::{
    Control, DeleteSession, EditForm, EditSession, Modal, PopupBus, Resolution,
};
use dispensa_catalog::{filter, CatalogEntity, CatalogStore, EntityKind, FilterCriteria};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Name,
    Quantity,
    Category,
}

impl FilterField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Quantity => "Quantity",
            Self::Category => "Category",
        }
    }
}

/// Raw filter bar text, kept exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    pub active: bool,
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub focused: FilterField,
}

impl FilterInput {
    /// Fields shown in the filter bar for a catalog
    pub fn fields(kind: EntityKind) -> &'static [FilterField] {
        match kind {
            EntityKind::Category => &[FilterField::Name],
            EntityKind::Product => &[
                FilterField::Name,
                FilterField::Quantity,
                FilterField::Category,
            ],
        }
    }

    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Quantity => &self.quantity,
            FilterField::Category => &self.category,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focused {
            FilterField::Name => &mut self.name,
            FilterField::Quantity => &mut self.quantity,
            FilterField::Category => &mut self.category,
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_raw(&self.name, &self.quantity, &self.category)
    }

    pub fn has_text(&self) -> bool {
        !(self.name.is_empty() && self.quantity.is_empty() && self.category.is_empty())
    }
}

/// What a popup resolution did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Edited { from: String, to: String },
    Deleted { name: String },
    /// Save was pressed with a form that failed the presence check
    Rejected { message: String },
    Dismissed,
}

#[derive(Debug)]
pub struct CatalogPage<E: CatalogEntity> {
    store: CatalogStore<E>,
    filter: FilterInput,
    container: CardContainer,
    binder: InteractionBinder,
    bus: PopupBus,
    modal: Modal,
    selected: usize,
    images: CardImages,
}

impl<E: CatalogEntity> CatalogPage<E> {
    pub fn new(images: CardImages) -> Self {
        Self {
            store: CatalogStore::default(),
            filter: FilterInput::default(),
            container: CardContainer::new(),
            binder: InteractionBinder::new(),
            bus: PopupBus::new(),
            modal: Modal::Idle,
            selected: 0,
            images,
        }
    }

    /// Replace the store with freshly seeded entities and render them
    pub fn load(&mut self, seed: impl IntoIterator<Item = E>) {
        self.modal.dismiss(&mut self.bus);
        self.store = CatalogStore::initialize(seed);
        self.selected = 0;
        self.refresh();
    }

    pub fn store(&self) -> &CatalogStore<E> {
        &self.store
    }

    pub fn bus(&self) -> &PopupBus {
        &self.bus
    }

    pub fn binder(&self) -> &InteractionBinder {
        &self.binder
    }

    /// Re-filter the store and regenerate the cards and their bindings
    pub fn refresh(&mut self) {
        let criteria = self.filter.criteria();
        let visible = filter(self.store.list(), &criteria);
        render(&mut self.container, &visible);
        self.container.load_images(&self.images);
        self.binder.bind(&self.container);
        self.clamp_selection();
    }

    /// Set all raw filter inputs at once and re-render
    pub fn apply_filter(&mut self, name: &str, quantity: &str, category: &str) {
        self.filter.name = name.to_string();
        self.filter.quantity = quantity.to_string();
        self.filter.category = category.to_string();
        self.refresh();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.container.len().saturating_sub(1));
    }

    fn open_edit(&mut self, card: Card) {
        let subscription = self.bus.subscribe(Control::SaveEdit, Control::CloseEdit);
        tracing::debug!("Opened edit popup for {} {}", E::KIND.noun(), card.title);
        self.modal = Modal::Edit(EditSession {
            subscription,
            card: card.id,
            entity_id: card.entity_id,
            form: EditForm::new(card.title.clone(), card.amount),
            original_name: card.title,
        });
    }

    fn open_delete(&mut self, card: Card) {
        let subscription = self
            .bus
            .subscribe(Control::ConfirmDelete, Control::CancelDelete);
        tracing::debug!("Opened delete popup for {} {}", E::KIND.noun(), card.title);
        self.modal = Modal::Delete(DeleteSession {
            subscription,
            card: card.id,
            entity_id: card.entity_id,
            name: card.title,
        });
    }

    fn save_edit(&mut self, mut session: EditSession) -> PageOutcome {
        let (name, amount) = match session.form.parse() {
            Ok(parsed) => parsed,
            Err(message) => {
                session.form.validation_error = Some(message.clone());
                self.modal = Modal::Edit(session);
                return PageOutcome::Rejected { message };
            }
        };

        let patch = E::edit_patch(name.clone(), amount);
        if !self.store.update(&session.entity_id, patch) {
            tracing::debug!(
                "{} {} no longer in store, edit ignored",
                E::KIND.noun(),
                session.original_name
            );
        }

        if E::KIND.rerenders_on_edit() {
            self.refresh();
        } else {
            self.container.patch_card(session.card, &name, amount);
        }
        self.bus.release(session.subscription);

        tracing::info!(
            "Edited {} {} -> {} ({})",
            E::KIND.noun(),
            session.original_name,
            name,
            E::KIND.secondary_text(amount)
        );
        PageOutcome::Edited {
            from: session.original_name,
            to: name,
        }
    }

    fn confirm_delete(&mut self, session: DeleteSession) -> PageOutcome {
        if self.store.remove(&session.entity_id).is_none() {
            tracing::debug!(
                "{} {} no longer in store, delete ignored",
                E::KIND.noun(),
                session.name
            );
        }
        self.container.remove_card(session.card);
        self.binder.unbind_card(session.card);
        self.bus.release(session.subscription);
        self.clamp_selection();

        tracing::info!("Deleted {} {}", E::KIND.noun(), session.name);
        PageOutcome::Deleted { name: session.name }
    }
}

/// Object-safe view of a [`CatalogPage`] used by the application layer
pub trait CardPage {
    fn kind(&self) -> EntityKind;
    fn container(&self) -> &CardContainer;
    fn modal(&self) -> &Modal;
    fn filter_input(&self) -> &FilterInput;
    fn selected_index(&self) -> usize;

    fn selected_card(&self) -> Option<&Card> {
        self.container().cards().get(self.selected_index())
    }

    fn select_next(&mut self);
    fn select_previous(&mut self);
    fn select_first(&mut self);
    fn select_last(&mut self);

    /// Fire a card affordance. Returns false when nothing is bound to it.
    fn trigger(&mut self, affordance: AffordanceId) -> bool;

    /// Press a popup control. `None` when no live handler is attached.
    fn press(&mut self, control: Control) -> Option<PageOutcome>;

    fn begin_filter(&mut self);
    fn end_filter(&mut self);
    fn push_filter_char(&mut self, c: char);
    fn pop_filter_char(&mut self);
    fn next_filter_field(&mut self);
    fn clear_filter(&mut self);
    fn set_category_filter(&mut self, category: Option<&str>);

    fn push_form_char(&mut self, c: char);
    fn pop_form_char(&mut self);
    fn next_form_field(&mut self);
}

impl<E: CatalogEntity> CardPage for CatalogPage<E> {
    fn kind(&self) -> EntityKind {
        E::KIND
    }

    fn container(&self) -> &CardContainer {
        &self.container
    }

    fn modal(&self) -> &Modal {
        &self.modal
    }

    fn filter_input(&self) -> &FilterInput {
        &self.filter
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.container.len() {
            self.selected += 1;
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_first(&mut self) {
        self.selected = 0;
    }

    fn select_last(&mut self) {
        self.selected = self.container.len().saturating_sub(1);
    }

    fn trigger(&mut self, affordance: AffordanceId) -> bool {
        let Some(binding) = self.binder.resolve(affordance) else {
            tracing::debug!("No binding for affordance {:?}", affordance);
            return false;
        };
        let Some(card) = self.container.card(binding.card).cloned() else {
            return false;
        };

        // A popup already open loses its handlers before the new pair attaches
        self.modal.dismiss(&mut self.bus);
        match binding.action {
            CardAction::Edit => self.open_edit(card),
            CardAction::Delete => self.open_delete(card),
        }
        true
    }

    fn press(&mut self, control: Control) -> Option<PageOutcome> {
        let (subscription, resolution) = self.bus.dispatch(control)?;
        if self.modal.subscription().map(|s| s.id()) != Some(subscription) {
            return None;
        }

        let outcome = match (self.modal.take(), resolution) {
            (Modal::Edit(session), Resolution::Confirm) => self.save_edit(session),
            (Modal::Delete(session), Resolution::Confirm) => self.confirm_delete(session),
            (Modal::Edit(session), Resolution::Cancel) => {
                self.bus.release(session.subscription);
                PageOutcome::Dismissed
            }
            (Modal::Delete(session), Resolution::Cancel) => {
                self.bus.release(session.subscription);
                PageOutcome::Dismissed
            }
            (Modal::Idle, _) => return None,
        };
        Some(outcome)
    }

    fn begin_filter(&mut self) {
        self.filter.active = true;
        self.filter.focused = FilterField::Name;
    }

    fn end_filter(&mut self) {
        self.filter.active = false;
    }

    fn push_filter_char(&mut self, c: char) {
        self.filter.focused_mut().push(c);
        self.refresh();
    }

    fn pop_filter_char(&mut self) {
        self.filter.focused_mut().pop();
        self.refresh();
    }

    fn next_filter_field(&mut self) {
        let fields = FilterInput::fields(E::KIND);
        let idx = fields
            .iter()
            .position(|f| *f == self.filter.focused)
            .unwrap_or(0);
        self.filter.focused = fields[(idx + 1) % fields.len()];
    }

    fn clear_filter(&mut self) {
        self.filter = FilterInput::default();
        self.refresh();
    }

    fn set_category_filter(&mut self, category: Option<&str>) {
        self.filter.category = category.unwrap_or_default().to_string();
        self.selected = 0;
        self.refresh();
    }

    fn push_form_char(&mut self, c: char) {
        if let Modal::Edit(session) = &mut self.modal {
            session.form.push(c);
        }
    }

    fn pop_form_char(&mut self) {
        if let Modal::Edit(session) = &mut self.modal {
            session.form.pop();
        }
    }

    fn next_form_field(&mut self) {
        if let Modal::Edit(session) = &mut self.modal {
            session.form.next_field();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::images::tests::KnownAssets;
    use dispensa_catalog::{CatalogSeed, Category, Product};
    use std::sync::Arc;

    fn images() -> CardImages {
        CardImages::new(Arc::new(KnownAssets::of(&["default.jpg"])), "default.jpg")
    }

    fn category_page() -> CatalogPage<Category> {
        let mut page = CatalogPage::new(images());
        page.load(CatalogSeed::embedded().unwrap().categories);
        page
    }

    fn product_page() -> CatalogPage<Product> {
        let mut page = CatalogPage::new(images());
        page.load(CatalogSeed::embedded().unwrap().products);
        page
    }

    fn titles(page: &dyn CardPage) -> Vec<String> {
        page.container()
            .cards()
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    fn card_named<'a>(page: &'a dyn CardPage, name: &str) -> &'a Card {
        page.container()
            .cards()
            .iter()
            .find(|c| c.title == name)
            .unwrap()
    }

    fn edit_form(page: &dyn CardPage) -> &EditForm {
        match page.modal() {
            Modal::Edit(session) => &session.form,
            other => panic!("Expected edit popup, got {:?}", other),
        }
    }

    #[test]
    fn test_load_renders_all_cards() {
        let page = category_page();
        assert_eq!(page.container().len(), 6);
        assert_eq!(page.binder().len(), 12);
        assert!(page.modal().is_idle());
    }

    #[test]
    fn test_search_pe_then_clear() {
        let mut page = category_page();

        page.begin_filter();
        page.push_filter_char('p');
        page.push_filter_char('e');
        assert_eq!(titles(&page), vec!["Pesce"]);

        page.pop_filter_char();
        page.pop_filter_char();
        assert_eq!(titles(&page).len(), 6);
    }

    #[test]
    fn test_edit_carne_count() {
        let mut page = category_page();
        let edit = card_named(&page, "Carne").edit;

        assert!(page.trigger(edit));
        assert_eq!(edit_form(&page), &EditForm::new("Carne", 12));

        page.next_form_field();
        page.pop_form_char();
        page.pop_form_char();
        page.push_form_char('7');
        let outcome = page.press(Control::SaveEdit);

        assert_eq!(
            outcome,
            Some(PageOutcome::Edited {
                from: "Carne".to_string(),
                to: "Carne".to_string(),
            })
        );
        let carne: Vec<_> = page
            .store()
            .list()
            .iter()
            .filter(|r| r.name == "Carne")
            .collect();
        assert_eq!(carne.len(), 1);
        assert_eq!(carne[0].product_count, 7);
        assert_eq!(page.store().len(), 6);
        assert_eq!(card_named(&page, "Carne").secondary(), "7 prodotti");
        assert!(page.modal().is_idle());
        assert_eq!(page.bus().handler_count(), 0);
    }

    #[test]
    fn test_category_edit_rerenders_through_filter() {
        let mut page = category_page();
        page.apply_filter("pe", "", "");
        let generation = page.container().generation();
        let edit = card_named(&page, "Pesce").edit;

        page.trigger(edit);
        for _ in 0.."Pesce".len() {
            page.pop_form_char();
        }
        for c in "Molluschi".chars() {
            page.push_form_char(c);
        }
        page.press(Control::SaveEdit);

        // Renamed entity no longer matches "pe"
        assert!(page.container().is_empty());
        assert!(page.container().generation() > generation);
        assert!(page.store().find_by_name("Molluschi").is_some());
        assert_eq!(page.binder().len(), 0);
    }

    #[test]
    fn test_product_edit_patches_card_in_place() {
        let mut page = product_page();
        page.apply_filter("kiwi", "", "");
        let generation = page.container().generation();
        let card = card_named(&page, "Kiwi").clone();

        page.trigger(card.edit);
        page.next_form_field();
        for _ in 0..4 {
            page.pop_form_char();
        }
        page.push_form_char('5');
        page.press(Control::SaveEdit);

        assert_eq!(page.container().generation(), generation);
        let patched = page.container().card(card.id).unwrap();
        assert_eq!(patched.secondary(), "Quantità: 5");
        assert_eq!(page.store().get(&card.entity_id).unwrap().quantity, 5);
        // Same binding still live since nothing re-rendered
        assert!(page.trigger(card.delete));
    }

    #[test]
    fn test_invalid_edit_keeps_popup_open() {
        let mut page = category_page();
        let before = page.store().clone();
        page.trigger(card_named(&page, "Igiene").edit);

        page.next_form_field();
        page.push_form_char('x');
        let outcome = page.press(Control::SaveEdit);

        assert_eq!(
            outcome,
            Some(PageOutcome::Rejected {
                message: "Amount must be a whole number".to_string()
            })
        );
        assert_eq!(
            edit_form(&page).validation_error.as_deref(),
            Some("Amount must be a whole number")
        );
        assert_eq!(page.store(), &before);
        assert_eq!(page.bus().handler_count(), 2);

        page.press(Control::CloseEdit);
        assert_eq!(page.bus().handler_count(), 0);
    }

    #[test]
    fn test_cancel_is_noop() {
        let mut page = category_page();
        let before = page.store().clone();

        page.trigger(card_named(&page, "Salumi & Formaggi").edit);
        page.push_form_char('!');
        assert_eq!(page.press(Control::CloseEdit), Some(PageOutcome::Dismissed));
        assert_eq!(page.store(), &before);

        page.trigger(card_named(&page, "Salumi & Formaggi").delete);
        assert_eq!(page.press(Control::CancelDelete), Some(PageOutcome::Dismissed));
        assert_eq!(page.store(), &before);
        assert_eq!(page.container().len(), 6);
        assert_eq!(page.bus().handler_count(), 0);
    }

    #[test]
    fn test_delete_igiene_preserves_order() {
        let mut page = category_page();
        page.trigger(card_named(&page, "Igiene").delete);

        let outcome = page.press(Control::ConfirmDelete);

        assert_eq!(
            outcome,
            Some(PageOutcome::Deleted {
                name: "Igiene".to_string()
            })
        );
        assert_eq!(
            page.store().names(),
            vec![
                "Carne",
                "Frutta & Verdure",
                "Pesce",
                "Salumi & Formaggi",
                "Uova & Latticini"
            ]
        );
        assert_eq!(titles(&page), page.store().names());
        assert_eq!(page.binder().len(), 10);
        assert_eq!(page.container().generation(), 1);
    }

    #[test]
    fn test_second_delete_replaces_first() {
        let mut page = category_page();
        page.trigger(card_named(&page, "Carne").delete);
        page.trigger(card_named(&page, "Pesce").delete);

        assert_eq!(page.bus().handler_count(), 2);
        page.press(Control::ConfirmDelete);

        assert!(page.store().find_by_name("Carne").is_some());
        assert!(page.store().find_by_name("Pesce").is_none());
        assert_eq!(page.store().len(), 5);
        assert_eq!(page.bus().handler_count(), 0);
    }

    #[test]
    fn test_controls_without_popup_do_nothing() {
        let mut page = category_page();
        let before = page.store().clone();

        for control in [
            Control::SaveEdit,
            Control::CloseEdit,
            Control::ConfirmDelete,
            Control::CancelDelete,
        ] {
            assert_eq!(page.press(control), None);
        }
        // A delete control does nothing while the edit popup is open
        page.trigger(card_named(&page, "Pesce").edit);
        assert_eq!(page.press(Control::ConfirmDelete), None);
        assert_eq!(page.store(), &before);
    }

    #[test]
    fn test_stale_affordance_after_filter_is_noop() {
        let mut page = category_page();
        let stale = card_named(&page, "Carne").delete;

        page.apply_filter("c", "", "");
        assert!(!page.trigger(stale));
        assert!(page.modal().is_idle());
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let mut page = category_page();
        page.select_last();
        let last = page.selected_card().unwrap().delete;

        page.trigger(last);
        page.press(Control::ConfirmDelete);

        assert_eq!(page.selected_index(), 4);
        assert_eq!(page.selected_card().unwrap().title, "Salumi & Formaggi");
    }

    #[test]
    fn test_category_filter_scopes_products() {
        let mut page = product_page();
        page.set_category_filter(Some("Pesce"));
        assert!(page
            .container()
            .cards()
            .iter()
            .all(|c| c.image.primary.starts_with("Pesce/")));

        page.set_category_filter(None);
        assert_eq!(page.container().len(), page.store().len());
    }

    #[test]
    fn test_filter_fields_cycle_per_kind() {
        let mut categories = category_page();
        categories.begin_filter();
        categories.next_filter_field();
        assert_eq!(categories.filter_input().focused, FilterField::Name);

        let mut products = product_page();
        products.begin_filter();
        products.next_filter_field();
        assert_eq!(products.filter_input().focused, FilterField::Quantity);
        products.push_filter_char('x');
        // Non-numeric quantity text does not empty the list
        assert_eq!(products.container().len(), products.store().len());
        products.next_filter_field();
        products.next_filter_field();
        assert_eq!(products.filter_input().focused, FilterField::Name);
    }

    #[test]
    fn test_missing_images_use_default() {
        let page = category_page();
        assert!(page
            .container()
            .cards()
            .iter()
            .all(|c| c.image.shown == "default.jpg" && c.image.is_fallback()));
    }
}
