//! Modal edit/delete state and the popup control bus.
//!
//! Every popup open takes a fresh [`Subscription`] from the [`PopupBus`]: one
//! handler on its confirm control and one on its cancel control. Whichever
//! fires first resolves the popup, and the owner then releases the pair so a
//! later popup never sees handlers from an earlier one. With no popup open
//! the bus is empty and pressing any control does nothing.

use super::render::CardId;
use dispensa_catalog::{EntityId, EntityKind};
use std::collections::HashMap;

/// Named popup controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SaveEdit,
    CloseEdit,
    ConfirmDelete,
    CancelDelete,
    ConfirmLogout,
    CancelLogout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Confirm,
    Cancel,
}

/// A live (confirm, cancel) handler pair.
///
/// Not `Clone`: the holder is the only one able to release it.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: SubscriptionId,
    confirm: Control,
    cancel: Control,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

#[derive(Debug, Default)]
pub struct PopupBus {
    next_id: u64,
    handlers: HashMap<Control, Vec<(SubscriptionId, Resolution)>>,
}

impl PopupBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, confirm: Control, cancel: Control) -> Subscription {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.handlers
            .entry(confirm)
            .or_default()
            .push((id, Resolution::Confirm));
        self.handlers
            .entry(cancel)
            .or_default()
            .push((id, Resolution::Cancel));
        Subscription {
            id,
            confirm,
            cancel,
        }
    }

    /// Detach both handlers of a subscription
    pub fn release(&mut self, subscription: Subscription) {
        for control in [subscription.confirm, subscription.cancel] {
            if let Some(list) = self.handlers.get_mut(&control) {
                list.retain(|(id, _)| *id != subscription.id);
                if list.is_empty() {
                    self.handlers.remove(&control);
                }
            }
        }
    }

    /// The newest live handler attached to a control, if any
    pub fn dispatch(&self, control: Control) -> Option<(SubscriptionId, Resolution)> {
        self.handlers
            .get(&control)
            .and_then(|list| list.last())
            .copied()
    }

    /// Total live handlers across all controls
    pub fn handler_count(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    pub fn listeners(&self, control: Control) -> usize {
        self.handlers.get(&control).map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Name,
    Amount,
}

impl EditField {
    /// Form field name for the given catalog
    pub fn field_name(&self, kind: EntityKind) -> &'static str {
        match self {
            Self::Name => kind.name_field(),
            Self::Amount => kind.amount_field(),
        }
    }
}

/// Edit popup inputs, pre-filled from the card being edited
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditForm {
    pub name: String,
    pub amount: String,
    pub focused: EditField,
    pub validation_error: Option<String>,
}

impl EditForm {
    pub fn new(name: impl Into<String>, amount: u32) -> Self {
        Self {
            name: name.into(),
            amount: amount.to_string(),
            ..Default::default()
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focused {
            EditField::Name => &mut self.name,
            EditField::Amount => &mut self.amount,
        }
    }

    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
        self.validation_error = None;
    }

    pub fn pop(&mut self) {
        self.focused_mut().pop();
        self.validation_error = None;
    }

    pub fn next_field(&mut self) {
        self.focused = match self.focused {
            EditField::Name => EditField::Amount,
            EditField::Amount => EditField::Name,
        };
    }

    /// Presence check: a non-empty name and a whole-number amount
    pub fn parse(&self) -> Result<(String, u32), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let amount = self
            .amount
            .trim()
            .parse::<u32>()
            .map_err(|_| "Amount must be a whole number".to_string())?;
        Ok((name.to_string(), amount))
    }
}

#[derive(Debug)]
pub struct EditSession {
    pub subscription: Subscription,
    pub card: CardId,
    pub entity_id: EntityId,
    pub original_name: String,
    pub form: EditForm,
}

#[derive(Debug)]
pub struct DeleteSession {
    pub subscription: Subscription,
    pub card: CardId,
    pub entity_id: EntityId,
    pub name: String,
}

#[derive(Debug, Default)]
pub enum Modal {
    #[default]
    Idle,
    Edit(EditSession),
    Delete(DeleteSession),
}

impl Modal {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        match self {
            Self::Idle => None,
            Self::Edit(session) => Some(&session.subscription),
            Self::Delete(session) => Some(&session.subscription),
        }
    }

    /// Take the modal, leaving `Idle` behind
    pub fn take(&mut self) -> Modal {
        std::mem::take(self)
    }

    /// Close whatever popup is open and release its handlers
    pub fn dismiss(&mut self, bus: &mut PopupBus) {
        match self.take() {
            Modal::Idle => {}
            Modal::Edit(session) => bus.release(session.subscription),
            Modal::Delete(session) => bus.release(session.subscription),
        }
    }
}
