//! Dashboard view state and the actions that change it

use crate::models::{CreateItem, Item};

/// Note written when an item is flagged missing or damaged
pub const STATUS_NOTE: &str = "Updated status";

/// Mutually exclusive status flags on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Missing,
    Damaged,
}

fn clamp_quantity(quantity: i32) -> i32 {
    quantity.max(0)
}

/// Form contents for a new item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub barcode: String,
    quantity: i32,
    pub photo_url: String,
    pub missing: bool,
    pub damaged: bool,
    pub notes: String,
}

impl ItemDraft {
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Negative input is stored as zero
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = clamp_quantity(quantity);
    }

    pub fn to_request(&self) -> CreateItem {
        CreateItem {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            barcode: Some(self.barcode.clone()),
            quantity: Some(self.quantity),
            photo_url: Some(self.photo_url.clone()),
            missing: Some(self.missing),
            damaged: Some(self.damaged),
            notes: Some(self.notes.clone()),
        }
    }
}

/// Inline editable copy of an existing item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub item: Item,
}

impl EditSession {
    pub fn from_item(item: &Item) -> Self {
        Self { item: item.clone() }
    }

    /// Negative input is stored as zero
    pub fn set_quantity(&mut self, quantity: i32) {
        self.item.quantity = clamp_quantity(quantity);
    }
}

/// Every change to [`DashboardState`] goes through one of these
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Initial collection fetched from the server
    Loaded(Vec<Item>),
    /// Server accepted a new item
    Created(Item),
    /// Server returned the stored version of an existing item
    Updated(Item),
    SetQuery(String),
    BeginEdit(i32),
    CancelEdit,
    ResetDraft,
}

/// Case-insensitive substring match on name, description, barcode and notes
pub fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [
        Some(item.name.as_str()),
        item.description.as_deref(),
        item.barcode.as_deref(),
        Some(item.notes.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Flip one status flag, clearing the other and rewriting the notes
pub fn toggle_status(item: &Item, flag: StatusFlag) -> Item {
    let mut next = item.clone();
    let enabled = match flag {
        StatusFlag::Missing => !item.missing,
        StatusFlag::Damaged => !item.damaged,
    };
    match flag {
        StatusFlag::Missing => {
            next.missing = enabled;
            next.damaged = false;
        }
        StatusFlag::Damaged => {
            next.damaged = enabled;
            next.missing = false;
        }
    }
    next.notes = if enabled {
        STATUS_NOTE.to_string()
    } else {
        String::new()
    };
    next
}

/// Client-side view of the inventory
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    items: Vec<Item>,
    query: String,
    draft: ItemDraft,
    editing: Option<EditSession>,
}

impl DashboardState {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Loaded(items) => self.items = items,
            DashboardAction::Created(item) => self.items.push(item),
            DashboardAction::Updated(item) => {
                if let Some(slot) = self.items.iter_mut().find(|existing| existing.id == item.id) {
                    *slot = item;
                }
            }
            DashboardAction::SetQuery(query) => self.query = query,
            DashboardAction::BeginEdit(id) => {
                self.editing = self.item(id).map(EditSession::from_item);
            }
            DashboardAction::CancelEdit => self.editing = None,
            DashboardAction::ResetDraft => self.draft = ItemDraft::default(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: i32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Items matching the current query, recomputed from the full set
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| matches_query(item, &self.query))
            .collect()
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ItemDraft {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditSession> {
        self.editing.as_mut()
    }
}
