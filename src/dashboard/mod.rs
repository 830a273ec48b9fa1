//! Headless inventory dashboard
//!
//! Loads the item collection once, filters it locally and pushes create and
//! edit requests to the API. A failed request is logged and the pending
//! change is dropped; the local state is left as it was.

pub mod client;
pub mod state;

pub use client::{ClientError, ClientResult, InventoryClient};
pub use state::{
    matches_query, toggle_status, DashboardAction, DashboardState, EditSession, ItemDraft,
    StatusFlag, STATUS_NOTE,
};

use crate::models::UpdateItem;

pub struct Dashboard {
    client: InventoryClient,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(client: InventoryClient) -> Self {
        Self {
            client,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn client(&self) -> &InventoryClient {
        &self.client
    }

    /// Apply a local-only action (query, draft, edit session)
    pub fn dispatch(&mut self, action: DashboardAction) {
        self.state.apply(action);
    }

    pub fn draft_mut(&mut self) -> &mut ItemDraft {
        self.state.draft_mut()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditSession> {
        self.state.editing_mut()
    }

    /// Fetch the full collection. Returns whether the state changed.
    pub async fn load(&mut self) -> bool {
        match self.client.list_items().await {
            Ok(items) => {
                self.state.apply(DashboardAction::Loaded(items));
                true
            }
            Err(e) => {
                tracing::warn!("Error fetching items: {}", e);
                false
            }
        }
    }

    /// Post the draft, append the stored item and reset the form
    pub async fn submit_draft(&mut self) -> bool {
        let request = self.state.draft().to_request();
        match self.client.create_item(&request).await {
            Ok(item) => {
                self.state.apply(DashboardAction::Created(item));
                self.state.apply(DashboardAction::ResetDraft);
                true
            }
            Err(e) => {
                tracing::warn!("Error creating item: {}", e);
                false
            }
        }
    }

    /// Send the edit session as a replace-update and close it on success
    pub async fn save_edit(&mut self) -> bool {
        let Some(session) = self.state.editing() else {
            return false;
        };
        let id = session.item.id;
        let request = UpdateItem::from(&session.item);

        match self.client.replace_item(id, &request).await {
            Ok(item) => {
                self.state.apply(DashboardAction::Updated(item));
                self.state.apply(DashboardAction::CancelEdit);
                true
            }
            Err(e) => {
                tracing::warn!("Error updating item {}: {}", id, e);
                false
            }
        }
    }

    /// Flip a status flag on an item and persist it immediately
    pub async fn toggle_status(&mut self, id: i32, flag: StatusFlag) -> bool {
        let Some(item) = self.state.item(id) else {
            return false;
        };
        let next = toggle_status(item, flag);

        match self.client.replace_item(id, &UpdateItem::from(&next)).await {
            Ok(item) => {
                self.state.apply(DashboardAction::Updated(item));
                true
            }
            Err(e) => {
                tracing::warn!("Error updating status of item {}: {}", id, e);
                false
            }
        }
    }

    /// Add `delta` to an item's quantity on the server and splice the result
    pub async fn adjust_quantity(&mut self, id: i32, delta: i32) -> bool {
        match self.client.adjust_quantity(id, delta).await {
            Ok(adjusted) => {
                self.state.apply(DashboardAction::Updated(adjusted.item));
                true
            }
            Err(e) => {
                tracing::warn!("Error updating quantity of item {}: {}", id, e);
                false
            }
        }
    }
}
