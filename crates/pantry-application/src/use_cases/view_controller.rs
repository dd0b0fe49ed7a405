//! View-State Controller
//!
//! Owns the state a presentation layer renders: the full inventory snapshot,
//! the search query, the rows visible under that query, and the add-item
//! form. State only changes through the transitions below.
//!
//! | Transition | Store round-trip | Effect |
//! |------------|------------------|--------|
//! | `mount` / `refresh` | list | replace snapshot, recompute visible |
//! | `set_query` | none | recompute visible |
//! | `submit_new_item` | add + list | clear and close form, refresh |
//! | `increment` / `decrement` / `remove` | delta + list | refresh |
//!
//! A failed action is logged and returned as `Err`; snapshot, visible rows
//! and form keep their previous values. When the mutation itself succeeded
//! and only the follow-up refresh fails, the mutation's own effects (a
//! cleared form) stay and the snapshot is stale until the next refresh.

use crate::domain_services::filter_inventory;
use pantry_domain::entities::{Category, InventoryItem};
use pantry_domain::error::{Error, Result};
use pantry_domain::repositories::InventoryRepository;
use std::sync::Arc;
use tracing::{debug, error};

/// Draft values of the add-item form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddItemForm {
    /// Whether the form is shown
    pub open: bool,
    /// Item name being typed
    pub name: String,
    /// Selected category
    pub category: Option<Category>,
    /// Description being typed
    pub description: String,
}

/// Everything the presentation layer reads
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Full copy of the remote inventory as of the last refresh
    pub snapshot: Vec<InventoryItem>,
    /// Current search text
    pub query: String,
    /// `snapshot` filtered by `query`
    pub visible: Vec<InventoryItem>,
    /// Add-item form
    pub form: AddItemForm,
}

/// Controller driving [`ViewState`] from user actions
pub struct InventoryController {
    repository: Arc<dyn InventoryRepository>,
    state: ViewState,
}

impl InventoryController {
    /// Create a controller with an empty snapshot
    pub fn new(repository: Arc<dyn InventoryRepository>) -> Self {
        Self {
            repository,
            state: ViewState::default(),
        }
    }

    /// Current view state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Full inventory as of the last successful refresh
    pub fn snapshot(&self) -> &[InventoryItem] {
        &self.state.snapshot
    }

    /// Rows matching the current query
    pub fn visible(&self) -> &[InventoryItem] {
        &self.state.visible
    }

    /// Current search text
    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// Add-item form state
    pub fn form(&self) -> &AddItemForm {
        &self.state.form
    }

    /// Initial load
    pub async fn mount(&mut self) -> Result<()> {
        self.refresh().await
    }

    /// Re-list the whole collection and replace the snapshot
    pub async fn refresh(&mut self) -> Result<()> {
        let items = self
            .repository
            .list_inventory()
            .await
            .map_err(|e| report("refresh", None, e))?;

        debug!(items = items.len(), "Inventory snapshot refreshed");
        self.state.snapshot = items;
        self.recompute_visible();
        Ok(())
    }

    /// Change the search text; no store round-trip
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
        self.recompute_visible();
    }

    /// Show the add-item form
    pub fn open_add_form(&mut self) {
        self.state.form.open = true;
    }

    /// Hide the add-item form, keeping whatever was typed
    pub fn close_add_form(&mut self) {
        self.state.form.open = false;
    }

    /// Update the drafted name
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.state.form.name = name.into();
    }

    /// Update the drafted category
    pub fn set_draft_category(&mut self, category: Option<Category>) {
        self.state.form.category = category;
    }

    /// Update the drafted description
    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.state.form.description = description.into();
    }

    /// Submit the drafted values
    pub async fn submit_add_form(&mut self) -> Result<()> {
        let AddItemForm {
            name,
            category,
            description,
            ..
        } = self.state.form.clone();
        self.submit_new_item(&name, category, &description).await
    }

    /// Add an item (or bump its quantity), then clear the form and refresh
    pub async fn submit_new_item(
        &mut self,
        name: &str,
        category: Option<Category>,
        description: &str,
    ) -> Result<()> {
        self.repository
            .add_or_increment(name, category, description)
            .await
            .map_err(|e| report("add", Some(name), e))?;

        self.state.form = AddItemForm::default();
        self.refresh().await
    }

    /// Add one unit
    pub async fn increment(&mut self, name: &str) -> Result<()> {
        self.change_quantity("increment", name, 1).await
    }

    /// Take one unit away; the item disappears when none are left
    pub async fn decrement(&mut self, name: &str) -> Result<()> {
        self.change_quantity("decrement", name, -1).await
    }

    /// Remove the item entirely
    ///
    /// The delta is the quantity shown in the current snapshot. An item that
    /// is not in the snapshot has no row to remove, so nothing is sent.
    pub async fn remove(&mut self, name: &str) -> Result<()> {
        let Some(quantity) = self
            .state
            .snapshot
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.quantity)
        else {
            debug!(item = name, "Remove requested for item not in snapshot");
            return Ok(());
        };
        self.change_quantity("remove", name, -quantity).await
    }

    async fn change_quantity(&mut self, action: &str, name: &str, delta: i64) -> Result<()> {
        self.repository
            .apply_quantity_delta(name, delta)
            .await
            .map_err(|e| report(action, Some(name), e))?;
        self.refresh().await
    }

    fn recompute_visible(&mut self) {
        self.state.visible = filter_inventory(&self.state.snapshot, &self.state.query);
    }
}

fn report(action: &str, name: Option<&str>, e: Error) -> Error {
    error!(action, item = name.unwrap_or_default(), error = %e, "Inventory action failed");
    e
}
