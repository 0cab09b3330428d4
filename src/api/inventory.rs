//! Inventory Endpoints

use serde::Serialize;

use crate::models::{InventoryItem, InventoryStatus};

#[derive(Serialize)]
pub struct NewInventoryItem<'a> {
    pub event_id: &'a str,
    pub name: &'a str,
    pub quantity: i64,
    pub status: InventoryStatus,
}

#[derive(Serialize)]
pub struct InventoryItemPatch<'a> {
    pub name: &'a str,
    pub quantity: i64,
    pub status: InventoryStatus,
}

pub async fn list_inventory(event_id: &str) -> Result<Vec<InventoryItem>, String> {
    super::get_list(&format!("inventory_items?event_id=eq.{}&order=name.asc", event_id)).await
}

pub async fn create_inventory_item(item: &NewInventoryItem<'_>) -> Result<InventoryItem, String> {
    super::insert_one("inventory_items", item).await
}

pub async fn update_inventory_item(
    id: &str,
    patch: &InventoryItemPatch<'_>,
) -> Result<InventoryItem, String> {
    super::update_one("inventory_items", id, patch).await
}

pub async fn delete_inventory_item(id: &str) -> Result<(), String> {
    super::delete_row("inventory_items", id).await
}
