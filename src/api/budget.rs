//! Budget Endpoints

use serde::Serialize;

use crate::models::BudgetItem;

#[derive(Serialize)]
pub struct NewBudgetItem<'a> {
    pub event_id: &'a str,
    pub description: &'a str,
    pub estimated_cost: f64,
    pub actual_cost: f64,
    pub category: &'a str,
}

#[derive(Serialize)]
pub struct BudgetItemPatch<'a> {
    pub description: &'a str,
    pub estimated_cost: f64,
    pub actual_cost: f64,
    pub category: &'a str,
}

pub async fn list_budget_items(event_id: &str) -> Result<Vec<BudgetItem>, String> {
    super::get_list(&format!("budget_items?event_id=eq.{}", event_id)).await
}

pub async fn create_budget_item(item: &NewBudgetItem<'_>) -> Result<BudgetItem, String> {
    super::insert_one("budget_items", item).await
}

pub async fn update_budget_item(id: &str, patch: &BudgetItemPatch<'_>) -> Result<BudgetItem, String> {
    super::update_one("budget_items", id, patch).await
}

pub async fn delete_budget_item(id: &str) -> Result<(), String> {
    super::delete_row("budget_items", id).await
}
