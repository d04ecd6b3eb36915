//! Inventory events and the helpers that publish them.
use aibos_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{StockItem, StockMovePosted};
use crate::MODULE_ID;

pub const STOCK_ITEM_CREATED: &str = "inventory.STOCK_ITEM_CREATED";
pub const STOCK_MOVED: &str = "inventory.STOCK_MOVED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItemCreatedPayload {
    pub id: String,
    pub item_code: String,
    pub name: String,
    pub qty_on_hand: f64,
    pub unit_cost: f64,
    pub created_at: String,
}

impl From<&StockItem> for StockItemCreatedPayload {
    fn from(item: &StockItem) -> Self {
        Self {
            id: item.id.clone(),
            item_code: item.draft.item_code.clone(),
            name: item.draft.name.clone(),
            qty_on_hand: item.draft.qty_on_hand,
            unit_cost: item.draft.unit_cost,
            created_at: item.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

/// A posted movement, carrying both the ledger view (before/after
/// quantities) and the valuation view (absolute quantity, direction and
/// unit cost) consumers need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovedPayload {
    pub id: String,
    pub company_id: String,
    pub item_code: String,
    pub qty_before: f64,
    pub qty_after: f64,
    pub qty: f64,
    pub direction: Direction,
    pub unit_cost: f64,
    pub reason: String,
    pub posting_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_doc: Option<String>,
}

impl StockMovedPayload {
    pub fn new(posted: &StockMovePosted, unit_cost: f64) -> Self {
        let draft = &posted.draft;
        Self {
            id: posted.id.clone(),
            company_id: draft.company_id.clone(),
            item_code: draft.item_code.clone(),
            qty_before: posted.qty_before,
            qty_after: posted.qty_after,
            qty: draft.qty_delta.abs(),
            direction: if draft.qty_delta < 0.0 { Direction::Out } else { Direction::In },
            unit_cost,
            reason: draft.reason.as_str().to_string(),
            posting_date: draft.posting_date.clone(),
            ref_doc: Some(draft.ref_id.clone().unwrap_or_else(|| posted.id.clone())),
        }
    }
}

pub fn emit_stock_item_created<L: EventLane>(
    lane: &L,
    item: &StockItem,
) -> Result<(), EventSystemError> {
    lane.emit_typed(MODULE_ID, STOCK_ITEM_CREATED, &StockItemCreatedPayload::from(item))
}

pub fn emit_stock_moved<L: EventLane>(
    lane: &L,
    payload: &StockMovedPayload,
) -> Result<(), EventSystemError> {
    lane.emit_typed(MODULE_ID, STOCK_MOVED, payload)
}
