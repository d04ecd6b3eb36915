use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockItemType {
    RawMaterial,
    Wip,
    FinishedGoods,
    TradingStock,
    Consumable,
    Service,
}

/// A stock item as submitted for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItemDraft {
    pub item_code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: StockItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub uom: String,
    pub qty_on_hand: f64,
    pub unit_cost: f64,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: String,
    pub created_at: String,
    #[serde(flatten)]
    pub draft: StockItemDraft,
}

impl StockItem {
    pub fn item_code(&self) -> &str {
        &self.draft.item_code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockMoveReason {
    Purchase,
    Sale,
    Adjustment,
    Transfer,
    Waste,
    Opening,
}

impl StockMoveReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StockMoveReason::Purchase => "purchase",
            StockMoveReason::Sale => "sale",
            StockMoveReason::Adjustment => "adjustment",
            StockMoveReason::Transfer => "transfer",
            StockMoveReason::Waste => "waste",
            StockMoveReason::Opening => "opening",
        }
    }
}

/// A stock movement as submitted. Positive deltas are receipts, negative
/// deltas are issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMoveDraft {
    pub company_id: String,
    pub item_code: String,
    pub qty_delta: f64,
    pub reason: StockMoveReason,
    pub posting_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_negative: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveStatus {
    Posted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovePosted {
    pub id: String,
    pub qty_before: f64,
    pub qty_after: f64,
    pub status: MoveStatus,
    #[serde(flatten)]
    pub draft: StockMoveDraft,
}
