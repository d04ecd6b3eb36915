use aibos_core::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::StockStore;
use crate::types::{MoveStatus, StockItem, StockItemDraft, StockItemType, StockMoveDraft};

pub const CREATE_STOCK_ITEM: &str = "inventory.createStockItem";
pub const GET_STOCK_ITEM_LIST: &str = "inventory.getStockItemList";
pub const CREATE_STOCK_MOVE: &str = "inventory.createStockMove";

/// `YYYY-MM-DD` with a real calendar date.
pub(crate) fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

impl Validate for StockItemDraft {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.check(!self.item_code.is_empty(), "itemCode", "itemCode required");
        issues.check(!self.name.is_empty(), "name", "name required");
        issues.check(!self.uom.is_empty(), "uom", "uom required");
        issues.check(self.qty_on_hand >= 0.0, "qtyOnHand", "qtyOnHand must be >= 0");
        issues.check(self.unit_cost >= 0.0, "unitCost", "unitCost must be >= 0");
        issues.into_vec()
    }
}

impl Validate for StockMoveDraft {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.non_empty(&self.company_id, "companyId");
        issues.non_empty(&self.item_code, "itemCode");
        issues.check(self.qty_delta != 0.0, "qtyDelta", "qtyDelta cannot be 0");
        issues.check(is_iso_date(&self.posting_date), "postingDate", "Invalid date, expected YYYY-MM-DD");
        issues.into_vec()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockItemOutput {
    pub id: String,
    pub created_at: String,
    pub item: StockItemDraft,
}

impl Validate for CreateStockItemOutput {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItemFilter {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<StockItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Validate for StockItemFilter {}

impl StockItemFilter {
    pub fn matches(&self, item: &StockItem) -> bool {
        let d = &item.draft;
        self.item_type.is_none_or(|t| d.item_type == t)
            && self.is_active.is_none_or(|a| d.is_active == a)
            && self
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .is_none_or(|c| d.category.as_deref() == Some(c))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItemList {
    pub items: Vec<StockItem>,
}

impl Validate for StockItemList {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockMoveOutput {
    pub id: String,
    pub item_code: String,
    pub qty_before: f64,
    pub qty_after: f64,
    pub status: MoveStatus,
}

impl Validate for CreateStockMoveOutput {}

pub fn create_stock_item(store: &StockStore) -> ServiceDef {
    // Uniqueness depends on the store, so the input schema checks it too.
    let lookup = store.clone();
    let input = validator_fn(move |raw| {
        let draft = TypedSchema::<StockItemDraft>::new().parse(raw)?;
        if lookup.contains(&draft.item_code) {
            return Err(ValidationError::single(
                "itemCode",
                format!("itemCode '{}' already exists", draft.item_code),
            ));
        }
        serde_json::to_value(&draft).map_err(|e| ValidationError::single("", e.to_string()))
    });

    let store = store.clone();
    ServiceDef::new(CREATE_STOCK_ITEM)
        .description("Creates a stock item in the in-memory ledger")
        .input_schema(input)
        .output_schema(schema::<CreateStockItemOutput>())
        .handler(typed_handler(move |draft: StockItemDraft| {
            let item = store
                .create_item(draft)
                .map_err(|e| ServiceError::handler(e.to_string()))?;
            Ok::<_, ServiceError>(CreateStockItemOutput {
                id: item.id,
                created_at: item.created_at,
                item: item.draft,
            })
        }))
}

pub fn get_stock_item_list(store: &StockStore) -> ServiceDef {
    let store = store.clone();
    ServiceDef::new(GET_STOCK_ITEM_LIST)
        .description("Returns stock items, optionally filtered by type, status and category")
        .input_schema(schema::<StockItemFilter>())
        .output_schema(schema::<StockItemList>())
        .handler(typed_handler(move |filter: StockItemFilter| {
            let items = store.items().into_iter().filter(|i| filter.matches(i)).collect();
            Ok::<_, ServiceError>(StockItemList { items })
        }))
}

pub fn create_stock_move(store: &StockStore) -> ServiceDef {
    let store = store.clone();
    ServiceDef::new(CREATE_STOCK_MOVE)
        .description("Posts a stock movement and updates qtyOnHand")
        .input_schema(schema::<StockMoveDraft>())
        .output_schema(schema::<CreateStockMoveOutput>())
        .handler(typed_handler(move |draft: StockMoveDraft| {
            let posted = store
                .apply_move(draft)
                .map_err(|e| ServiceError::handler(e.to_string()))?;
            log::info!(
                "Posted stock move {} for {}: {} -> {}",
                posted.id,
                posted.draft.item_code,
                posted.qty_before,
                posted.qty_after
            );
            Ok::<_, ServiceError>(CreateStockMoveOutput {
                id: posted.id,
                item_code: posted.draft.item_code,
                qty_before: posted.qty_before,
                qty_after: posted.qty_after,
                status: posted.status,
            })
        }))
}
