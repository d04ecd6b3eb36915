//! In-memory stock ledger shared by the inventory services.
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use crate::types::{MoveStatus, StockItem, StockItemDraft, StockItemType, StockMoveDraft, StockMovePosted};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("itemCode '{0}' already exists")]
    DuplicateItem(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item not found for valuation: {0}")]
    ValuationNotFound(String),

    #[error("Negative stock blocked for {item_code}. qtyBefore={qty_before}, delta={delta}")]
    NegativeStock {
        item_code: String,
        qty_before: f64,
        delta: f64,
    },
}

#[derive(Debug, Default)]
struct Ledger {
    items: Vec<StockItem>,
    /// Newest first.
    moves: Vec<StockMovePosted>,
}

/// Cloneable handle to one stock ledger. Clones share state.
#[derive(Debug, Clone)]
pub struct StockStore {
    ledger: Arc<RwLock<Ledger>>,
}

impl Default for StockStore {
    /// A store seeded with the demo items.
    fn default() -> Self {
        Self::with_items(demo_items())
    }
}

impl StockStore {
    pub fn empty() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<StockItem>) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(Ledger {
                items,
                moves: Vec::new(),
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.ledger.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn items(&self) -> Vec<StockItem> {
        self.read().items.clone()
    }

    pub fn find_item(&self, item_code: &str) -> Option<StockItem> {
        self.read().items.iter().find(|i| i.item_code() == item_code).cloned()
    }

    pub fn contains(&self, item_code: &str) -> bool {
        self.read().items.iter().any(|i| i.item_code() == item_code)
    }

    /// Add a new item; its id is its item code.
    pub fn create_item(&self, draft: StockItemDraft) -> Result<StockItem, StoreError> {
        let mut ledger = self.write();
        if ledger.items.iter().any(|i| i.item_code() == draft.item_code) {
            return Err(StoreError::DuplicateItem(draft.item_code));
        }
        let item = StockItem {
            id: draft.item_code.clone(),
            created_at: now(),
            draft,
        };
        ledger.items.push(item.clone());
        log::debug!("Created stock item {}", item.id);
        Ok(item)
    }

    /// Post a movement against an item's quantity on hand.
    pub fn apply_move(&self, draft: StockMoveDraft) -> Result<StockMovePosted, StoreError> {
        let mut ledger = self.write();
        let item = ledger
            .items
            .iter_mut()
            .find(|i| i.draft.item_code == draft.item_code)
            .ok_or_else(|| StoreError::ItemNotFound(draft.item_code.clone()))?;

        let qty_before = item.draft.qty_on_hand;
        let qty_after = qty_before + draft.qty_delta;
        if qty_after < 0.0 && !draft.allow_negative.unwrap_or(false) {
            return Err(StoreError::NegativeStock {
                item_code: draft.item_code,
                qty_before,
                delta: draft.qty_delta,
            });
        }
        item.draft.qty_on_hand = qty_after;

        let posted = StockMovePosted {
            id: format!("SM-{}", Utc::now().timestamp_millis()),
            qty_before,
            qty_after,
            status: MoveStatus::Posted,
            draft: StockMoveDraft {
                allow_negative: Some(draft.allow_negative.unwrap_or(false)),
                ..draft
            },
        };
        ledger.moves.insert(0, posted.clone());
        Ok(posted)
    }

    /// Posted movements, newest first, optionally for one item.
    pub fn moves(&self, item_code: Option<&str>) -> Vec<StockMovePosted> {
        self.read()
            .moves
            .iter()
            .filter(|m| item_code.is_none_or(|code| m.draft.item_code == code))
            .cloned()
            .collect()
    }

    /// Unit cost used to value movements of an item.
    pub fn valuation(&self, item_code: &str) -> Result<f64, StoreError> {
        self.read()
            .items
            .iter()
            .find(|i| i.item_code() == item_code)
            .map(|i| i.draft.unit_cost)
            .ok_or_else(|| StoreError::ValuationNotFound(item_code.to_string()))
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn demo_items() -> Vec<StockItem> {
    let created_at = now();
    let seed = |code: &str, name: &str, category: &str, uom: &str, unit_cost: f64, qty: f64| StockItem {
        id: code.to_string(),
        created_at: created_at.clone(),
        draft: StockItemDraft {
            item_code: code.to_string(),
            name: name.to_string(),
            item_type: StockItemType::RawMaterial,
            category: Some(category.to_string()),
            uom: uom.to_string(),
            qty_on_hand: qty,
            unit_cost,
            is_active: true,
        },
    };
    vec![
        seed("DEMO-LETTUCE-001", "Demo Lettuce", "Vegetable", "kg", 5.0, 100.0),
        seed("DEMO-PACK-001", "Demo Packaging Bag", "Packaging", "pcs", 0.3, 500.0),
    ]
}
