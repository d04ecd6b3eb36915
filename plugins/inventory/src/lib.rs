//! # AIBOS Inventory
//!
//! Stock item master data and stock movements over an in-memory ledger.
//! Movements are valued at the item's unit cost and announced as
//! `inventory.STOCK_MOVED` so accounting can draft the matching journal.
use aibos_core::prelude::*;

pub mod events;
pub mod services;
pub mod store;
pub mod types;

pub use events::{StockItemCreatedPayload, StockMovedPayload};
pub use store::{StockStore, StoreError};

pub const MODULE_ID: &str = "inventory";
pub const VERSION: &str = "1.0.3";

pub fn manifest(store: &StockStore) -> RawManifest {
    ManifestBuilder::new(MODULE_ID, "Inventory", VERSION)
        .owned_entity("StockItem")
        .permissions(&["inventory:read", "inventory:write"])
        .route("/inventory/items", "StockItemPage")
        .menu_item("inventory.menu.items", "Stock Items", "/inventory/items", Some(20))
        .service(services::create_stock_item(store))
        .service(services::get_stock_item_list(store))
        .service(services::create_stock_move(store))
        .emits(events::STOCK_ITEM_CREATED)
        .emits(events::STOCK_MOVED)
        .build()
}

/// Inventory over a fresh demo-seeded store.
pub fn module() -> AppModule {
    module_with_store(&StockStore::default())
}

/// Inventory over `store`, so the caller can inspect or pre-seed it.
pub fn module_with_store(store: &StockStore) -> AppModule {
    AppModule::new(manifest(store))
}

/// Unit cost of an item, for valuing its movements.
pub fn get_item_valuation(store: &StockStore, item_code: &str) -> Result<f64, StoreError> {
    store.valuation(item_code)
}
