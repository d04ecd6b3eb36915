//! # AIBOS Purchases
//!
//! Supplier bills and payments. Posted documents double as the payloads of
//! `purchases.BILL_POSTED` and `purchases.PAYMENT_MADE`.
use aibos_core::prelude::*;

pub mod events;
pub mod services;
pub mod types;

pub use types::{PostedBill, PostedPayment};

pub const MODULE_ID: &str = "purchases";
pub const VERSION: &str = "1.0.1";

pub fn manifest() -> RawManifest {
    ManifestBuilder::new(MODULE_ID, "Purchases", VERSION)
        .owned_entity("PurchaseBill")
        .permissions(&["purchases:read", "purchases:write"])
        .route("/purchases/bill", "PurchaseBillPage")
        .route("/purchases/payment", "PurchasePaymentPage")
        .menu_item("purchases.menu.bill", "Purchase Bill", "/purchases/bill", Some(30))
        .menu_item("purchases.menu.payment", "Payment Made", "/purchases/payment", Some(31))
        .service(services::post_bill_service())
        .service(services::post_payment_service())
        .emits(events::BILL_POSTED)
        .emits(events::PAYMENT_MADE)
        .build()
}

pub fn module() -> AppModule {
    AppModule::new(manifest())
}
