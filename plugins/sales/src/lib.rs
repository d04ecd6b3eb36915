//! # AIBOS Sales
//!
//! Sales invoices and customer cash receipts. Postings are announced on the
//! bus for accounting to draft receivable journals.
use aibos_core::prelude::*;

pub mod events;
pub mod services;
pub mod types;

pub use events::{CashReceiptPostedPayload, InvoicePostedPayload};

pub const MODULE_ID: &str = "sales";
pub const VERSION: &str = "1.0.1";

pub fn manifest() -> RawManifest {
    ManifestBuilder::new(MODULE_ID, "Sales", VERSION)
        .owned_entities(&["SalesInvoice", "CashReceipt"])
        .permissions(&["sales:read", "sales:write"])
        .route("/sales/invoice", "SalesInvoicePage")
        .route("/sales/cash-receipt", "CashReceiptPage")
        .menu_item("sales.menu.invoice", "Sales Invoice", "/sales/invoice", Some(30))
        .menu_item("sales.menu.cashReceipt", "Cash Receipt", "/sales/cash-receipt", Some(31))
        .service(services::post_sales_invoice())
        .service(services::post_cash_receipt())
        .emits(events::INVOICE_POSTED)
        .emits(events::CASH_RECEIPT_POSTED)
        .build()
}

pub fn module() -> AppModule {
    AppModule::new(manifest())
}
