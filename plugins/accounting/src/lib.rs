//! # AIBOS Accounting
//!
//! General ledger module: balanced journal entry drafts guarded by the chart
//! of accounts' normal balances, a read-only chart of accounts and
//! auto-drafted journals for stock, sales, purchases and payroll postings.
use aibos_core::prelude::*;

pub mod coa;
pub mod journal;
pub mod listeners;
pub mod services;

pub use journal::{JournalEntryCreated, JournalEntryDraft, JournalLine};

pub const MODULE_ID: &str = "accounting";
pub const VERSION: &str = "1.8.0";

pub const JOURNAL_CREATED: &str = "accounting.JOURNAL_CREATED";

pub fn manifest() -> RawManifest {
    ManifestBuilder::new(MODULE_ID, "Accounting", VERSION)
        .owned_entities(&["JournalEntry", "JournalLine"])
        .permissions(&["accounting:read", "accounting:write"])
        .route("/accounting/journal-entry", "JournalEntryPage")
        .menu_item("accounting.menu.journal", "Journal Entry", "/accounting/journal-entry", Some(10))
        .service(services::create_journal_entry())
        .service(services::get_coa_list())
        .emits(JOURNAL_CREATED)
        .consumes(listeners::stock::STOCK_MOVED)
        .consumes(listeners::sales::INVOICE_POSTED)
        .consumes(listeners::sales::CASH_RECEIPT_POSTED)
        .consumes(listeners::purchases::BILL_POSTED)
        .consumes(listeners::purchases::PAYMENT_MADE)
        .consumes(listeners::payroll::PAYRUN_POSTED)
        .build()
}

pub fn module() -> AppModule {
    let listeners = listeners::Listeners::new();
    AppModule::new(manifest()).with_listeners(move |lanes| listeners.register(lanes))
}
