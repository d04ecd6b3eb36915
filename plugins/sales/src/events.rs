use aibos_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{CashReceiptDraft, PostedInvoice, SalesInvoiceDraft, SalesInvoiceLine};
use crate::MODULE_ID;

pub const INVOICE_POSTED: &str = "sales.INVOICE_POSTED";
pub const CASH_RECEIPT_POSTED: &str = "sales.CASH_RECEIPT_POSTED";

/// A posted receipt is announced exactly as settled.
pub type CashReceiptPostedPayload = CashReceiptDraft;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePostedPayload {
    pub invoice_id: String,
    pub posting_date: String,
    pub company_id: String,
    pub customer_id: String,
    pub currency: String,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub lines: Vec<SalesInvoiceLine>,
}

impl InvoicePostedPayload {
    pub fn new(draft: &SalesInvoiceDraft, posted: &PostedInvoice) -> Self {
        Self {
            invoice_id: posted.invoice_id.clone(),
            posting_date: draft.posting_date.clone(),
            company_id: draft.company_id.clone(),
            customer_id: draft.customer_id.clone(),
            currency: draft.currency.clone(),
            subtotal: posted.subtotal,
            tax: posted.tax,
            total: posted.total,
            lines: draft.lines.clone(),
        }
    }
}

pub fn emit_invoice_posted<L: EventLane>(
    lane: &L,
    payload: &InvoicePostedPayload,
) -> Result<(), EventSystemError> {
    lane.emit_typed(MODULE_ID, INVOICE_POSTED, payload)
}

pub fn emit_cash_receipt_posted<L: EventLane>(
    lane: &L,
    payload: &CashReceiptPostedPayload,
) -> Result<(), EventSystemError> {
    lane.emit_typed(MODULE_ID, CASH_RECEIPT_POSTED, payload)
}
