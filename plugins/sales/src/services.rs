use aibos_core::prelude::*;
use chrono::Utc;

use crate::types::{
    round2, CashReceiptDraft, PostedCashReceipt, PostedInvoice, ReceiptMethod, SalesInvoiceDraft,
};

pub const POST_SALES_INVOICE: &str = "sales.postSalesInvoice";
pub const POST_CASH_RECEIPT: &str = "sales.postCashReceipt";

/// Receiving account for bank receipts that name none.
pub const DEFAULT_BANK_ACCOUNT: &str = "1020";

/// Price an invoice: tax and total are rounded to cents.
pub fn post_invoice(draft: &SalesInvoiceDraft) -> PostedInvoice {
    let subtotal = draft.subtotal();
    let tax = round2(subtotal * draft.tax_rate.unwrap_or(0.0));
    PostedInvoice {
        invoice_id: format!("SI-{}", Utc::now().timestamp_millis()),
        subtotal,
        tax,
        total: round2(subtotal + tax),
    }
}

/// Settle the receiving account: bank receipts default to the current
/// account, cash receipts never carry one.
pub fn post_receipt(draft: CashReceiptDraft) -> PostedCashReceipt {
    let bank_account_id = match draft.method {
        ReceiptMethod::Bank => Some(
            draft
                .bank_account_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| DEFAULT_BANK_ACCOUNT.to_string()),
        ),
        ReceiptMethod::Cash => None,
    };
    PostedCashReceipt {
        ok: true,
        payload: CashReceiptDraft {
            bank_account_id,
            ..draft
        },
    }
}

pub fn post_sales_invoice() -> ServiceDef {
    ServiceDef::new(POST_SALES_INVOICE)
        .description("Posts a sales invoice and prices tax and total")
        .input_schema(schema::<SalesInvoiceDraft>())
        .output_schema(schema::<PostedInvoice>())
        .handler(typed_handler(|draft: SalesInvoiceDraft| {
            let posted = post_invoice(&draft);
            log::info!("Posted sales invoice {} ({:.2})", posted.invoice_id, posted.total);
            Ok::<_, ServiceError>(posted)
        }))
}

pub fn post_cash_receipt() -> ServiceDef {
    ServiceDef::new(POST_CASH_RECEIPT)
        .description("Posts a customer cash receipt")
        .input_schema(schema::<CashReceiptDraft>())
        .output_schema(schema::<PostedCashReceipt>())
        .handler(typed_handler(|draft: CashReceiptDraft| {
            Ok::<_, ServiceError>(post_receipt(draft))
        }))
}
