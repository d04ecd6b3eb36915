use serde::{Deserialize, Serialize};

use crate::coa::{BANK_CURRENT, OUTPUT_TAX_PAYABLE, PETTY_CASH, SALES_REVENUE, TRADE_RECEIVABLES};
use crate::journal::{JournalEntryDraft, JournalLine};

pub const INVOICE_POSTED: &str = "sales.INVOICE_POSTED";
pub const CASH_RECEIPT_POSTED: &str = "sales.CASH_RECEIPT_POSTED";

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Bank,
    Cash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashReceiptPostedPayload {
    pub receipt_id: String,
    pub posting_date: String,
    pub company_id: String,
    pub customer_id: String,
    pub currency: String,
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(default)]
    pub bank_account_id: Option<String>,
    #[serde(default)]
    pub invoice_id: Option<String>,
}

/// DR Trade Receivables for the total, CR Sales Revenue for the subtotal
/// and CR Output Tax Payable for any tax.
pub fn invoice_draft(p: &InvoicePostedPayload) -> JournalEntryDraft {
    let mut lines = vec![
        JournalLine::debit(TRADE_RECEIVABLES, p.total, format!("AR for {}", p.invoice_id)),
        JournalLine::credit(SALES_REVENUE, p.subtotal, format!("Sales {}", p.invoice_id)),
    ];
    if p.tax > 0.0 {
        lines.push(JournalLine::credit(
            OUTPUT_TAX_PAYABLE,
            p.tax,
            format!("Output tax {}", p.invoice_id),
        ));
    }
    JournalEntryDraft {
        posting_date: p.posting_date.clone(),
        company_id: p.company_id.clone(),
        currency: p.currency.clone(),
        reference_no: Some(p.invoice_id.clone()),
        lines,
        allow_opposite_normal_balance: Some(false),
        ..JournalEntryDraft::default()
    }
}

/// DR petty cash or the receiving bank account, CR Trade Receivables.
pub fn cash_receipt_draft(p: &CashReceiptPostedPayload) -> JournalEntryDraft {
    let account = match p.method {
        PaymentMethod::Cash => PETTY_CASH,
        PaymentMethod::Bank => p
            .bank_account_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(BANK_CURRENT),
    };
    JournalEntryDraft {
        posting_date: p.posting_date.clone(),
        company_id: p.company_id.clone(),
        currency: p.currency.clone(),
        reference_no: Some(p.receipt_id.clone()),
        user_remark: Some(format!("Auto-draft from cash receipt: {}", p.receipt_id)),
        lines: vec![
            JournalLine::debit(account, p.amount, "Cash receipt"),
            JournalLine::credit(TRADE_RECEIVABLES, p.amount, "Clear trade receivables"),
        ],
        source_event: Some(CASH_RECEIPT_POSTED.to_string()),
        ..JournalEntryDraft::default()
    }
}
