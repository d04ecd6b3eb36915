use serde::{Deserialize, Serialize};

use super::sales::PaymentMethod;
use crate::coa::{BANK_CURRENT, INPUT_TAX_RECEIVABLE, PETTY_CASH, TRADE_PAYABLES};
use crate::journal::{JournalEntryDraft, JournalLine};

pub const BILL_POSTED: &str = "purchases.BILL_POSTED";
pub const PAYMENT_MADE: &str = "purchases.PAYMENT_MADE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillLine {
    pub account_id: String,
    pub amount: f64,
    #[serde(default)]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPostedPayload {
    pub id: String,
    pub bill_no: String,
    pub posting_date: String,
    pub company_id: String,
    #[serde(default)]
    pub supplier_id: Option<String>,
    pub currency: String,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub lines: Vec<BillLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMadePayload {
    pub id: String,
    pub payment_no: String,
    pub posting_date: String,
    pub company_id: String,
    #[serde(default)]
    pub supplier_id: Option<String>,
    pub currency: String,
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(default)]
    pub bank_account_id: Option<String>,
    #[serde(default)]
    pub bill_no: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}

/// DR each bill line's account, DR Input Tax Receivable for any tax, CR
/// Trade Payables for the total.
pub fn bill_draft(p: &BillPostedPayload) -> JournalEntryDraft {
    let mut lines: Vec<JournalLine> = p
        .lines
        .iter()
        .map(|l| {
            let memo = match l.memo.as_deref() {
                Some(m) if !m.is_empty() => m.to_string(),
                _ => format!("{} expense", p.bill_no),
            };
            JournalLine::debit(&l.account_id, l.amount, memo)
        })
        .collect();
    if p.tax_amount > 0.0 {
        lines.push(JournalLine::debit(INPUT_TAX_RECEIVABLE, p.tax_amount, "Input tax"));
    }
    lines.push(JournalLine::credit(TRADE_PAYABLES, p.total, format!("AP for {}", p.bill_no)));

    JournalEntryDraft {
        posting_date: p.posting_date.clone(),
        company_id: p.company_id.clone(),
        currency: p.currency.clone(),
        reference_no: Some(p.bill_no.clone()),
        user_remark: Some(format!("Auto-draft from purchase bill: {}", p.bill_no)),
        lines,
        allow_opposite_normal_balance: Some(false),
        ..JournalEntryDraft::default()
    }
}

/// DR Trade Payables, CR petty cash or the paying bank account. Debiting
/// a payable is a contra posting, so the draft allows it explicitly.
pub fn payment_made_draft(p: &PaymentMadePayload) -> JournalEntryDraft {
    let account = match p.method {
        PaymentMethod::Cash => PETTY_CASH,
        PaymentMethod::Bank => p
            .bank_account_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(BANK_CURRENT),
    };
    let clear_memo = format!("Clear AP {}", p.bill_no.as_deref().unwrap_or(""));
    JournalEntryDraft {
        posting_date: p.posting_date.clone(),
        company_id: p.company_id.clone(),
        currency: p.currency.clone(),
        reference_no: Some(p.payment_no.clone()),
        lines: vec![
            JournalLine::debit(TRADE_PAYABLES, p.amount, clear_memo.trim()),
            JournalLine::credit(account, p.amount, format!("Payment {}", p.payment_no)),
        ],
        allow_opposite_normal_balance: Some(true),
        ..JournalEntryDraft::default()
    }
}
