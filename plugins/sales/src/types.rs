use aibos_core::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const LINE_TOLERANCE: f64 = 0.000_001;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInvoiceLine {
    pub item_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub qty: f64,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInvoiceDraft {
    pub posting_date: String,
    pub company_id: String,
    pub customer_id: String,
    pub currency: String,
    /// Fraction, e.g. `0.06` for 6 %.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    pub lines: Vec<SalesInvoiceLine>,
}

impl SalesInvoiceDraft {
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|l| l.line_total).sum()
    }
}

impl Validate for SalesInvoiceDraft {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.check(
            self.posting_date.len() >= 10,
            "postingDate",
            "String must contain at least 10 character(s)",
        );
        issues.non_empty(&self.company_id, "companyId");
        issues.non_empty(&self.customer_id, "customerId");
        issues.non_empty(&self.currency, "currency");
        if let Some(rate) = self.tax_rate {
            issues.check((0.0..=1.0).contains(&rate), "taxRate", "taxRate must be between 0 and 1");
        }
        issues.check(!self.lines.is_empty(), "lines", "Array must contain at least 1 element(s)");

        for (i, line) in self.lines.iter().enumerate() {
            issues.non_empty(&line.item_code, format!("lines.{i}.itemCode"));
            issues.check(line.qty > 0.0, format!("lines.{i}.qty"), "Number must be greater than 0");
            issues.check(
                line.unit_price >= 0.0,
                format!("lines.{i}.unitPrice"),
                "Number must be greater than or equal to 0",
            );
            issues.check(
                line.line_total >= 0.0,
                format!("lines.{i}.lineTotal"),
                "Number must be greater than or equal to 0",
            );
        }

        let recomputed: f64 = self.lines.iter().map(|l| l.qty * l.unit_price).sum();
        issues.check(
            (recomputed - self.subtotal()).abs() < LINE_TOLERANCE,
            "",
            "Line totals must equal qty * unitPrice",
        );
        issues.into_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedInvoice {
    pub invoice_id: String,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl Validate for PostedInvoice {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptMethod {
    Bank,
    Cash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashReceiptDraft {
    pub receipt_id: String,
    pub posting_date: String,
    pub company_id: String,
    pub customer_id: String,
    pub currency: String,
    pub amount: f64,
    pub method: ReceiptMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_doc: Option<String>,
}

impl Validate for CashReceiptDraft {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.non_empty(&self.receipt_id, "receiptId");
        issues.check(is_iso_date(&self.posting_date), "postingDate", "Invalid date, expected YYYY-MM-DD");
        issues.non_empty(&self.company_id, "companyId");
        issues.non_empty(&self.customer_id, "customerId");
        issues.non_empty(&self.currency, "currency");
        issues.check(self.amount > 0.0, "amount", "Number must be greater than 0");
        issues.into_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedCashReceipt {
    pub ok: bool,
    pub payload: CashReceiptDraft,
}

impl Validate for PostedCashReceipt {}
