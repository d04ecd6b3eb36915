use aibos_core::prelude::*;
use serde::{Deserialize, Serialize};

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A bill line priced either directly or as quantity times unit cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillLineDraft {
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl BillLineDraft {
    /// Explicit amount, else quantity times unit cost.
    pub fn amount(&self) -> Option<f64> {
        self.amount.or_else(|| Some(self.qty? * self.unit_cost?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub bill_no: String,
    pub posting_date: String,
    pub company_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    pub currency: String,
    /// Percentage, e.g. `6` for 6 %.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    pub lines: Vec<BillLineDraft>,
}

impl Validate for BillDraft {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.non_empty(&self.bill_no, "billNo");
        issues.check(
            self.posting_date.len() >= 10,
            "postingDate",
            "String must contain at least 10 character(s)",
        );
        issues.non_empty(&self.company_id, "companyId");
        issues.non_empty(&self.currency, "currency");
        if let Some(rate) = self.tax_rate {
            issues.check((0.0..=100.0).contains(&rate), "taxRate", "taxRate must be between 0 and 100");
        }
        issues.check(!self.lines.is_empty(), "lines", "Array must contain at least 1 element(s)");

        for (i, line) in self.lines.iter().enumerate() {
            issues.non_empty(&line.account_id, format!("lines.{i}.accountId"));
            if let Some(qty) = line.qty {
                issues.check(qty > 0.0, format!("lines.{i}.qty"), "Number must be greater than 0");
            }
            if let Some(cost) = line.unit_cost {
                issues.check(
                    cost >= 0.0,
                    format!("lines.{i}.unitCost"),
                    "Number must be greater than or equal to 0",
                );
            }
            if let Some(amount) = line.amount {
                issues.check(
                    amount >= 0.0,
                    format!("lines.{i}.amount"),
                    "Number must be greater than or equal to 0",
                );
            }
            issues.check(
                line.amount().is_some(),
                format!("lines.{i}"),
                "Line must have amount or qty*unitCost",
            );
        }
        issues.into_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillLine {
    pub account_id: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// A posted bill; also the payload of `purchases.BILL_POSTED`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedBill {
    pub id: String,
    pub bill_no: String,
    pub posting_date: String,
    pub company_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    pub currency: String,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub lines: Vec<BillLine>,
}

impl Validate for PostedBill {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Bank,
    Cash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub payment_no: String,
    pub posting_date: String,
    pub company_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    pub currency: String,
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bill_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl Validate for PaymentDraft {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.non_empty(&self.payment_no, "paymentNo");
        issues.check(
            self.posting_date.len() >= 10,
            "postingDate",
            "String must contain at least 10 character(s)",
        );
        issues.non_empty(&self.company_id, "companyId");
        issues.non_empty(&self.currency, "currency");
        issues.check(self.amount > 0.0, "amount", "Number must be greater than 0");
        if self.method == PaymentMethod::Bank {
            issues.check(
                self.bank_account_id.as_deref().is_some_and(|id| !id.is_empty()),
                "bankAccountId",
                "bankAccountId is required when method=bank",
            );
        }
        issues.into_vec()
    }
}

/// A posted payment; also the payload of `purchases.PAYMENT_MADE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedPayment {
    pub id: String,
    #[serde(flatten)]
    pub payment: PaymentDraft,
}

impl Validate for PostedPayment {}
