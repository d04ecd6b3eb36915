//! Journal entry drafts.
use aibos_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::coa::{self, NormalBalance};

/// Events whose auto-drafted journals may post against an account's normal
/// balance without setting `allowOppositeNormalBalance`.
pub const TRUSTED_SOURCE_EVENTS: &[&str] = &[
    "inventory.STOCK_MOVED",
    "sales.CASH_RECEIPT_POSTED",
    "purchases.PAYMENT_MADE",
    "payroll.PAYRUN_POSTED",
];

const BALANCE_TOLERANCE: f64 = 0.000_001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLine {
    pub account_id: String,
    pub debit: f64,
    pub credit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl JournalLine {
    pub fn debit(account_id: &str, amount: f64, memo: impl Into<String>) -> Self {
        Self {
            account_id: account_id.to_string(),
            debit: amount,
            credit: 0.0,
            memo: Some(memo.into()),
        }
    }

    pub fn credit(account_id: &str, amount: f64, memo: impl Into<String>) -> Self {
        Self {
            account_id: account_id.to_string(),
            debit: 0.0,
            credit: amount,
            memo: Some(memo.into()),
        }
    }
}

/// Input of `accounting.createJournalEntry`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryDraft {
    pub posting_date: String,
    pub company_id: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_remark: Option<String>,
    pub lines: Vec<JournalLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_opposite_normal_balance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_event: Option<String>,
}

impl JournalEntryDraft {
    pub fn total_debit(&self) -> f64 {
        self.lines.iter().map(|l| l.debit).sum()
    }

    pub fn total_credit(&self) -> f64 {
        self.lines.iter().map(|l| l.credit).sum()
    }

    /// Whether lines may post against their account's normal balance.
    pub fn allows_opposite_balance(&self) -> bool {
        self.allow_opposite_normal_balance.unwrap_or(false)
            || self
                .source_event
                .as_deref()
                .is_some_and(|e| TRUSTED_SOURCE_EVENTS.contains(&e))
    }
}

impl Validate for JournalEntryDraft {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.non_empty(&self.posting_date, "postingDate");
        issues.non_empty(&self.company_id, "companyId");
        issues.non_empty(&self.currency, "currency");
        issues.check(
            self.lines.len() >= 2,
            "lines",
            "Array must contain at least 2 element(s)",
        );

        for (i, line) in self.lines.iter().enumerate() {
            issues.non_empty(&line.account_id, format!("lines.{i}.accountId"));
            issues.check(line.debit >= 0.0, format!("lines.{i}.debit"), "Number must be greater than or equal to 0");
            issues.check(line.credit >= 0.0, format!("lines.{i}.credit"), "Number must be greater than or equal to 0");
            issues.check(
                !(line.debit > 0.0 && line.credit > 0.0),
                format!("lines.{i}"),
                "A line cannot have both debit and credit.",
            );
        }

        let (debit, credit) = (self.total_debit(), self.total_credit());
        issues.check(
            debit > 0.0 && credit > 0.0 && (debit - credit).abs() < BALANCE_TOLERANCE,
            "",
            "Journal must balance: totalDebit = totalCredit and both > 0.",
        );

        if !self.allows_opposite_balance() {
            for (i, line) in self.lines.iter().enumerate() {
                let Some(account) = coa::find(&line.account_id) else {
                    continue;
                };
                let opposite = match account.normal_balance {
                    NormalBalance::Debit => line.credit > 0.0 && line.debit == 0.0,
                    NormalBalance::Credit => line.debit > 0.0 && line.credit == 0.0,
                };
                if opposite {
                    issues.push(
                        format!("lines.{i}"),
                        format!(
                            "Line normal balance mismatch: account {} ({}) has a {} normal balance. \
                             Set allowOppositeNormalBalance for contra entries.",
                            account.id,
                            account.name,
                            account.normal_balance.as_str()
                        ),
                    );
                }
            }
        }
        issues.into_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalStatus {
    Draft,
    Posted,
}

/// Output of `accounting.createJournalEntry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryCreated {
    pub id: String,
    pub total_debit: f64,
    pub total_credit: f64,
    pub status: JournalStatus,
}

impl Validate for JournalEntryCreated {}

/// Record a checked draft. Nothing is persisted yet; the entry is returned
/// as a draft with a fresh id.
pub fn create(draft: &JournalEntryDraft) -> JournalEntryCreated {
    JournalEntryCreated {
        id: format!("je_{}", uuid::Uuid::new_v4().simple()),
        total_debit: draft.total_debit(),
        total_credit: draft.total_credit(),
        status: JournalStatus::Draft,
    }
}

/// Check `draft` and create it. Listeners use this to go through the same
/// rules as callers of the service.
pub fn create_checked(draft: &JournalEntryDraft) -> Result<JournalEntryCreated, ValidationError> {
    check(draft)?;
    Ok(create(draft))
}
