use serde::{Deserialize, Serialize};

use crate::coa::{EPF_PAYABLE, NET_SALARY_PAYABLE, SALARIES_AND_WAGES};
use crate::journal::{JournalEntryDraft, JournalLine};

pub const PAYRUN_POSTED: &str = "payroll.PAYRUN_POSTED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrunTotals {
    pub total_gross: f64,
    pub total_employee_epf: f64,
    pub total_net_payable: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrunPostedPayload {
    pub id: String,
    pub company_id: String,
    pub currency: String,
    pub posting_date: String,
    #[serde(default)]
    pub reference_no: Option<String>,
    pub totals: PayrunTotals,
}

/// DR Salaries & Wages for gross pay, CR Net Salary Payable and CR EPF
/// Payable for the employee share.
pub fn draft(p: &PayrunPostedPayload) -> JournalEntryDraft {
    JournalEntryDraft {
        posting_date: p.posting_date.clone(),
        company_id: p.company_id.clone(),
        currency: p.currency.clone(),
        reference_no: Some(p.reference_no.clone().unwrap_or_else(|| p.id.clone())),
        lines: vec![
            JournalLine::debit(SALARIES_AND_WAGES, p.totals.total_gross, "Payroll gross"),
            JournalLine::credit(NET_SALARY_PAYABLE, p.totals.total_net_payable, "Net salary payable"),
            JournalLine::credit(EPF_PAYABLE, p.totals.total_employee_epf, "Employee EPF payable"),
        ],
        source_event: Some(PAYRUN_POSTED.to_string()),
        ..JournalEntryDraft::default()
    }
}
