//! # AIBOS Payroll
//!
//! Payroll runs. A posted run is announced as `payroll.PAYRUN_POSTED`;
//! accounting turns it into the salary accrual journal.
use aibos_core::prelude::*;
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const MODULE_ID: &str = "payroll";
pub const VERSION: &str = "1.0.0";

pub const POST_PAYROLL_RUN: &str = "payroll.postPayrollRun";
pub const PAYRUN_POSTED: &str = "payroll.PAYRUN_POSTED";

const NET_TOLERANCE: f64 = 0.000_001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePay {
    pub employee_id: String,
    pub gross: f64,
    pub employee_epf: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRunDraft {
    pub company_id: String,
    pub period_start: String,
    pub period_end: String,
    pub currency: String,
    pub posting_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
    pub employees: Vec<EmployeePay>,
}

impl Validate for PayrollRunDraft {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.non_empty(&self.company_id, "companyId");
        for (value, path) in [
            (&self.period_start, "periodStart"),
            (&self.period_end, "periodEnd"),
            (&self.posting_date, "postingDate"),
        ] {
            issues.check(value.len() >= 10, path, "String must contain at least 10 character(s)");
        }
        issues.non_empty(&self.currency, "currency");
        issues.check(!self.employees.is_empty(), "employees", "Array must contain at least 1 element(s)");

        for (i, e) in self.employees.iter().enumerate() {
            issues.non_empty(&e.employee_id, format!("employees.{i}.employeeId"));
            for (amount, field) in [(e.gross, "gross"), (e.employee_epf, "employeeEpf"), (e.net, "net")] {
                issues.check(
                    amount >= 0.0,
                    format!("employees.{i}.{field}"),
                    "Number must be greater than or equal to 0",
                );
            }
        }
        issues.check(
            self.employees
                .iter()
                .all(|e| (e.net - (e.gross - e.employee_epf)).abs() < NET_TOLERANCE),
            "",
            "Each employee net must equal gross - employeeEpf",
        );
        issues.into_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Posted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrunTotals {
    pub total_gross: f64,
    pub total_employee_epf: f64,
    pub total_net_payable: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedPayrollRun {
    pub id: String,
    pub status: RunStatus,
    pub totals: PayrunTotals,
}

impl Validate for PostedPayrollRun {}

/// The run as announced: the submitted draft plus its posting result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrunPostedPayload {
    #[serde(flatten)]
    pub run: PayrollRunDraft,
    #[serde(flatten)]
    pub posted: PostedPayrollRun,
}

pub fn post_run(draft: &PayrollRunDraft) -> PostedPayrollRun {
    let sum = |f: fn(&EmployeePay) -> f64| draft.employees.iter().map(f).sum::<f64>();
    PostedPayrollRun {
        id: format!("PR-{}", Utc::now().timestamp_millis()),
        status: RunStatus::Posted,
        totals: PayrunTotals {
            total_gross: sum(|e| e.gross),
            total_employee_epf: sum(|e| e.employee_epf),
            total_net_payable: sum(|e| e.net),
        },
    }
}

pub fn post_payroll_run() -> ServiceDef {
    ServiceDef::new(POST_PAYROLL_RUN)
        .description("Posts a payroll run and returns its totals")
        .input_schema(schema::<PayrollRunDraft>())
        .output_schema(schema::<PostedPayrollRun>())
        .handler(typed_handler(|draft: PayrollRunDraft| {
            let posted = post_run(&draft);
            log::info!(
                "Posted payroll run {} for {} employee(s), gross {:.2}",
                posted.id,
                draft.employees.len(),
                posted.totals.total_gross
            );
            Ok::<_, ServiceError>(posted)
        }))
}

pub fn emit_payrun_posted<L: EventLane>(lane: &L, payload: &PayrunPostedPayload) -> Result<(), EventSystemError> {
    lane.emit_typed(MODULE_ID, PAYRUN_POSTED, payload)
}

pub fn manifest() -> RawManifest {
    ManifestBuilder::new(MODULE_ID, "Payroll", VERSION)
        .owned_entity("PayrollRun")
        .permissions(&["payroll:read", "payroll:write"])
        .route("/payroll/run", "PayrollRunPage")
        .menu_item("payroll.menu.run", "Payrun", "/payroll/run", Some(40))
        .service(post_payroll_run())
        .emits(PAYRUN_POSTED)
        .build()
}

/// Payroll consumes nothing; its hook subscribes no listeners.
pub fn module() -> AppModule {
    AppModule::new(manifest()).with_listeners(|_lanes| Ok(()))
}
