//! A scripted walk through the bundled modules: each step calls a business
//! service, then emits the posting event the module's page would emit, so
//! accounting drafts the matching journal.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use aibos_accounting::journal::JournalEntryCreated;
use aibos_accounting::JOURNAL_CREATED;
use aibos_core::prelude::*;
use aibos_inventory::events::emit_stock_moved;
use aibos_inventory::services::{CreateStockMoveOutput, CREATE_STOCK_MOVE};
use aibos_inventory::types::{StockMoveDraft, StockMoveReason};
use aibos_inventory::{get_item_valuation, StockMovedPayload, StockStore};
use aibos_payroll::{EmployeePay, PayrollRunDraft, PayrunPostedPayload, PostedPayrollRun, POST_PAYROLL_RUN};
use aibos_purchases::events::{emit_bill_posted, emit_payment_made};
use aibos_purchases::services::{POST_BILL, POST_PAYMENT};
use aibos_purchases::types::{BillDraft, BillLineDraft, PaymentDraft, PaymentMethod};
use aibos_purchases::{PostedBill, PostedPayment};
use aibos_sales::events::{emit_cash_receipt_posted, emit_invoice_posted};
use aibos_sales::services::{POST_CASH_RECEIPT, POST_SALES_INVOICE};
use aibos_sales::types::{
    CashReceiptDraft, PostedCashReceipt, PostedInvoice, ReceiptMethod, SalesInvoiceDraft, SalesInvoiceLine,
};
use aibos_sales::InvoicePostedPayload;
use chrono::Utc;
use serde::Deserialize;

use crate::error::{CliError, Result};

const COMPANY: &str = "demo-co";
const CURRENCY: &str = "MYR";
const DEMO_ITEM: &str = "DEMO-LETTUCE-001";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JournalNote {
    journal: JournalEntryCreated,
    #[serde(default)]
    reference_no: Option<String>,
    source_event: String,
}

/// Print every `accounting.JOURNAL_CREATED` until the subscription is
/// disposed. Returns the subscription and a running count.
pub fn watch_journals(lanes: &Lanes) -> (Subscription, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    let subscription = lanes.events().subscribe(JOURNAL_CREATED, move |event| {
        let note: JournalNote = event.payload_as()?;
        seen.fetch_add(1, Ordering::SeqCst);
        println!(
            "  journal {} from {} [{}]: DR {:.2} / CR {:.2}",
            note.journal.id,
            note.source_event,
            note.reference_no.as_deref().unwrap_or("-"),
            note.journal.total_debit,
            note.journal.total_credit
        );
        Ok(())
    });
    (subscription, count)
}

/// Run the demo flow. Returns the number of journals drafted.
pub async fn run(lanes: &Lanes, stock: &StockStore) -> Result<usize> {
    let (subscription, journals) = watch_journals(lanes);
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let services = lanes.services();
    let events = lanes.events();

    println!("Saying hello...");
    aibos_helloworld::say_hello(events, "Hello from the AIBOS demo")?;

    println!("Issuing 2 x {DEMO_ITEM} from stock...");
    let moved: CreateStockMoveOutput = services
        .call_typed(
            CREATE_STOCK_MOVE,
            &StockMoveDraft {
                company_id: COMPANY.to_string(),
                item_code: DEMO_ITEM.to_string(),
                qty_delta: -2.0,
                reason: StockMoveReason::Sale,
                posting_date: today.clone(),
                ref_type: None,
                ref_id: None,
                memo: Some("Demo issue".to_string()),
                allow_negative: None,
            },
        )
        .await?;
    println!("  move {}: qty {} -> {}", moved.id, moved.qty_before, moved.qty_after);
    let posted_move = stock
        .moves(Some(DEMO_ITEM))
        .into_iter()
        .find(|m| m.id == moved.id)
        .ok_or_else(|| CliError::Demo(format!("posted move {} missing from the ledger", moved.id)))?;
    let unit_cost = get_item_valuation(stock, DEMO_ITEM)?;
    emit_stock_moved(events, &StockMovedPayload::new(&posted_move, unit_cost))?;

    println!("Posting a sales invoice...");
    let invoice = SalesInvoiceDraft {
        posting_date: today.clone(),
        company_id: COMPANY.to_string(),
        customer_id: "CUST-001".to_string(),
        currency: CURRENCY.to_string(),
        tax_rate: Some(0.06),
        lines: vec![SalesInvoiceLine {
            item_code: DEMO_ITEM.to_string(),
            description: Some("Demo Lettuce".to_string()),
            qty: 2.0,
            unit_price: 20.0,
            line_total: 40.0,
        }],
    };
    let posted_invoice: PostedInvoice = services.call_typed(POST_SALES_INVOICE, &invoice).await?;
    println!("  invoice {}: total {:.2}", posted_invoice.invoice_id, posted_invoice.total);
    emit_invoice_posted(events, &InvoicePostedPayload::new(&invoice, &posted_invoice))?;

    println!("Receiving payment for the invoice...");
    let receipt: PostedCashReceipt = services
        .call_typed(
            POST_CASH_RECEIPT,
            &CashReceiptDraft {
                receipt_id: "RCPT-DEMO-001".to_string(),
                posting_date: today.clone(),
                company_id: COMPANY.to_string(),
                customer_id: "CUST-001".to_string(),
                currency: CURRENCY.to_string(),
                amount: posted_invoice.total,
                method: ReceiptMethod::Bank,
                bank_account_id: None,
                invoice_id: Some(posted_invoice.invoice_id.clone()),
                ref_doc: None,
            },
        )
        .await?;
    emit_cash_receipt_posted(events, &receipt.payload)?;

    println!("Posting a purchase bill...");
    let bill: PostedBill = services
        .call_typed(
            POST_BILL,
            &BillDraft {
                bill_no: "BILL-DEMO-001".to_string(),
                posting_date: today.clone(),
                company_id: COMPANY.to_string(),
                supplier_id: Some("SUP-001".to_string()),
                currency: CURRENCY.to_string(),
                tax_rate: Some(6.0),
                lines: vec![BillLineDraft {
                    account_id: "1200".to_string(),
                    qty: Some(50.0),
                    unit_cost: Some(5.0),
                    amount: None,
                    memo: Some("Lettuce restock".to_string()),
                }],
            },
        )
        .await?;
    println!("  bill {}: total {:.2}", bill.id, bill.total);
    emit_bill_posted(events, &bill)?;

    println!("Paying the supplier...");
    let payment: PostedPayment = services
        .call_typed(
            POST_PAYMENT,
            &PaymentDraft {
                payment_no: "PAY-DEMO-001".to_string(),
                posting_date: today.clone(),
                company_id: COMPANY.to_string(),
                supplier_id: Some("SUP-001".to_string()),
                currency: CURRENCY.to_string(),
                amount: bill.total,
                method: PaymentMethod::Bank,
                bank_account_id: Some("1020".to_string()),
                bill_no: Some(bill.bill_no.clone()),
                memo: None,
            },
        )
        .await?;
    emit_payment_made(events, &payment)?;

    println!("Posting a payroll run...");
    let run = PayrollRunDraft {
        company_id: COMPANY.to_string(),
        period_start: format!("{}-01", &today[..7]),
        period_end: today.clone(),
        currency: CURRENCY.to_string(),
        posting_date: today.clone(),
        reference_no: Some("PAYRUN-DEMO".to_string()),
        employees: vec![
            EmployeePay {
                employee_id: "EMP-001".to_string(),
                gross: 3000.0,
                employee_epf: 330.0,
                net: 2670.0,
            },
            EmployeePay {
                employee_id: "EMP-002".to_string(),
                gross: 2500.0,
                employee_epf: 275.0,
                net: 2225.0,
            },
        ],
    };
    let posted_run: PostedPayrollRun = services.call_typed(POST_PAYROLL_RUN, &run).await?;
    println!("  run {}: net payable {:.2}", posted_run.id, posted_run.totals.total_net_payable);
    aibos_payroll::emit_payrun_posted(events, &PayrunPostedPayload { run, posted: posted_run })?;

    subscription.dispose();
    Ok(journals.load(Ordering::SeqCst))
}
