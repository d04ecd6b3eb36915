use aibos_core::prelude::*;
use chrono::Utc;

use crate::types::{round2, BillDraft, BillLine, PaymentDraft, PostedBill, PostedPayment};

pub const POST_BILL: &str = "purchases.postBill";
pub const POST_PAYMENT: &str = "purchases.postPayment";

/// Price a checked bill. Lines without an explicit amount are valued at
/// quantity times unit cost; tax is a percentage of the subtotal rounded
/// to cents.
pub fn post_bill(draft: BillDraft) -> PostedBill {
    let lines: Vec<BillLine> = draft
        .lines
        .into_iter()
        .map(|l| BillLine {
            amount: l.amount().unwrap_or(0.0),
            account_id: l.account_id,
            memo: l.memo,
        })
        .collect();
    let subtotal: f64 = lines.iter().map(|l| l.amount).sum();
    let tax_amount = round2(subtotal * draft.tax_rate.unwrap_or(0.0) / 100.0);
    PostedBill {
        id: format!("PB-{}", Utc::now().timestamp_millis()),
        bill_no: draft.bill_no,
        posting_date: draft.posting_date,
        company_id: draft.company_id,
        supplier_id: draft.supplier_id,
        currency: draft.currency,
        subtotal,
        tax_amount,
        total: round2(subtotal + tax_amount),
        lines,
    }
}

pub fn post_payment(payment: PaymentDraft) -> PostedPayment {
    PostedPayment {
        id: format!("PP-{}", Utc::now().timestamp_millis()),
        payment,
    }
}

pub fn post_bill_service() -> ServiceDef {
    ServiceDef::new(POST_BILL)
        .description("Posts a supplier bill and returns computed totals")
        .input_schema(schema::<BillDraft>())
        .output_schema(schema::<PostedBill>())
        .handler(typed_handler(|draft: BillDraft| {
            let bill = post_bill(draft);
            log::info!("Posted bill {} ({}) total {:.2}", bill.id, bill.bill_no, bill.total);
            Ok::<_, ServiceError>(bill)
        }))
}

pub fn post_payment_service() -> ServiceDef {
    ServiceDef::new(POST_PAYMENT)
        .description("Posts a supplier payment")
        .input_schema(schema::<PaymentDraft>())
        .output_schema(schema::<PostedPayment>())
        .handler(typed_handler(|payment: PaymentDraft| {
            Ok::<_, ServiceError>(post_payment(payment))
        }))
}
