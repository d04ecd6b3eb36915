use aibos_core::prelude::*;
use aibos_core::Kernel;
use aibos_purchases::services::{POST_BILL, POST_PAYMENT};
use serde_json::{json, Value};

async fn call(key: &str, input: Value) -> Result<Value, ServiceError> {
    let kernel = Kernel::new();
    kernel.boot(&[aibos_purchases::module()]).await.unwrap();
    kernel.lanes().services().call(key, input).await
}

fn bill(lines: Value) -> Value {
    json!({
        "billNo": "B-2026-001",
        "postingDate": "2026-06-01",
        "companyId": "co-1",
        "supplierId": "sup-3",
        "currency": "MYR",
        "taxRate": 6,
        "lines": lines
    })
}

#[tokio::test]
async fn test_bill_prices_lines_and_tax() {
    let out = call(
        POST_BILL,
        bill(json!([
            {"accountId": "5100", "amount": 40},
            {"accountId": "1200", "qty": 20, "unitCost": 3, "memo": "Packaging"}
        ])),
    )
    .await
    .unwrap();

    assert!(out["id"].as_str().unwrap().starts_with("PB-"));
    assert_eq!(out["subtotal"], json!(100.0));
    assert_eq!(out["taxAmount"], json!(6.0));
    assert_eq!(out["total"], json!(106.0));
    assert_eq!(out["lines"][1], json!({"accountId": "1200", "amount": 60.0, "memo": "Packaging"}));
    assert_eq!(out["supplierId"], json!("sup-3"));
}

#[tokio::test]
async fn test_bill_line_needs_amount_or_qty_and_cost() {
    let err = call(POST_BILL, bill(json!([{"accountId": "5100", "qty": 2}])))
        .await
        .unwrap_err();
    let issues = err.validation().unwrap();
    assert!(issues.has_issue_at("lines.0"));
    assert!(issues.mentions("Line must have amount or qty*unitCost"));
}

#[tokio::test]
async fn test_bill_tax_rate_is_a_percentage() {
    let mut input = bill(json!([{"accountId": "5100", "amount": 1}]));
    input["taxRate"] = json!(101);
    let err = call(POST_BILL, input).await.unwrap_err();
    assert!(err.validation().unwrap().has_issue_at("taxRate"));
}

fn payment(method: &str) -> Value {
    json!({
        "paymentNo": "PAY-9",
        "postingDate": "2026-06-05",
        "companyId": "co-1",
        "currency": "MYR",
        "amount": 106,
        "method": method,
        "billNo": "B-2026-001"
    })
}

#[tokio::test]
async fn test_payment_echoes_input_with_id() {
    let out = call(POST_PAYMENT, payment("cash")).await.unwrap();
    assert!(out["id"].as_str().unwrap().starts_with("PP-"));
    assert_eq!(out["paymentNo"], json!("PAY-9"));
    assert_eq!(out["billNo"], json!("B-2026-001"));
    assert_eq!(out["method"], json!("cash"));
}

#[tokio::test]
async fn test_bank_payment_requires_account() {
    let err = call(POST_PAYMENT, payment("bank")).await.unwrap_err();
    assert!(err
        .validation()
        .unwrap()
        .mentions("bankAccountId is required when method=bank"));

    let mut input = payment("bank");
    input["bankAccountId"] = json!("1020");
    assert!(call(POST_PAYMENT, input).await.is_ok());
}

#[tokio::test]
async fn test_payment_amount_must_be_positive() {
    let mut input = payment("cash");
    input["amount"] = json!(-1);
    let err = call(POST_PAYMENT, input).await.unwrap_err();
    assert!(err.validation().unwrap().has_issue_at("amount"));
}
