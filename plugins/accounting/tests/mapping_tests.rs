use aibos_accounting::journal;
use aibos_accounting::listeners::purchases::{self, BillLine, BillPostedPayload, PaymentMadePayload};
use aibos_accounting::listeners::sales::{self, CashReceiptPostedPayload, InvoicePostedPayload, PaymentMethod};
use aibos_accounting::listeners::stock::{self, Direction, StockMovedPayload};
use aibos_accounting::listeners::payroll::{self, PayrunPostedPayload, PayrunTotals};

fn accounts(draft: &journal::JournalEntryDraft) -> Vec<(&str, f64, f64)> {
    draft
        .lines
        .iter()
        .map(|l| (l.account_id.as_str(), l.debit, l.credit))
        .collect()
}

fn stock_move(direction: Direction) -> StockMovedPayload {
    StockMovedPayload {
        company_id: "co-1".to_string(),
        item_code: "DEMO-LETTUCE-001".to_string(),
        qty: 4.0,
        direction,
        unit_cost: 5.0,
        warehouse_id: None,
        ref_doc: Some("SM-1".to_string()),
        posting_date: "2026-02-01".to_string(),
    }
}

#[test]
fn test_stock_out_posts_cogs_against_inventory() {
    let draft = stock::draft(&stock_move(Direction::Out));
    assert_eq!(accounts(&draft), vec![("5010", 20.0, 0.0), ("1200", 0.0, 20.0)]);
    assert_eq!(draft.currency, "MYR");
    assert_eq!(draft.reference_no.as_deref(), Some("SM-1"));
    assert!(journal::create_checked(&draft).is_ok());
}

#[test]
fn test_stock_in_posts_inventory_against_payables() {
    let draft = stock::draft(&stock_move(Direction::In));
    assert_eq!(accounts(&draft), vec![("1200", 20.0, 0.0), ("2010", 0.0, 20.0)]);
    assert!(journal::create_checked(&draft).is_ok());
}

fn invoice(tax: f64) -> InvoicePostedPayload {
    InvoicePostedPayload {
        invoice_id: "SI-1".to_string(),
        posting_date: "2026-02-01".to_string(),
        company_id: "co-1".to_string(),
        customer_id: "cust-1".to_string(),
        currency: "MYR".to_string(),
        subtotal: 100.0,
        tax,
        total: 100.0 + tax,
    }
}

#[test]
fn test_invoice_with_tax_credits_output_tax() {
    let draft = sales::invoice_draft(&invoice(6.0));
    assert_eq!(
        accounts(&draft),
        vec![("1310", 106.0, 0.0), ("4010", 0.0, 100.0), ("2160", 0.0, 6.0)]
    );
    assert!(journal::create_checked(&draft).is_ok());
}

#[test]
fn test_invoice_without_tax_has_two_lines() {
    let draft = sales::invoice_draft(&invoice(0.0));
    assert_eq!(draft.lines.len(), 2);
}

fn receipt(method: PaymentMethod, bank: Option<&str>) -> CashReceiptPostedPayload {
    CashReceiptPostedPayload {
        receipt_id: "CR-1".to_string(),
        posting_date: "2026-02-02".to_string(),
        company_id: "co-1".to_string(),
        customer_id: "cust-1".to_string(),
        currency: "MYR".to_string(),
        amount: 106.0,
        method,
        bank_account_id: bank.map(str::to_string),
        invoice_id: Some("SI-1".to_string()),
    }
}

#[test]
fn test_cash_receipt_picks_cash_or_bank_account() {
    let cash = sales::cash_receipt_draft(&receipt(PaymentMethod::Cash, Some("1020")));
    assert_eq!(accounts(&cash)[0].0, "1010");

    let default_bank = sales::cash_receipt_draft(&receipt(PaymentMethod::Bank, None));
    assert_eq!(accounts(&default_bank)[0].0, "1020");

    let other_bank = sales::cash_receipt_draft(&receipt(PaymentMethod::Bank, Some("1021")));
    assert_eq!(accounts(&other_bank)[0].0, "1021");
    assert_eq!(accounts(&other_bank)[1], ("1310", 0.0, 106.0));

    // Crediting receivables is allowed because the receipt is a trusted source.
    assert!(journal::create_checked(&default_bank).is_ok());
}

#[test]
fn test_bill_debits_lines_and_input_tax() {
    let bill = BillPostedPayload {
        id: "PB-1".to_string(),
        bill_no: "B-100".to_string(),
        posting_date: "2026-02-03".to_string(),
        company_id: "co-1".to_string(),
        supplier_id: None,
        currency: "MYR".to_string(),
        subtotal: 80.0,
        tax_amount: 4.8,
        total: 84.8,
        lines: vec![
            BillLine {
                account_id: "5100".to_string(),
                amount: 50.0,
                memo: None,
            },
            BillLine {
                account_id: "1200".to_string(),
                amount: 30.0,
                memo: Some("Packaging".to_string()),
            },
        ],
    };
    let draft = purchases::bill_draft(&bill);
    assert_eq!(
        accounts(&draft),
        vec![
            ("5100", 50.0, 0.0),
            ("1200", 30.0, 0.0),
            ("1170", 4.8, 0.0),
            ("2010", 0.0, 84.8)
        ]
    );
    assert_eq!(draft.lines[0].memo.as_deref(), Some("B-100 expense"));
    assert_eq!(draft.lines[1].memo.as_deref(), Some("Packaging"));
    assert!(journal::create_checked(&draft).is_ok());
}

#[test]
fn test_payment_clears_payables_as_contra() {
    let payment = PaymentMadePayload {
        id: "PP-1".to_string(),
        payment_no: "PAY-7".to_string(),
        posting_date: "2026-02-04".to_string(),
        company_id: "co-1".to_string(),
        supplier_id: None,
        currency: "MYR".to_string(),
        amount: 84.8,
        method: PaymentMethod::Bank,
        bank_account_id: None,
        bill_no: None,
        memo: None,
    };
    let draft = purchases::payment_made_draft(&payment);
    assert_eq!(accounts(&draft), vec![("2010", 84.8, 0.0), ("1020", 0.0, 84.8)]);
    assert_eq!(draft.lines[0].memo.as_deref(), Some("Clear AP"));
    assert_eq!(draft.lines[1].memo.as_deref(), Some("Payment PAY-7"));
    assert_eq!(draft.allow_opposite_normal_balance, Some(true));
    assert!(journal::create_checked(&draft).is_ok());
}

#[test]
fn test_payrun_splits_gross_into_net_and_epf() {
    let payrun = PayrunPostedPayload {
        id: "PR-1".to_string(),
        company_id: "co-1".to_string(),
        currency: "MYR".to_string(),
        posting_date: "2026-02-28".to_string(),
        reference_no: None,
        totals: PayrunTotals {
            total_gross: 5000.0,
            total_employee_epf: 550.0,
            total_net_payable: 4450.0,
        },
    };
    let draft = payroll::draft(&payrun);
    assert_eq!(
        accounts(&draft),
        vec![("5200", 5000.0, 0.0), ("2030", 0.0, 4450.0), ("2130", 0.0, 550.0)]
    );
    assert_eq!(draft.reference_no.as_deref(), Some("PR-1"));
    assert!(journal::create_checked(&draft).is_ok());
}
