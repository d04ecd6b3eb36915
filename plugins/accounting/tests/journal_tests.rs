use aibos_accounting::journal::{self, JournalEntryDraft, JournalLine, JournalStatus};
use aibos_core::prelude::check;

fn draft(lines: Vec<JournalLine>) -> JournalEntryDraft {
    JournalEntryDraft {
        posting_date: "2026-01-15".to_string(),
        company_id: "co-1".to_string(),
        currency: "MYR".to_string(),
        lines,
        ..JournalEntryDraft::default()
    }
}

#[test]
fn test_balanced_entry_is_created_as_draft() {
    let entry = draft(vec![
        JournalLine::debit("5100", 120.0, "Stationery"),
        JournalLine::credit("2010", 120.0, "Supplier"),
    ]);
    let created = journal::create_checked(&entry).unwrap();
    assert!(created.id.starts_with("je_"));
    assert_eq!(created.total_debit, 120.0);
    assert_eq!(created.total_credit, 120.0);
    assert_eq!(created.status, JournalStatus::Draft);
}

#[test]
fn test_ids_are_unique() {
    let entry = draft(vec![
        JournalLine::debit("5100", 1.0, "a"),
        JournalLine::credit("2010", 1.0, "b"),
    ]);
    assert_ne!(journal::create(&entry).id, journal::create(&entry).id);
}

#[test]
fn test_unbalanced_entry_is_rejected() {
    let entry = draft(vec![
        JournalLine::debit("5100", 100.0, "a"),
        JournalLine::credit("2010", 90.0, "b"),
    ]);
    let err = check(&entry).unwrap_err();
    assert!(err.mentions("Journal must balance"));
}

#[test]
fn test_zero_totals_do_not_balance() {
    let entry = draft(vec![
        JournalLine::debit("5100", 0.0, "a"),
        JournalLine::credit("2010", 0.0, "b"),
    ]);
    assert!(check(&entry).unwrap_err().mentions("Journal must balance"));
}

#[test]
fn test_needs_two_lines() {
    let entry = draft(vec![JournalLine::debit("5100", 10.0, "a")]);
    let err = check(&entry).unwrap_err();
    assert!(err.has_issue_at("lines"));
}

#[test]
fn test_line_with_both_sides_is_rejected() {
    let mut both = JournalLine::debit("5100", 10.0, "a");
    both.credit = 10.0;
    let entry = draft(vec![both, JournalLine::credit("2010", 0.0, "b")]);
    let err = check(&entry).unwrap_err();
    assert!(err.has_issue_at("lines.0"));
    assert!(err.mentions("A line cannot have both debit and credit."));
}

#[test]
fn test_negative_amount_is_rejected() {
    let entry = draft(vec![
        JournalLine::debit("5100", -5.0, "a"),
        JournalLine::credit("2010", -5.0, "b"),
    ]);
    let err = check(&entry).unwrap_err();
    assert!(err.has_issue_at("lines.0.debit"));
    assert!(err.has_issue_at("lines.1.credit"));
}

#[test]
fn test_required_header_fields() {
    let mut entry = draft(vec![
        JournalLine::debit("5100", 1.0, "a"),
        JournalLine::credit("2010", 1.0, "b"),
    ]);
    entry.company_id.clear();
    entry.currency.clear();
    let err = check(&entry).unwrap_err();
    assert!(err.has_issue_at("companyId"));
    assert!(err.has_issue_at("currency"));
    assert!(!err.has_issue_at("postingDate"));
}

#[test]
fn test_crediting_debit_normal_account_is_a_mismatch() {
    // Debiting cash is fine; crediting receivables without the flag is not.
    let entry = draft(vec![
        JournalLine::debit("1010", 50.0, "cash"),
        JournalLine::credit("1310", 50.0, "receivable"),
    ]);
    let err = check(&entry).unwrap_err();
    assert!(err.mentions("Line normal balance mismatch"));
    assert!(err.mentions("normal balance"));
    assert!(err.has_issue_at("lines.1"));
}

#[test]
fn test_opposite_balance_allowed_by_flag() {
    let mut entry = draft(vec![
        JournalLine::debit("2010", 50.0, "clear AP"),
        JournalLine::credit("1020", 50.0, "bank"),
    ]);
    assert!(check(&entry).is_err());
    entry.allow_opposite_normal_balance = Some(true);
    assert!(check(&entry).is_ok());
}

#[test]
fn test_opposite_balance_allowed_for_trusted_source_event() {
    let mut entry = draft(vec![
        JournalLine::debit("5010", 15.0, "cogs"),
        JournalLine::credit("1200", 15.0, "inventory"),
    ]);
    entry.source_event = Some("inventory.STOCK_MOVED".to_string());
    assert!(check(&entry).is_ok());

    entry.source_event = Some("sales.INVOICE_POSTED".to_string());
    assert!(check(&entry).is_err());
}

#[test]
fn test_unknown_accounts_skip_normal_balance_check() {
    let entry = draft(vec![
        JournalLine::debit("9999", 10.0, "a"),
        JournalLine::credit("9998", 10.0, "b"),
    ]);
    assert!(check(&entry).is_ok());
}

#[test]
fn test_balance_uses_tolerance() {
    let entry = draft(vec![
        JournalLine::debit("5100", 0.1, "a"),
        JournalLine::debit("5100", 0.2, "b"),
        JournalLine::credit("2010", 0.3, "c"),
    ]);
    assert!(check(&entry).is_ok());
}
