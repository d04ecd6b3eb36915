//! Chart of accounts.
//!
//! The chart is a fixed in-memory list until ledger storage exists. Account
//! codes follow the MFRS layout: 1xxx assets, 2xxx liabilities, 3xxx equity,
//! 4xxx revenue, 5xxx expenses.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    Debit,
    Credit,
}

impl NormalBalance {
    pub fn as_str(self) -> &'static str {
        match self {
            NormalBalance::Debit => "debit",
            NormalBalance::Credit => "credit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub category: String,
    pub normal_balance: NormalBalance,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

pub const PETTY_CASH: &str = "1010";
pub const BANK_CURRENT: &str = "1020";
pub const INPUT_TAX_RECEIVABLE: &str = "1170";
pub const INVENTORIES: &str = "1200";
pub const TRADE_RECEIVABLES: &str = "1310";
pub const TRADE_PAYABLES: &str = "2010";
pub const NET_SALARY_PAYABLE: &str = "2030";
pub const EPF_PAYABLE: &str = "2130";
pub const OUTPUT_TAX_PAYABLE: &str = "2160";
pub const SHARE_CAPITAL: &str = "3010";
pub const SALES_REVENUE: &str = "4010";
pub const COST_OF_GOODS_SOLD: &str = "5010";
pub const OFFICE_SUPPLIES: &str = "5100";
pub const SALARIES_AND_WAGES: &str = "5200";

const CHART: &[(&str, &str, AccountType, &str)] = &[
    (PETTY_CASH, "Petty Cash", AccountType::Asset, "Current Asset"),
    (BANK_CURRENT, "Bank - Current Account", AccountType::Asset, "Current Asset"),
    (INPUT_TAX_RECEIVABLE, "Input Tax Receivable", AccountType::Asset, "Current Asset"),
    (INVENTORIES, "Inventories", AccountType::Asset, "Current Asset"),
    (TRADE_RECEIVABLES, "Trade Receivables", AccountType::Asset, "Current Asset"),
    (TRADE_PAYABLES, "Trade Payables", AccountType::Liability, "Current Liability"),
    (NET_SALARY_PAYABLE, "Net Salary Payable", AccountType::Liability, "Current Liability"),
    (EPF_PAYABLE, "EPF Payable", AccountType::Liability, "Current Liability"),
    (OUTPUT_TAX_PAYABLE, "Output Tax Payable", AccountType::Liability, "Current Liability"),
    (SHARE_CAPITAL, "Share Capital", AccountType::Equity, "Equity"),
    (SALES_REVENUE, "Sales Revenue", AccountType::Revenue, "Operating Revenue"),
    (COST_OF_GOODS_SOLD, "Cost of Goods Sold", AccountType::Expense, "Direct Expense"),
    (OFFICE_SUPPLIES, "Office Supplies", AccountType::Expense, "Operating Expense"),
    (SALARIES_AND_WAGES, "Salaries & Wages", AccountType::Expense, "Operating Expense"),
];

impl AccountType {
    /// Side on which accounts of this type normally carry their balance.
    pub fn normal_balance(self) -> NormalBalance {
        match self {
            AccountType::Asset | AccountType::Expense => NormalBalance::Debit,
            AccountType::Liability | AccountType::Equity | AccountType::Revenue => NormalBalance::Credit,
        }
    }
}

/// Every account in the chart, ordered by code.
pub fn chart() -> Vec<Account> {
    CHART
        .iter()
        .map(|&(id, name, account_type, category)| Account {
            id: id.to_string(),
            name: name.to_string(),
            account_type,
            category: category.to_string(),
            normal_balance: account_type.normal_balance(),
            is_active: true,
            parent_id: None,
        })
        .collect()
}

/// Look up an account by code.
pub fn find(id: &str) -> Option<Account> {
    chart().into_iter().find(|a| a.id == id)
}

/// Accounts matching the optional filters.
pub fn list(account_type: Option<AccountType>, is_active: Option<bool>) -> Vec<Account> {
    chart()
        .into_iter()
        .filter(|a| account_type.is_none_or(|t| a.account_type == t))
        .filter(|a| is_active.is_none_or(|active| a.is_active == active))
        .collect()
}
