use serde::{Deserialize, Serialize};

use crate::coa::{COST_OF_GOODS_SOLD, INVENTORIES, TRADE_PAYABLES};
use crate::journal::{JournalEntryDraft, JournalLine};

pub const STOCK_MOVED: &str = "inventory.STOCK_MOVED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

/// The parts of an inventory movement the ledger needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovedPayload {
    pub company_id: String,
    pub item_code: String,
    pub qty: f64,
    pub direction: Direction,
    pub unit_cost: f64,
    #[serde(default)]
    pub warehouse_id: Option<String>,
    #[serde(default)]
    pub ref_doc: Option<String>,
    pub posting_date: String,
}

/// OUT posts DR COGS / CR Inventories; IN posts DR Inventories / CR Trade
/// Payables.
pub fn draft(p: &StockMovedPayload) -> JournalEntryDraft {
    let total = p.qty * p.unit_cost;
    let lines = match p.direction {
        Direction::Out => {
            let memo = format!("{} OUT", p.item_code);
            vec![
                JournalLine::debit(COST_OF_GOODS_SOLD, total, memo.clone()),
                JournalLine::credit(INVENTORIES, total, memo),
            ]
        }
        Direction::In => {
            let memo = format!("{} IN", p.item_code);
            vec![
                JournalLine::debit(INVENTORIES, total, memo.clone()),
                JournalLine::credit(TRADE_PAYABLES, total, memo),
            ]
        }
    };
    JournalEntryDraft {
        posting_date: p.posting_date.clone(),
        company_id: p.company_id.clone(),
        currency: "MYR".to_string(),
        reference_no: p.ref_doc.clone(),
        user_remark: Some(format!("Auto-draft from stock movement: {}", p.item_code)),
        lines,
        source_event: Some(STOCK_MOVED.to_string()),
        ..JournalEntryDraft::default()
    }
}
