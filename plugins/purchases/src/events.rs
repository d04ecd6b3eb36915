use aibos_core::prelude::*;

use crate::types::{PostedBill, PostedPayment};
use crate::MODULE_ID;

pub const BILL_POSTED: &str = "purchases.BILL_POSTED";
pub const PAYMENT_MADE: &str = "purchases.PAYMENT_MADE";

pub fn emit_bill_posted<L: EventLane>(lane: &L, bill: &PostedBill) -> Result<(), EventSystemError> {
    lane.emit_typed(MODULE_ID, BILL_POSTED, bill)
}

pub fn emit_payment_made<L: EventLane>(lane: &L, payment: &PostedPayment) -> Result<(), EventSystemError> {
    lane.emit_typed(MODULE_ID, PAYMENT_MADE, payment)
}
