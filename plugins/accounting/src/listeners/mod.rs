//! Auto-drafted journals for postings in other modules.
//!
//! Each listener decodes its event, maps it onto a journal draft, runs the
//! draft through the journal entry rules and announces the result as
//! `accounting.JOURNAL_CREATED`. Failures are logged and swallowed so one
//! bad posting never blocks the emitting module or later listeners.
use std::sync::{Mutex, PoisonError};

use aibos_core::kernel::EventsLane;
use aibos_core::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::journal::{self, JournalEntryCreated, JournalEntryDraft};
use crate::{JOURNAL_CREATED, MODULE_ID};

pub mod payroll;
pub mod purchases;
pub mod sales;
pub mod stock;

/// The accounting subscriptions held by one module instance. Registering
/// again disposes the previous set first.
#[derive(Debug, Default)]
pub struct Listeners {
    active: Mutex<Vec<Subscription>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe every accounting listener, replacing any earlier set.
    pub fn register(&self, lanes: &Lanes) -> Result<(), ListenerError> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        let stale = active.drain(..).filter(|s| s.dispose()).count();
        if stale > 0 {
            log::debug!("Accounting disposed {} stale subscription(s)", stale);
        }

        let events = lanes.events();
        let emitter = events.emitter();
        active.extend([
            subscribe(events, &emitter, stock::STOCK_MOVED, stock::draft),
            subscribe(events, &emitter, sales::INVOICE_POSTED, sales::invoice_draft),
            subscribe(events, &emitter, sales::CASH_RECEIPT_POSTED, sales::cash_receipt_draft),
            subscribe(events, &emitter, purchases::BILL_POSTED, purchases::bill_draft),
            subscribe(events, &emitter, purchases::PAYMENT_MADE, purchases::payment_made_draft),
            subscribe(events, &emitter, payroll::PAYRUN_POSTED, payroll::draft),
        ]);
        log::debug!("Accounting subscribed to {} event type(s)", active.len());
        Ok(())
    }
}

fn subscribe<P>(
    events: &EventsLane,
    emitter: &EventEmitter,
    event_type: &'static str,
    map: fn(&P) -> JournalEntryDraft,
) -> Subscription
where
    P: DeserializeOwned + 'static,
{
    let emitter = emitter.clone();
    events.subscribe(event_type, move |event| {
        match draft_journal(event, map) {
            Ok((draft, created)) => {
                log::info!(
                    "Auto-drafted journal {} from {} (DR {:.2} / CR {:.2})",
                    created.id,
                    event_type,
                    created.total_debit,
                    created.total_credit
                );
                announce(&emitter, event_type, &draft, &created);
            }
            Err(err) => log::error!("Failed to draft journal from {}: {}", event_type, err),
        }
        Ok(())
    })
}

fn draft_journal<P>(
    event: &KernelEvent,
    map: fn(&P) -> JournalEntryDraft,
) -> Result<(JournalEntryDraft, JournalEntryCreated), ListenerError>
where
    P: DeserializeOwned,
{
    let payload: P = event.payload_as()?;
    let draft = map(&payload);
    let created = journal::create_checked(&draft)
        .map_err(|e| ListenerError::new(format!("JE draft validation failed: {e}")))?;
    Ok((draft, created))
}

fn announce(emitter: &EventEmitter, source_event: &str, draft: &JournalEntryDraft, created: &JournalEntryCreated) {
    let payload = json!({
        "journal": created,
        "referenceNo": draft.reference_no,
        "sourceEvent": source_event,
    });
    if let Err(err) = emitter.publish_from(MODULE_ID, JOURNAL_CREATED, payload) {
        log::error!("Failed to announce journal {}: {}", created.id, err);
    }
}
