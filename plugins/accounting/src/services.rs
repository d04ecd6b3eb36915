use aibos_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::coa::{self, Account, AccountType};
use crate::journal::{self, JournalEntryCreated, JournalEntryDraft};

pub const CREATE_JOURNAL_ENTRY: &str = "accounting.createJournalEntry";
pub const GET_COA_LIST: &str = "accounting.getCOAList";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoaListQuery {
    pub company_id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for CoaListQuery {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Issues::new();
        issues.non_empty(&self.company_id, "companyId");
        issues.into_vec()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoaList {
    pub accounts: Vec<Account>,
}

impl Validate for CoaList {}

pub fn create_journal_entry() -> ServiceDef {
    ServiceDef::new(CREATE_JOURNAL_ENTRY)
        .description("Creates a balanced journal entry draft")
        .input_schema(schema::<JournalEntryDraft>())
        .output_schema(schema::<JournalEntryCreated>())
        .handler(typed_handler(|draft: JournalEntryDraft| {
            let created = journal::create(&draft);
            log::debug!(
                "Drafted journal {} for {} ({} line(s))",
                created.id,
                draft.company_id,
                draft.lines.len()
            );
            Ok::<_, ServiceError>(created)
        }))
}

pub fn get_coa_list() -> ServiceDef {
    ServiceDef::new(GET_COA_LIST)
        .description("Lists chart of accounts, optionally filtered by type and status")
        .input_schema(schema::<CoaListQuery>())
        .output_schema(schema::<CoaList>())
        .handler(typed_handler(|query: CoaListQuery| {
            Ok::<_, ServiceError>(CoaList {
                accounts: coa::list(query.account_type, query.is_active),
            })
        }))
}
