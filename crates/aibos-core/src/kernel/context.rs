use serde::{Deserialize, Serialize};

use crate::kernel::constants::{DEV_TENANT_ID, DEV_USER_ID};

/// Tenant and user a lane acts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelContext {
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl KernelContext {
    pub fn new(tenant_id: &str) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    /// The development placeholder context.
    pub fn dev() -> Self {
        Self::new(DEV_TENANT_ID).with_user(DEV_USER_ID)
    }
}

impl Default for KernelContext {
    fn default() -> Self {
        Self::dev()
    }
}
