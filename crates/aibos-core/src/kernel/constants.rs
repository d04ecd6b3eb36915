/// Application name
pub const APP_NAME: &str = "AIBOS Kernel";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default run mode
pub const DEFAULT_MODE: &str = "dev";

/// Placeholder tenant used until a real context is configured
pub const DEV_TENANT_ID: &str = "dev-tenant";

/// Placeholder user used until a real context is configured
pub const DEV_USER_ID: &str = "dev-user";

/// Default log filter for the host binary
pub const DEFAULT_LOG_LEVEL: &str = "info";
