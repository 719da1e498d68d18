//! Names shared across the crate.

/// Overrides the base directory of [`Root::Documents`](crate::directory::Root::Documents).
pub const DOCUMENTS_DIR_ENV: &str = "FILEHELPER_DOCUMENTS_DIR";

/// Overrides the base directory of [`Root::ApplicationSupport`](crate::directory::Root::ApplicationSupport).
pub const APP_SUPPORT_DIR_ENV: &str = "FILEHELPER_APP_SUPPORT_DIR";

/// Overrides the base directory of [`Root::Caches`](crate::directory::Root::Caches).
pub const CACHES_DIR_ENV: &str = "FILEHELPER_CACHES_DIR";
