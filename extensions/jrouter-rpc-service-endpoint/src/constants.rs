/// Internal failure detail is withheld from error responses unless enabled.
pub const DEFAULT_SHOW_SERVER_EXCEPTIONS: bool = false;

/// Batches are unbounded unless a limit is configured.
pub const DEFAULT_BATCH_REQUEST_LIMIT: Option<usize> = None;

/// Requests run without a deadline unless one is configured.
pub const DEFAULT_REQUEST_TIMEOUT_MS: Option<u64> = None;
