// Defaults and fixed values
//
// Config falls back to these when neither the config file nor the
// environment sets a value. The route is shared by the server and the
// HTTP client.

/// Default bind address for `sparkup serve` (localhost only).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:4000";

/// Default base URL the wizard posts to.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:4000";

/// Default request timeout for the summary call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the summary endpoint, relative to the base URL.
pub const BRAND_ROUTE: &str = "/brand";

/// Largest request body the server accepts.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Directory under the home directory holding config and logs.
pub const CONFIG_DIR_NAME: &str = ".sparkup";

/// Environment overrides
pub const ENV_BIND_ADDRESS: &str = "SPARKUP_BIND_ADDRESS";
pub const ENV_SERVER_URL: &str = "SPARKUP_SERVER_URL";
pub const ENV_TIMEOUT_SECS: &str = "SPARKUP_TIMEOUT_SECS";
