pub const API_BASE: &str = "https://api.monkeytype.com";

pub const AUTH_SCHEME: &str = "ApeKey";
/// What the logs show in place of the real Authorization value.
pub const AUTH_REDACTED: &str = "ApeKey [REDACTED]";

pub const PERSONAL_BESTS_PATH: &str = "/users/personalBests";
pub const RESULTS_PATH: &str = "/results";

// Relay payloads are small JSON documents; anything near this is misuse.
pub const BODY_SIZE_BYTES_UPPERBOUND: usize = 16 * 1024 * 1024;
