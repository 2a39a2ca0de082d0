// Same text as strerror(ETIME) on linux.
pub const DEFAULT_TIMEOUT_MESSAGE: &str = "Timer expired";

// Name of the field the method-bound wrapper reads its duration from.
pub const TIMEOUT_TIMER_FIELD: &str = "timeout_timer";

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const JSON_INDENT: &[u8] = b"    ";
