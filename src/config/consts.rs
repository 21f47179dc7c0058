// src/config/consts.rs

// Net config
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const MAIN_PEP_URL: &str = "https://peps.python.org/";
pub const USER_AGENT: &str = concat!("docs_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const CACHE_DIR: &str = ".store/http_cache";

// Artifacts (relative to AppOptions::base_dir)
pub const RESULTS_DIR: &str = "results";
pub const DOWNLOADS_DIR: &str = "downloads";
pub const LOGS_DIR: &str = "logs";
pub const LOG_FILE: &str = "parser.log";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

// PEP index
/// Preview code → acceptable full statuses, in enumeration order.
/// `None` is the empty code (no second letter in the listing marker).
pub const EXPECTED_STATUS: &[(Option<char>, &[&str])] = &[
    (Some('A'), &["Active", "Accepted"]),
    (Some('D'), &["Deferred"]),
    (Some('F'), &["Final"]),
    (Some('P'), &["Provisional"]),
    (Some('R'), &["Rejected"]),
    (Some('S'), &["Superseded"]),
    (Some('W'), &["Withdrawn"]),
    (None, &["Draft", "Active"]),
];
