/// Root of the published course calendar tree
pub const DEFAULT_BASE_URL: &str = "http://fides.ccs.yorku.ca/courseicals/";

/// Run-wide settings, built once from the command line and threaded through
#[derive(Clone, Debug)]
pub struct Config {
    /// Academic year whose subject folders are crawled
    pub target_year: i32,

    /// Root URL every fetch path is appended to
    pub base_url: String,

    /// Seconds a fetched response stays cached, 0 disables the cache
    pub cache_expiry: u64,
}
