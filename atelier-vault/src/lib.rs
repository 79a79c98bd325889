pub mod backup;
mod store;
mod vault;

pub use store::Store;
pub use vault::Vault;

/// Per-user data directory, resolved under the home directory.
pub const ATELIER_FOLDER: &str = ".atelier";

/// The single snapshot document inside the data directory.
pub const SNAPSHOT_FILE: &str = "portfolio.json";

/// Soft budget for the serialized snapshot, surfaced as a storage gauge
/// in the admin surface. Mirrors the 5 MiB quota of the original host.
pub const SNAPSHOT_BUDGET_BYTES: usize = 5 * 1024 * 1024;
