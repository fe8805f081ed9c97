// ============================================================================
// Search Module
// Sequential scans over borrowed slices
// ============================================================================

mod linear;

pub use linear::{linear_search_all_indices, linear_search_first};
