// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{article, external, ids, newsroom_snapshot, opinion, with_tags};
#[allow(unused_imports)]
pub use helpers::{create_test_app, create_test_services, get_json, spawn_mock_cms};
