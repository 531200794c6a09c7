use std::sync::Arc;

use scoreboard::{InMemoryActivityRepository, ScoreboardService};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub service: ScoreboardService,
}

impl TestSetup {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryActivityRepository::new());
        Self {
            service: ScoreboardService::new(repository),
        }
    }
}

impl Default for TestSetup {
    fn default() -> Self {
        Self::new()
    }
}
