//! Tests for progress display coordination

#[cfg(test)]
mod tests {
    use tilemason::io::progress::ProgressManager;

    // Tests the per-project display for a small run
    #[test]
    fn test_small_run_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);
        for project in ["venice", "agra"] {
            manager.start_project(project, 3);
            for _ in 0..3 {
                manager.tick_image();
            }
            manager.complete_project();
        }
        manager.finish();
    }

    // Tests the collapsed batch display for a large run
    #[test]
    fn test_large_run_collapses_to_batch_bar() {
        let mut manager = ProgressManager::new();
        manager.initialize(50);
        for i in 0..50 {
            manager.start_project(&format!("project{i}"), 1);
            manager.tick_image();
            manager.complete_project();
        }
        manager.finish();
    }

    // Tests that ticks before any project are harmless
    #[test]
    fn test_tick_without_project() {
        let manager = ProgressManager::default();
        manager.tick_image();
        manager.finish();
    }
}
