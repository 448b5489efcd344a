mod feed_tests;
mod reminder_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - normalizer_tests: raw calendar entries into canonical events
// - feed_tests: classification, month grouping and section assembly
// - reminder_tests: the reminder ledger against mock store and scheduler
// - screen_tests: view-state transitions for the app's screens
