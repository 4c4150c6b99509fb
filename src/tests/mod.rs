
mod golden_tests;
mod random_tests;
