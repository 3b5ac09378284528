mod directories_tests;
mod features_tests;
