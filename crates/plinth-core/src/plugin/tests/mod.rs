mod builtin_tests;
mod registry_tests;
