
mod endpoint_tests;
