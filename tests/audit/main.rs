
mod endpoint_tests;
mod in_memory_repository_tests;
