
mod command_service_tests;
mod in_memory_repository_tests;
