pub mod repository_registry;
