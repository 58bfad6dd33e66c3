mod memory_scaffold_store;

pub use memory_scaffold_store::MemoryScaffoldStore;
