pub mod archive;
pub mod storage;

// Re-export the persistence surface for convenient access
pub use archive::{parse_import, ExportArchive, ImportArchive, ImportError, ImportPreview};
pub use storage::{
    clear_deals, load_deals, save_deals, JsonFileBackend, MemoryBackend, StorageBackend,
};
