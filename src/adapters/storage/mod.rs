//! Storage adapters.

mod local_upload_storage;

pub use local_upload_storage::LocalUploadStorage;
