mod object_storage;
mod table_client;

pub use object_storage::{ObjectStorage, UploadFile};
pub use table_client::{RemoteError, TableClient};
