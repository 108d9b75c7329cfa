//! Object storage for submitted files.
//!
//! [`ObjectStore`] is what the submission flow depends on; [`MinIOClient`]
//! is the MinIO/S3 implementation used in production.

mod minio_client;
mod object_store;

pub use minio_client::MinIOClient;
pub use object_store::{object_key, ObjectStore};

#[cfg(test)]
pub use object_store::encode_key;
