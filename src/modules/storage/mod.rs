//! Storage module for media files
//!
//! Provides the MinIO/S3-compatible client backing ad and article images,
//! plus the public URL derivation for image records.

mod media_url;
mod minio_client;

pub use media_url::MediaUrlResolver;
pub use minio_client::MinIOClient;
