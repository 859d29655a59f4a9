pub mod s3_object_storage;

pub use s3_object_storage::S3ObjectStorage;
