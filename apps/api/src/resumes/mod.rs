// Resume intake and storage: multipart upload, best-effort S3 archiving,
// and the Postgres-backed resume store.

pub mod archive;
pub mod handlers;
pub mod store;
