//! Entity structs (database rows) and DTOs (request/response payloads).

pub mod cloud_backup;
pub mod tag;
pub mod work;
