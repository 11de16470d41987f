//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod cloud_backup_repo;
pub mod tag_repo;
pub mod work_repo;

pub use cloud_backup_repo::CloudBackupRepo;
pub use tag_repo::TagRepo;
pub use work_repo::WorkRepo;
