pub mod entries;
pub mod init;
pub mod insights;
pub mod maintenance;
pub mod misc;
