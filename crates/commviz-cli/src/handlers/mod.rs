pub mod ask;
pub mod complete;
pub mod describe;
pub mod init;
pub mod list;
pub mod progress;
pub mod show;
