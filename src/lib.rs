pub mod error;

pub mod disk;
pub mod paging;

pub mod config;
pub mod format;
pub mod playback;
pub mod validate;
