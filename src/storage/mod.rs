pub mod file;
pub mod ui_cache;

pub use ui_cache::UiCache;
