pub mod configure;
pub mod list;
pub mod show;
