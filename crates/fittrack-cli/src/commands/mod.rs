pub mod process;
pub mod show;
