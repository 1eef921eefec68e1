pub mod locate;
pub mod show;
