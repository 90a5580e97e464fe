pub mod rows;
pub mod scroll;
pub mod select;
pub mod show;
