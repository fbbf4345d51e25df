pub mod header;
pub mod menu;
