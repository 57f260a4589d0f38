pub mod catch_all;
pub mod list;
pub mod view;
