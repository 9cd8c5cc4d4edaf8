pub mod constants;
pub mod dashboard;
pub mod nav_item;
pub mod trip;
pub mod user;
