pub mod alias;
pub mod api;
pub mod browser;
pub mod proxy;
pub mod state;
pub mod views;
