pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod resolve;
pub mod save_name;
pub mod share_link;
pub mod transfer;
