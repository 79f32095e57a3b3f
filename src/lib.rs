pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod view;

pub use config::AppConfig;
pub use view::SchoolListView;
