pub mod config;
pub mod db;
pub mod error;
pub mod server;

mod utils;

pub use config::Config;
pub use db::Store;
pub use error::{ErrorResponder, PantryError};
