pub mod access;
pub mod config;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod page_state;
pub mod resolver;
pub mod session;

pub use access::*;
pub use config::*;
pub use error::*;
pub use menu::*;
pub use navigation::*;
pub use page_state::*;
pub use resolver::*;
pub use session::*;
