pub mod loading;
pub mod page_header;
pub mod sidebar;

// Re-exports for convenience
pub use loading::*;
pub use page_header::*;
pub use sidebar::*;
