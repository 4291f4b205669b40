pub mod lookup_handlers;
pub mod page_handlers;

pub use lookup_handlers::*;
pub use page_handlers::*;
