mod lookup_errors;
mod validation_errors;

pub use lookup_errors::*;
pub use validation_errors::*;
