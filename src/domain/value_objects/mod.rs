mod mobile_number;

pub use mobile_number::*;
