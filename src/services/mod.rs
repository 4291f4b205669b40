mod lookup_service_impl;

pub use lookup_service_impl::LookupServiceImpl;
