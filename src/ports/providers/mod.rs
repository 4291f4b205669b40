mod lookup_provider;

pub use lookup_provider::LookupProvider;
