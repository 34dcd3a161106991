pub mod lookup;

pub use lookup::{LookupParams, LookupResponse, EMPTY_DOMAIN_MESSAGE, INVALID_DOMAIN_MESSAGE};
