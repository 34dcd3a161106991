pub mod dashboard;
pub mod lookup;

pub use dashboard::dashboard;
pub use lookup::lookup_domain;
