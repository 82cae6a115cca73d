pub mod ports;
pub mod query;
pub mod sections;
