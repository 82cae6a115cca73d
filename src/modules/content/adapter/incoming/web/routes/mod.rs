pub mod get_portfolio;
pub mod get_section;

pub use get_portfolio::get_portfolio_handler;
pub use get_section::get_section_handler;
