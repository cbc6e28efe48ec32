mod transport;
mod use_cases;

pub use transport::build_transport;
pub use use_cases::UseCases;
