pub mod driver_response;

pub use driver_response::DriverResponse;
