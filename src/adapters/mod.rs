pub mod forecast_io;
pub mod slack;
