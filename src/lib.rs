// Sparkup - brand generator wizard and summary service
// Library exports

pub mod brand;
pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod server;
pub mod wizard;
