// Careers Job Monitor - Core
//
// Scrapes a careers listing page, compares the jobs against the last saved
// snapshot and reports additions and removals to Telegram.
//
// Infrastructure lives in kernel/, business rules in domains/listings/,
// invocation surfaces in server/.

pub mod config;
pub mod domains;
pub mod error;
pub mod kernel;
pub mod server;

pub use config::*;
pub use error::MonitorError;
