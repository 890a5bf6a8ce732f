//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod query;
pub mod routes;
pub mod watch;

pub use args::{CheckArgs, Cli, Commands, QueryArgs, RoutesArgs, WatchArgs};
