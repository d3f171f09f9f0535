//! Navigation domain module.
//!
//! Controllers do not move between pages themselves. They emit
//! [`NavigationIntent`]s, either returned to the host or pushed to a
//! [`Navigator`], and the host maps them to routes through the
//! [`RouteTable`].

mod intent;
mod routes;

pub use intent::{Navigation, NavigationIntent, NavigationLog, Navigator};
pub use routes::RouteTable;
