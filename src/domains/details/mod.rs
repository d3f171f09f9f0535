//! Details domain module.
//!
//! A [`ResourceDetails`] loads one record for a detail page. When the record
//! cannot be shown it notifies the user and sends the host back to the list.

mod controller;

pub use controller::ResourceDetails;
