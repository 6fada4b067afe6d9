//! Santander Cycles bike point checker.
//!
//! Answers: "how many bikes are free at this docking station right now?"
//! A station name is resolved against the TfL BikePoint search endpoint,
//! then the live record for the resolved id is fetched and its bike count
//! read from the property list.

pub mod availability;
pub mod tfl;
pub mod web;
