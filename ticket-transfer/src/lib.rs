//! Train ticket transfer finder.
//!
//! Queries remaining tickets for the two legs of a journey with one change,
//! keeps the trips that can actually be booked, and pairs them up into
//! connections whose layover falls inside a configured window.

pub mod domain;
pub mod filter;
pub mod kyfw;
pub mod planner;
pub mod query;
pub mod report;
pub mod stations;
