//! Yatra Application Library
//!
//! Resource modules for the Northeast India & Sikkim travel API:
//! destinations, trip packages, bookings, and the catalogue seed.

pub mod modules;
