//! Atom data loads with a known layout.

mod gps0;

pub use gps0::{Gps0, Gps0Iter, TimeZone};
