//! delivery-sequencer core
//!
//! Orders a day's delivery stops between fixed start/end locations, trading
//! travel time against soft morning/afternoon preferences.

pub mod traits;
pub mod stop;
pub mod error;
pub mod matrix;
pub mod osrm;
pub mod haversine;
pub mod penalty;
pub mod route;
pub mod construct;
pub mod two_opt;
pub mod solver;
pub mod maps;
