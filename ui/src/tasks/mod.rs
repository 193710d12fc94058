//! Interactive widgets with simulated asynchronous behaviour.

pub mod feedback;
pub mod pest_scan;
