pub mod grid;
pub mod io;

pub use self::grid::{EdgeMask, Grid, SampleGrid};
