mod read_points;

pub use read_points::{parse_points, ReadPoints};
