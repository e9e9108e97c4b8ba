pub mod error;
pub mod math;
pub mod operations;

pub use error::{FlexpointError, Result};
pub use math::Point2;
pub use operations::analysis::{detect_inflections, simplify};
