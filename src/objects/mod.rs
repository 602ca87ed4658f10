pub mod body;
pub mod boundary;

pub use body::Body;
pub use boundary::Boundary;
