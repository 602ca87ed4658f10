pub mod detection;
pub mod manifold;
pub mod resolution;
pub mod response;

// Re-export key types
pub use detection::*;
pub use manifold::{Collider, Contact};
pub use resolution::*;
pub use response::*;
