pub mod config;
pub mod error;
pub mod lane;
pub mod layout;
pub mod offset;
pub mod reduce;

pub use error::*;
pub use lane::Lane;
pub use layout::{Coords, Layout};
pub use offset::{Size, checked_flatten, flatten, flatten_slices};
