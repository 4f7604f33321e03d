pub mod transform;

pub use transform::{Locatable, Transform};
