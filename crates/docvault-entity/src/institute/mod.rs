//! Institute entity.

pub mod model;

pub use model::{CreateInstitute, Institute, InstituteProfile};
