pub mod bundle;
pub mod common;
pub mod render_context;

pub use crate::domain::DomainError;
pub use bundle::{Artifact, Bundle};
pub use render_context::RenderContext;
