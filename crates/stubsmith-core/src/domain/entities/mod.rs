pub mod project;
pub mod target;
pub mod template;

pub use project::{ProjectLayout, ProjectRoot};
pub use target::{GenerationTarget, compute_display_path};
pub use template::{RenderContext, Template, substitute_placeholders};
