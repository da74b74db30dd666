//! The five drawing stages, in the order the pipeline runs them.

pub mod core_field;
pub mod cracks;
pub mod craters;
pub mod glow;
pub mod shell;

pub use core_field::CoreField;
pub use cracks::Cracks;
pub use craters::Craters;
pub use glow::EdgeGlow;
pub use shell::Shell;

use crate::pass::Pass;

/// Core, shell, cracks, craters, glow: each overwrites the ones before it.
pub fn default_passes() -> Vec<Box<dyn Pass>> {
    vec![
        Box::new(CoreField),
        Box::new(Shell),
        Box::new(Cracks),
        Box::new(Craters),
        Box::new(EdgeGlow),
    ]
}
