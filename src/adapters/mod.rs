// Adapters layer: concrete implementations of the domain ports.

pub mod process;
pub mod renderer;

pub use process::SystemRunner;
pub use renderer::try_load_renderer;
