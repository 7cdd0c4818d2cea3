pub mod frame;
pub mod instance;

// Re-export key types for convenient access
pub use frame::{RenderFrame, ViewState};
pub use instance::{build_render_buffer, RenderBuffer, RenderInstance};
