mod render;
mod state;

pub use render::render_toasts;
pub use state::{Severity, TOAST_DURATION, TOAST_FADE, Toast, ToastStack};
