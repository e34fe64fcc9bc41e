mod scroll;
mod session;

pub use scroll::{scroll_until_idle, ScrollSettings, ScrollSurface, TabSurface};
pub use session::launch;
