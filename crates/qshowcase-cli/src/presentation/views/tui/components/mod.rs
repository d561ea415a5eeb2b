mod content;
mod sidebar;

pub use content::ContentComponent;
pub use sidebar::{SidebarAction, SidebarComponent};
