pub mod carousel;
pub mod catalog;
pub mod launch;
pub mod layout;
pub mod view;

pub use carousel::{CarouselState, Direction, AUTO_ROTATE_MS, TRANSITION_MS};
pub use catalog::{validate_catalog, AppEntry, CatalogError, IconKind, APP_CATALOG};
pub use launch::launch_url;
pub use layout::{icon_layout, IconLayout, ORBIT_RADIUS};
pub use view::{Overlay, ViewState};
