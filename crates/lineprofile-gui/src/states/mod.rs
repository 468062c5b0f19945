mod region;
mod ui;
mod viewport;

pub use region::RegionDrag;
pub use ui::UIState;
pub use viewport::ViewportState;
