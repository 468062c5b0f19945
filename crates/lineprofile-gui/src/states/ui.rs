use super::region::RegionDrag;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Calibration or display settings changed since the display was derived.
    pub display_stale: bool,

    /// Region drag in progress.
    pub region_drag: Option<RegionDrag>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
