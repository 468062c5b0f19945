/// Active pointer drag on the profile region, in display-image pixels.
#[derive(Clone, Copy, Debug)]
pub enum RegionDrag {
    /// Offset from the pointer to the region's top-left corner.
    Move { offset: egui::Vec2 },
    /// The opposite corner stays pinned while the pointer moves.
    Resize { anchor: egui::Pos2 },
}
