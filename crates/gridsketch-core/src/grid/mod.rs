use egui::{Pos2, Vec2};
use thiserror::Error;

pub mod screen_helper;

pub use screen_helper::{draw_layout_grid, position_by_grid};

/// Errors reported when grid geometry is given values that would
/// otherwise propagate NaN/infinite unit sizes into every anchor.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("division count must be at least 1, got {0}")]
    InvalidDivision(u32),
    #[error("stage dimension must be finite and positive, got {0}")]
    InvalidStageSize(f32),
}

/// Which corner of a content's bounding box is pinned to the grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAlign {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Opaque handle returned by [`GridView::add_anchor`], used for removal
/// and position lookup instead of content reference identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(u64);

/// A (content, grid coordinate, alignment) binding. The grid owns the
/// resolved pixel position; the content's rendered size is reported by
/// the caller whenever it changes.
#[derive(Debug, Clone)]
pub struct GridAnchor {
    id: AnchorId,
    pub x: i32,
    pub y: i32,
    pub align: GridAlign,
    size: Vec2,
    pos: Pos2,
}

impl GridAnchor {
    pub fn id(&self) -> AnchorId {
        self.id
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Resolved stage-local position, valid after the last
    /// [`GridView::update_anchor_positions`] (or geometry/size setter).
    pub fn pos(&self) -> Pos2 {
        self.pos
    }
}

/// Models a division-based grid over a pixel-sized stage and keeps a
/// registry of anchors pinned to grid cells.
///
/// Unit sizes are recomputed synchronously on every geometry setter and
/// every registered anchor is repositioned in the same call, so resolved
/// positions are never stale with respect to the grid itself. Content
/// size changes must be pushed in through [`GridView::set_anchor_size`].
#[derive(Debug, Clone)]
pub struct GridView {
    stage_width: f32,
    stage_height: f32,
    division_x: u32,
    division_y: u32,
    unit_width: f32,
    unit_height: f32,
    anchors: Vec<GridAnchor>,
    next_id: u64,
}

impl Default for GridView {
    fn default() -> Self {
        // 640x640 with 10x10 divisions, the series' historical default
        Self {
            stage_width: 640.0,
            stage_height: 640.0,
            division_x: 10,
            division_y: 10,
            unit_width: 64.0,
            unit_height: 64.0,
            anchors: Vec::new(),
            next_id: 0,
        }
    }
}

impl GridView {
    pub fn new(
        stage_width: f32,
        stage_height: f32,
        division_x: u32,
        division_y: u32,
    ) -> Result<Self, GridError> {
        let mut grid = Self {
            anchors: Vec::new(),
            next_id: 0,
            ..Self::default()
        };
        grid.set_stage_width(stage_width)?;
        grid.set_stage_height(stage_height)?;
        grid.set_division_x(division_x)?;
        grid.set_division_y(division_y)?;
        Ok(grid)
    }

    pub fn stage_width(&self) -> f32 {
        self.stage_width
    }

    pub fn stage_height(&self) -> f32 {
        self.stage_height
    }

    pub fn division_x(&self) -> u32 {
        self.division_x
    }

    pub fn division_y(&self) -> u32 {
        self.division_y
    }

    /// Pixel width of one grid cell.
    pub fn unit_width(&self) -> f32 {
        self.unit_width
    }

    /// Pixel height of one grid cell.
    pub fn unit_height(&self) -> f32 {
        self.unit_height
    }

    pub fn anchors(&self) -> &[GridAnchor] {
        &self.anchors
    }

    pub fn set_stage_width(&mut self, width: f32) -> Result<(), GridError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GridError::InvalidStageSize(width));
        }
        self.stage_width = width;
        self.calculate_units();
        self.update_anchor_positions();
        Ok(())
    }

    pub fn set_stage_height(&mut self, height: f32) -> Result<(), GridError> {
        if !height.is_finite() || height <= 0.0 {
            return Err(GridError::InvalidStageSize(height));
        }
        self.stage_height = height;
        self.calculate_units();
        self.update_anchor_positions();
        Ok(())
    }

    pub fn set_division_x(&mut self, divisions: u32) -> Result<(), GridError> {
        if divisions == 0 {
            return Err(GridError::InvalidDivision(divisions));
        }
        self.division_x = divisions;
        self.calculate_units();
        self.update_anchor_positions();
        Ok(())
    }

    pub fn set_division_y(&mut self, divisions: u32) -> Result<(), GridError> {
        if divisions == 0 {
            return Err(GridError::InvalidDivision(divisions));
        }
        self.division_y = divisions;
        self.calculate_units();
        self.update_anchor_positions();
        Ok(())
    }

    /// Registers a new anchor at grid cell (x, y). The anchor is not
    /// positioned until the next [`GridView::update_anchor_positions`]
    /// or geometry setter.
    pub fn add_anchor(&mut self, x: i32, y: i32, align: GridAlign, size: Vec2) -> AnchorId {
        let id = AnchorId(self.next_id);
        self.next_id += 1;
        self.anchors.push(GridAnchor {
            id,
            x,
            y,
            align,
            size,
            pos: Pos2::ZERO,
        });
        id
    }

    /// Removes the anchor with the given id. No-op if it was already
    /// removed, so removing twice is harmless.
    pub fn remove_anchor(&mut self, id: AnchorId) {
        if let Some(index) = self.anchors.iter().position(|anchor| anchor.id == id) {
            self.anchors.remove(index);
        }
    }

    /// Updates an anchor's reported content size and re-resolves its
    /// position; right/bottom alignment depends on the current size.
    pub fn set_anchor_size(&mut self, id: AnchorId, size: Vec2) {
        let (unit_width, unit_height) = (self.unit_width, self.unit_height);
        if let Some(anchor) = self.anchors.iter_mut().find(|anchor| anchor.id == id) {
            if anchor.size != size {
                anchor.size = size;
                anchor.pos = Self::resolve(anchor, unit_width, unit_height);
            }
        }
    }

    /// Resolved stage-local position of an anchor, if it is still registered.
    pub fn position(&self, id: AnchorId) -> Option<Pos2> {
        self.anchors
            .iter()
            .find(|anchor| anchor.id == id)
            .map(|anchor| anchor.pos)
    }

    /// Recomputes every anchor's position from its grid coordinate,
    /// alignment, the current unit sizes, and its reported content size.
    pub fn update_anchor_positions(&mut self) {
        let (unit_width, unit_height) = (self.unit_width, self.unit_height);
        for anchor in &mut self.anchors {
            anchor.pos = Self::resolve(anchor, unit_width, unit_height);
        }
    }

    fn resolve(anchor: &GridAnchor, unit_width: f32, unit_height: f32) -> Pos2 {
        let x = match anchor.align {
            GridAlign::TopLeft | GridAlign::BottomLeft => anchor.x as f32 * unit_width,
            GridAlign::TopRight | GridAlign::BottomRight => {
                anchor.x as f32 * unit_width - anchor.size.x
            }
        };
        let y = match anchor.align {
            GridAlign::TopLeft | GridAlign::TopRight => anchor.y as f32 * unit_height,
            GridAlign::BottomLeft | GridAlign::BottomRight => {
                anchor.y as f32 * unit_height - anchor.size.y
            }
        };
        Pos2::new(x, y)
    }

    fn calculate_units(&mut self) {
        self.unit_width = self.stage_width / self.division_x as f32;
        self.unit_height = self.stage_height / self.division_y as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_derived_from_stage_and_divisions() {
        let grid = GridView::new(640.0, 480.0, 10, 8).unwrap();
        assert_eq!(grid.unit_width(), 64.0);
        assert_eq!(grid.unit_height(), 60.0);
        assert!((grid.unit_width() * grid.division_x() as f32 - grid.stage_width()).abs() < 1e-3);
    }

    #[test]
    fn top_left_anchor_lands_on_cell_corner() {
        let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();
        let id = grid.add_anchor(1, 1, GridAlign::TopLeft, Vec2::ZERO);
        grid.update_anchor_positions();
        assert_eq!(grid.position(id), Some(Pos2::new(64.0, 64.0)));
    }

    #[test]
    fn bottom_right_anchor_subtracts_content_size() {
        let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();
        let id = grid.add_anchor(9, 9, GridAlign::BottomRight, Vec2::new(20.0, 10.0));
        grid.update_anchor_positions();
        assert_eq!(grid.position(id), Some(Pos2::new(556.0, 566.0)));
    }

    #[test]
    fn add_anchor_does_not_position_until_update() {
        let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();
        let id = grid.add_anchor(3, 4, GridAlign::TopLeft, Vec2::ZERO);
        assert_eq!(grid.position(id), Some(Pos2::ZERO));
        grid.update_anchor_positions();
        assert_eq!(grid.position(id), Some(Pos2::new(192.0, 256.0)));
    }

    #[test]
    fn geometry_setter_repositions_existing_anchors() {
        let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();
        let id = grid.add_anchor(2, 2, GridAlign::TopLeft, Vec2::ZERO);
        grid.update_anchor_positions();
        grid.set_stage_width(320.0).unwrap();
        assert_eq!(grid.position(id), Some(Pos2::new(64.0, 128.0)));
    }

    #[test]
    fn size_change_repositions_right_aligned_anchor() {
        let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();
        let id = grid.add_anchor(9, 1, GridAlign::TopRight, Vec2::ZERO);
        grid.update_anchor_positions();
        assert_eq!(grid.position(id), Some(Pos2::new(576.0, 64.0)));
        grid.set_anchor_size(id, Vec2::new(40.0, 16.0));
        assert_eq!(grid.position(id), Some(Pos2::new(536.0, 64.0)));
    }

    #[test]
    fn remove_anchor_is_idempotent() {
        let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();
        let id = grid.add_anchor(1, 1, GridAlign::TopLeft, Vec2::ZERO);
        let other = grid.add_anchor(2, 2, GridAlign::TopLeft, Vec2::ZERO);
        grid.remove_anchor(id);
        assert_eq!(grid.position(id), None);
        grid.remove_anchor(id);
        assert_eq!(grid.anchors().len(), 1);
        grid.update_anchor_positions();
        assert_eq!(grid.position(other), Some(Pos2::new(128.0, 128.0)));
    }

    #[test]
    fn invalid_geometry_is_rejected_and_state_unchanged() {
        let mut grid = GridView::new(640.0, 640.0, 10, 10).unwrap();
        assert_eq!(grid.set_division_x(0), Err(GridError::InvalidDivision(0)));
        assert!(matches!(
            grid.set_stage_width(f32::NAN),
            Err(GridError::InvalidStageSize(_))
        ));
        assert_eq!(
            grid.set_stage_height(-100.0),
            Err(GridError::InvalidStageSize(-100.0))
        );
        assert_eq!(grid.unit_width(), 64.0);
        assert_eq!(grid.unit_height(), 64.0);
    }
}
