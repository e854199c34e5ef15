use crate::camera::Camera;
use crate::tiles::TileGrid;
use std::ops::Range;

/// Half-open rectangle of tile indices that intersects the viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRange {
    pub x: Range<usize>,
    pub y: Range<usize>,
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.x.contains(&x) && self.y.contains(&y)
    }

    /// Row-major walk over the covered tiles
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.y
            .clone()
            .flat_map(move |y| self.x.clone().map(move |x| (x, y)))
    }
}

/// Tiles the camera can see, clamped to the grid.
///
/// `floor(-offset / tile)` to `ceil((-offset + view) / tile)` on each
/// axis, where `view` is the viewport divided by the zoom. A partially
/// visible tile at either edge is included.
pub fn visible_tile_range(camera: &Camera, grid: &TileGrid) -> VisibleRange {
    let tile = i64::from(grid.tile_size().max(1));
    let offset = camera.offset();
    let view = camera.view_size();

    VisibleRange {
        x: axis_range(-i64::from(offset.x), i64::from(view.x), tile, grid.width()),
        y: axis_range(-i64::from(offset.y), i64::from(view.y), tile, grid.height()),
    }
}

fn axis_range(view_start: i64, view_len: i64, tile: i64, cells: usize) -> Range<usize> {
    let cells = cells as i64;
    let start = view_start.div_euclid(tile).clamp(0, cells);
    let end = (view_start + view_len + tile - 1).div_euclid(tile).clamp(0, cells);
    start as usize..end.max(start) as usize
}
