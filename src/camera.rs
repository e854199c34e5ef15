use crate::render::{visible_tile_range, VisibleRange};
use crate::tiles::TileGrid;
use bevy::math::{IRect, IVec2, UVec2};

/// Closest zoom (world pixels drawn at half size)
pub const MIN_ZOOM: f32 = 0.5;
/// Farthest zoom (world pixels drawn at double size)
pub const MAX_ZOOM: f32 = 2.0;
/// Zoom change per wheel notch
pub const ZOOM_STEP: f32 = 0.1;
/// Fraction of the remaining zoom distance covered per update
const ZOOM_EASE: f32 = 0.25;
/// Below this distance the zoom snaps onto its target
const ZOOM_SNAP: f32 = 1e-3;

/// Follow camera that never shows anything past the map edges.
///
/// `offset` is the translation applied to world coordinates before scaling
/// by the zoom, so it is zero or negative on both axes. At zoom 1.0 one
/// world pixel is one screen pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    viewport: UVec2,
    map_size: UVec2,
    offset: IVec2,
    zoom: f32,
    target_zoom: f32,
}

impl Camera {
    pub fn new(viewport: UVec2, map_size: UVec2) -> Self {
        Self {
            viewport,
            map_size,
            offset: IVec2::ZERO,
            zoom: 1.0,
            target_zoom: 1.0,
        }
    }

    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    pub fn map_size(&self) -> UVec2 {
        self.map_size
    }

    pub fn offset(&self) -> IVec2 {
        self.offset
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Zoom the camera is easing towards
    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    /// Move the zoom target by `delta`, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    /// The zoom itself follows over the next updates.
    pub fn adjust_zoom(&mut self, delta: f32) {
        self.target_zoom = (self.target_zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// World pixels covered by the viewport at the current zoom
    pub fn view_size(&self) -> UVec2 {
        (self.viewport.as_dvec2() / f64::from(self.zoom))
            .round()
            .as_uvec2()
            .max(UVec2::ONE)
    }

    /// Ease the zoom one step, then follow `target_center`
    pub fn update(&mut self, target_center: IVec2) {
        self.ease_zoom();
        self.follow(target_center);
    }

    /// Centre the view on `target_center`, clamped to the map. The zoom is
    /// left as is.
    pub fn follow(&mut self, target_center: IVec2) {
        let view = self.view_size();
        let wanted = (view / 2).as_ivec2() - target_center;
        self.offset = IVec2::new(
            clamp_axis(wanted.x, self.map_size.x, view.x),
            clamp_axis(wanted.y, self.map_size.y, view.y),
        );
    }

    /// Change the viewport size. Call [`Camera::update`] or [`Camera::follow`]
    /// afterwards to re-clamp.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = UVec2::new(width, height);
    }

    /// Translate a world rectangle into screen space
    pub fn apply(&self, world_rect: IRect) -> IRect {
        IRect::from_corners(
            self.to_screen(world_rect.min + self.offset),
            self.to_screen(world_rect.max + self.offset),
        )
    }

    /// The world rectangle currently on screen
    pub fn world_view(&self) -> IRect {
        let min = -self.offset;
        IRect::from_corners(min, min + self.view_size().as_ivec2())
    }

    /// Tiles of `grid` under the viewport
    pub fn visible_tiles(&self, grid: &TileGrid) -> VisibleRange {
        visible_tile_range(self, grid)
    }

    fn ease_zoom(&mut self) {
        let remaining = self.target_zoom - self.zoom;
        if remaining.abs() < ZOOM_SNAP {
            self.zoom = self.target_zoom;
        } else {
            self.zoom += remaining * ZOOM_EASE;
        }
    }

    fn to_screen(&self, translated: IVec2) -> IVec2 {
        (translated.as_dvec2() * f64::from(self.zoom)).round().as_ivec2()
    }
}

/// Clamp one axis into `[-(map - view), 0]`. When the view is at least as
/// large as the map the range collapses to 0.
fn clamp_axis(wanted: i32, map: u32, view: u32) -> i32 {
    let span = i32::try_from(map.saturating_sub(view)).unwrap_or(i32::MAX);
    wanted.clamp(-span, 0)
}
