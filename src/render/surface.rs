use bevy::math::IRect;

/// Paint layers, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrawLayer {
    /// Water, sand, grass
    Terrain,
    /// Forest, rocks, flora
    Props,
    Character,
}

impl DrawLayer {
    /// Depth used by surfaces that sort by z
    pub const fn z(self) -> f32 {
        match self {
            DrawLayer::Terrain => 0.0,
            DrawLayer::Props => 0.1,
            DrawLayer::Character => 0.2,
        }
    }
}

/// One textured quad in screen space (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall<H> {
    pub texture: H,
    pub dest: IRect,
    pub flip_x: bool,
    pub layer: DrawLayer,
}

/// Consumer of draw calls
pub trait RenderSurface<H> {
    fn draw(&mut self, call: DrawCall<H>);

    /// End of frame
    fn present(&mut self);
}

/// Surface that keeps the calls of the last presented frame.
///
/// Calls accumulate until `present`, which swaps them into the
/// presented buffer for whoever displays them.
#[derive(Debug, Clone)]
pub struct DrawList<H> {
    pending: Vec<DrawCall<H>>,
    presented: Vec<DrawCall<H>>,
    frames: u64,
}

impl<H> Default for DrawList<H> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            presented: Vec::new(),
            frames: 0,
        }
    }
}

impl<H> DrawList<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presented(&self) -> &[DrawCall<H>] {
        &self.presented
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<H> RenderSurface<H> for DrawList<H> {
    fn draw(&mut self, call: DrawCall<H>) {
        self.pending.push(call);
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.presented);
        self.pending.clear();
        self.frames += 1;
    }
}
