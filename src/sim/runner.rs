use super::input::{InputFrame, InputProvider};
use super::limiter::FrameLimiter;
use crate::entities::MoveOutcome;
use crate::render::{FrameStats, RenderSurface, Renderer};
use crate::world::Session;
use bevy::log::{debug, info};

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub outcome: MoveOutcome,
    pub frame: FrameStats,
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub moves: u64,
    pub blocked: u64,
    pub draws: u64,
    pub fps: f64,
}

/// Fixed-order frame loop: input, character, camera, render.
pub struct SimulationLoop<H> {
    session: Session,
    renderer: Renderer<H>,
    ticks: u64,
    quit_requested: bool,
}

impl<H: Clone> SimulationLoop<H> {
    pub fn new(session: Session, renderer: Renderer<H>) -> Self {
        Self {
            session,
            renderer,
            ticks: 0,
            quit_requested: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether a quit has been seen. The frame that carried it still ran.
    pub fn is_finished(&self) -> bool {
        self.quit_requested
    }

    /// Run one complete frame for already polled input
    pub fn step<S: RenderSurface<H>>(&mut self, input: InputFrame, surface: &mut S) -> TickReport {
        if let Some(size) = input.resize {
            debug!("Viewport resized to {}x{}", size.x, size.y);
            self.session.resize(size);
        }
        self.session.zoom(input.zoom_steps);

        let outcome = self.session.tick(&input.keys);
        let frame = self.session.render(&self.renderer, surface);

        self.ticks += 1;
        if input.quit {
            self.quit_requested = true;
        }

        TickReport {
            tick: self.ticks,
            outcome,
            frame,
        }
    }

    /// Poll and step until a quit arrives, holding the limiter's rate
    pub fn run<I, S>(&mut self, input: &mut I, surface: &mut S, limiter: &mut FrameLimiter) -> RunSummary
    where
        I: InputProvider,
        S: RenderSurface<H>,
    {
        let mut summary = RunSummary::default();
        while !self.quit_requested {
            let report = self.step(input.poll(), surface);
            summary.ticks += 1;
            summary.draws += report.frame.total_draws() as u64;
            match report.outcome {
                MoveOutcome::Moved => summary.moves += 1,
                MoveOutcome::Blocked => summary.blocked += 1,
                MoveOutcome::Idle => {}
            }
            limiter.end_frame();
        }
        summary.fps = limiter.fps();

        info!(
            "Simulation stopped after {} ticks ({} moves, {} blocked)",
            summary.ticks, summary.moves, summary.blocked
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::entities::Direction;
    use crate::error::AssetError;
    use crate::render::{AssetManifest, AssetTable, DrawList, TextureProvider};
    use crate::sim::{KeyState, ScriptedInput};
    use bevy::math::{IVec2, UVec2};
    use std::path::Path;

    struct UnitProvider;

    impl TextureProvider for UnitProvider {
        type Handle = ();

        fn load(&mut self, _name: &str, _path: &Path, _size: UVec2) -> Result<(), AssetError> {
            Ok(())
        }
    }

    fn sim(seed: u64) -> SimulationLoop<()> {
        let config = WorldConfig::default();
        let manifest = AssetManifest::standard(config.tile_size, config.character.size);
        let assets = AssetTable::load(&manifest, &mut UnitProvider).unwrap();
        SimulationLoop::new(Session::new(&config, seed), Renderer::new(assets))
    }

    #[test]
    fn test_step_renders_each_frame() {
        let mut sim = sim(5);
        let mut surface = DrawList::new();
        let report = sim.step(InputFrame::default(), &mut surface);

        assert_eq!(report.tick, 1);
        assert_eq!(report.outcome, MoveOutcome::Idle);
        assert_eq!(report.frame.visible_tiles, 100);
        assert_eq!(surface.frames(), 1);
        assert!(!sim.is_finished());
    }

    #[test]
    fn test_resize_applies_before_render() {
        let mut sim = sim(5);
        let mut surface = DrawList::new();
        let input = InputFrame {
            resize: Some(UVec2::new(1000, 1000)),
            ..Default::default()
        };
        let report = sim.step(input, &mut surface);
        assert_eq!(report.frame.visible_tiles, 400);
        assert_eq!(sim.session().camera().offset(), IVec2::new(-750, -750));
    }

    #[test]
    fn test_zoom_input_culls_to_smaller_view() {
        let mut sim = sim(5);
        let mut surface = DrawList::new();
        let zoom_in = InputFrame {
            zoom_steps: 10,
            ..Default::default()
        };
        sim.step(zoom_in, &mut surface);
        assert_eq!(sim.session().camera().target_zoom(), 2.0);

        let mut report = sim.step(InputFrame::default(), &mut surface);
        for _ in 0..60 {
            report = sim.step(InputFrame::default(), &mut surface);
        }
        // 250 world pixels centred on tile 25 touch tiles 22 through 27
        assert_eq!(report.frame.visible_tiles, 36);
        assert_eq!(sim.session().camera().offset(), IVec2::new(-1125, -1125));
    }

    #[test]
    fn test_quit_finishes_in_flight_frame() {
        let mut sim = sim(5);
        let mut surface = DrawList::new();
        let input = InputFrame {
            quit: true,
            ..InputFrame::keys(KeyState::holding(Direction::Up))
        };
        sim.step(input, &mut surface);
        assert!(sim.is_finished());
        assert_eq!(sim.ticks(), 1);
        assert_eq!(surface.frames(), 1);
    }

    #[test]
    fn test_run_until_script_ends() {
        let mut sim = sim(9);
        let mut surface = DrawList::new();
        let mut input = ScriptedInput::patrol(12, 3);
        let mut limiter = FrameLimiter::new(1000);

        let summary = sim.run(&mut input, &mut surface, &mut limiter);
        // 12 scripted frames plus the quit frame
        assert_eq!(summary.ticks, 13);
        assert_eq!(summary.moves + summary.blocked, 12);
        assert_eq!(surface.frames(), 13);
        assert!(sim.is_finished());
    }
}
