//! Frame orchestration
//!
//! One strictly sequential iteration per frame:
//! poll input -> simulate -> rasterize -> present -> pace.

use std::time::Duration;

use crate::consts::{MIN_FRAME_TIME, WIN_HEIGHT, WIN_WIDTH};
use crate::error::PlatformError;
use crate::platform::{Clock, InputSource, Presenter};
use crate::renderer::PixelBuffer;
use crate::sim::Simulation;

/// Owns the simulation, the frame buffer and the platform collaborators
pub struct GameLoop<P, I, C> {
    pub sim: Simulation,
    buffer: PixelBuffer,
    presenter: P,
    input: I,
    clock: C,
    /// Previous frame's duration in seconds (0 before the first frame)
    elapsed: f32,
    frames: u64,
}

impl<P: Presenter, I: InputSource, C: Clock> GameLoop<P, I, C> {
    pub fn new(presenter: P, input: I, clock: C) -> Self {
        Self {
            sim: Simulation::new(),
            buffer: PixelBuffer::new(WIN_WIDTH, WIN_HEIGHT),
            presenter,
            input,
            clock,
            elapsed: 0.0,
            frames: 0,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Seconds the next simulation step will integrate over
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Run one frame. Returns `Ok(false)` once quit has been requested.
    pub fn frame(&mut self) -> Result<bool, PlatformError> {
        let frame_start = self.clock.now();

        let events = self.input.poll()?;
        if events.quit {
            log::info!("Quit requested");
            return Ok(false);
        }

        let before = self.sim.state;
        let after = self.sim.update(&events.input, self.elapsed);
        if before != after {
            log::debug!("State {:?} -> {:?}", before, after);
        }

        self.sim.render(&mut self.buffer);
        self.presenter.present(
            self.buffer.as_bytes(),
            self.buffer.width() as u32,
            self.buffer.height() as u32,
        )?;

        self.elapsed = self.pace(frame_start).as_secs_f32();
        self.frames += 1;
        Ok(true)
    }

    /// Run frames until quit or a fatal platform error
    pub fn run(&mut self) -> Result<(), PlatformError> {
        while self.frame()? {}
        log::info!("Stopped after {} frames", self.frames);
        Ok(())
    }

    /// Sleep out the rest of a short frame, then re-measure so the next
    /// step integrates the true duration
    fn pace(&mut self, frame_start: Duration) -> Duration {
        let elapsed = self.clock.now().saturating_sub(frame_start);
        if elapsed >= MIN_FRAME_TIME {
            return elapsed;
        }
        self.clock.sleep(MIN_FRAME_TIME - elapsed);
        self.clock.now().saturating_sub(frame_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameEvents;
    use crate::renderer::{PixelBuffer, draw_title};
    use crate::sim::{GameState, TickInput};
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    type SharedTime = Rc<Cell<Duration>>;

    /// Clock driven by hand; sleeping advances it exactly
    struct FakeClock {
        now: SharedTime,
        sleeps: Vec<Duration>,
    }

    impl Clock for FakeClock {
        fn now(&self) -> Duration {
            self.now.get()
        }

        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
            self.now.set(self.now.get() + duration);
        }
    }

    /// Records frames; each present costs `cost` of clock time
    struct FakePresenter {
        now: SharedTime,
        cost: Duration,
        frames: Vec<Vec<u8>>,
        sizes: Vec<(u32, u32)>,
        fail: bool,
    }

    impl Presenter for FakePresenter {
        fn present(&mut self, frame: &[u8], width: u32, height: u32) -> Result<(), PlatformError> {
            if self.fail {
                return Err(PlatformError::NoWindow);
            }
            self.now.set(self.now.get() + self.cost);
            self.frames.push(frame.to_vec());
            self.sizes.push((width, height));
            Ok(())
        }
    }

    /// Replays scripted events, then asks to quit
    struct ScriptedInput {
        script: VecDeque<FrameEvents>,
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Result<FrameEvents, PlatformError> {
            Ok(self.script.pop_front().unwrap_or(FrameEvents {
                quit: true,
                ..Default::default()
            }))
        }
    }

    fn held(input: TickInput) -> FrameEvents {
        FrameEvents { input, quit: false }
    }

    fn serve() -> FrameEvents {
        held(TickInput {
            serve: true,
            ..Default::default()
        })
    }

    fn game(
        script: Vec<FrameEvents>,
        present_cost: Duration,
    ) -> GameLoop<FakePresenter, ScriptedInput, FakeClock> {
        let now: SharedTime = Rc::new(Cell::new(Duration::ZERO));
        GameLoop::new(
            FakePresenter {
                now: now.clone(),
                cost: present_cost,
                frames: Vec::new(),
                sizes: Vec::new(),
                fail: false,
            },
            ScriptedInput {
                script: script.into(),
            },
            FakeClock {
                now,
                sleeps: Vec::new(),
            },
        )
    }

    #[test]
    fn test_quit_is_checked_before_simulation() {
        let quit_while_serving = FrameEvents {
            input: TickInput {
                serve: true,
                ..Default::default()
            },
            quit: true,
        };
        let mut game = game(vec![quit_while_serving], Duration::ZERO);

        assert!(!game.frame().unwrap());
        assert_eq!(game.sim.state, GameState::Start);
        assert!(game.presenter().frames.is_empty());
    }

    #[test]
    fn test_start_frames_present_only_the_title() {
        let mut game = game(vec![FrameEvents::default()], Duration::ZERO);
        assert!(game.frame().unwrap());

        let mut title = PixelBuffer::new(WIN_WIDTH, WIN_HEIGHT);
        draw_title(&mut title, crate::consts::TITLE_GLYPH_SIZE);
        assert_eq!(game.presenter().frames[0], title.as_bytes());
        assert_eq!(game.presenter().sizes[0], (800, 600));
    }

    #[test]
    fn test_short_frames_sleep_out_the_remainder() {
        let mut game = game(vec![FrameEvents::default()], Duration::from_millis(2));
        assert!(game.frame().unwrap());

        assert_eq!(game.clock.sleeps, vec![Duration::from_millis(3)]);
        assert!((game.elapsed() - 0.005).abs() < 1e-6);
    }

    #[test]
    fn test_slow_frames_do_not_sleep() {
        let mut game = game(vec![FrameEvents::default()], Duration::from_millis(20));
        assert!(game.frame().unwrap());

        assert!(game.clock.sleeps.is_empty());
        assert!((game.elapsed() - 0.020).abs() < 1e-6);
    }

    #[test]
    fn test_next_frame_integrates_previous_duration() {
        let mut game = game(
            vec![serve(), FrameEvents::default()],
            Duration::from_millis(10),
        );

        // Serving frame: first elapsed is zero, nothing moves
        assert!(game.frame().unwrap());
        assert_eq!(game.sim.state, GameState::Play);
        let start = game.sim.ball.pos;

        assert!(game.frame().unwrap());
        let moved = game.sim.ball.pos - start;
        assert!((moved.x - 350.0 * 0.010).abs() < 1e-3);
        assert!((moved.y - 350.0 * 0.010).abs() < 1e-3);
    }

    #[test]
    fn test_play_frame_matches_simulation_render() {
        let mut game = game(vec![serve(), FrameEvents::default()], Duration::ZERO);
        game.run().unwrap();

        assert_eq!(game.frames(), 2);
        let mut expected = PixelBuffer::new(WIN_WIDTH, WIN_HEIGHT);
        game.sim.render(&mut expected);
        assert_eq!(game.presenter().frames[1], expected.as_bytes());
        assert_eq!(game.buffer().as_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_run_stops_on_quit() {
        let mut game = game(
            vec![FrameEvents::default(), serve(), FrameEvents::default()],
            Duration::ZERO,
        );
        game.run().unwrap();
        assert_eq!(game.frames(), 3);
        assert_eq!(game.presenter().frames.len(), 3);
    }

    #[test]
    fn test_presenter_failure_stops_the_loop() {
        let mut game = game(vec![FrameEvents::default()], Duration::ZERO);
        game.presenter.fail = true;
        assert!(matches!(game.run(), Err(PlatformError::NoWindow)));
        assert_eq!(game.frames(), 0);
    }
}
