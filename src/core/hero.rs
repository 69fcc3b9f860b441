//! Hero tile choreography
//!
//! The tools grid on the landing page plays a one-shot sequence once it
//! scrolls into view:
//!
//! ```text
//! Idle -> FadeIn -> Hold -> Explode -> Collapse -> FadeOut -> Revealed
//! ```
//!
//! [`HeroSequencer`] is the state machine, [`HeroTimeline`] holds the
//! timings and geometry, and [`run_sequence`] drives the machine through a
//! [`HeroStage`], awaiting each phase before entering the next. The stage is
//! the seam to the renderer: the browser implementation writes a signal and
//! sleeps on a timer, tests record the calls.

use futures::future::LocalBoxFuture;

/// Easing shared by every tile transition
pub const EASE_OUT: &str = "cubic-bezier(0.22, 0.61, 0.36, 1)";

/// Brand color the tiles collapse into
pub const COLLAPSE_COLOR: &str = "#0000d8";

/// Margin applied to the viewport when deciding the grid is visible
pub const VISIBILITY_ROOT_MARGIN: &str = "-20% 0px";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeroPhase {
    /// Waiting for the grid to become visible. Tiles are hidden.
    #[default]
    Idle,
    /// Tiles fade in one after another
    FadeIn,
    /// Tiles sit fully visible
    Hold,
    /// Tiles drift outward from the grid center
    Explode,
    /// Tiles shrink into one colored block at the center
    Collapse,
    /// The block fades away
    FadeOut,
    /// The logo is shown and follows the pointer
    Revealed,
}

impl HeroPhase {
    pub fn next(self) -> Option<Self> {
        match self {
            HeroPhase::Idle => Some(HeroPhase::FadeIn),
            HeroPhase::FadeIn => Some(HeroPhase::Hold),
            HeroPhase::Hold => Some(HeroPhase::Explode),
            HeroPhase::Explode => Some(HeroPhase::Collapse),
            HeroPhase::Collapse => Some(HeroPhase::FadeOut),
            HeroPhase::FadeOut => Some(HeroPhase::Revealed),
            HeroPhase::Revealed => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, HeroPhase::Revealed)
    }
}

/// Timings (milliseconds) and geometry (pixels) of the sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTimeline {
    /// Tiles per grid row
    pub columns: usize,
    /// Distance between neighbouring tile origins, tile size plus gap
    pub tile_pitch: f64,
    pub stagger_ms: u32,
    pub fade_in_ms: u32,
    pub hold_ms: u32,
    pub explode_ms: u32,
    pub collapse_ms: u32,
    pub fade_out_ms: u32,
    pub reveal_ms: u32,
    /// Outward drift per column step away from the center
    pub spread_x: f64,
    /// Outward drift per row step away from the center
    pub spread_y: f64,
    pub explode_scale: f64,
    pub collapse_scale: f64,
    pub fade_out_scale: f64,
}

impl Default for HeroTimeline {
    fn default() -> Self {
        Self {
            columns: 4,
            // h-16 tiles with gap-5
            tile_pitch: 84.0,
            stagger_ms: 120,
            fade_in_ms: 450,
            hold_ms: 900,
            explode_ms: 1150,
            collapse_ms: 350,
            fade_out_ms: 180,
            reveal_ms: 280,
            spread_x: 40.0,
            spread_y: 34.0,
            explode_scale: 1.05,
            collapse_scale: 0.45,
            fade_out_scale: 0.8,
        }
    }
}

/// Visual state of one tile, rendered as an inline style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileFrame {
    pub opacity: f64,
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    /// Tile has merged into the colored block
    pub collapsed: bool,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl TileFrame {
    pub fn style(&self) -> String {
        let mut style = format!(
            "opacity: {:.2}; transform: translate({:.1}px, {:.1}px) scale({:.3}); \
             transition: opacity {d}ms {EASE_OUT} {w}ms, transform {d}ms {EASE_OUT} {w}ms, \
             background-color {d}ms {EASE_OUT} {w}ms, border-radius {d}ms {EASE_OUT} {w}ms;",
            self.opacity,
            self.x,
            self.y,
            self.scale,
            d = self.duration_ms,
            w = self.delay_ms,
        );
        if self.collapsed {
            style.push_str(&format!(
                " background-color: {COLLAPSE_COLOR}; border-radius: 24px;"
            ));
        }
        style
    }
}

impl HeroTimeline {
    /// How long `phase` takes before the next one may start
    pub fn phase_duration_ms(&self, phase: HeroPhase, tile_count: usize) -> u32 {
        match phase {
            HeroPhase::Idle => 0,
            HeroPhase::FadeIn => {
                let last_start = tile_count.saturating_sub(1) as u32 * self.stagger_ms;
                if tile_count == 0 {
                    0
                } else {
                    last_start + self.fade_in_ms
                }
            }
            HeroPhase::Hold => self.hold_ms,
            HeroPhase::Explode => self.explode_ms,
            HeroPhase::Collapse => self.collapse_ms,
            HeroPhase::FadeOut => self.fade_out_ms,
            HeroPhase::Revealed => self.reveal_ms,
        }
    }

    /// Row/column of a tile and of the grid center
    fn grid_position(&self, index: usize, tile_count: usize) -> ((f64, f64), (f64, f64)) {
        let columns = self.columns.max(1);
        let used_columns = tile_count.clamp(1, columns);
        let rows = tile_count.div_ceil(columns).max(1);

        let col = (index % columns) as f64;
        let row = (index / columns) as f64;
        let center_col = (used_columns - 1) as f64 / 2.0;
        let center_row = (rows - 1) as f64 / 2.0;
        ((col, row), (center_col, center_row))
    }

    /// Drift of a tile during the explode phase, proportional to its
    /// distance from the grid center
    pub fn explode_offset(&self, index: usize, tile_count: usize) -> (f64, f64) {
        let ((col, row), (center_col, center_row)) = self.grid_position(index, tile_count);
        (
            (col - center_col) * self.spread_x,
            (row - center_row) * self.spread_y,
        )
    }

    /// Translation bringing a tile onto the grid center
    pub fn collapse_offset(&self, index: usize, tile_count: usize) -> (f64, f64) {
        let ((col, row), (center_col, center_row)) = self.grid_position(index, tile_count);
        (
            (center_col - col) * self.tile_pitch,
            (center_row - row) * self.tile_pitch,
        )
    }

    pub fn tile_frame(&self, index: usize, tile_count: usize, phase: HeroPhase) -> TileFrame {
        match phase {
            HeroPhase::Idle => TileFrame {
                opacity: 0.0,
                scale: 0.8,
                x: 0.0,
                y: 20.0,
                collapsed: false,
                delay_ms: 0,
                duration_ms: 0,
            },
            HeroPhase::FadeIn | HeroPhase::Hold => TileFrame {
                opacity: 1.0,
                scale: 1.0,
                x: 0.0,
                y: 0.0,
                collapsed: false,
                delay_ms: index as u32 * self.stagger_ms,
                duration_ms: self.fade_in_ms,
            },
            HeroPhase::Explode => {
                let (x, y) = self.explode_offset(index, tile_count);
                TileFrame {
                    opacity: 1.0,
                    scale: self.explode_scale,
                    x,
                    y,
                    collapsed: false,
                    delay_ms: 0,
                    duration_ms: self.explode_ms,
                }
            }
            HeroPhase::Collapse => {
                let (x, y) = self.collapse_offset(index, tile_count);
                TileFrame {
                    opacity: 1.0,
                    scale: self.collapse_scale,
                    x,
                    y,
                    collapsed: true,
                    delay_ms: 0,
                    duration_ms: self.collapse_ms,
                }
            }
            HeroPhase::FadeOut | HeroPhase::Revealed => {
                let (x, y) = self.collapse_offset(index, tile_count);
                TileFrame {
                    opacity: 0.0,
                    scale: self.fade_out_scale,
                    x,
                    y,
                    collapsed: true,
                    delay_ms: 0,
                    duration_ms: self.fade_out_ms,
                }
            }
        }
    }
}

/// Phase state machine with a one-shot trigger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroSequencer {
    phase: HeroPhase,
    triggered: bool,
}

impl HeroSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    /// Start the sequence. Only the first call has any effect.
    pub fn trigger(&mut self) -> bool {
        if self.triggered {
            return false;
        }
        self.triggered = true;
        self.phase = HeroPhase::FadeIn;
        true
    }

    /// Move to the next phase once the current one has completed.
    ///
    /// Does nothing before the trigger or after the reveal.
    pub fn advance(&mut self) -> Option<HeroPhase> {
        if self.phase == HeroPhase::Idle {
            return None;
        }
        let next = self.phase.next()?;
        self.phase = next;
        Some(next)
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_revealed()
    }
}

/// Latch that lets exactly one notification through
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    /// Returns `true` the first time only
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

/// Renderer side of the hero sequence
pub trait HeroStage {
    /// Apply the targets of `phase`
    fn show(&mut self, phase: HeroPhase);

    /// Resolve once `ms` milliseconds have elapsed
    fn wait(&mut self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Drive a triggered sequencer to the reveal.
///
/// Each phase is shown, then awaited for its full duration before the next
/// one is shown, so phases never overlap. An untriggered sequencer returns
/// immediately. Dropping the future (for example through
/// [`futures::future::Abortable`]) stops the sequence between phases.
pub async fn run_sequence<S: HeroStage>(
    sequencer: &mut HeroSequencer,
    timeline: &HeroTimeline,
    tile_count: usize,
    stage: &mut S,
) {
    if sequencer.phase() == HeroPhase::Idle {
        return;
    }

    loop {
        let phase = sequencer.phase();
        stage.show(phase);
        if sequencer.is_finished() {
            break;
        }
        stage
            .wait(timeline.phase_duration_ms(phase, tile_count))
            .await;
        sequencer.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{AbortHandle, Abortable, Aborted};

    #[derive(Debug, PartialEq)]
    enum Call {
        Show(HeroPhase),
        Wait(u32),
    }

    #[derive(Default)]
    struct RecordingStage {
        calls: Vec<Call>,
        abort_on: Option<(HeroPhase, AbortHandle)>,
        current: HeroPhase,
    }

    impl HeroStage for RecordingStage {
        fn show(&mut self, phase: HeroPhase) {
            self.current = phase;
            self.calls.push(Call::Show(phase));
        }

        fn wait(&mut self, ms: u32) -> LocalBoxFuture<'static, ()> {
            self.calls.push(Call::Wait(ms));
            match &self.abort_on {
                Some((phase, handle)) if *phase == self.current => {
                    handle.abort();
                    Box::pin(futures::future::pending())
                }
                _ => Box::pin(futures::future::ready(())),
            }
        }
    }

    fn shown(calls: &[Call]) -> Vec<HeroPhase> {
        calls
            .iter()
            .filter_map(|call| match call {
                Call::Show(phase) => Some(*phase),
                Call::Wait(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_phase_order() {
        let mut phase = HeroPhase::Idle;
        let mut order = vec![phase];
        while let Some(next) = phase.next() {
            order.push(next);
            phase = next;
        }
        assert_eq!(
            order,
            vec![
                HeroPhase::Idle,
                HeroPhase::FadeIn,
                HeroPhase::Hold,
                HeroPhase::Explode,
                HeroPhase::Collapse,
                HeroPhase::FadeOut,
                HeroPhase::Revealed,
            ]
        );
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut sequencer = HeroSequencer::new();
        assert_eq!(sequencer.advance(), None);
        assert!(sequencer.trigger());
        assert_eq!(sequencer.phase(), HeroPhase::FadeIn);
        assert!(!sequencer.trigger());
        assert_eq!(sequencer.phase(), HeroPhase::FadeIn);
    }

    #[test]
    fn test_advance_stops_at_reveal() {
        let mut sequencer = HeroSequencer::new();
        sequencer.trigger();
        for _ in 0..5 {
            assert!(sequencer.advance().is_some());
        }
        assert!(sequencer.is_finished());
        assert_eq!(sequencer.advance(), None);
        assert!(!sequencer.trigger());
    }

    #[test]
    fn test_once_latch() {
        let mut latch = OnceLatch::default();
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn test_fade_in_duration_includes_stagger() {
        let timeline = HeroTimeline::default();
        // 15 * 120 + 450
        assert_eq!(timeline.phase_duration_ms(HeroPhase::FadeIn, 16), 2250);
        assert_eq!(timeline.phase_duration_ms(HeroPhase::FadeIn, 1), 450);
        assert_eq!(timeline.phase_duration_ms(HeroPhase::FadeIn, 0), 0);
        assert_eq!(timeline.phase_duration_ms(HeroPhase::Hold, 16), 900);
    }

    #[test]
    fn test_explode_offsets_centered() {
        let timeline = HeroTimeline::default();
        assert_eq!(timeline.explode_offset(0, 16), (-60.0, -51.0));
        assert_eq!(timeline.explode_offset(15, 16), (60.0, 51.0));
        assert_eq!(timeline.explode_offset(5, 16), (-20.0, -17.0));

        let sum = (0..16).fold((0.0, 0.0), |acc, i| {
            let (x, y) = timeline.explode_offset(i, 16);
            (acc.0 + x, acc.1 + y)
        });
        assert_eq!(sum, (0.0, 0.0));
    }

    #[test]
    fn test_collapse_offsets_meet_at_center() {
        let timeline = HeroTimeline::default();
        for index in 0..16 {
            let (x, y) = timeline.collapse_offset(index, 16);
            let col = (index % 4) as f64;
            let row = (index / 4) as f64;
            assert_eq!(col * 84.0 + x, 1.5 * 84.0);
            assert_eq!(row * 84.0 + y, 1.5 * 84.0);
        }
    }

    #[test]
    fn test_tile_frames() {
        let timeline = HeroTimeline::default();

        let idle = timeline.tile_frame(3, 16, HeroPhase::Idle);
        assert_eq!(idle.opacity, 0.0);
        assert_eq!(idle.y, 20.0);

        let fade = timeline.tile_frame(3, 16, HeroPhase::FadeIn);
        assert_eq!(fade.opacity, 1.0);
        assert_eq!(fade.delay_ms, 360);
        assert_eq!(fade.duration_ms, 450);

        let collapse = timeline.tile_frame(3, 16, HeroPhase::Collapse);
        assert!(collapse.collapsed);
        assert_eq!(collapse.scale, 0.45);
        assert!(collapse.style().contains("background-color: #0000d8"));

        let out = timeline.tile_frame(3, 16, HeroPhase::FadeOut);
        assert_eq!(out.opacity, 0.0);
        assert_eq!(out.duration_ms, 180);
    }

    #[test]
    fn test_run_sequence_strict_order() {
        let timeline = HeroTimeline::default();
        let mut sequencer = HeroSequencer::new();
        sequencer.trigger();
        let mut stage = RecordingStage::default();

        block_on(run_sequence(&mut sequencer, &timeline, 16, &mut stage));

        assert_eq!(
            stage.calls,
            vec![
                Call::Show(HeroPhase::FadeIn),
                Call::Wait(2250),
                Call::Show(HeroPhase::Hold),
                Call::Wait(900),
                Call::Show(HeroPhase::Explode),
                Call::Wait(1150),
                Call::Show(HeroPhase::Collapse),
                Call::Wait(350),
                Call::Show(HeroPhase::FadeOut),
                Call::Wait(180),
                Call::Show(HeroPhase::Revealed),
            ]
        );
        assert!(sequencer.is_finished());
    }

    #[test]
    fn test_run_sequence_without_trigger_never_starts() {
        let timeline = HeroTimeline::default();
        let mut sequencer = HeroSequencer::new();
        let mut stage = RecordingStage::default();

        block_on(run_sequence(&mut sequencer, &timeline, 16, &mut stage));

        assert!(stage.calls.is_empty());
        assert_eq!(sequencer.phase(), HeroPhase::Idle);
    }

    #[test]
    fn test_refiring_visibility_does_not_restart() {
        let timeline = HeroTimeline::default();
        let mut latch = OnceLatch::default();
        let mut sequencer = HeroSequencer::new();
        let mut stage = RecordingStage::default();

        for _ in 0..3 {
            if latch.fire() && sequencer.trigger() {
                block_on(run_sequence(&mut sequencer, &timeline, 16, &mut stage));
            }
        }

        assert_eq!(
            shown(&stage.calls),
            vec![
                HeroPhase::FadeIn,
                HeroPhase::Hold,
                HeroPhase::Explode,
                HeroPhase::Collapse,
                HeroPhase::FadeOut,
                HeroPhase::Revealed,
            ]
        );
    }

    #[test]
    fn test_abort_mid_sequence() {
        let timeline = HeroTimeline::default();
        let (handle, registration) = AbortHandle::new_pair();
        let mut sequencer = HeroSequencer::new();
        sequencer.trigger();
        let mut stage = RecordingStage {
            abort_on: Some((HeroPhase::Hold, handle)),
            ..Default::default()
        };

        let result = block_on(Abortable::new(
            run_sequence(&mut sequencer, &timeline, 16, &mut stage),
            registration,
        ));

        assert_eq!(result, Err(Aborted));
        assert_eq!(shown(&stage.calls), vec![HeroPhase::FadeIn, HeroPhase::Hold]);
        assert_eq!(sequencer.phase(), HeroPhase::Hold);
    }

    #[test]
    fn test_retrigger_during_run_does_not_restart() {
        let timeline = HeroTimeline::default();
        let (handle, registration) = AbortHandle::new_pair();
        let mut sequencer = HeroSequencer::new();
        sequencer.trigger();
        let mut stage = RecordingStage {
            abort_on: Some((HeroPhase::Explode, handle)),
            ..Default::default()
        };

        // Suspend the run while Explode is pending
        let suspended = block_on(Abortable::new(
            run_sequence(&mut sequencer, &timeline, 16, &mut stage),
            registration,
        ));
        assert_eq!(suspended, Err(Aborted));
        assert_eq!(sequencer.phase(), HeroPhase::Explode);

        // A second trigger mid-run is refused and leaves the phase alone
        assert!(!sequencer.trigger());
        assert_eq!(sequencer.phase(), HeroPhase::Explode);

        let mut rest = RecordingStage::default();
        block_on(run_sequence(&mut sequencer, &timeline, 16, &mut rest));
        assert_eq!(
            shown(&rest.calls),
            vec![
                HeroPhase::Explode,
                HeroPhase::Collapse,
                HeroPhase::FadeOut,
                HeroPhase::Revealed,
            ]
        );
        assert!(!shown(&rest.calls).contains(&HeroPhase::FadeIn));
    }
}
