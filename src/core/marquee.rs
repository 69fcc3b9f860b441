//! Marquee sizing
//!
//! A marquee strip scrolls left by one set width per cycle and then jumps
//! back to zero. The jump is invisible as long as enough copies of the set
//! follow the first one to keep the container covered for the whole cycle.

/// Scroll speed of the strip in pixels per second
pub const MARQUEE_SPEED_PX_PER_SEC: f64 = 35.0;

/// Copies rendered before anything has been measured
pub const MIN_COPIES: usize = 2;

/// Upper bound on rendered copies; measurements needing more are rejected
pub const MAX_COPIES: usize = 256;

/// Narrowest set width accepted, in pixels
const MIN_SET_WIDTH: f64 = 1.0;

/// Result of sizing a marquee against its container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeLayout {
    /// Number of item sets to render back to back
    pub copies: usize,
    /// Distance in pixels the strip travels per cycle
    pub shift: f64,
}

impl MarqueeLayout {
    /// Size a marquee from the container width and the width of one set.
    ///
    /// Returns `None` while either width is zero, negative or not finite,
    /// i.e. before layout has happened. A set narrower than one pixel, or
    /// one needing more than [`MAX_COPIES`] copies, is also rejected.
    pub fn measure(container_width: f64, set_width: f64) -> Option<Self> {
        if !container_width.is_finite() || !set_width.is_finite() {
            return None;
        }
        if container_width <= 0.0 || set_width < MIN_SET_WIDTH {
            return None;
        }

        let needed = (1.0 + container_width / set_width).ceil();
        if needed > MAX_COPIES as f64 {
            return None;
        }
        Some(Self {
            copies: (needed as usize).max(MIN_COPIES),
            shift: set_width,
        })
    }

    /// Duration of one scroll cycle in seconds
    pub fn cycle_secs(&self) -> f64 {
        self.shift / MARQUEE_SPEED_PX_PER_SEC
    }

    /// Inline style driving the `mld-marquee` keyframes
    pub fn animation_style(&self) -> String {
        format!(
            "--marquee-shift: -{:.2}px; animation: mld-marquee {:.3}s linear infinite;",
            self.shift,
            self.cycle_secs()
        )
    }
}

/// Holds the last valid layout and absorbs repeated measurements
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarqueeSizer {
    layout: Option<MarqueeLayout>,
}

impl MarqueeSizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a new measurement.
    ///
    /// Returns `true` only when the layout changed. Invalid measurements
    /// keep the previous layout.
    pub fn update(&mut self, container_width: f64, set_width: f64) -> bool {
        match MarqueeLayout::measure(container_width, set_width) {
            Some(layout) if self.layout != Some(layout) => {
                self.layout = Some(layout);
                true
            }
            _ => false,
        }
    }

    pub fn layout(&self) -> Option<MarqueeLayout> {
        self.layout
    }

    pub fn copies(&self) -> usize {
        self.layout.map_or(MIN_COPIES, |layout| layout.copies)
    }

    /// Whether the strip should scroll yet
    pub fn is_animating(&self) -> bool {
        self.layout.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_narrow_container() {
        // Set wider than the container still needs two copies
        let layout = MarqueeLayout::measure(300.0, 800.0).unwrap();
        assert_eq!(layout.copies, 2);
        assert_eq!(layout.shift, 800.0);
    }

    #[test]
    fn test_measure_wide_container() {
        let layout = MarqueeLayout::measure(1200.0, 500.0).unwrap();
        // ceil(1 + 2.4) = 4
        assert_eq!(layout.copies, 4);
    }

    #[test]
    fn test_measure_exact_multiple() {
        let layout = MarqueeLayout::measure(1000.0, 500.0).unwrap();
        assert_eq!(layout.copies, 3);
    }

    #[test]
    fn test_measure_zero_width_container() {
        assert!(MarqueeLayout::measure(0.0, 500.0).is_none());
        assert!(MarqueeLayout::measure(1000.0, 0.0).is_none());
        assert!(MarqueeLayout::measure(f64::NAN, 500.0).is_none());
        assert!(MarqueeLayout::measure(1000.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_measure_rejects_degenerate_ratios() {
        assert!(MarqueeLayout::measure(1.0, 1e-300).is_none());
        assert!(MarqueeLayout::measure(1000.0, 0.5).is_none());
        assert!(MarqueeLayout::measure(1e12, 10.0).is_none());

        // Largest accepted ratio still covers the container
        let layout = MarqueeLayout::measure(255.0, 1.0).unwrap();
        assert_eq!(layout.copies, MAX_COPIES);
        assert!(layout.copies as f64 * 1.0 >= 255.0 + 1.0);
        assert!(MarqueeLayout::measure(255.5, 1.0).is_none());
    }

    #[test]
    fn test_copies_cover_container_after_shift() {
        for container in [1.0, 37.0, 320.0, 768.0, 1024.0, 1440.0, 2560.0, 3840.0] {
            for set in [25.0, 100.0, 333.0, 640.0, 1000.0, 5000.0] {
                let layout = MarqueeLayout::measure(container, set).unwrap();
                let expected = ((1.0 + container / set).ceil() as usize).max(2);
                assert_eq!(layout.copies, expected, "container={container} set={set}");
                assert!(
                    layout.copies as f64 * set >= container + set,
                    "gap at container={container} set={set}"
                );
            }
        }
    }

    #[test]
    fn test_cycle_duration() {
        let layout = MarqueeLayout::measure(1000.0, 700.0).unwrap();
        assert!((layout.cycle_secs() - 20.0).abs() < f64::EPSILON);
        assert!(layout.animation_style().contains("--marquee-shift: -700.00px"));
        assert!(layout.animation_style().contains("20.000s"));
    }

    #[test]
    fn test_sizer_defaults_before_measurement() {
        let sizer = MarqueeSizer::new();
        assert_eq!(sizer.copies(), 2);
        assert!(!sizer.is_animating());
        assert!(sizer.layout().is_none());
    }

    #[test]
    fn test_sizer_update_is_idempotent() {
        let mut sizer = MarqueeSizer::new();
        assert!(sizer.update(1200.0, 500.0));
        let first = sizer.layout();
        assert!(!sizer.update(1200.0, 500.0));
        assert_eq!(sizer.layout(), first);
        assert_eq!(sizer.copies(), 4);
    }

    #[test]
    fn test_sizer_defers_on_zero_measurement() {
        let mut sizer = MarqueeSizer::new();
        assert!(!sizer.update(0.0, 0.0));
        assert!(!sizer.is_animating());

        assert!(sizer.update(900.0, 450.0));
        // A transient zero while re-laying out keeps the last layout
        assert!(!sizer.update(0.0, 450.0));
        assert_eq!(sizer.copies(), 3);
    }

    #[test]
    fn test_sizer_recomputes_on_resize() {
        let mut sizer = MarqueeSizer::new();
        sizer.update(400.0, 500.0);
        assert_eq!(sizer.copies(), 2);
        assert!(sizer.update(2000.0, 500.0));
        assert_eq!(sizer.copies(), 5);
    }
}
