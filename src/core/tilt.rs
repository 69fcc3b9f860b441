//! Pointer-tracked tilt and glow for the revealed logo

/// Rotation gain in degrees per unit of normalized pointer offset.
/// Offsets are bounded by 0.5, so a pointer on the edge rotates by half of it.
pub const TILT_GAIN_DEG: f64 = 7.0;

/// Perspective applied to the tilted element, in pixels
pub const TILT_PERSPECTIVE_PX: u32 = 900;

/// 3-D rotation plus the glow highlight position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoTilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Horizontal glow center, percent of the element width
    pub glow_x: f64,
    /// Vertical glow center, percent of the element height
    pub glow_y: f64,
}

impl Default for LogoTilt {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Client-space bounding box of the tracked element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LogoTilt {
    pub const NEUTRAL: LogoTilt = LogoTilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glow_x: 50.0,
        glow_y: 50.0,
    };

    /// Tilt for a pointer at `(client_x, client_y)` over `rect`.
    ///
    /// Offsets from the center are normalized to `[-0.5, 0.5]` and clamped,
    /// so the rotation never exceeds half of [`TILT_GAIN_DEG`]. A degenerate rect
    /// yields the neutral pose.
    pub fn from_pointer(client_x: f64, client_y: f64, rect: Rect) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::NEUTRAL;
        }

        let rel_x = ((client_x - rect.left) / rect.width - 0.5).clamp(-0.5, 0.5);
        let rel_y = ((client_y - rect.top) / rect.height - 0.5).clamp(-0.5, 0.5);

        Self {
            rotate_x: -rel_y * TILT_GAIN_DEG,
            rotate_y: rel_x * TILT_GAIN_DEG,
            glow_x: (rel_x + 0.5) * 100.0,
            glow_y: (rel_y + 0.5) * 100.0,
        }
    }

    /// CSS transform functions for this pose, with `scale` appended last
    pub fn transform(&self, scale: f64) -> String {
        format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({scale})",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn glow_style(&self) -> String {
        format!(
            "background: radial-gradient(circle at {:.1}% {:.1}%, rgba(255, 255, 255, 0.28), rgba(255, 255, 255, 0) 46%);",
            self.glow_x, self.glow_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };

    #[test]
    fn test_center_is_neutral() {
        let tilt = LogoTilt::from_pointer(300.0, 150.0, RECT);
        assert_eq!(tilt, LogoTilt::NEUTRAL);
    }

    #[test]
    fn test_corner_reaches_max_tilt() {
        // Bottom-right corner
        let tilt = LogoTilt::from_pointer(500.0, 250.0, RECT);
        assert!((tilt.rotate_y - 3.5).abs() < 1e-9);
        assert!((tilt.rotate_x + 3.5).abs() < 1e-9);
        assert!((tilt.glow_x - 100.0).abs() < 1e-9);
        assert!((tilt.glow_y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_outside_pointer_is_clamped() {
        let tilt = LogoTilt::from_pointer(-5000.0, 9000.0, RECT);
        assert!(tilt.rotate_y.abs() <= TILT_GAIN_DEG / 2.0 + 1e-9);
        assert!(tilt.rotate_x.abs() <= TILT_GAIN_DEG / 2.0 + 1e-9);
        assert_eq!(tilt.glow_x, 0.0);
        assert_eq!(tilt.glow_y, 100.0);
    }

    #[test]
    fn test_padding_tilts_proportionally() {
        // 336px grid inside 40px of padding on each side
        let area = Rect {
            left: 0.0,
            top: 0.0,
            width: 416.0,
            height: 416.0,
        };
        let grid = Rect {
            left: 40.0,
            top: 40.0,
            width: 336.0,
            height: 336.0,
        };

        let tilt = LogoTilt::from_pointer(20.0, 208.0, area);
        assert!(tilt.rotate_y > -TILT_GAIN_DEG / 2.0);
        assert!((tilt.rotate_y - (20.0 / 416.0 - 0.5) * TILT_GAIN_DEG).abs() < 1e-9);
        assert_eq!(tilt.rotate_x, 0.0);

        // Measured against the grid alone the same pointer would pin to the edge
        let pinned = LogoTilt::from_pointer(20.0, 208.0, grid);
        assert_eq!(pinned.rotate_y, -TILT_GAIN_DEG / 2.0);
    }

    #[test]
    fn test_degenerate_rect() {
        let rect = Rect {
            width: 0.0,
            ..RECT
        };
        assert_eq!(LogoTilt::from_pointer(10.0, 10.0, rect), LogoTilt::NEUTRAL);
    }

    #[test]
    fn test_styles() {
        assert_eq!(
            LogoTilt::NEUTRAL.transform(1.0),
            "perspective(900px) rotateX(0.00deg) rotateY(0.00deg) scale(1)"
        );
        let corner = LogoTilt::from_pointer(500.0, 250.0, RECT);
        assert_eq!(
            corner.transform(0.6),
            "perspective(900px) rotateX(-3.50deg) rotateY(3.50deg) scale(0.6)"
        );
        assert!(LogoTilt::NEUTRAL.glow_style().contains("circle at 50.0% 50.0%"));
    }
}
