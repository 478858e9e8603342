use egui::{pos2, vec2, Pos2, Rect};

/// parameters of the line `y = m * x + b`, in grid units
#[derive(Clone, Copy, PartialEq, Debug, serde::Deserialize, serde::Serialize)]
pub struct LineParams {
    pub slope: f32,
    pub intercept: f32,
}

impl LineParams {
    /// neutral line every scene starts from
    pub const DEFAULT: Self = Self::new(1.0, 0.0);

    pub const fn new(slope: f32, intercept: f32) -> Self {
        Self { slope, intercept }
    }

    pub fn y_at(self, x: f32) -> f32 {
        self.slope * x + self.intercept
    }
}

/// both endpoints in screen coordinates, left endpoint first
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub p1: Pos2,
    pub p2: Pos2,
}

/// maps logical grid coordinates to screen coordinates.
/// logical coordinates are centered at the canvas midpoint with one grid cell per unit,
/// y growing downward (screen convention). the graph value `y = m * x + b` thus sits at
/// logical `(x, -(m * x + b))`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GridSpec {
    screen: Rect,
    x_samples: f32,
    y_samples: f32,
}

impl GridSpec {
    /// grid resolution of the whole session
    pub const SAMPLES: f32 = 16.0;

    pub fn new(screen: Rect) -> Self {
        Self {
            screen,
            x_samples: Self::SAMPLES,
            y_samples: Self::SAMPLES,
        }
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn cell(&self) -> egui::Vec2 {
        vec2(
            self.screen.width() / self.x_samples,
            self.screen.height() / self.y_samples,
        )
    }

    /// logical grid coordinates to screen coordinates
    pub fn translate(&self, p: Pos2) -> Pos2 {
        let w = self.screen.width();
        let h = self.screen.height();
        let px = (w / self.x_samples) * p.x + w / 2.0;
        let py = (h / self.y_samples) * p.y + h / 2.0;
        self.screen.min + vec2(px, py)
    }

    /// logical window in which line segments live. note that this window is twice as
    /// large as the visible canvas: segments may extend past the screen and are
    /// clipped by the painter, same as the drawing surface always did.
    pub fn in_bounds(&self, p: Pos2) -> bool {
        p.x.abs() <= self.x_samples && p.y.abs() <= self.y_samples
    }

    /// the full span of `y = m * x + b` through the logical window, left endpoint first.
    /// computed as the closed form intersection of the line with the window rectangle,
    /// anchored at the y-axis crossing `(0, -b)`. the window bound is on logical
    /// coordinates: a steep line yields a short x-range because the y-window is
    /// exhausted almost immediately.
    pub fn segment(&self, line: LineParams) -> Segment {
        let (m, b) = (line.slope, line.intercept);
        let anchor = pos2(0.0, -b);

        let (mut lo, mut hi) = (-self.x_samples, self.x_samples);
        if m != 0.0 {
            // solve |m * x + b| <= y_samples for x
            let at_top = (self.y_samples - b) / m;
            let at_bottom = (-self.y_samples - b) / m;
            lo = lo.max(at_top.min(at_bottom));
            hi = hi.min(at_top.max(at_bottom));
        } else if b.abs() > self.y_samples {
            lo = 0.0;
            hi = 0.0;
        }
        if lo > hi {
            // the line misses the window entirely, degenerate to the anchor
            return Segment {
                p1: self.translate(anchor),
                p2: self.translate(anchor),
            };
        }

        let p1 = pos2(lo, -line.y_at(lo));
        let p2 = pos2(hi, -line.y_at(hi));
        Segment {
            p1: self.translate(p1),
            p2: self.translate(p2),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_grid() -> GridSpec {
        GridSpec::new(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 800.0)))
    }

    #[test]
    fn translate_centers_origin() {
        let grid = unit_grid();
        assert_eq!(grid.translate(Pos2::ZERO), pos2(400.0, 400.0));
        assert_eq!(grid.translate(pos2(8.0, 0.0)), pos2(800.0, 400.0));
        assert_eq!(grid.translate(pos2(0.0, -8.0)), pos2(400.0, 0.0));
    }

    #[test]
    fn bounds_are_inclusive() {
        let grid = unit_grid();
        assert!(grid.in_bounds(pos2(16.0, -16.0)));
        assert!(!grid.in_bounds(pos2(16.5, 0.0)));
        assert!(!grid.in_bounds(pos2(0.0, -16.5)));
    }

    #[test]
    fn flat_default_line_is_horizontal_center() {
        let grid = unit_grid();
        let segment = grid.segment(LineParams::new(0.0, 0.0));
        assert_eq!(segment.p1.y, 400.0);
        assert_eq!(segment.p2.y, 400.0);
        assert!(segment.p1.x < segment.p2.x);
    }

    #[test]
    fn steep_line_is_bounded_by_y_window() {
        let grid = unit_grid();
        let segment = grid.segment(LineParams::new(100.0, 0.0));
        // x-span is +-16/100 logical units, so the segment hugs the vertical axis
        assert!((segment.p1.x - 400.0).abs() < 10.0);
        assert!((segment.p2.x - 400.0).abs() < 10.0);
        // and exhausts the full logical y-window (twice the canvas height)
        assert!((segment.p1.y.min(segment.p2.y) - -400.0).abs() < 1e-2);
        assert!((segment.p1.y.max(segment.p2.y) - 1200.0).abs() < 1e-2);
    }

    #[test]
    fn left_endpoint_first() {
        let grid = unit_grid();
        for &(m, b) in &[(1.0, 0.0), (-4.0, 2.0), (0.25, -3.5), (-8.0, 5.0)] {
            let segment = grid.segment(LineParams::new(m, b));
            assert!(segment.p1.x <= segment.p2.x, "m={m} b={b}");
        }
    }

    #[test]
    fn line_outside_window_degenerates_to_anchor() {
        let grid = unit_grid();
        let segment = grid.segment(LineParams::new(0.0, 20.0));
        assert_eq!(segment.p1, segment.p2);
        assert_eq!(segment.p1, grid.translate(pos2(0.0, -20.0)));
    }

    /// the original renderer extended the segment by unit x-steps from `(0, -b)`
    /// until leaving the window. the closed form must agree up to one step.
    #[test]
    fn matches_stepwise_extension() {
        let grid = unit_grid();
        let march = |m: f32, b: f32| -> (Pos2, Pos2) {
            let mut p1 = pos2(0.0, -b);
            let mut p2 = pos2(0.0, -b);
            while grid.in_bounds(p1) {
                p1.x -= 1.0;
                p1.y += m;
            }
            while grid.in_bounds(p2) {
                p2.x += 1.0;
                p2.y -= m;
            }
            (grid.translate(p1), grid.translate(p2))
        };
        for &(m, b) in &[(0.5, 0.0), (2.0, 3.0), (-3.0, -1.0), (1.0, 0.0)] {
            let segment = grid.segment(LineParams::new(m, b));
            let (m1, m2) = march(m, b);
            let step = grid.cell().x * (1.0 + m.abs());
            assert!((segment.p1 - m1).length() <= step, "left of m={m} b={b}");
            assert!((segment.p2 - m2).length() <= step, "right of m={m} b={b}");
        }
    }
}
