use crate::geo::LineParams;

use super::demo::Demo;
use super::scene::SceneIndex;

/// the single mutable state of one sitting. all mutation goes through the
/// named commands below: navigation, slider input, answer input and the
/// demo tick. rendering only ever reads.
pub struct Session {
    scene: SceneIndex,
    line: LineParams,
    answer: String,
    demo: Demo,
}

impl Session {
    pub fn new() -> Self {
        let mut result = Self {
            scene: SceneIndex::FIRST,
            line: LineParams::DEFAULT,
            answer: String::new(),
            demo: Demo::new(),
        };
        result.go_to(SceneIndex::FIRST);
        result
    }

    pub fn scene(&self) -> SceneIndex {
        self.scene
    }

    pub fn line(&self) -> LineParams {
        self.line
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn demo_running(&self) -> bool {
        self.demo.running()
    }

    pub fn demo_clock(&self) -> u64 {
        self.demo.clock()
    }

    pub fn go_prev(&mut self) {
        self.go_to(self.scene.prev());
    }

    pub fn go_next(&mut self) {
        self.go_to(self.scene.next());
    }

    /// every transition starts the scene from the neutral line. the demo is
    /// stopped before any other state changes, so no stale tick can touch
    /// the wrong scene.
    pub fn go_to(&mut self, scene: SceneIndex) {
        if scene.animates() {
            self.demo.start();
        } else {
            self.demo.stop();
        }
        self.scene = scene;
        log::info!("going to scene {}", scene.get());
        self.line = LineParams::DEFAULT;
    }

    pub fn set_slope(&mut self, value: f32) {
        if !value.is_finite() {
            log::debug!("ignoring malformed slope input");
            return;
        }
        self.line.slope = value;
    }

    pub fn set_intercept(&mut self, value: f32) {
        if !value.is_finite() {
            log::debug!("ignoring malformed intercept input");
            return;
        }
        self.line.intercept = value;
    }

    pub fn set_answer(&mut self, text: String) {
        self.answer = text;
    }

    /// one demo clock tick. does nothing outside scenes 3 and 7.
    pub fn tick(&mut self) {
        if let Some(line) = self.demo.tick(self.scene, self.line) {
            self.line = line;
        }
    }

    /// the active scene's grading predicate, evaluated fresh on every frame
    pub fn correct(&self) -> bool {
        self.scene.spec().goal.reached(self.line, &self.answer)
    }

    /// human readable form of the current line, with the elision rules of a
    /// hand written equation: no x-term for slope zero, no constant term for
    /// intercept zero (unless it is the only term left).
    pub fn equation_str(&self) -> String {
        let LineParams { slope: m, intercept: b } = self.line;
        let mut eq = String::from("y = ");
        if m != 0.0 {
            eq += &fmt_param(m);
            eq.push('x');
        }
        if b != 0.0 || m == 0.0 {
            if b < 0.0 {
                eq += &format!("-{}", fmt_param(-b));
            } else {
                eq += &format!("+{}", fmt_param(b));
            }
        }
        eq
    }
}

/// slider values print exactly, in-between values of a demo sweep are cut
/// after three decimals
fn fmt_param(value: f32) -> String {
    let quantized = (value * 10_000.0).round() / 10_000.0;
    if quantized == value {
        format!("{value}")
    } else {
        format!("{value:.3}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo::LineParams;

    #[test]
    fn scene_transition_resets_the_line() {
        let mut session = Session::new();
        session.set_slope(4.0);
        session.set_intercept(-2.0);
        session.go_next();
        assert_eq!(session.line(), LineParams::DEFAULT);
    }

    #[test]
    fn clamped_navigation_stays_in_range() {
        let mut session = Session::new();
        session.go_prev();
        assert_eq!(session.scene(), SceneIndex::FIRST);
        for _ in 0..40 {
            session.go_next();
        }
        assert_eq!(session.scene(), SceneIndex::LAST);
        session.go_next();
        assert_eq!(session.scene(), SceneIndex::LAST);
    }

    #[test]
    fn malformed_slider_input_is_ignored() {
        let mut session = Session::new();
        session.set_slope(f32::NAN);
        session.set_intercept(f32::INFINITY);
        assert_eq!(session.line(), LineParams::DEFAULT);
        session.set_intercept(3.0);
        assert_eq!(session.line(), LineParams::new(1.0, 3.0));
    }

    #[test]
    fn matching_scene_grades_only_the_exact_line() {
        let mut session = Session::new();
        for _ in 0..4 {
            session.go_next();
        }
        assert_eq!(session.scene().get(), 5);
        assert!(!session.correct());
        session.set_intercept(3.0);
        assert!(session.correct());
        session.set_slope(1.0001);
        assert!(!session.correct());
    }

    #[test]
    fn answer_scenes_grade_normalized_text() {
        let mut session = Session::new();
        session.go_to(SceneIndex::new(12));
        session.set_answer("Y = -3X - 6".into());
        assert!(session.correct());
        session.set_answer("y = -3x -  6 ".into());
        assert!(session.correct());
        session.set_answer("y = 3x - 6".into());
        assert!(!session.correct());
    }

    /// walk the course like a user: six clicks on "next" land in the slope
    /// demonstration, one click on "previous" leaves it again
    #[test]
    fn course_walkthrough_drives_the_demo() {
        let mut session = Session::new();
        for _ in 0..6 {
            session.go_next();
        }
        assert_eq!(session.scene().get(), 7);
        assert!(session.demo_running());
        for expected_t in 1..=10u64 {
            session.tick();
            assert_eq!(session.demo_clock(), expected_t);
            let expected = 8.0 * (expected_t as f32 / 25.0).sin();
            assert_eq!(session.line().slope, expected);
            assert_eq!(session.line().intercept, 0.0);
        }

        session.go_prev();
        assert_eq!(session.scene().get(), 6);
        assert!(!session.demo_running());
        assert_eq!(session.demo_clock(), 0);
        assert_eq!(session.line(), LineParams::DEFAULT);
        // a stray tick after leaving must not move anything
        session.tick();
        assert_eq!(session.line(), LineParams::DEFAULT);
    }

    #[test]
    fn reentering_a_demo_restarts_its_clock() {
        let mut session = Session::new();
        session.go_to(SceneIndex::new(3));
        session.tick();
        session.tick();
        assert_eq!(session.demo_clock(), 2);
        session.go_next();
        session.go_prev();
        assert_eq!(session.scene().get(), 3);
        assert!(session.demo_running());
        assert_eq!(session.demo_clock(), 0);
    }

    #[test]
    fn equation_formatting() {
        let mut session = Session::new();
        assert_eq!(session.equation_str(), "y = 1x");
        session.set_slope(0.0);
        session.set_intercept(4.5);
        assert_eq!(session.equation_str(), "y = +4.5");
        session.set_slope(-3.0);
        session.set_intercept(-6.0);
        assert_eq!(session.equation_str(), "y = -3x-6");
        session.set_slope(0.25);
        session.set_intercept(0.0);
        assert_eq!(session.equation_str(), "y = 0.25x");
    }
}
