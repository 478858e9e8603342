use crate::geo::LineParams;

/// index into the fixed 17 step curriculum. navigation clamps at both ends,
/// so a value outside `1..=17` cannot be constructed.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, serde::Deserialize, serde::Serialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct SceneIndex(u8);

impl SceneIndex {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(17);

    pub fn new(nr: u8) -> Self {
        Self(nr.clamp(1, 17))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn prev(self) -> Self {
        Self((self.0 - 1).max(1))
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1).min(17))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=17).map(Self)
    }

    pub fn spec(self) -> &'static SceneSpec {
        &SCENES[(self.0 - 1) as usize]
    }

    /// scenes 3 and 7 sweep a parameter on the demo clock
    pub fn animates(self) -> bool {
        matches!(self.0, 3 | 7)
    }
}

impl Default for SceneIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u8> for SceneIndex {
    fn from(nr: u8) -> Self {
        Self::new(nr)
    }
}

impl From<SceneIndex> for u8 {
    fn from(scene: SceneIndex) -> u8 {
        scene.0
    }
}

#[derive(
    Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize, strum_macros::EnumIter,
)]
pub enum SceneMode {
    Informational,
    GuidedDemo,
    FreePractice,
    GradedMatch,
    GradedNumericEntry,
    GradedEquationEntry,
    Sandbox,
}

impl SceneMode {
    pub const fn name_str(self) -> &'static str {
        use SceneMode::*;
        match self {
            Informational => "lesson",
            GuidedDemo => "demonstration",
            FreePractice => "free practice",
            GradedMatch => "match the line",
            GradedNumericEntry => "read off a value",
            GradedEquationEntry => "write the equation",
            Sandbox => "sandbox",
        }
    }

    pub const fn description(self) -> &'static str {
        use SceneMode::*;
        match self {
            Informational => "explanatory text and diagrams, nothing to solve",
            GuidedDemo => "the widget moves a slider on its own to show the effect",
            FreePractice => "move the sliders freely, nothing is graded",
            GradedMatch => "move the sliders until your line matches the shown one",
            GradedNumericEntry => "type the asked-for number into the answer box",
            GradedEquationEntry => "type the full equation of the shown line into the answer box",
            Sandbox => "the course is over, play around as long as you like",
        }
    }
}

/// what a scene grades, evaluated on every frame while the scene is active.
/// line targets compare exactly: the sliders move in quarter steps, so every
/// target value is reachable bit for bit.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Goal {
    None,
    MatchLine(LineParams),
    NumberAnswer(&'static str),
    EquationAnswer(&'static str),
}

impl Goal {
    pub fn reached(&self, line: LineParams, answer: &str) -> bool {
        match *self {
            Goal::None => false,
            Goal::MatchLine(target) => line == target,
            Goal::NumberAnswer(expected) => answer == expected,
            Goal::EquationAnswer(expected) => normalize_answer(answer) == expected,
        }
    }
}

/// lowercase, all whitespace stripped
pub fn normalize_answer(answer: &str) -> String {
    answer.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// how a scene's reference line is shown
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TargetInk {
    /// translucent red, drawn under the user's own line in match exercises
    Faint,
    /// opaque, the object of a read-off or write-the-equation exercise
    Solid,
}

/// static description of one scene. behavior is fully table driven,
/// only the instructional copy lives with the renderer.
#[derive(Clone, Copy, Debug)]
pub struct SceneSpec {
    pub mode: SceneMode,
    pub goal: Goal,
    pub target: Option<(LineParams, TargetInk)>,
    /// whether the user's own line is drawn
    pub show_line: bool,
    /// whether the title gradient is laid over the canvas
    pub gradient: bool,
}

impl SceneSpec {
    const fn plain(mode: SceneMode) -> Self {
        Self {
            mode,
            goal: Goal::None,
            target: None,
            show_line: false,
            gradient: false,
        }
    }

    const fn lesson() -> Self {
        Self {
            gradient: true,
            ..Self::plain(SceneMode::Informational)
        }
    }

    const fn with_line(mode: SceneMode) -> Self {
        Self {
            show_line: true,
            ..Self::plain(mode)
        }
    }

    const fn match_line(m: f32, b: f32, shown: bool) -> Self {
        let line = LineParams::new(m, b);
        Self {
            goal: Goal::MatchLine(line),
            target: if shown {
                Some((line, TargetInk::Faint))
            } else {
                None
            },
            ..Self::with_line(SceneMode::GradedMatch)
        }
    }
}

/// scene 1:  introduction
/// scene 2:  structure of a linear equation
/// scene 3:  automatic sweep of the y-intercept slider
/// scene 4:  user plays with the y-intercept slider
/// scene 5:  match a line via its y-intercept
/// scene 6:  what slope is (rise over run)
/// scene 7:  automatic sweep of the slope slider
/// scene 8:  match the slope of a shown line
/// scene 9:  read off the slope of a shown line
/// scene 10: match a line with slope and y-intercept
/// scene 11: same, harder
/// scene 12: write the equation of a shown line
/// scene 13: same, for a flat line
/// scene 14: build a line from a given equation
/// scene 15: same, harder
/// scene 16: conclusion
/// scene 17: sandbox
pub const SCENES: [SceneSpec; 17] = [
    SceneSpec::lesson(),
    SceneSpec::lesson(),
    SceneSpec::with_line(SceneMode::GuidedDemo),
    SceneSpec::with_line(SceneMode::FreePractice),
    SceneSpec::match_line(1.0, 3.0, true),
    SceneSpec::lesson(),
    SceneSpec::with_line(SceneMode::GuidedDemo),
    SceneSpec::match_line(-4.0, 0.0, true),
    SceneSpec {
        goal: Goal::NumberAnswer("2"),
        target: Some((LineParams::new(2.0, 0.0), TargetInk::Solid)),
        ..SceneSpec::plain(SceneMode::GradedNumericEntry)
    },
    SceneSpec::match_line(0.25, -3.5, true),
    SceneSpec::match_line(-8.0, 5.0, true),
    SceneSpec {
        goal: Goal::EquationAnswer("y=-3x-6"),
        target: Some((LineParams::new(-3.0, -6.0), TargetInk::Solid)),
        ..SceneSpec::plain(SceneMode::GradedEquationEntry)
    },
    SceneSpec {
        goal: Goal::EquationAnswer("y=4.5"),
        target: Some((LineParams::new(0.0, 4.5), TargetInk::Solid)),
        ..SceneSpec::plain(SceneMode::GradedEquationEntry)
    },
    SceneSpec::match_line(3.0, -7.0, false),
    SceneSpec::match_line(-0.25, -8.0, false),
    SceneSpec::lesson(),
    SceneSpec::with_line(SceneMode::Sandbox),
];

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn navigation_clamps_to_curriculum() {
        assert_eq!(SceneIndex::FIRST.prev(), SceneIndex::FIRST);
        assert_eq!(SceneIndex::LAST.next(), SceneIndex::LAST);
        assert_eq!(SceneIndex::new(0), SceneIndex::FIRST);
        assert_eq!(SceneIndex::new(200), SceneIndex::LAST);
        for scene in SceneIndex::all() {
            assert!((1..=17).contains(&scene.prev().get()));
            assert!((1..=17).contains(&scene.next().get()));
        }
    }

    #[test]
    fn only_demo_scenes_animate() {
        let animated = SceneIndex::all().filter(|s| s.animates()).collect::<Vec<_>>();
        assert_eq!(animated, vec![SceneIndex::new(3), SceneIndex::new(7)]);
        for scene in animated {
            assert_eq!(scene.spec().mode, SceneMode::GuidedDemo);
        }
    }

    #[test]
    fn match_goals_are_exact() {
        let goal = SceneIndex::new(5).spec().goal;
        assert!(goal.reached(LineParams::new(1.0, 3.0), ""));
        assert!(!goal.reached(LineParams::new(1.0001, 3.0), ""));
        assert!(!goal.reached(LineParams::new(1.0, 2.9999), ""));
        assert!(!goal.reached(LineParams::new(-1.0, 3.0), ""));
    }

    #[test]
    fn answer_normalization() {
        assert_eq!(normalize_answer("Y = -3X - 6"), "y=-3x-6");
        let goal = SceneIndex::new(12).spec().goal;
        assert!(goal.reached(LineParams::DEFAULT, "Y = -3X - 6"));
        assert!(goal.reached(LineParams::DEFAULT, "y = -3x -  6 "));
        assert!(!goal.reached(LineParams::DEFAULT, "y = -3x + 6"));
        assert!(SceneIndex::new(13).spec().goal.reached(LineParams::DEFAULT, "y = 4.5"));
        // the plain number answer compares verbatim
        assert!(SceneIndex::new(9).spec().goal.reached(LineParams::DEFAULT, "2"));
        assert!(!SceneIndex::new(9).spec().goal.reached(LineParams::DEFAULT, "2.0"));
    }

    #[test]
    fn shown_match_targets_equal_their_goal() {
        for nr in [5, 8, 10, 11] {
            let spec = SceneIndex::new(nr).spec();
            let Goal::MatchLine(goal_line) = spec.goal else {
                panic!("scene {nr} should grade a line match");
            };
            let Some((target_line, TargetInk::Faint)) = spec.target else {
                panic!("scene {nr} should show its target faintly");
            };
            assert_eq!(goal_line, target_line);
        }
        // the draw-from-equation scenes keep their target hidden
        for nr in [14, 15] {
            assert!(SceneIndex::new(nr).spec().target.is_none());
            assert!(SceneIndex::new(nr).spec().show_line);
        }
    }

    #[test]
    fn every_mode_is_described() {
        for mode in SceneMode::iter() {
            assert!(!mode.name_str().is_empty());
            assert!(!mode.description().is_empty());
        }
    }
}
