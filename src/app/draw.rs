use std::f32::consts::TAU;

use egui::{pos2, vec2, Align2, Color32, CornerRadius, FontId, Mesh, Painter, Pos2, Rect, Shape, Stroke, Ui, Vec2};

use itertools::izip;

use crate::geo::{GridSpec, LineParams};

use super::scene::TargetInk;
use super::session::Session;
use super::style::CanvasStyle;
use super::{ARROW_BLUE, BLACK, BUTTON_BLUE, WHITE};

/// side length all layout coordinates refer to. the real canvas scales
/// everything by its actual side length over this.
pub const REFERENCE: f32 = 800.0;

const W: f32 = REFERENCE;
const H: f32 = REFERENCE;

/// one frame: full redraw of background, grid, lines, scene content and
/// navigation buttons. purely a function of the passed state.
pub fn draw_frame(ui: &mut Ui, rect: Rect, session: &Session, style: &CanvasStyle) {
    //line segments may leave the logical window, the clip rect cuts them off
    let painter = ui.painter_at(rect);
    let grid = GridSpec::new(rect);
    let scale = rect.width() / REFERENCE;
    let spec = session.scene().spec();

    painter.rect_filled(rect, CornerRadius::ZERO, WHITE);
    draw_grid(&painter, grid, style);
    draw_axes(&painter, grid, style, scale);

    if spec.gradient {
        draw_gradient(&painter, rect);
    }
    if let Some((target, ink)) = spec.target {
        let color = match ink {
            TargetInk::Faint => style.target_color,
            TargetInk::Solid => style.line_color,
        };
        draw_line(&painter, grid, target, Stroke::new(style.line_width * scale, color));
    }
    if spec.show_line {
        let stroke = Stroke::new(style.line_width * scale, style.line_color);
        draw_line(&painter, grid, session.line(), stroke);
    }

    let frame = Frame {
        painter: &painter,
        grid,
        correct: session.correct(),
        scale,
    };
    CONTENT[(session.scene().get() - 1) as usize](&frame);

    draw_nav_buttons(&painter, rect, scale);
}

fn draw_grid(painter: &Painter, grid: GridSpec, style: &CanvasStyle) {
    let rect = grid.screen();
    let cell = grid.cell();
    let stroke = Stroke::new(1.0, style.grid_color);
    for i in 0..GridSpec::SAMPLES as usize {
        let x = rect.min.x + i as f32 * cell.x;
        let y = rect.min.y + i as f32 * cell.y;
        painter.line_segment([pos2(x, rect.min.y), pos2(x, rect.max.y)], stroke);
        painter.line_segment([pos2(rect.min.x, y), pos2(rect.max.x, y)], stroke);
    }
}

fn draw_axes(painter: &Painter, grid: GridSpec, style: &CanvasStyle, scale: f32) {
    let rect = grid.screen();
    let stroke = Stroke::new(5.0 * scale, style.axis_color);
    let center = rect.center();
    painter.line_segment([pos2(center.x, rect.min.y), pos2(center.x, rect.max.y)], stroke);
    painter.line_segment([pos2(rect.min.x, center.y), pos2(rect.max.x, center.y)], stroke);

    let font = FontId::proportional(40.0 * scale);
    let y_label = rect.min + vec2(W / 2.0 + 16.0, 35.0) * scale;
    let x_label = rect.min + vec2(W - 35.0, H / 2.0 - 16.0) * scale;
    painter.text(y_label, Align2::LEFT_BOTTOM, "y", font.clone(), style.axis_color);
    painter.text(x_label, Align2::LEFT_BOTTOM, "x", font, style.axis_color);
}

/// translucent white-to-blue wash over the canvas of the pure lesson scenes
fn draw_gradient(painter: &Painter, rect: Rect) {
    let top = Color32::from_rgba_premultiplied(128, 128, 128, 128);
    let bottom = Color32::from_rgba_premultiplied(38, 38, 128, 128);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

fn draw_line(painter: &Painter, grid: GridSpec, line: LineParams, stroke: Stroke) {
    let segment = grid.segment(line);
    painter.line_segment([segment.p1, segment.p2], stroke);
}

fn draw_nav_buttons(painter: &Painter, rect: Rect, scale: f32) {
    let radius = 40.0 * scale;
    let left = rect.left_bottom() + vec2(50.0, -50.0) * scale;
    let right = rect.right_bottom() + vec2(-50.0, -50.0) * scale;
    painter.circle_filled(left, radius, BUTTON_BLUE);
    painter.circle_filled(right, radius, BUTTON_BLUE);

    let triangle = |tip: Pos2, base: f32| {
        let points = vec![
            tip,
            tip + vec2(base, 20.0) * scale,
            tip + vec2(base, -20.0) * scale,
        ];
        painter.add(Shape::convex_polygon(points, ARROW_BLUE, Stroke::NONE));
    };
    triangle(left + vec2(-20.0, 0.0) * scale, 30.0);
    triangle(right + vec2(20.0, 0.0) * scale, -30.0);
}

/// handed to the per scene content renderers. coordinates are in reference
/// pixels, `(0, 0)` the top left corner of the canvas.
struct Frame<'a> {
    painter: &'a Painter,
    grid: GridSpec,
    correct: bool,
    scale: f32,
}

impl Frame<'_> {
    fn at(&self, x: f32, y: f32) -> Pos2 {
        self.grid.screen().min + vec2(x, y) * self.scale
    }

    /// text with its baseline starting at `(x, y)`, like the old canvas api
    fn text(&self, x: f32, y: f32, size: f32, text: &str) {
        self.painter.text(
            self.at(x, y),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size * self.scale),
            BLACK,
        );
    }

    /// annotation arrow: plain shaft, filled triangular head at the tip
    fn arrow(&self, from: (f32, f32), to: (f32, f32), head_radius: f32) {
        let from = self.at(from.0, from.1);
        let to = self.at(to.0, to.1);
        let angle = (to - from).angle();
        let radius = head_radius * self.scale;
        let corner = |turn: f32| to + radius * Vec2::angled(angle + turn);
        let head = vec![corner(0.0), corner(TAU / 3.0), corner(2.0 * TAU / 3.0)];
        self.painter.add(Shape::convex_polygon(head, BLACK, Stroke::NONE));
        self.painter.line_segment([from, to], Stroke::new(1.5 * self.scale, BLACK));
    }

    fn rule(&self, from: (f32, f32), to: (f32, f32), width: f32) {
        let stroke = Stroke::new(width * self.scale, BLACK);
        self.painter.line_segment([self.at(from.0, from.1), self.at(to.0, to.1)], stroke);
    }
}

/// instructional copy per scene. behavior lives in the scene table,
/// only words and diagram layout live here.
const CONTENT: [fn(&Frame<'_>); 17] = [
    scene_1, scene_2, scene_3, scene_4, scene_5, scene_6, scene_7, scene_8, scene_9, scene_10,
    scene_11, scene_12, scene_13, scene_14, scene_15, scene_16, scene_17,
];

fn scene_1(f: &Frame<'_>) {
    f.text(30.0, 90.0, 40.0, "Welcome to Linear Equations: De-mystified!");
    f.text(120.0, 200.0, 30.0, "In this interactive course, we'll be learning all");
    f.text(70.0, 250.0, 30.0, "about linear equations.");
    f.text(120.0, 350.0, 30.0, "We'll examine their components and play around");
    f.text(70.0, 400.0, 30.0, "with them a little bit.");
    f.text(120.0, 510.0, 30.0, "By the end of it, you'll have a good grasp on how");
    f.text(70.0, 560.0, 30.0, "to both identify components of lines and how to graph");
    f.text(70.0, 610.0, 30.0, "your own!");
    f.text(30.0, 730.0, 30.0, "Previous slide");
    f.text(W - 150.0, 730.0, 30.0, "Next slide");
}

fn scene_2(f: &Frame<'_>) {
    f.text(W / 2.0 - 230.0, H / 2.0 - 30.0, 100.0, "y = mx + b");
    f.text(30.0, 85.0, 50.0, "Here's what the structure looks like!");
    f.text(120.0, 200.0, 30.0, "output variable");
    f.text(W - 320.0, 200.0, 30.0, "input variable");
    f.text(250.0, H - 250.0, 30.0, "slope");
    f.text(W - 320.0, H - 250.0, 30.0, "y-intercept");
    let froms = [
        (220.0, 220.0),
        (W - 220.0, 220.0),
        (W - 250.0, H - 280.0),
        (W / 2.0 - 130.0, H - 280.0),
    ];
    let tos = [
        (W / 2.0 - 200.0, H / 2.0 - 120.0),
        (W / 2.0 + 80.0, H / 2.0 - 100.0),
        (W / 2.0 + 200.0, H / 2.0),
        (W / 2.0 - 50.0, H / 2.0),
    ];
    for (&from, &to) in izip!(&froms, &tos) {
        f.arrow(from, to, 20.0);
    }
    f.text(70.0, H - 150.0, 30.0, "We'll get to all of these in a moment, but for now let's");
    f.text(70.0, H - 110.0, 30.0, "focus on what happens to a line when we change");
    f.text(150.0, H - 70.0, 30.0, "its y-intercept.");
}

fn scene_3(f: &Frame<'_>) {
    f.text(80.0, 85.0, 25.0, "This is what happens when b's value varies between -8 and +8!");
    f.text(30.0, 280.0, 25.0, "It's worth mentioning that");
    f.text(30.0, 320.0, 25.0, "it's called the y-intercept");
    f.text(30.0, 360.0, 25.0, "because it's the point where");
    f.text(30.0, 400.0, 25.0, "the line intercepts the y-axis.");
    f.text(90.0, H - 75.0, 25.0, "The y-intercept slider sits in the panel on the left.");
    f.arrow((80.0, H - 60.0), (15.0, H - 60.0), 20.0);
}

fn scene_4(f: &Frame<'_>) {
    f.text(220.0, 90.0, 40.0, "Now try it for yourself!");
    f.text(90.0, H - 75.0, 40.0, "Move the y-intercept slider!");
    f.arrow((80.0, H - 60.0), (15.0, H - 60.0), 20.0);
}

fn scene_5(f: &Frame<'_>) {
    f.text(220.0, 90.0, 40.0, "Try to match the red line.");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 + 200.0, 50.0, "Good job!");
        f.text(W / 2.0 - 250.0, H / 2.0 + 300.0, 50.0, "The y-intercept is (0, 3)");
    }
}

fn scene_6(f: &Frame<'_>) {
    //the rise over run fraction
    f.rule((W / 2.0 - 20.0, H / 2.0 - 50.0), (W / 2.0 + 180.0, H / 2.0 - 50.0), 3.0);
    f.text(W / 2.0 - 230.0, H / 2.0 - 30.0, 100.0, "m = ");
    f.text(W / 2.0, H / 2.0 - 80.0, 100.0, "rise");
    f.text(W / 2.0, H / 2.0 + 40.0, 100.0, "run");

    f.text(30.0, 85.0, 48.0, "How do we determine m (the slope)?");
    f.text(190.0, 200.0, 30.0, "slope");
    f.text(W / 2.0 - 60.0, 180.0, 30.0, "vertical distance between steps");
    f.text(W / 2.0 - 100.0, H - 250.0, 30.0, "horizontal distance between steps");
    let froms = [(220.0, 220.0), (W - 250.0, 200.0), (W - 250.0, H - 280.0)];
    let tos = [
        (W / 2.0 - 200.0, H / 2.0 - 120.0),
        (W / 2.0 + 120.0, H / 2.0 - 170.0),
        (W / 2.0 + 75.0, H / 2.0 + 70.0),
    ];
    for (&from, &to) in izip!(&froms, &tos) {
        f.arrow(from, to, 20.0);
    }
    f.text(200.0, H - 80.0, 30.0, "You can think of it as a measure");
    f.text(180.0, H - 40.0, 30.0, "of how steep a given graphed line is.");
}

fn scene_7(f: &Frame<'_>) {
    f.text(80.0, 85.0, 25.0, "This is what happens when m's value varies between -8 and +8!");
    f.text(90.0, H - 75.0, 25.0, "The slope slider sits in the panel on the left.");
    f.arrow((80.0, H - 60.0), (15.0, H - 60.0), 20.0);
}

fn scene_8(f: &Frame<'_>) {
    f.text(220.0, 90.0, 40.0, "Try to match the red line.");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 + 200.0, 50.0, "Good job!");
        f.text(W / 2.0 - 150.0, H / 2.0 + 300.0, 50.0, "The slope is -4");
    }
}

fn scene_9(f: &Frame<'_>) {
    f.text(180.0, 90.0, 40.0, "What's the slope of this line?");
    f.text(120.0, H - 60.0, 30.0, "Enter a number in the answer box on the left");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 + 200.0, 50.0, "Good job!");
        f.text(W / 2.0 - 150.0, H / 2.0 + 300.0, 50.0, "The slope is 2");
    }
}

fn scene_10(f: &Frame<'_>) {
    f.text(220.0, 90.0, 40.0, "Try to match the red line.");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 - 200.0, 50.0, "Good job!");
        f.text(W / 2.0 - 270.0, H / 2.0 - 100.0, 30.0, "The slope is 1/4 and the y-intercept is -3.5");
    }
}

fn scene_11(f: &Frame<'_>) {
    f.text(220.0, 90.0, 40.0, "Try to match the red line.");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 + 200.0, 50.0, "Good job!");
        f.text(W / 2.0 - 270.0, H / 2.0 + 300.0, 30.0, "The slope is -8 and the y-intercept is 5");
    }
}

fn scene_12(f: &Frame<'_>) {
    f.text(160.0, 90.0, 40.0, "What's the equation of this line?");
    f.text(180.0, H - 120.0, 30.0, "Write your answer in y = mx + b form");
    f.text(200.0, H - 60.0, 30.0, "in the answer box on the left");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 - 200.0, 50.0, "Good job!");
    }
}

fn scene_13(f: &Frame<'_>) {
    f.text(160.0, 90.0, 40.0, "What's the equation of this line?");
    f.text(180.0, H - 120.0, 30.0, "Write your answer in y = mx + b form");
    f.text(200.0, H - 60.0, 30.0, "in the answer box on the left");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 - 160.0, 50.0, "Good job!");
        f.text(W / 2.0 - 300.0, H / 2.0 - 100.0, 30.0, "The interesting thing to note here is that the");
        f.text(W / 2.0 - 300.0, H / 2.0 - 60.0, 30.0, "line is flat. This is because the slope is zero.");
        f.text(W / 2.0 - 300.0, H / 2.0 - 20.0, 30.0, "There is no rising, so 0 / run is 0.");
    }
}

fn scene_14(f: &Frame<'_>) {
    f.text(250.0, 90.0, 40.0, "Draw this equation:");
    f.text(330.0, 140.0, 40.0, "y = 3x - 7");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 - 100.0, 50.0, "Good job!");
    }
}

fn scene_15(f: &Frame<'_>) {
    f.text(250.0, 90.0, 40.0, "Draw this equation:");
    f.text(330.0, 140.0, 40.0, "y = -0.25x - 8");
    f.text(290.0, H - 40.0, 40.0, "One more left...");
    if f.correct {
        f.text(W / 2.0 - 100.0, H / 2.0 - 100.0, 50.0, "Good job!");
    }
}

fn scene_16(f: &Frame<'_>) {
    f.text(280.0, 90.0, 40.0, "Congratulations!");
    f.text(110.0, 240.0, 30.0, "You've completed this course on linear graphing!");
    f.text(120.0, 350.0, 30.0, "We learned about slopes and y-intercepts, and");
    f.text(50.0, 400.0, 30.0, "how they can affect the way lines are plotted on a graph");
    f.text(120.0, 510.0, 30.0, "I hope that this course was helpful for visualizing");
    f.text(70.0, 560.0, 30.0, "linear graphs, and that you take this information far");
    f.text(70.0, 610.0, 30.0, "into the future.");
    f.text(30.0, 730.0, 30.0, "Previous slide");
    f.text(W - 140.0, 730.0, 30.0, "Sandbox");
}

fn scene_17(_f: &Frame<'_>) {
    //the sandbox speaks for itself
}
