use egui::*;

use web_time::Instant;

/// the guided demonstration clock
mod demo;
/// everything that puts pixels on the canvas
mod draw;
/// the static curriculum table
mod scene;
/// the mutable session state and its commands
mod session;
mod style;

use demo::Pacer;
use scene::SceneIndex;
use session::Session;
use style::CanvasStyle;

pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
pub const GRID_BLUE: Color32 = Color32::from_rgb(100, 200, 255);
pub const AXIS_BLUE: Color32 = Color32::from_rgb(75, 150, 192);
pub const BUTTON_BLUE: Color32 = Color32::from_rgb(75, 75, 100);
pub const ARROW_BLUE: Color32 = Color32::from_rgb(150, 150, 200);
pub const FAINT_RED: Color32 = Color32::from_rgba_premultiplied(102, 0, 0, 102);

fn load_or<T: serde::de::DeserializeOwned>(
    storage: Option<&dyn eframe::Storage>,
    key: &str,
    default: impl FnOnce() -> T,
) -> T {
    storage.and_then(|s| eframe::get_value(s, key)).unwrap_or_else(default)
}

mod storage_keys {
    pub const SCENE: &str = "app::scene";
    pub const STYLE: &str = "app::style";
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Nav {
    Prev,
    Next,
}

/// the two click hot-zones in the bottom corners of the canvas,
/// sized to cover the painted buttons they contain
fn nav_hit(rect: Rect, pos: Pos2) -> Option<Nav> {
    if !rect.contains(pos) {
        return None;
    }
    let zone = 95.0 * rect.width() / draw::REFERENCE;
    if rect.max.y - pos.y > zone {
        return None;
    }
    if pos.x - rect.min.x < zone {
        return Some(Nav::Prev);
    }
    if rect.max.x - pos.x < zone {
        return Some(Nav::Next);
    }
    None
}

pub struct State {
    session: Session,
    pacer: Pacer,
    style: CanvasStyle,
}

impl State {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        use storage_keys::*;
        let style = load_or(cc.storage, STYLE, CanvasStyle::default);
        let mut session = Session::new();
        let last_scene = load_or(cc.storage, SCENE, SceneIndex::default);
        if last_scene != session.scene() {
            //reruns the scene-enter transition, so a restored demo scene animates again
            session.go_to(last_scene);
        }
        Self {
            session,
            pacer: Pacer::new(),
            style,
        }
    }

    fn draw_menu(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.heading("Controls");
            global_theme_preference_buttons(ui);
            ui.separator();

            let scene = self.session.scene();
            ui.label(format!("scene {} of {}", scene.get(), SceneIndex::LAST.get()));
            ui.label(RichText::new(scene.spec().mode.name_str()).italics())
                .on_hover_text(scene.spec().mode.description());
            ui.separator();

            let line = self.session.line();
            let mut slope = line.slope;
            if ui
                .add(Slider::new(&mut slope, -8.0..=8.0).step_by(0.25).text("slope m"))
                .changed()
            {
                self.session.set_slope(slope);
            }
            let mut intercept = line.intercept;
            if ui
                .add(Slider::new(&mut intercept, -8.0..=8.0).step_by(0.25).text("y-intercept b"))
                .changed()
            {
                self.session.set_intercept(intercept);
            }
            ui.label(RichText::new(self.session.equation_str()).monospace().size(16.0));
            ui.separator();

            ui.label("answer");
            let mut answer = self.session.answer().to_string();
            if ui.text_edit_singleline(&mut answer).changed() {
                self.session.set_answer(answer);
            }
            ui.separator();

            self.style.draw_options(ui);

            ui.collapsing("course overview", |ui| {
                for nr in SceneIndex::all() {
                    let entry = format!("{:2}: {}", nr.get(), nr.spec().mode.name_str());
                    let entry = if nr == scene {
                        RichText::new(entry).strong()
                    } else {
                        RichText::new(entry)
                    };
                    ui.label(entry).on_hover_text(nr.spec().mode.description());
                }
            });
        });
    }

    fn draw_canvas(&mut self, ui: &mut Ui) {
        let draw_space = vec2(ui.available_width(), ui.available_height());
        let (response, _) = ui.allocate_painter(draw_space, Sense::click());

        //center the square canvas, same as the fixed canvas element of old
        let rect = {
            let len = f32::min(response.rect.width(), response.rect.height());
            let to_middle = (response.rect.width() - len) / 2.0;
            Rect::from_min_size(response.rect.min + vec2(to_middle, 0.0), Vec2::splat(len))
        };

        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
        {
            match nav_hit(rect, pos) {
                Some(Nav::Prev) => self.session.go_prev(),
                Some(Nav::Next) => self.session.go_next(),
                None => {},
            }
        }

        draw::draw_frame(ui, rect, &self.session, &self.style);
    }
}

impl eframe::App for State {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        use storage_keys::*;
        eframe::set_value(storage, SCENE, &self.session.scene());
        eframe::set_value(storage, STYLE, &self.style);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        //handling input and advancing the clock strictly before rendering keeps
        //every frame a pure function of the state it starts with
        for _ in 0..self.pacer.poll(Instant::now(), self.session.demo_running()) {
            self.session.tick();
        }

        SidePanel::left("control_panel").show(ctx, |ui| {
            self.draw_menu(ui);
        });

        CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });

        if self.session.demo_running() {
            ctx.request_repaint_after(demo::TICK_PERIOD);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hot_zones_sit_in_the_bottom_corners() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(800.0));
        assert_eq!(nav_hit(rect, pos2(40.0, 760.0)), Some(Nav::Prev));
        assert_eq!(nav_hit(rect, pos2(760.0, 770.0)), Some(Nav::Next));
        assert_eq!(nav_hit(rect, pos2(400.0, 760.0)), None);
        assert_eq!(nav_hit(rect, pos2(40.0, 400.0)), None);
        assert_eq!(nav_hit(rect, pos2(400.0, 400.0)), None);
        //clicks outside the canvas never navigate
        assert_eq!(nav_hit(rect, pos2(-10.0, 790.0)), None);
        assert_eq!(nav_hit(rect, pos2(40.0, 810.0)), None);
    }

    #[test]
    fn hot_zones_scale_with_the_canvas() {
        let rect = Rect::from_min_size(pos2(100.0, 50.0), Vec2::splat(400.0));
        //95 reference pixels are 47.5 real ones here
        assert_eq!(nav_hit(rect, pos2(140.0, 430.0)), Some(Nav::Prev));
        assert_eq!(nav_hit(rect, pos2(460.0, 430.0)), Some(Nav::Next));
        assert_eq!(nav_hit(rect, pos2(160.0, 430.0)), None);
    }
}
