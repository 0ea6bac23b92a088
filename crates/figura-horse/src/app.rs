use glam::Mat4;

use figura_engine::core::{App, AppControl, FrameCtx};
use figura_engine::input::{Key, Modifiers};
use figura_engine::render::{Camera, Mesh, MeshRenderer, SceneUniforms};
use figura_engine::scene::DrawList;

use crate::config::HorseConfig;
use crate::horse::{CUBE, Horse};
use crate::joint::{Joint, JointAngles};

pub struct HorseApp {
    config: HorseConfig,
    camera: Camera,

    horse: Horse,
    selected: Joint,
    title_dirty: bool,

    draw_list: DrawList,
    cubes: MeshRenderer,
}

impl HorseApp {
    pub fn new(config: HorseConfig) -> Self {
        let mut horse = Horse::new(JointAngles::INITIAL);
        horse.set_angle(Joint::Torso, config.torso_yaw);

        let selected = Joint::Torso;
        horse.select(selected);

        Self {
            camera: config.camera.clone(),
            config,
            horse,
            selected,
            title_dirty: true,
            draw_list: DrawList::new(),
            cubes: MeshRenderer::new(CUBE, Mesh::unit_cube()),
        }
    }

    /// Restores the start-up pose.
    fn reset(&mut self) {
        self.horse.set_pose(&JointAngles::INITIAL);
        self.horse.set_angle(Joint::Torso, self.config.torso_yaw);
        log::info!("pose reset");
    }

    fn select(&mut self, joint: Joint) {
        self.selected = joint;
        self.horse.select(joint);
        self.title_dirty = true;
        log::info!("selected {joint} ({:.1} deg)", self.horse.angle(joint));
    }

    /// Applies one key stroke with the modifiers held when it arrived.
    fn on_key(&mut self, key: Key, mods: Modifiers) -> AppControl {
        match key {
            Key::Escape => return AppControl::Exit,
            Key::Tab if mods.shift => self.select(self.selected.prev()),
            Key::Tab => self.select(self.selected.next()),
            Key::R => {
                self.reset();
                self.title_dirty = true;
            }
            _ => {}
        }
        AppControl::Continue
    }

    /// Rotates the selected joint while Left/Right is held.
    fn on_hold(&mut self, left: bool, right: bool, dt: f32) {
        let dir = match (left, right) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => return,
        };
        let a = self
            .horse
            .rotate(self.selected, dir * self.config.joint_speed * dt);
        self.title_dirty = true;
        log::debug!("{} -> {a:.1} deg", self.selected);
    }

    fn title(&self) -> String {
        format!(
            "{} - {} {:.0}\u{b0}",
            self.config.window.title,
            self.selected,
            self.horse.angle(self.selected)
        )
    }
}

impl App for HorseApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for (key, mods) in ctx.input_frame.key_strokes() {
            if self.on_key(key, mods) == AppControl::Exit {
                ctx.runtime.exit();
                return AppControl::Continue;
            }
        }
        self.on_hold(
            ctx.input.key_down(Key::ArrowLeft),
            ctx.input.key_down(Key::ArrowRight),
            ctx.time.dt,
        );

        if self.title_dirty {
            ctx.window.window.set_title(&self.title());
            self.title_dirty = false;
        }

        self.draw_list.clear();
        let stats = self.horse.draw(Mat4::IDENTITY, &mut self.draw_list);
        debug_assert!(stats.is_balanced());

        let camera = &self.camera;
        let config = &self.config;
        let draw_list = &self.draw_list;
        let cubes = &mut self.cubes;

        ctx.render(config.clear, |rctx, target| {
            let uniforms = SceneUniforms::new(
                camera.view_projection(rctx.aspect()),
                config.light_dir,
                config.ambient,
            );
            cubes.render(rctx, target, &uniforms, draw_list);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
    const SHIFT: Modifiers = Modifiers { shift: true, ..NONE };

    fn app() -> HorseApp {
        HorseApp::new(HorseConfig::default())
    }

    #[test]
    fn starts_yawed_with_torso_selected() {
        let a = app();
        assert_eq!(a.selected, Joint::Torso);
        assert_eq!(a.horse.angle(Joint::Torso), 50.0);
        assert_eq!(a.horse.angle(Joint::Neck), -45.0);
    }

    #[test]
    fn tab_cycles_and_shift_tab_goes_back() {
        let mut a = app();
        a.on_key(Key::Tab, NONE);
        assert_eq!(a.selected, Joint::Head);
        a.on_key(Key::Tab, SHIFT);
        a.on_key(Key::Tab, SHIFT);
        assert_eq!(a.selected, Joint::Neck);
    }

    #[test]
    fn holding_left_rotates_selected_joint_by_speed_times_dt() {
        let mut a = app();
        a.on_key(Key::Tab, NONE); // head, -80
        a.on_hold(true, false, 0.5);
        assert_eq!(a.horse.angle(Joint::Head), -80.0 + 45.0);

        a.on_hold(false, true, 0.5);
        assert_eq!(a.horse.angle(Joint::Head), -80.0);
    }

    #[test]
    fn both_or_neither_arrow_is_a_no_op() {
        let mut a = app();
        a.on_hold(true, true, 1.0);
        a.on_hold(false, false, 1.0);
        assert_eq!(a.horse.angle(Joint::Torso), 50.0);
    }

    #[test]
    fn r_restores_startup_pose() {
        let mut a = app();
        let start = *a.horse.angles();
        a.on_hold(true, false, 0.2);
        a.on_key(Key::Tab, NONE);
        a.on_hold(false, true, 0.2);

        a.on_key(Key::R, NONE);
        assert_eq!(*a.horse.angles(), start);
    }

    #[test]
    fn escape_exits() {
        assert_eq!(app().on_key(Key::Escape, NONE), AppControl::Exit);
        assert_eq!(app().on_key(Key::Space, NONE), AppControl::Continue);
    }

    #[test]
    fn shift_tab_goes_back_even_if_shift_is_released_in_the_same_frame() {
        use figura_engine::input::{InputEvent, InputFrame, InputState, KeyState};

        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::ModifiersChanged(SHIFT));
        st.apply_event(
            &mut fr,
            InputEvent::Key {
                key: Key::Tab,
                state: KeyState::Pressed,
                modifiers: SHIFT,
                code: 0,
                repeat: false,
            },
        );
        st.apply_event(&mut fr, InputEvent::ModifiersChanged(NONE));
        assert!(!st.modifiers.shift);

        let mut a = app();
        for (key, mods) in fr.key_strokes() {
            a.on_key(key, mods);
        }
        assert_eq!(a.selected, Joint::Neck);
    }

    #[test]
    fn title_names_selected_joint() {
        let mut a = app();
        a.on_key(Key::Tab, SHIFT);
        assert!(a.title().starts_with("RobotHorse - neck -45"));
    }
}
