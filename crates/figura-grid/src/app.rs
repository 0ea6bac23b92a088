use figura_engine::core::{App, AppControl, FrameCtx};
use figura_engine::input::Key;
use figura_engine::render::{Camera, MeshRenderer, SceneUniforms};
use figura_engine::scene::{DrawList, MeshId};

use crate::config::GridConfig;
use crate::dolly::{Dolly, dolly};
use crate::grid;

const CELL: MeshId = MeshId(0);
const AXIS: MeshId = MeshId(1);

pub struct GridApp {
    config: GridConfig,
    camera: Camera,

    draw_list: DrawList,
    axes: MeshRenderer,
    cells: MeshRenderer,
}

impl GridApp {
    pub fn new(config: GridConfig) -> Self {
        // The scene never changes; only the camera does.
        let mut draw_list = DrawList::new();
        draw_list.extend(
            CELL,
            config.grid_color,
            grid::cell_models(config.half_extent, config.cell_size),
        );
        for (model, color) in grid::axis_instances(config.axis_length) {
            draw_list.push(AXIS, model, color);
        }

        log::info!(
            "grid: {} cells, camera at {}",
            draw_list.instances_of(CELL).count(),
            config.camera.eye
        );

        Self {
            camera: config.camera.clone(),
            config,
            draw_list,
            axes: MeshRenderer::new(AXIS, grid::axis_mesh()),
            cells: MeshRenderer::new(CELL, grid::cell_mesh()),
        }
    }

    /// Applies one key stroke: Down dollies out, Up dollies in.
    fn on_key(&mut self, key: Key) -> AppControl {
        let dir = match key {
            Key::Escape => return AppControl::Exit,
            Key::ArrowDown => Dolly::Out,
            Key::ArrowUp => Dolly::In,
            _ => return AppControl::Continue,
        };

        if dolly(
            &mut self.camera,
            dir,
            self.config.dolly_step,
            self.config.min_distance,
        ) {
            log::debug!("camera eye -> {}", self.camera.eye);
        } else {
            log::debug!("camera at minimum distance {:.2}", self.camera.distance());
        }
        AppControl::Continue
    }
}

impl App for GridApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for (key, _) in ctx.input_frame.key_strokes() {
            if self.on_key(key) == AppControl::Exit {
                ctx.runtime.exit();
                return AppControl::Continue;
            }
        }

        let camera = &self.camera;
        let draw_list = &self.draw_list;
        let axes = &mut self.axes;
        let cells = &mut self.cells;

        ctx.render(self.config.clear, |rctx, target| {
            let uniforms = SceneUniforms::unlit(camera.view_projection(rctx.aspect()));
            // Axes first so they win depth ties with the grid lines on x=0 and z=0.
            axes.render(rctx, target, &uniforms, draw_list);
            cells.render(rctx, target, &uniforms, draw_list);
        })
    }
}
