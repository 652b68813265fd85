//! Scene rendering.
//!
//! [`render_system`] draws one frame: the optional reference grid, every
//! board square with its outline, every piece (body plus crown for queens
//! and kings) and, in debug mode, a screen-space overlay.
//!
//! The model rotation is applied on the CPU through [`SceneTransform`]; each
//! shared mesh from [`SceneMeshes`] is instanced by adding a per-draw offset
//! and then rotating, so the view itself stays fixed at `(0, 5, zoom)`.
//!
//! The placement helpers ([`square_instances`], [`piece_instances`],
//! [`grid_lines`]) are pure so they can be tested without a window.
use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::mesh::Mesh;
use crate::resources::board::{BoardConfig, PieceOwner, PieceType};
use crate::resources::camera3d::CameraState;
use crate::resources::cameraanimator::CameraAnimator;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::pieceanimation::PieceAnimations;
use crate::resources::rendersettings::{RenderSettings, rgb_f32};
use crate::resources::scenemeshes::SceneMeshes;
use crate::resources::worldtime::WorldTime;

/// Height of the reference grid below the board.
pub const GRID_Y: f32 = -0.1;
/// Vertical offset of every piece base above the board plane.
pub const PIECE_BASE_Y: f32 = 0.3;
/// Width of the square outlines in pixels.
const OUTLINE_WIDTH: f32 = 2.0;

pub fn clear_color() -> Color {
    rgb_f32(0.1, 0.1, 0.2)
}

pub fn grid_color() -> Color {
    rgb_f32(0.3, 0.3, 0.3)
}

pub fn crown_color() -> Color {
    rgb_f32(0.8, 0.8, 0.0)
}

pub fn piece_color(owner: PieceOwner) -> Color {
    match owner {
        PieceOwner::White => rgb_f32(0.95, 0.95, 0.95),
        PieceOwner::Black => rgb_f32(0.05, 0.05, 0.05),
    }
}

/// Board model rotation: `rotation_x` about X applied after `rotation_y`
/// about Y, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransform {
    sin_x: f32,
    cos_x: f32,
    sin_y: f32,
    cos_y: f32,
}

impl SceneTransform {
    pub fn new(rotation_x: f32, rotation_y: f32) -> Self {
        let (sin_x, cos_x) = rotation_x.to_radians().sin_cos();
        let (sin_y, cos_y) = rotation_y.to_radians().sin_cos();
        SceneTransform {
            sin_x,
            cos_x,
            sin_y,
            cos_y,
        }
    }

    pub fn from_camera(camera: &CameraState) -> Self {
        Self::new(camera.rotation_x, camera.rotation_y)
    }

    /// Rotate a model-space point into world space.
    pub fn apply(&self, v: Vector3) -> Vector3 {
        // about Y
        let x = v.x * self.cos_y + v.z * self.sin_y;
        let z = -v.x * self.sin_y + v.z * self.cos_y;
        // about X
        let y = v.y * self.cos_x - z * self.sin_x;
        let z = v.y * self.sin_x + z * self.cos_x;
        Vector3::new(x, y, z)
    }

    /// Translate a mesh vertex by `offset`, then rotate.
    pub fn place(&self, local: Vector3, offset: Vector3) -> Vector3 {
        self.apply(Vector3::new(
            local.x + offset.x,
            local.y + offset.y,
            local.z + offset.z,
        ))
    }
}

/// Board surface height of a square at time `t`.
pub fn square_height(row: usize, col: usize, t: f32) -> f32 {
    let wave = ((row + col) as f32 * 0.5 + t * 0.5).sin() * 0.3;
    wave * 0.2
}

/// One board square ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareInstance {
    pub row: usize,
    pub col: usize,
    pub dark: bool,
    /// Translation applied to the unit square mesh.
    pub offset: Vector3,
}

/// One piece ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceInstance {
    pub row: usize,
    pub col: usize,
    pub piece: PieceType,
    pub owner: PieceOwner,
    /// Translation of the piece base center.
    pub offset: Vector3,
}

pub fn square_instances(board: &BoardConfig, t: f32) -> Vec<SquareInstance> {
    board
        .cells()
        .map(|(row, col)| {
            let (x, z) = board.cell_origin(row, col);
            SquareInstance {
                row,
                col,
                dark: board.is_dark_square(row, col),
                offset: Vector3::new(x, square_height(row, col, t), z),
            }
        })
        .collect()
}

pub fn piece_instances(
    board: &BoardConfig,
    animations: &PieceAnimations,
    t: f32,
) -> Vec<PieceInstance> {
    board
        .cells()
        .filter(|&(row, col)| board.has_piece(row, col))
        .map(|(row, col)| {
            let (x, z) = board.cell_origin(row, col);
            let hover = animations.hover_offset(row, col, t);
            PieceInstance {
                row,
                col,
                piece: board.piece_type(row, col),
                owner: board.piece_owner(row, col),
                offset: Vector3::new(x + 0.5, PIECE_BASE_Y + hover, z + 0.5),
            }
        })
        .collect()
}

/// Reference grid segments for an `n`-square board.
pub fn grid_lines(n: usize) -> Vec<(Vector3, Vector3)> {
    let extent = n as f32;
    let n = n as i32;
    let mut lines = Vec::with_capacity(2 * (2 * n as usize + 1));
    for i in -n..=n {
        let i = i as f32;
        lines.push((
            Vector3::new(-extent, GRID_Y, i),
            Vector3::new(extent, GRID_Y, i),
        ));
        lines.push((
            Vector3::new(i, GRID_Y, -extent),
            Vector3::new(i, GRID_Y, extent),
        ));
    }
    lines
}

fn draw_mesh(
    d3: &mut RaylibMode3D<'_, RaylibDrawHandle<'_>>,
    mesh: &Mesh,
    transform: &SceneTransform,
    offset: Vector3,
    color: Color,
) {
    for [a, b, c] in mesh.triangles() {
        d3.draw_triangle3D(
            transform.place(a, offset),
            transform.place(b, offset),
            transform.place(c, offset),
            color,
        );
    }
}

fn draw_outline(
    d3: &mut RaylibMode3D<'_, RaylibDrawHandle<'_>>,
    mesh: &Mesh,
    transform: &SceneTransform,
    offset: Vector3,
    color: Color,
) {
    for primitive in &mesh.primitives {
        for (a, b) in primitive.outline() {
            d3.draw_line3D(transform.place(a, offset), transform.place(b, offset), color);
        }
    }
}

/// Draw the board and pieces inside an active 3D mode.
pub fn render_pass(world: &mut World, d3: &mut RaylibMode3D<'_, RaylibDrawHandle<'_>>) {
    let camera = *world.resource::<CameraState>();
    let settings = *world.resource::<RenderSettings>();
    let t = world.resource::<WorldTime>().elapsed;
    let board = *world.resource::<BoardConfig>();
    let transform = SceneTransform::from_camera(&camera);

    // Flush anything batched before switching raster state
    unsafe {
        ffi::rlDrawRenderBatchActive();
        ffi::rlDisableBackfaceCulling();
        if settings.wireframe {
            ffi::rlEnableWireMode();
        }
    }

    if settings.grid_enabled {
        let color = grid_color();
        for (a, b) in grid_lines(board.board_size) {
            d3.draw_line3D(transform.apply(a), transform.apply(b), color);
        }
    }

    let meshes = world.resource::<SceneMeshes>();
    let squares = square_instances(&board, t);
    for square in &squares {
        let color = settings.color_scheme.square_color(square.dark);
        draw_mesh(d3, &meshes.square, &transform, square.offset, color);
    }

    unsafe {
        ffi::rlDrawRenderBatchActive();
        ffi::rlSetLineWidth(OUTLINE_WIDTH);
    }
    for square in &squares {
        draw_outline(d3, &meshes.square, &transform, square.offset, Color::BLACK);
    }
    unsafe {
        ffi::rlDrawRenderBatchActive();
        ffi::rlSetLineWidth(1.0);
    }

    let animations = world.resource::<PieceAnimations>();
    for piece in piece_instances(&board, animations, t) {
        draw_mesh(
            d3,
            meshes.body(piece.piece),
            &transform,
            piece.offset,
            piece_color(piece.owner),
        );
        if piece.piece.has_crown() {
            let crown_offset = Vector3::new(
                piece.offset.x,
                piece.offset.y + piece.piece.body_height(),
                piece.offset.z,
            );
            draw_mesh(d3, &meshes.crown, &transform, crown_offset, crown_color());
        }
    }

    unsafe {
        ffi::rlDrawRenderBatchActive();
        if settings.wireframe {
            ffi::rlDisableWireMode();
        }
        ffi::rlEnableBackfaceCulling();
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let color = Color::RAYWHITE;

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, color);

    let camera = *world.resource::<CameraState>();
    let text = format!(
        "Camera rx: {:.1} ry: {:.1} zoom: {:.2} | {}",
        camera.rotation_x,
        camera.rotation_y,
        camera.zoom,
        camera.projection.label()
    );
    d.draw_text(&text, 10, 30, 10, color);

    let animator = world.resource::<CameraAnimator>();
    let text = format!(
        "Animator: {:?} {:.2}/{:.2}s",
        animator.state(),
        animator.elapsed(),
        animator.duration()
    );
    d.draw_text(&text, 10, 50, 10, color);

    let board = world.resource::<BoardConfig>();
    let settings = world.resource::<RenderSettings>();
    let text = format!(
        "Board {}x{} | variation {} | scheme {} | grid {} | wireframe {}",
        board.board_size,
        board.board_size,
        board.piece_variation,
        settings.color_scheme.label(),
        settings.grid_enabled,
        settings.wireframe
    );
    d.draw_text(&text, 10, 70, 10, color);

    let t = world.resource::<WorldTime>();
    let text = format!("Time: {:.2}s | frame {}", t.elapsed, t.frame_count);
    let screen_h = d.get_screen_height();
    d.draw_text(&text, 10, screen_h - 20, 10, color);
}

/// Exclusive system drawing one frame.
///
/// Takes the raylib handle and thread out of the world for the duration of
/// the frame so the draw handle and world access do not alias.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<raylib::RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<raylib::RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    let camera = *world.resource::<CameraState>();
    let projection = world.resource::<GameConfig>().projection();

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(clear_color());

        // Clip planes are read when the projection is built
        unsafe {
            ffi::rlSetClipPlanes(projection.near as f64, projection.far as f64);
        }
        {
            let mut d3 = d.begin_mode3D(camera.to_camera3d(&projection));
            render_pass(world, &mut d3);
        }

        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}
