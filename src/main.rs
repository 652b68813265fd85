//! Chessboard 3D main entry point.
//!
//! An animated, seed-parametrized 3D chessboard written in Rust using:
//! - **raylib** for windowing, input, and immediate-mode 3D drawing
//! - **bevy_ecs** for resources, observers, and the frame schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (missing file keeps defaults) and apply CLI overrides
//! 2. Build meshes and hover records, register observers
//! 3. Open the window and insert the raylib handles
//! 4. Run the frame loop: input, camera animation, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 7
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use chessboard3d::game;
use chessboard3d::resources::board::BoardConfig;
use chessboard3d::resources::gameconfig::GameConfig;
use chessboard3d::systems::cameraanimation::camera_animation_system;
use chessboard3d::systems::gameconfig::apply_gameconfig_changes;
use chessboard3d::systems::input::update_input_state;
use chessboard3d::systems::render::render_system;
use chessboard3d::systems::time::update_world_time;

/// Chessboard 3D
#[derive(Parser)]
#[command(
    version,
    about = "Interactive animated 3D chessboard parametrized by a roll number."
)]
struct Cli {
    /// Roll number every board parameter is derived from.
    /// Overrides `[scene] seed` from the config file.
    #[arg(long)]
    seed: Option<u32>,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the piece hover phases. Random when omitted.
    #[arg(long, value_name = "U64")]
    phase_seed: Option<u64>,

    /// Write the effective configuration (file values plus overrides) back
    /// to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("Config file not loaded, using defaults: {}", e);
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    // Early-exit: persist the configuration and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let board = BoardConfig::from_seed(config.seed);
    for line in game::startup_banner(&board) {
        info!("{}", line);
    }

    let mut phase_rng = match cli.phase_seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let (window_width, window_height) = (config.window_width, config.window_height);
    if let Err(e) = game::setup(&mut world, config, &mut phase_rng) {
        error!("Failed to build scene: {}", e);
        std::process::exit(1);
    }

    // --------------- Raylib window ---------------
    // Window extents are range-checked against i32 when the config is loaded
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(&game::window_title(&board))
        .msaa_4x()
        .build();
    // Disable ESC to exit
    rl.set_exit_key(None);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes); // Must run early to apply config before other systems
    update.add_systems(update_input_state.after(apply_gameconfig_changes));
    update.add_systems(camera_animation_system.after(update_input_state));
    update.add_systems(render_system.after(camera_animation_system));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed resources for next frame
    }

    info!("Window closed, exiting");
}
