use bevy::prelude::*;
use bevy::window::{WindowMode, WindowResolution};

pub mod game;
pub mod gameplay;
pub mod input;
pub mod viewer;
pub mod welcome;

use game::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use game::GameState;
use gameplay::{handle_drag, handle_press, handle_release, spawn_game_elements, sync_mixer_sprite};
use welcome::{despawn_welcome_screen, handle_welcome_input, spawn_welcome_screen};

pub fn run() {
    let mut app = App::new();

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: env!("CARGO_PKG_NAME").to_string(),
            present_mode: bevy::window::PresentMode::Fifo,
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            mode: WindowMode::Windowed,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(window_plugin));

    // This plugin is useful to preserve battery life on mobile.
    // https://github.com/aevyrie/bevy_framepace
    app.add_plugins(bevy_framepace::FramepacePlugin);

    app.insert_resource(ClearColor(Color::BLACK));

    app.init_state::<GameState>()
        .add_systems(Startup, setup_camera)
        // Welcome state
        .add_systems(OnEnter(GameState::Welcome), spawn_welcome_screen)
        .add_systems(
            Update,
            handle_welcome_input.run_if(in_state(GameState::Welcome)),
        )
        .add_systems(OnExit(GameState::Welcome), despawn_welcome_screen)
        // Playing state
        .add_systems(OnEnter(GameState::Playing), spawn_game_elements)
        .add_systems(
            Update,
            (handle_press, handle_drag, handle_release, sync_mixer_sprite)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );

    app.run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
