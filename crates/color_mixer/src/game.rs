use bevy::prelude::*;
use mixer_core::{ColorMixer, PaletteSquare};

#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum GameState {
    #[default]
    Welcome,
    Playing,
}

/// The white target square. Holds the mixer state; pressing it resets the
/// mix back to white.
#[derive(Component)]
pub struct MixerSquare(pub ColorMixer);

/// A draggable palette square wrapping the core drag state machine.
#[derive(Component)]
pub struct DraggableSquare(pub PaletteSquare);

pub mod config {
    use bevy::color::palettes::css;
    use bevy::color::Srgba;
    use bevy::math::Vec2;

    // typical smartphone screen ratio (9:16)
    pub const WINDOW_WIDTH: f32 = 360.0;
    pub const WINDOW_HEIGHT: f32 = 640.0;

    pub const MIXER_SIZE: Vec2 = Vec2::splat(120.0);
    pub const MIXER_POSITION: Vec2 = Vec2::new(0.0, 140.0);

    pub const SQUARE_SIZE: Vec2 = Vec2::splat(48.0);
    pub const PALETTE: [Srgba; 4] = [css::RED, css::BLUE, css::GREEN, css::YELLOW];
    pub const PALETTE_ROW_Y: f32 = -220.0;
    pub const PALETTE_SPACING: f32 = 88.0;

    // Depth the held square is pulled to so it draws over everything else.
    pub const DRAG_Z: f32 = 10.0;
}
