use bevy::prelude::*;
use mixer_core::{Aabb2, ColorMixer, PaletteSquare, PointerViewer};

use crate::game::config::{
    DRAG_Z, MIXER_POSITION, MIXER_SIZE, PALETTE, PALETTE_ROW_Y, PALETTE_SPACING, SQUARE_SIZE,
};
use crate::game::{DraggableSquare, MixerSquare};
use crate::input::{just_pressed_screen_position, just_released, pressed_screen_position};
use crate::viewer::CameraViewer;

/// Spawns the mixer and the palette row. Every palette square is wired to
/// the one mixer by construction, before any drag event can arrive.
pub fn spawn_game_elements(mut commands: Commands) {
    let mixer = ColorMixer::new();
    commands.spawn((
        Sprite::from_color(Color::Srgba(mixer.current()), MIXER_SIZE),
        Transform::from_translation(MIXER_POSITION.extend(0.0)),
        MixerSquare(mixer),
    ));

    let row_width = PALETTE_SPACING * (PALETTE.len() - 1) as f32;
    for (i, color) in PALETTE.iter().enumerate() {
        let position = Vec3::new(
            -row_width / 2.0 + i as f32 * PALETTE_SPACING,
            PALETTE_ROW_Y,
            0.0,
        );
        commands.spawn((
            Sprite::from_color(Color::Srgba(*color), SQUARE_SIZE),
            Transform::from_translation(position),
            DraggableSquare(PaletteSquare::new(*color, position, SQUARE_SIZE / 2.0, DRAG_Z)),
        ));
    }
}

/// A press on a palette square grabs it; a press on the mixer itself
/// resets the mix back to white.
pub fn handle_press(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut squares: Query<&mut DraggableSquare>,
    mut mixer: Query<(&mut MixerSquare, &Transform)>,
) {
    let Some(screen) = just_pressed_screen_position(&mouse_input, &touch_input, &windows) else {
        return;
    };
    let Some(viewer) = CameraViewer::single(&camera) else {
        return;
    };
    let Some(pointer) = viewer.project_to_plane(screen, 0.0) else {
        return;
    };

    for mut square in &mut squares {
        if square.0.bounds().contains(pointer.truncate()) {
            square.0.press(Some(&viewer), screen);
            return;
        }
    }

    if let Ok((mut mixer, transform)) = mixer.get_single_mut() {
        if mixer_bounds(transform).contains(pointer.truncate()) {
            mixer.0.reset();
        }
    }
}

pub fn handle_drag(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut squares: Query<(&mut DraggableSquare, &mut Transform)>,
) {
    let Some(screen) = pressed_screen_position(&mouse_input, &touch_input, &windows) else {
        return;
    };
    let viewer = CameraViewer::single(&camera);

    for (mut square, mut transform) in &mut squares {
        if square.0.is_dragging() {
            square.0.drag(viewer.as_ref().map(|v| v as &dyn PointerViewer), screen);
            transform.translation = square.0.position();
        }
    }
}

/// Judges the drop against the mixer's bounds, then snaps the square back.
pub fn handle_release(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut squares: Query<(&mut DraggableSquare, &mut Transform)>,
    mut mixer: Query<(&mut MixerSquare, &Transform), Without<DraggableSquare>>,
) {
    if !just_released(&mouse_input, &touch_input) {
        return;
    }

    for (mut square, mut transform) in &mut squares {
        if !square.0.is_dragging() {
            continue;
        }
        match mixer.get_single_mut() {
            Ok((mut mixer, mixer_transform)) => {
                square
                    .0
                    .release(Some(&mut mixer.0), Some(mixer_bounds(mixer_transform)));
            }
            Err(_) => {
                square.0.release(None, None);
            }
        }
        transform.translation = square.0.position();
    }
}

/// Keeps the mixer sprite in sync with the mixed color after every change.
pub fn sync_mixer_sprite(mut mixer: Query<(&MixerSquare, &mut Sprite), Changed<MixerSquare>>) {
    for (mixer, mut sprite) in &mut mixer {
        sprite.color = Color::Srgba(mixer.0.current());
    }
}

fn mixer_bounds(transform: &Transform) -> Aabb2 {
    Aabb2::from_center_half_extents(transform.translation.truncate(), MIXER_SIZE / 2.0)
}
