use bevy::prelude::*;

use crate::game::config::{PALETTE, SQUARE_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game::GameState;

#[derive(Component)]
pub struct WelcomeScreenElement;

pub fn spawn_welcome_screen(mut commands: Commands) {
    // Background
    commands.spawn((
        Sprite::from_color(Color::BLACK, Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        WelcomeScreenElement,
    ));

    commands.spawn((
        Text::new("Drag colors onto\nthe white square"),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(20.0),
            width: Val::Percent(100.0),
            align_items: AlignItems::Center,
            ..default()
        },
        WelcomeScreenElement,
    ));

    // A preview of the palette row
    let spacing = SQUARE_SIZE.x * 1.5;
    let row_width = spacing * (PALETTE.len() - 1) as f32;
    for (i, color) in PALETTE.iter().enumerate() {
        commands.spawn((
            Sprite::from_color(Color::Srgba(*color), SQUARE_SIZE),
            Transform::from_xyz(-row_width / 2.0 + i as f32 * spacing, 0.0, 1.0),
            WelcomeScreenElement,
        ));
    }

    commands.spawn((
        Text::new("Tap to start"),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Percent(25.0),
            width: Val::Percent(100.0),
            align_items: AlignItems::Center,
            ..default()
        },
        WelcomeScreenElement,
    ));
}

pub fn handle_welcome_input(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if mouse_input.just_pressed(MouseButton::Left) || touch_input.any_just_pressed() {
        next_state.set(GameState::Playing);
    }
}

pub fn despawn_welcome_screen(
    mut commands: Commands,
    welcome_elements: Query<Entity, With<WelcomeScreenElement>>,
) {
    for entity in welcome_elements.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
