use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::WindowResized;
use tileworld::sim::{InputFrame, KeyState};

/// Window events seen since the last fixed step
#[derive(Resource, Default)]
pub struct PendingInput {
    resize: Option<UVec2>,
    zoom_steps: i32,
    quit: bool,
}

impl PendingInput {
    /// Build the next tick's input and clear what was consumed
    pub fn take(&mut self, keys: KeyState) -> InputFrame {
        InputFrame {
            keys,
            resize: self.resize.take(),
            zoom_steps: std::mem::take(&mut self.zoom_steps),
            quit: std::mem::take(&mut self.quit),
        }
    }
}

pub fn key_state(keyboard: &ButtonInput<KeyCode>) -> KeyState {
    KeyState {
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
        up: keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::ArrowDown),
        run: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
    }
}

/// One notch per wheel event, whatever its unit. Scrolling up zooms in.
fn wheel_notch(event: &MouseWheel) -> i32 {
    if event.y > 0.0 {
        1
    } else if event.y < 0.0 {
        -1
    } else {
        0
    }
}

/// Collect resizes, zoom and the quit key every frame so fixed steps never
/// miss them
pub fn collect_window_input(
    mut resized: MessageReader<WindowResized>,
    mut scroll: MessageReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingInput>,
) {
    for event in resized.read() {
        // Only the latest size matters
        pending.resize = Some(UVec2::new(event.width.max(1.0) as u32, event.height.max(1.0) as u32));
    }

    for event in scroll.read() {
        pending.zoom_steps += wheel_notch(event);
    }
    // = zooms in, - zooms out
    if keyboard.just_pressed(KeyCode::Equal) {
        pending.zoom_steps += 1;
    }
    if keyboard.just_pressed(KeyCode::Minus) {
        pending.zoom_steps -= 1;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        pending.quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::mouse::MouseScrollUnit;

    fn wheel(y: f32) -> MouseWheel {
        MouseWheel {
            unit: MouseScrollUnit::Pixel,
            x: 0.0,
            y,
            window: Entity::PLACEHOLDER,
        }
    }

    fn app() -> App {
        let mut app = App::new();
        app.add_message::<WindowResized>()
            .add_message::<MouseWheel>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<PendingInput>()
            .add_systems(Update, collect_window_input);
        app
    }

    #[test]
    fn test_wheel_notch_ignores_magnitude() {
        assert_eq!(wheel_notch(&wheel(120.0)), 1);
        assert_eq!(wheel_notch(&wheel(-0.5)), -1);
        assert_eq!(wheel_notch(&wheel(0.0)), 0);
    }

    #[test]
    fn test_wheel_and_keys_accumulate_until_taken() {
        let mut app = app();
        app.world_mut().write_message(wheel(1.0));
        app.world_mut().write_message(wheel(3.0));
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Minus);
        app.update();

        let mut pending = app.world_mut().resource_mut::<PendingInput>();
        let frame = pending.take(KeyState::idle());
        assert_eq!(frame.zoom_steps, 1);
        assert!(!frame.quit);
        assert_eq!(pending.take(KeyState::idle()).zoom_steps, 0);
    }

    #[test]
    fn test_escape_requests_quit_once() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();

        let mut pending = app.world_mut().resource_mut::<PendingInput>();
        assert!(pending.take(KeyState::idle()).quit);
        assert!(!pending.take(KeyState::idle()).quit);
    }
}
