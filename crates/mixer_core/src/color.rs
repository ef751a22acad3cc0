use bevy::color::Srgba;
use bevy::log::info;

/// The one square everything gets dropped onto. Starts out white and
/// averages every dropped color into itself, channel by channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMixer {
    current: Srgba,
}

impl ColorMixer {
    pub fn new() -> Self {
        let mixer = Self {
            current: Srgba::WHITE,
        };
        info!("mixer starting color = {}", fmt(mixer.current));
        mixer
    }

    /// Moves the current color halfway toward `incoming` on each color
    /// channel. Alpha is forced back to fully opaque; the channels are not
    /// clamped beyond what averaging already guarantees.
    pub fn mix(&mut self, incoming: Srgba) {
        self.current = Srgba::new(
            (self.current.red + incoming.red) * 0.5,
            (self.current.green + incoming.green) * 0.5,
            (self.current.blue + incoming.blue) * 0.5,
            1.0,
        );
        info!("mixed {} in, now {}", fmt(incoming), fmt(self.current));
    }

    /// Back to pure white, whatever has been mixed in so far.
    pub fn reset(&mut self) {
        self.current = Srgba::WHITE;
        info!("mixer reset to white");
    }

    pub const fn current(&self) -> Srgba {
        self.current
    }
}

impl Default for ColorMixer {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt(c: Srgba) -> String {
    format!("(r:{:.2}, g:{:.2}, b:{:.2})", c.red, c.green, c.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_moves_halfway_toward_incoming() {
        let mut mixer = ColorMixer::new();
        mixer.mix(Srgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(mixer.current(), Srgba::new(1.0, 0.5, 0.5, 1.0));
    }

    #[test]
    fn mixing_the_same_color_again_halves_the_distance_again() {
        let mut mixer = ColorMixer::new();
        mixer.mix(Srgba::new(1.0, 0.0, 0.0, 1.0));
        mixer.mix(Srgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(mixer.current(), Srgba::new(1.0, 0.25, 0.25, 1.0));
    }

    #[test]
    fn repeated_mixing_converges_but_never_arrives() {
        let mut mixer = ColorMixer::new();
        for _ in 0..10 {
            mixer.mix(Srgba::new(1.0, 0.0, 0.0, 1.0));
        }
        // Each pass halves the remaining distance exactly, so after ten
        // passes the green and blue channels sit at 2^-10, not at zero.
        assert_eq!(mixer.current().green, 2f32.powi(-10));
        assert_eq!(mixer.current().blue, 2f32.powi(-10));
        assert!(mixer.current().green > 0.0, "must never reach the target");
    }

    #[test]
    fn alpha_is_forced_opaque() {
        let mut mixer = ColorMixer::new();
        mixer.mix(Srgba::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(mixer.current().alpha, 1.0);
    }

    #[test]
    fn channels_are_not_clamped() {
        // Conventional inputs stay in [0, 1]; out-of-range inputs pass
        // through the average untouched.
        let mut mixer = ColorMixer::new();
        mixer.mix(Srgba::new(3.0, 0.0, 0.0, 1.0));
        assert_eq!(mixer.current().red, 2.0);
    }

    #[test]
    fn reset_returns_to_white_from_any_state() {
        let mut mixer = ColorMixer::new();
        mixer.mix(Srgba::new(0.2, 0.9, 0.4, 1.0));
        mixer.mix(Srgba::new(0.7, 0.1, 0.0, 1.0));
        mixer.reset();
        assert_eq!(mixer.current(), Srgba::WHITE);
    }
}
