//! The rules of the color mixing demo, kept free of any engine host:
//! averaging colors into the mixer, the inclusive 2D overlap test that
//! decides whether a drop counts, and the press/drag/release state machine
//! of a palette square. The Bevy front end in `color_mixer` only feeds
//! pointer events in and copies positions and colors back out.

mod bounds;
mod color;
mod drag;

pub use bounds::Aabb2;
pub use color::ColorMixer;
pub use drag::{DropError, DropOutcome, PaletteSquare, PointerViewer};
