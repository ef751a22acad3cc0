use bevy::color::Srgba;
use bevy::log::{info, warn};
use bevy::math::{Vec2, Vec3};
use thiserror::Error;

use crate::bounds::Aabb2;
use crate::color::ColorMixer;

/// Projects a screen-space pointer position onto the plane at the given
/// depth. The depth is supplied per call because a square's depth changes
/// while it is held, so the projection distance has to follow it; callers
/// must re-project on every event rather than cache a result.
///
/// Returning `None` means no projection is possible right now (no camera,
/// pointer outside the viewport) and the event should be dropped.
pub trait PointerViewer {
    fn project_to_plane(&self, screen: Vec2, plane_z: f32) -> Option<Vec3>;
}

/// Why a drop could not even be judged. The square snaps back to its rest
/// position either way.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    #[error("palette square has no mixer wired to it")]
    MissingMixer,
    #[error("mixer has no queryable bounds")]
    MissingBounds,
}

/// What came of releasing a held square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// Landed on the mixer; carries the mixer's color after the blend.
    Mixed(Srgba),
    /// Released clear of the mixer. Nothing changed.
    Missed,
    /// Wiring problem, reported and treated like a miss.
    Invalid(DropError),
}

/// One draggable colored square. Pressing grabs it (keeping the grab point
/// under the pointer), moving drags it along its depth plane, and releasing
/// drops it: if its box overlaps the mixer's box the square's color is
/// mixed in. Release always snaps the square back to where it started.
#[derive(Clone, Debug)]
pub struct PaletteSquare {
    source_color: Srgba,
    rest_position: Vec3,
    position: Vec3,
    half_extents: Vec2,
    drag_z: f32,
    dragging: bool,
    drag_offset: Vec3,
}

impl PaletteSquare {
    /// `drag_z` is the depth the square is pulled to while held, so it
    /// draws in front of everything it is dragged across.
    pub fn new(source_color: Srgba, position: Vec3, half_extents: Vec2, drag_z: f32) -> Self {
        Self {
            source_color,
            rest_position: position,
            position,
            half_extents,
            drag_z,
            dragging: false,
            drag_offset: Vec3::ZERO,
        }
    }

    pub const fn source_color(&self) -> Srgba {
        self.source_color
    }

    pub const fn position(&self) -> Vec3 {
        self.position
    }

    pub const fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_center_half_extents(self.position.truncate(), self.half_extents)
    }

    /// Starts a drag. A press while already dragging is a no-op (the grab
    /// offset must not change mid-gesture), as is a press with no viewer.
    pub fn press(&mut self, viewer: Option<&dyn PointerViewer>, screen: Vec2) {
        if self.dragging {
            return;
        }
        let Some(grabbed) = viewer.and_then(|v| v.project_to_plane(screen, self.position.z))
        else {
            return;
        };
        // Keep the grab point under the pointer instead of snapping the
        // square's center to it.
        self.drag_offset = self.position - grabbed;
        self.dragging = true;
    }

    /// Follows the pointer while held. Projection happens at the square's
    /// current depth, then the square is pulled to `drag_z`.
    pub fn drag(&mut self, viewer: Option<&dyn PointerViewer>, screen: Vec2) {
        if !self.dragging {
            return;
        }
        let Some(under_pointer) = viewer.and_then(|v| v.project_to_plane(screen, self.position.z))
        else {
            return;
        };
        let mut world = under_pointer + self.drag_offset;
        world.z = self.drag_z;
        self.position = world;
    }

    /// Ends a drag. Returns `None` if the square was not being dragged
    /// (a stray release is ignored). Otherwise the drop is judged first,
    /// then the square unconditionally snaps back to its rest position.
    pub fn release(
        &mut self,
        mixer: Option<&mut ColorMixer>,
        mixer_bounds: Option<Aabb2>,
    ) -> Option<DropOutcome> {
        if !self.dragging {
            return None;
        }
        let outcome = self.try_apply(mixer, mixer_bounds);
        self.dragging = false;
        self.position = self.rest_position;
        Some(outcome)
    }

    fn try_apply(
        &self,
        mixer: Option<&mut ColorMixer>,
        mixer_bounds: Option<Aabb2>,
    ) -> DropOutcome {
        let Some(mixer) = mixer else {
            warn!("dropped a square with no mixer wired to it");
            return DropOutcome::Invalid(DropError::MissingMixer);
        };
        let Some(target) = mixer_bounds else {
            warn!("mixer has no queryable bounds, skipping the blend");
            return DropOutcome::Invalid(DropError::MissingBounds);
        };
        if self.bounds().overlaps(&target) {
            mixer.mix(self.source_color);
            DropOutcome::Mixed(mixer.current())
        } else {
            info!("dropped but not overlapping the mixer");
            DropOutcome::Missed
        }
    }
}
