use bevy::math::primitives::InfinitePlane3d;
use bevy::prelude::*;
use mixer_core::PointerViewer;

/// Pointer projection through the scene camera: cast a viewport ray and
/// walk it to the z plane the square currently lives on. Built fresh per
/// event; no camera means no viewer and the event is simply dropped.
pub struct CameraViewer<'a> {
    camera: &'a Camera,
    transform: &'a GlobalTransform,
}

impl<'a> CameraViewer<'a> {
    pub fn single(camera: &'a Query<(&Camera, &GlobalTransform)>) -> Option<Self> {
        camera
            .get_single()
            .ok()
            .map(|(camera, transform)| Self { camera, transform })
    }
}

impl PointerViewer for CameraViewer<'_> {
    fn project_to_plane(&self, screen: Vec2, plane_z: f32) -> Option<Vec3> {
        let ray = self.camera.viewport_to_world(self.transform, screen).ok()?;
        let distance =
            ray.intersect_plane(Vec3::new(0.0, 0.0, plane_z), InfinitePlane3d::new(Vec3::Z))?;
        Some(ray.get_point(distance))
    }
}
