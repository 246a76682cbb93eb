// Orthographic camera for the tile map

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// 2D camera. World space is y-down (row 0 at the top of the map), so the
/// projection flips the vertical axis to put smaller y at the top of the
/// screen.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Center of the view in world space.
    pub position: Vec2,
    /// Zoom level (1.0 = one world pixel per screen pixel).
    pub zoom: f32,
    viewport_width: f32,
    viewport_height: f32,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        let half_width = (self.viewport_width / 2.0) / self.zoom;
        let half_height = (self.viewport_height / 2.0) / self.zoom;

        // Bottom/top swapped relative to the usual call: +y world is down.
        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half_width,
            self.position.x + half_width,
            self.position.y + half_height,
            self.position.y - half_height,
            -100.0,
            100.0,
        );
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_view_proj();
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.1);
        self.update_view_proj();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec4;

    fn project(camera: &Camera, world: Vec2) -> Vec2 {
        let clip = camera.view_proj_matrix() * Vec4::new(world.x, world.y, 0.0, 1.0);
        Vec2::new(clip.x, clip.y)
    }

    #[test]
    fn test_center_projects_to_origin() {
        let camera = Camera::new(Vec2::new(64.0, 48.0), 640.0, 480.0);
        let clip = project(&camera, Vec2::new(64.0, 48.0));
        assert_relative_eq!(clip.x, 0.0);
        assert_relative_eq!(clip.y, 0.0);
    }

    #[test]
    fn test_world_y_down_maps_to_screen_down() {
        let camera = Camera::new(Vec2::ZERO, 200.0, 200.0);
        // A point below the camera in world space (larger y) must land in
        // the lower half of clip space (negative y).
        let clip = project(&camera, Vec2::new(0.0, 50.0));
        assert!(clip.y < 0.0);
    }

    #[test]
    fn test_zoom_scales_extents() {
        let mut camera = Camera::new(Vec2::ZERO, 200.0, 200.0);
        let before = project(&camera, Vec2::new(50.0, 0.0)).x;
        camera.set_zoom(2.0);
        let after = project(&camera, Vec2::new(50.0, 0.0)).x;
        assert_relative_eq!(after, before * 2.0);
    }

    #[test]
    fn test_zoom_clamped_above_zero() {
        let mut camera = Camera::new(Vec2::ZERO, 200.0, 200.0);
        camera.set_zoom(0.0);
        assert!(camera.zoom >= 0.1);
    }
}
