//! Pure per-record kernels of the sprite expansion pipeline.
//!
//! The GPU runs `sprite.wgsl`; the functions here mirror it statement for
//! statement so the coordinate-space and ordering contracts can be pinned
//! by unit tests without a device. Each kernel transforms one record and
//! shares no state with other invocations.

use glam::{Vec2, Vec3, Vec4};

/// Speed constant of the vertex-stage phase offset.
pub const PHASE_SPEED: f32 = 0.3;

/// View-space corner offsets of one sprite quad, in triangle-strip order.
pub const CORNERS: [Vec2; 4] = [
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Texture coordinates assigned to the four corners, same order.
pub const CORNER_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// One vertex emitted by [`expand`], still in view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteVertex {
    pub view_pos: Vec4,
    pub uv: Vec2,
    pub color: Vec4,
}

/// The vertex stage's phase-based position offset.
///
/// Computed for every vertex and then discarded: the emitted position is
/// the plain view transform of the particle position, with this offset
/// never added. Kept so the shader and this mirror agree on what the stage
/// computes.
pub fn phase_offset(position: Vec3, phase: f32) -> Vec3 {
    let mut bit_to_add = position.normalize_or_zero() * phase * PHASE_SPEED;
    let probe = bit_to_add + position;

    for axis in 0..3 {
        if probe[axis].abs() > 1.0 {
            bit_to_add -= position;
        }
    }

    bit_to_add
}

/// Expand one particle into a camera-facing quad.
///
/// `view_pos` is the particle position after the view transform. The four
/// vertices are offset by half-size along view-space x and y (z and w
/// untouched), carry the per-corner texture coordinates, and all share the
/// particle color. Projection happens after this step.
pub fn expand(view_pos: Vec4, half_size: f32, color: Vec4) -> [SpriteVertex; 4] {
    std::array::from_fn(|i| SpriteVertex {
        view_pos: view_pos + (CORNERS[i] * half_size).extend(0.0).extend(0.0),
        uv: CORNER_UVS[i],
        color,
    })
}

/// The fragment stage: RGB from the interpolated vertex color, alpha from
/// the mask sample at the interpolated texture coordinate.
pub fn shade(color: Vec4, mask_alpha: f32) -> Vec4 {
    Vec4::new(color.x, color.y, color.z, mask_alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_offsets_in_view_space() {
        let p = Vec4::new(1.0, 2.0, -5.0, 1.0);
        let color = Vec4::new(0.2, 0.4, 0.6, 1.0);
        let h = 0.1;
        let quad = expand(p, h, color);

        assert_eq!(quad[0].view_pos, Vec4::new(0.9, 1.9, -5.0, 1.0));
        assert_eq!(quad[1].view_pos, Vec4::new(1.1, 1.9, -5.0, 1.0));
        assert_eq!(quad[2].view_pos, Vec4::new(0.9, 2.1, -5.0, 1.0));
        assert_eq!(quad[3].view_pos, Vec4::new(1.1, 2.1, -5.0, 1.0));
    }

    #[test]
    fn test_expand_assigns_corner_uvs() {
        let quad = expand(Vec4::W, 0.05, Vec4::ONE);

        assert_eq!(quad[0].uv, Vec2::new(0.0, 0.0));
        assert_eq!(quad[1].uv, Vec2::new(1.0, 0.0));
        assert_eq!(quad[2].uv, Vec2::new(0.0, 1.0));
        assert_eq!(quad[3].uv, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_expand_passes_color_through() {
        let color = Vec4::new(0.9, 0.1, 0.3, 1.0);
        for v in expand(Vec4::W, 0.05, color) {
            assert_eq!(v.color, color);
        }
    }

    #[test]
    fn test_phase_offset_inside_unit_cube() {
        // a short position plus the offset stays inside the probe cube, so
        // the offset is just the scaled direction
        let offset = phase_offset(Vec3::new(0.3, 0.0, 0.0), 1.0);
        assert!((offset - Vec3::new(0.3, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_phase_offset_probe_subtracts_position() {
        // probe leaves the cube on one axis: the position is subtracted once
        let position = Vec3::new(0.9, 0.0, 0.0);
        let offset = phase_offset(position, 1.0);
        let expected = Vec3::new(0.3, 0.0, 0.0) - position;
        assert!((offset - expected).length() < 1e-6);
    }

    #[test]
    fn test_phase_offset_finite_at_origin() {
        let offset = phase_offset(Vec3::ZERO, 1.0);
        assert!(offset.is_finite());
    }

    #[test]
    fn test_shade_takes_alpha_from_mask() {
        let out = shade(Vec4::new(0.5, 0.6, 0.7, 1.0), 0.25);
        assert_eq!(out, Vec4::new(0.5, 0.6, 0.7, 0.25));
    }
}
