use bytemuck::{Pod, Zeroable};

pub const SPRITE_SOURCE: &str = include_str!("sprite.wgsl");

/// Uniform block shared by the vertex and fragment stages. Field order and
/// padding match `Uniforms` in `sprite.wgsl`.
///
/// The view and projection transforms stay separate because the quad
/// corners are offset in view space, between the two.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub half_size: f32,
    pub phase: f32,
    pub _padding: [f32; 2],
}
