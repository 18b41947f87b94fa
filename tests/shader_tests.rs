//! Validation of the sprite shader.
//!
//! The WGSL is a static string compiled at device setup; these tests run it
//! through naga so a syntax or type error fails `cargo test` instead of the
//! first launch.

use nova::SPRITE_SOURCE;

fn validate(source: &str) -> naga::Module {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("WGSL parse error: {:?}", e));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("WGSL validation error: {:?}", e));

    module
}

#[test]
fn test_sprite_shader_validates() {
    validate(SPRITE_SOURCE);
}

#[test]
fn test_sprite_shader_has_both_entry_points() {
    let module = validate(SPRITE_SOURCE);

    let names: Vec<&str> = module
        .entry_points
        .iter()
        .map(|ep| ep.name.as_str())
        .collect();

    assert!(names.contains(&"vs_main"), "entry points: {names:?}");
    assert!(names.contains(&"fs_main"), "entry points: {names:?}");
}
