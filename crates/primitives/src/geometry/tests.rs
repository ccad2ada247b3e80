use super::Vec2;

#[test]
fn zero_vector_is_not_nonzero() {
	assert!(!Vec2::ZERO.is_nonzero());
	assert!(!Vec2::new(-0.0, 0.0).is_nonzero());
}

#[test]
fn any_component_makes_vector_nonzero() {
	assert!(Vec2::new(0.001, 0.0).is_nonzero());
	assert!(Vec2::new(0.0, -250.0).is_nonzero());
}

#[test]
fn nan_delta_counts_as_motion() {
	assert!(Vec2::new(f32::NAN, 0.0).is_nonzero());
}

#[test]
fn converts_from_tuples_and_arrays() {
	assert_eq!(Vec2::from((1.5, 2.0)), Vec2::new(1.5, 2.0));
	assert_eq!(Vec2::from([3.0, 4.0]), Vec2::new(3.0, 4.0));
}
