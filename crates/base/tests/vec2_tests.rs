use base::Vec2;

#[test]
fn test_new_and_from_tuple() {
    assert_eq!(Vec2::new(3, 4), Vec2::from((3, 4)));
}

#[test]
fn test_add_sub() {
    let a = Vec2::new(10, 20);
    let b = Vec2::new(3, 5);
    assert_eq!(a + b, Vec2::new(13, 25));
    assert_eq!(a - b, Vec2::new(7, 15));
}

#[test]
fn test_area() {
    assert_eq!(Vec2::new(800usize, 600).area(), 480_000);
}

#[test]
fn test_cross_orientation() {
    let o = Vec2::new(0, 0);
    assert!(o.cross(Vec2::new(1, 0), Vec2::new(0, 1)) > 0);
    assert!(o.cross(Vec2::new(0, 1), Vec2::new(1, 0)) < 0);
    assert_eq!(o.cross(Vec2::new(1, 1), Vec2::new(2, 2)), 0);
}

#[test]
fn test_cross_no_overflow() {
    let o = Vec2::new(i32::MIN, i32::MIN);
    let a = Vec2::new(i32::MAX, i32::MIN);
    let b = Vec2::new(i32::MIN, i32::MAX);
    assert!(o.cross(a, b) > 0);
}

#[test]
fn test_debug_format() {
    assert_eq!(format!("{:?}", Vec2::new(1, -2)), "(1, -2)");
}
