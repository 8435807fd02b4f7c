use mars_rover_core::{Heading, Position};
use proptest::prelude::*;

fn heading() -> impl Strategy<Value = Heading> {
    prop::sample::select(Heading::ALL.to_vec())
}

fn position() -> impl Strategy<Value = Position> {
    (any::<i32>(), any::<i32>(), heading()).prop_map(|(x, y, h)| Position::new(x, y, h))
}

proptest! {
    #[test]
    fn rotations_are_mutual_inverses(h in heading()) {
        prop_assert_eq!(h.rotate_left().rotate_right(), h);
        prop_assert_eq!(h.rotate_right().rotate_left(), h);
    }

    #[test]
    fn four_right_turns_complete_a_cycle(h in heading()) {
        prop_assert_eq!(h.rotate_right().rotate_right().rotate_right().rotate_right(), h);
        prop_assert_ne!(h.rotate_right(), h);
    }

    #[test]
    fn backward_undoes_forward(p in position()) {
        prop_assert_eq!(p.step_forward().step_backward(), p);
        prop_assert_eq!(p.step_backward().step_forward(), p);
    }

    #[test]
    fn steps_change_exactly_one_axis_by_one(p in position()) {
        let next = p.step_forward();
        let dx = next.x().wrapping_sub(p.x()).unsigned_abs();
        let dy = next.y().wrapping_sub(p.y()).unsigned_abs();
        prop_assert_eq!(dx + dy, 1);
        prop_assert_eq!(next.heading(), p.heading());
    }
}

#[test]
fn right_rotation_is_clockwise() {
    assert_eq!(Heading::North.rotate_right(), Heading::East);
    assert_eq!(Heading::East.rotate_right(), Heading::South);
    assert_eq!(Heading::South.rotate_right(), Heading::West);
    assert_eq!(Heading::West.rotate_right(), Heading::North);
}
