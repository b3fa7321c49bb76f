use approx::assert_relative_eq;

use crate::Circle;

pub fn assert_relative_eq_circle(left: Circle, right: Circle) {
    assert_relative_eq!(left.radius.get(), right.radius.get());
    assert_relative_eq!(left.centre_x, right.centre_x);
    assert_relative_eq!(left.centre_y, right.centre_y);
}
