use approx::assert_relative_eq;

pub fn assert_relative_eq_params(left: &[f64], right: &[f64]) {
    assert_eq!(left.len(), right.len(), "parameter counts differ");
    for (l, r) in left.iter().zip(right) {
        assert_relative_eq!(*l, *r);
    }
}
