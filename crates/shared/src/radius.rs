use derive_more::{Display, From, Into};

/// Radius of a round shape, in user units.
#[derive(Debug, Copy, Clone, Default, Display, From, Into, PartialEq, PartialOrd)]
pub struct Radius(f64);

impl Radius {
    pub fn new(v: f64) -> Self {
        Radius(v)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn diameter(self) -> f64 {
        self.0 * 2.0
    }

    /// Zero, negative and NaN radii describe nothing that can be drawn.
    pub fn is_degenerate(self) -> bool {
        !(self.0 > 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::Radius;

    #[test]
    fn conversions() {
        let r = Radius::from(2.5);
        assert_eq!(r.get(), 2.5);
        assert_eq!(f64::from(r), 2.5);
        assert_eq!(r.diameter(), 5.0);
        assert_eq!(Radius::new(5.0).to_string(), "5");
    }

    #[test]
    fn degenerate() {
        assert!(Radius::default().is_degenerate());
        assert!(Radius::new(-1.0).is_degenerate());
        assert!(Radius::new(f64::NAN).is_degenerate());
        assert!(!Radius::new(0.25).is_degenerate());
    }
}
