#[cfg(test)]
mod test_utils;

use crate::Radius;

/// A circle described by its radius and centre.
///
/// Only a data carrier for now: nothing converts it to path commands yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub radius: Radius,
    pub centre_x: f64,
    pub centre_y: f64,
}

impl Circle {
    pub fn new(radius: Radius, centre_x: f64, centre_y: f64) -> Self {
        Circle {
            radius,
            centre_x,
            centre_y,
        }
    }

    pub fn set(&mut self, c: Circle) {
        *self = c;
    }

    pub fn centre(&self) -> (f64, f64) {
        (self.centre_x, self.centre_y)
    }
}
