use crate::error::{ElementError, ElementResult};
use crate::geometry::{Point, Rect};

/// Rejects resize factors that are NaN, infinite, zero or negative
pub fn validate_factor(factor: f64) -> ElementResult {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(ElementError::InvalidResizeFactor(factor))
    }
}

/// Scales an integer dimension, rounding half away from zero.
///
/// Each call rounds independently, so `scale(scale(v, a), b)` can differ from
/// `scale(v, a * b)` by one unit.
pub(crate) fn scale_dimension(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor).round() as i32
}

/// Position and integer extent shared by rectangular leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoxGeometry {
    pub(crate) origin: Point,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl BoxGeometry {
    pub(crate) fn new(origin: Point, width: i32, height: i32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.origin = self.origin.translated(dx, dy);
    }

    /// Scales width and height around a fixed origin
    pub(crate) fn scale(&mut self, factor: f64) -> ElementResult {
        validate_factor(factor)?;
        self.width = scale_dimension(self.width, factor);
        self.height = scale_dimension(self.height, factor);
        Ok(())
    }

    pub(crate) fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_factor() {
        assert!(validate_factor(1.5).is_ok());
        assert!(validate_factor(f64::MIN_POSITIVE).is_ok());
        assert_eq!(
            validate_factor(0.0),
            Err(ElementError::InvalidResizeFactor(0.0))
        );
        assert!(validate_factor(-2.0).is_err());
        assert!(validate_factor(f64::NAN).is_err());
        assert!(validate_factor(f64::INFINITY).is_err());
    }

    #[test]
    fn test_scale_dimension_rounds_to_nearest() {
        assert_eq!(scale_dimension(15, 1.5), 23);
        assert_eq!(scale_dimension(10, 0.25), 3);
        assert_eq!(scale_dimension(10, 0.24), 2);
        assert_eq!(scale_dimension(1, 0.1), 0);
    }

    #[test]
    fn test_rejected_scale_leaves_geometry() {
        let mut geometry = BoxGeometry::new(Point::new(1, 1), 10, 20);
        assert!(geometry.scale(-1.0).is_err());
        assert_eq!(geometry.rect(), Rect::new(1, 1, 10, 20));
    }
}
