//! Session-owned point list.
//!
//! The surrounding UI session owns exactly one store; it is passed into
//! [`crate::compute_aspects`] explicitly rather than living in ambient
//! state, so independent sessions and tests stay isolated.

use crate::{codec, AspectError, Point, ZodiacSign};

#[derive(Debug, Default, Clone)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes and appends a point. Blank labels and out-of-range
    /// degree/minute are rejected without touching the list.
    pub fn add(
        &mut self,
        label: &str,
        sign: ZodiacSign,
        degree: u32,
        minute: u32,
    ) -> Result<(), AspectError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AspectError::InvalidInput(
                "point label must not be empty".to_string(),
            ));
        }
        let position = codec::encode(sign, degree, minute)?;
        self.points.push(Point {
            label: label.to_string(),
            position,
        });
        Ok(())
    }

    /// Removes the point at `index`, keeping the remaining points in their
    /// original relative order. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Registered points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_encodes_position() {
        let mut store = PointStore::new();
        store.add("Sun", ZodiacSign::Gemini, 26, 45).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.points()[0].label, "Sun");
        assert_eq!(store.points()[0].position, 2 * 1800 + 26 * 60 + 45);
    }

    #[test]
    fn test_add_rejects_blank_label() {
        let mut store = PointStore::new();
        assert!(matches!(
            store.add("", ZodiacSign::Aries, 0, 0),
            Err(AspectError::InvalidInput(_))
        ));
        assert!(matches!(
            store.add("   ", ZodiacSign::Aries, 0, 0),
            Err(AspectError::InvalidInput(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_angle() {
        let mut store = PointStore::new();
        assert!(store.add("Sun", ZodiacSign::Aries, 30, 0).is_err());
        assert!(store.add("Sun", ZodiacSign::Aries, 0, 60).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut store = PointStore::new();
        for label in ["Sun", "Moon", "Mars", "Venus"] {
            store.add(label, ZodiacSign::Aries, 0, 0).unwrap();
        }
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.label, "Moon");
        let labels: Vec<&str> = store.points().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Sun", "Mars", "Venus"]);
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut store = PointStore::new();
        store.add("Sun", ZodiacSign::Aries, 0, 0).unwrap();
        assert!(store.remove(1).is_none());
        assert_eq!(store.len(), 1);
    }
}
