//! Collections of pairwise-distinct polygons.

use super::Polygon;
use crate::error::GeometryError;
use crate::log::debug;

/// Polygons in insertion order, no two of them equal.
///
/// Equality is the polygon's own: the same ring listed from another vertex
/// or in the opposite direction counts as a duplicate.
///
/// # Example
///
/// ```
/// use planum::{Point, Polygon, UniquePolygons};
///
/// let p = |x, y| Point::new(x, y).unwrap();
/// let mut rooms = UniquePolygons::new();
/// rooms.add(Polygon::new(&[p(1.0, 1.0), p(1.0, 2.0), p(2.0, 2.0)]).unwrap()).unwrap();
///
/// // Same triangle, walked the other way
/// let again = Polygon::new(&[p(2.0, 2.0), p(1.0, 2.0), p(1.0, 1.0)]).unwrap();
/// assert!(rooms.contains(&again));
/// assert!(rooms.add(again).is_err());
/// assert_eq!(rooms.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniquePolygons {
    polygons: Vec<Polygon>,
}

impl UniquePolygons {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `polygon`, failing with [`GeometryError::DuplicatePolygon`]
    /// if an equal polygon is already present.
    pub fn add(&mut self, polygon: Polygon) -> Result<(), GeometryError> {
        if let Some(index) = self.position(&polygon) {
            debug!(index, "rejecting duplicate polygon");
            return Err(GeometryError::DuplicatePolygon { index });
        }
        self.polygons.push(polygon);
        Ok(())
    }

    /// Returns `true` if a polygon equal to `polygon` is present.
    pub fn contains(&self, polygon: &Polygon) -> bool {
        self.position(polygon).is_some()
    }

    /// Index of the polygon equal to `polygon`, if any.
    pub fn position(&self, polygon: &Polygon) -> Option<usize> {
        self.polygons.iter().position(|p| p == polygon)
    }

    /// The polygon at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// Number of polygons.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Iterates over the polygons in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// The display form of every polygon, in insertion order.
    pub fn to_strings(&self) -> Vec<String> {
        self.polygons.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a UniquePolygons {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<UniquePolygons> for Vec<Polygon> {
    fn from(unique: UniquePolygons) -> Self {
        unique.polygons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Path, Point};

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        let vertices: Vec<Point> = coords
            .iter()
            .map(|&(x, y)| Point::new(x, y).unwrap())
            .collect();
        Polygon::new(&vertices).unwrap()
    }

    #[test]
    fn test_add_distinct() {
        let mut set = UniquePolygons::new();
        assert!(set.is_empty());
        set.add(poly(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]))
            .unwrap();
        set.add(poly(&[(5.0, 5.0), (6.0, 5.0), (5.0, 7.0)])).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().num_sides(), 3);
        assert!(set.get(2).is_none());
    }

    #[test]
    fn test_rejects_rotated_and_reflected_duplicates() {
        let mut set = UniquePolygons::new();
        set.add(poly(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]))
            .unwrap();
        set.add(poly(&[(5.0, 5.0), (6.0, 5.0), (5.0, 7.0)])).unwrap();

        let shifted = poly(&[(2.0, 2.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0)]);
        assert_eq!(
            set.add(shifted),
            Err(GeometryError::DuplicatePolygon { index: 0 })
        );
        let reversed = poly(&[(5.0, 7.0), (6.0, 5.0), (5.0, 5.0)]);
        assert_eq!(
            set.add(reversed),
            Err(GeometryError::DuplicatePolygon { index: 1 })
        );
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_contains_and_position() {
        let mut set = UniquePolygons::new();
        let triangle = poly(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert!(!set.contains(&triangle));
        set.add(triangle.clone()).unwrap();
        assert!(set.contains(&triangle));
        assert_eq!(set.position(&triangle), Some(0));
        assert!(!set.contains(&poly(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)])));
    }

    #[test]
    fn test_to_strings() {
        let mut set = UniquePolygons::new();
        set.add(poly(&[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)])).unwrap();
        assert_eq!(
            set.to_strings(),
            vec!["Poligono de 3 vertices: [(0,0), (3,0), (0,4)]".to_string()]
        );
    }

    #[test]
    fn test_iterate_against_path() {
        let mut set = UniquePolygons::new();
        set.add(poly(&[(7.0, 7.0), (7.0, 8.0), (8.0, 8.0), (8.0, 7.0)]))
            .unwrap();
        set.add(poly(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]))
            .unwrap();
        let path = Path::new(&[
            Point::new(0.0, 2.0).unwrap(),
            Point::new(5.0, 2.0).unwrap(),
        ])
        .unwrap();
        assert!(path.intersects_any(&set));
        assert_eq!(set.iter().count(), 2);
        let polygons: Vec<Polygon> = set.into();
        assert_eq!(polygons.len(), 2);
    }
}
