use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min = points[0];
        let mut max = points[0];
        for &p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Length of the box diagonal. Used to fit the view distance to a mesh.
    pub fn diagonal(&self) -> f64 {
        self.extents().length()
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_from_points() {
        let pts = vec![dvec3(1.0, 2.0, 3.0), dvec3(-1.0, 5.0, 0.0), dvec3(3.0, -1.0, 2.0)];
        let aabb = Aabb3::from_points(&pts).unwrap();
        assert_eq!(aabb.min, dvec3(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, dvec3(3.0, 5.0, 3.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Aabb3::from_points(&[]).is_none());
    }

    #[test]
    fn test_center_and_diagonal() {
        let aabb = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(2.0, 2.0, 1.0));
        assert_eq!(aabb.center(), dvec3(1.0, 1.0, 0.5));
        assert!((aabb.diagonal() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_merge() {
        let a = Aabb3::new(dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 1.0));
        let b = Aabb3::new(dvec3(-1.0, 0.5, 0.0), dvec3(0.5, 2.0, 1.0));
        let m = a.merge(&b);
        assert_eq!(m.min, dvec3(-1.0, 0.0, 0.0));
        assert_eq!(m.max, dvec3(1.0, 2.0, 1.0));
    }
}
