//! Point cloud container and a sphere sampler for demo scenes

use crate::vector::Vector3;

/// An ordered collection of world-space points
///
/// Read-only to the kernel; points have no identity beyond their
/// position, and duplicates are legal and render independently.
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    points: Vec<Vector3>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Vector3>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: Vector3) {
        self.points.push(point);
    }

    pub fn extend(&mut self, other: &PointCloud) {
        self.points.extend_from_slice(&other.points);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &Vector3> {
        self.points.iter()
    }
}

/// Sample points on a sphere of radius `r` centered at `center`
///
/// Latitude rings are denser near the equator: the ring through latitude
/// index `i` holds `2·longitude_res / (1 + |i - mid|)` points, with `mid`
/// the middle latitude index. Purely a convenience data source; nothing
/// here touches the orientation kernel.
pub fn dot_sphere(
    r: f64,
    latitude_res: usize,
    longitude_res: usize,
    center: Vector3,
) -> PointCloud {
    use std::f64::consts::PI;

    let mut cloud = PointCloud::new();
    let mid = (latitude_res + 1) / 2;
    for i in 1..=latitude_res {
        let ring = 2 * longitude_res / (1 + i.abs_diff(mid));
        let polar = PI * i as f64 / (latitude_res + 1) as f64;
        for j in 0..ring {
            let azimuth = 2.0 * PI * j as f64 / ring as f64;
            cloud.push(Vector3::new(
                center.x + r * azimuth.cos() * polar.sin(),
                center.y + r * azimuth.sin() * polar.sin(),
                center.z + r * polar.cos(),
            ));
        }
    }
    cloud
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cloud_preserves_order_and_duplicates() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let cloud = PointCloud::from_points(vec![p, Vector3::ZERO, p]);
        assert_eq!(cloud.len(), 3);
        let collected: Vec<_> = cloud.points().copied().collect();
        assert_eq!(collected[0], p);
        assert_eq!(collected[2], p);
    }

    #[test]
    fn test_extend_appends() {
        let mut a = PointCloud::from_points(vec![Vector3::ZERO]);
        let b = PointCloud::from_points(vec![Vector3::new(1.0, 0.0, 0.0)]);
        a.extend(&b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_sphere_points_lie_on_sphere() {
        let center = Vector3::new(0.0, 0.0, 200.0);
        let cloud = dot_sphere(50.0, 5, 10, center);
        assert!(!cloud.is_empty());
        for p in cloud.points() {
            assert_relative_eq!((*p - center).magnitude(), 50.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sphere_rings_thin_toward_poles() {
        // lat_res 5, lon_res 10: rings of 6, 10, 20, 10, 6 points
        let cloud = dot_sphere(1.0, 5, 10, Vector3::ZERO);
        assert_eq!(cloud.len(), 6 + 10 + 20 + 10 + 6);
    }
}
