//! Frame production: world points to drawable screen points

use crate::cloud::PointCloud;
use crate::projection::Projection;
use crate::vector::Vector2;
use crate::viewer::ViewerState;

/// Capability seam for drawing surfaces
///
/// The kernel emits screen points through this trait and carries no
/// dependency on any particular display technology.
pub trait PointSink {
    fn emit(&mut self, point: Vector2);
}

/// One render pass over a point cloud
///
/// Borrows the post-mutation viewer state and projection; the produced
/// sequence is lazy, finite, and restartable, and preserves the relative
/// order of the input points (culled points are simply absent).
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    viewer: &'a ViewerState,
    projection: &'a Projection,
}

impl<'a> Frame<'a> {
    pub fn new(viewer: &'a ViewerState, projection: &'a Projection) -> Self {
        Self { viewer, projection }
    }

    /// Screen points for every visible world point
    ///
    /// Each point goes world → camera (`orientation.rotate(world - eye)`)
    /// → near-plane cull → pinhole projection. A culled point never
    /// aborts the pass.
    pub fn points(&self, cloud: &'a PointCloud) -> impl Iterator<Item = Vector2> + 'a {
        let viewer = *self.viewer;
        let projection = *self.projection;
        cloud.points().filter_map(move |world| {
            let camera = viewer.orientation.rotate(*world - viewer.eye);
            projection.project(&camera)
        })
    }

    /// Drive one full pass through a drawing surface
    pub fn render_into(&self, cloud: &PointCloud, sink: &mut impl PointSink) {
        for point in self.points(cloud) {
            sink.emit(point);
        }
    }
}
