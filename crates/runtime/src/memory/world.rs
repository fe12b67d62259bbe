use copilot_core::{ProviderError, ScreenPoint, WorldSnapshot};
use glam::Vec3;

use crate::api::WorldStateProvider;

/// Flat camera: screen = origin + (x, y) * scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearProjection {
    pub origin: ScreenPoint,
    pub scale: f32,
}

impl LinearProjection {
    pub const fn new(origin: ScreenPoint, scale: f32) -> Self {
        Self { origin, scale }
    }

    pub fn project(&self, point: Vec3) -> ScreenPoint {
        ScreenPoint::from_f32(
            self.origin.x as f32 + point.x * self.scale,
            self.origin.y as f32 + point.y * self.scale,
        )
    }
}

impl Default for LinearProjection {
    fn default() -> Self {
        Self::new(ScreenPoint::ORIGIN, 1.0)
    }
}

/// World provider serving whatever snapshot it was last given.
#[derive(Clone, Debug, Default)]
pub struct StaticWorld {
    snapshot: WorldSnapshot,
    projection: LinearProjection,
    fail_snapshot: bool,
    fail_projection: bool,
    captures: usize,
}

impl StaticWorld {
    pub fn new(snapshot: WorldSnapshot) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    pub fn with_projection(mut self, projection: LinearProjection) -> Self {
        self.projection = projection;
        self
    }

    pub fn failing_snapshot(mut self, fail: bool) -> Self {
        self.fail_snapshot = fail;
        self
    }

    pub fn failing_projection(mut self, fail: bool) -> Self {
        self.fail_projection = fail;
        self
    }

    pub fn set_snapshot(&mut self, snapshot: WorldSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot_mut(&mut self) -> &mut WorldSnapshot {
        &mut self.snapshot
    }

    pub fn set_fail_snapshot(&mut self, fail: bool) {
        self.fail_snapshot = fail;
    }

    pub fn set_fail_projection(&mut self, fail: bool) {
        self.fail_projection = fail;
    }

    pub fn projection(&self) -> LinearProjection {
        self.projection
    }

    /// Number of successful snapshot captures.
    pub fn captures(&self) -> usize {
        self.captures
    }
}

impl WorldStateProvider for StaticWorld {
    fn snapshot(&mut self) -> Result<WorldSnapshot, ProviderError> {
        if self.fail_snapshot {
            return Err(ProviderError::snapshot_unavailable("capture disabled"));
        }
        self.captures += 1;
        Ok(self.snapshot.clone())
    }

    fn world_to_screen(&self, point: Vec3) -> Result<ScreenPoint, ProviderError> {
        if self.fail_projection {
            return Err(ProviderError::projection_failed(point));
        }
        Ok(self.projection.project(point))
    }
}
