use tracing::trace;

use crate::error::PricingError;

/// An equal partition of `[start, end]` into `steps` sub-intervals, i.e. `steps + 1` points
/// `start + i * (end - start) / steps`.
///
/// `end < start` is allowed and yields a decreasing mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh {
    steps: usize,
    start: f64,
    end: f64,
}

impl Mesh {
    pub fn new(steps: usize, start: f64, end: f64) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::EmptyMesh);
        }
        for bound in [start, end] {
            if !bound.is_finite() {
                return Err(PricingError::InvalidMeshBound(bound));
            }
        }
        Ok(Self { steps, start, end })
    }

    pub fn len(&self) -> usize {
        self.steps + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn width(&self) -> f64 {
        (self.end - self.start) / self.steps as f64
    }

    pub fn point(&self, i: usize) -> f64 {
        self.start + i as f64 * self.width()
    }

    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.steps).map(move |i| self.point(i))
    }

    /// Evaluates `f` at every point, in order, stopping at the first error.
    pub fn evaluate<F>(&self, mut f: F) -> Result<Vec<(f64, f64)>, PricingError>
    where
        F: FnMut(f64) -> Result<f64, PricingError>,
    {
        let mut values = Vec::with_capacity(self.len());
        for (i, x) in self.points().enumerate() {
            let value = f(x)?;
            trace!(i, x, value, "mesh point");
            values.push((x, value));
        }
        Ok(values)
    }
}
