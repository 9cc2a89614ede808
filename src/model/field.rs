use super::Domain;

/// A scalar concentration field stored row-major, `idx(x, y) = y * nx + x`.
///
/// Dimensions are fixed at construction. Indexing outside the domain panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    domain: Domain,
    data: Vec<f64>,
}

impl Field {
    pub fn new(domain: Domain, fill: f64) -> Self {
        Self {
            domain,
            data: vec![fill; domain.size()],
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }
    pub fn width(&self) -> usize {
        self.domain.nx
    }
    pub fn height(&self) -> usize {
        self.domain.ny
    }
    pub fn shape(&self) -> (usize, usize) {
        self.domain.shape()
    }

    pub fn same_shape(&self, other: &Field) -> bool {
        self.domain == other.domain
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.domain.nx && y < self.domain.ny,
            "cell ({}, {}) out of bounds for {}x{} field",
            x,
            y,
            self.domain.nx,
            self.domain.ny
        );
        y * self.domain.nx + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        let i = self.idx(x, y);
        self.data[i] = value;
    }

    /// New field with identical dimensions and values.
    pub fn clone_same_shape(&self) -> Self {
        self.clone()
    }

    /// Overwrites every cell with the values of `src`. Shapes must match.
    pub fn copy_from(&mut self, src: &Field) {
        assert!(self.same_shape(src), "copy between fields of different shape");
        self.data.copy_from_slice(&src.data);
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }
}
