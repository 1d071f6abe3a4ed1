use super::models::volume::CubeAxis;
use nalgebra::{Point3, Vector3};

/// Voxel counts along x, y and z, and the row-major index mapping between a flat
/// sample index and its `(i, j, k)` voxel.
///
/// The last axis varies fastest: `n = i * (ny * nz) + j * nz + k`. The CUBE parser,
/// the grid-point generator and the writer all go through this type, so their
/// orderings cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridShape {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl GridShape {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Builds the shape from the absolute voxel counts of the three axes.
    pub fn from_axes(axes: &[CubeAxis; 3]) -> Self {
        Self::new(
            axes[0].voxel_len(),
            axes[1].voxel_len(),
            axes[2].voxel_len(),
        )
    }

    /// Total voxel count, or `None` if it does not fit in `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(self.nz)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn to_flat(&self, i: usize, j: usize, k: usize) -> usize {
        i * (self.ny * self.nz) + j * self.nz + k
    }

    /// Inverse of [`to_flat`](Self::to_flat).
    ///
    /// # Panics
    ///
    /// Panics if the shape has a zero `ny` or `nz`, since no flat index exists then.
    #[inline]
    pub fn from_flat(&self, n: usize) -> (usize, usize, usize) {
        let plane = self.ny * self.nz;
        (n / plane, (n / self.nz) % self.ny, n % self.nz)
    }

    /// Iterates over all `(i, j, k)` triples in flat order.
    pub fn indices(&self) -> impl Iterator<Item = (usize, usize, usize)> + use<> {
        let Self { nx, ny, nz } = *self;
        (0..nx).flat_map(move |i| (0..ny).flat_map(move |j| (0..nz).map(move |k| (i, j, k))))
    }
}

/// Expands the origin and axis steps into one Cartesian point per voxel, in flat order.
///
/// Only the diagonal component of each step vector is used (`x.step[0]`, `y.step[1]`,
/// `z.step[2]`); sheared grids are not supported. Output is in the same units as the
/// inputs (bohr for CUBE data).
pub fn generate_grid(origin: &Point3<f64>, axes: &[CubeAxis; 3]) -> Vec<Point3<f64>> {
    let shape = GridShape::from_axes(axes);
    let (dx, dy, dz) = (axes[0].step.x, axes[1].step.y, axes[2].step.z);

    let mut points = Vec::with_capacity(shape.len());
    points.extend(shape.indices().map(|(i, j, k)| {
        origin + Vector3::new(i as f64 * dx, j as f64 * dy, k as f64 * dz)
    }));
    points
}

/// Flags every grid point lying inside (or on) the sphere of `radius` around `center`.
///
/// The mask is index-aligned with the grid, so `mask[n]` selects `data[n]`.
pub fn sphere_mask(points: &[Point3<f64>], center: &Point3<f64>, radius: f64) -> Vec<bool> {
    let radius_sq = radius * radius;
    points
        .iter()
        .map(|p| (p - center).norm_squared() <= radius_sq)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes(nx: i64, ny: i64, nz: i64, step: f64) -> [CubeAxis; 3] {
        [
            CubeAxis::new(nx, Vector3::new(step, 0.0, 0.0)),
            CubeAxis::new(ny, Vector3::new(0.0, step, 0.0)),
            CubeAxis::new(nz, Vector3::new(0.0, 0.0, step)),
        ]
    }

    #[test]
    fn to_flat_uses_row_major_with_z_fastest() {
        let shape = GridShape::new(2, 3, 4);
        assert_eq!(shape.to_flat(0, 0, 0), 0);
        assert_eq!(shape.to_flat(0, 0, 1), 1);
        assert_eq!(shape.to_flat(0, 1, 0), 4);
        assert_eq!(shape.to_flat(1, 0, 0), 12);
        assert_eq!(shape.to_flat(1, 2, 3), 23);
    }

    #[test]
    fn from_flat_inverts_to_flat_for_every_voxel() {
        let shape = GridShape::new(3, 4, 5);
        for (n, (i, j, k)) in shape.indices().enumerate() {
            assert_eq!(shape.to_flat(i, j, k), n);
            assert_eq!(shape.from_flat(n), (i, j, k));
        }
        assert_eq!(shape.indices().count(), shape.len());
    }

    #[test]
    fn checked_len_detects_overflow() {
        assert_eq!(GridShape::new(2, 3, 4).checked_len(), Some(24));
        assert_eq!(GridShape::new(usize::MAX, 2, 1).checked_len(), None);
    }

    #[test]
    fn from_axes_uses_absolute_voxel_counts() {
        let shape = GridShape::from_axes(&axes(-2, 3, 4, 0.5));
        assert_eq!(shape, GridShape::new(2, 3, 4));
    }

    #[test]
    fn generate_grid_places_points_relative_to_origin() {
        let origin = Point3::new(-1.0, 2.0, 0.5);
        let grid = generate_grid(&origin, &axes(2, 2, 3, 0.25));

        assert_eq!(grid.len(), 12);
        assert_eq!(grid[0], origin);
        assert_eq!(grid[1], Point3::new(-1.0, 2.0, 0.75));
        assert_eq!(grid[3], Point3::new(-1.0, 2.25, 0.5));
        assert_eq!(grid[11], Point3::new(-0.75, 2.25, 1.0));
    }

    #[test]
    fn generate_grid_point_matches_flat_index_of_its_voxel() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        let axes = axes(3, 2, 4, 1.0);
        let shape = GridShape::from_axes(&axes);
        let grid = generate_grid(&origin, &axes);

        for (i, j, k) in shape.indices() {
            let p = grid[shape.to_flat(i, j, k)];
            assert_eq!(p, Point3::new(i as f64, j as f64, k as f64));
        }
    }

    #[test]
    fn generate_grid_ignores_off_diagonal_step_components() {
        let sheared = [
            CubeAxis::new(2, Vector3::new(1.0, 0.3, 0.1)),
            CubeAxis::new(2, Vector3::new(0.2, 1.0, 0.0)),
            CubeAxis::new(2, Vector3::new(0.5, 0.5, 1.0)),
        ];
        let origin = Point3::origin();
        assert_eq!(
            generate_grid(&origin, &sheared),
            generate_grid(&origin, &axes(2, 2, 2, 1.0))
        );
    }

    #[test]
    fn generate_grid_is_deterministic() {
        let origin = Point3::new(0.1, 0.2, 0.3);
        let axes = axes(4, 3, 2, 0.2);
        assert_eq!(generate_grid(&origin, &axes), generate_grid(&origin, &axes));
    }

    #[test]
    fn generate_grid_is_empty_for_zero_sized_axis() {
        let grid = generate_grid(&Point3::origin(), &axes(0, 3, 3, 1.0));
        assert!(grid.is_empty());
    }

    #[test]
    fn sphere_mask_selects_points_within_radius() {
        let grid = generate_grid(&Point3::origin(), &axes(3, 3, 3, 1.0));
        let mask = sphere_mask(&grid, &Point3::new(1.0, 1.0, 1.0), 1.0);

        assert_eq!(mask.len(), 27);
        assert_eq!(mask.iter().filter(|&&m| m).count(), 7);
        assert!(mask[GridShape::new(3, 3, 3).to_flat(1, 1, 1)]);
        assert!(!mask[0]);
    }
}
