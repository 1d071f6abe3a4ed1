use crate::core::grid::{GridShape, generate_grid};
use crate::core::units::AU_TO_ANGSTROM;
use nalgebra::{Point3, Vector3};
use thiserror::Error;

/// One grid axis from the CUBE header: a voxel count and the step vector between
/// neighbouring voxels along that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeAxis {
    /// Voxel count exactly as written in the file. The sign carries format-specific
    /// meaning elsewhere and is ignored here; see [`voxel_len`](Self::voxel_len).
    pub voxel_count: i64,
    /// Step vector in bohr. All three components are kept, but only the diagonal one
    /// enters grid geometry.
    pub step: Vector3<f64>,
}

impl CubeAxis {
    pub fn new(voxel_count: i64, step: Vector3<f64>) -> Self {
        Self { voxel_count, step }
    }

    /// Number of voxels along this axis.
    #[inline]
    pub fn voxel_len(&self) -> usize {
        self.voxel_count.unsigned_abs() as usize
    }
}

/// An atom from the CUBE header.
///
/// The file stores five numbers per atom; the second (a nuclear charge slot) is not
/// kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeAtom {
    /// Atomic number as read, kept as a float.
    pub atomic_number: f64,
    /// Position in bohr.
    pub position: Point3<f64>,
}

impl CubeAtom {
    pub fn new(atomic_number: f64, position: Point3<f64>) -> Self {
        Self {
            atomic_number,
            position,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Volumetric data holds {found} samples but the grid has {expected} voxels")]
    LengthMismatch { expected: usize, found: usize },
    #[error("Shaped data does not match the grid: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },
}

/// A parsed (or writable) CUBE file.
///
/// Header fields are fixed at construction. The sample buffer may be modified in
/// place through [`data_mut`](Self::data_mut) or replaced wholesale, but its length
/// always equals the voxel count of the grid.
///
/// Derived data cached at construction:
///
/// - atom positions converted to angstrom,
/// - one Cartesian grid point (bohr) per voxel, index-aligned with the samples,
/// - the voxel volume from the diagonal step components.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeVolume {
    origin: Point3<f64>,
    axes: [CubeAxis; 3],
    atoms: Vec<CubeAtom>,
    data: Vec<f64>,
    coords_angstrom: Vec<Point3<f64>>,
    grid_points: Vec<Point3<f64>>,
    voxel_volume: f64,
}

impl CubeVolume {
    /// Builds a volume from header fields and a flat, row-major (`z` fastest) sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::LengthMismatch`] if `data` does not have exactly
    /// `NX * NY * NZ` entries.
    pub fn new(
        origin: Point3<f64>,
        axes: [CubeAxis; 3],
        atoms: Vec<CubeAtom>,
        data: Vec<f64>,
    ) -> Result<Self, ShapeError> {
        let shape = GridShape::from_axes(&axes);
        if data.len() != shape.len() {
            return Err(ShapeError::LengthMismatch {
                expected: shape.len(),
                found: data.len(),
            });
        }

        let coords_angstrom = atoms
            .iter()
            .map(|atom| Point3::from(atom.position.coords * AU_TO_ANGSTROM))
            .collect();
        let grid_points = generate_grid(&origin, &axes);
        let voxel_volume = axes[0].step.x * axes[1].step.y * axes[2].step.z;

        Ok(Self {
            origin,
            axes,
            atoms,
            data,
            coords_angstrom,
            grid_points,
            voxel_volume,
        })
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    pub fn axes(&self) -> &[CubeAxis; 3] {
        &self.axes
    }

    pub fn axis_x(&self) -> &CubeAxis {
        &self.axes[0]
    }

    pub fn axis_y(&self) -> &CubeAxis {
        &self.axes[1]
    }

    pub fn axis_z(&self) -> &CubeAxis {
        &self.axes[2]
    }

    pub fn shape(&self) -> GridShape {
        GridShape::from_axes(&self.axes)
    }

    pub fn atoms(&self) -> &[CubeAtom] {
        &self.atoms
    }

    /// Atom positions in angstrom, in declaration order.
    pub fn coords_angstrom(&self) -> &[Point3<f64>] {
        &self.coords_angstrom
    }

    /// Voxel positions in bohr; `grid_points()[n]` is where `data()[n]` was sampled.
    pub fn grid_points(&self) -> &[Point3<f64>] {
        &self.grid_points
    }

    pub fn voxel_volume(&self) -> f64 {
        self.voxel_volume
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Sample at voxel `(i, j, k)`, or `None` if out of range.
    pub fn value_at(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        let shape = self.shape();
        if i >= shape.nx || j >= shape.ny || k >= shape.nz {
            return None;
        }
        self.data.get(shape.to_flat(i, j, k)).copied()
    }

    /// Replaces the samples with a new flat buffer of the same length.
    pub fn set_data(&mut self, data: Vec<f64>) -> Result<(), ShapeError> {
        let expected = self.shape().len();
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                expected,
                found: data.len(),
            });
        }
        self.data = data;
        Ok(())
    }

    /// Replaces the samples from a nested `[i][j][k]` array, flattening it in grid order.
    pub fn set_data_shaped(&mut self, shaped: &[Vec<Vec<f64>>]) -> Result<(), ShapeError> {
        let shape = self.shape();
        let expected = (shape.nx, shape.ny, shape.nz);
        let mismatch = |found| ShapeError::DimensionMismatch { expected, found };

        if shaped.len() != shape.nx {
            return Err(mismatch((shaped.len(), 0, 0)));
        }
        let mut flat = vec![0.0; shape.len()];
        for (i, plane) in shaped.iter().enumerate() {
            if plane.len() != shape.ny {
                return Err(mismatch((shape.nx, plane.len(), 0)));
            }
            for (j, row) in plane.iter().enumerate() {
                if row.len() != shape.nz {
                    return Err(mismatch((shape.nx, shape.ny, row.len())));
                }
                for (k, &value) in row.iter().enumerate() {
                    flat[shape.to_flat(i, j, k)] = value;
                }
            }
        }
        self.data = flat;
        Ok(())
    }

    /// Returns the samples as a nested `[i][j][k]` array.
    pub fn data_shaped(&self) -> Vec<Vec<Vec<f64>>> {
        let shape = self.shape();
        (0..shape.nx)
            .map(|i| {
                (0..shape.ny)
                    .map(|j| {
                        let start = shape.to_flat(i, j, 0);
                        self.data[start..start + shape.nz].to_vec()
                    })
                    .collect()
            })
            .collect()
    }

    /// Sum of all samples times the voxel volume.
    pub fn integrate(&self) -> f64 {
        self.data.iter().sum::<f64>() * self.voxel_volume
    }

    /// Like [`integrate`](Self::integrate), restricted to voxels where `mask` is set.
    pub fn integrate_masked(&self, mask: &[bool]) -> f64 {
        self.data
            .iter()
            .zip(mask)
            .filter_map(|(value, &keep)| keep.then_some(*value))
            .sum::<f64>()
            * self.voxel_volume
    }
}
