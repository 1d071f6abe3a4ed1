use crate::cli::InfoArgs;
use crate::error::{CliError, Result};
use crate::utils::progress;
use cubeio::core::elements;
use cubeio::core::grid::sphere_mask;
use cubeio::core::io::cube::{CubeFile, CubeMetadata};
use cubeio::core::io::traits::VolumetricFile;
use cubeio::core::models::volume::CubeVolume;
use nalgebra::Point3;
use tracing::info;

pub fn run(args: InfoArgs, quiet: bool) -> Result<()> {
    info!("Loading cube file from {:?}", &args.input);
    let pb = progress::spinner(format!("Reading {}", args.input.display()), quiet);
    let loaded = CubeFile::read_from_path(&args.input);
    pb.finish_and_clear();
    let (volume, metadata) = loaded.map_err(|e| CliError::from_cube(&args.input, e))?;

    let sphere = match args.sphere.as_deref() {
        Some(&[x, y, z, radius]) => {
            if radius < 0.0 {
                return Err(CliError::Argument(format!(
                    "Sphere radius must be non-negative, got {}",
                    radius
                )));
            }
            Some((Point3::new(x, y, z), radius))
        }
        Some(other) => {
            return Err(CliError::Argument(format!(
                "--sphere expects 4 values (X Y Z RADIUS), got {}",
                other.len()
            )));
        }
        None => None,
    };

    print!("{}", summarize(&volume, &metadata, sphere));
    Ok(())
}

pub fn summarize(
    volume: &CubeVolume,
    metadata: &CubeMetadata,
    sphere: Option<(Point3<f64>, f64)>,
) -> String {
    let shape = volume.shape();
    let origin = volume.origin();

    let mut lines = vec![
        format!("Comments:      {}", metadata.comments[0].trim()),
        format!("               {}", metadata.comments[1].trim()),
        format!(
            "Origin (bohr): {:12.6} {:12.6} {:12.6}",
            origin.x, origin.y, origin.z
        ),
    ];
    lines.extend(["X", "Y", "Z"].iter().zip(volume.axes()).map(|(label, axis)| {
        format!(
            "Axis {}:        {:5} x {:12.6} {:12.6} {:12.6}",
            label, axis.voxel_count, axis.step.x, axis.step.y, axis.step.z
        )
    }));
    lines.push(format!(
        "Voxels:        {} ({} x {} x {})",
        shape.len(),
        shape.nx,
        shape.ny,
        shape.nz
    ));
    lines.push(format!("Voxel volume:  {:.6e} bohr^3", volume.voxel_volume()));
    lines.push(format!("Integral:      {:.6e}", volume.integrate()));

    if let Some((center, radius)) = sphere {
        let mask = sphere_mask(volume.grid_points(), &center, radius);
        let inside = mask.iter().filter(|&&m| m).count();
        lines.push(format!(
            "Sphere:        {} voxels within {} bohr, integral {:.6e}",
            inside,
            radius,
            volume.integrate_masked(&mask)
        ));
    }

    lines.push(format!("Atoms:         {}", volume.atom_count()));
    for (atom, coords) in volume.atoms().iter().zip(volume.coords_angstrom()) {
        let symbol = u8::try_from(atom.atomic_number as i64)
            .ok()
            .and_then(elements::symbol)
            .unwrap_or("?");
        lines.push(format!(
            "  {:<3} {:5.1} {:12.6} {:12.6} {:12.6}  (angstrom)",
            symbol, atom.atomic_number, coords.x, coords.y, coords.z
        ));
    }

    lines.iter().map(|line| format!("{}\n", line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeio::core::models::volume::{CubeAtom, CubeAxis};
    use nalgebra::Vector3;

    fn volume() -> CubeVolume {
        let axes = [
            CubeAxis::new(2, Vector3::new(1.0, 0.0, 0.0)),
            CubeAxis::new(2, Vector3::new(0.0, 1.0, 0.0)),
            CubeAxis::new(2, Vector3::new(0.0, 0.0, 0.5)),
        ];
        let atoms = vec![CubeAtom::new(6.0, Point3::new(0.0, 0.0, 1.0))];
        CubeVolume::new(Point3::origin(), axes, atoms, vec![1.0; 8]).unwrap()
    }

    #[test]
    fn summarize_reports_shape_integral_and_atoms() {
        let text = summarize(&volume(), &CubeMetadata::default(), None);

        assert!(text.contains("Comments:      CUBE file"));
        assert!(text.contains("Voxels:        8 (2 x 2 x 2)"));
        assert!(text.contains("Voxel volume:  5.000000e-1 bohr^3"));
        assert!(text.contains("Integral:      4.000000e0"));
        assert!(text.contains("Atoms:         1"));
        assert!(text.contains("  C     6.0"));
        assert!(!text.contains("Sphere:"));
    }

    #[test]
    fn summarize_emits_one_terminated_line_per_entry() {
        let text = summarize(&volume(), &CubeMetadata::default(), None);
        assert_eq!(text.lines().count(), 11);
        assert!(text.ends_with("(angstrom)\n"));
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn summarize_integrates_inside_sphere() {
        let text = summarize(
            &volume(),
            &CubeMetadata::default(),
            Some((Point3::origin(), 0.6)),
        );
        assert!(text.contains("Sphere:        2 voxels within 0.6 bohr, integral 1.000000e0"));
    }
}
