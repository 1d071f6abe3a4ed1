use crate::cli::ConvertArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress;
use cubeio::core::io::cube::{CubeFile, CubeMetadata};
use cubeio::core::io::traits::VolumetricFile;
use tracing::{debug, info};

pub fn run(args: ConvertArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    info!("Converting {:?} -> {:?}", &args.input, &args.output);

    let pb = progress::spinner(format!("Reading {}", args.input.display()), quiet);
    let loaded = CubeFile::read_from_path(&args.input);
    let (mut volume, input_metadata) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            pb.finish_and_clear();
            return Err(CliError::from_cube(&args.input, e));
        }
    };

    if let Some(factor) = args.scale {
        if !factor.is_finite() {
            pb.finish_and_clear();
            return Err(CliError::Argument(format!(
                "Scale factor must be finite, got {}",
                factor
            )));
        }
        debug!(factor, "Scaling samples");
        volume.data_mut().iter_mut().for_each(|v| *v *= factor);
    }

    let metadata = output_metadata(&args, config, input_metadata);
    debug!(?metadata, "Resolved output comment lines");

    pb.set_message(format!("Writing {}", args.output.display()));
    let written = CubeFile::write_to_path(&volume, &metadata, &args.output);
    pb.finish_and_clear();
    written.map_err(|e| CliError::from_cube(&args.output, e))?;

    info!(
        "Wrote {} samples and {} atoms to {:?}",
        volume.data().len(),
        volume.atom_count(),
        &args.output
    );
    Ok(())
}

/// Picks the two comment lines of the output.
///
/// Input comments win when requested on the command line or in the config. Otherwise
/// `--title` and `--comment` override the configured banner line by line.
fn output_metadata(args: &ConvertArgs, config: &AppConfig, input: CubeMetadata) -> CubeMetadata {
    if args.keep_comments || config.writer.keep_comments {
        return input;
    }
    let banner = config.writer.banner();
    let [title, comment] = banner.comments;
    CubeMetadata {
        comments: [
            args.title.clone().unwrap_or(title),
            args.comment.clone().unwrap_or(comment),
        ],
    }
}
