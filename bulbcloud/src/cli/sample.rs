use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    time::Instant,
};

use anyhow::{Context, Result};

use mandelbulb_core::bulb::{Mandelbulb, MandelbulbParameters};
use mandelbulb_maths::{MathsCore, SelectedMathsCore};

use crate::args::{CommandArgs, Output, SampleArgs};

use super::CliError;

pub fn sample_with_cli(command_args: CommandArgs) -> Result<()> {
    let sample_args = SampleArgs::try_parse(command_args)?;

    log::info!("Parsed sample arguments:\n{:#?}", sample_args);

    let file = open_output(&sample_args.output)?;
    let mut writer = BufWriter::new(file);

    log::info!(
        "Sampling {} with the {} maths backend ...",
        describe_grid(&sample_args.parameters),
        mandelbulb_maths::backend_name()
    );

    let bulb = Mandelbulb::<SelectedMathsCore>::new(sample_args.parameters);

    let start = Instant::now();

    let points = write_surface(&bulb, &mut writer)
        .and_then(|points| writer.flush().map(|()| points))
        .with_context(|| {
            format!(
                "Failed to write the point cloud to {:?}.",
                sample_args.output.path
            )
        })?;

    log::info!(
        "Sampled {} surface points into {:?} in {}s.",
        points,
        sample_args.output.path,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn describe_grid(parameters: &MandelbulbParameters) -> String {
    format!(
        "a {0}x{0}x{0} grid over [{1}, {2}) with exponent {3} and {4} iterations",
        parameters.resolution,
        parameters.bounds.low(),
        parameters.bounds.high(),
        parameters.exponent,
        parameters.iterations,
    )
}

fn open_output(output: &Output) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);

    if output.overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    match options.open(&output.path) {
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            Err(CliError::OutputExists(output.path.clone()).into())
        },
        result => result
            .with_context(|| format!("Failed to open the output file {:?}.", output.path)),
    }
}

/// Writes one `x,y,z` row per surface point after a header row, returning
/// the number of points written.
fn write_surface<M: MathsCore, W: Write>(
    bulb: &Mandelbulb<M>,
    writer: &mut W,
) -> io::Result<u64> {
    let resolution = bulb.parameters().resolution.get();

    writeln!(writer, "x,y,z")?;

    let mut points = 0_u64;

    for i in 0..resolution {
        let mut slice_points = 0_u64;

        for point in bulb.slice(i) {
            writeln!(writer, "{},{},{}", point.x, point.y, point.z)?;

            slice_points += 1;
        }

        points += slice_points;

        log::info!(
            "Sampled slice {}/{} with {} surface points.",
            i + 1,
            resolution,
            slice_points
        );
    }

    Ok(points)
}
