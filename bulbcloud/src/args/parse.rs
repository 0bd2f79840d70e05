use anyhow::{Context, Result};
use serde::{de::IgnoredAny, Deserialize};

use mandelbulb_core::bulb::MandelbulbParameters;

use super::{CommandArgs, Output, SampleArgs};

impl SampleArgs {
    pub fn try_parse(command_args: CommandArgs) -> Result<Self> {
        let ron_args = into_ron_args(command_args);

        // Check for the overall config structure
        //  (1) are all required fields defined
        //  (2) are any unknown fields defined
        let SampleArgsFields { .. } = try_partial_parse("sample", &ron_args)?;

        let parameters: MandelbulbParameters = try_partial_parse("sample", &ron_args)?;
        let SampleArgsOutputOnly { output } = try_partial_parse("sample", &ron_args)?;

        Ok(Self { parameters, output })
    }
}

/// Joins the `command_args` into a single RON struct `String`
fn into_ron_args(command_args: CommandArgs) -> String {
    let ron_args = command_args.args.join(" ");
    let ron_args_trimmed = ron_args.trim();

    let mut ron_args = String::from("#![enable(implicit_some)]");
    ron_args.reserve(ron_args_trimmed.len() + 2);

    let wrap = !ron_args_trimmed.starts_with('(');

    if wrap {
        ron_args.push('(');
    }
    ron_args.push_str(ron_args_trimmed);
    if wrap {
        ron_args.push(')');
    }

    ron_args
}

fn try_partial_parse<'de, D: Deserialize<'de>>(subcommand: &str, ron_args: &'de str) -> Result<D> {
    let mut de_ron = ron::Deserializer::from_str(ron_args).with_context(|| {
        format!(
            "Failed to create the {} subcommand argument parser.",
            subcommand
        )
    })?;

    let mut track = serde_path_to_error::Track::new();
    let de = serde_path_to_error::Deserializer::new(&mut de_ron, &mut track);

    match D::deserialize(de) {
        Ok(args) => Ok(args),
        Err(err) => {
            let path = track.path();
            let nested = path.iter().count() >= 1;

            Err(anyhow::Error::msg(format!(
                "{}{}{}: {}",
                subcommand,
                if nested { "." } else { "" },
                path,
                err,
            )))
        },
    }
    .with_context(|| format!("Failed to parse the {} subcommand arguments.", subcommand))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename = "Sample")]
#[allow(dead_code)]
struct SampleArgsFields {
    #[serde(default)]
    resolution: IgnoredAny,
    #[serde(default)]
    iterations: IgnoredAny,
    #[serde(default)]
    exponent: IgnoredAny,
    #[serde(default)]
    bailout: IgnoredAny,
    #[serde(default)]
    bounds: IgnoredAny,
    output: IgnoredAny,
}

#[derive(Deserialize)]
#[serde(rename = "Sample")]
struct SampleArgsOutputOnly {
    output: Output,
}
