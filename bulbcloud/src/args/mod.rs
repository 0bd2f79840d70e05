use std::path::PathBuf;

use serde::Deserialize;
use structopt::{clap::arg_enum, StructOpt};

use mandelbulb_core::bulb::MandelbulbParameters;

mod parse;

#[derive(Debug, StructOpt)]
#[allow(clippy::module_name_repetitions)]
pub enum BulbcloudArgs {
    /// Samples the surface of the Mandelbulb into a CSV point cloud
    Sample(CommandArgs),
    /// Evaluates a single scalar maths function with the selected backend
    Evaluate(EvaluateArgs),
}

#[derive(Debug, StructOpt)]
#[structopt(setting = structopt::clap::AppSettings::AllowLeadingHyphen)]
#[allow(clippy::module_name_repetitions)]
pub struct CommandArgs {
    /// The sampling configuration in RON, e.g. `output: (path: "bulb.csv")`
    args: Vec<String>,
}

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Function {
        Sqrt,
        Atan2,
        Pow,
        Sin,
        Cos,
        Remap
    }
}

impl Function {
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Sqrt | Self::Sin | Self::Cos => 1,
            Self::Atan2 | Self::Pow => 2,
            Self::Remap => 5,
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(setting = structopt::clap::AppSettings::AllowNegativeNumbers)]
#[allow(clippy::module_name_repetitions)]
pub struct EvaluateArgs {
    #[structopt(possible_values = &Function::variants(), case_insensitive = true)]
    pub function: Function,
    /// The function's arguments, `atan2` takes the ordinate first
    pub args: Vec<f32>,
}

#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SampleArgs {
    pub parameters: MandelbulbParameters,
    pub output: Output,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Output {
    pub path: PathBuf,
    #[serde(default)]
    pub overwrite: bool,
}
