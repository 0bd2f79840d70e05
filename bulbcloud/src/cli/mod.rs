use std::path::PathBuf;

use crate::args::Function;

pub mod evaluate;
pub mod sample;

#[allow(clippy::module_name_repetitions)]
#[derive(thiserror::Error, displaydoc::Display, Debug)]
pub enum CliError {
    /// {function} takes {expected} argument(s) but {given} were given
    ArityMismatch {
        function: Function,
        expected: usize,
        given: usize,
    },
    /// output file {0:?} already exists, set `overwrite: true` to replace it
    OutputExists(PathBuf),
}
