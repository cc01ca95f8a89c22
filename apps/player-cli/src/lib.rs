//! Terminal player for Dictation Champ.

pub mod error;
pub mod persist;
pub mod play;
pub mod source;
pub mod speech;

pub use error::CliError;
pub use play::{apply, parse_command, run, Command, Flow};
pub use source::{export_results, WordSource};
pub use speech::{Announcer, CommandSynth, NullSynth, Synth};
