use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dictation_backend::domain::{report, GameMachine};
use dictation_cli::play::{ask_play_again, render_report};
use dictation_cli::{
    export_results, persist, run, Announcer, CliError, CommandSynth, Flow, NullSynth, Synth,
    WordSource,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dictation", about = "Dictation Champ spelling game for the terminal")]
struct Args {
    /// Words to practise, separated by commas or newlines
    #[arg(long, conflicts_with = "file")]
    words: Option<String>,

    /// CSV or Excel file holding the word list
    #[arg(long)]
    file: Option<PathBuf>,

    /// Seed for reproducible word draws and tile order
    #[arg(long)]
    seed: Option<u64>,

    /// Backend base URL; finished sessions are saved there
    #[arg(long, env = "DICTATION_SERVER")]
    server: Option<String>,

    /// espeak-compatible speech program
    #[arg(long, env = "DICTATION_SPEECH_COMMAND", default_value = "espeak-ng")]
    speech_command: String,

    /// Voice name passed to the speech program
    #[arg(long)]
    voice: Option<String>,

    /// Play without speech
    #[arg(long)]
    mute: bool,

    /// Write results as CSV to this file or directory
    #[arg(long)]
    export: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

async fn play(args: Args) -> Result<(), CliError> {
    let bank = WordSource::from_args(args.words, args.file)?.load()?;

    let mut machine = GameMachine::new(args.seed);
    machine.load_word_bank(bank.clone())?;
    machine.initialize_game()?;

    let synth: Box<dyn Synth> = if args.mute {
        Box::new(NullSynth)
    } else {
        Box::new(CommandSynth::new(args.speech_command))
    };
    let mut announcer = Announcer::new(synth, args.voice);

    let mut input = io::stdin().lock();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    loop {
        let flow = run(&mut machine, &mut announcer, &mut input, &mut out)?;
        if flow != Flow::Completed {
            writeln!(out, "Bye!")?;
            return Ok(());
        }

        render_report(&mut out, &report(machine.results()), &machine)?;
        if let Some(target) = args.export.as_deref() {
            let path = export_results(target, machine.results())?;
            writeln!(out, "Results saved to {}", path.display())?;
        }
        out.flush()?;

        if let (Some(server), Some(summary)) = (args.server.as_deref(), machine.summary()) {
            if let Some(id) = persist::save_best_effort(server, summary).await {
                writeln!(out, "Session #{id} saved.")?;
            }
        }

        if !ask_play_again(&mut input, &mut out)? {
            return Ok(());
        }
        machine.reset_game();
        machine.load_word_bank(bank.clone())?;
        machine.initialize_game()?;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match play(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "dictation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
