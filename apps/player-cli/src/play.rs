//! Terminal rendition of the game screen and its command loop.

use std::io::{BufRead, Write};

use dictation_backend::domain::rules::ROUND_LENGTH;
use dictation_backend::domain::{GameMachine, Phase, Report, RoundState, TileId};
use thiserror::Error;
use tracing::debug;

use crate::error::CliError;
use crate::speech::Announcer;

const HELP: &str = "\
Commands:
  play                 hear the word again
  pick <tile>          put a tile in the first empty slot
  place <tile> <slot>  put a tile in a specific slot
  clear [slot]         empty one slot, or all of them
  type <word>          type the whole answer instead
  hint                 show the first-letter hint
  submit               check your answer
  next                 go to the next word
  quit                 stop playing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play,
    Pick(TileId),
    Place { tile: TileId, slot: usize },
    Clear(Option<usize>),
    Type(String),
    Hint,
    Submit,
    Next,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("`{0}` is not a number from 1 up")]
    BadNumber(String),
}

/// 1-based position typed by the player, as a 0-based index.
fn position(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadNumber(raw.to_string())),
    }
}

/// Parse one input line. Tiles and slots are numbered from 1.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err(CommandError::Unknown(String::new()));
    };
    let args: Vec<&str> = parts.collect();

    let cmd = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("play" | "p", _) => Command::Play,
        ("pick", [tile, ..]) => Command::Pick(TileId(position(tile)?)),
        ("pick", []) => return Err(CommandError::MissingArgument("pick", "a tile number")),
        ("place", [tile, slot, ..]) => Command::Place {
            tile: TileId(position(tile)?),
            slot: position(slot)?,
        },
        ("place", _) => {
            return Err(CommandError::MissingArgument(
                "place",
                "a tile number and a slot number",
            ))
        }
        ("clear", []) => Command::Clear(None),
        ("clear", [slot, ..]) => Command::Clear(Some(position(slot)?)),
        ("type", []) => return Err(CommandError::MissingArgument("type", "a word")),
        ("type", words) => Command::Type(words.join(" ")),
        ("hint" | "h", _) => Command::Hint,
        ("submit" | "s", _) => Command::Submit,
        ("next" | "n", _) => Command::Next,
        ("help" | "?", _) => Command::Help,
        ("quit" | "q" | "exit", _) => Command::Quit,
        (other, _) => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(cmd)
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Completed,
    Quit,
}

fn shout(word: &str) -> String {
    word.to_uppercase()
}

/// Header, prompt, slots and remaining tiles for the current round.
pub fn render_round<W: Write>(
    out: &mut W,
    round: &RoundState,
    score: u32,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Question {}/{}    Score {}",
        round.index + 1,
        ROUND_LENGTH,
        score
    )?;
    writeln!(out, "🎧 Listen and Spell the Word!")?;

    let slots: Vec<String> = round
        .board
        .slot_letters()
        .iter()
        .enumerate()
        .map(|(i, letter)| format!("{}:{}", i + 1, letter.unwrap_or('_')))
        .collect();
    writeln!(out, "Slots: {}", slots.join("  "))?;

    let tiles: Vec<String> = round
        .board
        .available_tiles()
        .map(|t| format!("{}:{}", t.id.0 + 1, t.letter))
        .collect();
    writeln!(out, "Tiles: {}", tiles.join("  "))?;

    if !round.answer.is_empty() && round.answer != round.board.current_answer() {
        writeln!(out, "Typed: {}", round.answer)?;
    }
    if let Some(hint) = &round.hint {
        writeln!(out, "Hint: {hint}")?;
    }
    Ok(())
}

fn announce_current<W: Write>(
    machine: &GameMachine,
    announcer: &mut Announcer,
    out: &mut W,
) -> std::io::Result<()> {
    let Some(round) = machine.round() else {
        return Ok(());
    };
    if let Some(notice) = announcer.announce(round.word.as_str()) {
        writeln!(out, "{}: {}", notice.title, notice.description)?;
    }
    Ok(())
}

/// Apply one command to a game in progress.
///
/// Rule violations (wrong phase, judged round) are reported to the player and
/// the game carries on.
pub fn apply<W: Write>(
    machine: &mut GameMachine,
    announcer: &mut Announcer,
    cmd: Command,
    out: &mut W,
) -> Result<Flow, CliError> {
    debug!(?cmd, phase = ?machine.phase(), "Applying command");
    let outcome = match cmd {
        Command::Quit => {
            announcer.stop();
            return Ok(Flow::Quit);
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(Flow::Continue);
        }
        Command::Play => {
            announce_current(machine, announcer, out)?;
            return Ok(Flow::Continue);
        }
        Command::Pick(tile) => machine.place_tile_first_empty(tile).map(|slot| {
            if slot.is_none() {
                Some("That tile is not available or every slot is full.".to_string())
            } else {
                None
            }
        }),
        Command::Place { tile, slot } => machine.place_tile(tile, slot).map(|placed| {
            (!placed).then(|| format!("Cannot put tile {} in slot {}.", tile.0 + 1, slot + 1))
        }),
        Command::Clear(Some(slot)) => machine.clear_slot(slot).map(|_| None),
        Command::Clear(None) => machine.clear_answer().map(|_| None),
        Command::Type(word) => machine.set_answer(word).map(|_| None),
        Command::Hint => machine.show_hint().map(|_| None),
        Command::Submit => match machine.submit_answer() {
            Ok(verdict) => {
                if let Some(round) = machine.round() {
                    let word = shout(round.word.as_str());
                    if verdict.correct {
                        writeln!(out, "Correct! Great job spelling \"{word}\"!")?;
                    } else {
                        writeln!(out, "Try Again! The correct spelling is \"{word}\"")?;
                    }
                }
                if verdict.session_complete {
                    announcer.stop();
                    return Ok(Flow::Completed);
                }
                writeln!(out, "Type `next` for the next word.")?;
                return Ok(Flow::Continue);
            }
            Err(e) => Err(e),
        },
        Command::Next => match machine.load_next_word() {
            Ok(_) => {
                announce_current(machine, announcer, out)?;
                Ok(None)
            }
            Err(e) => Err(e),
        },
    };

    match outcome {
        Ok(Some(message)) => writeln!(out, "{message}")?,
        Ok(None) => {}
        Err(e) => writeln!(out, "{}", e.detail())?,
    }
    if let (Phase::InRound { .. }, Some(round)) = (machine.phase(), machine.round()) {
        if !round.is_judged() {
            render_round(out, round, machine.score())?;
        }
    }
    Ok(Flow::Continue)
}

/// Play an initialized game until it completes, the player quits or input ends.
pub fn run<R: BufRead, W: Write>(
    machine: &mut GameMachine,
    announcer: &mut Announcer,
    input: R,
    out: &mut W,
) -> Result<Flow, CliError> {
    if let Some(round) = machine.round() {
        render_round(out, round, machine.score())?;
    }
    announce_current(machine, announcer, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let flow = match parse_command(&line) {
            Ok(cmd) => apply(machine, announcer, cmd, out)?,
            Err(e) => {
                writeln!(out, "{e}")?;
                Flow::Continue
            }
        };
        if flow != Flow::Continue {
            return Ok(flow);
        }
        out.flush()?;
    }
    announcer.stop();
    Ok(Flow::Quit)
}

/// Ask whether to start another game; anything but yes (or end of input) is no.
pub fn ask_play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> std::io::Result<bool> {
    write!(out, "Play again? [y/N] ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Results screen: counts, accuracy, badges and the word-by-word list.
pub fn render_report<W: Write>(
    out: &mut W,
    report: &Report,
    machine: &GameMachine,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🎉 Game Complete!")?;
    writeln!(
        out,
        "Correct {}   Incorrect {}   Accuracy {}%",
        report.correct, report.incorrect, report.accuracy
    )?;
    for badge in &report.badges {
        writeln!(out, "{} {} {}", badge.emoji, badge.title, badge.description)?;
    }
    writeln!(out)?;
    for (i, r) in machine.results().iter().enumerate() {
        let mark = if r.correct { "✓" } else { "✗" };
        let hint = if r.hints_used { " (hint)" } else { "" };
        writeln!(out, "{:>2}. {mark} {}  you wrote: {}{hint}", i + 1, r.word, r.user_answer)?;
    }
    Ok(())
}
