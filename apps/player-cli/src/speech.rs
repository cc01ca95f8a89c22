//! Word announcements through an external speech synthesizer.
//!
//! A new announcement always cancels the one in progress. Failures never stop
//! the game; they surface as a short notice for the learner.

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

/// Utterance parameters on the browser speech scale (1.0 is normal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtteranceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Slower and slightly higher than normal, for young listeners.
pub const CHILD_FRIENDLY: UtteranceSettings = UtteranceSettings {
    rate: 0.7,
    pitch: 1.2,
    volume: 1.0,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

/// Prefer a voice named female/child/young, then any English voice, then the first.
pub fn select_voice(voices: &[Voice]) -> Option<&Voice> {
    voices
        .iter()
        .find(|v| {
            let name = v.name.to_lowercase();
            ["female", "child", "young"]
                .iter()
                .any(|hint| name.contains(hint))
        })
        .or_else(|| voices.iter().find(|v| v.lang.starts_with("en")))
        .or_else(|| voices.first())
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("no speech synthesizer configured")]
    Unsupported,
    #[error("speech playback failed: {0}")]
    Playback(#[from] io::Error),
    #[error("speech program exited with {0}")]
    Failed(ExitStatus),
}

/// Learner-facing notice for a speech failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl From<&SpeechError> for Notice {
    fn from(e: &SpeechError) -> Self {
        match e {
            SpeechError::Unsupported => Notice {
                title: "Speech not supported",
                description: "No text-to-speech program is available.",
            },
            SpeechError::Playback(_) | SpeechError::Failed(_) => Notice {
                title: "Speech not available",
                description: "Unable to play audio. Please check your speech settings.",
            },
        }
    }
}

pub trait Synth {
    fn voices(&mut self) -> Vec<Voice>;

    /// Start speaking `text`; returns once playback has started.
    fn speak(
        &mut self,
        text: &str,
        voice: Option<&Voice>,
        settings: UtteranceSettings,
    ) -> Result<(), SpeechError>;

    /// Stop any playback in progress.
    fn cancel(&mut self);
}

/// Used when no synthesizer is configured; every request is unsupported.
#[derive(Debug, Default)]
pub struct NullSynth;

impl Synth for NullSynth {
    fn voices(&mut self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&mut self, _: &str, _: Option<&Voice>, _: UtteranceSettings) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn cancel(&mut self) {}
}

/// Drives an espeak-compatible program (`espeak-ng`, `espeak`).
#[derive(Debug)]
pub struct CommandSynth {
    program: String,
    current: Option<Child>,
    startup_grace: Duration,
}

/// How long `speak` watches a fresh process for an early failure.
const STARTUP_GRACE: Duration = Duration::from_millis(150);
const STARTUP_POLL: Duration = Duration::from_millis(10);

/// espeak's default speaking rate in words per minute.
const BASE_WPM: f32 = 175.0;
/// espeak's default pitch on its 0..=99 scale.
const BASE_PITCH: f32 = 50.0;
/// espeak's default amplitude on its 0..=200 scale.
const BASE_AMPLITUDE: f32 = 100.0;

impl CommandSynth {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            current: None,
            startup_grace: STARTUP_GRACE,
        }
    }

    pub fn with_startup_grace(mut self, grace: Duration) -> Self {
        self.startup_grace = grace;
        self
    }

    /// Command-line flags for one utterance.
    pub fn args(text: &str, voice: Option<&Voice>, settings: UtteranceSettings) -> Vec<String> {
        let wpm = (BASE_WPM * settings.rate).round() as u32;
        let pitch = (BASE_PITCH * settings.pitch).round().clamp(0.0, 99.0) as u32;
        let amplitude = (BASE_AMPLITUDE * settings.volume).round().clamp(0.0, 200.0) as u32;

        let mut args = vec![
            "-s".to_string(),
            wpm.to_string(),
            "-p".to_string(),
            pitch.to_string(),
            "-a".to_string(),
            amplitude.to_string(),
        ];
        if let Some(v) = voice {
            args.push("-v".to_string());
            args.push(v.name.clone());
        }
        args.push("--".to_string());
        args.push(text.to_string());
        args
    }
}

impl Synth for CommandSynth {
    fn voices(&mut self) -> Vec<Voice> {
        match Command::new(&self.program).arg("--voices").output() {
            Ok(out) if out.status.success() => {
                parse_espeak_voices(&String::from_utf8_lossy(&out.stdout))
            }
            Ok(out) => {
                warn!(program = %self.program, status = %out.status, "Voice listing failed");
                Vec::new()
            }
            Err(e) => {
                debug!(program = %self.program, error = %e, "Voice listing unavailable");
                Vec::new()
            }
        }
    }

    fn speak(
        &mut self,
        text: &str,
        voice: Option<&Voice>,
        settings: UtteranceSettings,
    ) -> Result<(), SpeechError> {
        let mut child = Command::new(&self.program)
            .args(Self::args(text, voice, settings))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => SpeechError::Unsupported,
                _ => SpeechError::Playback(e),
            })?;

        // Bad voice names and missing audio devices make espeak exit at once.
        let deadline = Instant::now() + self.startup_grace;
        loop {
            let polled = child.try_wait().inspect_err(|_| {
                let _ = child.kill();
            });
            match polled? {
                Some(status) if status.success() => return Ok(()),
                Some(status) => {
                    warn!(program = %self.program, %status, "Speech program failed");
                    return Err(SpeechError::Failed(status));
                }
                None if Instant::now() >= deadline => break,
                None => thread::sleep(STARTUP_POLL),
            }
        }
        self.current = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        let Some(mut child) = self.current.take() else {
            return;
        };
        match child.try_wait() {
            Ok(Some(status)) if !status.success() => {
                warn!(program = %self.program, %status, "Speech program failed");
            }
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}

impl Drop for CommandSynth {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Parse `espeak-ng --voices` output.
///
/// Columns: `Pty Language Age/Gender VoiceName File [Other Languages]`.
pub fn parse_espeak_voices(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            match cols.as_slice() {
                [_pty, lang, _age_gender, name, ..] => Some(Voice {
                    name: name.to_string(),
                    lang: lang.to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}

/// Speaks words with the chosen voice, last request wins.
pub struct Announcer {
    synth: Box<dyn Synth>,
    voice: Option<Voice>,
}

impl Announcer {
    /// `voice_override` names a voice directly; otherwise one is selected
    /// from what the synthesizer offers.
    pub fn new(mut synth: Box<dyn Synth>, voice_override: Option<String>) -> Self {
        let voice = match voice_override {
            Some(name) => Some(Voice {
                name,
                lang: String::new(),
            }),
            None => select_voice(&synth.voices()).cloned(),
        };
        debug!(voice = ?voice, "Announcer ready");
        Self { synth, voice }
    }

    pub fn voice(&self) -> Option<&Voice> {
        self.voice.as_ref()
    }

    /// Cancel what is playing and speak `text`.
    pub fn announce(&mut self, text: &str) -> Option<Notice> {
        self.synth.cancel();
        match self
            .synth
            .speak(text, self.voice.as_ref(), CHILD_FRIENDLY)
        {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "Speech failed");
                Some(Notice::from(&e))
            }
        }
    }

    pub fn stop(&mut self) {
        self.synth.cancel();
    }
}
