//! Gallows progression frames
//!
//! Six frames, one per stage from no wrong guesses (0) to a lost round (5).

use crate::core::{GameError, MAX_WRONG_STAGES};
use std::fs;
use std::path::Path;

/// Number of frames a gallows set must contain
pub const STAGE_COUNT: usize = MAX_WRONG_STAGES as usize + 1;

const BUILTIN: [&str; STAGE_COUNT] = [
    "  +---+\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n=========",
    "  +---+\n  |   |\n  X   |\n /|\\  |\n / \\  |\n=========",
];

/// Text frames indexed by stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallows {
    frames: Vec<String>,
}

impl Gallows {
    /// The built-in ASCII frames
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            frames: BUILTIN.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    /// Build from explicit frames
    ///
    /// # Errors
    /// Returns `GameError::ResourceMissing` unless exactly `STAGE_COUNT`
    /// frames are given.
    pub fn from_frames(frames: Vec<String>) -> Result<Self, GameError> {
        if frames.len() != STAGE_COUNT {
            return Err(GameError::missing(
                "gallows frames",
                format!("expected {STAGE_COUNT} frames, found {}", frames.len()),
            ));
        }
        Ok(Self { frames })
    }

    /// Load `hang_0.txt` .. `hang_5.txt` from a directory
    ///
    /// # Errors
    /// Returns `GameError::ResourceMissing` naming the first frame that
    /// cannot be read.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, GameError> {
        let dir = dir.as_ref();
        let frames = (0..STAGE_COUNT)
            .map(|stage| {
                let path = dir.join(format!("hang_{stage}.txt"));
                fs::read_to_string(&path)
                    .map(|frame| frame.trim_end().to_string())
                    .map_err(|e| GameError::missing(path.display().to_string(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_frames(frames)
    }

    /// Frame for a wrong-guess count, capped at the final stage
    #[must_use]
    pub fn frame(&self, wrong_count: u8) -> &str {
        let stage = usize::from(wrong_count).min(STAGE_COUNT - 1);
        &self.frames[stage]
    }

    /// Tallest frame in lines, for layout
    #[must_use]
    pub fn height(&self) -> usize {
        self.frames.iter().map(|f| f.lines().count()).max().unwrap_or(0)
    }
}

impl Default for Gallows {
    fn default() -> Self {
        Self::builtin()
    }
}
