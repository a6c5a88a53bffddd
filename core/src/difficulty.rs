use alloc::borrow::ToOwned;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Named board presets offered by the settings menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Easy => GameConfig::new_unchecked((9, 9), 10),
            Medium => GameConfig::new_unchecked((16, 16), 40),
            Hard => GameConfig::new_unchecked((16, 32), 99),
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        }
    }

    /// Looks up a preset by name, ignoring ASCII case. The exact menu label
    /// (`"Easy (9x9, 10 mines)"`) is accepted as well.
    pub fn from_name(name: &str) -> Result<Self> {
        let key = name.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| {
                difficulty.name().eq_ignore_ascii_case(key)
                    || difficulty.to_string().eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| GameError::UnknownDifficulty {
                name: name.to_owned(),
            })
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config();
        write!(
            f,
            "{} ({}x{}, {} mines)",
            self.name(),
            config.rows(),
            config.cols(),
            config.mines()
        )
    }
}
