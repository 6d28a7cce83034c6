//! Difficulty tag for a round

use std::fmt;
use std::str::FromStr;

/// How ruthlessly the host picks among word families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    /// Alternates between the hardest and second-hardest family
    Easy,
    /// Gives up the hardest family on every fourth guess
    Medium,
    /// Always keeps the hardest family
    #[default]
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Self::Easy),
            "medium" | "m" | "2" => Ok(Self::Medium),
            "hard" | "h" | "3" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_shortcuts() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!("M".parse(), Ok(Difficulty::Medium));
        assert_eq!(" 3 ".parse(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }

    #[test]
    fn default_is_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }
}
