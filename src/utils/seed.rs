use crate::{CaError, Row};

/// How the first row of a simulation is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed {
    /// Random cells; `None` draws the seed from entropy.
    Random(Option<u64>),
    /// A single alive cell in the middle.
    Center,
}

impl Seed {
    pub fn row(self, size: usize) -> Row {
        match self {
            Self::Random(seed) => Row::random(size, seed),
            Self::Center => Row::centered(size),
        }
    }

    /// Same kind of seed for another execution: random seeds are offset by `run`.
    pub fn for_run(self, run: u32) -> Self {
        match self {
            Self::Random(Some(seed)) => Self::Random(Some(seed.wrapping_add(run as u64))),
            other => other,
        }
    }
}

impl std::str::FromStr for Seed {
    type Err = CaError;

    /// Accepts `random`, `random:<u64>` and `center`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "center" => Ok(Self::Center),
            "random" => Ok(Self::Random(None)),
            other => other
                .strip_prefix("random:")
                .and_then(|seed| seed.parse().ok())
                .map(|seed| Self::Random(Some(seed)))
                .ok_or_else(|| {
                    CaError::InvalidSeed(format!(
                        "{:?}, use 'random', 'random:<n>' or 'center'",
                        s
                    ))
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("center".parse::<Seed>().unwrap(), Seed::Center);
        assert_eq!("Random".parse::<Seed>().unwrap(), Seed::Random(None));
        assert_eq!("random:42".parse::<Seed>().unwrap(), Seed::Random(Some(42)));
        assert!("random:x".parse::<Seed>().is_err());
        assert!("fixed".parse::<Seed>().is_err());
    }

    #[test]
    fn test_rows() {
        assert_eq!(Seed::Center.row(5).to_string(), "00100");
        assert_eq!(
            Seed::Random(Some(7)).row(40),
            Seed::Random(Some(7)).row(40)
        );
        assert_eq!(Seed::Random(Some(7)).for_run(2), Seed::Random(Some(9)));
        assert_eq!(Seed::Center.for_run(2), Seed::Center);
    }
}
