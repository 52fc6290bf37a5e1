use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Exercise length in minutes.
///
/// Client input is read integer-prefix style: leading whitespace and an optional sign,
/// then as many digits as are present. Input with no leading digits is not rejected; it
/// becomes `Invalid`, which is stored as NULL and serialized as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseDuration {
    Minutes(i64),
    Invalid,
}

impl ExerciseDuration {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        match rest[..digits_end].parse::<i64>() {
            Ok(minutes) if negative => ExerciseDuration::Minutes(-minutes),
            Ok(minutes) => ExerciseDuration::Minutes(minutes),
            Err(_) => ExerciseDuration::Invalid,
        }
    }

    pub fn minutes(&self) -> Option<i64> {
        match self {
            ExerciseDuration::Minutes(minutes) => Some(*minutes),
            ExerciseDuration::Invalid => None,
        }
    }
}

impl From<Option<i64>> for ExerciseDuration {
    fn from(minutes: Option<i64>) -> Self {
        minutes.map_or(ExerciseDuration::Invalid, ExerciseDuration::Minutes)
    }
}

impl Serialize for ExerciseDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.minutes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExerciseDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer).map(ExerciseDuration::from)
    }
}
