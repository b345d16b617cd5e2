use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The closed set of genre tags a movie may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Crime,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Crime,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
    ];

    /// Canonical spelling, as stored and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Crime => "Crime",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
        }
    }

    /// Case-insensitive comparison against a free-form tag.
    pub fn matches(&self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag)
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag does not name any known [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: '{0}'")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.matches(s))
            .ok_or_else(|| UnknownGenre(s.to_owned()))
    }
}
