use crate::genre::Genre;
use crate::id::MovieId;
use serde::{Deserialize, Serialize};

/// Rating assigned on create when the candidate omits `rate`.
pub const DEFAULT_RATE: f64 = 5.0;

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

impl Movie {
    /// Attaches a server-assigned id to a validated candidate.
    pub fn new(id: MovieId, draft: NewMovie) -> Self {
        Self {
            id,
            title: draft.title,
            year: draft.year,
            director: draft.director,
            duration: draft.duration,
            poster: draft.poster,
            genre: draft.genre,
            rate: draft.rate,
        }
    }

    /// Returns `true` if any of the movie's genres matches `tag`, ignoring case.
    pub fn has_genre(&self, tag: &str) -> bool {
        self.genre.iter().any(|genre| genre.matches(tag))
    }
}

/// A fully validated candidate for create, without an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

/// A validated set of field overrides for a partial update.
///
/// Fields left as `None` keep their stored value when the patch is merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// Returns `true` if the patch overrides no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
            && self.rate.is_none()
    }

    /// Produces a copy of `movie` with every field present in the patch replaced.
    ///
    /// The id is never touched.
    pub fn merge(&self, movie: &Movie) -> Movie {
        let mut merged = movie.clone();
        if let Some(title) = &self.title {
            merged.title = title.clone();
        }
        if let Some(year) = self.year {
            merged.year = year;
        }
        if let Some(director) = &self.director {
            merged.director = director.clone();
        }
        if let Some(duration) = self.duration {
            merged.duration = duration;
        }
        if let Some(poster) = &self.poster {
            merged.poster = poster.clone();
        }
        if let Some(genre) = &self.genre {
            merged.genre = genre.clone();
        }
        if let Some(rate) = self.rate {
            merged.rate = rate;
        }
        merged
    }
}
