//! Schema validation for candidate movie records.
//!
//! Request bodies arrive as loosely-typed JSON. The [`Schema`] turns them
//! into [`NewMovie`] or [`MoviePatch`] values, collecting every violated
//! constraint instead of stopping at the first one.

use crate::error::{FieldIssue, IssueCode, ValidationError};
use crate::genre::Genre;
use crate::movie::{Movie, MoviePatch, NewMovie, DEFAULT_RATE};
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde_json::{Map, Value};
use url::Url;

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;
pub const MIN_RATE: f64 = 0.0;
pub const MAX_RATE: f64 = 10.0;

/// Every field a candidate may carry, in report order.
pub const FIELDS: [&str; 7] = [
    "title", "year", "director", "duration", "poster", "genre", "rate",
];

/// Largest integer a JSON number can carry without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Field constraints for movie records.
///
/// The upper bound on `year` is either fixed or, for [`Schema::current`],
/// read from the clock on every check so a long-running process follows the
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    min_year: i32,
    /// `None` means next year (UTC) at the time of the check.
    max_year: Option<i32>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::current()
    }
}

impl Schema {
    /// Builds a schema accepting years from [`MIN_YEAR`] to next year (UTC).
    pub fn current() -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year: None,
        }
    }

    /// Builds a schema with an explicit, inclusive year range.
    pub fn with_year_range(min_year: i32, max_year: i32) -> Self {
        Self {
            min_year,
            max_year: Some(max_year),
        }
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year.unwrap_or_else(next_year)
    }

    /// Validates a candidate for create.
    ///
    /// Every field except `rate` is required; `rate` defaults to
    /// [`DEFAULT_RATE`]. Keys outside [`FIELDS`] are ignored.
    pub fn validate_full(&self, candidate: &Value) -> Result<NewMovie, ValidationError> {
        let object = expect_object(candidate)?;
        let mut issues = Vec::new();

        for field in FIELDS {
            if field != "rate" && !object.contains_key(field) {
                issues.push(FieldIssue::new(field, IssueCode::Required, "is required"));
            }
        }
        let fields = self.parse_fields(object, &mut issues);
        issues.sort_by_key(|issue| field_rank(&issue.field));

        match fields {
            MoviePatch {
                title: Some(title),
                year: Some(year),
                director: Some(director),
                duration: Some(duration),
                poster: Some(poster),
                genre: Some(genre),
                rate,
            } if issues.is_empty() => Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate: rate.unwrap_or(DEFAULT_RATE),
            }),
            _ => Err(ValidationError::new(issues)),
        }
    }

    /// Validates a candidate for partial update.
    ///
    /// Present fields obey the same constraints as on create. Unknown keys
    /// and candidates without any known field are rejected. No defaults are
    /// applied.
    pub fn validate_partial(&self, candidate: &Value) -> Result<MoviePatch, ValidationError> {
        let object = expect_object(candidate)?;
        let mut issues = Vec::new();

        for key in object.keys() {
            if !FIELDS.contains(&key.as_str()) {
                issues.push(FieldIssue::new(
                    key.as_str(),
                    IssueCode::UnrecognizedKey,
                    format!("unrecognized field '{key}'"),
                ));
            }
        }
        if !FIELDS.iter().any(|field| object.contains_key(*field)) {
            issues.push(FieldIssue::new(
                "",
                IssueCode::EmptyUpdate,
                "update must contain at least one known field",
            ));
        }

        let patch = self.parse_fields(object, &mut issues);
        if issues.is_empty() {
            Ok(patch)
        } else {
            issues.sort_by_key(|issue| field_rank(&issue.field));
            Err(ValidationError::new(issues))
        }
    }

    /// Checks a typed record against every field constraint.
    ///
    /// Used on seeded records and on the result of merging a patch.
    pub fn check(&self, movie: &Movie) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        let mut record = |result: Result<(), FieldIssue>| {
            if let Err(issue) = result {
                issues.push(issue);
            }
        };

        record(check_text("title", &movie.title).map(drop));
        record(self.check_year(i64::from(movie.year)).map(drop));
        record(check_text("director", &movie.director).map(drop));
        record(check_duration(i64::from(movie.duration)).map(drop));
        record(check_poster(&movie.poster));
        record(check_rate(movie.rate));
        issues.extend(check_genres(&movie.genre));

        if issues.is_empty() {
            Ok(())
        } else {
            issues.sort_by_key(|issue| field_rank(&issue.field));
            Err(ValidationError::new(issues))
        }
    }

    /// Parses every known field present in `object`, recording issues for
    /// the ones that are malformed.
    fn parse_fields(&self, object: &Map<String, Value>, issues: &mut Vec<FieldIssue>) -> MoviePatch {
        let title = object
            .get("title")
            .and_then(|v| keep(issues, parse_text("title", v)));
        let year = object
            .get("year")
            .and_then(|v| keep(issues, self.parse_year(v)));
        let director = object
            .get("director")
            .and_then(|v| keep(issues, parse_text("director", v)));
        let duration = object
            .get("duration")
            .and_then(|v| keep(issues, parse_duration(v)));
        let poster = object
            .get("poster")
            .and_then(|v| keep(issues, parse_poster(v)));
        let rate = object
            .get("rate")
            .and_then(|v| keep(issues, parse_rate(v)));
        let genre = object.get("genre").and_then(|v| match parse_genres(v) {
            Ok(genres) => Some(genres),
            Err(genre_issues) => {
                issues.extend(genre_issues);
                None
            }
        });

        MoviePatch {
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate,
        }
    }

    fn parse_year(&self, value: &Value) -> Result<i32, FieldIssue> {
        self.check_year(expect_integer("year", value)?)
    }

    fn check_year(&self, year: i64) -> Result<i32, FieldIssue> {
        if year < i64::from(self.min_year) {
            return Err(FieldIssue::new(
                "year",
                IssueCode::TooSmall,
                format!("must be at least {}", self.min_year),
            ));
        }
        let max_year = self.max_year();
        if year > i64::from(max_year) {
            return Err(FieldIssue::new(
                "year",
                IssueCode::TooBig,
                format!("must be at most {max_year}"),
            ));
        }
        i32::try_from(year).map_err(|_| {
            FieldIssue::new("year", IssueCode::TooBig, "is out of range")
        })
    }
}

fn next_year() -> i32 {
    i32::from(Timestamp::now().to_zoned(TimeZone::UTC).year()) + 1
}

fn keep<T>(issues: &mut Vec<FieldIssue>, result: Result<T, FieldIssue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

fn expect_object(candidate: &Value) -> Result<&Map<String, Value>, ValidationError> {
    candidate.as_object().ok_or_else(|| {
        ValidationError::new(vec![FieldIssue::new(
            "",
            IssueCode::InvalidType,
            format!("expected object, received {}", type_name(candidate)),
        )])
    })
}

/// Sort key keeping issues in [`FIELDS`] order; unknown keys go last.
fn field_rank(field: &str) -> usize {
    let base = field.split('[').next().unwrap_or(field);
    FIELDS
        .iter()
        .position(|known| *known == base)
        .unwrap_or(FIELDS.len())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_type(field: impl Into<String>, expected: &str, value: &Value) -> FieldIssue {
    FieldIssue::new(
        field,
        IssueCode::InvalidType,
        format!("expected {expected}, received {}", type_name(value)),
    )
}

fn expect_integer(field: &str, value: &Value) -> Result<i64, FieldIssue> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => Ok(f as i64),
        Some(_) if value.is_u64() => Err(FieldIssue::new(
            field,
            IssueCode::TooBig,
            "is out of range",
        )),
        Some(_) => Err(FieldIssue::new(
            field,
            IssueCode::InvalidType,
            "expected integer, received float",
        )),
        None => Err(invalid_type(field, "integer", value)),
    }
}

fn parse_text(field: &str, value: &Value) -> Result<String, FieldIssue> {
    match value {
        Value::String(text) => check_text(field, text),
        other => Err(invalid_type(field, "string", other)),
    }
}

fn check_text(field: &str, text: &str) -> Result<String, FieldIssue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldIssue::new(
            field,
            IssueCode::TooSmall,
            "must not be empty",
        ));
    }
    Ok(trimmed.to_owned())
}

fn parse_duration(value: &Value) -> Result<u32, FieldIssue> {
    check_duration(expect_integer("duration", value)?)
}

fn check_duration(minutes: i64) -> Result<u32, FieldIssue> {
    if minutes < 1 {
        return Err(FieldIssue::new(
            "duration",
            IssueCode::TooSmall,
            "must be a positive number of minutes",
        ));
    }
    u32::try_from(minutes)
        .map_err(|_| FieldIssue::new("duration", IssueCode::TooBig, "is out of range"))
}

fn parse_poster(value: &Value) -> Result<String, FieldIssue> {
    match value {
        Value::String(poster) => check_poster(poster).map(|()| poster.clone()),
        other => Err(invalid_type("poster", "string", other)),
    }
}

fn check_poster(poster: &str) -> Result<(), FieldIssue> {
    let url = Url::parse(poster)
        .map_err(|e| FieldIssue::new("poster", IssueCode::InvalidUrl, format!("invalid url: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FieldIssue::new(
            "poster",
            IssueCode::InvalidUrl,
            format!("url scheme must be http or https, got {}", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(FieldIssue::new(
            "poster",
            IssueCode::InvalidUrl,
            "url must have a host",
        ));
    }
    Ok(())
}

fn parse_rate(value: &Value) -> Result<f64, FieldIssue> {
    let rate = value
        .as_f64()
        .ok_or_else(|| invalid_type("rate", "number", value))?;
    check_rate(rate)?;
    Ok(rate)
}

fn check_rate(rate: f64) -> Result<(), FieldIssue> {
    if rate.is_nan() {
        return Err(FieldIssue::new("rate", IssueCode::InvalidType, "must be a number"));
    }
    if rate < MIN_RATE {
        return Err(FieldIssue::new(
            "rate",
            IssueCode::TooSmall,
            format!("must be at least {MIN_RATE}"),
        ));
    }
    if rate > MAX_RATE {
        return Err(FieldIssue::new(
            "rate",
            IssueCode::TooBig,
            format!("must be at most {MAX_RATE}"),
        ));
    }
    Ok(())
}

fn parse_genres(value: &Value) -> Result<Vec<Genre>, Vec<FieldIssue>> {
    let Value::Array(items) = value else {
        return Err(vec![invalid_type("genre", "array", value)]);
    };

    let mut issues = Vec::new();
    let mut genres = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let field = format!("genre[{index}]");
        match item {
            Value::String(tag) => match tag.parse::<Genre>() {
                Ok(genre) => genres.push(genre),
                Err(e) => issues.push(FieldIssue::new(
                    field,
                    IssueCode::InvalidEnumValue,
                    format!("{e}, expected one of {}", genre_list()),
                )),
            },
            other => issues.push(invalid_type(field, "string", other)),
        }
    }

    if items.is_empty() {
        issues.push(empty_genres());
    }
    if issues.is_empty() {
        issues.extend(check_genres(&genres));
    }
    if issues.is_empty() {
        Ok(genres)
    } else {
        Err(issues)
    }
}

fn check_genres(genres: &[Genre]) -> Vec<FieldIssue> {
    if genres.is_empty() {
        return vec![empty_genres()];
    }
    genres
        .iter()
        .enumerate()
        .filter(|&(index, genre)| genres[..index].contains(genre))
        .map(|(index, genre)| {
            FieldIssue::new(
                format!("genre[{index}]"),
                IssueCode::Duplicate,
                format!("duplicate genre '{genre}'"),
            )
        })
        .collect()
}

fn empty_genres() -> FieldIssue {
    FieldIssue::new("genre", IssueCode::TooSmall, "must contain at least one genre")
}

fn genre_list() -> String {
    Genre::ALL
        .iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::MovieId;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::with_year_range(MIN_YEAR, 2027)
    }

    fn matrix() -> Value {
        json!({
            "title": "Matrix",
            "year": 1999,
            "director": "Wachowski",
            "duration": 136,
            "poster": "https://x/y.jpg",
            "genre": ["Action"],
            "rate": 8.7
        })
    }

    fn codes(error: &ValidationError) -> Vec<(&str, IssueCode)> {
        error
            .issues
            .iter()
            .map(|issue| (issue.field.as_str(), issue.code))
            .collect()
    }

    #[test]
    fn full_accepts_valid_candidate() {
        let movie = schema().validate_full(&matrix()).unwrap();
        assert_eq!(movie.title, "Matrix");
        assert_eq!(movie.year, 1999);
        assert_eq!(movie.duration, 136);
        assert_eq!(movie.genre, vec![Genre::Action]);
        assert_eq!(movie.rate, 8.7);
    }

    #[test]
    fn full_defaults_rate() {
        let mut candidate = matrix();
        candidate.as_object_mut().unwrap().remove("rate");

        let movie = schema().validate_full(&candidate).unwrap();
        assert_eq!(movie.rate, DEFAULT_RATE);
    }

    #[test]
    fn full_normalizes_genre_casing_and_trims_text() {
        let mut candidate = matrix();
        candidate["genre"] = json!(["action", "SCI-FI"]);
        candidate["title"] = json!("  Matrix ");

        let movie = schema().validate_full(&candidate).unwrap();
        assert_eq!(movie.genre, vec![Genre::Action, Genre::SciFi]);
        assert_eq!(movie.title, "Matrix");
    }

    #[test]
    fn full_ignores_unknown_keys_and_client_id() {
        let mut candidate = matrix();
        candidate["id"] = json!("client-chosen");
        candidate["studio"] = json!("Warner");

        assert!(schema().validate_full(&candidate).is_ok());
    }

    #[test]
    fn full_reports_empty_title_and_every_missing_field() {
        let error = schema().validate_full(&json!({ "title": "" })).unwrap_err();
        assert_eq!(
            codes(&error),
            vec![
                ("title", IssueCode::TooSmall),
                ("year", IssueCode::Required),
                ("director", IssueCode::Required),
                ("duration", IssueCode::Required),
                ("poster", IssueCode::Required),
                ("genre", IssueCode::Required),
            ]
        );
    }

    #[test]
    fn full_reports_every_invalid_field() {
        let candidate = json!({
            "title": 42,
            "year": 1850,
            "director": "   ",
            "duration": 0,
            "poster": "not a url",
            "genre": ["Action", "Documentary"],
            "rate": 11
        });

        let error = schema().validate_full(&candidate).unwrap_err();
        assert_eq!(
            codes(&error),
            vec![
                ("title", IssueCode::InvalidType),
                ("year", IssueCode::TooSmall),
                ("director", IssueCode::TooSmall),
                ("duration", IssueCode::TooSmall),
                ("poster", IssueCode::InvalidUrl),
                ("genre[1]", IssueCode::InvalidEnumValue),
                ("rate", IssueCode::TooBig),
            ]
        );
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let schema = schema();
        let mut candidate = matrix();

        candidate["year"] = json!(1900);
        assert!(schema.validate_full(&candidate).is_ok());
        candidate["year"] = json!(2027);
        assert!(schema.validate_full(&candidate).is_ok());
        candidate["year"] = json!(2028);
        let error = schema.validate_full(&candidate).unwrap_err();
        assert_eq!(codes(&error), vec![("year", IssueCode::TooBig)]);
    }

    #[test]
    fn year_must_be_integer() {
        let mut candidate = matrix();
        candidate["year"] = json!(1999.5);
        let error = schema().validate_full(&candidate).unwrap_err();
        assert_eq!(codes(&error), vec![("year", IssueCode::InvalidType)]);

        candidate["year"] = json!(1999.0);
        assert_eq!(schema().validate_full(&candidate).unwrap().year, 1999);

        candidate["year"] = json!("1999");
        assert!(schema().validate_full(&candidate).is_err());
    }

    #[test]
    fn current_schema_accepts_next_year() {
        let schema = Schema::current();
        assert_eq!(schema.min_year(), MIN_YEAR);

        let mut candidate = matrix();
        candidate["year"] = json!(schema.max_year());
        assert!(schema.validate_full(&candidate).is_ok());
    }

    #[test]
    fn current_schema_reads_year_from_clock() {
        let schema = Schema::current();
        let this_year = i32::from(Timestamp::now().to_zoned(TimeZone::UTC).year());
        assert_eq!(schema.max_year(), this_year + 1);

        let mut candidate = matrix();
        candidate["year"] = json!(this_year + 2);
        let error = schema.validate_full(&candidate).unwrap_err();
        assert_eq!(codes(&error), vec![("year", IssueCode::TooBig)]);
    }

    #[test]
    fn fixed_range_ignores_clock() {
        let schema = Schema::with_year_range(1950, 1960);
        assert_eq!(schema.max_year(), 1960);

        let mut candidate = matrix();
        candidate["year"] = json!(1961);
        let error = schema.validate_full(&candidate).unwrap_err();
        assert_eq!(codes(&error), vec![("year", IssueCode::TooBig)]);
    }

    #[test]
    fn poster_requires_http_url_with_host() {
        let mut candidate = matrix();
        for poster in ["ftp://x/y.jpg", "mailto:someone@example.com", "/relative.jpg"] {
            candidate["poster"] = json!(poster);
            let error = schema().validate_full(&candidate).unwrap_err();
            assert_eq!(codes(&error), vec![("poster", IssueCode::InvalidUrl)], "{poster}");
        }
    }

    #[test]
    fn genre_must_be_non_empty_array_without_duplicates() {
        let mut candidate = matrix();

        candidate["genre"] = json!([]);
        let error = schema().validate_full(&candidate).unwrap_err();
        assert_eq!(codes(&error), vec![("genre", IssueCode::TooSmall)]);

        candidate["genre"] = json!("Action");
        let error = schema().validate_full(&candidate).unwrap_err();
        assert_eq!(codes(&error), vec![("genre", IssueCode::InvalidType)]);

        candidate["genre"] = json!(["Drama", "drama"]);
        let error = schema().validate_full(&candidate).unwrap_err();
        assert_eq!(codes(&error), vec![("genre[1]", IssueCode::Duplicate)]);

        candidate["genre"] = json!(["Drama", 3]);
        let error = schema().validate_full(&candidate).unwrap_err();
        assert_eq!(codes(&error), vec![("genre[1]", IssueCode::InvalidType)]);
    }

    #[test]
    fn non_object_candidate_is_rejected() {
        let error = schema().validate_full(&json!([1, 2])).unwrap_err();
        assert_eq!(codes(&error), vec![("", IssueCode::InvalidType)]);

        let error = schema().validate_partial(&json!("year")).unwrap_err();
        assert_eq!(codes(&error), vec![("", IssueCode::InvalidType)]);
    }

    #[test]
    fn partial_accepts_subset_without_defaults() {
        let patch = schema().validate_partial(&json!({ "year": 2000 })).unwrap();
        assert_eq!(
            patch,
            MoviePatch {
                year: Some(2000),
                ..MoviePatch::default()
            }
        );
        assert_eq!(patch.rate, None);
    }

    #[test]
    fn partial_rejects_empty_candidate() {
        let error = schema().validate_partial(&json!({})).unwrap_err();
        assert_eq!(codes(&error), vec![("", IssueCode::EmptyUpdate)]);
    }

    #[test]
    fn partial_rejects_unknown_fields() {
        let error = schema()
            .validate_partial(&json!({ "year": 2000, "id": "other" }))
            .unwrap_err();
        assert_eq!(codes(&error), vec![("id", IssueCode::UnrecognizedKey)]);

        let error = schema()
            .validate_partial(&json!({ "studio": "Warner" }))
            .unwrap_err();
        assert_eq!(
            codes(&error),
            vec![
                ("studio", IssueCode::UnrecognizedKey),
                ("", IssueCode::EmptyUpdate),
            ]
        );
    }

    #[test]
    fn partial_applies_field_constraints() {
        let error = schema()
            .validate_partial(&json!({ "rate": -1, "genre": [], "title": "" }))
            .unwrap_err();
        assert_eq!(
            codes(&error),
            vec![
                ("title", IssueCode::TooSmall),
                ("genre", IssueCode::TooSmall),
                ("rate", IssueCode::TooSmall),
            ]
        );
    }

    #[test]
    fn partial_rejects_null_values() {
        let error = schema()
            .validate_partial(&json!({ "director": null }))
            .unwrap_err();
        assert_eq!(codes(&error), vec![("director", IssueCode::InvalidType)]);
    }

    #[test]
    fn check_accepts_valid_record_and_flags_broken_one() {
        let schema = schema();
        let draft = schema.validate_full(&matrix()).unwrap();
        let mut movie = Movie::new(MovieId::new("m-1"), draft);
        assert!(schema.check(&movie).is_ok());

        movie.genre.clear();
        movie.rate = 12.0;
        let error = schema.check(&movie).unwrap_err();
        assert_eq!(
            codes(&error),
            vec![("genre", IssueCode::TooSmall), ("rate", IssueCode::TooBig)]
        );
    }
}
