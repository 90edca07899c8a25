use serde::Deserialize;

/// A movie payload as returned by search, popular, changes, and
/// details endpoints. Listing endpoints omit `runtime`; only the
/// details endpoint fills it in. TV-style payloads use `name` in
/// place of `title`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct MovieListing {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<i32>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub popularity: Option<f64>,
}

impl MovieListing {
    /// Display title: `title`, falling back to `name`, then empty.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    /// Release year from the first four digits of the release date.
    pub fn year(&self) -> Option<i32> {
        let rd = self.release_date.as_deref()?;
        if rd.len() >= 4 && rd[..4].chars().all(|c| c.is_ascii_digit()) {
            rd[..4].parse().ok()
        } else {
            None
        }
    }
}

/// A page of results from any paged TMDB endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct Page<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A changed-movie stub from the change feed. Records occasionally
/// arrive without an ID; those are skipped, not errors.
#[derive(Debug, Deserialize, Clone)]
pub struct ChangedMovie {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Credits for a single movie.
#[derive(Debug, Deserialize, Clone)]
pub struct CreditsResponse {
    pub id: i64,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// A crew entry. Directors are crew members whose job is "Director".
#[derive(Debug, Deserialize, Clone)]
pub struct CrewMember {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<i64>,
    #[serde(default)]
    pub job: Option<String>,
}

impl CrewMember {
    /// Whether this entry is a director with a usable identity.
    pub fn is_director(&self) -> bool {
        self.id.is_some() && self.job.as_deref() == Some("Director")
    }
}

/// One line of the daily bulk ID export (newline-delimited JSON).
#[derive(Debug, Deserialize, Clone)]
pub struct ExportEntry {
    #[serde(default)]
    pub id: Option<i64>,
}
