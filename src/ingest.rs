//! CSV ingestion for platform catalogues.
//!
//! Each source CSV carries many columns; only title, genre (`listed_in`),
//! cast and plot (`description`) are kept. Blank or missing cast becomes the
//! literal `"Unknown"`; missing genre or plot stay empty strings. Record
//! order follows file order, which fixes every record's ordinal.

use std::path::Path;

use serde::Deserialize;

use reelvec_core::{catalogue::UNKNOWN_CAST, Catalogue, Error, Result, TitleRecord};

/// The columns we keep from a platform CSV, in source naming.
#[derive(Debug, Deserialize)]
struct PlatformRow {
    #[serde(default)]
    title: String,
    #[serde(default, rename = "listed_in")]
    genre: String,
    #[serde(default)]
    cast: Option<String>,
    #[serde(default, rename = "description")]
    plot: String,
}

impl From<PlatformRow> for TitleRecord {
    fn from(row: PlatformRow) -> Self {
        let cast = match row.cast {
            Some(cast) if !cast.trim().is_empty() => cast,
            _ => UNKNOWN_CAST.to_string(),
        };
        TitleRecord::new(row.title, row.genre, cast, row.plot)
    }
}

/// Load one platform catalogue from its titles CSV.
pub fn load_platform_csv<P: AsRef<Path>>(path: P) -> Result<Catalogue> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::Storage(format!("failed to open {}: {e}", path.display())))?;

    let mut catalogue = Catalogue::new();
    for row in reader.deserialize::<PlatformRow>() {
        let row =
            row.map_err(|e| Error::Storage(format!("bad row in {}: {e}", path.display())))?;
        catalogue.push(row.into());
    }
    Ok(catalogue)
}

/// Concatenate platform catalogues into the combined "all" set, preserving
/// the order in which they are given.
#[must_use]
pub fn combine<'a, I>(catalogues: I) -> Catalogue
where
    I: IntoIterator<Item = &'a Catalogue>,
{
    let mut all = Catalogue::new();
    for catalogue in catalogues {
        all.extend_from(catalogue);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_csv(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_keeps_and_renames_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "netflix_titles.csv",
            "show_id,type,title,cast,listed_in,description\n\
             s1,Movie,Inception,Leonardo DiCaprio,Sci-Fi,A dream heist.\n\
             s2,TV Show,Dark,Louis Hofmann,\"Sci-Fi, Mystery\",Time travel in a small town.\n",
        );

        let catalogue = load_platform_csv(&path).unwrap();
        assert_eq!(catalogue.len(), 2);

        let first = catalogue.get(0).unwrap();
        assert_eq!(first.title, "Inception");
        assert_eq!(first.genre, "Sci-Fi");
        assert_eq!(first.cast, "Leonardo DiCaprio");
        assert_eq!(first.plot, "A dream heist.");

        let second = catalogue.get(1).unwrap();
        assert_eq!(second.genre, "Sci-Fi, Mystery");
    }

    #[test]
    fn test_missing_cast_becomes_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "hulu_titles.csv",
            "title,cast,listed_in,description\n\
             No Cast Movie,,Documentary,Something happened.\n\
             Spaces Only,   ,Drama,More happened.\n",
        );

        let catalogue = load_platform_csv(&path).unwrap();
        assert_eq!(catalogue.get(0).unwrap().cast, "Unknown");
        assert_eq!(catalogue.get(1).unwrap().cast, "Unknown");
    }

    #[test]
    fn test_missing_genre_and_plot_stay_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "disney_plus_titles.csv",
            "title,cast\nBare Bones,Some Actor\n",
        );

        let catalogue = load_platform_csv(&path).unwrap();
        let record = catalogue.get(0).unwrap();
        assert_eq!(record.genre, "");
        assert_eq!(record.plot, "");
        assert_eq!(record.cast, "Some Actor");
    }

    #[test]
    fn test_combine_preserves_platform_order() {
        let netflix = Catalogue::from_records(vec![TitleRecord::new("N1", "", "Unknown", "")]);
        let hulu = Catalogue::from_records(vec![
            TitleRecord::new("H1", "", "Unknown", ""),
            TitleRecord::new("H2", "", "Unknown", ""),
        ]);

        let all = combine([&netflix, &hulu]);
        assert_eq!(all.len(), 3);
        assert_eq!(all.get(0).unwrap().title, "N1");
        assert_eq!(all.get(2).unwrap().title, "H2");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_platform_csv("/definitely/not/here.csv");
        assert!(matches!(result, Err(Error::Storage(_))));
    }
}
