//! Neighborhood names and their canonical spellings.
//!
//! The crime data set spells neighborhoods its own way: doubled internal
//! spaces (`Mount  Adams`), hyphens (`Over-The-Rhine`), abbreviations
//! (`Mt.  Lookout`). A spoken query never reproduces those exactly, and a
//! downstream exact-match filter needs them verbatim.
//!
//! Both sides are compared under [`normalize`]; the catalog entry is returned
//! untouched.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::error::{ResolveError, Result};

/// A location name exactly as the downstream data set spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalLocation(String);

impl CanonicalLocation {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalLocation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Cincinnati neighborhoods as spelled in the city's crime incident data.
///
/// Order matters: lookups return the first match, and some entries normalize
/// to the same key (`Paddock  Hills` appears twice).
const CINCINNATI_NEIGHBORHOODS: &[&str] = &[
    "Avondale",
    "Bond Hill",
    "Riverfront",
    "CBD",
    "California",
    "Camp  Washington",
    "Carthage",
    "C. B. D. / Riverfront",
    "Clifton",
    "Clifton/University Heights",
    "University Heights",
    "College  Hill",
    "Columbia / Tusculum",
    "Corryville",
    "CUF",
    "Downtown",
    "East  End",
    "East Price Hill",
    "East Walnut Hills",
    "East  Westwood",
    "English  Woods",
    "Evanston",
    "Fairview",
    "Fay Apartments",
    "Hartwell",
    "Hyde Park",
    "Kennedy  Heights",
    "Linwood",
    "Lower Price  Hill",
    "Madisonville",
    "Millvale",
    "Mount  Adams",
    "Mount Airy",
    "Mount  Auburn",
    "Mt.  Lookout",
    "Mt.  Washington",
    "North Avondale",
    "Paddock  Hills",
    "North Fairmount",
    "Northside",
    "O'Bryonville",
    "Oakley",
    "Over-The-Rhine",
    "Paddock  Hills",
    "Pendleton",
    "Pleasant Ridge",
    "Queensgate",
    "Riverside",
    "Roselawn",
    "Sayler  Park",
    "Sedamsville",
    "South Cumminsville",
    "S.. Cumminsville",
    "South  Fairmount",
    "Spring Grove Village",
    "Villages at Roll Hill",
    "Walnut Hills",
    "West  End",
    "West Price Hill",
    "Westwood",
    "Winton Hills",
];

/// An ordered, immutable list of canonical location spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCatalog {
    entries: Vec<CanonicalLocation>,
    keys: Vec<String>,
}

impl LocationCatalog {
    /// Build a catalog from spellings in lookup order.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<CanonicalLocation> = entries
            .into_iter()
            .map(|s| CanonicalLocation(s.into()))
            .collect();
        let keys = entries.iter().map(|e| normalize(e.as_str())).collect();
        Self { entries, keys }
    }

    /// Parse a catalog from text, one spelling per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Leading and
    /// trailing whitespace is dropped; internal spacing is kept as written.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// The built-in Cincinnati catalog, constructed on first use.
    pub fn cincinnati() -> &'static LocationCatalog {
        cincinnati_catalog()
    }

    /// A handle to the built-in catalog; every handle shares one allocation.
    pub fn cincinnati_shared() -> Arc<LocationCatalog> {
        Arc::clone(cincinnati_catalog())
    }

    /// First entry whose normalized form equals the normalized query.
    pub fn find(&self, query: &str) -> Option<&CanonicalLocation> {
        let key = normalize(query);
        if key.is_empty() {
            return None;
        }
        self.keys
            .iter()
            .position(|k| *k == key)
            .map(|i| &self.entries[i])
    }

    pub fn entries(&self) -> &[CanonicalLocation] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalLocation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries as one comma-separated line, for reading aloud.
    pub fn spoken_list(&self) -> String {
        self.entries
            .iter()
            .map(CanonicalLocation::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn cincinnati_catalog() -> &'static Arc<LocationCatalog> {
    static CATALOG: OnceLock<Arc<LocationCatalog>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Arc::new(LocationCatalog::new(
            CINCINNATI_NEIGHBORHOODS.iter().copied(),
        ))
    })
}

/// Resolve a location query to its canonical catalog spelling.
///
/// Callers that received no location at all should not call this; an absent
/// query means "all locations", while a miss here means the user named a place
/// the catalog does not know.
///
/// # Errors
///
/// Returns [`ResolveError::LocationNotRecognized`] if no entry matches.
///
/// # Examples
///
/// ```
/// use cincy_resolver::location::{resolve_location, LocationCatalog};
///
/// let catalog = LocationCatalog::cincinnati();
/// let found = resolve_location("over the rhine", catalog).unwrap();
/// assert_eq!(found.as_str(), "Over-The-Rhine");
/// ```
pub fn resolve_location(query: &str, catalog: &LocationCatalog) -> Result<CanonicalLocation> {
    catalog
        .find(query)
        .cloned()
        .ok_or_else(|| ResolveError::LocationNotRecognized(query.to_string()))
}

/// Comparison key for a location name.
///
/// Lowercases, turns hyphens into spaces, collapses whitespace runs, and
/// spells out the `Mt`/`Mt.` abbreviation as `mount`.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(|word| match word {
            "mt" | "mt." => "mount",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cincinnati() -> &'static LocationCatalog {
        LocationCatalog::cincinnati()
    }

    #[test]
    fn test_normalize_collapses_spacing_and_hyphens() {
        assert_eq!(normalize("Over-The-Rhine"), "over the rhine");
        assert_eq!(normalize("  Mount   Adams "), "mount adams");
        assert_eq!(normalize("Mt.  Lookout"), "mount lookout");
        assert_eq!(normalize("East--End"), "east end");
    }

    #[test]
    fn test_exact_spelling_found() {
        assert_eq!(cincinnati().find("Avondale").unwrap().as_str(), "Avondale");
    }

    #[test]
    fn test_single_space_finds_double_spaced_entry() {
        let found = resolve_location("Mount Adams", cincinnati()).unwrap();
        assert_eq!(found.as_str(), "Mount  Adams");
    }

    #[test]
    fn test_spoken_mount_finds_abbreviated_entry() {
        let found = resolve_location("Mount Washington", cincinnati()).unwrap();
        assert_eq!(found.as_str(), "Mt.  Washington");
    }

    #[test]
    fn test_spaces_find_hyphenated_entry() {
        let found = resolve_location("Over The Rhine", cincinnati()).unwrap();
        assert_eq!(found.as_str(), "Over-The-Rhine");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let found = resolve_location("over-the-RHINE", cincinnati()).unwrap();
        assert_eq!(found.as_str(), "Over-The-Rhine");
    }

    #[test]
    fn test_unknown_location_not_recognized() {
        let err = resolve_location("Nowhereville", cincinnati()).unwrap_err();
        assert_eq!(err, ResolveError::LocationNotRecognized("Nowhereville".into()));
        assert!(cincinnati().find("Montgomery").is_none());
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(cincinnati().find("").is_none());
        assert!(cincinnati().find("   ").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let catalog = LocationCatalog::new(["Mount  Washington", "Mount Washington"]);
        let found = resolve_location("mount washington", &catalog).unwrap();
        assert_eq!(found.as_str(), "Mount  Washington");
    }

    #[test]
    fn test_near_duplicates_resolve_to_earlier_entry() {
        // "South Cumminsville" precedes "S.. Cumminsville"; "Paddock  Hills" is listed twice.
        let found = resolve_location("south cumminsville", cincinnati()).unwrap();
        assert_eq!(found.as_str(), "South Cumminsville");
        let found = resolve_location("Paddock Hills", cincinnati()).unwrap();
        assert_eq!(found.as_str(), "Paddock  Hills");
    }

    #[test]
    fn test_from_lines_skips_comments_and_blanks() {
        let catalog = LocationCatalog::from_lines(
            "# neighborhoods\n\nMount  Washington\r\n  Over-The-Rhine  \n# end\n",
        );
        let names: Vec<&str> = catalog.iter().map(CanonicalLocation::as_str).collect();
        assert_eq!(names, vec!["Mount  Washington", "Over-The-Rhine"]);
        assert_eq!(
            resolve_location("Mount Washington", &catalog).unwrap().as_str(),
            "Mount  Washington"
        );
    }

    #[test]
    fn test_spoken_list_keeps_catalog_order() {
        let catalog = LocationCatalog::new(["Avondale", "Bond Hill", "CUF"]);
        assert_eq!(catalog.spoken_list(), "Avondale, Bond Hill, CUF");
    }

    #[test]
    fn test_cincinnati_catalog_is_loaded_once() {
        let a = LocationCatalog::cincinnati() as *const LocationCatalog;
        let b = LocationCatalog::cincinnati() as *const LocationCatalog;
        assert_eq!(a, b);
        assert_eq!(LocationCatalog::cincinnati().len(), CINCINNATI_NEIGHBORHOODS.len());
    }

    #[test]
    fn test_shared_handles_point_at_builtin_catalog() {
        let a = LocationCatalog::cincinnati_shared();
        let b = LocationCatalog::cincinnati_shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(std::ptr::eq(&*a, LocationCatalog::cincinnati()));
    }

    #[test]
    fn test_canonical_location_serializes_as_string() {
        let found = resolve_location("Mount Adams", cincinnati()).unwrap();
        assert_eq!(serde_json::to_string(&found).unwrap(), r#""Mount  Adams""#);
    }
}
