//! One crime-report request: a date slot, a relative-phrase slot, and a
//! neighborhood slot, resolved together against a single "today".

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::absolute::{resolve_absolute_date, resolve_date_token};
use crate::clock::ClockSource;
use crate::error::Result;
use crate::location::{resolve_location, CanonicalLocation, LocationCatalog};
use crate::range::DateRange;
use crate::relative::resolve_relative_phrase;

/// Raw slot values as delivered by the conversation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotRequest {
    /// Absolute date token (`"2017-03"`, `"PRESENT_REF"`, …).
    pub date: Option<String>,
    /// Relative phrase (`"last week"`, `"since friday"`, …).
    pub date_string: Option<String>,
    /// Free-form neighborhood name.
    pub location: Option<String>,
}

/// Which locations a request covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum LocationSelection {
    /// No location was named.
    All,
    Named(CanonicalLocation),
}

/// The validated outcome of a [`SlotRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// `None` when neither date slot was filled.
    pub range: Option<DateRange>,
    pub location: LocationSelection,
}

impl SlotRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, token: impl Into<String>) -> Self {
        self.date = Some(token.into());
        self
    }

    pub fn with_date_string(mut self, phrase: impl Into<String>) -> Self {
        self.date_string = Some(phrase.into());
        self
    }

    pub fn with_location(mut self, query: impl Into<String>) -> Self {
        self.location = Some(query.into());
        self
    }

    /// Resolve every filled slot against `today`.
    ///
    /// A relative phrase takes precedence over an absolute date token when both
    /// are present. A blank or missing location selects all locations.
    ///
    /// # Errors
    ///
    /// The first failure among the date and location slots, date first.
    pub fn resolve(&self, today: NaiveDate, catalog: &LocationCatalog) -> Result<Resolution> {
        let range = match (filled(&self.date_string), filled(&self.date)) {
            (Some(phrase), _) => Some(resolve_relative_phrase(phrase, today)?),
            (None, Some(token)) => Some(resolve_date_token(token, today)?),
            (None, None) => None,
        };

        let location = match filled(&self.location) {
            Some(query) => LocationSelection::Named(resolve_location(query, catalog)?),
            None => LocationSelection::All,
        };

        Ok(Resolution { range, location })
    }
}

/// A slot value that is present and not just whitespace.
fn filled(slot: &Option<String>) -> Option<&str> {
    slot.as_deref().filter(|s| !s.trim().is_empty())
}

/// A clock and a shared catalog bundled for request handlers.
///
/// Each method reads the clock exactly once, so one call never straddles a
/// day boundary.
#[derive(Debug, Clone)]
pub struct Resolver<C> {
    clock: C,
    catalog: Arc<LocationCatalog>,
}

impl<C: ClockSource> Resolver<C> {
    pub fn new(clock: C, catalog: Arc<LocationCatalog>) -> Self {
        Self { clock, catalog }
    }

    /// A resolver over the built-in Cincinnati catalog.
    pub fn cincinnati(clock: C) -> Self {
        Self::new(clock, LocationCatalog::cincinnati_shared())
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// See [`resolve_absolute_date`]. The result is not range-validated.
    pub fn absolute_date(&self, token: &str) -> Result<NaiveDate> {
        resolve_absolute_date(token, self.clock.today())
    }

    /// See [`resolve_date_token`].
    pub fn date_token(&self, token: &str) -> Result<DateRange> {
        resolve_date_token(token, self.clock.today())
    }

    /// See [`resolve_relative_phrase`].
    pub fn relative_phrase(&self, phrase: &str) -> Result<DateRange> {
        resolve_relative_phrase(phrase, self.clock.today())
    }

    /// See [`resolve_location`].
    pub fn location(&self, query: &str) -> Result<CanonicalLocation> {
        resolve_location(query, &self.catalog)
    }

    /// See [`SlotRequest::resolve`].
    pub fn request(&self, request: &SlotRequest) -> Result<Resolution> {
        request.resolve(self.clock.today(), &self.catalog)
    }
}
