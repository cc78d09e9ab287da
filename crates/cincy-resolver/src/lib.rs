//! # cincy-resolver
//!
//! Deterministic slot resolution for a crime-report voice skill.
//!
//! A speech front end hands over loosely specified dates ("2017-W23",
//! "PRESENT_REF"), relative phrases ("since tuesday") and spoken neighborhood
//! names ("Over The Rhine"). This crate turns them into closed calendar date
//! ranges and the exact neighborhood spellings the city's data set uses, or a
//! typed failure. It performs no I/O, never logs, and never reads the system
//! clock on its own: "today" is always passed in.
//!
//! ## Modules
//!
//! - [`absolute`] — Partial date token → calendar date
//! - [`relative`] — Relative phrase → date range
//! - [`range`] — `DateRange` and its ordering / no-future validation
//! - [`location`] — Canonical location catalog and lookup
//! - [`request`] — Whole-request resolution and the `Resolver` facade
//! - [`clock`] — Sources of "today"
//! - [`error`] — Error types

pub mod absolute;
pub mod clock;
pub mod error;
pub mod location;
pub mod range;
pub mod relative;
pub mod request;

pub use absolute::{resolve_absolute_date, resolve_date_token, PRESENT_REF};
pub use clock::{ClockSource, FixedClock, SystemClock, DEFAULT_TIMEZONE};
pub use error::ResolveError;
pub use location::{resolve_location, CanonicalLocation, LocationCatalog};
pub use range::{validate, DateRange};
pub use relative::{resolve_relative_phrase, RelativePhrase};
pub use request::{LocationSelection, Resolution, Resolver, SlotRequest};
