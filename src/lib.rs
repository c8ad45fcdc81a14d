#![forbid(unsafe_code)]

//! Language-pack template resolution for UI strings.
//!
//! `phrasebook` turns a symbolic template id plus named parameters into a
//! final display string. Templates come from the active [`LanguagePack`],
//! either as stored strings or as computed functions, and `%name%`
//! placeholders are filled from the call's [`Params`], with `???` standing
//! in for anything the caller did not supply.
//!
//! # Role
//! Isolates message bodies from code so UI layers can swap language packs
//! at runtime without touching call sites. The whole surface is two calls:
//! [`I18n::set_language`] and [`I18n::text`].
//!
//! # How it fits in a host
//! The engine is synchronous and instance-scoped: construct one [`I18n`]
//! per locale (or per request context) and share it read-only. Nothing in
//! a lookup can fail outward — malformed packs, unknown ids, and missing
//! parameters all degrade to an empty or sentinel-laden string plus one
//! warning line on the configured [`DiagnosticsSink`].
//!
//! Out of scope by design: plural rules, locale-aware number/date
//! formatting, ICU message syntax, value escaping, nested templates, and
//! template caching.

pub mod diagnostics;
pub mod engine;
pub mod pack;
pub mod template;

pub use diagnostics::{BufferSink, DiagnosticsSink, NullSink, TracingSink};
pub use engine::{I18n, MissingParamPolicy};
pub use pack::{LanguagePack, Params, Template, TemplateFn};
pub use template::{MARKER, Part, SENTINEL, assemble, missing_parameters, scan};
