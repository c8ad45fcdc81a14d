//! The registry/resolver pair behind the two-call public surface.
//!
//! An [`I18n`] instance owns exactly one active [`LanguagePack`] and answers
//! `text` lookups against it. Every failure is recovered locally: a call
//! never panics and never returns an error, only a degraded string plus a
//! warning line on the configured [`DiagnosticsSink`].

use crate::diagnostics::{DiagnosticsSink, TracingSink, Warning};
use crate::pack::{LanguagePack, Params, Template};
use crate::template::{assemble, missing_parameters, scan};

/// What `text` does when a template references a parameter the caller did
/// not supply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingParamPolicy {
    /// Warn, then expand anyway with `???` in each unfilled slot.
    #[default]
    Sentinel,
    /// Warn, then return the empty string like the other validation
    /// failures.
    Fail,
}

/// Template registry and resolver for one locale.
///
/// Holds the active language pack, the missing-parameter policy, and the
/// diagnostics sink. Instances are independent: a host serving several
/// locales at once constructs one `I18n` per locale.
///
/// ```
/// use phrasebook::{I18n, LanguagePack, Params};
///
/// let mut i18n = I18n::new();
/// i18n.set_language(LanguagePack::new().template("HELLO", "Hello, %who%!"));
/// let greeting = i18n.text("HELLO", Some(&Params::new().with("who", "Coder")));
/// assert_eq!(greeting, "Hello, Coder!");
/// ```
pub struct I18n {
    pack: LanguagePack,
    on_missing: MissingParamPolicy,
    sink: Box<dyn DiagnosticsSink>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    /// An engine with no pack loaded, the `Sentinel` policy, and warnings
    /// routed to `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pack: LanguagePack::new(),
            on_missing: MissingParamPolicy::default(),
            sink: Box::new(TracingSink),
        }
    }

    /// Replaces the missing-parameter policy.
    #[must_use]
    pub fn on_missing(mut self, policy: MissingParamPolicy) -> Self {
        self.on_missing = policy;
        self
    }

    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DiagnosticsSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Installs `pack` as the active language pack.
    ///
    /// A pack with neither a `templates` nor a `functions` section is
    /// rejected: the call warns, returns `false`, and leaves the previous
    /// pack in place. On success the pack is replaced wholesale and the
    /// call returns `true`.
    pub fn set_language(&mut self, pack: LanguagePack) -> bool {
        if !pack.is_well_formed() {
            self.warn(&Warning::PackRejected);
            return false;
        }
        self.pack = pack;
        true
    }

    /// Resolves `id` against the active pack and expands the template with
    /// `params`.
    ///
    /// A function-backed template shadows a static one under the same id.
    /// An empty id, an id absent from the pack, or a computed template that
    /// produces no string each warn and yield `""`. Missing parameters are
    /// handled per the configured [`MissingParamPolicy`]; with the default
    /// `Sentinel` policy the result is always a fully assembled string,
    /// with `???` standing in for each unfilled slot.
    #[must_use]
    pub fn text(&self, id: &str, params: Option<&Params>) -> String {
        if id.is_empty() {
            self.warn(&Warning::EmptyId);
            return String::new();
        }

        let body = match self.pack.resolve(id) {
            Some(Template::Computed(f)) => match f(params) {
                Some(body) => body,
                None => {
                    self.warn(&Warning::NoComputedValue { id: id.to_owned() });
                    return String::new();
                }
            },
            Some(Template::Static(body)) => body.to_owned(),
            None => {
                self.warn(&Warning::UnknownId { id: id.to_owned() });
                return String::new();
            }
        };

        let missing = missing_parameters(&body, params);
        if !missing.is_empty() {
            self.warn(&Warning::MissingParameters {
                id: id.to_owned(),
                names: missing.join(", "),
            });
            if self.on_missing == MissingParamPolicy::Fail {
                return String::new();
            }
        }

        assemble(&scan(&body), params)
    }

    fn warn(&self, warning: &Warning) {
        self.sink.warn(&warning.to_string());
    }
}
