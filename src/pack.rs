//! Language packs, templates, and call parameters.
//!
//! A [`LanguagePack`] bundles the localized strings for one locale: a
//! `templates` section of static strings and a `functions` section of
//! computed templates. Either section may be omitted, but a pack with
//! neither is malformed and will be rejected by the registry.

use ahash::AHashMap;

/// A computed template: invoked with the call's parameters, it produces the
/// template body that placeholder substitution then runs over.
///
/// Returning `None` signals that the function could not produce a string;
/// the engine reports this and falls back to the empty string. By contract
/// the function must be synchronous and side-effect-free; the engine cannot
/// enforce this.
pub type TemplateFn = Box<dyn Fn(Option<&Params>) -> Option<String> + Send + Sync>;

/// Named parameters for one `text` call.
///
/// Values are converted to their string form at insertion, so expansion
/// only ever deals with strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(AHashMap<String, String>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining insert, for literal parameter sets at call sites.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// The template bound to an identifier, resolved by a single lookup.
///
/// An identifier present in both sections resolves to `Computed`: a
/// function-backed template always shadows a static one.
pub enum Template<'a> {
    /// A function producing the template body.
    Computed(&'a TemplateFn),
    /// A stored template body.
    Static(&'a str),
}

/// The strings and computed templates for one locale.
///
/// `None` means the section is absent altogether, which is distinct from a
/// present-but-empty section: a pack whose only section is `Some` of an
/// empty map is still well-formed.
#[derive(Default)]
pub struct LanguagePack {
    pub templates: Option<AHashMap<String, String>>,
    pub functions: Option<AHashMap<String, TemplateFn>>,
}

impl LanguagePack {
    /// An empty, well-formed-section-less pack. Rejected by the registry;
    /// useful as the "nothing loaded" default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a static template, creating the `templates` section if needed.
    #[must_use]
    pub fn template(mut self, id: impl Into<String>, body: impl Into<String>) -> Self {
        self.templates
            .get_or_insert_with(AHashMap::new)
            .insert(id.into(), body.into());
        self
    }

    /// Adds a computed template, creating the `functions` section if needed.
    #[must_use]
    pub fn function(
        mut self,
        id: impl Into<String>,
        f: impl Fn(Option<&Params>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.functions
            .get_or_insert_with(AHashMap::new)
            .insert(id.into(), Box::new(f));
        self
    }

    /// True when at least one section is present. Packs failing this are
    /// rejected by [`crate::I18n::set_language`].
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.templates.is_some() || self.functions.is_some()
    }

    /// Looks up `id`, preferring the `functions` section over `templates`.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<Template<'_>> {
        if let Some(f) = self.functions.as_ref().and_then(|m| m.get(id)) {
            return Some(Template::Computed(f));
        }
        self.templates
            .as_ref()
            .and_then(|m| m.get(id))
            .map(|body| Template::Static(body.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pack_is_malformed() {
        assert!(!LanguagePack::new().is_well_formed());
    }

    #[test]
    fn empty_section_is_well_formed() {
        let pack = LanguagePack {
            templates: Some(AHashMap::new()),
            ..Default::default()
        };
        assert!(pack.is_well_formed());

        let pack = LanguagePack {
            functions: Some(AHashMap::new()),
            ..Default::default()
        };
        assert!(pack.is_well_formed());
    }

    #[test]
    fn builder_creates_sections_on_demand() {
        let pack = LanguagePack::new().template("HELLO", "Hi");
        assert!(pack.templates.is_some());
        assert!(pack.functions.is_none());
        assert!(pack.is_well_formed());
    }

    #[test]
    fn resolve_prefers_functions_over_templates() {
        let pack = LanguagePack::new()
            .template("X", "static")
            .function("X", |_| Some("dynamic".into()));
        match pack.resolve("X") {
            Some(Template::Computed(f)) => assert_eq!(f(None).as_deref(), Some("dynamic")),
            _ => panic!("expected the computed template to win"),
        }
    }

    #[test]
    fn resolve_falls_back_to_templates() {
        let pack = LanguagePack::new().template("X", "static");
        match pack.resolve("X") {
            Some(Template::Static(body)) => assert_eq!(body, "static"),
            _ => panic!("expected the static template"),
        }
    }

    #[test]
    fn resolve_unknown_id_is_none() {
        let pack = LanguagePack::new().template("X", "static");
        assert!(pack.resolve("Y").is_none());
    }

    #[test]
    fn params_convert_values_at_insertion() {
        let params = Params::new().with("n", 42).with("flag", true);
        assert_eq!(params.get("n"), Some("42"));
        assert_eq!(params.get("flag"), Some("true"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn params_from_iterator() {
        let params: Params = [("a", 1), ("b", 2)].into_iter().collect();
        assert!(params.contains("a"));
        assert_eq!(params.get("b"), Some("2"));
    }
}
