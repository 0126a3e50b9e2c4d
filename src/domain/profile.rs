//! `profile` object

use super::basic::{basic_setters, Basic, OpenGraph};
use super::meta::MetaList;

/// Builds a `profile` object.
///
/// Besides being rendered on its own, a profile is how other objects refer
/// to people: article and book authors, musicians, playlist creators and
/// video credits are all profiles rendered under the referring property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileBuilder {
    basic: Basic,
    first_name: String,
    last_name: String,
    username: String,
    gender: String,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    basic_setters!();

    /// Sets the `profile:first_name` property.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the `profile:last_name` property.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the `profile:username` property.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the `profile:gender` property.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Tags of this profile referenced under `ns`, e.g. `article:author`
    pub(crate) fn reference(&self, ns: &str) -> MetaList {
        let mut mb = self.basic.reference(ns);
        self.render_names(ns, &mut mb);
        mb
    }

    fn render_names(&self, ns: &str, mb: &mut MetaList) {
        if !self.first_name.is_empty() {
            mb.add(ns, "first_name", &self.first_name);
        }
        if !self.last_name.is_empty() {
            mb.add(ns, "last_name", &self.last_name);
        }
        if !self.username.is_empty() {
            mb.add(ns, "username", &self.username);
        }
        if !self.gender.is_empty() {
            mb.add(ns, "gender", &self.gender);
        }
    }
}

impl OpenGraph for ProfileBuilder {
    fn meta(&self) -> MetaList {
        let mut mb = self.basic.meta("profile");
        self.render_names("profile", &mut mb);
        mb
    }
}
