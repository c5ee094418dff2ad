//! Cross-reference resolution for external C# types.
//!
//! Narrative docs mention external types by their short name (`InputDevice`,
//! `TMP_Text`). This module maps such an alias, within a package group, to
//! its owning namespace and builds the URLs of the group's documentation site.
//!
//! # Lookup
//!
//! ```text
//! alias ──► ignore set? ──yes──► Plain (Ignored)
//!              │no
//!              ▼
//!         group known? ──no──► Plain (UnknownGroup)
//!              │yes
//!              ▼
//!         alias in group? ──no──► Plain (NotFound)
//!              │yes
//!              ▼
//!         rename ─► "namespace.slug" ─► %s in type_page / search_page
//! ```
//!
//! URLs are built statically; nothing here touches the network.

use crate::config::{XrefConfig, XrefGroup};
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

/// Placeholder replaced by the qualified symbol in URL templates.
pub const SYMBOL_PLACEHOLDER: &str = "%s";

/// URL templates of groups whose documentation sites use a well-known scheme.
const BUILTIN_PAGES: &[(&str, &str, &str)] = &[(
    "unity",
    "https://docs.unity3d.com/ScriptReference/%s.html",
    "https://docs.unity3d.com/ScriptReference/30_search.html?q=%s",
)];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XrefError {
    #[error("alias `{alias}` is ambiguous in group `{group}`: `{first}` and `{second}`")]
    AmbiguousAlias {
        group: String,
        alias: String,
        first: String,
        second: String,
    },

    #[error("group `{0}` has no URL templates")]
    MissingTemplates(String),

    #[error("{field} of group `{group}` must contain `%s`")]
    InvalidTemplate { group: String, field: &'static str },
}

/// Type-page and search-page URL templates of one package group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplates {
    pub type_page: String,
    pub search_page: String,
}

impl UrlTemplates {
    fn expand(&self, symbol: &str) -> Link {
        let encoded = urlencoding::encode(symbol);
        Link {
            primary: self.type_page.replace(SYMBOL_PLACEHOLDER, &encoded),
            fallback: self.search_page.replace(SYMBOL_PLACEHOLDER, &encoded),
        }
    }
}

/// A resolved external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Page of the type itself.
    pub primary: String,
    /// Search page, for when the type page has moved.
    pub fallback: String,
}

/// Why an alias renders as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainReason {
    /// Listed in `[xref] ignore`; never looked up.
    Ignored,
    /// The group is not configured.
    UnknownGroup,
    /// The group does not know the alias.
    NotFound,
}

/// Outcome of resolving one symbol mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Link(Link),
    Plain(PlainReason),
}

/// Indexed, validated cross-reference tables.
#[derive(Debug, Clone, Default)]
pub struct XrefTable {
    ignore: HashSet<String>,
    rename: HashMap<String, String>,
    /// group → alias → namespace
    aliases: BTreeMap<String, HashMap<String, String>>,
    pages: BTreeMap<String, UrlTemplates>,
}

impl XrefTable {
    /// Build the table from `[xref]`, rejecting ambiguous aliases and groups
    /// without usable URL templates.
    pub fn from_config(config: &XrefConfig) -> Result<Self, XrefError> {
        let mut table = Self {
            ignore: config.ignore.iter().cloned().collect(),
            rename: config.rename.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            ..Self::default()
        };

        for (name, group) in &config.groups {
            table.pages.insert(name.clone(), group_pages(name, group)?);
            table.aliases.insert(name.clone(), index_group(name, group)?);
        }

        Ok(table)
    }

    /// Resolve `alias` within `group`.
    pub fn resolve_url(&self, alias: &str, group: &str) -> Resolution {
        if self.ignore.contains(alias) {
            return Resolution::Plain(PlainReason::Ignored);
        }
        let (Some(aliases), Some(pages)) = (self.aliases.get(group), self.pages.get(group)) else {
            return Resolution::Plain(PlainReason::UnknownGroup);
        };
        match aliases.get(alias) {
            Some(namespace) => Resolution::Link(pages.expand(&self.symbol(namespace, alias))),
            None => Resolution::Plain(PlainReason::NotFound),
        }
    }

    /// Resolve `alias` in the first group (by name) that defines it.
    ///
    /// Returns the group name alongside the resolution when linked.
    pub fn resolve_alias(&self, alias: &str) -> (Option<&str>, Resolution) {
        if self.ignore.contains(alias) {
            return (None, Resolution::Plain(PlainReason::Ignored));
        }
        self.aliases
            .iter()
            .find(|(_, aliases)| aliases.contains_key(alias))
            .map_or((None, Resolution::Plain(PlainReason::NotFound)), |(group, _)| {
                (Some(group.as_str()), self.resolve_url(alias, group))
            })
    }

    /// Qualified symbol used in URLs: `namespace.slug`, or `slug` when the
    /// namespace is empty.
    fn symbol(&self, namespace: &str, alias: &str) -> String {
        let slug = self.rename.get(alias).map_or(alias, String::as_str);
        if namespace.is_empty() {
            slug.to_owned()
        } else {
            format!("{namespace}.{slug}")
        }
    }

    /// Group names in lookup order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// URL templates per group, built-in schemes included.
    pub const fn pages(&self) -> &BTreeMap<String, UrlTemplates> {
        &self.pages
    }

    /// Number of aliases that can be linked, over all groups.
    pub fn alias_count(&self) -> usize {
        self.aliases.values().map(HashMap::len).sum()
    }
}

/// URL templates of a group: configured ones win, then built-in ones.
fn group_pages(name: &str, group: &XrefGroup) -> Result<UrlTemplates, XrefError> {
    let builtin = BUILTIN_PAGES.iter().find(|(builtin, _, _)| *builtin == name);

    let type_page = group
        .type_page
        .clone()
        .or_else(|| builtin.map(|(_, page, _)| page.to_string()));
    let search_page = group
        .search_page
        .clone()
        .or_else(|| builtin.map(|(_, _, page)| page.to_string()));

    let (Some(type_page), Some(search_page)) = (type_page, search_page) else {
        return Err(XrefError::MissingTemplates(name.to_owned()));
    };

    for (field, template) in [("type_page", &type_page), ("search_page", &search_page)] {
        if !template.contains(SYMBOL_PLACEHOLDER) {
            return Err(XrefError::InvalidTemplate {
                group: name.to_owned(),
                field,
            });
        }
    }

    Ok(UrlTemplates {
        type_page,
        search_page,
    })
}

/// alias → namespace for one group; an alias may own only one namespace.
fn index_group(name: &str, group: &XrefGroup) -> Result<HashMap<String, String>, XrefError> {
    let mut index: HashMap<String, String> = HashMap::new();

    for (namespace, aliases) in &group.namespaces {
        for alias in aliases {
            if let Some(first) = index.get(alias)
                && first != namespace
            {
                return Err(XrefError::AmbiguousAlias {
                    group: name.to_owned(),
                    alias: alias.clone(),
                    first: first.clone(),
                    second: namespace.clone(),
                });
            }
            index.insert(alias.clone(), namespace.clone());
        }
    }

    Ok(index)
}
