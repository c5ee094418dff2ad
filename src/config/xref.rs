//! `[xref]` section configuration.
//!
//! Raw cross-reference tables as written in doxbridge.toml. They are checked
//! and indexed by [`crate::xref::XrefTable`].

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `[xref]` section in doxbridge.toml.
///
/// # Example
/// ```toml
/// [xref]
/// ignore = ["Vector2", "Vector3"]
///
/// [xref.rename]
/// NativeArray = "NativeArray_1"
///
/// [xref.groups."upm.tmp"]
/// type_page = "https://docs.unity3d.com/Packages/com.unity.textmeshpro@1.2/api/%s.html"
/// search_page = "https://docs.unity3d.com/Packages/com.unity.textmeshpro@1.2/?%s"
///
/// [xref.groups."upm.tmp".namespaces]
/// TMPro = ["TMP_Text"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct XrefConfig {
    /// Aliases that are always rendered as plain text.
    #[serde(default = "defaults::xref::ignore")]
    #[educe(Default = defaults::xref::ignore())]
    pub ignore: Vec<String>,

    /// Alias → URL slug, for sites whose page names differ from the type name.
    #[serde(default = "defaults::xref::rename")]
    #[educe(Default = defaults::xref::rename())]
    pub rename: BTreeMap<String, String>,

    /// Package groups keyed by name (e.g. `unity`, `upm.xrit`).
    #[serde(default = "defaults::xref::groups")]
    #[educe(Default = defaults::xref::groups())]
    pub groups: BTreeMap<String, XrefGroup>,
}

/// One package group: URL templates plus namespace → aliases.
///
/// `%s` in a template is replaced by the qualified symbol. Groups with a
/// built-in scheme (`unity`) may leave both templates unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XrefGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_page: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_page: Option<String>,

    /// Owning namespace → aliases. The empty namespace means "unqualified".
    #[serde(default)]
    pub namespaces: BTreeMap<String, Vec<String>>,
}
