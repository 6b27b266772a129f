//! Parser settings.
//!
//! A [`ParserSettings`] value is immutable once handed to a parser; changing
//! behaviour means building a new snapshot with [`ParserSettings::with_overrides`].
//! Keys deserialize in `snake_case` and also accept their camelCase aliases
//! (`parseRelAttr`, `forceValidUrls`, ...).

use serde::{Deserialize, Serialize};

const fn enabled() -> bool {
    true
}

/// Default recursion bound for the tree walk.
const fn default_max_depth() -> usize {
    512
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ParserSettings {
    /// Infer `name`/`url`/`photo` for objects that declare no properties.
    #[serde(default = "enabled", alias = "parseSingletonRootNodes")]
    pub parse_singleton_root_nodes: bool,

    /// Treat `<time pubdate>` as `dt-published` when none was declared.
    #[serde(default = "enabled", alias = "parsePubDateAttr")]
    pub parse_pub_date_attr: bool,

    /// Collect `rel` attribute tokens as relationships.
    #[serde(default = "enabled", alias = "parseRelAttr")]
    pub parse_rel_attr: bool,

    /// Reserved for include-pattern / `itemref` resolution. No effect.
    #[serde(default, alias = "parseItemRefAttr")]
    pub parse_item_ref_attr: bool,

    /// Route legacy (v1) class names through registered vocabularies.
    #[serde(default, alias = "parseV1Microformats")]
    pub parse_v1_microformats: bool,

    /// Drop `u-*` values that do not look like URLs.
    #[serde(default, alias = "forceValidUrls")]
    pub force_valid_urls: bool,

    /// Drop `dt-*` values that do not look like ISO 8601 date-times.
    #[serde(default = "enabled", alias = "forceValidDates")]
    pub force_valid_dates: bool,

    /// Subtrees deeper than this are not walked.
    #[serde(default = "default_max_depth", alias = "maxDepth")]
    pub max_depth: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            parse_singleton_root_nodes: true,
            parse_pub_date_attr: true,
            parse_rel_attr: true,
            parse_item_ref_attr: false,
            parse_v1_microformats: false,
            force_valid_urls: false,
            force_valid_dates: true,
            max_depth: default_max_depth(),
        }
    }
}

impl ParserSettings {
    /// A new snapshot with every `Some` field of `overrides` applied.
    #[must_use]
    pub fn with_overrides(&self, overrides: &SettingsOverride) -> Self {
        Self {
            parse_singleton_root_nodes: overrides
                .parse_singleton_root_nodes
                .unwrap_or(self.parse_singleton_root_nodes),
            parse_pub_date_attr: overrides
                .parse_pub_date_attr
                .unwrap_or(self.parse_pub_date_attr),
            parse_rel_attr: overrides.parse_rel_attr.unwrap_or(self.parse_rel_attr),
            parse_item_ref_attr: overrides
                .parse_item_ref_attr
                .unwrap_or(self.parse_item_ref_attr),
            parse_v1_microformats: overrides
                .parse_v1_microformats
                .unwrap_or(self.parse_v1_microformats),
            force_valid_urls: overrides.force_valid_urls.unwrap_or(self.force_valid_urls),
            force_valid_dates: overrides
                .force_valid_dates
                .unwrap_or(self.force_valid_dates),
            max_depth: overrides.max_depth.unwrap_or(self.max_depth),
        }
    }
}

/// Partial settings; `None` leaves the base value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SettingsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_singleton_root_nodes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_pub_date_attr: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_rel_attr: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_item_ref_attr: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_v1_microformats: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_valid_urls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_valid_dates: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl SettingsOverride {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
