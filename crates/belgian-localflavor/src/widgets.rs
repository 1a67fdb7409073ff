use std::collections::BTreeMap;

use crate::choices::{self, Choice, PROVINCE_CHOICES, REGION_CHOICES};

/// A select widget: HTML attributes plus a static list of choices.
///
/// Rendering is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    attrs: BTreeMap<String, String>,
    choices: &'static [Choice],
}

impl Select {
    /// Builds a select over `choices` with optional attributes.
    pub fn new(attrs: Option<BTreeMap<String, String>>, choices: &'static [Choice]) -> Self {
        Self {
            attrs: attrs.unwrap_or_default(),
            choices,
        }
    }

    /// Attributes to render on the element.
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    /// Choices in display order.
    pub fn choices(&self) -> &'static [Choice] {
        self.choices
    }

    /// Label for `code`, if it is one of the choices.
    pub fn label_for(&self, code: &str) -> Option<&'static str> {
        choices::find(self.choices, code).map(|c| c.label)
    }

    /// True when `code` is one of the choices.
    pub fn contains(&self, code: &str) -> bool {
        choices::find(self.choices, code).is_some()
    }
}

macro_rules! select {
    ($name:ident, $doc:expr, $table:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(Select);

        impl $name {
            /// Creates the widget with optional attributes.
            pub fn new(attrs: Option<BTreeMap<String, String>>) -> Self {
                Self(Select::new(attrs, $table))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(None)
            }
        }

        impl std::ops::Deref for $name {
            type Target = Select;

            fn deref(&self) -> &Select {
                &self.0
            }
        }
    };
}

select!(
    ProvinceSelect,
    "Select widget listing the Belgian provinces.",
    PROVINCE_CHOICES
);
select!(
    RegionSelect,
    "Select widget listing the Belgian regions.",
    REGION_CHOICES
);
