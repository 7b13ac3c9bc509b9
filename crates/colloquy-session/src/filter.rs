//! Result-category filter.
//!
//! A single selected value from a closed enumeration, attached to every
//! outbound submission. The wildcard `All` is the default and is sent
//! explicitly; the category key is never omitted from a payload.

use serde::{Deserialize, Serialize};

/// A result category the generation backend can restrict itself to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Wildcard: no restriction.
    #[default]
    All,
    Company,
    #[serde(rename = "Research Paper")]
    ResearchPaper,
    #[serde(rename = "News Article")]
    NewsArticle,
    #[serde(rename = "PDF")]
    Pdf,
    Github,
    Tweet,
    Movie,
    Song,
    #[serde(rename = "Personal Site")]
    PersonalSite,
}

impl Category {
    /// Every selectable category, picker order.
    pub const ALL: [Category; 10] = [
        Category::All,
        Category::Company,
        Category::ResearchPaper,
        Category::NewsArticle,
        Category::Pdf,
        Category::Github,
        Category::Tweet,
        Category::Movie,
        Category::Song,
        Category::PersonalSite,
    ];

    /// The display name, which is also the payload value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Company => "Company",
            Category::ResearchPaper => "Research Paper",
            Category::NewsArticle => "News Article",
            Category::Pdf => "PDF",
            Category::Github => "Github",
            Category::Tweet => "Tweet",
            Category::Movie => "Movie",
            Category::Song => "Song",
            Category::PersonalSite => "Personal Site",
        }
    }

    /// Parse a display name back into a category.
    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picker state for the category filter.
///
/// Selecting a value closes the picker. The selection is not part of
/// session state: it survives a reset.
#[derive(Clone, Debug, Default)]
pub struct CategoryPicker {
    selected: Category,
    open: bool,
}

impl CategoryPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected category.
    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the picker popover.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Select a category and close the picker.
    pub fn select(&mut self, category: Category) {
        self.selected = category;
        self.open = false;
    }
}

// =============================================================================
// Tests
// =============================================================================
