//! Card content - the person, the avatar asset and the portfolio.
//!
//! Content is immutable once loaded. The built-in card is returned by
//! [`CardContent::default`]; a JSON file with the same shape can replace it.
//!
//! ```json
//! {
//!   "person": {
//!     "name": "Pedro Bruno",
//!     "profession": "Android Compose Programmer",
//!     "handle": "@pedrobrunof"
//!   },
//!   "avatar": { "name": "profile_image" },
//!   "projects": [{ "title": "Project 1" }, { "title": "Project 2" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::asset::AssetRef;
use crate::error::{CardError, CardResult};

/// Number of projects on the built-in card
pub const DEFAULT_PROJECT_COUNT: usize = 10;

/// Who the card is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub profession: String,
    pub handle: String,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: "Pedro Bruno".to_string(),
            profession: "Android Compose Programmer".to_string(),
            handle: "@pedrobrunof".to_string(),
        }
    }
}

/// A single portfolio entry. Position in the list is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
}

impl PortfolioItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

/// "Project 1" through "Project 10", in display order.
pub fn default_portfolio() -> Vec<PortfolioItem> {
    (1..=DEFAULT_PROJECT_COUNT)
        .map(|n| PortfolioItem::new(format!("Project {}", n)))
        .collect()
}

/// Everything the card renders besides its reveal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent {
    pub person: Person,
    #[serde(default)]
    pub avatar: AssetRef,
    #[serde(default = "default_portfolio")]
    pub projects: Vec<PortfolioItem>,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            person: Person::default(),
            avatar: AssetRef::default(),
            projects: default_portfolio(),
        }
    }
}

impl CardContent {
    /// Parse and validate card content from a JSON string.
    pub fn from_json(json: &str) -> CardResult<Self> {
        let content: CardContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load card content from a JSON file.
    pub fn load(path: &Path) -> CardResult<Self> {
        let json = fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            projects = content.projects.len(),
            "Loaded card content"
        );
        Ok(content)
    }

    /// Load from `path`, falling back to the built-in card on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Using built-in card, could not load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> CardResult<()> {
        if self.person.name.trim().is_empty() {
            return Err(CardError::InvalidContent("name is empty".to_string()));
        }
        if !self.avatar.is_plain_name() {
            return Err(CardError::InvalidContent(format!(
                "avatar '{}' must be a file name inside the assets directory",
                self.avatar.name
            )));
        }
        if let Some(pos) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(CardError::InvalidContent(format!(
                "project {} has an empty title",
                pos + 1
            )));
        }
        Ok(())
    }
}
