use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub mod events;
pub mod locations;

/// Directory under the run root that holds every category folder
pub const IMAGES_ROOT: &str = "public/images";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    /// Event pictures
    Events,
    /// Venue pictures
    Locations,
}

impl Category {
    pub fn all() -> [Self; 2] {
        [Self::Events, Self::Locations]
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Locations => "locations",
        }
    }

    /// Destination directory for this category below `root`
    pub fn directory(&self, root: &Path) -> PathBuf {
        root.join(IMAGES_ROOT).join(self.dir_name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.dir_name())
    }
}

/// A remote image and the file name it is stored under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadItem {
    pub source: String,
    pub file_name: String,
}

impl DownloadItem {
    pub fn new(source: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            file_name: file_name.into(),
        }
    }
}

fn from_table(table: &[(&str, &str)]) -> Vec<DownloadItem> {
    table
        .iter()
        .map(|(source, file_name)| DownloadItem::new(*source, *file_name))
        .collect()
}

/// Ordered download lists, events first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DownloadPlan {
    pub events: Vec<DownloadItem>,
    pub locations: Vec<DownloadItem>,
}

impl DownloadPlan {
    /// The built-in image set
    pub fn builtin() -> Self {
        Self {
            events: from_table(&events::ITEMS),
            locations: from_table(&locations::ITEMS),
        }
    }

    pub fn items(&self, category: Category) -> &[DownloadItem] {
        match category {
            Category::Events => &self.events,
            Category::Locations => &self.locations,
        }
    }

    /// Every item paired with its category, in processing order
    pub fn entries(&self) -> impl Iterator<Item = (Category, &DownloadItem)> + '_ {
        Category::all()
            .into_iter()
            .flat_map(move |category| self.items(category).iter().map(move |item| (category, item)))
    }

    pub fn len(&self) -> usize {
        self.events.len() + self.locations.len()
    }
}
