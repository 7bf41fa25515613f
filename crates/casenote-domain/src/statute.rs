//! Statute categories and the per-category bucket table.

use serde::{Deserialize, Serialize};

/// The statute sub-categories a judgment record recognizes.
///
/// Extraction payloads label statutes with free-form category strings;
/// [`StatuteCategory::from_label`] resolves those labels, sending anything
/// unrecognized to the fallback bucket so no extracted value is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatuteCategory {
    /// Legal acts and laws.
    Acts,
    /// Sections of a code or act.
    Sections,
    /// Constitutional or treaty articles.
    Articles,
}

impl StatuteCategory {
    /// Bucket that receives values whose payload category is unrecognized.
    ///
    /// `acts` is the designated fallback: the serialized statute table nests
    /// exactly three ways, and "acts" is the most generic of the three.
    pub const FALLBACK: StatuteCategory = StatuteCategory::Acts;

    /// All categories, in serialization order.
    pub const ALL: [StatuteCategory; 3] = [
        StatuteCategory::Acts,
        StatuteCategory::Sections,
        StatuteCategory::Articles,
    ];

    /// Resolve a payload category label.
    ///
    /// Labels match case-insensitively; anything else maps to
    /// [`StatuteCategory::FALLBACK`].
    ///
    /// # Examples
    ///
    /// ```
    /// use casenote_domain::StatuteCategory;
    ///
    /// assert_eq!(StatuteCategory::from_label("sections"), StatuteCategory::Sections);
    /// assert_eq!(StatuteCategory::from_label("Articles"), StatuteCategory::Articles);
    /// assert_eq!(StatuteCategory::from_label("schedules"), StatuteCategory::FALLBACK);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "acts" => StatuteCategory::Acts,
            "sections" => StatuteCategory::Sections,
            "articles" => StatuteCategory::Articles,
            _ => StatuteCategory::FALLBACK,
        }
    }

    /// The serialized key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatuteCategory::Acts => "acts",
            StatuteCategory::Sections => "sections",
            StatuteCategory::Articles => "articles",
        }
    }
}

/// The three fixed statute buckets of a judgment record.
///
/// Each bucket is an ordered set: insertion order is preserved and duplicates
/// are rejected per bucket, never across buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatuteTable {
    /// Legal acts and laws (also the fallback bucket).
    #[serde(default)]
    pub acts: Vec<String>,
    /// Sections of a code or act.
    #[serde(default)]
    pub sections: Vec<String>,
    /// Constitutional or treaty articles.
    #[serde(default)]
    pub articles: Vec<String>,
}

impl StatuteTable {
    /// Read access to one bucket.
    pub fn bucket(&self, category: StatuteCategory) -> &[String] {
        match category {
            StatuteCategory::Acts => &self.acts,
            StatuteCategory::Sections => &self.sections,
            StatuteCategory::Articles => &self.articles,
        }
    }

    /// Total number of statutes across all buckets.
    pub fn len(&self) -> usize {
        self.acts.len() + self.sections.len() + self.articles.len()
    }

    /// True when every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.acts.is_empty() && self.sections.is_empty() && self.articles.is_empty()
    }

    pub(crate) fn bucket_mut(&mut self, category: StatuteCategory) -> &mut Vec<String> {
        match category {
            StatuteCategory::Acts => &mut self.acts,
            StatuteCategory::Sections => &mut self.sections,
            StatuteCategory::Articles => &mut self.articles,
        }
    }
}
