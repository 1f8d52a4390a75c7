//! Read-only artwork catalog.
//!
//! Loaded once from the embedded gallery JSON and never mutated afterwards.

use crate::config::MotionConfig;
use crate::error::{GalleryError, Result};
use fnv::FnvHashMap;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    PhysicalArt,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::PhysicalArt => "Physical Art",
        }
    }
}

/// Physical size in centimetres.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Dimensions {
    pub height: f32,
    pub width: f32,
    #[serde(default)]
    pub depth: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArtworkMetadata {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub dimensions: Dimensions,
    pub materials: Vec<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub print_available: bool,
    pub original_available: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub display_image: String,
    pub gallery_images: Vec<String>,
    pub metadata: ArtworkMetadata,
}

// Wire shape of one artwork in gallery.json
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    category: Category,
    images: Vec<String>,
    start_date: String,
    #[serde(default)]
    end_date: Option<String>,
    dimensions: Dimensions,
    #[serde(default)]
    materials: Vec<String>,
    #[serde(default)]
    is_print_available: Option<bool>,
    #[serde(default)]
    is_original_available: Option<bool>,
}

impl TryFrom<RawEntry> for CatalogEntry {
    type Error = GalleryError;

    fn try_from(raw: RawEntry) -> Result<Self> {
        let mut images = raw.images.into_iter();
        let display_image = images
            .next()
            .ok_or_else(|| GalleryError::MissingImage(raw.id.clone()))?;
        Ok(CatalogEntry {
            id: raw.id,
            display_image,
            gallery_images: images.collect(),
            metadata: ArtworkMetadata {
                title: raw.name,
                description: raw.description,
                category: raw.category,
                dimensions: raw.dimensions,
                materials: raw.materials,
                start_date: raw.start_date,
                end_date: raw.end_date,
                print_available: raw.is_print_available.unwrap_or(false),
                original_available: raw.is_original_available.unwrap_or(false),
            },
        })
    }
}

#[derive(Deserialize)]
struct RawGallery {
    #[serde(default)]
    motion: Option<MotionConfig>,
    projects: Vec<RawEntry>,
}

/// Ordered, immutable list of artworks with an id index.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_id: FnvHashMap<String, usize>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }
        let mut by_id = FnvHashMap::default();
        for (i, e) in entries.iter().enumerate() {
            if by_id.insert(e.id.clone(), i).is_some() {
                return Err(GalleryError::DuplicateId(e.id.clone()));
            }
        }
        Ok(Self { entries, by_id })
    }

    /// Parse a gallery document: `{ "motion": {...}?, "projects": [...] }`.
    pub fn from_json(json: &str) -> Result<(Self, MotionConfig)> {
        let raw: RawGallery = serde_json::from_str(json)?;
        let entries = raw
            .projects
            .into_iter()
            .map(CatalogEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        let motion = raw.motion.unwrap_or_default().sanitized();
        Ok((Self::new(entries)?, motion))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn display_images(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.display_image.as_str())
    }

    /// The artwork after `id`, wrapping from the last back to the first.
    pub fn next_after(&self, id: &str) -> Option<(usize, &CatalogEntry)> {
        let next = (self.index_of(id)? + 1) % self.entries.len();
        self.entries.get(next).map(|entry| (next, entry))
    }

    /// Detail panel content for the artwork at `index`.
    pub fn detail(&self, index: usize) -> Option<DetailContent<'_>> {
        let entry = self.get(index)?;
        let (_, next) = self.next_after(&entry.id)?;
        Some(DetailContent { entry, next })
    }
}

/// What the detail panel shows: the viewed artwork and a teaser for the one
/// after it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetailContent<'a> {
    pub entry: &'a CatalogEntry,
    pub next: &'a CatalogEntry,
}

impl DetailContent<'_> {
    pub fn next_title(&self) -> &str {
        &self.next.metadata.title
    }

    /// Dimensions, materials, dates and availability, one item per line.
    pub fn meta_lines(&self) -> [String; 4] {
        let meta = &self.entry.metadata;
        [
            meta.dimensions.label(),
            meta.materials.join(", "),
            meta.date_label(),
            meta.availability_label().to_string(),
        ]
    }
}

impl CatalogEntry {
    /// Images shown in the detail view: the display image, then the gallery.
    pub fn detail_images(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.display_image.as_str())
            .chain(self.gallery_images.iter().map(String::as_str))
    }
}

// ---------------- Presentation helpers ----------------

/// `"01 / 03"` style position label.
pub fn counter_label(index: usize, count: usize) -> String {
    format!("{:02} / {:02}", index + 1, count)
}

fn format_cm(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

impl Dimensions {
    /// `"29 × 21 cm"`, or `"29 × 21 × 4 cm"` with a depth.
    pub fn label(&self) -> String {
        match self.depth {
            Some(d) => format!(
                "{} × {} × {} cm",
                format_cm(self.height),
                format_cm(self.width),
                format_cm(d)
            ),
            None => format!("{} × {} cm", format_cm(self.height), format_cm(self.width)),
        }
    }
}

fn year_of(date: &str) -> &str {
    date.split('-').next().unwrap_or(date)
}

impl ArtworkMetadata {
    /// Creation years, collapsed to one year when start and end agree.
    pub fn date_label(&self) -> String {
        let start = year_of(&self.start_date);
        match self.end_date.as_deref().map(year_of) {
            Some(end) if end != start => format!("{start} – {end}"),
            _ => start.to_string(),
        }
    }

    pub fn availability_label(&self) -> &'static str {
        match (self.original_available, self.print_available) {
            (true, true) => "Original and prints available",
            (true, false) => "Original available",
            (false, true) => "Prints available",
            (false, false) => "Not available",
        }
    }
}
