/// Gallery data source and the available-options catalog
///
/// The gallery treats the source as a black box that hands out pages of
/// items. `MockSource` serves an in-memory dataset (generated, or loaded
/// from JSON catalog files) after a simulated network latency.

use chrono::{Duration as DateDuration, NaiveDate};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use walkdir::WalkDir;

use super::data::{Dimensions, GalleryItem, ImageMetadata, ProcessStep};
use super::filter::FilterState;
use crate::error::{FetchError, Result};

/// One page of results from the data source
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<GalleryItem>,
    pub has_next_page: bool,
    pub total_count: usize,
}

/// Values offered by the filter sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableOptions {
    pub styles: Vec<String>,
    pub body_parts: Vec<String>,
    pub colors: Vec<String>,
    pub artists: Vec<String>,
}

impl Default for AvailableOptions {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            styles: owned(STYLES),
            body_parts: owned(BODY_PARTS),
            colors: owned(COLORS),
            artists: owned(ARTISTS),
        }
    }
}

impl AvailableOptions {
    /// Collect the distinct values present in `items`, in first-seen order
    pub fn from_items(items: &[GalleryItem]) -> Self {
        fn push_unique(values: &mut Vec<String>, value: &str) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }

        let mut options = Self {
            styles: Vec::new(),
            body_parts: Vec::new(),
            colors: Vec::new(),
            artists: Vec::new(),
        };
        for item in items {
            push_unique(&mut options.styles, &item.style);
            push_unique(&mut options.body_parts, &item.body_part);
            push_unique(&mut options.artists, &item.artist);
            for color in &item.colors {
                push_unique(&mut options.colors, color);
            }
        }
        options
    }
}

const STYLES: &[&str] = &["Japanese", "Traditional", "Minimalist", "Realistic", "Abstract"];
const BODY_PARTS: &[&str] = &["Arm", "Leg", "Back", "Chest", "Wrist", "Ankle"];
const COLORS: &[&str] = &["black", "red", "blue", "green", "gold", "purple"];
const ARTISTS: &[&str] = &["Sarah Johnson", "Mike Chen", "Alex Rivera", "Emma Davis"];
const SUBJECTS: &[&str] = &["Dragon", "Rose", "Koi", "Skull", "Phoenix", "Wave", "Tiger", "Lotus"];

/// Paginated, asynchronous source over an in-memory dataset
#[derive(Debug, Clone)]
pub struct MockSource {
    items: Arc<Vec<GalleryItem>>,
    page_size: usize,
    latency: Duration,
    unavailable: bool,
}

impl MockSource {
    pub fn new(items: Vec<GalleryItem>, page_size: usize, latency: Duration) -> Self {
        Self {
            items: Arc::new(items),
            page_size: page_size.max(1),
            latency,
            unavailable: false,
        }
    }

    /// A source whose every fetch fails
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new(Vec::new(), 1, Duration::ZERO)
        }
    }

    /// Fetch `page` (1-based). Filtering happens client-side, so `filters`
    /// only identifies the request in the logs.
    pub async fn fetch_page(self, filters: FilterState, page: u32) -> std::result::Result<Page, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.unavailable {
            return Err(FetchError::Unavailable);
        }

        let total_count = self.items.len();
        let start = (page.saturating_sub(1) as usize).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(total_count);
        let items = if start < total_count {
            self.items[start..end].to_vec()
        } else {
            Vec::new()
        };

        tracing::debug!(
            page,
            returned = items.len(),
            total_count,
            search = %filters.search_query,
            "page served"
        );

        Ok(Page {
            items,
            has_next_page: end < total_count,
            total_count,
        })
    }
}

/// A plain item with neutral values, for building datasets and tests
pub fn sample_item(id: &str) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        image_url: String::new(),
        thumbnail_url: String::new(),
        title: format!("Design {}", id),
        artist: ARTISTS[0].to_string(),
        style: STYLES[0].to_string(),
        body_part: BODY_PARTS[0].to_string(),
        colors: vec![COLORS[0].to_string()],
        is_ai_enhanced: false,
        process_steps: Vec::new(),
        metadata: ImageMetadata {
            dimensions: Dimensions {
                width: 512,
                height: 768,
            },
            file_size: 512_000,
            process_time: None,
            ai_model: None,
            prompts: None,
        },
        likes: 0,
        views: 0,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        tags: Vec::new(),
    }
}

/// Deterministic mock dataset of `count` designs
pub fn mock_items(count: usize) -> Vec<GalleryItem> {
    let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

    (0..count)
        .map(|i| {
            let subject = SUBJECTS[i % SUBJECTS.len()];
            let style = STYLES[i % STYLES.len()];
            let body_part = BODY_PARTS[(i * 7 + 1) % BODY_PARTS.len()];
            let artist = ARTISTS[(i / 2) % ARTISTS.len()];
            let is_ai_enhanced = i % 3 != 1;

            let mut item = sample_item(&(i + 1).to_string());
            item.title = format!("{} {} Design", style, subject);
            item.artist = artist.to_string();
            item.style = style.to_string();
            item.body_part = body_part.to_string();
            item.colors = vec![
                COLORS[0].to_string(),
                COLORS[(i % (COLORS.len() - 1)) + 1].to_string(),
            ];
            item.is_ai_enhanced = is_ai_enhanced;
            item.likes = ((i * 137 + 61) % 500) as u32;
            item.views = ((i * 311 + 420) % 3000) as u32;
            item.created_at = epoch + DateDuration::days(((i * 11) % 365) as i64);
            item.tags = vec![
                subject.to_lowercase(),
                style.to_lowercase(),
                body_part.to_lowercase(),
            ];
            item.process_steps = vec![ProcessStep {
                id: "1".to_string(),
                name: "Initial Sketch".to_string(),
                description: "Hand-drawn concept".to_string(),
                image_url: None,
            }];
            if is_ai_enhanced {
                item.process_steps.push(ProcessStep {
                    id: "2".to_string(),
                    name: "AI Enhancement".to_string(),
                    description: "Added details and shading".to_string(),
                    image_url: None,
                });
                item.metadata.ai_model = Some("InkAI-Pro-v2".to_string());
                item.metadata.process_time = Some(30 + (i % 40) as u32);
                item.metadata.prompts = Some(vec![
                    format!("{} {}", style.to_lowercase(), subject.to_lowercase()),
                    "detailed shading".to_string(),
                ]);
            }
            item.metadata.dimensions = Dimensions {
                width: 1024,
                height: 1536,
            };
            item.metadata.file_size = 400_000 + (i as u64 * 52_321) % 2_000_000;
            item
        })
        .collect()
}

/// Read a JSON catalog file: an array of items.
/// Relative image locators are resolved against the file's directory.
pub fn load_catalog_file(path: &Path) -> Result<Vec<GalleryItem>> {
    let content = std::fs::read_to_string(path)?;
    let mut items: Vec<GalleryItem> = serde_json::from_str(&content)?;

    if let Some(base) = path.parent() {
        for item in &mut items {
            item.image_url = resolve(base, &item.image_url);
            item.thumbnail_url = resolve(base, &item.thumbnail_url);
        }
    }

    tracing::info!(path = %path.display(), count = items.len(), "📚 catalog loaded");
    Ok(items)
}

/// Load every `*.json` catalog under `folder`, recursively.
/// Files that fail to parse are skipped with a warning; later duplicates
/// of an id are dropped so identifiers stay unique.
pub fn load_catalog_dir(folder: &Path) -> Vec<GalleryItem> {
    let mut items: Vec<GalleryItem> = Vec::new();

    for entry in WalkDir::new(folder)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_json = path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            continue;
        }

        match load_catalog_file(path) {
            Ok(loaded) => {
                for item in loaded {
                    if items.iter().any(|existing| existing.id == item.id) {
                        tracing::warn!(id = %item.id, "duplicate item id skipped");
                        continue;
                    }
                    items.push(item);
                }
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "⚠️  catalog skipped"),
        }
    }

    items
}

fn resolve(base: &Path, locator: &str) -> String {
    if locator.is_empty() || locator.contains("://") || Path::new(locator).is_absolute() {
        return locator.to_string();
    }
    base.join(locator).to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[test]
    fn test_mock_items_have_unique_ids() {
        let items = mock_items(50);
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_mock_items_draw_from_catalog() {
        let options = AvailableOptions::default();
        for item in mock_items(40) {
            assert!(options.styles.contains(&item.style));
            assert!(options.body_parts.contains(&item.body_part));
            assert!(options.artists.contains(&item.artist));
            assert!(item.colors.iter().all(|c| options.colors.contains(c)));
        }
    }

    #[tokio::test]
    async fn test_fetch_pages() {
        let source = MockSource::new(mock_items(25), 10, Duration::ZERO);

        let first = source.clone().fetch_page(FilterState::default(), 1).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert!(first.has_next_page);
        assert_eq!(first.total_count, 25);
        assert_eq!(first.items[0].id, "1");

        let last = source.clone().fetch_page(FilterState::default(), 3).await.unwrap();
        assert_eq!(last.items.len(), 5);
        assert!(!last.has_next_page);

        let beyond = source.fetch_page(FilterState::default(), 9).await.unwrap();
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_next_page);
    }

    #[tokio::test]
    async fn test_unavailable_source_fails() {
        let result = MockSource::unavailable()
            .fetch_page(FilterState::default(), 1)
            .await;
        assert_eq!(result, Err(FetchError::Unavailable));
    }

    #[test]
    fn test_options_from_items() {
        let mut a = sample_item("a");
        a.colors = vec!["red".into(), "black".into()];
        let mut b = sample_item("b");
        b.style = "Abstract".into();
        b.colors = vec!["black".into()];

        let options = AvailableOptions::from_items(&[a, b]);
        assert_eq!(options.styles, vec!["Japanese", "Abstract"]);
        assert_eq!(options.colors, vec!["red", "black"]);
        assert_eq!(options.artists.len(), 1);
    }

    #[test]
    fn test_load_catalog_dir_resolves_and_dedupes() {
        let dir = tempdir().unwrap();
        let mut item = sample_item("1");
        item.thumbnail_url = "thumbs/1.png".into();
        item.image_url = "https://example.com/1.png".into();

        let json = serde_json::to_string(&vec![item.clone()]).unwrap();
        std::fs::write(dir.path().join("a.json"), &json).unwrap();
        std::fs::create_dir(dir.path().join("more")).unwrap();
        std::fs::write(dir.path().join("more").join("b.json"), &json).unwrap();
        std::fs::write(dir.path().join("broken.json"), "[{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let items = load_catalog_dir(dir.path());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].image_url, "https://example.com/1.png");
        assert_eq!(
            Path::new(&items[0].thumbnail_url),
            dir.path().join("thumbs/1.png")
        );
    }
}
