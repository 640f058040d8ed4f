/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the data source and the UI layer. Items are immutable once loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single design in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    /// Unique identifier within a browsing session
    pub id: String,
    /// Full-resolution image locator (path or URL)
    pub image_url: String,
    /// Thumbnail locator
    pub thumbnail_url: String,
    pub title: String,
    pub artist: String,
    /// Style tag (e.g., "Japanese")
    pub style: String,
    /// Body-part tag (e.g., "Arm")
    pub body_part: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub is_ai_enhanced: bool,
    #[serde(default)]
    pub process_steps: Vec<ProcessStep>,
    pub metadata: ImageMetadata,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub views: u32,
    /// Creation date, serialized as `YYYY-MM-DD`
    pub created_at: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One step of the design process shown in the modal's "Process" tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Technical metadata attached to every design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub dimensions: Dimensions,
    /// File size in bytes
    pub file_size: u64,
    /// Processing duration in seconds
    #[serde(default)]
    pub process_time: Option<u32>,
    #[serde(default)]
    pub ai_model: Option<String>,
    #[serde(default)]
    pub prompts: Option<Vec<String>>,
}

impl GalleryItem {
    /// Text the search query is matched against:
    /// title, artist, style and all tags, space-joined.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.artist,
            self.style,
            self.tags.join(" ")
        )
    }
}

/// Format a byte count for display (e.g., "1.95 MB")
pub fn format_file_size(bytes: u64) -> String {
    const SIZES: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let i = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let i = i.min(SIZES.len() - 1);
    let value = bytes as f64 / 1024f64.powi(i as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, SIZES[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(512_000), "500 KB");
        assert_eq!(format_file_size(2_048_000), "1.95 MB");
    }

    #[test]
    fn test_deserialize_camel_case_item() {
        let json = r#"{
            "id": "1",
            "imageUrl": "/a.png",
            "thumbnailUrl": "/a_thumb.png",
            "title": "Dragon Sleeve Design",
            "artist": "Sarah Johnson",
            "style": "Japanese",
            "bodyPart": "Arm",
            "colors": ["black", "red"],
            "isAiEnhanced": true,
            "metadata": {
                "dimensions": { "width": 1024, "height": 1536 },
                "fileSize": 2048000,
                "aiModel": "InkAI-Pro-v2"
            },
            "likes": 342,
            "views": 1250,
            "createdAt": "2024-01-15",
            "tags": ["dragon", "sleeve"]
        }"#;

        let item: GalleryItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.body_part, "Arm");
        assert!(item.is_ai_enhanced);
        assert!(item.process_steps.is_empty());
        assert_eq!(item.metadata.ai_model.as_deref(), Some("InkAI-Pro-v2"));
        assert_eq!(item.created_at, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(
            item.searchable_text(),
            "Dragon Sleeve Design Sarah Johnson Japanese dragon sleeve"
        );
    }
}
