//! Filename classification for file-listing UIs. A pure
//! extension-to-category mapping; the rendering core never consults it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Model3d,
    Text,
    Pdf,
    Gerber,
    Unknown,
}

/// Extension patterns tried in order; the first match wins. Gerber comes
/// before the generic buckets so `.drl`/`.cmp` never fall through to text.
static PATTERNS: Lazy<Vec<(FileCategory, Regex)>> = Lazy::new(|| {
    vec![
        (
            FileCategory::Gerber,
            Regex::new(r"(?i)\.(gbr|gbl|gbs|gto|gtp|gts|gbp|drl|cmp|gtl|gko)$").unwrap(),
        ),
        (
            FileCategory::Image,
            Regex::new(r"(?i)\.(jpg|jpeg|png|gif|bmp|webp)$").unwrap(),
        ),
        (
            FileCategory::Video,
            Regex::new(r"(?i)\.(mp4|webm|ogv)$").unwrap(),
        ),
        (
            FileCategory::Audio,
            Regex::new(r"(?i)\.(mp3|wav|ogg)$").unwrap(),
        ),
        (
            FileCategory::Model3d,
            Regex::new(r"(?i)\.(obj|stl|gltf|glb|3ds|fbx)$").unwrap(),
        ),
        (
            FileCategory::Text,
            Regex::new(r"(?i)\.(txt|md|json|xml|csv|html|css|js|ini)$").unwrap(),
        ),
        (FileCategory::Pdf, Regex::new(r"(?i)\.pdf$").unwrap()),
    ]
});

/// Classify a file by name. Unrecognized extensions (and names without an
/// extension) map to `Unknown`.
pub fn classify(file_name: &str) -> FileCategory {
    for (category, pattern) in PATTERNS.iter() {
        if pattern.is_match(file_name) {
            return *category;
        }
    }
    FileCategory::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gerber_extensions_classify_as_gerber() {
        for name in [
            "board.GTL",
            "board.gbl",
            "board.DRL",
            "board.gko",
            "layer.gbr",
        ] {
            assert_eq!(classify(name), FileCategory::Gerber, "{}", name);
        }
    }

    #[test]
    fn common_categories() {
        assert_eq!(classify("photo.JPG"), FileCategory::Image);
        assert_eq!(classify("clip.mp4"), FileCategory::Video);
        assert_eq!(classify("track.wav"), FileCategory::Audio);
        assert_eq!(classify("case.stl"), FileCategory::Model3d);
        assert_eq!(classify("board_info.txt"), FileCategory::Text);
        assert_eq!(classify("datasheet.pdf"), FileCategory::Pdf);
    }

    #[test]
    fn unknown_extension_and_missing_extension() {
        assert_eq!(classify("firmware.bin"), FileCategory::Unknown);
        assert_eq!(classify("README"), FileCategory::Unknown);
        assert_eq!(classify(""), FileCategory::Unknown);
    }
}
