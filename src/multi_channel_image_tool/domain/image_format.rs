use std::path::Path;

const PNG: &str = "png";
pub const RECOGNIZED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", PNG];

/// Extension without the leading dot, case preserved. Accepts either a path
/// or a bare extension such as `".png"`.
pub fn extension_of(path_or_extension: &str) -> String {
    let trimmed = path_or_extension.trim();
    match Path::new(trimmed).extension() {
        Some(ext) => ext.to_string_lossy().into_owned(),
        None => trimmed.trim_start_matches('.').to_string(),
    }
}

/// Exact match against the recognized set; `.PNG` is not `.png`.
pub fn is_recognized_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RECOGNIZED_EXTENSIONS.contains(&ext))
}

/// Extension heuristic, not a content sniff: every `.png` counts as
/// alpha-capable, nothing else does.
pub fn has_alpha_channel(path_or_extension: &str) -> bool {
    extension_of(path_or_extension) == PNG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_accepts_paths_and_bare_extensions() {
        assert_eq!(extension_of("/images/photo.JPG"), "JPG");
        assert_eq!(extension_of(".png"), "png");
        assert_eq!(extension_of("png"), "png");
    }

    #[test]
    fn test_recognized_extensions() {
        assert!(is_recognized_extension(Path::new("a.png")));
        assert!(is_recognized_extension(Path::new("a.jpeg")));
        assert!(is_recognized_extension(Path::new("a.jpg")));
        assert!(!is_recognized_extension(Path::new("a.bmp")));
        assert!(!is_recognized_extension(Path::new("noextension")));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(!is_recognized_extension(Path::new("a.PNG")));
        assert!(!is_recognized_extension(Path::new("a.JPG")));
        assert!(!is_recognized_extension(Path::new("a.Jpeg")));
        assert!(!has_alpha_channel("a.PNG"));
        assert!(!has_alpha_channel(".Png"));
    }

    #[test]
    fn test_only_png_has_alpha() {
        assert!(has_alpha_channel("texture.png"));
        assert!(has_alpha_channel(".png"));
        assert!(!has_alpha_channel("photo.jpg"));
        assert!(!has_alpha_channel(".jpeg"));
        assert!(!has_alpha_channel(""));
    }
}
