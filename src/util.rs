use base64::Engine;

/// Strip path components and unsafe characters from an uploaded filename.
/// Keeps ASCII alphanumerics, `.`, `-` and `_`; spaces become underscores.
pub fn sanitize_filename(name: &str) -> String {
    let last = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);

    let cleaned: String = last
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => Some(c),
            ' ' => Some('_'),
            _ => None,
        })
        .collect();

    cleaned.trim_matches('.').to_string()
}

/// Derive an image MIME type from a filename extension.
/// Falls back to `image/png` when there is no extension.
pub fn mime_from_filename(name: &str) -> String {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "png".to_string());
    format!("image/{ext}")
}

/// Encode raw bytes as a self-contained `data:` URL.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{b64}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_paths() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\logo.png"), "logo.png");
    }

    #[test]
    fn test_sanitize_keeps_safe_chars() {
        assert_eq!(sanitize_filename("my logo (v2).png"), "my_logo_v2.png");
        assert_eq!(sanitize_filename("hero-image_01.jpeg"), "hero-image_01.jpeg");
    }

    #[test]
    fn test_sanitize_hidden_file() {
        assert_eq!(sanitize_filename(".hidden"), "hidden");
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_filename("logo.PNG"), "image/png");
        assert_eq!(mime_from_filename("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_from_filename("noext"), "image/png");
        assert_eq!(mime_from_filename("trailing."), "image/png");
    }

    #[test]
    fn test_data_url_shape() {
        let url = data_url("image/png", b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }
}
