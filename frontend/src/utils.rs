use std::borrow::Cow;

use crate::config::{IMAGE_CDN_BASE, PLACEHOLDER_IMAGE_URL};

/// Transform options understood by the image CDN.
///
/// Only the options that are present contribute to the URL; an empty
/// transform produces a plain `base/id` URL with no transform segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageTransform {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub crop: Option<String>,
    pub quality: Option<String>,
    pub format: Option<String>,
}

impl ImageTransform {
    /// Standard transform for product grid thumbnails.
    pub fn thumbnail() -> Self {
        Self {
            width: Some(480),
            height: Some(600),
            crop: Some("fill".to_string()),
            quality: Some("auto".to_string()),
            format: Some("auto".to_string()),
        }
    }

    /// Small square crop used for avatars.
    pub fn avatar() -> Self {
        Self {
            width: Some(96),
            height: Some(96),
            crop: Some("thumb".to_string()),
            quality: Some("auto".to_string()),
            format: None,
        }
    }

    // CDN option codes in their fixed order: w_, h_, c_, q_, f_.
    fn segment(&self) -> String {
        let mut parts = Vec::new();
        if let Some(width) = self.width {
            parts.push(format!("w_{width}"));
        }
        if let Some(height) = self.height {
            parts.push(format!("h_{height}"));
        }
        if let Some(crop) = self.crop.as_deref() {
            parts.push(format!("c_{crop}"));
        }
        if let Some(quality) = self.quality.as_deref() {
            parts.push(format!("q_{quality}"));
        }
        if let Some(format) = self.format.as_deref() {
            parts.push(format!("f_{format}"));
        }
        parts.join(",")
    }
}

/// Build a delivery URL for an image public id.
///
/// An absent or empty id yields the fixed placeholder. A full URL is reduced
/// to the path after its version segment (`vNNN/...`, extension stripped) so
/// that copy-pasted delivery URLs keep working; a full URL with no version
/// segment passes through untouched.
pub fn build_image_url(public_id: Option<&str>, transform: &ImageTransform) -> String {
    let id = match public_id.map(str::trim) {
        None | Some("") => return PLACEHOLDER_IMAGE_URL.to_string(),
        Some(id) => id,
    };

    let id: Cow<'_, str> = if id.contains("://") {
        match extract_versioned_id(id) {
            Some(name) => Cow::Owned(name),
            None => return id.to_string(),
        }
    } else {
        Cow::Borrowed(id)
    };

    let segment = transform.segment();
    if segment.is_empty() {
        format!("{IMAGE_CDN_BASE}/{id}")
    } else {
        format!("{IMAGE_CDN_BASE}/{segment}/{id}")
    }
}

/// Pull the public id out of a full delivery URL: everything after the first
/// `vNNN` path segment, minus the file extension.
fn extract_versioned_id(url: &str) -> Option<String> {
    let path = url.splitn(2, "://").nth(1)?;
    let mut segments = path.split('/');
    segments.find(|segment| is_version_segment(segment))?;

    let rest = segments.collect::<Vec<_>>().join("/");
    if rest.is_empty() {
        return None;
    }
    Some(strip_extension(&rest).to_string())
}

fn is_version_segment(segment: &str) -> bool {
    segment.len() > 1
        && segment.starts_with('v')
        && segment[1..].bytes().all(|b| b.is_ascii_digit())
}

fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        // Keep dotted directory names intact: only strip after the last slash.
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_yields_placeholder() {
        assert_eq!(build_image_url(None, &ImageTransform::default()), PLACEHOLDER_IMAGE_URL);
        assert_eq!(build_image_url(Some(""), &ImageTransform::default()), PLACEHOLDER_IMAGE_URL);
        assert_eq!(build_image_url(Some("  "), &ImageTransform::default()), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn bare_id_without_options_has_no_transform_segment() {
        assert_eq!(
            build_image_url(Some("abc123"), &ImageTransform::default()),
            format!("{IMAGE_CDN_BASE}/abc123")
        );
    }

    #[test]
    fn options_join_in_fixed_order() {
        let transform = ImageTransform {
            width: Some(200),
            crop: Some("fill".to_string()),
            ..ImageTransform::default()
        };
        assert_eq!(
            build_image_url(Some("abc123"), &transform),
            format!("{IMAGE_CDN_BASE}/w_200,c_fill/abc123")
        );

        let all = ImageTransform {
            width: Some(10),
            height: Some(20),
            crop: Some("fit".to_string()),
            quality: Some("80".to_string()),
            format: Some("webp".to_string()),
        };
        assert_eq!(
            build_image_url(Some("abc123"), &all),
            format!("{IMAGE_CDN_BASE}/w_10,h_20,c_fit,q_80,f_webp/abc123")
        );
    }

    #[test]
    fn full_url_with_version_segment_is_reduced_to_public_id() {
        assert_eq!(
            build_image_url(Some("https://host/v123/folder/name.jpg"), &ImageTransform::default()),
            format!("{IMAGE_CDN_BASE}/folder/name")
        );
    }

    #[test]
    fn full_url_without_version_segment_passes_through() {
        let url = "https://host/images/name.jpg";
        assert_eq!(build_image_url(Some(url), &ImageTransform::default()), url);
    }

    #[test]
    fn version_segment_requires_all_digits() {
        // "v1a" is a regular path segment, not a version marker.
        let url = "https://host/v1a/name.jpg";
        assert_eq!(build_image_url(Some(url), &ImageTransform::default()), url);
    }

    #[test]
    fn versioned_url_combines_with_transform() {
        let transform = ImageTransform {
            width: Some(480),
            ..ImageTransform::default()
        };
        assert_eq!(
            build_image_url(Some("https://host/v9/scents/noir.png"), &transform),
            format!("{IMAGE_CDN_BASE}/w_480/scents/noir")
        );
    }
}
