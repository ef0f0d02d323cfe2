/// Build a IIIF image URL: `{base}/{image_id}/full/{size},/0/default.jpg`.
///
/// Returns `None` (and logs a warning) when there is no image id. `size` is
/// substituted verbatim; callers are expected to pass one of
/// [`ImageSize::ALLOWED`](crate::domain::model::ImageSize::ALLOWED).
pub fn get_image_url(base: &str, image_id: Option<&str>, size: &str) -> Option<String> {
    let image_id = match image_id {
        Some(id) if !id.is_empty() => id,
        _ => {
            tracing::warn!("No image_id provided to get_image_url");
            return None;
        }
    };

    let url = format!(
        "{}/{}/full/{},/0/default.jpg",
        base.trim_end_matches('/'),
        image_id,
        size
    );
    tracing::debug!("Generated image URL: {}", url);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ImageSize, DEFAULT_IMAGE_SIZE};

    const BASE: &str = "https://www.artic.edu/iiif/2";
    const IMAGE: &str = "b272df73-a965-ac37-4172-be4e99483637";

    #[test]
    fn test_default_size_url() {
        assert_eq!(
            get_image_url(BASE, Some(IMAGE), DEFAULT_IMAGE_SIZE).as_deref(),
            Some("https://www.artic.edu/iiif/2/b272df73-a965-ac37-4172-be4e99483637/full/843,/0/default.jpg")
        );
    }

    #[test]
    fn test_same_inputs_same_url() {
        for size in ImageSize::ALLOWED {
            let first = get_image_url(BASE, Some(IMAGE), size);
            let second = get_image_url(BASE, Some(IMAGE), size);
            assert!(first.is_some());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_missing_image_id_yields_none() {
        for size in ImageSize::ALLOWED.iter().chain(["bogus", ""].iter()) {
            assert_eq!(get_image_url(BASE, None, size), None);
            assert_eq!(get_image_url(BASE, Some(""), size), None);
        }
    }

    #[test]
    fn test_size_is_not_validated() {
        assert_eq!(
            get_image_url(BASE, Some("abc"), "pct:50").as_deref(),
            Some("https://www.artic.edu/iiif/2/abc/full/pct:50,/0/default.jpg")
        );
        assert_eq!(
            get_image_url("http://localhost/iiif/", Some("abc"), ImageSize::FULL).as_deref(),
            Some("http://localhost/iiif/abc/full/full,/0/default.jpg")
        );
    }
}
