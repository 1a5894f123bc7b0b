use serde::Serialize;

use crate::post::Post;

/// Resolved social-preview image for one post. Serialized into the manifest
/// so the render side knows whether to copy a file, invoke the image
/// generator, or reuse the site default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ImageDescriptor {
    /// Authorial override from front matter, used verbatim.
    Explicit { path: String },
    /// Derived from title + slug. Same inputs, same descriptor: the
    /// generator's output is cached across builds on this path.
    Generated { path: String, title: String, slug: String },
    /// Site-wide fallback image.
    Default { path: String },
}

impl ImageDescriptor {
    pub fn path(&self) -> &str {
        match self {
            ImageDescriptor::Explicit { path } => path,
            ImageDescriptor::Generated { path, .. } => path,
            ImageDescriptor::Default { path } => path,
        }
    }
}

/// Picks the preview image for a post. Visibility plays no part here: a
/// scheduled post reached through a direct permalink still needs an image.
pub fn describe_image(post: &Post, default_image: &str, dynamic_og_images: bool) -> ImageDescriptor {
    if let Some(ref og_image) = post.og_image {
        return ImageDescriptor::Explicit { path: og_image.clone() };
    }

    if dynamic_og_images && !post.slug.is_empty() {
        return ImageDescriptor::Generated {
            path: format!("og/{}.png", post.slug),
            title: post.title.clone(),
            slug: post.slug.clone(),
        };
    }

    ImageDescriptor::Default { path: default_image.to_string() }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use super::*;

    fn make_post(slug: &str, og_image: Option<&str>) -> Post {
        Post {
            file_name: PathBuf::from(format!("posts/{}.md", slug)),
            slug: slug.to_string(),
            title: format!("Post {}", slug),
            author: "thiago".to_string(),
            published_at: Utc.with_ymd_and_hms(2022, 4, 2, 12, 5, 0).unwrap(),
            modified_at: None,
            featured: false,
            draft: false,
            tags: vec![],
            description: "".to_string(),
            og_image: og_image.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_explicit_override_wins() {
        let post = make_post("my-post", Some("custom.png"));
        // Override wins no matter the dynamic toggle
        assert_eq!(describe_image(&post, "default.png", true),
                   ImageDescriptor::Explicit { path: "custom.png".to_string() });
        assert_eq!(describe_image(&post, "default.png", false),
                   ImageDescriptor::Explicit { path: "custom.png".to_string() });
    }

    #[test]
    fn test_generated_is_deterministic() {
        let post = make_post("my-post", None);
        let first = describe_image(&post, "default.png", true);
        let second = describe_image(&post, "default.png", true);
        assert_eq!(first, second);
        assert_eq!(first.path(), "og/my-post.png");
    }

    #[test]
    fn test_default_when_dynamic_disabled() {
        let post = make_post("my-post", None);
        assert_eq!(describe_image(&post, "default.png", false),
                   ImageDescriptor::Default { path: "default.png".to_string() });
    }

    #[test]
    fn test_degenerate_slug_falls_back_to_default() {
        let mut post = make_post("my-post", None);
        post.slug = "".to_string();
        assert_eq!(describe_image(&post, "default.png", true),
                   ImageDescriptor::Default { path: "default.png".to_string() });
    }
}
