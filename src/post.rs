use fmt::Display;
use std::fmt::Formatter;
use std::{fmt, fs, io};
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::slug::is_valid_slug;
use crate::util::toml_date::TomlDateTime;

#[derive(Debug, Clone)]
pub struct Post {
    pub file_name: PathBuf,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub featured: bool,
    pub draft: bool,
    pub tags: Vec<String>,
    pub description: String,
    pub og_image: Option<String>,
}

#[derive(Deserialize)]
struct FrontMatter {
    title: String,
    author: Option<String>,
    published_at: TomlDateTime,
    modified_at: Option<TomlDateTime>,
    #[serde(default)]
    draft: bool,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    description: String,
    og_image: Option<String>,
    slug: Option<String>,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, published_at={}, author={}\ntitle={}",
               self.slug,
               self.published_at,
               self.author,
               self.title,
        )
    }
}

/// Example of post
/// +++
/// title = "What I learned after 20+ years of software development"
/// author = "thiago"
/// published_at = 2022-04-02T12:05:00Z
/// tags = ["career", "software"]
/// +++
///
/// Post body in markdown...
impl Post {
    pub fn from(file_name: &PathBuf, fallback_slug: &str, default_author: &str) -> io::Result<Post> {
        let raw = fs::read_to_string(file_name)?;

        Self::from_string(file_name, &raw, fallback_slug, default_author)
    }

    pub fn from_string(file_name: &PathBuf, content: &str, fallback_slug: &str, default_author: &str) -> io::Result<Post> {
        let front_src = extract_front_matter(file_name, content)?;

        let front: FrontMatter = match toml::from_str(&front_src) {
            Ok(front) => front,
            Err(e) => return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Invalid front matter: {} - file={}", e, file_name.display()))),
        };

        let title = front.title.trim().to_string();
        if title.is_empty() {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Post title is empty - file={}", file_name.display())));
        }

        let slug = match front.slug {
            Some(slug) => {
                if !is_valid_slug(&slug) {
                    return Err(io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Invalid slug '{}' - file={}", slug, file_name.display())));
                }
                slug
            }
            None => {
                if !is_valid_slug(fallback_slug) {
                    return Err(io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Could not derive a slug from the file name - file={}", file_name.display())));
                }
                fallback_slug.to_string()
            }
        };

        let author = match front.author {
            Some(author) => author,
            None => default_author.to_string(),
        };

        // Authorial override only counts when non-empty
        let og_image = front.og_image.filter(|path| !path.is_empty());

        Ok(Post {
            file_name: file_name.clone(),
            slug,
            title,
            author,
            published_at: front.published_at.0,
            modified_at: front.modified_at.map(|d| d.0),
            featured: front.featured,
            draft: front.draft,
            tags: dedupe_tags(front.tags),
            description: front.description,
            og_image,
        })
    }
}

/// The front matter is the block between two `+++` fence lines at the top
/// of the file. Leading blank lines are ok; anything else before the fence
/// is not.
fn extract_front_matter(file_name: &PathBuf, content: &str) -> io::Result<String> {
    let mut lines = content.lines();
    let mut maybe_line = lines.next();

    loop {
        if let Some(line) = maybe_line {
            // Empty lines are ok
            if line.trim().is_empty() {
                maybe_line = lines.next();
                continue;
            }
            break;
        } else {
            break;
        }
    }

    match maybe_line {
        Some(line) if line.trim() == "+++" => {}
        _ => return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("Missing front matter fence - file={}", file_name.display()))),
    }

    let mut front = String::new();
    loop {
        match lines.next() {
            Some(line) if line.trim() == "+++" => return Ok(front),
            Some(line) => {
                front.push_str(line);
                front.push('\n');
            }
            None => return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("End of front matter fence is missing - file={}", file_name.display()))),
        }
    }
}

// Insertion order is what the reader sees; duplicates only matter for
// filtering, so the first occurrence wins.
fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
    let mut deduped: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !deduped.contains(&tag) {
            deduped.push(tag);
        }
    }
    deduped
}
