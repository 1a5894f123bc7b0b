use std::collections::HashMap;
use std::io;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::post::Post;
use crate::slug::slugify;

/// The full loaded set, keyed by slug. Slug uniqueness is enforced here:
/// two documents claiming the same slug fail the build.
#[derive(Debug)]
pub struct PostStore {
    posts: HashMap<String, Post>,
    pub post_file_name: String,
}

impl PostStore {
    pub fn new(post_file_name: &str) -> PostStore {
        PostStore {
            posts: Default::default(),
            post_file_name: post_file_name.to_string(),
        }
    }

    /// Derives the fallback slug from file identity: the directory name for
    /// directory posts, the file stem for flat posts.
    pub fn slug_from_path(&self, path: &PathBuf) -> io::Result<String> {
        let post_type = if let Some(file_name) = path.file_name().and_then(|f| f.to_str()) {
            match file_name {
                x if x == self.post_file_name => 'D',
                x if x.ends_with(".md") => 'F',
                _ => return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post file - file={}", path.display()))),
            }
        } else {
            return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post path - file={}", path.display())));
        };

        let identity = if post_type == 'D' {
            // post_type = D means it's a directory with files inside
            let p = path.parent().ok_or(io::Error::new(ErrorKind::InvalidInput, format!("Could not find post directory - file={}", path.display())))?;
            match p.file_name().and_then(|f| f.to_str()) {
                Some(last_dir) => last_dir.to_string(),
                None => return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post directory - file={}", path.display()))),
            }
        } else {
            // Post type = F means it's a file in the posts directory
            match path.file_stem().and_then(|f| f.to_str()) {
                Some(stem) => stem.to_string(),
                None => return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post file name - file={}", path.display()))),
            }
        };

        Ok(slugify(&identity))
    }

    pub fn add(&mut self, post: Post) -> io::Result<()> {
        if let Some(existing) = self.posts.get(&post.slug) {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Duplicate slug '{}' - files {} and {}",
                        post.slug, existing.file_name.display(), post.file_name.display())));
        }

        self.posts.insert(post.slug.clone(), post);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.get(slug)
    }

    /// Publication order: most recent first, with slug as tie-break so equal
    /// dates never shuffle between builds.
    pub fn sorted(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.values().collect();
        posts.sort_by(|a, b| {
            b.published_at.cmp(&a.published_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        posts
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn make_post(slug: &str, published_at: chrono::DateTime<Utc>) -> Post {
        Post {
            file_name: PathBuf::from(format!("posts/{}.md", slug)),
            slug: slug.to_string(),
            title: format!("Post {}", slug),
            author: "thiago".to_string(),
            published_at,
            modified_at: None,
            featured: false,
            draft: false,
            tags: vec![],
            description: "".to_string(),
            og_image: None,
        }
    }

    #[test]
    fn test_slug_from_path() {
        let store = PostStore::new("index.md");
        let dir_post = PathBuf::from("posts/20200522_How_to_Write_a_Code_Review/index.md");
        assert_eq!(store.slug_from_path(&dir_post).unwrap(), "20200522-how-to-write-a-code-review");

        let flat_post = PathBuf::from("posts/my_first_post.md");
        assert_eq!(store.slug_from_path(&flat_post).unwrap(), "my-first-post");

        let not_a_post = PathBuf::from("posts/readme.txt");
        assert!(store.slug_from_path(&not_a_post).is_err());
    }

    #[test]
    fn test_duplicate_slug_is_fatal() {
        let mut store = PostStore::new("index.md");
        let date = Utc.with_ymd_and_hms(2022, 4, 2, 12, 5, 0).unwrap();
        store.add(make_post("same-slug", date)).unwrap();

        let err = store.add(make_post("same-slug", date)).unwrap_err();
        assert!(err.to_string().contains("Duplicate slug 'same-slug'"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sorted_is_date_desc_then_slug_asc() {
        let mut store = PostStore::new("index.md");
        let older = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        store.add(make_post("banana", older)).unwrap();
        store.add(make_post("cherry", newer)).unwrap();
        store.add(make_post("apple", newer)).unwrap();

        let slugs: Vec<&str> = store.sorted().iter().map(|p| p.slug.as_str()).collect();
        // Equal dates fall back to lexicographic slug order
        assert_eq!(slugs, ["apple", "cherry", "banana"]);
    }
}
