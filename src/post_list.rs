use std::{fs, io};
use std::path::{Path, PathBuf};

/// Finds the documents that yield one post each: flat `*.md` files in the
/// posts directory plus directories containing the configured post file
/// (posts that carry their own images).
pub struct PostList {
    pub root_dir: PathBuf,
    pub post_file: String,
}

impl PostList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(file_name) = file_name.to_str() {
                if file_name == self.post_file {
                    // A bare index.md here has no directory to name it
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("{} belongs inside its own post directory - file={}",
                                self.post_file, entry.path().display())));
                }
                if file_name.ends_with(".md") {
                    posts.push(entry.path());
                }
            }
        }
        // read_dir order is platform-dependent; keep error reporting stable
        posts.sort();
        Ok(posts)
    }

    pub fn retrieve_dirs(&self) -> io::Result<Vec<(PathBuf, String)>> {
        // Per directory, we should have a file called index.md
        let dirs = Self::list_dirs(self.root_dir.as_path())?;
        let mut post_dirs = vec![];
        for dir in dirs {
            if let Some(file_name) = Self::contains_file(&dir, &self.post_file)? {
                post_dirs.push((dir, file_name));
            }
        }
        post_dirs.sort();
        Ok(post_dirs)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        let entries = fs::read_dir(posts_dir)?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        Ok(dirs)
    }

    fn contains_file(dir: &PathBuf, base_name: &str) -> io::Result<Option<String>> {
        let entries = fs::read_dir(dir)?;
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if file_name == base_name {
                        return Ok(Some(file_name.to_string()));
                    }
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, File};
    use std::io::Write;

    use super::*;

    fn touch(path: &Path) {
        let mut file = File::create(path).unwrap();
        file.write_all(b"+++\n+++\n").unwrap();
    }

    #[test]
    fn test_retrieve_files_and_dirs() -> io::Result<()> {
        let root_dir = std::env::temp_dir().join("pressroom-post-list-test");
        let _ = fs::remove_dir_all(&root_dir);
        create_dir_all(root_dir.join("first-post"))?;
        create_dir_all(root_dir.join("no-post-here"))?;
        touch(&root_dir.join("first-post/index.md"));
        touch(&root_dir.join("no-post-here/notes.txt"));
        touch(&root_dir.join("flat-post.md"));
        touch(&root_dir.join("ignored.html"));

        let post_list = PostList {
            root_dir: root_dir.clone(),
            post_file: "index.md".to_string(),
        };

        let files = post_list.retrieve_files()?;
        assert_eq!(files, vec![root_dir.join("flat-post.md")]);

        let dirs = post_list.retrieve_dirs()?;
        assert_eq!(dirs, vec![(root_dir.join("first-post"), "index.md".to_string())]);

        fs::remove_dir_all(&root_dir)?;
        Ok(())
    }

    #[test]
    fn test_root_level_index_md_is_rejected() -> io::Result<()> {
        let root_dir = std::env::temp_dir().join("pressroom-root-index-test");
        let _ = fs::remove_dir_all(&root_dir);
        create_dir_all(&root_dir)?;
        touch(&root_dir.join("index.md"));

        let post_list = PostList {
            root_dir: root_dir.clone(),
            post_file: "index.md".to_string(),
        };

        let err = post_list.retrieve_files().unwrap_err();
        assert!(err.to_string().contains("belongs inside its own post directory"));

        fs::remove_dir_all(&root_dir)?;
        Ok(())
    }
}
