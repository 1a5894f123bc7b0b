use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use spdlog::info;

use crate::config::Config;
use crate::og_image::{describe_image, ImageDescriptor};
use crate::paginator::Paginator;
use crate::post::Post;
use crate::post_list::PostList;
use crate::post_store::PostStore;
use crate::visibility::{is_scheduled, is_visible};

pub const POST_FILE_NAME: &str = "index.md";
pub const MANIFEST_FILE_NAME: &str = "site.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub featured: bool,
    pub tags: Vec<String>,
    pub description: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        PostSummary {
            slug: post.slug.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            published_at: post.published_at,
            modified_at: post.modified_at,
            featured: post.featured,
            tags: post.tags.clone(),
            description: post.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub page_size: u32,
    pub page_count: u32,
    pub pages: Vec<Vec<PostSummary>>,
}

/// Everything the render engine needs to lay out the site: ordered paged
/// listings, per-post preview images, and the build instant they were
/// computed against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteManifest {
    pub generated_at: DateTime<Utc>,
    pub timezone: String,
    pub show_back_button: bool,
    pub eligible_count: usize,
    /// Home page summary: the latest posts_per_index_page eligible posts.
    pub index: Vec<PostSummary>,
    /// Complete eligible history, paginated. Absent when archives are off.
    pub archive: Option<Listing>,
    /// One listing per tag carried by an eligible post, keyed by tag.
    pub tags: BTreeMap<String, Listing>,
    /// One descriptor per loaded post, visible or not, keyed by slug.
    pub images: BTreeMap<String, ImageDescriptor>,
}

pub fn load_posts(config: &Config) -> io::Result<PostStore> {
    let post_list = PostList {
        root_dir: config.paths.posts_dir.clone(),
        post_file: POST_FILE_NAME.to_string(),
    };
    let mut store = PostStore::new(POST_FILE_NAME);

    for (dir, file_name) in post_list.retrieve_dirs()? {
        let path = dir.join(file_name);
        load_one(&mut store, &path, config)?;
    }
    for path in post_list.retrieve_files()? {
        load_one(&mut store, &path, config)?;
    }

    Ok(store)
}

fn load_one(store: &mut PostStore, path: &PathBuf, config: &Config) -> io::Result<()> {
    let fallback_slug = store.slug_from_path(path)?;
    let post = Post::from(path, &fallback_slug, &config.site.author)?;
    store.add(post)
}

/// Pure mapping from the loaded set to the manifest. `now` is captured once
/// by the caller so the whole build is consistent even if the wall clock
/// crosses a publication threshold mid-build.
pub fn build_manifest(config: &Config, store: &PostStore, now: DateTime<Utc>) -> SiteManifest {
    let margin = config.publish.margin();
    let sorted = store.sorted();

    let eligible: Vec<&Post> = sorted.iter().copied()
        .filter(|post| is_visible(post, now, margin))
        .collect();
    let scheduled = sorted.iter().filter(|post| is_scheduled(post, now, margin)).count();
    let drafts = sorted.iter().filter(|post| post.draft).count();

    info!("Loaded {} posts: {} eligible, {} scheduled, {} drafts",
          sorted.len(), eligible.len(), scheduled, drafts);

    let index: Vec<PostSummary> = eligible.iter()
        .take(config.pagination.posts_per_index_page as usize)
        .map(|post| PostSummary::from(*post))
        .collect();

    let archive = if config.site.show_archives {
        Some(listing_from(&eligible, config.pagination.posts_per_archive_page))
    } else {
        None
    };

    // BTreeMap keeps tag order deterministic across builds
    let mut by_tag: BTreeMap<String, Vec<&Post>> = BTreeMap::new();
    for post in eligible.iter() {
        for tag in post.tags.iter() {
            by_tag.entry(tag.clone()).or_default().push(*post);
        }
    }
    let tags: BTreeMap<String, Listing> = by_tag.into_iter()
        .map(|(tag, posts)| {
            let listing = listing_from(&posts, config.pagination.posts_per_index_page);
            (tag, listing)
        })
        .collect();

    // Descriptors cover every loaded post: a direct permalink to a post
    // outside the listings still resolves an image
    let images: BTreeMap<String, ImageDescriptor> = sorted.iter()
        .map(|post| {
            let descriptor = describe_image(post, &config.site.default_og_image, config.site.dynamic_og_images);
            (post.slug.clone(), descriptor)
        })
        .collect();

    SiteManifest {
        generated_at: now,
        timezone: config.site.timezone.clone(),
        show_back_button: config.site.show_back_button,
        eligible_count: eligible.len(),
        index,
        archive,
        tags,
        images,
    }
}

fn listing_from(posts: &[&Post], page_size: u32) -> Listing {
    let paginator = Paginator::from(posts, page_size);
    let pages = paginator.pages()
        .map(|page| page.iter().map(|post| PostSummary::from(*post)).collect())
        .collect();

    Listing {
        page_size,
        page_count: paginator.page_count(),
        pages,
    }
}

pub fn build_site(config: &Config, now: DateTime<Utc>) -> Result<SiteManifest> {
    let store = load_posts(config)
        .with_context(|| format!("Failed to load posts from {}", config.paths.posts_dir.display()))?;
    Ok(build_manifest(config, &store, now))
}

pub fn write_manifest(output_dir: &Path, manifest: &SiteManifest) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let manifest_path = output_dir.join(MANIFEST_FILE_NAME);
    let rendered = serde_json::to_string_pretty(manifest)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Error serializing manifest: {}", e)))?;
    fs::write(&manifest_path, rendered)?;
    Ok(manifest_path)
}
