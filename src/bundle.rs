//! Loading a catalog bundle from the built-in data, a JSON file, or a URL.
//!
//! Remote bundles are downloaded once into the cache directory and read from
//! disk afterwards. Every loaded bundle is validated and memoized per source.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Builtin,
    File(PathBuf),
    Url(String),
}

impl Source {
    /// `builtin` (or empty), an `http(s)://` URL, or a filesystem path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("builtin") {
            Source::Builtin
        } else if value.starts_with("http://") || value.starts_with("https://") {
            Source::Url(value.to_string())
        } else {
            Source::File(PathBuf::from(value))
        }
    }
}

static BUNDLE_CACHE: Lazy<RwLock<HashMap<Source, Arc<Catalog>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub async fn load(source: &Source, cache_dir: &Path) -> Result<Arc<Catalog>, CatalogError> {
    if let Some(cached) = BUNDLE_CACHE
        .read()
        .ok()
        .and_then(|cache| cache.get(source).cloned())
    {
        debug!(?source, "catalog served from memory");
        return Ok(cached);
    }

    let catalog = match source {
        Source::Builtin => checked(Catalog::builtin().clone())?,
        Source::File(path) => checked(read_bundle(path)?)?,
        Source::Url(url) => {
            fs::create_dir_all(cache_dir)?;
            let local = cache_dir.join(cache_file_name(url));
            if !local.exists() {
                download_to(url, &local).await?;
            }
            let loaded = read_bundle(&local).and_then(checked);
            if let Err(err) = &loaded {
                warn!(url, path = %local.display(), %err, "discarding cached catalog");
                if let Err(err) = fs::remove_file(&local) {
                    warn!(path = %local.display(), %err, "could not remove cached catalog");
                }
            }
            loaded?
        }
    };
    info!(
        ?source,
        elements = catalog.elements.len(),
        reactions = catalog.reactions.len(),
        questions = catalog.questions.len(),
        paths = catalog.paths.len(),
        "catalog loaded"
    );

    let catalog = Arc::new(catalog);
    match BUNDLE_CACHE.write() {
        Ok(mut cache) => {
            cache.insert(source.clone(), Arc::clone(&catalog));
        }
        Err(_) => warn!("catalog cache poisoned; not memoizing"),
    }
    Ok(catalog)
}

fn checked(catalog: Catalog) -> Result<Catalog, CatalogError> {
    catalog.validate()?;
    Ok(catalog)
}

pub fn read_bundle(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn write_bundle(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_vec_pretty(catalog)?)?;
    Ok(())
}

/// Host, path and query of the URL folded into one file name, so two
/// sources never share a cache entry.
fn cache_file_name(url: &str) -> String {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.split('#').next().unwrap_or(rest);
    let folded: String = rest
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    let mut name = folded.trim_matches('_').to_string();
    if name.is_empty() {
        name = "catalog".to_string();
    }
    if !name.ends_with(".json") {
        name.push_str(".json");
    }
    name
}

async fn download_to(url: &str, path: &Path) -> Result<(), CatalogError> {
    info!(url, path = %path.display(), "downloading catalog");
    let bytes = reqwest::get(url)
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    fs::write(path, &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chemref-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(Source::parse(""), Source::Builtin);
        assert_eq!(Source::parse("BUILTIN"), Source::Builtin);
        assert_eq!(
            Source::parse("https://example.org/c.json"),
            Source::Url("https://example.org/c.json".to_string())
        );
        assert_eq!(Source::parse("data/c.json"), Source::File(PathBuf::from("data/c.json")));
    }

    #[test]
    fn test_cache_file_name() {
        assert_eq!(
            cache_file_name("https://example.org/bundles/chem.json"),
            "example.org_bundles_chem.json"
        );
        assert_eq!(
            cache_file_name("https://example.org/bundles/v2/?x=1#top"),
            "example.org_bundles_v2__x_1.json"
        );
        assert_eq!(cache_file_name("https://example.org/a b"), "example.org_a_b.json");
        assert_ne!(
            cache_file_name("https://mirror-a.example/v1/catalog.json"),
            cache_file_name("https://other-host.example/v2/catalog.json")
        );
    }

    #[test]
    fn test_write_then_read_bundle() {
        let path = scratch("bundle.json");
        write_bundle(Catalog::builtin(), &path).unwrap();
        let back = read_bundle(&path).unwrap();
        assert_eq!(&back, Catalog::builtin());
        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_load_file_validates() {
        let path = scratch("broken.json");
        let mut catalog = Catalog::builtin().clone();
        catalog.elements[1].group = 40;
        write_bundle(&catalog, &path).unwrap();

        let err = load(&Source::File(path.clone()), &scratch("cache")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(ref p) if p.iter().any(|m| m.contains("group 40"))));
        let _ = fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_load_builtin_is_memoized() {
        let cache = scratch("cache");
        let a = load(&Source::Builtin, &cache).await.unwrap();
        let b = load(&Source::Builtin, &cache).await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.elements.len(), 118);
    }

    /// Serves `v1` and `v2` at `/v1/catalog.json` and `/v2/catalog.json` on a
    /// loopback port and counts requests.
    async fn serve(v1: String, v2: String) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let (h1, h2) = (Arc::clone(&hits), Arc::clone(&hits));
        let app = Router::new()
            .route(
                "/v1/catalog.json",
                get(move || {
                    h1.fetch_add(1, Ordering::SeqCst);
                    let body = v1.clone();
                    async move { body }
                }),
            )
            .route(
                "/v2/catalog.json",
                get(move || {
                    h2.fetch_add(1, Ordering::SeqCst);
                    let body = v2.clone();
                    async move { body }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), hits)
    }

    #[tokio::test]
    async fn test_load_url_downloads_once_per_source() {
        let mut first = Catalog::builtin().clone();
        first.questions.clear();
        let mut second = Catalog::builtin().clone();
        second.reactions.truncate(1);
        let (base, hits) = serve(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
        )
        .await;
        let cache = scratch("url-cache");
        let _ = fs::remove_dir_all(&cache);

        let v1 = format!("{base}/v1/catalog.json");
        let a = load(&Source::Url(v1.clone()), &cache).await.unwrap();
        assert!(a.questions.is_empty());
        assert!(cache.join(cache_file_name(&v1)).exists());
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let again = load(&Source::Url(v1), &cache).await.unwrap();
        assert!(Arc::ptr_eq(&a, &again));
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let v2 = format!("{base}/v2/catalog.json");
        let b = load(&Source::Url(v2), &cache).await.unwrap();
        assert_eq!(b.reactions.len(), 1);
        assert!(!b.questions.is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        let _ = fs::remove_dir_all(&cache);
    }

    #[tokio::test]
    async fn test_unusable_cached_file_is_discarded() {
        let (base, hits) = serve(
            serde_json::to_string(Catalog::builtin()).unwrap(),
            String::new(),
        )
        .await;
        let cache = scratch("stale-cache");
        let _ = fs::remove_dir_all(&cache);
        fs::create_dir_all(&cache).unwrap();

        let url = format!("{base}/v1/catalog.json");
        let cached = cache.join(cache_file_name(&url));
        fs::write(&cached, "{ not json").unwrap();

        let err = load(&Source::Url(url.clone()), &cache).await.unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(!cached.exists());
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        let fresh = load(&Source::Url(url), &cache).await.unwrap();
        assert_eq!(fresh.elements.len(), 118);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        let _ = fs::remove_dir_all(&cache);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_bundle(&scratch("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
