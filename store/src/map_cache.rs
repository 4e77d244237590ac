use crate::CacheError;
use common::models::MapEntry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Flat-file cache of the identifier catalog, one `id;name;symbol;slug`
/// line per coin. Fields are not escaped, so a name containing `;`
/// corrupts its own line; such lines are skipped on load.
///
/// The file is read at most once and written at most once per process.
/// If two instances race on it, last writer wins.
pub struct MapCache {
    path: PathBuf,
}

impl MapCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the cache file with the given catalog.
    pub fn write_entries(&self, entries: &[MapEntry]) -> Result<(), CacheError> {
        let mut out = String::with_capacity(entries.len() * 32);
        for entry in entries {
            out.push_str(&format!(
                "{};{};{};{}\n",
                entry.id, entry.name, entry.symbol, entry.slug
            ));
        }
        fs::write(&self.path, out)?;

        info!(
            "Wrote {} map entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Build the lookup index from the cache file. A missing or
    /// unreadable file yields an empty index; malformed lines are
    /// skipped individually so one bad line does not poison the rest.
    pub fn load(&self) -> CoinIndex {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No usable map cache at {}: {}", self.path.display(), e);
                return CoinIndex::default();
            }
        };

        let mut index = CoinIndex::default();
        for (lineno, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(entry) => index.insert(&entry),
                None => warn!(
                    "Skipping malformed cache line {} in {}",
                    lineno + 1,
                    self.path.display()
                ),
            }
        }
        index
    }
}

fn parse_line(line: &str) -> Option<MapEntry> {
    let mut fields = line.split(';');
    let id = fields.next()?.parse().ok()?;
    let name = fields.next()?;
    let symbol = fields.next()?;
    let slug = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some(MapEntry {
        id,
        name: name.to_string(),
        symbol: symbol.to_string(),
        slug: slug.to_string(),
    })
}

/// In-memory symbol→id and slug→id lookup built from the cache file.
/// Duplicate keys keep the last entry seen.
#[derive(Debug, Default)]
pub struct CoinIndex {
    symbol_to_id: HashMap<String, u64>,
    slug_to_id: HashMap<String, u64>,
}

impl CoinIndex {
    pub fn from_entries(entries: &[MapEntry]) -> Self {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    fn insert(&mut self, entry: &MapEntry) {
        self.symbol_to_id.insert(entry.symbol.clone(), entry.id);
        self.slug_to_id.insert(entry.slug.clone(), entry.id);
    }

    pub fn is_empty(&self) -> bool {
        self.slug_to_id.is_empty() && self.symbol_to_id.is_empty()
    }

    /// Look a single token up, slug first, then symbol.
    pub fn lookup(&self, token: &str) -> Option<u64> {
        self.slug_to_id
            .get(token)
            .or_else(|| self.symbol_to_id.get(token))
            .copied()
    }

    /// Resolve every token to an id, preserving input order. Any miss
    /// fails the whole resolution with the partial list attached; the
    /// expected remedy is refreshing the map cache.
    pub fn resolve(&self, tokens: &[String]) -> Result<Vec<u64>, CacheError> {
        let partial: Vec<(String, Option<u64>)> = tokens
            .iter()
            .map(|token| (token.clone(), self.lookup(token)))
            .collect();

        if partial.iter().any(|(_, id)| id.is_none()) {
            return Err(CacheError::Resolution(partial));
        }
        Ok(partial.into_iter().map(|(_, id)| id.unwrap()).collect())
    }
}
