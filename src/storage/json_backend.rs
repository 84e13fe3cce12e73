use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::QuoteError;
use crate::quote::QuoteMetadata;

use super::{QuoteStore, Result};

const QUOTES_DIR: &str = "quotes";
const QUOTE_KEY_PREFIX: &str = "quote_";
const QUOTE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// JSON-file quote store: one pretty-printed file per quote under
/// `<data dir>/quotes/quote_<id>.json`.
#[derive(Clone)]
pub struct JsonQuoteStore {
    root: PathBuf,
    quotes_dir: PathBuf,
}

impl JsonQuoteStore {
    /// Opens (and creates, if needed) the store under `root`, defaulting to
    /// the application data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let quotes_dir = root.join(QUOTES_DIR);
        ensure_dir(&quotes_dir)?;
        Ok(Self { root, quotes_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    /// File backing a quote id; the file stem is the storage key.
    pub fn quote_path(&self, quote_id: &str) -> PathBuf {
        self.quotes_dir.join(format!(
            "{}{}.{}",
            QUOTE_KEY_PREFIX, quote_id, QUOTE_EXTENSION
        ))
    }
}

impl QuoteStore for JsonQuoteStore {
    fn save(&self, quote: &QuoteMetadata) -> Result<()> {
        let path = self.quote_path(&quote.quote_id);
        let json = serde_json::to_string_pretty(quote)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(quote_id = %quote.quote_id, path = %path.display(), "quote persisted");
        Ok(())
    }

    fn load(&self, quote_id: &str) -> Result<QuoteMetadata> {
        let path = self.quote_path(quote_id);
        if !path.exists() {
            return Err(QuoteError::Storage(format!(
                "quote `{}` not found",
                quote_id
            )));
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.quotes_dir.exists() {
            return Ok(Vec::new());
        }
        let mut quotes = Vec::new();
        for entry in fs::read_dir(&self.quotes_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(QUOTE_EXTENSION) {
                continue;
            }
            let contents = match fs::read_to_string(&path) {
                Ok(value) => value,
                Err(_) => continue,
            };
            let quote: QuoteMetadata = match serde_json::from_str(&contents) {
                Ok(quote) => quote,
                Err(_) => continue,
            };
            quotes.push((quote.timestamp, quote.quote_id));
        }
        quotes.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(quotes.into_iter().map(|(_, id)| id).collect())
    }
}

/// Application data directory: `$QUOTE_CORE_HOME` when set, else
/// `~/.quote_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("QUOTE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".quote_core")
}

pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InsuranceType, QuoteForm, VehicleType};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonQuoteStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonQuoteStore::new(Some(temp.path().to_path_buf())).expect("quote store");
        (store, temp)
    }

    fn sample_quote(millis: i64) -> QuoteMetadata {
        let form = QuoteForm {
            full_name: "Test Customer".into(),
            phone: "0961234567".into(),
            email: "test@example.com".into(),
            location: "Ndola".into(),
            make: "Mazda".into(),
            model: "Demio".into(),
            year: "2018".into(),
            engine_capacity: "1300cc".into(),
            vehicle_type: Some(VehicleType::Private),
            vehicle_value: "60,000".into(),
            insurance_type: Some(InsuranceType::ThirdParty),
            ..QuoteForm::default()
        };
        let now = Utc.timestamp_millis_opt(millis).unwrap();
        QuoteMetadata::generate_at(&form, now).expect("quote metadata")
    }

    #[test]
    fn save_and_load_round_trip() {
        let (store, _guard) = store_with_temp_dir();
        let quote = sample_quote(1_700_000_111_222);
        store.save(&quote).expect("save quote");
        let loaded = store.load(&quote.quote_id).expect("load quote");
        assert_eq!(loaded, quote);
    }

    #[test]
    fn file_name_follows_the_key_pattern() {
        let (store, _guard) = store_with_temp_dir();
        let quote = sample_quote(1_700_000_111_222);
        store.save(&quote).expect("save quote");
        let path = store.quote_path(&quote.quote_id);
        assert!(path.exists());
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(format!("quote_{}.json", quote.quote_id).as_str())
        );
    }

    #[test]
    fn list_returns_ids_newest_first() {
        let (store, _guard) = store_with_temp_dir();
        let older = sample_quote(1_700_000_111_222);
        let newer = sample_quote(1_700_000_333_444);
        store.save(&older).expect("save older");
        store.save(&newer).expect("save newer");

        let listed = store.list().expect("list quotes");
        assert_eq!(listed, vec![newer.quote_id, older.quote_id]);
    }

    #[test]
    fn loading_a_missing_quote_is_a_storage_error() {
        let (store, _guard) = store_with_temp_dir();
        let err = store.load("000000").unwrap_err();
        assert!(matches!(err, QuoteError::Storage(_)));
    }
}
