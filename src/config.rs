use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Housing",
    "Other",
];

const ENV_DATA_DIR: &str = "SPENDTRACK_DATA_DIR";
const ENV_CATEGORIES: &str = "SPENDTRACK_CATEGORIES";
const ENV_CURRENCY: &str = "SPENDTRACK_CURRENCY";
const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    /// Category labels offered when recording an expense.
    pub(crate) categories: Vec<String>,
    pub(crate) currency: String,
}

impl Config {
    /// Resolve configuration from the environment, then the per-user config
    /// directory, then built-in defaults.
    pub(crate) fn load() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("com", "spendtrack", "SpendTrack");

        let data_dir = match std::env::var_os(ENV_DATA_DIR) {
            Some(dir) => PathBuf::from(dir),
            None => proj_dirs
                .as_ref()
                .map(|d| d.data_dir().to_path_buf())
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?,
        };
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let categories = match std::env::var(ENV_CATEGORIES) {
            Ok(list) => parse_category_list(&list, ','),
            Err(_) => match &proj_dirs {
                Some(dirs) => read_categories_file(&dirs.config_dir().join("categories.txt"))?,
                None => Vec::new(),
            },
        };
        let categories = if categories.is_empty() {
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
        } else {
            categories
        };

        let currency = std::env::var(ENV_CURRENCY)
            .ok()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.into());

        Ok(Self {
            data_dir,
            categories,
            currency,
        })
    }

    pub(crate) fn db_path(&self) -> PathBuf {
        self.data_dir.join("spendtrack.db")
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join("spendtrack.log")
    }

    /// Split `input` into a configured category and the remaining text.
    /// The longest label that prefixes the input (case-insensitive, ending at a
    /// space or the end of input) wins.
    pub(crate) fn match_category<'a>(&'a self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let input = input.trim_start();
        self.categories
            .iter()
            .filter(|cat| {
                input
                    .get(..cat.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(cat))
                    && input[cat.len()..]
                        .chars()
                        .next()
                        .map_or(true, char::is_whitespace)
            })
            .max_by_key(|cat| cat.len())
            .map(|cat| (cat.as_str(), input[cat.len()..].trim()))
    }
}

fn read_categories_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read categories: {}", path.display()))?;
    log::info!("loaded categories from {}", path.display());
    Ok(parse_category_list(&text, '\n'))
}

/// One label per item; blank items and `#` comments are skipped, duplicates dropped.
pub(crate) fn parse_category_list(text: &str, separator: char) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in text.split(separator) {
        let label = item.trim();
        if label.is_empty() || label.starts_with('#') {
            continue;
        }
        if !out.iter().any(|c| c.eq_ignore_ascii_case(label)) {
            out.push(label.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn config_with(categories: &[&str]) -> Config {
        Config {
            data_dir: PathBuf::from("."),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            currency: DEFAULT_CURRENCY.into(),
        }
    }

    #[test]
    fn test_parse_category_file_text() {
        let text = "# my categories\nFood\n\n  Rent  \nfood\nPet Care\r\n";
        assert_eq!(parse_category_list(text, '\n'), vec!["Food", "Rent", "Pet Care"]);
    }

    #[test]
    fn test_parse_category_env_list() {
        assert_eq!(parse_category_list("Food, Travel,,Bills", ','), vec!["Food", "Travel", "Bills"]);
    }

    #[test]
    fn test_match_category_splits_description() {
        let config = config_with(DEFAULT_CATEGORIES);
        assert_eq!(config.match_category("Food Lunch with team"), Some(("Food", "Lunch with team")));
        assert_eq!(config.match_category("housing"), Some(("Housing", "")));
    }

    #[test]
    fn test_match_category_prefers_longest_label() {
        let config = config_with(&["Food", "Food & Dining"]);
        assert_eq!(config.match_category("food & dining Dinner"), Some(("Food & Dining", "Dinner")));
        assert_eq!(config.match_category("Food Snacks"), Some(("Food", "Snacks")));
    }

    #[test]
    fn test_match_category_requires_word_boundary() {
        let config = config_with(&["Food"]);
        assert_eq!(config.match_category("Foodie stuff"), None);
        assert_eq!(config.match_category("Travel"), None);
    }

    #[test]
    fn test_read_missing_categories_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_categories_file(&dir.path().join("nope.txt")).unwrap().is_empty());
    }

    #[test]
    fn test_read_categories_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("categories.txt");
        std::fs::write(&path, "Groceries\nFuel\n").unwrap();
        assert_eq!(read_categories_file(&path).unwrap(), vec!["Groceries", "Fuel"]);
    }
}
