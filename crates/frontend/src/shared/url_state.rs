//! Доступ к query-параметрам адресной строки.
//!
//! Состояние списков читает и пишет URL только через [`UrlStatePort`], чтобы
//! логику можно было проверять без браузера ([`MemoryUrlState`]).

use std::cell::{Cell, RefCell};
use url::form_urlencoded;
use wasm_bindgen::JsValue;

/// Query-параметры в исходном порядке.
///
/// Повторяющиеся (`tag=a&tag=b`) и «скобочные» (`utm[source]=x`) ключи
/// хранятся как есть, поэтому чужие параметры переживают перезапись URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Разбирает `?a=1&b=2` (ведущий `?` необязателен)
    pub fn parse(search: &str) -> Self {
        form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// First value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Replaces the first occurrence in place and drops the rest.
    /// A new key goes to the end.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UrlStateError {
    #[error("window is not available")]
    NoWindow,
    #[error("history API is not available: {0}")]
    History(String),
    #[error("history.replaceState failed: {0}")]
    Replace(String),
}

pub trait UrlStatePort {
    fn read(&self) -> QueryParams;

    /// Replaces the current query string without adding a history entry
    fn write(&self, params: &QueryParams) -> Result<(), UrlStateError>;
}

/// `window.location` + `history.replaceState`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrlState;

impl UrlStatePort for BrowserUrlState {
    fn read(&self) -> QueryParams {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|search| QueryParams::parse(&search))
            .unwrap_or_default()
    }

    fn write(&self, params: &QueryParams) -> Result<(), UrlStateError> {
        let window = web_sys::window().ok_or(UrlStateError::NoWindow)?;
        let location = window.location();
        let query = params.to_query_string();

        // Only update URL if it actually changed
        let current_search = location.search().unwrap_or_default();
        if QueryParams::parse(&current_search) == *params {
            return Ok(());
        }

        let pathname = location.pathname().unwrap_or_default();
        let new_url = if query.is_empty() {
            pathname
        } else {
            format!("{}?{}", pathname, query)
        };

        let history = window
            .history()
            .map_err(|e| UrlStateError::History(format!("{:?}", e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&new_url))
            .map_err(|e| UrlStateError::Replace(format!("{:?}", e)))
    }
}

/// Хранит параметры в памяти; для тестов и не-браузерных окружений
#[derive(Debug, Default)]
pub struct MemoryUrlState {
    params: RefCell<QueryParams>,
    writes: Cell<usize>,
}

impl MemoryUrlState {
    pub fn new(params: QueryParams) -> Self {
        Self {
            params: RefCell::new(params),
            writes: Cell::new(0),
        }
    }

    pub fn from_query(search: &str) -> Self {
        Self::new(QueryParams::parse(search))
    }

    pub fn params(&self) -> QueryParams {
        self.params.borrow().clone()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.params.borrow().get(key).map(str::to_string)
    }

    /// How many times `write` was called
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl UrlStatePort for MemoryUrlState {
    fn read(&self) -> QueryParams {
        self.params()
    }

    fn write(&self, params: &QueryParams) -> Result<(), UrlStateError> {
        *self.params.borrow_mut() = params.clone();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_plain_query_with_or_without_question_mark() {
        let expected = params(&[("category", "Books"), ("page", "2")]);
        assert_eq!(QueryParams::parse("?category=Books&page=2"), expected);
        assert_eq!(QueryParams::parse("category=Books&page=2"), expected);
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    #[test]
    fn repeated_and_bracketed_keys_are_kept() {
        let parsed = QueryParams::parse("?category=Books&tag=a&utm[source]=mail&tag=b");
        assert_eq!(parsed.get("category"), Some("Books"));
        assert_eq!(parsed.get("tag"), Some("a"));
        assert_eq!(parsed.get_all("tag"), vec!["a", "b"]);
        assert_eq!(parsed.get("utm[source]"), Some("mail"));
        assert_eq!(parsed.pairs().len(), 4);
    }

    #[test]
    fn encoded_query_parses_back() {
        let original = params(&[
            ("category", "Home & Garden"),
            ("page", "3"),
            ("sort", "name.asc,price.desc"),
            ("tag", "a"),
            ("tag", "b"),
        ]);
        let encoded = original.to_query_string();
        assert_eq!(QueryParams::parse(&encoded), original);
    }

    #[test]
    fn empty_params_encode_to_empty_string() {
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn set_replaces_first_occurrence_in_place() {
        let mut query = params(&[("page", "1"), ("tag", "a"), ("page", "7")]);
        query.set("page", "3");
        assert_eq!(query, params(&[("page", "3"), ("tag", "a")]));

        query.set("sort", "name.asc");
        assert_eq!(query, params(&[("page", "3"), ("tag", "a"), ("sort", "name.asc")]));

        query.remove("page");
        assert_eq!(query, params(&[("tag", "a"), ("sort", "name.asc")]));
    }

    #[test]
    fn memory_port_records_writes() {
        let port = MemoryUrlState::from_query("page=4");
        assert_eq!(port.get("page").as_deref(), Some("4"));

        port.write(&params(&[("sort", "stock.desc")])).unwrap();
        assert_eq!(port.write_count(), 1);
        assert_eq!(port.get("page"), None);
        assert_eq!(port.read(), params(&[("sort", "stock.desc")]));
    }
}
