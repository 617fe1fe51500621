//! Class token list
//!
//! Space-separated token set with union semantics (no duplicates).

/// Token list for managing an element's CSS classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Get number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token; empty tokens and duplicates are skipped
    pub fn add(&mut self, token: &str) {
        if !token.is_empty() && !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    /// Remove a token
    pub fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    /// Toggle a token, returns new membership state
    pub fn toggle(&mut self, token: &str) -> bool {
        if self.contains(token) {
            self.remove(token);
            false
        } else {
            self.add(token);
            true
        }
    }

    /// Get value as space-separated string
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    /// Replace the whole list from a space-separated string
    pub fn set_value(&mut self, value: &str) {
        *self = Self::from_string(value);
    }

    /// Iterate over tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }
}

impl std::fmt::Display for TokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
