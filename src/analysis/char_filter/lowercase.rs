use super::CharFilter;

/// A char filter that lowercases the whole input.
///
/// ASCII input takes the fast path; anything else goes through Unicode
/// lowercasing, which may change the byte length of the text.
#[derive(Debug, Clone, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
