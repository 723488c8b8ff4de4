use super::CharFilter;

/// A char filter that collapses runs of whitespace into a single space and
/// trims both ends.
///
/// Whitespace is Unicode `White_Space`, so tabs, newlines and no-break
/// spaces all count.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceCollapseCharFilter;

impl WhitespaceCollapseCharFilter {
    pub fn new() -> Self {
        WhitespaceCollapseCharFilter
    }
}

impl CharFilter for WhitespaceCollapseCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for word in input.split_whitespace() {
            if !output.is_empty() {
                output.push(' ');
            }
            output.push_str(word);
        }
        output
    }

    fn name(&self) -> &'static str {
        "whitespace_collapse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_and_trim() {
        let filter = WhitespaceCollapseCharFilter::new();
        assert_eq!(filter.filter("  high \t fever\n\ncough  "), "high fever cough");
    }

    #[test]
    fn test_whitespace_only() {
        let filter = WhitespaceCollapseCharFilter::new();
        assert_eq!(filter.filter(" \t\n "), "");
        assert_eq!(filter.filter("\u{00A0}fever\u{00A0}"), "fever");
    }
}
