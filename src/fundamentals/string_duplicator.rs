#[derive(Debug, Clone, Copy, Default)]
pub struct StringDuplicator;

impl StringDuplicator {
    /// Returns `input` followed by itself.
    pub fn duplicate(&self, input: &str) -> String {
        input.repeat(2)
    }
}
