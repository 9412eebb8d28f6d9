pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// A line opens or closes a fence when its trimmed form starts with
    /// three backticks. Anything after the backticks (a language tag) is
    /// ignored.
    pub fn is_delimiter(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_delimiter("```"));
        assert!(CodeFence::is_delimiter("```rust"));
        assert!(CodeFence::is_delimiter("   ```  "));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_delimiter("hello"));
        assert!(!CodeFence::is_delimiter("``two"));
        assert!(!CodeFence::is_delimiter("~~~"));
    }
}
