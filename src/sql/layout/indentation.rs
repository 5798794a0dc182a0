//! Indentation stack.

/// What pushed an indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    /// Body of a toplevel clause (`SELECT`, `FROM`, ...).
    TopLevel,
    /// Body of a parenthesized block.
    BlockLevel,
}

/// Tracks indentation as a stack of toplevel and block levels.
///
/// A toplevel word replaces the clause level it follows, while a closing
/// paren unwinds every clause level opened inside its block.
#[derive(Debug, Clone)]
pub struct Indentation {
    unit: String,
    stack: Vec<Level>,
}

impl Indentation {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            stack: Vec::new(),
        }
    }

    /// Current indentation string.
    pub fn indent(&self) -> String {
        self.unit.repeat(self.stack.len())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn increase_top_level(&mut self) {
        self.stack.push(Level::TopLevel);
    }

    pub fn increase_block_level(&mut self) {
        self.stack.push(Level::BlockLevel);
    }

    /// Pop one level if it is a toplevel one.
    pub fn decrease_top_level(&mut self) {
        if self.stack.last() == Some(&Level::TopLevel) {
            self.stack.pop();
        }
    }

    /// Pop up to and including the innermost block level.
    pub fn decrease_block_level(&mut self) {
        while let Some(level) = self.stack.pop() {
            if level == Level::BlockLevel {
                break;
            }
        }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_replaces_top_level() {
        let mut ind = Indentation::new("  ");
        ind.increase_top_level();
        assert_eq!(ind.indent(), "  ");
        ind.decrease_top_level();
        ind.increase_top_level();
        assert_eq!(ind.depth(), 1);
    }

    #[test]
    fn test_decrease_top_level_keeps_block() {
        let mut ind = Indentation::new("\t");
        ind.increase_block_level();
        ind.decrease_top_level();
        assert_eq!(ind.indent(), "\t");
    }

    #[test]
    fn test_decrease_block_unwinds_clauses() {
        let mut ind = Indentation::new("  ");
        ind.increase_top_level();
        ind.increase_block_level();
        ind.increase_top_level();
        ind.decrease_block_level();
        assert_eq!(ind.depth(), 1);
        assert_eq!(ind.indent(), "  ");
    }

    #[test]
    fn test_decrease_block_on_empty_stack() {
        let mut ind = Indentation::new("  ");
        ind.decrease_block_level();
        assert_eq!(ind.depth(), 0);
    }

    #[test]
    fn test_reset() {
        let mut ind = Indentation::new("    ");
        ind.increase_top_level();
        ind.increase_block_level();
        ind.reset();
        assert_eq!(ind.indent(), "");
    }
}
