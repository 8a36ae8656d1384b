//! Indentation state threaded through the statement printer.
//!
//! Nesting is tracked with a scoped guard: [`IndentContext::enter`] bumps the
//! level and hands back an [`IndentGuard`] that restores it when dropped. Early
//! returns through `?` and unwinding both drop the guard, so a failed body can
//! never leave the level raised for the statements that follow it.

use std::ops::{Deref, DerefMut};

use crate::FormatConfig;

/// Current nesting depth plus the unit repeated once per level.
#[derive(Debug, Clone)]
pub struct IndentContext {
    level: usize,
    unit: String,
}

impl IndentContext {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            level: 0,
            unit: unit.into(),
        }
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self::new(config.indent_unit())
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// The indentation for a line at the current level.
    pub fn prefix(&self) -> String {
        self.unit.repeat(self.level)
    }

    /// Go one level deeper until the returned guard is dropped.
    pub fn enter(&mut self) -> IndentGuard<'_> {
        self.level += 1;
        IndentGuard { ctx: self }
    }

    fn leave(&mut self) {
        debug_assert!(self.level > 0, "leave() without matching enter()");
        self.level = self.level.saturating_sub(1);
    }
}

/// Holds one level of nesting on an [`IndentContext`].
#[derive(Debug)]
pub struct IndentGuard<'a> {
    ctx: &'a mut IndentContext,
}

impl Deref for IndentGuard<'_> {
    type Target = IndentContext;

    fn deref(&self) -> &IndentContext {
        self.ctx
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut IndentContext {
        self.ctx
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.ctx.leave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_repeats_unit_per_level() {
        let mut ctx = IndentContext::new("  ");
        assert_eq!(ctx.prefix(), "");
        let mut one = ctx.enter();
        assert_eq!(one.prefix(), "  ");
        let two = one.enter();
        assert_eq!(two.level(), 2);
        assert_eq!(two.prefix(), "    ");
    }

    #[test]
    fn guard_drop_restores_level() {
        let mut ctx = IndentContext::new("\t");
        {
            let mut outer = ctx.enter();
            {
                let inner = outer.enter();
                assert_eq!(inner.prefix(), "\t\t");
            }
            assert_eq!(outer.level(), 1);
        }
        assert_eq!(ctx.level(), 0);
    }

    #[test]
    fn level_restored_on_early_return() {
        fn nested_failure(ctx: &mut IndentContext) -> Result<(), ()> {
            let mut inner = ctx.enter();
            let _deeper = inner.enter();
            Err(())
        }

        let mut ctx = IndentContext::new("  ");
        assert!(nested_failure(&mut ctx).is_err());
        assert_eq!(ctx.level(), 0);
    }

    #[test]
    fn from_config_uses_indent_size() {
        let config = FormatConfig { indent_size: 4 };
        let mut ctx = IndentContext::from_config(&config);
        assert_eq!(ctx.enter().prefix(), "    ");
        assert_eq!(ctx.enter().enter().prefix(), "        ");
    }
}
