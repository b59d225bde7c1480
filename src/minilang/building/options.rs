//! Knobs for AST construction
//!
//! Options are a plain value handed to every builder call. Nothing here is
//! global, so two builds with different options can run side by side.

use minilang_config::{BuildingConfig, InitializerPolicy};

/// What happens to the initializer of a block-local declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalInitializers {
    /// Carry it on the [`Variable`](crate::minilang::ast::Variable)
    #[default]
    Keep,
    /// Drop it without building it
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    pub local_initializers: LocalInitializers,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_initializers(mut self, policy: LocalInitializers) -> Self {
        self.local_initializers = policy;
        self
    }

    pub(crate) fn keep_local_initializers(&self) -> bool {
        self.local_initializers == LocalInitializers::Keep
    }
}

impl From<&BuildingConfig> for BuildOptions {
    fn from(config: &BuildingConfig) -> Self {
        let local_initializers = match config.local_initializers {
            InitializerPolicy::Keep => LocalInitializers::Keep,
            InitializerPolicy::Discard => LocalInitializers::Discard,
        };
        Self { local_initializers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_initializers() {
        assert!(BuildOptions::default().keep_local_initializers());
        assert!(!BuildOptions::new()
            .with_local_initializers(LocalInitializers::Discard)
            .keep_local_initializers());
    }

    #[test]
    fn test_from_default_config() {
        let config = minilang_config::load_defaults().expect("defaults to deserialize");
        let options = BuildOptions::from(&config.building);
        assert_eq!(options, BuildOptions::default());
    }
}
