//! Output postfixes for the derived maps.

use crate::error::ConfigurationError;
use core::fmt;
use std::collections::HashMap;

/// The kind of single purpose map derived from a packed texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputKind {
    Albedo,
    Ao,
    Normal,
    Roughness,
    Metal,
}

impl OutputKind {
    /// Every output kind, in a stable order.
    pub const ALL: [OutputKind; 5] = [
        OutputKind::Albedo,
        OutputKind::Ao,
        OutputKind::Normal,
        OutputKind::Roughness,
        OutputKind::Metal,
    ];

    /// Lower case name, as used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            OutputKind::Albedo => "albedo",
            OutputKind::Ao => "ao",
            OutputKind::Normal => "normal",
            OutputKind::Roughness => "roughness",
            OutputKind::Metal => "metal",
        }
    }

    /// Postfix used when none is configured.
    pub const fn default_postfix(self) -> &'static str {
        match self {
            OutputKind::Albedo => "_Albedo",
            OutputKind::Ao => "_AO",
            OutputKind::Normal => "_Normal",
            OutputKind::Roughness => "_Roughness",
            OutputKind::Metal => "_Metal",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Postfix appended to the base name of every derived map, per [`OutputKind`].
///
/// # Example
///
/// ```
/// use dagor_texconv_core::{OutputKind, PostfixConfig};
///
/// let postfixes = PostfixConfig::default().with_postfix(OutputKind::Ao, "_Occlusion");
/// assert_eq!(postfixes.postfix(OutputKind::Ao), "_Occlusion");
/// assert_eq!(postfixes.postfix(OutputKind::Albedo), "_Albedo");
/// assert!(postfixes.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixConfig {
    albedo: String,
    ao: String,
    normal: String,
    roughness: String,
    metal: String,
}

impl Default for PostfixConfig {
    fn default() -> Self {
        Self {
            albedo: OutputKind::Albedo.default_postfix().into(),
            ao: OutputKind::Ao.default_postfix().into(),
            normal: OutputKind::Normal.default_postfix().into(),
            roughness: OutputKind::Roughness.default_postfix().into(),
            metal: OutputKind::Metal.default_postfix().into(),
        }
    }
}

impl PostfixConfig {
    /// Builds a config from a map keyed by output kind. Every kind must be present.
    pub fn from_map(mut map: HashMap<OutputKind, String>) -> Result<Self, ConfigurationError> {
        let mut config = Self::default();
        for kind in OutputKind::ALL {
            let value = map
                .remove(&kind)
                .ok_or(ConfigurationError::MissingPostfix(kind))?;
            config.set_postfix(kind, value);
        }
        config.validate()?;
        Ok(config)
    }

    /// Returns the config with the postfix of `kind` replaced.
    pub fn with_postfix(mut self, kind: OutputKind, value: impl Into<String>) -> Self {
        self.set_postfix(kind, value);
        self
    }

    /// Replaces the postfix of `kind`.
    pub fn set_postfix(&mut self, kind: OutputKind, value: impl Into<String>) {
        *self.slot_mut(kind) = value.into();
    }

    /// The postfix of `kind`.
    pub fn postfix(&self, kind: OutputKind) -> &str {
        match kind {
            OutputKind::Albedo => &self.albedo,
            OutputKind::Ao => &self.ao,
            OutputKind::Normal => &self.normal,
            OutputKind::Roughness => &self.roughness,
            OutputKind::Metal => &self.metal,
        }
    }

    /// Checks that every postfix is non-empty, unique, and names a file inside
    /// the output directory.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (index, kind) in OutputKind::ALL.into_iter().enumerate() {
            let value = self.postfix(kind);
            if value.is_empty() {
                return Err(ConfigurationError::EmptyPostfix(kind));
            }
            if value.contains(['/', '\\']) {
                return Err(ConfigurationError::InvalidPostfix {
                    kind,
                    value: value.to_owned(),
                });
            }
            // `_d` and `_n` inputs share a base name, so kinds of both conventions clash too.
            if let Some(first) = OutputKind::ALL[..index]
                .iter()
                .find(|earlier| self.postfix(**earlier) == value)
            {
                return Err(ConfigurationError::DuplicatePostfix {
                    first: *first,
                    second: kind,
                    value: value.to_owned(),
                });
            }
        }
        Ok(())
    }

    fn slot_mut(&mut self, kind: OutputKind) -> &mut String {
        match kind {
            OutputKind::Albedo => &mut self.albedo,
            OutputKind::Ao => &mut self.ao,
            OutputKind::Normal => &mut self.normal,
            OutputKind::Roughness => &mut self.roughness,
            OutputKind::Metal => &mut self.metal,
        }
    }
}
