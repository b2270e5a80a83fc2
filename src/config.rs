// src/config.rs
use crate::args::Args;
use crate::decode::DecodeMode;
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "src";
pub const DEFAULT_SUFFIXES: [&str; 2] = [".rs", ".rss"];

pub fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(ToString::to_string).collect()
}

/// Everything one scan needs. Nothing here is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
    /// Case-sensitive file-name suffixes; a file matches if any one ends its name.
    #[builder(default = "default_suffixes()")]
    pub suffixes: Vec<String>,
    #[builder(default)]
    pub decode: DecodeMode,
    #[builder(default)]
    pub follow_links: bool,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(suffixes) = &self.suffixes {
            if suffixes.is_empty() {
                return Err("at least one file suffix is required".to_string());
            }
            if suffixes.iter().any(String::is_empty) {
                return Err("file suffixes must not be empty".to_string());
            }
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            suffixes: default_suffixes(),
            decode: DecodeMode::Permissive,
            follow_links: false,
        }
    }
}

impl TryFrom<Args> for ScanConfig {
    type Error = ScanConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let suffixes = if args.ext.is_empty() {
            default_suffixes()
        } else {
            args.ext
        };
        let decode = if args.strict_utf8 {
            DecodeMode::Strict
        } else {
            DecodeMode::Permissive
        };

        ScanConfigBuilder::default()
            .root(args.root)
            .suffixes(suffixes)
            .decode(decode)
            .follow_links(args.follow)
            .build()
    }
}
