//! Classify relative paths into index entries and fold them into one index.

use crate::config::{AutoComponentIndexerOptions, BoatsRc, GetIndexYamlOptions};
use crate::error::Result;
use crate::fs::RelativePath;
use crate::index::{IndexEntry, IndexObject, RefRecord};
use crate::tools::{build_index_from_path, get_method_from_file_name, ChannelNameResolver};

/// Settings for component keys, present only when components mode is on.
#[derive(Debug, Clone)]
struct ComponentMode {
    options: Option<AutoComponentIndexerOptions>,
    fancy_pluralization: bool,
}

/// Builds an [`IndexObject`] for whichever modes are enabled.
///
/// Modes are independent: every enabled mode contributes one entry per file.
#[derive(Debug, Clone)]
pub struct IndexAssembler {
    paths: bool,
    channels: Option<ChannelNameResolver>,
    components: Option<ComponentMode>,
}

impl IndexAssembler {
    /// Fails only when channels mode is on and a separator glob is invalid.
    pub fn new(boatsrc: &BoatsRc, options: &GetIndexYamlOptions) -> Result<Self> {
        let channels = if options.channels {
            Some(ChannelNameResolver::new(
                &boatsrc.picomatch_options,
                options.auto_channel_indexer_options.as_ref(),
            )?)
        } else {
            None
        };

        let components = options.components.then(|| ComponentMode {
            options: options.auto_component_indexer_options.clone(),
            fancy_pluralization: boatsrc.fancy_pluralization,
        });

        Ok(Self {
            paths: options.paths,
            channels,
            components,
        })
    }

    /// Entries for a single file, in paths, channels, components order.
    pub fn classify(&self, path: &RelativePath) -> Vec<IndexEntry> {
        let mut entries = Vec::with_capacity(3);

        if self.paths {
            entries.push(IndexEntry::Path {
                directory: path.dirname().to_owned(),
                method: get_method_from_file_name(path.file_name()),
                reference: RefRecord::from(path),
            });
        }
        if let Some(resolver) = &self.channels {
            entries.push(IndexEntry::Channel {
                key: resolver.resolve(path.as_str()),
                reference: RefRecord::from(path),
            });
        }
        if let Some(mode) = &self.components {
            entries.push(IndexEntry::Component {
                key: build_index_from_path(
                    path.as_str(),
                    mode.options.as_ref(),
                    mode.fancy_pluralization,
                ),
                reference: RefRecord::from(path),
            });
        }
        entries
    }

    /// Fold every non-excluded path into one index, skipping `None` slots.
    pub fn assemble(&self, clean_paths: &[Option<RelativePath>]) -> IndexObject {
        let mut index = IndexObject::new();
        for path in clean_paths.iter().flatten() {
            for entry in self.classify(path) {
                tracing::debug!(path = %path, key = entry.key(), "index entry");
                let key = entry.key().to_owned();
                if index.insert(entry) {
                    tracing::debug!(key = %key, "overwrote existing index entry");
                }
            }
        }
        index
    }
}

/// Classify `clean_paths` and render the resulting index as YAML.
pub fn build_paths_yaml_string(
    clean_paths: &[Option<RelativePath>],
    boatsrc: &BoatsRc,
    options: &GetIndexYamlOptions,
) -> Result<String> {
    let assembler = IndexAssembler::new(boatsrc, options)?;
    assembler.assemble(clean_paths).to_yaml()
}
