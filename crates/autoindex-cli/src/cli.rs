//! CLI argument definitions using clap

use camino::Utf8PathBuf;
use clap::Parser;

use autoindex_core::prelude::*;

/// Generate the `$ref` index of a file-per-route API specification
#[derive(Parser, Debug)]
#[command(name = "autoindex")]
#[command(about = "Builds a YAML index referencing every file beside the index file")]
#[command(version)]
pub struct Cli {
    /// Index file to generate, relative to the working directory
    #[arg(value_name = "INDEX_FILE")]
    pub index_file: Utf8PathBuf,

    /// Index files by directory, nested by HTTP method
    #[arg(long)]
    pub paths: bool,

    /// Index files by channel name
    #[arg(long)]
    pub channels: bool,

    /// Index files by component name
    #[arg(long)]
    pub components: bool,

    /// Channel separator rule GLOB=SEPARATOR; repeat in priority order
    #[arg(long = "channel-separator", value_name = "GLOB=SEP")]
    pub channel_separators: Vec<ChannelSeparator>,

    /// Text removed from every component key
    #[arg(long, value_name = "TEXT")]
    pub remove: Option<String>,

    /// Keep the first letter of component keys lower-case
    #[arg(long)]
    pub dont_uc_first: bool,

    /// Project configuration (defaults to .boatsrc in the working directory)
    #[arg(long, value_name = "FILE", env = "AUTOINDEX_BOATSRC")]
    pub boatsrc: Option<Utf8PathBuf>,

    /// JSON options file; flags given on the command line are merged over it
    #[arg(long, value_name = "FILE")]
    pub options: Option<Utf8PathBuf>,

    /// Working directory the index file is resolved against
    #[arg(long, value_name = "DIR")]
    pub root: Option<Utf8PathBuf>,

    /// Write the index here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Log classification details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Overlay command-line flags onto `base`.
    pub fn merge_options(&self, mut base: GetIndexYamlOptions) -> GetIndexYamlOptions {
        base.paths |= self.paths;
        base.channels |= self.channels;
        base.components |= self.components;

        if !self.channel_separators.is_empty() {
            base.auto_channel_indexer_options
                .get_or_insert_with(Default::default)
                .channel_separators
                .extend(self.channel_separators.iter().cloned());
        }

        if self.remove.is_some() || self.dont_uc_first {
            let component = base
                .auto_component_indexer_options
                .get_or_insert_with(Default::default);
            if self.remove.is_some() {
                component.remove = self.remove.clone();
            }
            component.dont_uc_first |= self.dont_uc_first;
        }
        base
    }
}
