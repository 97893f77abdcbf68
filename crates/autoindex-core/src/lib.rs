//! Generates the index document of a file-per-route API specification.
//!
//! Every file beneath the index file's directory becomes a `$ref` entry,
//! keyed by directory and HTTP method (paths), by channel name (channels)
//! or by component name (components).
//!
//! ```ignore
//! use autoindex_core::prelude::*;
//!
//! let options = GetIndexYamlOptions { paths: true, ..Default::default() };
//! let yaml = AutoIndexer::new("/srv/api")
//!     .get_index_yaml("src/paths/index.yml".into(), &BoatsRc::default(), &options)?;
//! ```

pub mod assembler;
pub mod config;
pub mod error;
pub mod fs;
pub mod index;
pub mod indexer;
pub mod tools;

pub use assembler::{build_paths_yaml_string, IndexAssembler};
pub use config::{
    AutoChannelIndexerOptions, AutoComponentIndexerOptions, BoatsRc, ChannelSeparator,
    GetIndexYamlOptions, PicomatchOptions,
};
pub use error::{Error, Result};
pub use fs::RelativePath;
pub use index::{IndexEntry, IndexNode, IndexObject, RefRecord};
pub use indexer::{get_index_yaml, AutoIndexer};

pub mod prelude {
    //! Common imports for consumers of this crate.
    pub use super::{
        AutoChannelIndexerOptions, AutoComponentIndexerOptions, AutoIndexer, BoatsRc,
        ChannelSeparator, Error, GetIndexYamlOptions, IndexObject, PicomatchOptions, Result,
    };
}
