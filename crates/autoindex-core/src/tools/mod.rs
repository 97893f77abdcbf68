pub mod channel;
pub mod component;
pub mod extension;
pub mod matcher;
pub mod method;

pub use channel::ChannelNameResolver;
pub use component::build_index_from_path;
pub use extension::remove_file_extension;
pub use matcher::GlobMatcher;
pub use method::get_method_from_file_name;
