//! File-name resolution for persisted clock state.
//!
//! The persisted clock stores its state at `{directory}/{resolved name}`;
//! the resolver decides the name so callers can partition storage per
//! logical test-execution stream.

/// Resolves the file name under which clock state is persisted.
pub trait FileNameResolver: Send + Sync {
    /// Returns the file name to persist the serialized clock time under.
    fn resolve(&self) -> String;
}

/// Always resolves the same configurable file name.
#[derive(Debug, Clone)]
pub struct FixedFileNameResolver {
    file_name: String,
}

impl FixedFileNameResolver {
    /// Creates a resolver that always yields `file_name`.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for FixedFileNameResolver {
    fn default() -> Self {
        Self::new("now.json")
    }
}

impl FileNameResolver for FixedFileNameResolver {
    fn resolve(&self) -> String {
        self.file_name.clone()
    }
}

/// Environment variable naming the parallel test channel.
pub const TEST_CHANNEL_ENV: &str = "TEST_CHANNEL";

/// Resolves a per-channel file name so parallel test workers writing to the
/// same directory do not race each other.
///
/// The channel is read from the [`TEST_CHANNEL_ENV`] environment variable
/// once, at construction; workers without an assigned channel share `1`.
#[derive(Debug, Clone)]
pub struct ChannelFileNameResolver {
    file_name: String,
}

impl ChannelFileNameResolver {
    /// Creates a resolver for the channel assigned to this process.
    #[must_use]
    pub fn from_env() -> Self {
        let channel = std::env::var(TEST_CHANNEL_ENV).unwrap_or_else(|_| "1".to_owned());

        Self {
            file_name: format!("now_{channel}.json"),
        }
    }
}

impl FileNameResolver for ChannelFileNameResolver {
    fn resolve(&self) -> String {
        self.file_name.clone()
    }
}
