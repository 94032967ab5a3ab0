use crate::ids;
use std::fmt;
use std::str::FromStr;

/// The two static rule lists kept by a storage provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemCategory {
    Safe,
    Dangerous,
}

impl ItemCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Safe => "safe",
            ItemCategory::Dangerous => "dangerous",
        }
    }

    /// File name used by the file-backed provider.
    pub fn file_name(self) -> &'static str {
        match self {
            ItemCategory::Safe => ids::FILE_SAFE_ITEMS,
            ItemCategory::Dangerous => ids::FILE_DANGEROUS_ITEMS,
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backends that can serve rule lists and universe memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StorageProvider {
    /// Plain-text lists plus a JSON memory file in one directory.
    #[default]
    FileItem,
}

impl StorageProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageProvider::FileItem => ids::PROVIDER_FILE_ITEM,
        }
    }
}

impl fmt::Display for StorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("provider {0:?} is not supported (expected one of: fileItem)")]
pub struct UnknownProvider(pub String);

impl FromStr for StorageProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ids::PROVIDER_FILE_ITEM | "file" => Ok(StorageProvider::FileItem),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}
