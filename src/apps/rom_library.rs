//! ROM listing backend, parameterised per emulated platform.
//!
//! The GBA and N64 emulator apps share everything except their platform key,
//! extension allow-list, and public URL root, so a single [`RomLibrary`]
//! carries a [`Platform`] configuration instead of duplicating the listing
//! logic per app.

use std::path::PathBuf;
use std::sync::Arc;

use crate::apps::AppBackend;
use crate::domain::{BackendError, Invocation, Reply, RomStorage};

/// Static configuration for one emulated platform.
pub struct Platform {
    /// Registry slug of the app shipping this backend.
    pub slug: &'static str,
    /// Platform sub-directory under the user's `roms/` tree.
    pub key: &'static str,
    /// Case-insensitive file-name suffixes accepted as ROMs.
    pub extensions: &'static [&'static str],
    /// Prefix of the browser-facing URL for the ROM directory. Both built-ins
    /// use `/filesystem`; the original N64 script's extra `/static` segment
    /// was an inconsistency, kept configurable here rather than preserved.
    pub public_root: &'static str,
    /// Informational note returned when the directory is first created.
    pub created_message: &'static str,
}

pub const GBA: Platform = Platform {
    slug: "gbaemulator",
    key: "gba",
    extensions: &[".gba", ".gb"],
    public_root: "/filesystem",
    created_message: "ROMs folder created. Please add your GBA ROMs.",
};

pub const N64: Platform = Platform {
    slug: "n64emulator",
    key: "n64",
    extensions: &[".z64", ".n64", ".v64"],
    public_root: "/filesystem",
    created_message: "ROMs folder created. Please add your N64 ROMs.",
};

/// Lists ROM files under the per-user platform directory.
pub struct RomLibrary {
    platform: &'static Platform,
    storage: Arc<dyn RomStorage>,
}

impl RomLibrary {
    pub fn new(platform: &'static Platform, storage: Arc<dyn RomStorage>) -> Self {
        Self { platform, storage }
    }

    /// On-disk directory, relative to the storage root.
    fn storage_dir(&self, username: &str) -> PathBuf {
        ["static", "filesystem", "home", username, "roms", self.platform.key]
            .iter()
            .collect()
    }

    /// URL the browser uses to fetch ROMs from this directory.
    fn public_url(&self, username: &str) -> String {
        format!(
            "{}/home/{}/roms/{}",
            self.platform.public_root, username, self.platform.key
        )
    }

    fn is_rom(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.platform
            .extensions
            .iter()
            .any(|extension| lowered.ends_with(extension))
    }

    fn list_roms(&self, username: &str) -> Result<Reply, BackendError> {
        let dir = self.storage_dir(username);
        let rom_path = self.public_url(username);

        if self.storage.ensure_dir(&dir)? {
            return Ok(Reply::RomList {
                roms: Vec::new(),
                rom_path,
                message: Some(self.platform.created_message.to_owned()),
            });
        }

        let roms = self
            .storage
            .list_dir(&dir)?
            .into_iter()
            .filter(|name| self.is_rom(name))
            .collect();
        Ok(Reply::RomList {
            roms,
            rom_path,
            message: None,
        })
    }
}

impl AppBackend for RomLibrary {
    fn slug(&self) -> &'static str {
        self.platform.slug
    }

    fn handle(&self, invocation: &Invocation) -> Result<Reply, BackendError> {
        match invocation.require_action()? {
            "list_roms" => self.list_roms(invocation.session().username()),
            _ => Err(BackendError::InvalidAction),
        }
    }
}
