//! Successful reply shapes and their wire envelope.

use serde_json::{Value, json};

/// Successful outcome of one backend invocation.
///
/// Serialised with `success=true`; [`BackendError`](super::BackendError)
/// covers the `success=false` half of the envelope, so call sites handle the
/// two outcomes exhaustively through `Result<Reply, BackendError>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// ROM files found under the user's platform directory.
    RomList {
        /// File names in directory order; the original listing is unordered.
        roms: Vec<String>,
        /// Browser-facing URL of the directory.
        rom_path: String,
        /// Informational note, only present when the directory was freshly
        /// created.
        message: Option<String>,
    },
    /// Plain message reply, used by the profile echo backend.
    Greeting { message: String },
}

impl Reply {
    /// Success envelope: `{"success": true, ...payload}`.
    ///
    /// `message` is omitted entirely when absent; clients probe for the key to
    /// distinguish a fresh directory from an established one.
    pub fn into_body(self) -> Value {
        match self {
            Self::RomList {
                roms,
                rom_path,
                message,
            } => {
                let mut body = json!({
                    "success": true,
                    "roms": roms,
                    "rom_path": rom_path,
                });
                if let Some(message) = message {
                    body["message"] = Value::String(message);
                }
                body
            }
            Self::Greeting { message } => json!({ "success": true, "message": message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_list_envelope_includes_message_only_when_present() {
        let body = Reply::RomList {
            roms: vec![],
            rom_path: "/filesystem/home/ada/roms/gba".into(),
            message: Some("ROMs folder created. Please add your GBA ROMs.".into()),
        }
        .into_body();
        assert_eq!(body["success"], true);
        assert_eq!(body["roms"], json!([]));
        assert_eq!(body["rom_path"], "/filesystem/home/ada/roms/gba");
        assert_eq!(
            body["message"],
            "ROMs folder created. Please add your GBA ROMs."
        );

        let body = Reply::RomList {
            roms: vec!["demo.gb".into()],
            rom_path: "/filesystem/home/ada/roms/gba".into(),
            message: None,
        }
        .into_body();
        assert!(body.get("message").is_none());
        assert_eq!(body["roms"], json!(["demo.gb"]));
    }

    #[test]
    fn greeting_envelope_is_flat() {
        let body = Reply::Greeting {
            message: "Hello, ada!".into(),
        }
        .into_body();
        assert_eq!(body, json!({ "success": true, "message": "Hello, ada!" }));
    }
}
