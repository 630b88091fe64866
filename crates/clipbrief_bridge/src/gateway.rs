use async_trait::async_trait;
use bridge_logging::bridge_warn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("directory dialog unavailable: {0}")]
    Unavailable(String),
}

/// Native directory-chooser capability.
#[async_trait]
pub trait DirectoryDialog: Send + Sync {
    /// `Ok(None)` means the user cancelled the dialog.
    async fn pick_directory(&self) -> Result<Option<String>, DialogError>;
}

/// Text-entry fallback surfaced by the shell when no dialog can be shown.
pub trait ManualPathEntry: Send + Sync {
    /// `None` means the user cancelled the prompt.
    fn request_path(&self) -> Option<String>;
}

/// Obtains a download directory from the user: native dialog first, manual
/// entry when the environment cannot show one. Dialog errors are logged and
/// absorbed here; callers only ever see the resolved path or `None`.
pub struct PathGateway {
    dialog: Box<dyn DirectoryDialog>,
    fallback: Box<dyn ManualPathEntry>,
}

impl PathGateway {
    pub fn new(dialog: Box<dyn DirectoryDialog>, fallback: Box<dyn ManualPathEntry>) -> Self {
        Self { dialog, fallback }
    }

    pub async fn select_download_path(&self) -> Option<String> {
        match self.dialog.pick_directory().await {
            Ok(choice) => choice,
            Err(err) => {
                bridge_warn!("Directory dialog failed, using manual entry: {}", err);
                // A manual entry that trims to "" is still a deliberate
                // entry; only a cancelled prompt yields None.
                self.fallback
                    .request_path()
                    .map(|entry| entry.trim().to_owned())
            }
        }
    }
}

/// Folder picker backed by the system dialog.
pub struct NativeDirectoryDialog;

#[async_trait]
impl DirectoryDialog for NativeDirectoryDialog {
    async fn pick_directory(&self) -> Result<Option<String>, DialogError> {
        // Capability probe: without a display server the dialog cannot open.
        #[cfg(all(unix, not(target_os = "macos")))]
        if std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none() {
            return Err(DialogError::Unavailable("no display server".to_owned()));
        }

        let folder = rfd::AsyncFileDialog::new()
            .set_title("Choose download folder")
            .pick_folder()
            .await;
        Ok(folder.map(|handle| handle.path().to_string_lossy().into_owned()))
    }
}
