//! Clipbrief bridge: backend IO and effect execution.
mod bridge;
mod client;
mod gateway;
mod persist;
mod types;

pub use bridge::{BridgeEvents, BridgeHandle};
pub use client::{decode_response, HttpBackend, PipelineBackend};
pub use gateway::{
    DialogError, DirectoryDialog, ManualPathEntry, NativeDirectoryDialog, PathGateway,
};
pub use persist::{ensure_state_dir, write_state_file, PersistError};
pub use types::{BridgeError, BridgeEvent, PipelineCall, PipelineResponse};
