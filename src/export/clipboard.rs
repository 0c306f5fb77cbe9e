//! Clipboard sink.
//!
//! Writing to a clipboard is the one asynchronous edge of the engine: the
//! host may need a permission or IO round trip. Failures are always reported
//! to the caller; there is no fallback to another sink.

use std::future::Future;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use futures::channel::oneshot;

use crate::error::ClipboardError;

use super::encode::decode_data_uri;

const WL_COPY_ARGS: &[&str] = &["--type", "image/png"];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard", "-t", "image/png", "-i"];

/// A host able to place PNG images on a clipboard.
pub trait ClipboardHost {
    /// Write `png` to the clipboard as an image.
    fn write_image(&self, png: Vec<u8>) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// Decode `data_uri` and write the image to `host`'s clipboard.
pub async fn copy_to_clipboard<H: ClipboardHost>(data_uri: &str, host: &H) -> Result<(), ClipboardError> {
    let png = decode_data_uri(data_uri).map_err(|e| ClipboardError::InvalidData(e.to_string()))?;
    host.write_image(png).await
}

/// The desktop clipboard, reached through `wl-copy` (Wayland) or `xclip` (X11).
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Program and arguments that accept a PNG on stdin for this session.
    fn command() -> Result<(&'static str, &'static [&'static str]), ClipboardError> {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Ok(("wl-copy", WL_COPY_ARGS))
        } else if std::env::var_os("DISPLAY").is_some() {
            Ok(("xclip", XCLIP_ARGS))
        } else {
            Err(ClipboardError::Unsupported(
                "no graphical session (WAYLAND_DISPLAY and DISPLAY are unset)".to_string(),
            ))
        }
    }

    /// Feed `png` to `program` and wait for it to exit.
    ///
    /// Clipboard tools fork a daemon that keeps serving the selection, and
    /// that daemon inherits any piped output handles. Only stdin is piped so
    /// the exit status arrives as soon as the foreground process is done.
    fn pipe(program: &str, args: &[&str], png: &[u8]) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ClipboardError::Unsupported(format!("{} is not installed", program)),
                _ => ClipboardError::Denied(format!("failed to start {}: {}", program, e)),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(png)
                .map_err(|e| ClipboardError::Denied(format!("{} closed its input: {}", program, e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::Denied(format!("{} did not finish: {}", program, e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Denied(format!("{} exited with {}", program, status)))
        }
    }
}

impl ClipboardHost for SystemClipboard {
    fn write_image(&self, png: Vec<u8>) -> impl Future<Output = Result<(), ClipboardError>> + Send {
        let (tx, rx) = oneshot::channel();

        match Self::command() {
            Ok((program, args)) => {
                log::debug!(target: "cards", "copying {} bytes via {}", png.len(), program);
                thread::spawn(move || {
                    let _ = tx.send(Self::pipe(program, args, &png));
                });
            }
            Err(e) => {
                let _ = tx.send(Err(e));
            }
        }

        async move {
            rx.await
                .unwrap_or_else(|_| Err(ClipboardError::Denied("clipboard worker exited".to_string())))
        }
    }
}
