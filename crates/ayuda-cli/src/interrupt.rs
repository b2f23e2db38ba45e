// Rust guideline compliant 2026-02-06

//! Ctrl-C handling.
//!
//! Installing a tokio signal listener replaces the default SIGINT action for
//! the rest of the process, so one listener is installed per process and
//! every interrupt is forwarded over a channel. Callers decide what an
//! interrupt means: cancelling a scan, or leaving the session prompt.

use std::future::Future;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Interrupts delivered to the process, one message per Ctrl-C.
pub type Interrupts = mpsc::Receiver<()>;

/// Starts the process-wide interrupt listener.
///
/// The listener is registered before this returns, so an interrupt raised
/// right afterwards is not lost. It lives until the returned receiver is
/// dropped.
///
/// # Errors
///
/// Returns an error if the signal handler cannot be installed.
#[cfg(unix)]
pub fn listen_for_interrupts() -> std::io::Result<Interrupts> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let (tx, rx) = mpsc::channel(4);
    tokio::spawn(async move {
        while sigint.recv().await.is_some() {
            debug!("interrupt received");
            if tx.send(()).await.is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

/// Starts the process-wide interrupt listener.
///
/// # Errors
///
/// Never fails on this platform; a failed registration ends the listener.
#[cfg(not(unix))]
pub fn listen_for_interrupts() -> std::io::Result<Interrupts> {
    let (tx, rx) = mpsc::channel(4);
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received");
            if tx.send(()).await.is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

/// Drives `operation` to completion, cancelling `token` on every interrupt
/// that arrives meanwhile.
pub async fn cancel_on_interrupt<F: Future>(
    operation: F,
    token: &CancellationToken,
    interrupts: &mut Interrupts,
) -> F::Output {
    tokio::pin!(operation);
    loop {
        tokio::select! {
            biased;
            output = &mut operation => return output,
            Some(()) = interrupts.recv() => {
                debug!("cancelling current operation");
                token.cancel();
            }
        }
    }
}
