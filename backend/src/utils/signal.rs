use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(not(unix))]
use futures::future::BoxFuture;
#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind};

/// Resolves once the process is asked to stop; used for graceful shutdown.
pub struct SignalHandler {
    #[cfg(unix)]
    signals: smallvec::SmallVec<[(SignalKind, Signal); 3]>,
    #[cfg(not(unix))]
    signal: BoxFuture<'static, std::io::Result<()>>,
}

impl SignalHandler {
    pub fn new() -> Self {
        trace!("registering signal listeners");

        #[cfg(unix)]
        {
            let kinds = [
                SignalKind::interrupt(),
                SignalKind::terminate(),
                SignalKind::quit(),
            ];

            let signals = kinds
                .into_iter()
                .filter_map(|kind| match tokio::signal::unix::signal(kind) {
                    Ok(signal) => Some((kind, signal)),
                    Err(error) => {
                        error!("failed to listen for signal {:?}: {}", kind, error);
                        None
                    }
                })
                .collect();

            SignalHandler { signals }
        }

        #[cfg(not(unix))]
        {
            SignalHandler {
                signal: Box::pin(tokio::signal::ctrl_c()),
            }
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Future for SignalHandler {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        #[cfg(unix)]
        {
            for (kind, signal) in &mut self.signals {
                if signal.poll_recv(cx).is_ready() {
                    info!("received signal {:?}, shutting down", kind);
                    return Poll::Ready(());
                }
            }
        }

        #[cfg(not(unix))]
        {
            if self.signal.as_mut().poll(cx).is_ready() {
                info!("received ctrl-c, shutting down");
                return Poll::Ready(());
            }
        }

        Poll::Pending
    }
}
