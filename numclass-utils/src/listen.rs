use futures::Future;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::{
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};
use tokio_stream::{wrappers::TcpListenerStream, StreamExt};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ListenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Accepts connections on an already-bound listener and spawns one task per
/// connection. Runs until the listener itself fails; individual connection
/// errors only end their own task.
pub async fn serve<F, Fut, E>(listener: TcpListener, handle_client: F) -> Result<(), ListenError>
where
    F: Fn(TcpStream, SocketAddr) -> Fut,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let local_addr = listener.local_addr()?;

    info!("listening on {local_addr}");

    let mut incoming = TcpListenerStream::new(listener);

    while let Some(stream) = incoming.next().await {
        let stream = stream?;
        let addr = stream.peer_addr()?;

        debug!("got a connection from {addr}");

        stream.set_nodelay(true)?;

        let client_future = handle_client(stream, addr);

        let _: JoinHandle<Result<(), E>> = tokio::spawn(async move {
            if let Err(err) = client_future.await {
                debug!("client {addr} errored: {err}");

                return Err(err);
            }

            debug!("client {addr} disconnected");

            Ok(())
        });
    }

    Ok(())
}
