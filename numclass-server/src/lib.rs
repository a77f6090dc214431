//! Line-oriented TCP server classifying integers as primes or powers of
//! two, with a credential-prefixed admin command that switches the active
//! classifier for every connected client.

mod classify;
mod request;
mod response;
mod state;

pub use request::Credentials;
pub use response::Response;
pub use state::{Mode, ServerState};

use bytes::BytesMut;
use numclass_utils::{serve, CrlfLinesCodec, ListenError};
use request::Request;
use std::{net::SocketAddr, sync::Arc};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, info};

/// Serves the classification protocol on an already-bound listener until
/// the listener fails.
pub async fn run(listener: TcpListener, credentials: Credentials) -> Result<(), ListenError> {
    let credentials = Arc::new(credentials);
    let state = Arc::new(ServerState::new());

    serve(listener, move |stream, addr| {
        let credentials = Arc::clone(&credentials);
        let state = Arc::clone(&state);

        handle_client(stream, addr, credentials, state)
    })
    .await
}

async fn handle_client(
    stream: TcpStream,
    addr: SocketAddr,
    credentials: Arc<Credentials>,
    state: Arc<ServerState>,
) -> anyhow::Result<()> {
    let connected = state.client_connected();

    info!("{connected} concurrent clients are connected");

    let result = session(stream, addr, &credentials, &state).await;

    state.client_disconnected();

    result
}

async fn session(
    mut stream: TcpStream,
    addr: SocketAddr,
    credentials: &Credentials,
    state: &ServerState,
) -> anyhow::Result<()> {
    let mut codec = CrlfLinesCodec::new();
    let mut inbound = BytesMut::with_capacity(1024);
    let mut outbound = BytesMut::new();

    loop {
        let bytes = stream.read_buf(&mut inbound).await?;

        if bytes == 0 {
            break;
        }

        while let Some(line) = codec.decode(&mut inbound)? {
            debug!("{addr} --> {line:?}");

            let response = dispatch(&line, credentials, state).await;

            debug!("{addr} <-- {response:?}");

            codec.encode(response, &mut outbound)?;
        }

        // One write for the whole batch of lines in this chunk, not one
        // per response.
        if !outbound.is_empty() {
            stream.write_all_buf(&mut outbound).await?;
        }
    }

    Ok(())
}

async fn dispatch(line: &str, credentials: &Credentials, state: &ServerState) -> Response {
    match Request::parse(line, credentials) {
        Request::Admin {
            subcommand: Some("prime"),
        } => {
            state.set_mode(Mode::Prime).await;

            Response::PrimeModeEnabled
        }
        Request::Admin {
            subcommand: Some("power"),
        } => {
            state.set_mode(Mode::PowerOfTwo).await;

            Response::PowerModeEnabled
        }
        Request::Admin {
            subcommand: Some(_),
        } => Response::UnknownAdminCommand,
        Request::Admin { subcommand: None } => Response::AdminCommandFormat,
        Request::Query { number } => match number.parse::<i32>() {
            Ok(number) => match state.mode().await {
                Mode::Prime => Response::prime(classify::is_prime(number)),
                Mode::PowerOfTwo => Response::power_of_two(classify::is_power_of_two(number)),
            },
            Err(_) => Response::InvalidNumber,
        },
    }
}
