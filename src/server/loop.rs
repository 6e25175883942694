// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::spawn_connection;
use crate::handler::BoxHandler;
use crate::logger::Logger;

/// Accept connections on `listener` and serve each one with `handler`.
///
/// Accept errors are logged and the loop keeps going. Returns once
/// `shutdown` resolves; connections already accepted finish on their own
/// tasks.
pub async fn start_server_loop<F>(
    listener: TcpListener,
    handler: BoxHandler,
    logger: Arc<Logger>,
    shutdown: F,
) where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        logger.debug(format_args!("Accepted connection from {peer_addr}"));
                        spawn_connection(
                            stream,
                            peer_addr,
                            Arc::clone(&handler),
                            Arc::clone(&logger),
                        );
                    }
                    Err(e) => {
                        logger.error(format_args!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                logger.info(format_args!("Shutdown requested, no longer accepting connections."));
                return;
            }
        }
    }
}
