// Connection module
// Serves a single accepted TCP connection on its own task

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::handler::BoxHandler;
use crate::http::body;
use crate::logger::Logger;

/// Spawn a task that serves HTTP/1.1 (keep-alive) on `stream` until the
/// client closes it. Requests run through `handler`.
pub fn spawn_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    handler: BoxHandler,
    logger: Arc<Logger>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req: Request<Incoming>| {
            let handler = Arc::clone(&handler);
            async move {
                let response = handler.handle(req.map(body::from_incoming)).await;
                Ok::<_, Infallible>(response)
            }
        });

        if let Err(err) = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service)
            .await
        {
            logger.debug(format_args!(
                "Failed to serve connection from {peer_addr}: {err}"
            ));
        }
    });
}
