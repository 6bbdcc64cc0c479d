//! HTTP server: bind, accept, dispatch.
//!
//! The listener is bound eagerly in [`Server::bind`] so a taken or
//! privileged port fails the process at startup instead of surfacing after
//! it reports itself healthy. [`Server::serve`] then accepts forever; the
//! only way down is an external signal, which the operator owns.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http::{Method, StatusCode};
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Error;
use crate::greeting::Greeter;
use crate::response::Response;

/// The HTTP server.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Binds the TCP listener on `addr`.
    ///
    /// Fails with [`Error::Bind`] when the port is already taken or the
    /// process may not bind it (port 80 is privileged on most systems).
    pub async fn bind(addr: SocketAddr) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        let addr = listener
            .local_addr()
            .map_err(|source| Error::Bind { addr, source })?;
        Ok(Self { listener, addr })
    }

    /// The address the listener is actually bound to. Differs from the
    /// requested address when binding port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Accepts connections and dispatches them until the process is killed.
    pub async fn serve(self, greeter: Greeter) -> Result<(), Error> {
        // Arc so the handler can be shared across concurrent connection
        // tasks; it is read-only for the lifetime of the process.
        let greeter = Arc::new(greeter);

        info!(addr = %self.addr, "salute listening");

        loop {
            let (stream, remote_addr) = match self.listener.accept().await {
                Ok(v) => v,
                Err(e) => {
                    error!("accept error: {e}");
                    continue;
                }
            };

            let greeter = Arc::clone(&greeter);
            // TokioIo adapts tokio's AsyncRead/AsyncWrite to the hyper IO
            // traits.
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                // `service_fn` is called once per request on the
                // connection, not once per connection.
                let svc = service_fn(move |req| {
                    let greeter = Arc::clone(&greeter);
                    async move { dispatch(greeter, req).await }
                });

                // `auto::Builder` handles HTTP/1.1 and HTTP/2 alike,
                // whatever the client negotiates.
                if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                    .serve_connection(io, svc)
                    .await
                {
                    error!(peer = %remote_addr, "connection error: {e}");
                }
            });
        }
    }
}

/// Routes one request: `GET /` gets the greeting, everything else a 404.
///
/// The error type is [`Infallible`] — every outcome is expressed as a
/// response, so hyper never sees an error from the service.
async fn dispatch(
    greeter: Arc<Greeter>,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let response = match (req.method(), req.uri().path()) {
        (&Method::GET, "/") => greeter.handle_root(),
        _ => Response::status(StatusCode::NOT_FOUND),
    };

    Ok(response.into_inner())
}
