//! # salute
//!
//! A tiny HTTP service with one job: answer `GET /` with a greeting naming
//! the cloud it runs on. Nothing more. Nothing less.
//!
//! The provider label comes from the `CLOUD_PROVIDER` environment variable,
//! resolved once at startup. Unset or empty falls back to `Unknown`:
//!
//! ```text
//! $ CLOUD_PROVIDER=AWS salute &
//! $ curl http://localhost/
//! Hello, World! I am running on AWS!
//! ```
//!
//! Everything else — TLS, rate limiting, auth, extra routes — belongs to
//! whatever sits in front of this process. The service binds, serves, and
//! stops when the operator kills it.
//!
//! ## Wiring
//!
//! [`Config`] resolves the environment once; [`Greeter`] is built from it
//! and never reads the environment itself, so request handling stays pure
//! and tests never have to mutate process state:
//!
//! ```rust,no_run
//! use salute::{Config, Greeter, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env();
//!     let greeter = Greeter::new(&config);
//!
//!     Server::bind(config.addr)
//!         .await
//!         .expect("bind")
//!         .serve(greeter)
//!         .await
//!         .expect("serve");
//! }
//! ```

mod config;
mod error;
mod greeting;
mod response;
mod server;

pub use config::{Config, DEFAULT_PROVIDER, PROVIDER_VAR};
pub use error::Error;
pub use greeting::{Greeter, greeting};
pub use response::Response;
pub use server::Server;
