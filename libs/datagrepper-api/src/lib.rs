//! Datagrepper client for per-package activity feeds.
//!
//! [`DgConnector`] builds a `/raw` query for one package, fetches it and
//! flattens the response into display-ready [`Message`]s.

pub mod connector;
pub mod error;
pub mod package;
pub mod query;
pub mod types;

pub use connector::{DEFAULT_ENDPOINT, DgConnector};
pub use error::{ConnectorError, UNAVAILABLE_MESSAGE};
pub use package::package_from_path;
pub use query::{EXCLUDED_TOPICS, META_FIELDS, QueryOptions};
pub use types::{DatagrepperResponse, Message, MessagePage, Meta, RawMessage};
