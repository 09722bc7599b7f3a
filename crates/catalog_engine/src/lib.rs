//! Catalog engine: remote catalog client and background request execution.
mod client;
mod engine;
mod request;
mod types;
mod wire;

pub use client::{CatalogClient, ClientSettings, ReqwestCatalogClient};
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use request::{CatalogRequest, SortDirection};
pub use types::{CatalogResponse, EngineEvent, FailureKind, FetchError, RequestId};
pub use wire::{Genre, Movie};
