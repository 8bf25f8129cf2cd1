//! Character rolls for server rendered pages.
//!
//! A [`binder::Binder`] scans a [`binder::Page`] for roll triggers and
//! attaches click handlers; each click builds a [`request::Request`] from
//! the trigger's data attributes and runs it through an
//! [`invoker::Invoker`], which issues one GET through a [`fetch::Fetch`]
//! and writes the [`outcome::Outcome`] marker into the trigger's
//! [`output::Output`].

pub mod binder;
pub mod config;
pub mod error;
pub mod fetch;
pub mod invoker;
pub mod outcome;
pub mod output;
pub mod parser;
pub mod request;
pub mod sheet;

pub use binder::Binder;
pub use config::Config;
pub use invoker::Invoker;
pub use outcome::Outcome;
pub use request::Request;
