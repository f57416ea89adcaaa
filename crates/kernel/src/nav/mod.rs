//! Site navigation.
//!
//! The kernel never owns the URL scheme of a rendering layer; it only hands
//! out item ids. The registry here is the routing collaborator that maps
//! those ids to detail paths and request paths back to sections.

mod registry;

pub use registry::{MenuState, NavRegistry, NavRoute, RouteMatch, Section};
