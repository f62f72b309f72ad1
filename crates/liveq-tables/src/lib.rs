//! Generated-style table definitions for the Livestatus status and
//! history tables, plus the registry the filter compiler resolves against.
#![warn(unreachable_pub)]

pub(crate) mod macros;

pub mod downtimes;
pub mod hostgroups;
pub mod hosts;
pub mod servicegroups;
pub mod services;
pub mod statehist;


pub use downtimes::Downtimes;
pub use hostgroups::Hostgroups;
pub use hosts::Hosts;
pub use servicegroups::Servicegroups;
pub use services::Services;
pub use statehist::Statehist;

// The macro-generated code reaches these through `$crate`.
pub use liveq_core::{
    model::{ColType, Column, ColumnModel, TableKind, TableModel},
    registry::TableRegistry,
};

///
/// REGISTRY
///
/// All shipped tables, in canonical-name order.
///

pub static REGISTRY: TableRegistry = TableRegistry::new(&[
    Downtimes::MODEL,
    Hostgroups::MODEL,
    Hosts::MODEL,
    Servicegroups::MODEL,
    Services::MODEL,
    Statehist::MODEL,
]);
