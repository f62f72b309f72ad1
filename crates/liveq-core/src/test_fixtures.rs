//! Hand-rolled table fixtures for core tests.
//!
//! `liveq-tables` ships the real definitions; the core tests use a small
//! standalone registry so the compiler and builder are exercised without a
//! dependency cycle.

use crate::{
    model::{ColType, ColumnModel, TableModel},
    registry::TableRegistry,
};

static HOSTS: TableModel = TableModel::new(
    "hosts",
    &[
        ColumnModel::new("name", ColType::String, "Host name"),
        ColumnModel::new("address", ColType::String, "IP address"),
        ColumnModel::new("state", ColType::Int, "The current state of the host"),
        ColumnModel::new("last_check", ColType::Time, "Time of the last check"),
        ColumnModel::new("groups", ColType::List, "Host groups of this host"),
    ],
);

static SERVICES: TableModel = TableModel::new(
    "services",
    &[
        ColumnModel::new("description", ColType::String, "Service description"),
        ColumnModel::new("host_name", ColType::String, "Host name"),
        ColumnModel::new("state", ColType::Int, "The current state of the service"),
    ],
);

static REGISTRY: TableRegistry = TableRegistry::new(&[&HOSTS, &SERVICES]);

pub(crate) fn hosts() -> &'static TableModel {
    &HOSTS
}

pub(crate) fn services() -> &'static TableModel {
    &SERVICES
}

pub(crate) fn registry() -> &'static TableRegistry {
    &REGISTRY
}
