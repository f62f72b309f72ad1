use crate::macros::table;

table! {
    /// The `hostgroups` status table, one row per configured host group.
    pub struct Hostgroups("hostgroups") {
        alias: String, "alias", "An alias of the host group";
        members: List, "members", "A list of all host names that are members of the host group";
        name: String, "name", "Name of the host group";
        num_hosts: Int, "num_hosts", "The total number of hosts in the group";
        num_hosts_down: Int, "num_hosts_down", "The number of hosts in the group that are down";
        num_hosts_pending: Int, "num_hosts_pending", "The number of hosts in the group that are pending";
        num_hosts_unreach: Int, "num_hosts_unreach", "The number of hosts in the group that are unreachable";
        num_hosts_up: Int, "num_hosts_up", "The number of hosts in the group that are up";
        num_services: Int, "num_services", "The total number of services of hosts in this group";
        num_services_crit: Int, "num_services_crit", "The total number of services with the state CRIT of hosts in this group";
        num_services_ok: Int, "num_services_ok", "The total number of services with the state OK of hosts in this group";
        num_services_pending: Int, "num_services_pending", "The total number of services with the state Pending of hosts in this group";
        num_services_unknown: Int, "num_services_unknown", "The total number of services with the state UNKNOWN of hosts in this group";
        num_services_warn: Int, "num_services_warn", "The total number of services with the state WARN of hosts in this group";
        worst_host_state: Int, "worst_host_state", "The worst state of all of the groups' hosts (UP <= UNREACHABLE <= DOWN)";
        worst_service_state: Int, "worst_service_state", "The worst state of all services that belong to a host of this group (OK <= WARN <= UNKNOWN <= CRIT)";
    }
}
