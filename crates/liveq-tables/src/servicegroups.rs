use crate::macros::table;

table! {
    /// The `servicegroups` status table, one row per configured service
    /// group.
    pub struct Servicegroups("servicegroups") {
        alias: String, "alias", "An alias of the service group";
        members: List, "members", "A list of all members of the service group as host/service pairs";
        name: String, "name", "Name of the service group";
        num_services: Int, "num_services", "The total number of services in the group";
        num_services_crit: Int, "num_services_crit", "The number of services in the group that are CRIT";
        num_services_ok: Int, "num_services_ok", "The number of services in the group that are OK";
        num_services_pending: Int, "num_services_pending", "The number of services in the group that are PENDING";
        num_services_unknown: Int, "num_services_unknown", "The number of services in the group that are UNKNOWN";
        num_services_warn: Int, "num_services_warn", "The number of services in the group that are WARN";
        worst_service_state: Int, "worst_service_state", "The worst soft state of all of the groups services (OK <= WARN <= UNKNOWN <= CRIT)";
    }
}
