use crate::macros::table;

table! {
    /// The `hosts` status table, one row per monitored host.
    pub struct Hosts("hosts") {
        accept_passive_checks: Int, "accept_passive_checks", "Whether passive host checks are accepted (0/1)";
        acknowledged: Int, "acknowledged", "Whether the current problem has been acknowledged (0/1)";
        acknowledgement_type: Int, "acknowledgement_type", "Type of acknowledgement (0: none, 1: normal, 2: sticky)";
        active_checks_enabled: Int, "active_checks_enabled", "Whether active checks of the object are enabled (0/1)";
        address: String, "address", "IP address";
        alias: String, "alias", "An alias name for the host";
        check_command: String, "check_command", "Logical command name for active checks";
        check_interval: Float, "check_interval", "Number of basic interval lengths between two scheduled checks";
        check_period: String, "check_period", "Time period in which this object will be checked. If empty then the check will always be executed.";
        check_type: Int, "check_type", "Type of check (0: active, 1: passive)";
        checks_enabled: Int, "checks_enabled", "Whether checks of the object are enabled (0/1)";
        comments: List, "comments", "A list of the ids of all comments";
        contact_groups: List, "contact_groups", "A list of all contact groups this object is in";
        contacts: List, "contacts", "A list of all contacts of this object";
        current_attempt: Int, "current_attempt", "Number of the current check attempts";
        custom_variables: Dict, "custom_variables", "A dictionary of the custom variables";
        display_name: String, "display_name", "Optional display name";
        downtimes: List, "downtimes", "A list of the ids of all scheduled downtimes of this object";
        execution_time: Float, "execution_time", "Time the check needed for execution";
        filename: String, "filename", "The value of the custom variable FILENAME";
        groups: List, "groups", "A list of all host groups this object is in";
        hard_state: Int, "hard_state", "The effective hard state of this object";
        has_been_checked: Int, "has_been_checked", "Whether a check has already been executed (0/1)";
        in_check_period: Int, "in_check_period", "Whether this object is currently in its check period (0/1)";
        in_notification_period: Int, "in_notification_period", "Whether this object is currently in its notification period (0/1)";
        in_service_period: Int, "in_service_period", "Whether this object is currently in its service period (0/1)";
        is_executing: Int, "is_executing", "is there a check currently running (0/1)";
        is_flapping: Int, "is_flapping", "Whether the state is flapping (0/1)";
        labels: Dict, "labels", "A dictionary of the labels";
        last_check: Time, "last_check", "Time of the last check (Unix timestamp)";
        last_hard_state: Int, "last_hard_state", "Last hard state";
        last_hard_state_change: Time, "last_hard_state_change", "Time of the last hard state change - soft or hard (Unix timestamp)";
        last_notification: Time, "last_notification", "Time of the last notification (Unix timestamp)";
        last_state: Int, "last_state", "State before last state change";
        last_state_change: Time, "last_state_change", "Time of the last state change - soft or hard (Unix timestamp)";
        last_time_down: Time, "last_time_down", "The last time the host was DOWN (Unix timestamp)";
        last_time_unreachable: Time, "last_time_unreachable", "The last time the host was UNREACHABLE (Unix timestamp)";
        last_time_up: Time, "last_time_up", "The last time the host was UP (Unix timestamp)";
        latency: Float, "latency", "Time difference between scheduled check time and actual check time";
        long_plugin_output: String, "long_plugin_output", "Long (extra) output of the last check";
        max_check_attempts: Int, "max_check_attempts", "Maximum attempts for active checks before a hard state";
        name: String, "name", "Host name";
        next_check: Time, "next_check", "Scheduled time for the next check (Unix timestamp)";
        notes: String, "notes", "Optional notes for this object, with macros not expanded";
        notifications_enabled: Int, "notifications_enabled", "Whether notifications of the host are enabled (0/1)";
        num_services: Int, "num_services", "The total number of services of the host";
        num_services_crit: Int, "num_services_crit", "The number of the host's services with the soft state CRIT";
        num_services_ok: Int, "num_services_ok", "The number of the host's services with the soft state OK";
        num_services_pending: Int, "num_services_pending", "The number of the host's services which have not been checked yet (pending)";
        num_services_unknown: Int, "num_services_unknown", "The number of the host's services with the soft state UNKNOWN";
        num_services_warn: Int, "num_services_warn", "The number of the host's services with the soft state WARN";
        perf_data: String, "perf_data", "Optional performance data of the last check";
        plugin_output: String, "plugin_output", "Output of the last check";
        scheduled_downtime_depth: Int, "scheduled_downtime_depth", "The number of downtimes this object is currently in";
        staleness: Float, "staleness", "The staleness of this object";
        state: Int, "state", "The current state of the object, for hosts: 0/1/2 for UP/DOWN/UNREACH, for services: 0/1/2/3 for OK/WARN/CRIT/UNKNOWN";
        state_type: Int, "state_type", "Type of the current state (0: soft, 1: hard)";
        tags: Dict, "tags", "A dictionary of the tags";
        total_services: Int, "total_services", "The total number of services of the host";
        worst_service_state: Int, "worst_service_state", "The worst soft state of all of the host's services (OK <= WARN <= UNKNOWN <= CRIT)";
    }
}
