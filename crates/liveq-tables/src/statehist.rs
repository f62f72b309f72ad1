use crate::macros::table;

table! {
    /// The `statehist` history table, one row per state interval of a host
    /// or service within the queried timeframe.
    pub struct Statehist("statehist") {
        debug_info: String, "debug_info", "Debug information";
        duration: Int, "duration", "Duration of state (until - from)";
        duration_critical: Int, "duration_critical", "CRITICAL duration of state (until - from)";
        duration_ok: Int, "duration_ok", "OK duration of state ( until - from )";
        duration_part: Float, "duration_part", "Duration part in regard to the query timeframe";
        duration_part_critical: Float, "duration_part_critical", "CRITICAL duration part in regard to the query timeframe";
        duration_part_ok: Float, "duration_part_ok", "OK duration part in regard to the query timeframe";
        duration_part_unknown: Float, "duration_part_unknown", "UNKNOWN duration part in regard to the query timeframe";
        duration_part_unmonitored: Float, "duration_part_unmonitored", "UNMONITORED duration part in regard to the query timeframe";
        duration_part_warning: Float, "duration_part_warning", "WARNING duration part in regard to the query timeframe";
        duration_unknown: Int, "duration_unknown", "UNKNOWN duration of state (until - from)";
        duration_unmonitored: Int, "duration_unmonitored", "UNMONITORED duration of state (until - from)";
        duration_warning: Int, "duration_warning", "WARNING duration of state (until - from)";
        from: Time, "from", "Start time of state (seconds since 1/1/1970)";
        host_down: Int, "host_down", "Shows if the host of this service is down";
        host_name: String, "host_name", "Host name";
        in_downtime: Int, "in_downtime", "Shows if the host or service is in downtime";
        in_host_downtime: Int, "in_host_downtime", "Shows if the host of this service is in downtime";
        in_notification_period: Int, "in_notification_period", "Shows if the host or service is within its notification period";
        in_service_period: Int, "in_service_period", "Shows if the host or service is within its service period";
        is_flapping: Int, "is_flapping", "Shows if the host or service is flapping";
        lineno: Int, "lineno", "The number of the line in the log file";
        log_output: String, "log_output", "Logfile output relevant for this state";
        long_log_output: String, "long_log_output", "Complete logfile output relevant for this state";
        notification_period: String, "notification_period", "The notification period of the host or service in question";
        service_description: String, "service_description", "Service description";
        state: Int, "state", "The state of the host or service in question - OK(0) / WARNING(1) / CRITICAL(2) / UNKNOWN(3) / UNMONITORED(-1)";
        time: Time, "time", "Time of the log event (seconds since 1/1/1970)";
        until: Time, "until", "End time of state (seconds since 1/1/1970)";
    }
}
