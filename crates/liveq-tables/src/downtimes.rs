use crate::macros::table;

table! {
    /// The `downtimes` status table, one row per scheduled downtime.
    /// The `type` column is exposed as `downtime_type` because its wire
    /// name is a Rust keyword.
    pub struct Downtimes("downtimes") {
        author: String, "author", "The contact that scheduled the downtime";
        comment: String, "comment", "A comment text";
        downtime_type: Int, "type", "The type of the downtime: 0 if it is active, 1 if it is pending";
        duration: Int, "duration", "The duration of the downtime in seconds";
        end_time: Time, "end_time", "The end time of the downtime as UNIX timestamp";
        entry_time: Time, "entry_time", "The time the entry was made as UNIX timestamp";
        fixed: Int, "fixed", "A 1 if the downtime is fixed, a 0 if it is flexible";
        host_name: String, "host_name", "Host name";
        id: Int, "id", "The id of the downtime";
        is_pending: Int, "is_pending", "1 if the downtime is currently pending (not active), 0 if it is active";
        is_service: Int, "is_service", "0, if this entry is for a host, 1 if it is for a service";
        origin: Int, "origin", "A 0 if the downtime has been set by a command, a 1 if it has been configured by a rule";
        recurring: Int, "recurring", "For recurring downtimes: 1: hourly, 2: daily, 3: weekly, 4: two-weekly, 5: four-weekly. Otherwise 0";
        service_description: String, "service_description", "Service description";
        start_time: Time, "start_time", "The start time of the downtime as UNIX timestamp";
        triggered_by: Int, "triggered_by", "The id of the downtime this downtime was triggered by or 0 if it was not triggered by another downtime";
    }
}
