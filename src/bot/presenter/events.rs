use crate::{
    model::event::{describe_offset, ReminderEvent},
    service::event::schedule::UpcomingEvent,
};

/// `!events` listing.
pub fn events_text(upcoming: &[UpcomingEvent]) -> String {
    if upcoming.is_empty() {
        return "📅 No upcoming events.".to_string();
    }

    let mut lines = vec!["📅 **Upcoming events**".to_string()];

    for item in upcoming {
        let event = &item.event;
        let start = event.start_time.timestamp();
        lines.push(format!(
            "**{}: {}** <t:{}:F> (<t:{}:R>) in <#{}>",
            event.event_type.label(),
            event.event_name,
            start,
            start,
            event.channel_id
        ));

        let next = match item.next_reminder {
            Some(slot) => format!(
                "   ⏰ next reminder {} before, <t:{}:R>",
                describe_offset(slot.offset_seconds),
                slot.fire_time.timestamp()
            ),
            None => "   ✅ all reminders sent".to_string(),
        };
        lines.push(next);
    }

    lines.join("\n")
}

/// Reply to a successful `!add`.
pub fn event_added_text(event: &ReminderEvent) -> String {
    let offsets: Vec<String> = event
        .event_type
        .offsets()
        .iter()
        .map(|&offset| describe_offset(offset))
        .collect();

    format!(
        "✅ Added **{}: {}** at <t:{}:F> in <#{}>. Reminders: {} before.",
        event.event_type.label(),
        event.event_name,
        event.start_time.timestamp(),
        event.channel_id,
        offsets.join(", ")
    )
}
