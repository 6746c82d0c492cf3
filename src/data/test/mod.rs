mod event;
mod sent_ping;
