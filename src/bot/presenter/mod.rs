//! Formatting of service results for Discord and chunked delivery.
//!
//! Discord rejects messages over 2000 characters and embeds over 25 fields.
//! Text is split only between lines; embed fields are spread over as many
//! embeds as needed. Sending stops at the first failed chunk and the error
//! is returned to the command handler, which reports it once.

pub mod events;
pub mod report;

#[cfg(test)]
mod test;

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};

use crate::error::AppError;

/// Discord message content limit, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

/// Discord embed field limit.
pub const EMBED_FIELD_LIMIT: usize = 25;

/// Splits text into chunks of at most `limit` characters.
///
/// Chunks end at line boundaries. A single line longer than `limit` is the
/// only exception and is split at character boundaries.
pub fn chunk_lines(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.lines() {
        let line_len = line.chars().count();

        if line_len > limit {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = line.chars().collect();
            chunks.extend(chars.chunks(limit).map(|piece| piece.iter().collect::<String>()));
            continue;
        }

        let separator = usize::from(!current.is_empty());
        if current_len + separator + line_len > limit {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Groups items into pages of at most `size`.
pub fn paginate<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    let size = size.max(1);
    let mut pages = Vec::new();
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        pages.push(items.by_ref().take(size).collect());
    }

    pages
}

/// An embed field as `(name, value, inline)`.
pub type EmbedField = (String, String, bool);

/// Builds embeds holding all fields, 25 per embed.
///
/// Embeds after the first carry a "(continued)" title.
pub fn field_embeds(title: &str, description: &str, fields: Vec<EmbedField>) -> Vec<CreateEmbed> {
    let pages = paginate(fields, EMBED_FIELD_LIMIT);
    if pages.is_empty() {
        return vec![CreateEmbed::new().title(title).description(description)];
    }

    pages
        .into_iter()
        .enumerate()
        .map(|(index, page)| {
            let embed = if index == 0 {
                CreateEmbed::new().title(title).description(description)
            } else {
                CreateEmbed::new().title(format!("{} (continued)", title))
            };
            embed.fields(page)
        })
        .collect()
}

/// Posts text in line-bounded chunks, in order.
///
/// # Returns
/// - `Ok(())` - Every chunk posted
/// - `Err(AppError)` - First failed chunk; later chunks are not sent
pub async fn send_chunked(http: &Http, channel_id: ChannelId, text: &str) -> Result<(), AppError> {
    for chunk in chunk_lines(text, MESSAGE_LIMIT) {
        channel_id.say(http, chunk).await?;
    }
    Ok(())
}

/// Posts embeds one per message, stopping at the first failure.
pub async fn send_embeds(http: &Http, channel_id: ChannelId, embeds: Vec<CreateEmbed>) -> Result<(), AppError> {
    for embed in embeds {
        channel_id
            .send_message(http, CreateMessage::new().embed(embed))
            .await?;
    }
    Ok(())
}

/// Formats an integer with `,` thousands separators.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a percentage with two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
