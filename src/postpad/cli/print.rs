use chrono::Utc;
use colored::Colorize;
use postpad::commands::{CmdMessage, MessageLevel};
use postpad::config::PostpadConfig;
use postpad::format::format_date;
use postpad::model::{Post, Timestamp};
use postpad::render::{ListView, PostCard};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 16;
const INDENT: &str = "     ";
const SHORT_ID_LEN: usize = 8;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_list(view: &ListView) {
    match view {
        ListView::Empty { message } => println!("{}", message.dimmed()),
        ListView::Cards(cards) => {
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_card(card);
            }
        }
    }
}

fn print_card(card: &PostCard) {
    let idx_str = format!("{:>3}. ", card.position);
    let available = LINE_WIDTH.saturating_sub(idx_str.width() + DATE_WIDTH + 2);
    let title = truncate_to_width(&card.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()));

    println!(
        "{}{}{}  {}",
        idx_str.yellow(),
        title.bold(),
        padding,
        card.updated.dimmed()
    );

    let preview: String = card
        .preview
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if !preview.is_empty() {
        println!(
            "{}{}",
            INDENT,
            truncate_to_width(&preview, LINE_WIDTH - INDENT.len())
        );
    }

    println!(
        "{}{}  {}",
        INDENT,
        short_id(&card.id).cyan(),
        format_time_ago(&card.updated_at).dimmed()
    );
}

pub(super) fn print_full_post(post: &Post) {
    println!("{}", post.title.bold());
    println!(
        "{}",
        format!(
            "{} · created {} · updated {}",
            post.id,
            format_date(post.created_at.as_str()),
            format_date(post.updated_at.as_str())
        )
        .dimmed()
    );
    println!("--------------------------------");
    println!("{}", post.content);
}

pub(super) fn print_config(config: &PostpadConfig) {
    println!("storage-key = {}", config.storage_key);
    println!("preview-chars = {}", config.preview_chars);
    println!("file-ext = {}", config.file_ext);
}

fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: &Timestamp) -> String {
    match timestamp.instant() {
        Some(at) => {
            let duration = Utc::now().signed_duration_since(at);
            Formatter::new().convert(duration.to_std().unwrap_or_default())
        }
        None => String::new(),
    }
}
