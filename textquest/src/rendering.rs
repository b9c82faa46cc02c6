pub mod ansi;

use crate::models::room::Room;
use once_cell::sync::Lazy;
use regex::Regex;

pub const ITEMS_HEADING: &str = "In the room you can see the following items:";
pub const MIN_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub room_body: String,
    pub items_heading: String,
    pub item: String,
    pub reset: String,
}

impl Theme {
    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            room_body: String::new(),
            items_heading: String::new(),
            item: String::new(),
            reset: String::new(),
        }
    }

    /// 16-color safe palette
    pub fn ansi16() -> Self {
        Self {
            room_body: ansi::compose_sgr(Some("white"), &[]),
            items_heading: ansi::compose_sgr(Some("green"), &["bold"]),
            item: ansi::FG_CYAN.to_string(),
            reset: ansi::RESET.to_string(),
        }
    }

    pub fn for_color(color: bool) -> Self {
        if color { Self::ansi16() } else { Self::plain() }
    }

    pub fn is_colored(&self) -> bool {
        !self.reset.is_empty()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}

static ANSI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

/// Compute visible length ignoring ANSI escape codes
pub fn visible_len(s: &str) -> usize {
    ANSI_RE.replace_all(s, "").chars().count()
}

/// ANSI-aware greedy word wrap. Explicit newlines are kept; words longer than
/// the width get a line of their own.
pub fn wrap_ansi(text: &str, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let mut out = String::with_capacity(text.len());

    for (li, line) in text.lines().enumerate() {
        if li > 0 {
            out.push('\n');
        }

        let mut line_len = 0usize;
        for word in line.split_whitespace() {
            let wlen = visible_len(word);
            if line_len == 0 {
                out.push_str(word);
                line_len = wlen;
            } else if line_len + 1 + wlen > width {
                out.push('\n');
                out.push_str(word);
                line_len = wlen;
            } else {
                out.push(' ');
                out.push_str(word);
                line_len += 1 + wlen;
            }
        }
    }
    out
}

/// The room as the player sees it: description, then any items lying around.
/// Fixed objects are left out; they only show up when examined.
pub fn render_room(theme: &Theme, width: usize, room: &Room) -> String {
    let reset = &theme.reset;
    let body = wrap_ansi(&room.description, width);
    let mut out = format!("{}{body}{reset}", theme.room_body);

    if room.item_count() > 0 {
        out.push('\n');
        out.push_str(&format!("{}{ITEMS_HEADING}{reset}", theme.items_heading));
        for item in room.items() {
            out.push('\n');
            out.push_str(&format!("{}{}{reset}", theme.item, item.name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::{Item, Object};

    #[test]
    fn visible_len_skips_escapes() {
        assert_eq!(visible_len("\x1b[36mkey\x1b[0m"), 3);
        assert_eq!(visible_len("plain"), 5);
    }

    #[test]
    fn wraps_at_width() {
        let text = "aaaa bbbb cccc dddd eeee ffff";
        assert_eq!(wrap_ansi(text, 20), "aaaa bbbb cccc dddd\neeee ffff");
    }

    #[test]
    fn wrap_keeps_explicit_newlines() {
        assert_eq!(wrap_ansi("first line\nsecond   line", 80), "first line\nsecond line");
    }

    #[test]
    fn plain_room_with_items() {
        let mut room = Room::new("A plain white room.");
        room.add_item(Item::new("note", "A note"));
        room.add_item(Item::new("pen", "A pen"));
        room.add_object(Object::new("door", "A door"));

        assert_eq!(
            render_room(&Theme::plain(), 80, &room),
            "A plain white room.\nIn the room you can see the following items:\nnote\npen"
        );
    }

    #[test]
    fn empty_room_has_no_item_heading() {
        let room = Room::new("Nothing here.");
        assert_eq!(render_room(&Theme::plain(), 80, &room), "Nothing here.");
    }

    #[test]
    fn colored_room_resets() {
        let mut room = Room::new("Dark.");
        room.add_item(Item::new("torch", "A torch"));
        let s = render_room(&Theme::ansi16(), 80, &room);
        assert!(s.contains("\x1b[36mtorch\x1b[0m"));
        assert!(s.ends_with(ansi::RESET));
    }
}
