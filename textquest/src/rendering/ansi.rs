pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_YELLOW: &str = "\x1b[33m";

/// Build an ANSI SGR sequence given fg name and attributes.
/// Unknown names are ignored; if nothing maps, returns "".
pub fn compose_sgr(fg: Option<&str>, attrs: &[&str]) -> String {
    let mut codes: Vec<&'static str> = Vec::new();

    if let Some(name) = fg
        && let Some(code) = fg_code(name)
    {
        codes.push(code);
    }
    for a in attrs {
        if let Some(code) = attr_code(a) {
            codes.push(code);
        }
    }

    if codes.is_empty() {
        return String::new();
    }

    format!("\x1b[{}m", codes.join(";"))
}

fn fg_code(name: &str) -> Option<&'static str> {
    match norm(name).as_str() {
        "black" => Some("30"),
        "red" => Some("31"),
        "green" => Some("32"),
        "yellow" => Some("33"),
        "blue" => Some("34"),
        "magenta" => Some("35"),
        "cyan" => Some("36"),
        "white" => Some("37"),
        "gray" | "grey" => Some("90"),
        "default" | "reset" => Some("39"),
        _ => None,
    }
}

fn attr_code(name: &str) -> Option<&'static str> {
    match norm(name).as_str() {
        "bold" => Some("1"),
        "dim" => Some("2"),
        "italic" => Some("3"),
        "underline" => Some("4"),
        _ => None,
    }
}

fn norm(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}
