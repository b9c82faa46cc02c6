use crate::rendering::ansi;

pub const BANNER: &str = r#" _            _
| |_ _____  _| |_ __ _ _   _  ___  ___| |_
| __/ _ \ \/ / __/ _` | | | |/ _ \/ __| __|
| ||  __/>  <| || (_| | |_| |  __/\__ \ |_
 \__\___/_/\_\\__\__, |\__,_|\___||___/\__|
                    |_|
"#;

pub const INSTRUCTIONS: &str = r#"
Find your way around by typing commands, one per line.
------------------------------------------------
  go <direction>      Move north, south, east or west (also: move)
  get <item>          Pick something up (also: collect, grab)
  examine <thing>     Look at an item, an object, or the room (also: describe, inspect)
  inventory           List what you are carrying (also: bag)
  help                Show this help
  quit                Leave the game
------------------------------------------------
"#;

pub fn help_text(color: bool) -> String {
    if !color {
        return format!("Available commands{INSTRUCTIONS}");
    }
    format!(
        "{bold}{fg_cyan}Available commands{reset}{INSTRUCTIONS}",
        bold = ansi::BOLD,
        fg_cyan = ansi::FG_CYAN,
        reset = ansi::RESET,
    )
}
