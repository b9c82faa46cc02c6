use crate::banner::INSTRUCTIONS;
use crate::commands::{CmdCtx, Flow, process_command};
use crate::error::{GameResult, WorldResult};
use crate::models::item::Item;
use crate::models::player::Player;
use crate::models::room::RoomId;
use crate::models::world::World;
use crate::output::OutputHandle;
use crate::output::sink::ClientSink;
use crate::rendering::{Theme, render_room};
use indexmap::IndexMap;
use std::io::BufRead;

pub const DEFAULT_END_MESSAGE: &str = "Well done, you have completed the game!";
pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_WIDTH: usize = 80;

/// Read-only view of the state a win condition may look at.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    room: RoomId,
    room_key: Option<&'a str>,
    inventory: &'a IndexMap<String, Item>,
}

impl<'a> Snapshot<'a> {
    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn room_key(&self) -> Option<&'a str> {
        self.room_key
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains_key(name)
    }

    pub fn items(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.inventory.keys().map(String::as_str)
    }

    pub fn item_count(&self) -> usize {
        self.inventory.len()
    }
}

pub trait WinCondition {
    fn is_met(&self, snapshot: &Snapshot<'_>) -> bool;
}

/// A win condition that never holds; the game only ends when the player quits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl WinCondition for Never {
    fn is_met(&self, _snapshot: &Snapshot<'_>) -> bool {
        false
    }
}

/// Wraps a closure as a win condition.
pub struct FnCondition<F>(F);

impl<F> WinCondition for FnCondition<F>
where
    F: Fn(&Snapshot<'_>) -> bool,
{
    fn is_met(&self, snapshot: &Snapshot<'_>) -> bool {
        (self.0)(snapshot)
    }
}

pub fn win_when<F>(f: F) -> FnCondition<F>
where
    F: Fn(&Snapshot<'_>) -> bool,
{
    FnCondition(f)
}

/// Collect every listed item, then (if a room is set) stand in that room.
/// A goal with neither items nor a room is met immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub items: Vec<String>,
    pub room: Option<RoomId>,
}

impl WinCondition for Goal {
    fn is_met(&self, snapshot: &Snapshot<'_>) -> bool {
        self.items.iter().all(|i| snapshot.has_item(i)) && self.room.is_none_or(|r| r == snapshot.room())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Won,
    /// The player quit or the input ran dry.
    Abandoned,
}

pub struct Game {
    world: World,
    player: Player,
    win: Box<dyn WinCondition>,
    start_message: String,
    end_message: String,
    theme: Theme,
    width: usize,
    prompt: String,
    state: GameState,
    announced: bool,
}

impl Game {
    /// Places a new player in `start`. The world must already be built.
    pub fn new(world: World, start: RoomId, win: impl WinCondition + 'static) -> WorldResult<Self> {
        world.get(start)?;

        Ok(Self {
            world,
            player: Player::new(start),
            win: Box::new(win),
            start_message: String::new(),
            end_message: DEFAULT_END_MESSAGE.to_string(),
            theme: Theme::plain(),
            width: DEFAULT_WIDTH,
            prompt: DEFAULT_PROMPT.to_string(),
            state: GameState::Running,
            announced: false,
        })
    }

    pub fn with_start_message(mut self, msg: impl Into<String>) -> Self {
        self.start_message = msg.into();
        self
    }

    pub fn with_end_message(mut self, msg: impl Into<String>) -> Self {
        self.end_message = msg.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let room = self.player.current_room();
        Snapshot {
            room,
            room_key: self.world.room(room).and_then(|r| r.key.as_deref()),
            inventory: self.player.inventory(),
        }
    }

    /// Evaluates the win condition, moving Running -> Won when it holds.
    pub fn check_win(&mut self) -> bool {
        if self.state == GameState::Running && self.win.is_met(&self.snapshot()) {
            tracing::info!(items = self.player.item_count(), "game won");
            self.state = GameState::Won;
        }
        self.state == GameState::Won
    }

    /// Banner, instructions, start message and the starting room.
    pub fn start(&mut self, out: &mut OutputHandle) {
        tracing::info!(rooms = self.world.len(), start = %self.player.current_room(), "game started");

        out.system(INSTRUCTIONS.trim_matches('\n'));
        if !self.start_message.is_empty() {
            out.line(self.start_message.clone());
        }
        if let Some(room) = self.world.room(self.player.current_room()) {
            out.room_view(render_room(&self.theme, self.width, room));
        }
    }

    /// Parses and executes one command line.
    pub fn process_command(&mut self, raw: &str, out: &mut OutputHandle) -> Flow {
        let mut ctx = CmdCtx {
            world: &mut self.world,
            player: &mut self.player,
            theme: &self.theme,
            width: self.width,
            output: out,
        };
        let flow = process_command(raw, &mut ctx);
        if flow == Flow::Quit {
            tracing::info!("player quit");
            self.state = GameState::Abandoned;
        }
        flow
    }

    /// Blocks for one line of input and executes it. End of input abandons
    /// the game. Invalid UTF-8 is decoded lossily, never an error.
    pub fn read_command<R>(&mut self, input: &mut R, out: &mut OutputHandle) -> GameResult<Flow>
    where
        R: BufRead + ?Sized,
    {
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::info!("input closed");
            self.state = GameState::Abandoned;
            return Ok(Flow::Quit);
        }
        // bad bytes become U+FFFD
        let line = String::from_utf8_lossy(&buf);
        Ok(self.process_command(&line, out))
    }

    /// Emits the closing message for a terminal state, at most once.
    pub fn finish(&mut self, out: &mut OutputHandle) {
        if self.announced {
            return;
        }
        match self.state {
            GameState::Running => return,
            GameState::Won => out.line(self.end_message.clone()),
            GameState::Abandoned => out.system("Goodbye!"),
        }
        self.announced = true;
    }

    /// Runs the command loop until the game is won or abandoned.
    pub fn run<R, S>(&mut self, mut input: R, sink: &mut S) -> GameResult<GameState>
    where
        R: BufRead,
        S: ClientSink + ?Sized,
    {
        let mut out = OutputHandle::new();
        if self.state == GameState::Running {
            self.start(&mut out);
            out.flush(sink)?;
        }

        while self.state == GameState::Running {
            if self.check_win() {
                break;
            }
            out.prompt(self.prompt.clone());
            out.flush(sink)?;

            self.read_command(&mut input, &mut out)?;
            out.flush(sink)?;
        }

        self.finish(&mut out);
        out.flush(sink)?;
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::room::Room;

    fn one_room() -> (World, RoomId) {
        let mut world = World::new();
        let id = world.add_room(Room::with_key("cell", "A cell")).unwrap();
        world.room_mut(id).unwrap().add_item(Item::new("spoon", "A bent spoon"));
        (world, id)
    }

    #[test]
    fn rejects_foreign_start_room() {
        let (world, _) = one_room();
        assert!(Game::new(world, RoomId(7), Never).is_err());
    }

    #[test]
    fn snapshot_reflects_player() {
        let (world, id) = one_room();
        let mut game = Game::new(world, id, Never).unwrap();
        let mut out = OutputHandle::new();
        game.process_command("get spoon", &mut out);

        let snap = game.snapshot();
        assert_eq!(snap.room(), id);
        assert_eq!(snap.room_key(), Some("cell"));
        assert!(snap.has_item("spoon"));
        assert_eq!(snap.items().collect::<Vec<_>>(), vec!["spoon"]);
    }

    #[test]
    fn goal_needs_items_and_room() {
        let (world, id) = one_room();
        let goal = Goal {
            items: vec!["spoon".to_string()],
            room: Some(id),
        };
        let mut game = Game::new(world, id, goal).unwrap();
        assert!(!game.check_win());

        let mut out = OutputHandle::new();
        game.process_command("grab spoon", &mut out);
        assert!(game.check_win());
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn closure_conditions() {
        let (world, id) = one_room();
        let mut game = Game::new(world, id, win_when(|s| s.item_count() >= 1)).unwrap();
        assert!(!game.check_win());

        let mut out = OutputHandle::new();
        game.process_command("collect spoon", &mut out);
        assert!(game.check_win());
    }

    #[test]
    fn finish_announces_once() {
        let (world, id) = one_room();
        let mut game = Game::new(world, id, win_when(|_| true)).unwrap();
        let mut out = OutputHandle::new();

        game.finish(&mut out);
        assert!(out.is_empty(), "nothing to announce while running");

        game.check_win();
        game.finish(&mut out);
        game.finish(&mut out);
        assert_eq!(out.take(), vec![crate::output::OutFrame::Line(DEFAULT_END_MESSAGE.to_string())]);
    }

    #[test]
    fn quit_abandons() {
        let (world, id) = one_room();
        let mut game = Game::new(world, id, Never).unwrap();
        let mut out = OutputHandle::new();

        assert_eq!(game.process_command("quit", &mut out), Flow::Quit);
        assert_eq!(game.state(), GameState::Abandoned);
    }
}
