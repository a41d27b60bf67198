//! Pico Arcade entry point
//!
//! Headless demo shell: drives the engine on a simulated 60 fps clock with a
//! scripted player, so every screen of both games gets exercised end to end.
//! Real shells bring their own clock, devices and renderer; this one logs a
//! HUD line per second, optionally streams render snapshots as JSON lines on
//! stdout, and prints the session results on exit.

use pico_arcade::consts::*;
use pico_arcade::sim::{
    ArcadeState, Arrow, InputSource, MemoryPhase, MemorySnapshot, Mode, NoDevice, RenderSnapshot,
    TickInput, TitanicPhase, TitanicSnapshot,
};

/// Command line options (all optional; the default run is deterministic)
struct Options {
    seed: u64,
    seconds: u64,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 7,
            seconds: 90,
            json: false,
        }
    }
}

fn parse_args() -> Result<Options, String> {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                opts.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--seconds" => {
                let value = args.next().ok_or("--seconds needs a value")?;
                opts.seconds = value.parse().map_err(|_| format!("bad seconds: {value}"))?;
            }
            "--json" => opts.json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

fn main() {
    env_logger::init();

    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: pico-arcade [--seed N] [--seconds N] [--json]");
            std::process::exit(2);
        }
    };

    log::info!(
        "pico-arcade demo starting: seed {}, {}s simulated",
        opts.seed,
        opts.seconds
    );

    let mut arcade = ArcadeState::new(opts.seed);
    let mut pilot = Pilot::new();
    // No physical pad in the demo; its absence reads all-released
    let mut pad = NoDevice;

    let total_ticks = opts.seconds * 60;
    let mut last_ms = 0u64;
    for tick_no in 0..total_ticks {
        // Simulated 60 fps monotonic clock; dt normalized from the ms delta
        let now_ms = (tick_no + 1) * 50 / 3;
        let dt = (now_ms - last_ms) as f32 / FRAME_MS;
        last_ms = now_ms;
        let snap = RenderSnapshot::capture(&arcade, now_ms);

        if opts.json {
            match serde_json::to_string(&snap) {
                Ok(line) => println!("{line}"),
                Err(err) => log::error!("snapshot serialization failed: {err}"),
            }
        }

        let keys = pilot.decide(&snap);
        let (pad_up, pad_down) = pad.poll();
        let input = TickInput {
            up: keys.up || pad_up,
            down: keys.down || pad_down,
            confirm: keys.confirm,
            back: keys.back,
        };
        arcade.tick(&input, now_ms, dt);

        if tick_no % 60 == 0 {
            log::info!("t={:>3}s {}", tick_no / 60, hud(&arcade));
        }
        if pilot.finished() {
            log::info!("demo script complete at t={}ms", now_ms);
            break;
        }
    }

    report(&arcade);
}

fn hud(arcade: &ArcadeState) -> String {
    match arcade.mode {
        Mode::Select => "picking a game".to_string(),
        Mode::Titanic => format!(
            "icebergs: {:?}, score {}, lives {}, level {}",
            arcade.titanic.phase,
            arcade.titanic.score,
            arcade.titanic.lives,
            arcade.titanic.level()
        ),
        Mode::Memory => format!(
            "memory: {:?}, level {}, best {}",
            arcade.memory.phase, arcade.memory.level, arcade.memory.best_level
        ),
    }
}

fn report(arcade: &ArcadeState) {
    println!("session results");
    println!("  memory best level: {}", arcade.memory.best_level);
    if arcade.scores.is_empty() {
        println!("  no iceberg runs recorded");
        return;
    }
    println!("  iceberg runs:");
    for (i, entry) in arcade.scores.entries.iter().enumerate() {
        println!(
            "  {:>2}. {:>3} stars, level {}, at {}s",
            i + 1,
            entry.score,
            entry.level,
            entry.at_ms / 1000
        );
    }
}

/// What the scripted player is working through
enum Plan {
    /// Play iceberg runs, counting the ones already lost
    DodgeIcebergs { deaths: u32 },
    /// Replay arrow sequences until enough rounds are banked
    RecallArrows,
    Done,
}

/// Scripted player: reads the frame like a renderer would and answers with
/// plain key levels. Presses are one tick long followed by a cooldown, so
/// the engine sees clean edges.
struct Pilot {
    plan: Plan,
    cooldown: u32,
    /// Ticks spent flying the current iceberg run
    flight_ticks: u64,
}

impl Pilot {
    /// Runs to lose before moving on to the memory game
    const DODGE_RUNS: u32 = 2;
    /// Fly safe this long, then climb recklessly to end the run
    const SAFE_FLIGHT_TICKS: u64 = 12 * 60;
    /// Memory rounds to clear before fumbling one on purpose
    const RECALL_ROUNDS: u32 = 3;
    /// Press spacing for arrow playback: 15 ticks is 250ms, comfortably
    /// past the input debounce
    const PRESS_SPACING: u32 = 14;

    fn new() -> Self {
        Self {
            plan: Plan::DodgeIcebergs { deaths: 0 },
            cooldown: 0,
            flight_ticks: 0,
        }
    }

    fn finished(&self) -> bool {
        matches!(self.plan, Plan::Done)
    }

    fn decide(&mut self, snap: &RenderSnapshot) -> TickInput {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return TickInput::default();
        }
        match snap {
            RenderSnapshot::Select => self.pick_game(),
            RenderSnapshot::Titanic(scene) => self.dodge(scene),
            RenderSnapshot::Memory(scene) => self.recall(scene),
        }
    }

    fn pick_game(&mut self) -> TickInput {
        self.cooldown = 5;
        match self.plan {
            Plan::DodgeIcebergs { .. } => TickInput {
                up: true,
                ..TickInput::default()
            },
            Plan::RecallArrows => TickInput {
                down: true,
                ..TickInput::default()
            },
            Plan::Done => TickInput::default(),
        }
    }

    fn dodge(&mut self, scene: &TitanicSnapshot) -> TickInput {
        match scene.phase {
            TitanicPhase::Menu => {
                self.flight_ticks = 0;
                self.cooldown = 5;
                TickInput {
                    confirm: true,
                    ..TickInput::default()
                }
            }
            TitanicPhase::Playing => {
                self.flight_ticks += 1;
                let target = if self.flight_ticks > Self::SAFE_FLIGHT_TICKS {
                    // Hug the top edge; a low gap will end the run
                    60
                } else {
                    self.safe_target(scene)
                };
                let ship_cy = scene.ship.y + scene.ship.h / 2;
                let mut input = TickInput::default();
                if ship_cy > target + 2 {
                    input.up = true;
                } else if ship_cy < target - 2 {
                    input.down = true;
                }
                input
            }
            TitanicPhase::GameOver => {
                self.flight_ticks = 0;
                self.cooldown = 30;
                let deaths = match &mut self.plan {
                    Plan::DodgeIcebergs { deaths } => {
                        *deaths += 1;
                        *deaths
                    }
                    _ => 0,
                };
                if deaths >= Self::DODGE_RUNS {
                    self.plan = Plan::RecallArrows;
                    TickInput {
                        back: true,
                        ..TickInput::default()
                    }
                } else {
                    TickInput {
                        confirm: true,
                        ..TickInput::default()
                    }
                }
            }
        }
    }

    /// Aim for the star of the nearest pair still ahead, clamped far enough
    /// inside the gap that the hitbox cannot clip a column slit
    fn safe_target(&self, scene: &TitanicSnapshot) -> i32 {
        let ahead = scene
            .bergs
            .iter()
            .filter(|berg| berg.top.right() > scene.ship.x)
            .min_by_key(|berg| berg.top.x);

        let Some(berg) = ahead else {
            return SCREEN_H / 2;
        };

        let gap_top = berg.top.bottom();
        let gap_bottom = berg.bottom.top();
        let center = (gap_top + gap_bottom) / 2;
        let aim = match &berg.star {
            Some(star) => star.center().1,
            None => center,
        };
        aim.clamp(gap_top + 34, gap_bottom - 34)
    }

    fn recall(&mut self, scene: &MemorySnapshot) -> TickInput {
        match scene.phase {
            MemoryPhase::Ready | MemoryPhase::Show | MemoryPhase::Success => TickInput::default(),
            MemoryPhase::Input => {
                let next = scene.inputs.len();
                let Some(&arrow) = scene.sequence.get(next) else {
                    return TickInput::default();
                };
                // Fumble the first arrow once enough rounds are banked
                let press = if scene.rounds_cleared >= Self::RECALL_ROUNDS && next == 0 {
                    flip(arrow)
                } else {
                    arrow
                };
                self.cooldown = Self::PRESS_SPACING;
                match press {
                    Arrow::Up => TickInput {
                        up: true,
                        ..TickInput::default()
                    },
                    Arrow::Down => TickInput {
                        down: true,
                        ..TickInput::default()
                    },
                }
            }
            MemoryPhase::GameOver => {
                self.plan = Plan::Done;
                self.cooldown = 5;
                TickInput {
                    back: true,
                    ..TickInput::default()
                }
            }
        }
    }
}

fn flip(arrow: Arrow) -> Arrow {
    match arrow {
        Arrow::Up => Arrow::Down,
        Arrow::Down => Arrow::Up,
    }
}
