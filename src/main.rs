//! Skyline Duel headless driver
//!
//! Reads commands from stdin and plays them against the simulation with a
//! fixed-step frame loop. A graphics front end would replace this file.

use std::io::{self, BufRead, Write};
use std::path::Path;

use skyline_duel::Tuning;
use skyline_duel::consts::*;
use skyline_duel::renderer::hud;
use skyline_duel::sim::{FlightOutcome, GameEvent, MatchState, TickInput, tick};

/// Longest a single throw may take before the driver gives up on it (seconds)
const MAX_FLIGHT_SECS: f32 = 30.0;

/// A parsed stdin command
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Move(f32),
    Angle(f32),
    Power(f32),
    Fire,
    Status,
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("empty command".to_string());
    };
    let mut value = || -> Result<f32, String> {
        let raw = parts.next().ok_or_else(|| format!("`{word}` needs a number"))?;
        raw.parse::<f32>()
            .map_err(|e| format!("bad number `{raw}`: {e}"))
    };

    match word.to_lowercase().as_str() {
        "move" | "m" => Ok(Command::Move(value()?)),
        "angle" | "a" => Ok(Command::Angle(value()?)),
        "power" | "p" => Ok(Command::Power(value()?)),
        "fire" | "f" => Ok(Command::Fire),
        "status" | "s" => Ok(Command::Status),
        "reset" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`")),
    }
}

/// Frame loop for one throw: accumulate frame time, run fixed substeps
struct Driver {
    state: MatchState,
    accumulator: f32,
    /// Events gathered across frames until the driver reports them
    events: Vec<GameEvent>,
}

impl Driver {
    fn new(tuning: Tuning) -> Self {
        Self {
            state: MatchState::new(tuning),
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    /// Advance by one rendered frame of `frame_dt` seconds
    fn frame(&mut self, input: &TickInput, frame_dt: f32) -> FlightOutcome {
        let dt = frame_dt.min(0.1);
        self.accumulator += dt;

        let mut input = input.clone();
        let mut last = FlightOutcome::Idle;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            last = tick(&mut self.state, &input, SIM_DT);
            self.events.extend(self.state.drain_events());
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.fire = false;
            if last.ends_turn() {
                break;
            }
        }
        last
    }

    /// Fire and run 60 Hz frames until the throw resolves
    fn throw(&mut self) -> Option<FlightOutcome> {
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let idle = TickInput::default();
        let frame_dt = 1.0 / 60.0;
        let max_frames = (MAX_FLIGHT_SECS / frame_dt) as u32;

        let mut outcome = self.frame(&fire, frame_dt);
        for _ in 0..max_frames {
            if outcome.ends_turn() {
                return Some(outcome);
            }
            outcome = self.frame(&idle, frame_dt);
        }
        outcome.ends_turn().then_some(outcome)
    }
}

fn report_events(events: &[GameEvent], out: &mut impl Write) -> io::Result<()> {
    for &event in events {
        match event {
            GameEvent::Fired {
                player,
                angle_deg,
                power,
                ..
            } => writeln!(out, "{player} throws (angle {angle_deg:.1}, power {power:.2})")?,
            GameEvent::BuildingHit { building, at, .. } => writeln!(
                out,
                "  boom! building {} hit at ({:.2}, {:.2})",
                building + 1,
                at.x,
                at.y
            )?,
            GameEvent::PlayerHit { attacker, at } => writeln!(
                out,
                "  direct hit at ({:.2}, {:.2}) - point for {attacker}",
                at.x, at.y
            )?,
            GameEvent::OutOfBounds { at, .. } => {
                writeln!(out, "  out of the arena at ({:.2}, {:.2})", at.x, at.y)?
            }
            GameEvent::TurnChanged { player } => writeln!(out, "{player} to throw")?,
        }
    }
    Ok(())
}

fn print_status(state: &MatchState, out: &mut impl Write) -> io::Result<()> {
    let h = hud(state);
    let player = state.player(h.current_player);
    writeln!(
        out,
        "{} at x={:.2} | angle {:.1} power {:.2} | P1 {} - {} P2 | shots {}",
        h.current_player,
        player.pos.x,
        h.angle_deg,
        h.power,
        h.score_p1,
        h.score_p2,
        state.shots_fired()
    )
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  move <dx>      move the current player (lane-clamped)")?;
    writeln!(out, "  angle <delta>  change launch angle in degrees [0, 90]")?;
    writeln!(out, "  power <delta>  change launch power [1, 20]")?;
    writeln!(out, "  fire           throw and wait for the result")?;
    writeln!(out, "  status         show aim and scores")?;
    writeln!(out, "  reset          start a new match")?;
    writeln!(out, "  quit")
}

fn run(tuning: Tuning) -> io::Result<()> {
    let mut driver = Driver::new(tuning);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    print_help(&mut out)?;
    print_status(&driver.state, &mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match command {
            Command::Move(dx) => driver.state.move_current_player(dx),
            Command::Angle(d) => driver.state.adjust_angle(d),
            Command::Power(d) => driver.state.adjust_power(d),
            Command::Fire => {
                if driver.throw().is_none() {
                    log::warn!("Throw did not resolve within {MAX_FLIGHT_SECS}s");
                }
                report_events(&driver.events, &mut out)?;
                driver.events.clear();
            }
            Command::Status => {}
            Command::Reset => {
                driver.state.initialize();
                driver.accumulator = 0.0;
                driver.events.clear();
                writeln!(out, "new match")?;
            }
            Command::Help => {
                print_help(&mut out)?;
                continue;
            }
            Command::Quit => break,
        }
        print_status(&driver.state, &mut out)?;
    }

    let h = hud(&driver.state);
    writeln!(out, "Final score: P1 {} - {} P2", h.score_p1, h.score_p2)
}

fn main() {
    env_logger::init();
    log::info!("Skyline Duel starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_or_default(Path::new(&path)),
        None => Tuning::default(),
    };

    if let Err(e) = run(tuning) {
        log::error!("I/O error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_duel::sim::PlayerId;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("move -0.5"), Ok(Command::Move(-0.5)));
        assert_eq!(parse_command("A 10"), Ok(Command::Angle(10.0)));
        assert_eq!(parse_command("p 2.5"), Ok(Command::Power(2.5)));
        assert_eq!(parse_command("fire"), Ok(Command::Fire));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert!(parse_command("angle").is_err());
        assert!(parse_command("power lots").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_driver_throw_resolves() {
        let mut driver = Driver::new(Tuning::default());
        driver.state.adjust_angle(45.0); // straight up
        driver.state.adjust_power(15.0);

        let outcome = driver.throw();
        assert_eq!(outcome, Some(FlightOutcome::OutOfBounds));
        assert_eq!(driver.state.current_player(), PlayerId::Two);
    }

    #[test]
    fn test_report_events_lists_turn_change() {
        let mut driver = Driver::new(Tuning::default());
        driver.state.adjust_angle(45.0);
        driver.state.adjust_power(15.0);
        driver.throw();

        let mut buf = Vec::new();
        report_events(&driver.events, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Player 1 throws"));
        assert!(text.contains("out of the arena"));
        assert!(text.contains("Player 2 to throw"));
    }
}
