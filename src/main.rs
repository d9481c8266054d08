//! Ball Maze driver
//!
//! Scripts a walkthrough of the maze and prints each state.
//!
//! Usage: ball-maze [--config <path>] [--moves <LRUD>] [--random <steps>] [--seed <n>] [--codes]

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use ball_maze::Settings;
use ball_maze::settings::RandomWalk;
use ball_maze::sim::{MazeState, MoveInstruction, random_walk};

/// Command-line overrides on top of the settings file
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    moves: Option<String>,
    random_steps: Option<usize>,
    seed: Option<u64>,
    codes: bool,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = Args::default();
        let mut iter = env::args().skip(1);

        while let Some(arg) = iter.next() {
            let mut value = |name: &str| iter.next().ok_or(format!("{} needs a value", name));
            match arg.as_str() {
                "--config" => args.config = Some(PathBuf::from(value("--config")?)),
                "--moves" => args.moves = Some(value("--moves")?),
                "--random" => {
                    let v = value("--random")?;
                    args.random_steps =
                        Some(v.parse().map_err(|_| format!("bad step count: {}", v))?);
                }
                "--seed" => {
                    let v = value("--seed")?;
                    args.seed = Some(v.parse().map_err(|_| format!("bad seed: {}", v))?);
                }
                "--codes" => args.codes = true,
                other => return Err(format!("unknown argument: {}", other)),
            }
        }
        Ok(args)
    }

    /// Fold overrides into loaded settings
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(moves) = self.moves {
            settings.moves = moves;
        }
        if let Some(steps) = self.random_steps {
            let seed = self
                .seed
                .or(settings.random_walk.map(|w| w.seed))
                .unwrap_or(0);
            settings.random_walk = Some(RandomWalk { steps, seed });
        } else if let (Some(seed), Some(walk)) = (self.seed, settings.random_walk.as_mut()) {
            walk.seed = seed;
        }
        settings.show_codes |= self.codes;
        settings
    }
}

fn print_state(maze: &MazeState, settings: &Settings) {
    println!("State: ");
    println!("{}", maze.render());
    if settings.show_codes {
        for row in maze.render().codes() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            println!("{}", line.join(" "));
        }
        println!();
    }
}

fn print_distance(maze: &MazeState, settings: &Settings) {
    if settings.show_distance {
        println!("Distance: {}\n", maze.distance_to_goal());
    }
}

fn run_move(maze: &mut MazeState, settings: &Settings, m: MoveInstruction) {
    println!("Move: {}", m.symbol());
    maze.apply_move(m);
    print_state(maze, settings);
}

fn run(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    use MoveInstruction::*;

    let mut maze = settings.build_maze()?;

    println!("Maze State: ");
    println!("{}", maze.render());
    print_distance(&maze, settings);

    // Wall, edge, then a free move
    run_move(&mut maze, settings, Down);
    run_move(&mut maze, settings, Up);
    run_move(&mut maze, settings, Right);
    print_distance(&maze, settings);

    println!("{:?}", maze.dimensions());
    println!("{}", maze.max_open_cells());

    run_move(&mut maze, settings, Right);
    run_move(&mut maze, settings, Right);

    let sequence = [Down, Down, Left];
    let symbols: String = sequence.iter().map(|m| m.symbol()).collect();
    println!("Sequence: {}", symbols);
    maze.apply_sequence(sequence);
    print_state(&maze, settings);
    print_distance(&maze, settings);
    println!("Reached goal? {}\n", maze.reached_goal());

    println!("Resetting maze");
    maze.reset_ball();
    print_state(&maze, settings);

    println!("one last try: {}", settings.moves);
    maze.apply_move_str(&settings.moves)?;
    print_state(&maze, settings);
    print_distance(&maze, settings);
    println!("Reached goal? {}", maze.reached_goal());
    println!("Ball location: {:?}", (maze.ball().row, maze.ball().col));
    println!("Goal location: {:?}", (maze.goal().row, maze.goal().col));
    println!("Moves: {}", maze.move_count());

    if let Some(walk) = settings.random_walk {
        println!("\nRandom walk: {} steps, seed {}", walk.steps, walk.seed);
        maze.reset_to_start();
        let applied = random_walk(&mut maze, walk.steps, walk.seed);
        let symbols: String = applied.iter().map(|m| m.symbol()).collect();
        println!("Sequence: {}", symbols);
        print_state(&maze, settings);
        print_distance(&maze, settings);
        println!("Reached goal? {}", maze.reached_goal());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ball Maze starting...");

    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "Usage: ball-maze [--config <path>] [--moves <LRUD>] [--random <steps>] [--seed <n>] [--codes]"
            );
            return ExitCode::from(2);
        }
    };

    let settings = match &args.config {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let settings = args.apply(settings);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
