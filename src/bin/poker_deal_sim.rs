use std::path::PathBuf;

use clap::Parser;
use log::{error, info, LevelFilter};

use poker_deal_core::api::DealView;
use poker_deal_core::domain::{Chips, GameSettings, Player, SeatIndex};
use poker_deal_core::engine::{ActionKind, Deal, DealHost, GameSession, PlayerAction};
use poker_deal_core::infra::{logging, DeterministicRng, RngSeed};

/// Серия раздач между ботами: проверка движка целиком.
#[derive(Parser, Debug)]
#[command(name = "poker_deal_sim")]
struct Args {
    /// Число игроков за столом.
    #[arg(long, default_value_t = 4)]
    players: u64,

    /// Начальный стек каждого игрока.
    #[arg(long, default_value_t = 200)]
    stack: u64,

    /// Seed для воспроизводимых раздач.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Настройки игры в JSON (отсутствующие поля – по умолчанию).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Число прогонов Monte Carlo для оценки шансов ботов.
    #[arg(long, default_value_t = 300)]
    trials: u32,

    /// Подробный лог в файл.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,
}

/// Бот: решает по оценке шансов.
struct EquityBot;

impl DealHost for EquityBot {
    fn on_action_needed(&mut self, deal: &Deal, seat: SeatIndex, legal: &[ActionKind]) -> Option<PlayerAction> {
        let view = DealView::for_seat(deal, seat);
        let chance = view.win_chance.unwrap_or(50.0);
        let can = |k: ActionKind| legal.contains(&k);

        let action = match view.raise_bounds {
            Some((min, _)) if chance >= 60.0 && can(ActionKind::Raise) => PlayerAction::Raise(min),
            _ if chance >= 80.0 && can(ActionKind::AllIn) => PlayerAction::AllIn,
            _ if can(ActionKind::Check) => PlayerAction::Check,
            _ if chance >= 25.0 && can(ActionKind::Call) => PlayerAction::Call,
            _ if chance >= 40.0 && can(ActionKind::AllIn) => PlayerAction::AllIn,
            _ => PlayerAction::Fold,
        };
        Some(action)
    }
}

fn load_settings(args: &Args) -> Result<GameSettings, Box<dyn std::error::Error>> {
    let mut settings = match &args.settings {
        Some(path) => GameSettings::from_json_str(&std::fs::read_to_string(path)?)?,
        None => GameSettings::default(),
    };
    settings.equity_trials = args.trials;
    Ok(settings)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(&args)?;
    let players: Vec<Player> = (0..args.players)
        .map(|i| Player::bot(i + 1, format!("bot{}", i + 1), Chips(args.stack)))
        .collect();

    let mut session = GameSession::new(players, settings)?;
    let mut rng = DeterministicRng::from_seed(RngSeed::from_u64(args.seed).derive(b"table", 0).bytes);
    let mut bot = EquityBot;

    let summaries = session.run(&mut rng, &mut bot)?;
    let showdowns = summaries.iter().filter(|s| s.showdown).count();
    info!(
        "Сыграно раздач: {}, до вскрытия: {}, фишек за столом: {}",
        summaries.len(),
        showdowns,
        session.total_chips()
    );
    for p in session.players() {
        info!("{}: {}", p.name, p.wealth);
    }
    if let Some(winner) = session.winner() {
        info!("Победитель: {}", winner.name);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = logging::init(level, args.log_file.as_deref()) {
        eprintln!("не удалось настроить лог: {e}");
    }

    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
}
