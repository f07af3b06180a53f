//! Тесты раздачи целиком: стадии, порядок хода, повторные запросы, расчёт.

use std::collections::VecDeque;

use poker_deal_core::api::DealView;
use poker_deal_core::domain::{Chips, DealConfig, Player, PlayerStatus, SeatIndex, Stage};
use poker_deal_core::engine::{
    run_deal, ActionKind, BettingError, Deal, DealEventKind, DealHost, EngineError, PlayerAction,
    RandomSource,
};
use poker_deal_core::infra::DeterministicRng;

fn players(wealths: &[u64]) -> Vec<Player> {
    wealths
        .iter()
        .enumerate()
        .map(|(i, w)| Player::new(i as u64 + 1, format!("p{i}"), Chips(*w)))
        .collect()
}

/// Отвечает по заранее заданному списку; пустой список – None.
#[derive(Default)]
struct Scripted {
    script: VecDeque<PlayerAction>,
    asked: Vec<SeatIndex>,
    rejected: Vec<BettingError>,
    stages: Vec<Stage>,
    settled: bool,
}

impl Scripted {
    fn new(script: &[PlayerAction]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl DealHost for Scripted {
    fn on_stage_entered(&mut self, deal: &Deal) {
        self.stages.push(deal.stage());
    }

    fn on_action_needed(&mut self, _deal: &Deal, seat: SeatIndex, _legal: &[ActionKind]) -> Option<PlayerAction> {
        self.asked.push(seat);
        self.script.pop_front()
    }

    fn on_action_rejected(&mut self, _deal: &Deal, _seat: SeatIndex, error: &BettingError) {
        self.rejected.push(error.clone());
    }

    fn on_settlement(&mut self, _deal: &Deal, _summary: &poker_deal_core::domain::DealSummary) {
        self.settled = true;
    }
}

/// Всегда check, иначе call.
struct Passive;

impl DealHost for Passive {
    fn on_action_needed(&mut self, _deal: &Deal, _seat: SeatIndex, legal: &[ActionKind]) -> Option<PlayerAction> {
        if legal.contains(&ActionKind::Check) {
            Some(PlayerAction::Check)
        } else if legal.contains(&ActionKind::Call) {
            Some(PlayerAction::Call)
        } else {
            Some(PlayerAction::AllIn)
        }
    }
}

fn total_wealth(players: &[Player]) -> Chips {
    players.iter().map(|p| p.wealth).sum()
}

#[test]
fn passive_table_reaches_showdown() {
    let mut rng = DeterministicRng::from_u64(10);
    let ps = players(&[100, 100, 100]);
    let mut deal = Deal::new(ps, DealConfig::new(Chips(5)), &mut rng).unwrap();

    let summary = deal.play(&mut Passive).unwrap();

    assert_eq!(deal.stage(), Stage::Settled);
    assert_eq!(summary.stage_reached, Stage::River);
    assert!(summary.showdown);
    assert_eq!(summary.board.len(), 5);
    assert_eq!(summary.bank, Chips(30));

    let credited: Chips = summary.results.iter().map(|r| r.credited).sum();
    assert_eq!(credited, summary.bank);
    let net: i64 = summary.results.iter().map(|r| r.net).sum();
    assert_eq!(net, 0);
    assert!(summary.results.iter().all(|r| r.score.is_some()));

    let boards: Vec<usize> = deal
        .history()
        .events
        .iter()
        .filter_map(|e| match &e.kind {
            DealEventKind::BoardDealt { cards, .. } => Some(cards.len()),
            _ => None,
        })
        .collect();
    assert_eq!(boards, vec![3, 1, 1]);

    let players = deal.into_players();
    assert_eq!(total_wealth(&players), Chips(300));
    assert!(players.iter().all(|p| p.current_bid.is_zero() && p.hand.is_none()));
}

#[test]
fn board_and_hole_cards_never_repeat() {
    let mut rng = DeterministicRng::from_u64(77);
    let mut deal = Deal::new(players(&[50, 50, 50, 50]), DealConfig::new(Chips(1)), &mut rng).unwrap();
    deal.play(&mut Passive).unwrap();

    let mut seen: Vec<_> = deal.board().to_vec();
    for p in deal.players() {
        seen.extend(p.hand.unwrap());
    }
    let count = seen.len();
    seen.sort_by_key(|c| c.index());
    seen.dedup();
    assert_eq!(seen.len(), count);
}

#[test]
fn everyone_folds_to_big_blind() {
    let mut rng = DeterministicRng::from_u64(3);
    let mut host = Scripted::new(&[PlayerAction::Fold, PlayerAction::Fold]);

    let (players, summary) = run_deal(players(&[100, 100, 100]), DealConfig::new(Chips(5)), &mut rng, &mut host).unwrap();

    // Префлоп: первым ходит место 2, затем малый блайнд; большого не спрашивают.
    assert_eq!(host.asked, vec![2, 0]);
    assert_eq!(host.stages, vec![Stage::PreFlop]);
    assert!(host.settled);

    assert_eq!(summary.stage_reached, Stage::PreFlop);
    assert!(!summary.showdown);
    assert!(summary.board.is_empty());
    assert_eq!(summary.results[1].credited, Chips(15));
    assert_eq!(summary.results[1].net, 5);
    assert_eq!(summary.results[0].net, -5);

    let wealths: Vec<u64> = players.iter().map(|p| p.wealth.0).collect();
    assert_eq!(wealths, vec![95, 105, 100]);
}

#[test]
fn heads_up_all_in_runs_out_the_board() {
    let mut rng = DeterministicRng::from_u64(5);
    let mut host = Scripted::new(&[PlayerAction::AllIn, PlayerAction::AllIn]);

    let (players, summary) = run_deal(players(&[50, 50]), DealConfig::new(Chips(5)), &mut rng, &mut host).unwrap();

    // Вдвоём первым ходит малый блайнд; после двух all-in вопросов больше нет.
    assert_eq!(host.asked, vec![0, 1]);
    assert_eq!(host.stages, vec![Stage::PreFlop, Stage::Flop, Stage::Turn, Stage::River]);
    assert!(summary.showdown);
    assert_eq!(summary.board.len(), 5);
    assert_eq!(summary.bank, Chips(100));
    assert_eq!(total_wealth(&players), Chips(100));
}

#[test]
fn rejected_action_is_asked_again() {
    let mut rng = DeterministicRng::from_u64(8);
    let mut host = Scripted::new(&[
        PlayerAction::Raise(Chips(12)), // меньше минимального повышения
        PlayerAction::Fold,
        PlayerAction::Fold,
    ]);

    run_deal(players(&[100, 100, 100]), DealConfig::new(Chips(5)), &mut rng, &mut host).unwrap();

    assert_eq!(host.asked, vec![2, 2, 0]);
    assert_eq!(
        host.rejected,
        vec![BettingError::BelowMinimumRaise {
            requested: Chips(12),
            min: Chips(20)
        }]
    );
}

#[test]
fn no_answer_means_fold() {
    let mut rng = DeterministicRng::from_u64(9);
    let mut host = Scripted::new(&[]);

    let mut deal = Deal::new(players(&[100, 100]), DealConfig::new(Chips(5)), &mut rng).unwrap();
    let summary = deal.play(&mut host).unwrap();

    assert_eq!(host.asked, vec![0]);
    assert_eq!(deal.players()[0].status, PlayerStatus::Folded);
    assert_eq!(summary.results[1].credited, Chips(15));
    assert!(deal
        .history()
        .events
        .iter()
        .any(|e| e.kind == DealEventKind::AutoFolded { seat: 0 }));
}

#[test]
fn retries_are_limited() {
    let mut config = DealConfig::new(Chips(5));
    config.max_decision_retries = 1;
    let mut rng = DeterministicRng::from_u64(9);
    // Check недоступен малому блайнду на префлопе.
    let mut host = Scripted::new(&[PlayerAction::Check, PlayerAction::Check, PlayerAction::Check]);

    let mut deal = Deal::new(players(&[100, 100]), config, &mut rng).unwrap();
    deal.play(&mut host).unwrap();

    assert_eq!(host.asked, vec![0, 0]);
    assert_eq!(host.rejected.len(), 2);
    assert_eq!(deal.players()[0].status, PlayerStatus::Folded);
}

#[test]
fn raise_reopens_the_round() {
    let mut rng = DeterministicRng::from_u64(12);
    let mut host = Scripted::new(&[
        PlayerAction::Call,              // место 2
        PlayerAction::Call,              // место 0
        PlayerAction::Raise(Chips(30)),  // место 1
        PlayerAction::Fold,              // место 2
        PlayerAction::Call,              // место 0
    ]);

    let mut deal = Deal::new(players(&[100, 100, 100]), DealConfig::new(Chips(5)), &mut rng).unwrap();
    let result = deal.play(&mut host);
    assert!(result.is_ok());

    // После префлопа сценарий кончился: на флопе место 0 без ответа сбрасывает.
    assert_eq!(&host.asked[..6], &[2, 0, 1, 2, 0, 0]);
    let preflop_actions: Vec<_> = deal.history().actions().take(5).collect();
    assert_eq!(preflop_actions[2], (1, PlayerAction::Raise(Chips(30))));
    assert_eq!(deal.bank(), Chips(70));
}

#[test]
fn deal_cannot_be_played_twice() {
    let mut rng = DeterministicRng::from_u64(1);
    let mut deal = Deal::new(players(&[100, 100]), DealConfig::new(Chips(5)), &mut rng).unwrap();
    deal.play(&mut Passive).unwrap();
    assert!(matches!(deal.play(&mut Passive), Err(EngineError::DealSettled)));
}

#[test]
fn deal_needs_two_funded_players() {
    let mut rng = DeterministicRng::from_u64(1);
    assert!(matches!(
        Deal::new(players(&[100]), DealConfig::new(Chips(5)), &mut rng),
        Err(EngineError::NotEnoughPlayers)
    ));
    assert!(matches!(
        Deal::new(players(&[100, 0]), DealConfig::new(Chips(5)), &mut rng),
        Err(EngineError::EmptyStack(2))
    ));
    assert!(matches!(
        Deal::new(players(&[100, 100]), DealConfig::new(Chips(0)), &mut rng),
        Err(EngineError::Config(_))
    ));
}

#[test]
fn win_chances_are_refreshed_when_enabled() {
    let mut config = DealConfig::new(Chips(5));
    config.equity_trials = 200;
    let mut rng = DeterministicRng::from_u64(4);
    let deal = Deal::new(players(&[100, 100, 100]), config, &mut rng).unwrap();

    for seat in 0..3 {
        let chance = deal.win_chance(seat).unwrap();
        assert!((0.0..=100.0).contains(&chance));
    }
}

#[test]
fn view_hides_other_hole_cards() {
    let mut rng = DeterministicRng::from_u64(6);
    let deal = Deal::new(players(&[100, 100, 200]), DealConfig::new(Chips(5)), &mut rng).unwrap();

    let view = DealView::for_seat(&deal, 2);
    assert!(view.players[2].hole_cards.is_some());
    assert!(view.players[0].hole_cards.is_none());
    assert!(view.players[1].hole_cards.is_none());
    assert_eq!(view.legal_actions, vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise]);
    assert_eq!(view.raise_bounds, Some((Chips(20), Chips(100))));
    assert_eq!(view.to_call(), Chips(10));
    assert_eq!(view.dealer, Some(2));
    assert!(view.players.iter().all(|p| !p.is_bot));

    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"bank\""));
}

/// Повышает на минимум при любой возможности, иначе check/call.
/// Попутно сверяет счётчики повышений с лимитами.
struct Raiser {
    asks: usize,
    rejected: usize,
    max_round_raises: u32,
    max_personal_raises: u32,
}

impl DealHost for Raiser {
    fn on_action_needed(&mut self, deal: &Deal, seat: SeatIndex, legal: &[ActionKind]) -> Option<PlayerAction> {
        self.asks += 1;
        self.max_round_raises = self.max_round_raises.max(deal.round_raises());
        for s in 0..deal.players().len() {
            self.max_personal_raises = self.max_personal_raises.max(deal.personal_raises(s));
        }

        let view = DealView::for_seat(deal, seat);
        let action = match view.raise_bounds {
            Some((min, _)) if legal.contains(&ActionKind::Raise) => PlayerAction::Raise(min),
            _ if legal.contains(&ActionKind::Check) => PlayerAction::Check,
            _ if legal.contains(&ActionKind::Call) => PlayerAction::Call,
            _ => PlayerAction::AllIn,
        };
        Some(action)
    }

    fn on_action_rejected(&mut self, _deal: &Deal, _seat: SeatIndex, _error: &BettingError) {
        self.rejected += 1;
    }
}

#[test]
fn endless_raising_stays_within_limits() {
    let mut params = DeterministicRng::from_u64(0x5EED);

    for i in 0..200u64 {
        let n = 2 + (params.next_u64() % 5) as usize;
        let stacks: Vec<u64> = (0..n).map(|_| 60 + params.next_u64() % 141).collect();
        let small_blind = 1 + params.next_u64() % 5;

        let mut config = DealConfig::new(Chips(small_blind));
        let limited = i % 2 == 0;
        if limited {
            config.trade_rounds_limit = Some(2);
            config.raise_personal_limit = Some(1);
        }

        let before: u64 = stacks.iter().sum();
        let mut rng = DeterministicRng::from_u64(i);
        let mut host = Raiser {
            asks: 0,
            rejected: 0,
            max_round_raises: 0,
            max_personal_raises: 0,
        };

        let mut deal = Deal::new(players(&stacks), config, &mut rng).unwrap();
        let summary = deal.play(&mut host).unwrap();

        assert_eq!(host.rejected, 0, "deal {i}: минимальное повышение не должно отклоняться");

        // Повышений за круг: не больше лимита, а без лимита – не больше,
        // чем блайндов в самом большом стеке.
        let blind = 2 * small_blind;
        let max_stack = *stacks.iter().max().unwrap();
        let round_cap = if limited { 2 } else { (max_stack / blind + 1) as u32 };
        if limited {
            assert!(host.max_round_raises <= 2, "deal {i}: {} повышений за круг", host.max_round_raises);
            assert!(host.max_personal_raises <= 1, "deal {i}: личный лимит превышен");
        }
        let ask_cap = 4 * n * (round_cap as usize + 1);
        assert!(host.asks <= ask_cap, "deal {i}: {} вопросов при пределе {ask_cap}", host.asks);

        assert_eq!(deal.stage(), Stage::Settled);
        let credited: Chips = summary.results.iter().map(|r| r.credited).sum();
        assert_eq!(credited, summary.bank);
        assert_eq!(total_wealth(&deal.into_players()), Chips(before));
    }
}

#[test]
fn heads_up_view_has_no_dealer_and_marks_bots() {
    let mut rng = DeterministicRng::from_u64(6);
    let ps = vec![
        Player::new(1, "alice", Chips(100)),
        Player::bot(2, "bot", Chips(100)),
    ];
    let deal = Deal::new(ps, DealConfig::new(Chips(5)), &mut rng).unwrap();

    let view = DealView::for_seat(&deal, 0);
    assert_eq!(view.dealer, None);
    assert!(!view.players[0].is_bot);
    assert!(view.players[1].is_bot);
}
