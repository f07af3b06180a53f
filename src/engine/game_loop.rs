use log::{info, warn};

use crate::domain::card::Card;
use crate::domain::hand::{DealSummary, PlayerDealResult, Stage};
use crate::domain::player::Player;
use crate::domain::settings::DealConfig;
use crate::domain::SeatIndex;
use crate::engine::actions::{ActionKind, PlayerAction};
use crate::engine::betting::apply_action;
use crate::engine::deal::Deal;
use crate::engine::errors::{BettingError, EngineError};
use crate::engine::hand_history::DealEventKind;
use crate::engine::positions::{postflop_order, preflop_order};
use crate::engine::settlement::{settle, Claim, Settlement};
use crate::engine::validation::legal_actions;
use crate::engine::RandomSource;
use crate::eval::evaluate_best_hand;

/// Внешний участник раздачи: показывает состояние и приносит решения игроков.
///
/// Кроме `on_action_needed` все методы необязательны.
pub trait DealHost {
    /// Раздача вошла в новую стадию (борд уже открыт).
    fn on_stage_entered(&mut self, _deal: &Deal) {}

    /// Игроку на месте `seat` нужно выбрать действие из `legal`.
    /// `None` – решения нет (отключился, тайм-аут): карты сбрасываются.
    fn on_action_needed(&mut self, deal: &Deal, seat: SeatIndex, legal: &[ActionKind]) -> Option<PlayerAction>;

    /// Действие отклонено; дальше последует повторный запрос.
    fn on_action_rejected(&mut self, _deal: &Deal, _seat: SeatIndex, _error: &BettingError) {}

    /// Банк распределён.
    fn on_settlement(&mut self, _deal: &Deal, _summary: &DealSummary) {}
}

/// Сыграть раздачу целиком: от блайндов до расчёта.
///
/// Возвращает игроков (с применёнными изменениями стеков) и итог раздачи.
pub fn run_deal<R: RandomSource, H: DealHost>(
    players: Vec<Player>,
    config: DealConfig,
    rng: &mut R,
    host: &mut H,
) -> Result<(Vec<Player>, DealSummary), EngineError> {
    let mut deal = Deal::new(players, config, rng)?;
    let summary = deal.play(host)?;
    Ok((deal.into_players(), summary))
}

impl Deal {
    /// Провести торги по всем стадиям и рассчитать банк.
    pub fn play<H: DealHost>(&mut self, host: &mut H) -> Result<DealSummary, EngineError> {
        if self.stage == Stage::Settled {
            return Err(EngineError::DealSettled);
        }

        info!("Стадия: {:?}", self.stage);
        self.history.push(DealEventKind::StageEntered { stage: self.stage });
        host.on_stage_entered(self);

        loop {
            let order = if self.stage == Stage::PreFlop {
                preflop_order(self.players.len())
            } else {
                postflop_order(self.players.len())
            };
            self.betting_round(&order, host);

            // Все, кроме одного, сбросили – открывать остальной борд незачем.
            if self.in_hand_count() <= 1 {
                break;
            }

            match self.stage.next() {
                Some(Stage::Settled) | None => break,
                Some(next) => self.enter_street(next, host)?,
            }
        }

        let summary = self.settle_bank();
        host.on_settlement(self, &summary);
        Ok(summary)
    }

    fn enter_street<H: DealHost>(&mut self, stage: Stage, host: &mut H) -> Result<(), EngineError> {
        let cards = self.reveal(stage)?;
        info!("Стадия: {:?}", stage);
        info!("Борд: {}", format_cards(&self.board));
        self.history.push(DealEventKind::StageEntered { stage });
        self.history.push(DealEventKind::BoardDealt { stage, cards });
        self.refresh_win_chances();
        host.on_stage_entered(self);
        Ok(())
    }

    /// Круг торгов: сначала каждый торгующийся игрок ходит по разу,
    /// затем по кругу, пока ставки не уравняются.
    fn betting_round<H: DealHost>(&mut self, order: &[SeatIndex], host: &mut H) {
        self.start_round();

        if self.active_count == 0 {
            return;
        }

        for &seat in order {
            if self.needs_decision(seat) {
                self.request_action(seat, host);
            }
        }

        while !self.is_round_complete() && self.in_hand_count() > 1 {
            for &seat in order {
                if self.is_round_complete() || self.in_hand_count() <= 1 {
                    break;
                }
                if self.needs_decision(seat) {
                    self.request_action(seat, host);
                }
            }
        }
    }

    /// Нужно ли спрашивать игрока: он торгуется, и ему есть с кем торговаться
    /// или что уравнивать.
    fn needs_decision(&self, seat: SeatIndex) -> bool {
        let player = &self.players[seat];
        if !player.is_active() || self.in_hand_count() <= 1 {
            return false;
        }
        !(self.active_count == 1 && player.current_bid == self.current_bid)
    }

    /// Запросить действие с повторами; после исчерпания попыток – fold.
    fn request_action<H: DealHost>(&mut self, seat: SeatIndex, host: &mut H) {
        let attempts = self.config.max_decision_retries + 1;

        for _ in 0..attempts {
            let legal = legal_actions(self, seat);
            let Some(action) = host.on_action_needed(self, seat, &legal) else {
                break;
            };
            match apply_action(self, seat, action) {
                Ok(()) => return,
                Err(err) => {
                    warn!("{}: {} отклонено: {}", self.players[seat].name, action, err);
                    self.history.rejected(seat, action, &err);
                    host.on_action_rejected(self, seat, &err);
                }
            }
        }

        warn!("{}: нет корректного действия, карты сброшены", self.players[seat].name);
        self.history.push(DealEventKind::AutoFolded { seat });
        self.fold(seat);
    }

    /// Вскрытие (если до него дошло), раздел банка, итог раздачи.
    fn settle_bank(&mut self) -> DealSummary {
        let stage_reached = self.stage;
        let showdown = self.in_hand_count() > 1;

        let mut entries = Vec::with_capacity(self.players.len());
        for (seat, p) in self.players.iter().enumerate() {
            let claim = match p.hand {
                Some(hole) if p.is_in_hand() && showdown => {
                    let score = evaluate_best_hand(&hole, &self.board);
                    info!("{}: {} ({})", p.name, format_cards(&hole), score.describe());
                    self.history.push(DealEventKind::ShowdownReveal {
                        seat,
                        hole_cards: hole,
                        score,
                    });
                    Claim::Shown(score)
                }
                _ if p.is_in_hand() => Claim::Uncontested,
                _ => Claim::Folded,
            };
            entries.push((p.current_bid, claim));
        }

        let Settlement { credits, .. } = settle(&entries, self.bank);

        let mut results = Vec::with_capacity(self.players.len());
        for (seat, credit) in credits.into_iter().enumerate() {
            let player = &mut self.players[seat];
            player.wealth_change += credit.0 as i64;
            if !credit.is_zero() {
                info!("{} получает {}", player.name, credit);
                self.history.push(DealEventKind::PotAwarded { seat, amount: credit });
            }
            results.push(PlayerDealResult {
                player_id: player.id,
                score: entries[seat].1.score(),
                committed: player.current_bid,
                credited: credit,
                net: player.wealth_change,
            });
        }

        self.history.push(DealEventKind::DealFinished { bank: self.bank });
        self.stage = Stage::Settled;

        DealSummary {
            stage_reached,
            board: self.board.clone(),
            bank: self.bank,
            showdown,
            results,
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
