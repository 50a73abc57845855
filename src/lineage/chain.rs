use crate::cli::types::{AcquisitionType, TeamAbbr, TradeId};
use crate::storage::{Acquisition, ChainStep, DraftPick, PickRef, Trade};
use crate::{Result, TradeTreeError};

/// A draft pick changing hands inside one trade
#[derive(Debug, Clone, PartialEq)]
pub struct PickMovement {
    pub trade_id: TradeId,
    pub from: TeamAbbr,
    pub to: TeamAbbr,
    pub pick: PickRef,
}

/// Normalised rows a player's chain is derived from.
///
/// `pick_movements` holds the pick assets of every trade listed here, not
/// only the ones moving the acquisition's own pick.
#[derive(Debug, Clone)]
pub struct ChainInputs {
    pub player_name: String,
    /// Team the acquisition brought the player to
    pub team: TeamAbbr,
    pub acquisition: Acquisition,
    pub origin_trade: Option<Trade>,
    pub direct_trade: Option<Trade>,
    /// Trades that moved the acquisition's pick, oldest first
    pub pick_trades: Vec<Trade>,
    pub pick_movements: Vec<PickMovement>,
    pub draft_pick: Option<DraftPick>,
}

impl ChainInputs {
    /// Origin, direct and pick-moving trades, each once, in that order.
    ///
    /// Trades dated before the origin trade are left out.
    fn distinct_trades(&self) -> Vec<&Trade> {
        let mut trades: Vec<&Trade> = Vec::new();
        let starts_on = self.origin_trade.as_ref().map(|t| t.date);
        let candidates = self
            .origin_trade
            .iter()
            .chain(self.direct_trade.iter())
            .chain(self.pick_trades.iter())
            .filter(|trade| starts_on.map_or(true, |start| trade.date >= start));

        for trade in candidates {
            if !trades.iter().any(|t| t.id == trade.id) {
                trades.push(trade);
            }
        }
        trades
    }

    /// The pick movement of `trade` most relevant to this player
    fn relevant_movement(&self, trade: &Trade) -> Option<&PickMovement> {
        let moves: Vec<&PickMovement> = self
            .pick_movements
            .iter()
            .filter(|m| m.trade_id == trade.id)
            .collect();
        let draft_year = self.draft_pick.as_ref().map(|p| p.year);

        moves
            .iter()
            .find(|m| m.pick.pick_id.is_some() && m.pick.pick_id == self.acquisition.pick_id)
            .or_else(|| {
                moves
                    .iter()
                    .find(|m| m.to == self.team && Some(m.pick.year) == draft_year)
            })
            .or_else(|| moves.iter().find(|m| m.to == self.team))
            .copied()
    }

    fn trade_action(&self, trade: &Trade) -> String {
        if let Some(movement) = self.relevant_movement(trade) {
            return format!(
                "{} sent {} to {}",
                movement.from,
                movement.pick.label(),
                movement.to
            );
        }

        let is_direct = self.acquisition.trade_id == Some(trade.id);
        if is_direct && self.acquisition.acquisition_type == AcquisitionType::Trade {
            format!("Acquired {}", self.player_name)
        } else {
            "Trade completed".to_string()
        }
    }

    fn draft_step(&self) -> ChainStep {
        let number = self.draft_pick.as_ref().and_then(|p| p.number);
        let (event, action) = match number {
            Some(n) => (
                format!("{} draft {} #{}", self.team, self.player_name, n),
                format!("Selected with #{} pick", n),
            ),
            None => (
                format!("{} draft {}", self.team, self.player_name),
                "Selected in the draft".to_string(),
            ),
        };

        ChainStep {
            event,
            date: self.acquisition.date,
            action,
        }
    }
}

/// Derive the chain of steps leading from the origin trade to the player.
///
/// One step per distinct trade (origin first), followed by a draft step for
/// drafted players. Steps are sorted by date; ties keep that order. Earlier
/// movements of the pick belong to its ownership trail, not to the chain.
pub fn derive_chain(inputs: &ChainInputs) -> Vec<ChainStep> {
    let mut steps: Vec<ChainStep> = inputs
        .distinct_trades()
        .into_iter()
        .map(|trade| ChainStep {
            event: trade.description.clone(),
            date: trade.date,
            action: inputs.trade_action(trade),
        })
        .collect();

    if inputs.acquisition.acquisition_type == AcquisitionType::Draft {
        steps.push(inputs.draft_step());
    }

    steps.sort_by_key(|step| step.date);
    steps
}

/// Fail with `UnorderedChain` at the first step dated before its predecessor
pub fn ensure_chronological(steps: &[ChainStep]) -> Result<()> {
    for pair in steps.windows(2) {
        if pair[1].date < pair[0].date {
            return Err(TradeTreeError::UnorderedChain {
                earlier: pair[0].date.to_string(),
                later: pair[1].date.to_string(),
            });
        }
    }
    Ok(())
}
