//! Turn engine: action dispatch, end-of-action checks and hazard resolution.

use super::*;

impl<R: RoomRng> Game<R> {
    /// Resolves one action completely, including any chain of bat carries.
    pub fn apply(&mut self, action: Action) -> Result<TurnReport, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::RoundFinished);
        }

        let mut report = TurnReport::default();
        match action {
            Action::Quit => return Ok(self.finish(RoundOutcome::Quit, report)),
            Action::Restart => return Ok(self.finish(RoundOutcome::Restart, report)),
            Action::Move { to } => {
                self.turn += 1;
                self.move_player(to);
            }
            Action::Shoot { path } => {
                self.turn += 1;
                let shot = self.shoot(&path);
                report.shot = Some(shot);
                if shot.impact == self.state.player.room {
                    return Ok(self.finish(RoundOutcome::Lost(DeathCause::OwnArrow), report));
                }
            }
        }

        if let Some(outcome) = self.post_action_outcome() {
            return Ok(self.finish(outcome, report));
        }
        if let Some(outcome) = self.resolve_hazards(&mut report) {
            return Ok(self.finish(outcome, report));
        }
        Ok(report)
    }

    /// Fires one arrow. A shot that comes back into the shooter's room
    /// leaves the creatures untouched; every other shot removes the creature
    /// it lands on and then lets the survivors wander.
    fn shoot(&mut self, path: &[u32]) -> ShotReport {
        self.state.player.spend_arrow();
        self.log.push(LogEvent::ArrowFired { path_len: path.len() });

        let shooter = self.state.player.room;
        let Trajectory { impact, flight } = resolve_trajectory(
            &self.state.cave,
            &self.state.hazards,
            shooter,
            path,
            &mut self.rng,
        );
        self.log.push(LogEvent::ArrowLanded { impact, flight });

        if impact == shooter {
            return ShotReport { impact, flight, slain: false };
        }

        let slain = self.state.hazards.remove_creature(impact);
        if slain {
            self.log.push(LogEvent::CreatureSlain { room: impact });
        }
        self.relocate_creatures();
        ShotReport { impact, flight, slain }
    }

    fn post_action_outcome(&self) -> Option<RoundOutcome> {
        if self.state.hazards.creatures().is_empty() {
            return Some(RoundOutcome::Won);
        }
        if self.state.player.arrows == 0 {
            return Some(RoundOutcome::Lost(DeathCause::OutOfArrows));
        }
        None
    }

    /// Creatures and pits end the round. Bats drop the player into any room
    /// of the cave, hazardous or not, and the new room is checked again.
    fn resolve_hazards(&mut self, report: &mut TurnReport) -> Option<RoundOutcome> {
        let rooms: Vec<Room> = Room::all().collect();
        loop {
            let room = self.state.player.room;
            let hazards = &self.state.hazards;
            if hazards.has_creature(room) {
                return Some(RoundOutcome::Lost(DeathCause::Creature));
            }
            if hazards.has_pit(room) {
                return Some(RoundOutcome::Lost(DeathCause::Pit));
            }
            if !hazards.has_bat(room) {
                return None;
            }

            let landing = self.rng.pick(&rooms);
            self.state.player.move_to(landing);
            self.log.push(LogEvent::BatCarried { from: room, to: landing });
            report.bat_drops.push(landing);
        }
    }

    fn finish(&mut self, outcome: RoundOutcome, mut report: TurnReport) -> TurnReport {
        self.outcome = Some(outcome);
        self.log.push(LogEvent::RoundEnded { outcome });
        report.outcome = Some(outcome);
        report
    }
}
