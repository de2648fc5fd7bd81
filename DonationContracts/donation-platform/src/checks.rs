use crate::errors::PlatformError;
use crate::types::*;

impl Campaign {
    pub fn is_goal_reached(&self) -> bool {
        self.received_amount >= self.goal_amount
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expiration_time
    }

    /// A campaign is finished once its goal is reached or its time is up.
    pub fn is_finished(&self, now: u64) -> bool {
        self.is_goal_reached() || self.is_expired(now)
    }

    pub fn funds_withdrawn(&self) -> bool {
        self.status == CampaignStatus::Withdrawn
    }

    /// Amount still missing to reach the goal.
    pub fn remaining_amount(&self) -> i128 {
        self.goal_amount - self.received_amount
    }

    pub fn phase(&self, now: u64) -> CampaignPhase {
        match self.status {
            CampaignStatus::Withdrawn => CampaignPhase::Withdrawn,
            CampaignStatus::GoalReached => CampaignPhase::GoalReached,
            CampaignStatus::Open if self.is_expired(now) => CampaignPhase::Expired,
            CampaignStatus::Open => CampaignPhase::Open,
        }
    }

    pub fn check_can_donate(&self, now: u64) -> Result<(), PlatformError> {
        if self.is_goal_reached() {
            return Err(PlatformError::GoalAlreadyReached);
        }
        if self.is_expired(now) {
            return Err(PlatformError::CampaignExpired);
        }
        Ok(())
    }

    pub fn check_can_withdraw(&self, now: u64) -> Result<(), PlatformError> {
        if !self.is_finished(now) {
            return Err(PlatformError::NotYetWithdrawable);
        }
        if self.funds_withdrawn() {
            return Err(PlatformError::AlreadyWithdrawn);
        }
        Ok(())
    }

    /// Splits `amount` into the part credited to the campaign and the excess
    /// returned to the donor.
    pub fn split_donation(&self, amount: i128) -> (i128, i128) {
        let credited = amount.min(self.remaining_amount());
        (credited, amount - credited)
    }

    /// Credits `amount` and moves the campaign to `GoalReached` when the goal
    /// is hit. Returns true only on that crossing.
    pub fn credit(&mut self, amount: i128) -> bool {
        self.received_amount += amount;
        if self.status == CampaignStatus::Open && self.is_goal_reached() {
            self.status = CampaignStatus::GoalReached;
            return true;
        }
        false
    }
}
