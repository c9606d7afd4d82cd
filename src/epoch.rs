multiversx_sc::imports!();

use crate::errors::ERROR_EPOCH_NOT_OVER;
use crate::math;
use crate::types::{Epoch, EpochParams, EpochPhase};

#[multiversx_sc::module]
pub trait EpochModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::access::AccessControlModule
    + crate::oracle::OracleModule
    + crate::rewards::RewardsModule
{
    // ========================================================
    // ENDPOINT: endEpoch
    // Anyone can finalize once the epoch length has elapsed.
    // Transitions Closeable → finalized, opens the next epoch.
    // ========================================================

    #[endpoint(endEpoch)]
    fn end_epoch(&self) {
        let now = self.blockchain().get_block_timestamp();
        let mut epoch = self.current_epoch_record();
        require!(epoch.is_over(now), ERROR_EPOCH_NOT_OVER);

        self.settle_epoch(&mut epoch);
        epoch.finalized = true;
        epoch.finalized_at = now;
        self.epochs(epoch.index).set(&epoch);
        self.epoch_ended_event(epoch.index, &epoch.total_donations, &epoch.distributed, now);

        // Keep the cadence inside the checkpoint window as long as the next
        // epoch would not open already over; otherwise restart it from now.
        let params = self.pending_params().get();
        let nominal_end = epoch.nominal_end();
        let on_time = now <= nominal_end.saturating_add(epoch.max_checkpoint_delay)
            && now < nominal_end.saturating_add(params.epoch_length);
        let next_start = if on_time {
            nominal_end
        } else {
            self.epoch_checkpoint_late_event(epoch.index, nominal_end, now);
            now
        };

        self.open_epoch(epoch.index + 1, next_start, &params);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Elapsed share of the current epoch in basis points (10_000 = over).
    #[view(getEpochProgress)]
    fn get_epoch_progress(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let epoch = self.current_epoch_record();
        math::progress_bps(epoch.elapsed(now), epoch.length)
    }

    /// Seconds of block time left before endEpoch becomes callable.
    #[view(getBlocksRemaining)]
    fn get_blocks_remaining(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let epoch = self.current_epoch_record();
        epoch.length.saturating_sub(epoch.elapsed(now))
    }

    #[view(getEpochState)]
    fn get_epoch_state(&self) -> EpochPhase {
        let now = self.blockchain().get_block_timestamp();
        let epoch = self.current_epoch_record();
        if !self.can_play_game() {
            EpochPhase::AwaitingEligibility
        } else if epoch.is_over(now) {
            EpochPhase::Closeable
        } else {
            EpochPhase::Open
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn open_epoch(&self, index: u64, start_timestamp: u64, params: &EpochParams<Self::Api>) {
        let epoch = Epoch::open(index, start_timestamp, params);

        self.epochs(index).set(&epoch);
        self.current_epoch().set(index);
        self.epoch_opened_event(index, start_timestamp, &epoch.available_rewards);
    }
}
