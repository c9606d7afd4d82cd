#![no_std]

multiversx_sc::imports!();

pub mod mock_weighted_pool_proxy;

// ============================================================
// Deterministic stand-in for an external weighted liquidity
// pool. Tests set balances and weights directly; the donation
// contract only ever reads them.
// ============================================================

#[multiversx_sc::contract]
pub trait MockWeightedPool {
    #[init]
    fn init(&self, balances: ManagedVec<BigUint>, weights: ManagedVec<BigUint>) {
        self.store(balances, weights);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Replaces the pool state, moving the spot price.
    #[endpoint(setPoolState)]
    fn set_pool_state(
        &self,
        balances: ManagedVec<BigUint>,
        weights: ManagedVec<BigUint>,
    ) {
        self.store(balances, weights);
    }

    #[view(getBalances)]
    fn get_balances(&self) -> MultiValueEncoded<BigUint> {
        let mut result = MultiValueEncoded::new();
        for balance in self.balances().iter() {
            result.push(balance);
        }
        result
    }

    #[view(getNormalizedWeights)]
    fn get_normalized_weights(&self) -> MultiValueEncoded<BigUint> {
        let mut result = MultiValueEncoded::new();
        for weight in self.weights().iter() {
            result.push(weight);
        }
        result
    }

    fn store(&self, balances: ManagedVec<BigUint>, weights: ManagedVec<BigUint>) {
        self.balances().clear();
        self.weights().clear();
        for balance in balances.iter() {
            self.balances().push(&*balance);
        }
        for weight in weights.iter() {
            self.weights().push(&*weight);
        }
    }

    #[storage_mapper("balances")]
    fn balances(&self) -> VecMapper<BigUint>;

    #[storage_mapper("weights")]
    fn weights(&self) -> VecMapper<BigUint>;
}
