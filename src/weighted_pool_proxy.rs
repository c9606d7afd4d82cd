use multiversx_sc::proxy_imports::*;

pub struct WeightedPoolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for WeightedPoolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = WeightedPoolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        WeightedPoolProxyMethods { wrapped_tx: tx }
    }
}

pub struct WeightedPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> WeightedPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Token balances held by the pool, in pool asset order.
    pub fn get_balances(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBalances")
            .original_result()
    }

    /// Normalized weights (summing to 10^18), in pool asset order.
    pub fn get_normalized_weights(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNormalizedWeights")
            .original_result()
    }
}
