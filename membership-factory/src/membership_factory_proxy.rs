use multiversx_sc::proxy_imports::*;

use launch_membership::types::FundMode;

pub struct MembershipFactoryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for MembershipFactoryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = MembershipFactoryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        MembershipFactoryProxyMethods { wrapped_tx: tx }
    }
}

pub struct MembershipFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> MembershipFactoryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        template_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&template_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> MembershipFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn deploy_membership_contract<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg6: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg7: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg8: ProxyArg<FundMode>,
    >(
        self,
        club_name: Arg0,
        club_description: Arg1,
        club_image: Arg2,
        membership_price: Arg3,
        membership_limit: Arg4,
        nft_name: Arg5,
        nft_symbol: Arg6,
        payment_token: Arg7,
        fund_mode: Arg8,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("deployMembershipContract")
            .argument(&club_name)
            .argument(&club_description)
            .argument(&club_image)
            .argument(&membership_price)
            .argument(&membership_limit)
            .argument(&nft_name)
            .argument(&nft_symbol)
            .argument(&payment_token)
            .argument(&fund_mode)
            .original_result()
    }

    pub fn get_last_deployed_contract<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        creator: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastDeployedContract")
            .argument(&creator)
            .original_result()
    }

    pub fn get_deployed_contracts_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDeployedContractsCount")
            .original_result()
    }

    pub fn get_deployed_contract<Arg0: ProxyArg<u64>>(
        self,
        index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDeployedContract")
            .argument(&index)
            .original_result()
    }

    pub fn get_contracts_by_creator<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        creator: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractsByCreator")
            .argument(&creator)
            .original_result()
    }

    pub fn template_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTemplateAddress")
            .original_result()
    }
}
