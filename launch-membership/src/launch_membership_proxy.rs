use multiversx_sc::proxy_imports::*;

use crate::types::{FundMode, Role};

pub struct LaunchMembershipProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for LaunchMembershipProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = LaunchMembershipProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        LaunchMembershipProxyMethods { wrapped_tx: tx }
    }
}

pub struct LaunchMembershipProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> LaunchMembershipProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    pub fn init<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg6: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg7: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg8: ProxyArg<FundMode>,
        Arg9: ProxyArg<ManagedAddress<Env::Api>>,
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
        club_creator: Arg9,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&club_name)
            .argument(&club_description)
            .argument(&club_image)
            .argument(&membership_price)
            .argument(&membership_limit)
            .argument(&nft_name)
            .argument(&nft_symbol)
            .argument(&payment_token)
            .argument(&fund_mode)
            .argument(&club_creator)
            .original_result()
    }
}

impl<Env, From, To, Gas> LaunchMembershipProxyMethods<Env, From, To, Gas>
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

    pub fn purchase_membership(self) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("purchaseMembership")
            .original_result()
    }

    pub fn stake_tokens(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("stakeTokens").original_result()
    }

    pub fn unstake_tokens<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("unstakeTokens")
            .argument(&amount)
            .original_result()
    }

    pub fn claim_tokens<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimTokens")
            .argument(&amount)
            .original_result()
    }

    pub fn withdraw_tokens(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawTokens")
            .original_result()
    }

    pub fn withdraw_egld(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawEgld")
            .original_result()
    }

    pub fn update_club_info<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        club_name: Arg0,
        club_description: Arg1,
        club_image: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateClubInfo")
            .argument(&club_name)
            .argument(&club_description)
            .argument(&club_image)
            .original_result()
    }

    pub fn update_membership_price<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        new_price: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateMembershipPrice")
            .argument(&new_price)
            .original_result()
    }

    pub fn update_membership_limit<Arg0: ProxyArg<u64>>(
        self,
        new_limit: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateMembershipLimit")
            .argument(&new_limit)
            .original_result()
    }

    pub fn update_payment_token<Arg0: ProxyArg<TokenIdentifier<Env::Api>>>(
        self,
        new_token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updatePaymentToken")
            .argument(&new_token)
            .original_result()
    }

    pub fn add_moderator<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addModerator")
            .argument(&address)
            .original_result()
    }

    pub fn remove_moderator<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeModerator")
            .argument(&address)
            .original_result()
    }

    pub fn add_admin<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addAdmin")
            .argument(&address)
            .original_result()
    }

    pub fn remove_admin<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeAdmin")
            .argument(&address)
            .original_result()
    }

    pub fn is_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isMember")
            .argument(&address)
            .original_result()
    }

    pub fn has_role<Arg0: ProxyArg<Role>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        role: Arg0,
        address: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasRole")
            .argument(&role)
            .argument(&address)
            .original_result()
    }

    pub fn get_token_uri<Arg0: ProxyArg<u64>>(
        self,
        token_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTokenUri")
            .argument(&token_id)
            .original_result()
    }

    pub fn get_members<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMembers")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn club_name(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClubName")
            .original_result()
    }

    pub fn membership_price(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMembershipPrice")
            .original_result()
    }

    pub fn membership_limit(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMembershipLimit")
            .original_result()
    }

    pub fn total_members(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalMembers")
            .original_result()
    }

    pub fn payment_token(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPaymentToken")
            .original_result()
    }

    pub fn club_creator(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClubCreator")
            .original_result()
    }

    pub fn staked_tokens<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        member: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStakedTokens")
            .argument(&member)
            .original_result()
    }

    pub fn total_staked_tokens(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalStakedTokens")
            .original_result()
    }

    pub fn total_stored_tokens(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalStoredTokens")
            .original_result()
    }
}
