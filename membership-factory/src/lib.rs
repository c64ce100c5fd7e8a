#![no_std]

multiversx_sc::imports!();

pub mod membership_factory_proxy;

use launch_membership::launch_membership_proxy;
use launch_membership::types::FundMode;

// ============================================================
// Membership Factory
//
// Deploys launch-membership contracts from a template's code and
// keeps an append-only registry of every deployment, plus a
// per-creator index so creator lookups never scan the full
// sequence. The factory never mediates post-deployment calls.
// ============================================================

#[multiversx_sc::contract]
pub trait MembershipFactory {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, template_address: ManagedAddress) {
        self.template_address().set(&template_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deployMembershipContract
    // Open to any caller. Parameter checks duplicate the child's
    // own init checks; a child init failure reverts the whole
    // factory call.
    // ========================================================

    #[endpoint(deployMembershipContract)]
    #[allow(clippy::too_many_arguments)]
    fn deploy_membership_contract(
        &self,
        club_name: ManagedBuffer,
        club_description: ManagedBuffer,
        club_image: ManagedBuffer,
        membership_price: BigUint,
        membership_limit: u64,
        nft_name: ManagedBuffer,
        nft_symbol: ManagedBuffer,
        payment_token: TokenIdentifier,
        fund_mode: FundMode,
    ) -> ManagedAddress {
        require!(
            membership_price > 0u64,
            "Price must be greater than zero"
        );
        require!(membership_limit > 0, "Limit must be greater than zero");
        require!(
            payment_token.is_valid_esdt_identifier(),
            "Invalid payment token"
        );

        let caller = self.blockchain().get_caller();

        let new_address = self
            .tx()
            .typed(launch_membership_proxy::LaunchMembershipProxy)
            .init(
                club_name.clone(),
                club_description,
                club_image,
                membership_price.clone(),
                membership_limit,
                nft_name,
                nft_symbol,
                payment_token,
                fund_mode,
                caller.clone(),
            )
            .from_source(self.template_address().get())
            .code_metadata(
                CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE,
            )
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.last_deployed(&caller).set(&new_address);
        self.deployed_contracts().push(&new_address);
        self.creator_contracts(&caller).push(&new_address);

        self.contract_deployed_event(
            &caller,
            &new_address,
            &club_name,
            &membership_price,
            membership_limit,
        );

        new_address
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// Zero address if the creator has never deployed.
    #[view(getLastDeployedContract)]
    fn get_last_deployed_contract(&self, creator: ManagedAddress) -> ManagedAddress {
        let mapper = self.last_deployed(&creator);
        if mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            mapper.get()
        }
    }

    #[view(getDeployedContractsCount)]
    fn get_deployed_contracts_count(&self) -> u64 {
        self.deployed_contracts().len() as u64
    }

    #[view(getDeployedContract)]
    fn get_deployed_contract(&self, index: u64) -> ManagedAddress {
        let count = self.deployed_contracts().len() as u64;
        require!(index < count, "Index out of bounds");
        self.deployed_contracts().get(index as usize + 1)
    }

    #[view(getContractsByCreator)]
    fn get_contracts_by_creator(
        &self,
        creator: ManagedAddress,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let mapper = self.creator_contracts(&creator);
        for i in 1..=mapper.len() {
            result.push(mapper.get(i));
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contractDeployed")]
    fn contract_deployed_event(
        &self,
        #[indexed] creator: &ManagedAddress,
        #[indexed] contract_address: &ManagedAddress,
        #[indexed] club_name: &ManagedBuffer,
        #[indexed] membership_price: &BigUint,
        membership_limit: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getTemplateAddress)]
    #[storage_mapper("templateAddress")]
    fn template_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Append-only; insertion order is deployment order.
    #[storage_mapper("deployedContracts")]
    fn deployed_contracts(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("lastDeployed")]
    fn last_deployed(&self, creator: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    /// Secondary index maintained at deployment time so that
    /// creator lookups stay proportional to the creator's own
    /// deployments.
    #[storage_mapper("creatorContracts")]
    fn creator_contracts(&self, creator: &ManagedAddress) -> VecMapper<ManagedAddress>;
}
