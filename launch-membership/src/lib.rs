#![no_std]

multiversx_sc::imports!();

pub mod launch_membership_proxy;
pub mod membership_nft;
pub mod roles;
pub mod types;

use types::{FundMode, Role};

// ============================================================
// Launch Membership
//
// Issues membership NFT credentials for a club, paid for in a
// configured ESDT token. A single contract covers all three
// fund-handling strategies via the FundMode parameter:
// plain escrow, per-member staking, or a pooled custody balance
// claimable by an admin.
// ============================================================

#[multiversx_sc::contract]
pub trait LaunchMembership: roles::RolesModule + membership_nft::MembershipNftModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    #[allow(clippy::too_many_arguments)]
    fn init(
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
        club_creator: ManagedAddress,
    ) {
        self.require_valid_config(&membership_price, membership_limit, &payment_token);

        self.club_name().set(&club_name);
        self.club_description().set(&club_description);
        self.club_image().set(&club_image);
        self.membership_price().set(&membership_price);
        self.membership_limit().set(membership_limit);
        self.nft_name().set(&nft_name);
        self.nft_symbol().set(&nft_symbol);
        self.payment_token().set(&payment_token);
        self.fund_mode().set(fund_mode);
        self.club_creator().set(&club_creator);

        self.total_members().set(0u64);
        self.last_token_id().set(0u64);
        self.total_staked_tokens().set(BigUint::zero());
        self.total_stored_tokens().set(BigUint::zero());

        self.grant_role(Role::Admin, &club_creator);

        // Price history starts at zero for uniform off-chain indexing.
        self.price_updated_event(&BigUint::zero(), &membership_price);
    }

    #[upgrade]
    fn upgrade(&self) {}

    fn require_valid_config(
        &self,
        membership_price: &BigUint,
        membership_limit: u64,
        payment_token: &TokenIdentifier,
    ) {
        require!(*membership_price > 0u64, "Price must be greater than zero");
        require!(membership_limit > 0, "Limit must be greater than zero");
        require!(
            payment_token.is_valid_esdt_identifier(),
            "Invalid payment token"
        );
    }

    // ========================================================
    // ENDPOINT: purchaseMembership
    // Open to anyone not yet holding a credential, while the
    // member limit has room. Payment must be exactly the
    // membership price in the configured token.
    // ========================================================

    #[endpoint(purchaseMembership)]
    #[payable("*")]
    fn purchase_membership(&self) -> u64 {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        let price = self.membership_price().get();

        require!(price > 0u64, "Price must be greater than zero");
        require!(
            self.total_members().get() < self.membership_limit().get(),
            "Membership limit reached"
        );
        require!(
            self.membership_balance(&caller).get() == 0,
            "Membership already held"
        );
        require!(
            payment.token_identifier == self.payment_token().get(),
            "Invalid payment token"
        );
        require!(payment.amount == price, "Exact membership price required");

        let token_id = self.mint_membership_token(&caller);
        self.total_members().update(|total| *total += 1);
        self.members().insert(caller.clone());

        match self.fund_mode().get() {
            FundMode::Escrow => {}
            FundMode::Staking => {
                self.staked_tokens(&caller).update(|stake| *stake += &price);
                self.total_staked_tokens().update(|total| *total += &price);
                let new_stake = self.staked_tokens(&caller).get();
                self.tokens_staked_event(&caller, &price, &new_stake);
            }
            FundMode::Pooled => {
                self.total_stored_tokens().update(|total| *total += &price);
            }
        }

        self.membership_purchased_event(&caller, token_id, &price);

        token_id
    }

    // ========================================================
    // ENDPOINT: stakeTokens / unstakeTokens
    // Staking mode only. A member's stake may grow freely but
    // can never be drawn below the membership price.
    // ========================================================

    #[endpoint(stakeTokens)]
    #[payable("*")]
    fn stake_tokens(&self) {
        require!(
            self.fund_mode().get() == FundMode::Staking,
            "Staking not enabled"
        );

        let caller = self.blockchain().get_caller();
        require!(
            self.membership_balance(&caller).get() > 0,
            "Only members can stake"
        );

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.payment_token().get(),
            "Invalid payment token"
        );
        require!(payment.amount > 0u64, "Amount must be greater than zero");

        self.staked_tokens(&caller)
            .update(|stake| *stake += &payment.amount);
        self.total_staked_tokens()
            .update(|total| *total += &payment.amount);

        let new_stake = self.staked_tokens(&caller).get();
        self.tokens_staked_event(&caller, &payment.amount, &new_stake);
    }

    #[endpoint(unstakeTokens)]
    fn unstake_tokens(&self, amount: BigUint) {
        require!(
            self.fund_mode().get() == FundMode::Staking,
            "Staking not enabled"
        );

        let caller = self.blockchain().get_caller();
        require!(
            self.membership_balance(&caller).get() > 0,
            "Only members can unstake"
        );
        require!(amount > 0u64, "Amount must be greater than zero");

        let stake = self.staked_tokens(&caller).get();
        require!(amount <= stake, "Insufficient staked balance");

        let remaining = &stake - &amount;
        require!(
            remaining >= self.membership_price().get(),
            "Stake cannot drop below membership price"
        );

        self.staked_tokens(&caller).set(&remaining);
        self.total_staked_tokens().update(|total| *total -= &amount);

        self.send()
            .direct_esdt(&caller, &self.payment_token().get(), 0, &amount);

        self.tokens_unstaked_event(&caller, &amount, &remaining);
    }

    // ========================================================
    // ENDPOINT: claimTokens
    // Pooled mode only. Admin draws from the stored pool to the
    // club creator, piecemeal.
    // ========================================================

    #[endpoint(claimTokens)]
    fn claim_tokens(&self, amount: BigUint) {
        self.require_admin();
        require!(
            self.fund_mode().get() == FundMode::Pooled,
            "Pooled custody not enabled"
        );
        require!(amount > 0u64, "Amount must be greater than zero");

        let stored = self.total_stored_tokens().get();
        require!(amount <= stored, "Insufficient stored balance");

        self.total_stored_tokens().set(&stored - &amount);

        let creator = self.club_creator().get();
        self.send()
            .direct_esdt(&creator, &self.payment_token().get(), 0, &amount);

        self.tokens_claimed_event(&creator, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawTokens
    // Escrow/Staking mode. Sends the contract's payment-token
    // balance above the aggregate stake to the club creator.
    // ========================================================

    #[endpoint(withdrawTokens)]
    fn withdraw_tokens(&self) {
        self.require_admin();
        require!(
            self.fund_mode().get() != FundMode::Pooled,
            "Pooled custody not enabled"
        );

        let token = self.payment_token().get();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        let staked = self.total_staked_tokens().get();
        require!(balance > staked, "Nothing to withdraw");

        let excess = balance - staked;
        let creator = self.club_creator().get();
        self.send().direct_esdt(&creator, &token, 0, &excess);

        self.tokens_withdrawn_event(&creator, &excess);
    }

    // ========================================================
    // ENDPOINT: withdrawEgld
    // Rescue hatch for EGLD sent to the contract by accident.
    // Unrelated to membership economics.
    // ========================================================

    #[endpoint(withdrawEgld)]
    fn withdraw_egld(&self) {
        self.require_admin();

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(balance > 0u64, "Nothing to withdraw");

        let creator = self.club_creator().get();
        self.send().direct_egld(&creator, &balance);

        self.egld_withdrawn_event(&creator, &balance);
    }

    // ========================================================
    // Admin configuration
    // ========================================================

    #[endpoint(updateClubInfo)]
    fn update_club_info(
        &self,
        club_name: ManagedBuffer,
        club_description: ManagedBuffer,
        club_image: ManagedBuffer,
    ) {
        self.require_admin();

        self.club_name().set(&club_name);
        self.club_description().set(&club_description);
        self.club_image().set(&club_image);

        self.club_info_updated_event(&club_name, &club_description, &club_image);
    }

    #[endpoint(updateMembershipPrice)]
    fn update_membership_price(&self, new_price: BigUint) {
        self.require_admin();
        require!(new_price > 0u64, "Price must be greater than zero");

        let old_price = self.membership_price().get();
        self.membership_price().set(&new_price);

        self.price_updated_event(&old_price, &new_price);
    }

    #[endpoint(updateMembershipLimit)]
    fn update_membership_limit(&self, new_limit: u64) {
        self.require_admin();
        require!(new_limit > 0, "Limit must be greater than zero");
        require!(
            new_limit >= self.total_members().get(),
            "Limit below current member count"
        );

        let old_limit = self.membership_limit().get();
        self.membership_limit().set(new_limit);

        self.limit_updated_event(old_limit, new_limit);
    }

    #[endpoint(updatePaymentToken)]
    fn update_payment_token(&self, new_token: TokenIdentifier) {
        self.require_admin();
        require!(
            new_token.is_valid_esdt_identifier(),
            "Invalid payment token"
        );
        // Switching while tracked funds are held would orphan them
        // against the new token's balance checks.
        require!(
            self.total_staked_tokens().get() == 0u64
                && self.total_stored_tokens().get() == 0u64,
            "Cannot change payment token while funds are held"
        );

        let old_token = self.payment_token().get();
        self.payment_token().set(&new_token);

        self.payment_token_updated_event(&old_token, &new_token);
    }

    #[endpoint(addModerator)]
    fn add_moderator(&self, address: ManagedAddress) {
        self.require_admin();
        self.grant_role(Role::Moderator, &address);
        self.moderator_added_event(&address);
    }

    #[endpoint(removeModerator)]
    fn remove_moderator(&self, address: ManagedAddress) {
        self.require_admin();
        self.revoke_role(Role::Moderator, &address);
        self.moderator_removed_event(&address);
    }

    #[endpoint(addAdmin)]
    fn add_admin(&self, address: ManagedAddress) {
        self.require_admin();
        self.grant_role(Role::Admin, &address);
        self.admin_added_event(&address);
    }

    #[endpoint(removeAdmin)]
    fn remove_admin(&self, address: ManagedAddress) {
        self.require_admin();
        require!(
            self.role_members(Role::Admin).len() > 1,
            "Cannot remove last admin"
        );
        self.revoke_role(Role::Admin, &address);
        self.admin_removed_event(&address);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getTokenUri)]
    fn get_token_uri(&self, token_id: u64) -> ManagedBuffer {
        require!(self.token_exists(token_id), "Token does not exist");

        let json = self.build_metadata_json(
            &self.club_name().get(),
            &self.club_description().get(),
            &self.club_image().get(),
            token_id,
        );

        let mut uri = ManagedBuffer::new_from_bytes(b"data:application/json;base64,");
        uri.append(&self.base64_encode(&json));
        uri
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.members().len();
        let start = from as usize;
        let end = core::cmp::min(start + count as usize, total);

        for (idx, member) in self.members().iter().enumerate() {
            if idx >= start && idx < end {
                result.push(member);
            }
            if idx >= end {
                break;
            }
        }
        result
    }

    #[view(getClubConfig)]
    fn get_club_config(
        &self,
    ) -> MultiValue5<ManagedBuffer, BigUint, u64, u64, TokenIdentifier> {
        (
            self.club_name().get(),
            self.membership_price().get(),
            self.membership_limit().get(),
            self.total_members().get(),
            self.payment_token().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("membershipPurchased")]
    fn membership_purchased_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] token_id: u64,
        price: &BigUint,
    );

    #[event("clubInfoUpdated")]
    fn club_info_updated_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] description: &ManagedBuffer,
        image: &ManagedBuffer,
    );

    #[event("priceUpdated")]
    fn price_updated_event(&self, #[indexed] old_price: &BigUint, new_price: &BigUint);

    #[event("limitUpdated")]
    fn limit_updated_event(&self, #[indexed] old_limit: u64, new_limit: u64);

    #[event("paymentTokenUpdated")]
    fn payment_token_updated_event(
        &self,
        #[indexed] old_token: &TokenIdentifier,
        new_token: &TokenIdentifier,
    );

    #[event("tokensStaked")]
    fn tokens_staked_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_stake: &BigUint,
    );

    #[event("tokensUnstaked")]
    fn tokens_unstaked_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_stake: &BigUint,
    );

    #[event("tokensClaimed")]
    fn tokens_claimed_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("tokensWithdrawn")]
    fn tokens_withdrawn_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("egldWithdrawn")]
    fn egld_withdrawn_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("moderatorAdded")]
    fn moderator_added_event(&self, #[indexed] address: &ManagedAddress);

    #[event("moderatorRemoved")]
    fn moderator_removed_event(&self, #[indexed] address: &ManagedAddress);

    #[event("adminAdded")]
    fn admin_added_event(&self, #[indexed] address: &ManagedAddress);

    #[event("adminRemoved")]
    fn admin_removed_event(&self, #[indexed] address: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Club configuration ──

    #[view(getClubName)]
    #[storage_mapper("clubName")]
    fn club_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getClubDescription)]
    #[storage_mapper("clubDescription")]
    fn club_description(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getClubImage)]
    #[storage_mapper("clubImage")]
    fn club_image(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getMembershipPrice)]
    #[storage_mapper("membershipPrice")]
    fn membership_price(&self) -> SingleValueMapper<BigUint>;

    #[view(getMembershipLimit)]
    #[storage_mapper("membershipLimit")]
    fn membership_limit(&self) -> SingleValueMapper<u64>;

    #[view(getPaymentToken)]
    #[storage_mapper("paymentToken")]
    fn payment_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getFundMode)]
    #[storage_mapper("fundMode")]
    fn fund_mode(&self) -> SingleValueMapper<FundMode>;

    #[view(getClubCreator)]
    #[storage_mapper("clubCreator")]
    fn club_creator(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Membership state ──

    #[view(getTotalMembers)]
    #[storage_mapper("totalMembers")]
    fn total_members(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Funds ledger ──

    #[view(getStakedTokens)]
    #[storage_mapper("stakedTokens")]
    fn staked_tokens(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalStakedTokens)]
    #[storage_mapper("totalStakedTokens")]
    fn total_staked_tokens(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalStoredTokens)]
    #[storage_mapper("totalStoredTokens")]
    fn total_stored_tokens(&self) -> SingleValueMapper<BigUint>;
}
