multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Fund Mode — how purchase payments are held
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FundMode {
    /// Payments sit in the contract balance. Admin withdraws the
    /// full balance as excess.
    Escrow,
    /// Each member keeps a staked balance with a floor equal to the
    /// membership price. Admin withdraws only the unstaked excess.
    Staking,
    /// Payments accumulate in a single pool owed to the club creator,
    /// claimable piecemeal by an admin.
    Pooled,
}

// ============================================================
// Roles
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    /// Required by every configuration and fund-movement endpoint.
    /// Seeded with the club creator at init.
    Admin,
    /// Grantable but gates nothing in this contract.
    Moderator,
}
