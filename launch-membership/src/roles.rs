multiversx_sc::imports!();

use crate::types::Role;

// ============================================================
// Role registry — explicit role sets held by the contract
// itself instead of an inherited access-control base.
// ============================================================

#[multiversx_sc::module]
pub trait RolesModule {
    fn grant_role(&self, role: Role, address: &ManagedAddress) -> bool {
        self.role_members(role).insert(address.clone())
    }

    fn revoke_role(&self, role: Role, address: &ManagedAddress) -> bool {
        self.role_members(role).swap_remove(address)
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.role_members(Role::Admin).contains(&caller),
            "Only admin can call this"
        );
    }

    #[view(hasRole)]
    fn has_role(&self, role: Role, address: ManagedAddress) -> bool {
        self.role_members(role).contains(&address)
    }

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}
