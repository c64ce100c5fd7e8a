multiversx_sc::imports!();

// ============================================================
// Membership NFT ledger — contract-local mint/ownership records
// instead of an inherited token base. One credential per holder,
// ids dense and sequential from 1, never reused. There is no
// transfer or burn path; a credential stays with its purchaser.
// ============================================================

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Input batch size for base64 encoding. Must be a multiple of 3 so
/// that padding can only occur in the final batch.
const BASE64_BATCH_SIZE: usize = 30;

#[multiversx_sc::module]
pub trait MembershipNftModule {
    /// Mints the next sequential token id to `to` and returns it.
    fn mint_membership_token(&self, to: &ManagedAddress) -> u64 {
        let token_id = self.last_token_id().get() + 1;
        self.last_token_id().set(token_id);
        self.token_owner(token_id).set(to);
        self.membership_balance(to).update(|b| *b += 1);
        token_id
    }

    fn token_exists(&self, token_id: u64) -> bool {
        token_id >= 1 && token_id <= self.last_token_id().get()
    }

    #[view(isMember)]
    fn is_member(&self, address: ManagedAddress) -> bool {
        self.membership_balance(&address).get() > 0
    }

    // ========================================================
    // Metadata rendering
    // ========================================================

    /// Builds the token metadata document:
    /// `{"name":"<club> #<id>","description":...,"image":...,
    ///   "attributes":[{"trait_type":"Club","value":"<club>"}]}`
    fn build_metadata_json(
        &self,
        club_name: &ManagedBuffer,
        club_description: &ManagedBuffer,
        club_image: &ManagedBuffer,
        token_id: u64,
    ) -> ManagedBuffer {
        let mut json = ManagedBuffer::new();
        json.append_bytes(b"{\"name\":\"");
        json.append(club_name);
        json.append_bytes(b" #");
        self.append_decimal(&mut json, token_id);
        json.append_bytes(b"\",\"description\":\"");
        json.append(club_description);
        json.append_bytes(b"\",\"image\":\"");
        json.append(club_image);
        json.append_bytes(b"\",\"attributes\":[{\"trait_type\":\"Club\",\"value\":\"");
        json.append(club_name);
        json.append_bytes(b"\"}]}");
        json
    }

    /// Appends `value` in decimal, no leading zeros, single "0" case.
    fn append_decimal(&self, buffer: &mut ManagedBuffer, value: u64) {
        if value == 0 {
            buffer.append_bytes(b"0");
            return;
        }
        let mut digits = [0u8; 20];
        let mut start = digits.len();
        let mut remaining = value;
        while remaining > 0 {
            start -= 1;
            digits[start] = b'0' + (remaining % 10) as u8;
            remaining /= 10;
        }
        buffer.append_bytes(&digits[start..]);
    }

    fn base64_encode(&self, input: &ManagedBuffer) -> ManagedBuffer {
        let mut encoded = ManagedBuffer::new();
        let input_len = input.len();
        let mut chunk = [0u8; BASE64_BATCH_SIZE];
        let mut offset = 0usize;

        while offset < input_len {
            let chunk_len = core::cmp::min(BASE64_BATCH_SIZE, input_len - offset);
            if input.load_slice(offset, &mut chunk[..chunk_len]).is_err() {
                sc_panic!("Metadata encoding failed");
            }

            let mut out = [0u8; BASE64_BATCH_SIZE / 3 * 4];
            let mut out_len = 0;
            for group in chunk[..chunk_len].chunks(3) {
                let b0 = group[0] as u32;
                let b1 = if group.len() > 1 { group[1] as u32 } else { 0 };
                let b2 = if group.len() > 2 { group[2] as u32 } else { 0 };
                let triple = (b0 << 16) | (b1 << 8) | b2;

                out[out_len] = BASE64_ALPHABET[(triple >> 18) as usize & 0x3f];
                out[out_len + 1] = BASE64_ALPHABET[(triple >> 12) as usize & 0x3f];
                out[out_len + 2] = if group.len() > 1 {
                    BASE64_ALPHABET[(triple >> 6) as usize & 0x3f]
                } else {
                    b'='
                };
                out[out_len + 3] = if group.len() > 2 {
                    BASE64_ALPHABET[triple as usize & 0x3f]
                } else {
                    b'='
                };
                out_len += 4;
            }
            encoded.append_bytes(&out[..out_len]);

            offset += chunk_len;
        }
        encoded
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getNftName)]
    #[storage_mapper("nftName")]
    fn nft_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getNftSymbol)]
    #[storage_mapper("nftSymbol")]
    fn nft_symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getLastTokenId)]
    #[storage_mapper("lastTokenId")]
    fn last_token_id(&self) -> SingleValueMapper<u64>;

    #[view(getTokenOwner)]
    #[storage_mapper("tokenOwner")]
    fn token_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[view(getMembershipBalance)]
    #[storage_mapper("membershipBalance")]
    fn membership_balance(&self, address: &ManagedAddress) -> SingleValueMapper<u64>;
}
