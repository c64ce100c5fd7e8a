fn main() {
    multiversx_sc_meta_lib::cli_main::<launch_membership::AbiProvider>();
}
