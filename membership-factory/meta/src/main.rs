fn main() {
    multiversx_sc_meta_lib::cli_main::<membership_factory::AbiProvider>();
}
