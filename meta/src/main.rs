fn main() {
    multiversx_sc_meta_lib::cli_main::<donation_rewards::AbiProvider>();
}
