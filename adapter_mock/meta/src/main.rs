fn main() {
    multiversx_sc_meta_lib::cli_main::<adapter_mock::AbiProvider>();
}
