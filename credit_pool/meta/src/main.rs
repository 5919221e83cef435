fn main() {
    multiversx_sc_meta_lib::cli_main::<credit_pool::AbiProvider>();
}
