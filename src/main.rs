fn main() {
    pss_bin::main();
}
