fn main() {
    layla::app::cli::run();
}
