fn main() {
    arraygen::app::cli::run();
}
