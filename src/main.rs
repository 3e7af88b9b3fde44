fn main() {
    env_logger::init();
    nomen::cli::run();
}
