fn main() {
    n8n_setup::app::cli::run();
}
