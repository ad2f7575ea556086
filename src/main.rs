fn main() -> std::process::ExitCode {
    review_exporter_lib::run()
}
